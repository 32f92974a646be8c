//! Pure entropy-based word selection
//!
//! Selects the candidate that maximizes Shannon entropy (expected information gain).

use super::calculator::entropies_of;
use crate::core::Word;
use crate::error::{Error, Result};

/// A selected guess with the entropy that justified it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestGuess<'a> {
    pub word: &'a Word,
    /// `None` when no entropy computation was needed (a single candidate)
    pub entropy: Option<f64>,
}

/// Select the best guess among the candidates by maximizing entropy
///
/// Every candidate is scored against all other candidates. Ties go to the
/// candidate that appears first in `candidates`.
///
/// With a single candidate that candidate is returned without scoring.
///
/// # Errors
/// Returns `Error::EmptyCandidateSet` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::entropy::select_best_guess;
///
/// let candidates: Vec<Word> = ["abc", "axx", "xbx", "xxc", "xxx"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let best = select_best_guess(&candidates).unwrap();
/// assert_eq!(best.word.text(), "abc");
/// assert!((best.entropy.unwrap() - 2.0).abs() < 1e-9);
/// ```
pub fn select_best_guess(candidates: &[Word]) -> Result<BestGuess<'_>> {
    let first = candidates.first().ok_or(Error::EmptyCandidateSet)?;

    if candidates.len() == 1 {
        return Ok(BestGuess {
            word: first,
            entropy: None,
        });
    }

    let table = entropies_of(candidates);
    Ok(table.best().map_or(
        BestGuess {
            word: first,
            entropy: None,
        },
        |(entropy, word)| BestGuess {
            word,
            entropy: Some(entropy),
        },
    ))
}

/// Word expected to eliminate the most remaining candidates
///
/// # Errors
/// Returns `Error::EmptyCandidateSet` if `candidates` is empty.
pub fn next_best_guess(candidates: &[Word]) -> Result<&Word> {
    select_best_guess(candidates).map(|best| best.word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        // QQQ learns nothing; ABC and AXX both reach 2 bits and ABC comes first
        let candidates = words(&["qqq", "abc", "axx", "xbx", "xxc"]);

        let best = select_best_guess(&candidates).unwrap();
        assert_eq!(best.word.text(), "abc");
        assert!((best.entropy.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn single_candidate_skips_scoring() {
        let candidates = words(&["slate"]);

        let best = select_best_guess(&candidates).unwrap();
        assert_eq!(best.word.text(), "slate");
        assert_eq!(best.entropy, None);
    }

    #[test]
    fn ties_resolved_by_candidate_order() {
        // Every word sees the others as all-absent, so all score 0 bits
        let forward = words(&["ccc", "aaa", "bbb"]);
        let reversed = words(&["bbb", "aaa", "ccc"]);

        assert_eq!(next_best_guess(&forward).unwrap().text(), "ccc");
        assert_eq!(next_best_guess(&reversed).unwrap().text(), "bbb");
    }

    #[test]
    fn two_candidates_pick_the_first() {
        let candidates = words(&["irate", "crate"]);

        let best = select_best_guess(&candidates).unwrap();
        assert_eq!(best.word.text(), "irate");
        assert_eq!(best.entropy, Some(0.0));
    }

    #[test]
    fn deterministic_across_runs() {
        let candidates = words(&["crane", "slate", "irate", "crate", "grate", "trace"]);

        let first = next_best_guess(&candidates).unwrap();
        for _ in 0..5 {
            assert_eq!(next_best_guess(&candidates).unwrap(), first);
        }
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let candidates: Vec<Word> = vec![];
        assert!(matches!(
            next_best_guess(&candidates),
            Err(Error::EmptyCandidateSet)
        ));
    }
}
