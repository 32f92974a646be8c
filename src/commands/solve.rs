//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::session::{SessionConfig, play_game};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    /// Candidates left if the guess achieved exactly its entropy
    pub expected_remaining: Option<f64>,
}

/// Solve `target` by self-play over `lexicon`
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word of the configured size
/// - The target is not in the lexicon
pub fn solve_word(target: &str, lexicon: &[Word], config: SessionConfig) -> Result<SolveResult> {
    let target = Word::with_size(target, config.word_size)?;

    if !lexicon.contains(&target) {
        return Err(Error::UnknownWord(target.text().to_string()));
    }

    let report = play_game(lexicon, &target, config)?;

    let guesses = report
        .turns
        .iter()
        .map(|turn| GuessStep {
            word: turn.guess.clone(),
            pattern: turn.pattern,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
            entropy: turn.entropy,
            expected_remaining: turn
                .entropy
                .map(|bits| turn.candidates_before as f64 / bits.exp2()),
        })
        .collect();

    Ok(SolveResult {
        success: report.is_solved(),
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    const LEXICON: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "plate", "trace", "brave", "shale", "stale",
    ];

    #[test]
    fn solve_word_succeeds() {
        let lexicon = words_from_slice(LEXICON, 5);

        let result = solve_word("grate", &lexicon, SessionConfig::new(5)).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().word.text(), "grate");
        assert!(result.guesses.last().unwrap().pattern.is_perfect(5));
    }

    #[test]
    fn solve_records_history() {
        let lexicon = words_from_slice(LEXICON, 5);

        let result = solve_word("shale", &lexicon, SessionConfig::self_play(5)).unwrap();

        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses[0].candidates_before, LEXICON.len());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn expected_remaining_follows_entropy() {
        let lexicon = words_from_slice(LEXICON, 5);

        let result = solve_word("brave", &lexicon, SessionConfig::self_play(5)).unwrap();
        let first = &result.guesses[0];
        let bits = first.entropy.unwrap();

        let expected = first.expected_remaining.unwrap();
        assert!((expected - LEXICON.len() as f64 / bits.exp2()).abs() < 1e-9);
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let lexicon = words_from_slice(LEXICON, 5);

        let result = solve_word("zzzzz", &lexicon, SessionConfig::self_play(5));
        assert!(matches!(result, Err(Error::UnknownWord(_))));
    }

    #[test]
    fn solve_wrong_length_returns_error() {
        let lexicon = words_from_slice(LEXICON, 5);

        let result = solve_word("cat", &lexicon, SessionConfig::self_play(5));
        assert!(matches!(result, Err(Error::InvalidWord(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let lexicon = words_from_slice(&["aaa", "bbb", "ccc", "ddd"], 3);
        let config = SessionConfig::new(3).with_max_guesses(Some(2));

        let result = solve_word("ddd", &lexicon, config).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 2);
    }
}
