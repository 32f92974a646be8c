//! Candidate pruning from observed feedback

use crate::core::{Pattern, Word};

/// Keep the candidates that would have produced `pattern` for `guess`
///
/// Returns a new candidate set in the original order; the input is untouched.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Pattern, Word};
/// use wordle_assistant::solver::filter_by_pattern;
///
/// let candidates: Vec<Word> = ["irate", "crate", "grate", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::calculate(&guess, &candidates[2]);
///
/// let remaining = filter_by_pattern(observed, &guess, &candidates);
/// assert!(remaining.iter().any(|w| w.text() == "grate"));
/// assert!(remaining.iter().all(|w| w.text() != "crate"));
/// ```
#[must_use]
pub fn filter_by_pattern(pattern: Pattern, guess: &Word, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == pattern)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn filter_exact_match() {
        let candidates = words(&["irate", "crate", "grate"]);
        let guess = Word::new("irate").unwrap();

        let remaining = filter_by_pattern(Pattern::perfect(5), &guess, &candidates);
        assert_eq!(remaining, words(&["irate"]));
    }

    #[test]
    fn filter_preserves_order() {
        let candidates = words(&["grate", "slate", "irate", "crate"]);
        let guess = Word::new("zzzzz").unwrap();

        // Nobody has a Z, so everything survives an all-absent pattern
        let remaining = filter_by_pattern(Pattern::EMPTY, &guess, &candidates);
        assert_eq!(remaining, candidates);
    }

    #[test]
    fn filter_can_empty_the_set() {
        let candidates = words(&["irate", "crate"]);
        let guess = Word::new("zzzzz").unwrap();

        assert!(filter_by_pattern(Pattern::perfect(5), &guess, &candidates).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let candidates = words(&["crane", "slate", "irate", "crate", "grate", "trace", "plate"]);
        let guess = Word::new("slate").unwrap();
        let secret = Word::new("plate").unwrap();
        let observed = Pattern::calculate(&guess, &secret);

        let once = filter_by_pattern(observed, &guess, &candidates);
        let twice = filter_by_pattern(observed, &guess, &once);
        assert_eq!(once, twice);
        assert!(once.contains(&secret));
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let candidates = words(&["crane", "slate"]);
        let before = candidates.clone();
        let guess = Word::new("crane").unwrap();

        let _ = filter_by_pattern(Pattern::perfect(5), &guess, &candidates);
        assert_eq!(candidates, before);
    }
}
