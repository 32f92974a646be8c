//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use super::table::EntropyTable;
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against every word in `candidates`
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&group_by_pattern(guess, candidates.iter()))
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern<'w>(
    guess: &Word,
    candidates: impl Iterator<Item = &'w Word>,
) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_assistant::core::{LetterColor, Pattern};
/// use wordle_assistant::solver::entropy::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::EMPTY, 25);
/// uniform.insert(Pattern::perfect(5), 25);
/// uniform.insert(Pattern::EMPTY.set_color(0, LetterColor::Misplaced).unwrap(), 25);
/// uniform.insert(Pattern::EMPTY.set_color(1, LetterColor::Misplaced).unwrap(), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 1e-6); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // A single certain pattern sums to -0.0
    if entropy > 0.0 { entropy } else { 0.0 }
}

/// Entropy of `candidates[index]` as a guess against every other candidate
///
/// The guess itself is left out of the distribution.
#[must_use]
pub fn guess_entropy(candidates: &[Word], index: usize) -> f64 {
    let guess = &candidates[index];
    let others = candidates
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(_, word)| word);

    shannon_entropy(&group_by_pattern(guess, others))
}

/// Score every candidate as a guess and group the candidates by entropy
///
/// Each guess is scored against all other candidates, so this is quadratic in
/// `candidates.len()`. Guesses are scored in parallel; the table is then filled
/// in candidate order, so words inside a group keep their original order.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::solver::entropy::entropies_of;
///
/// let candidates: Vec<Word> = ["crane", "slate", "irate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let table = entropies_of(&candidates);
/// assert_eq!(table.word_count(), 3);
/// ```
#[must_use]
pub fn entropies_of(candidates: &[Word]) -> EntropyTable<'_> {
    let scores: Vec<f64> = (0..candidates.len())
        .into_par_iter()
        .map(|index| guess_entropy(candidates, index))
        .collect();

    let mut table = EntropyTable::default();
    for (word, entropy) in candidates.iter().zip(scores) {
        table.insert(entropy, word);
    }
    table
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(guess, candidates.iter());
    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterColor;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn pattern_at(position: usize) -> Pattern {
        Pattern::EMPTY
            .set_color(position, LetterColor::Misplaced)
            .unwrap()
    }

    #[test]
    fn shannon_entropy_certain_outcome_is_exactly_zero() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::perfect(5), 100);

        let entropy = shannon_entropy(&counts);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn shannon_entropy_two_equal_outcomes() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::perfect(5), 50);
        counts.insert(Pattern::EMPTY, 50);

        assert!((shannon_entropy(&counts) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each equally likely = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::perfect(5), 25);
        counts.insert(Pattern::EMPTY, 25);
        counts.insert(pattern_at(0), 25);
        counts.insert(pattern_at(1), 25);

        assert!((shannon_entropy(&counts) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::perfect(5), 70);
        counts.insert(Pattern::EMPTY, 20);
        counts.insert(pattern_at(2), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy > 0.0 && entropy < 1.6);
        assert!(entropy <= (counts.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_ignores_zero_counts() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::perfect(5), 10);
        counts.insert(Pattern::EMPTY, 0);

        assert_eq!(shannon_entropy(&counts), 0.0);
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert_eq!(shannon_entropy(&counts), 0.0);
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        assert_eq!(calculate_entropy(&guess, &candidates), 0.0);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);

        assert!((calculate_entropy(&guess, &candidates) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn guess_entropy_excludes_the_guess() {
        // Against itself SLATE would add a perfect pattern; without it both
        // remaining words produce all-absent
        let candidates = words(&["slate", "bbbbb", "ccccc"]);

        assert_eq!(guess_entropy(&candidates, 0), 0.0);
    }

    #[test]
    fn guess_entropy_maximal_when_all_distinct() {
        let candidates = words(&["abc", "axx", "xbx", "xxc", "xxx"]);

        // ABC splits the other four into four distinct patterns
        assert!((guess_entropy(&candidates, 0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropies_of_groups_every_candidate() {
        let candidates = words(&["crane", "slate", "irate", "crate", "grate"]);
        let table = entropies_of(&candidates);

        assert_eq!(table.word_count(), candidates.len());
        assert!(table.best().is_some());
    }

    #[test]
    fn entropies_of_groups_equal_scores() {
        // Each three-letter word sees the other two as all-absent
        let candidates = words(&["aaa", "bbb", "ccc"]);
        let table = entropies_of(&candidates);

        assert_eq!(table.len(), 1);
        let (entropy, best) = table.best().unwrap();
        assert_eq!(entropy, 0.0);
        assert_eq!(best.text(), "aaa");
    }

    #[test]
    fn entropies_of_empty() {
        assert!(entropies_of(&[]).is_empty());
    }

    #[test]
    fn calculate_metrics_reports_partitions() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["crane", "zzzzz", "yyyyy"]);

        let metrics = calculate_metrics(&guess, &candidates);

        // {crane} and {zzzzz, yyyyy}
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 5.0 / 3.0).abs() < 1e-9);
        assert!(metrics.entropy > 0.0 && metrics.entropy < 1.0);
    }

    #[test]
    fn calculate_metrics_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.entropy, 0.0);
    }
}
