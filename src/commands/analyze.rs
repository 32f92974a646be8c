//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::Word;
use crate::error::{Error, Result};
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
}

/// Analyze the entropy of a word against a set of candidates
///
/// The word is scored against every candidate, itself included.
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a valid `word_size`-letter word
/// - The word is not in the candidate list
pub fn analyze_word(word: &str, candidates: &[Word], word_size: usize) -> Result<AnalysisResult> {
    let word = Word::with_size(word, word_size)?;

    if !candidates.contains(&word) {
        return Err(Error::UnknownWord(word.text().to_string()));
    }

    let metrics = calculate_metrics(&word, candidates);

    Ok(AnalysisResult {
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
    })
}
