//! Formatting utilities for terminal output

use crate::core::{LetterColor, Pattern, Word};
use colored::Colorize;

/// Render each letter of `guess` on the background of its feedback color
#[must_use]
pub fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(pattern.colors(guess.len()))
        .map(|(letter, color)| {
            let cell = format!(" {letter} ");
            match color {
                LetterColor::Correct => cell.black().on_green().bold().to_string(),
                LetterColor::Misplaced => cell.black().on_yellow().bold().to_string(),
                LetterColor::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Feedback as one G/Y/- symbol per letter
#[must_use]
pub fn pattern_code(pattern: Pattern, word_size: usize) -> String {
    pattern
        .colors(word_size)
        .into_iter()
        .map(LetterColor::to_char)
        .collect()
}

/// Entropy in bits, or a dash when none was computed
#[must_use]
pub fn format_entropy(entropy: Option<f64>) -> String {
    entropy.map_or_else(|| "-".to_string(), |bits| format!("{bits:.3} bits"))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the best possible split of `candidates` words
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
