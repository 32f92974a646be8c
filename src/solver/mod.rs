//! Wordle solving algorithms
//!
//! Entropy scoring, guess selection and candidate filtering.

pub mod entropy;
mod filter;

pub use entropy::{BestGuess, next_best_guess, select_best_guess};
pub use filter::filter_by_pattern;
