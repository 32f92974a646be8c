//! Entropy-based guess selection
//!
//! Pure information theory approach: maximize expected information gain.

mod calculator;
mod selector;
mod table;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, entropies_of, guess_entropy,
    shannon_entropy,
};
pub use selector::{BestGuess, next_best_guess, select_best_guess};
pub use table::{ENTROPY_EPSILON, EntropyGroup, EntropyTable};
