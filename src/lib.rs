//! Wordle Assistant
//!
//! Suggests the guess with the highest Shannon entropy over the remaining
//! candidates and narrows the candidates from feedback, for words of 3 to 8 letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Pattern, Word};
//! use wordle_assistant::solver::{filter_by_pattern, next_best_guess};
//!
//! let candidates: Vec<Word> = ["crane", "slate", "irate", "grate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let guess = next_best_guess(&candidates).unwrap().clone();
//! let secret = Word::new("grate").unwrap();
//!
//! let feedback = Pattern::calculate(&guess, &secret);
//! let remaining = filter_by_pattern(feedback, &guess, &candidates);
//! assert!(remaining.contains(&secret));
//! ```

// Core domain types
pub mod core;

pub mod error;

// Entropy scoring, guess selection and candidate filtering
pub mod solver;

// Game state machine and self-play
pub mod session;

// Lexicon loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Error, Result};
