//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types. Nothing here performs I/O or logs;
//! every function is a pure function of its inputs.

mod color;
mod pattern;
mod word;

pub use color::{FeedbackError, LetterColor, parse_feedback};
pub use pattern::Pattern;
pub use word::{MAX_WORD_SIZE, MIN_WORD_SIZE, Word, WordError};
