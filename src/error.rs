//! Error types shared across the crate

use crate::core::{FeedbackError, MAX_WORD_SIZE, MIN_WORD_SIZE, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// The errors that the assistant can produce
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern position outside `0..8` was addressed
    #[error("letter position {0} is outside the supported range 0..{MAX_WORD_SIZE}")]
    InvalidPosition(usize),

    /// Feedback had the wrong number of colors or an unknown symbol
    #[error("malformed feedback: {0}")]
    MalformedFeedback(#[from] FeedbackError),

    /// No candidate is consistent with the observed feedback
    #[error("no candidate words are consistent with the feedback")]
    EmptyCandidateSet,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("word {word:?} does not have {expected} letters")]
    WordSizeMismatch { word: String, expected: usize },

    #[error("{0:?} is not in the lexicon")]
    UnknownWord(String),

    #[error("word size {0} is unsupported (expected {MIN_WORD_SIZE}..={MAX_WORD_SIZE})")]
    UnsupportedWordSize(usize),

    #[error("lexicon contains no {word_size}-letter words")]
    EmptyLexicon { word_size: usize },

    /// Feedback or removal was requested before any guess was made
    #[error("no guess is awaiting feedback")]
    NoActiveGuess,

    #[error("the game is already over")]
    GameOver,

    #[error("could not read lexicon {}", path.display())]
    Lexicon {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;
