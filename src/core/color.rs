//! Per-letter feedback colors and feedback input parsing

use thiserror::Error;

/// Feedback for a single letter position
///
/// The discriminants are the 2-bit values packed into a [`Pattern`](super::Pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LetterColor {
    /// Letter not in the target (gray)
    Absent = 0,
    /// Letter in the target at another position (yellow)
    Misplaced = 1,
    /// Letter in the correct position (green)
    Correct = 2,
}

/// Error type for feedback that cannot be turned into a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("expected {expected} feedback colors, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("unrecognized feedback symbol {0:?}")]
    UnknownSymbol(String),
}

impl LetterColor {
    /// Parse a single feedback symbol (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::LetterColor;
    ///
    /// assert_eq!(LetterColor::from_symbol("gn"), Some(LetterColor::Correct));
    /// assert_eq!(LetterColor::from_symbol("Misplaced"), Some(LetterColor::Misplaced));
    /// assert_eq!(LetterColor::from_symbol("-"), Some(LetterColor::Absent));
    /// assert_eq!(LetterColor::from_symbol("q"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.to_lowercase().as_str() {
            "correct" | "green" | "gn" | "g" | "🟩" => Some(Self::Correct),
            "misplaced" | "yellow" | "y" | "🟨" => Some(Self::Misplaced),
            "absent" | "gray" | "grey" | "gr" | "x" | "-" | "_" | "⬜" | "⬛" => {
                Some(Self::Absent)
            }
            _ => None,
        }
    }

    pub(crate) const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            2 => Self::Correct,
            1 => Self::Misplaced,
            _ => Self::Absent,
        }
    }

    /// Emoji square for display
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code (G/Y/-)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Parse one round of feedback into colors in guess-letter order
///
/// Input is either whitespace/comma separated tokens (`correct misplaced absent ...`,
/// `gn y gr ...`) or one character per letter (`GY-GY`, `🟩🟨⬜🟩🟨`).
///
/// # Errors
/// Returns `FeedbackError` if a symbol is unknown or the number of colors
/// differs from `word_size`.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{parse_feedback, LetterColor};
///
/// let colors = parse_feedback("gy-", 3).unwrap();
/// assert_eq!(colors, vec![LetterColor::Correct, LetterColor::Misplaced, LetterColor::Absent]);
///
/// let tokens = parse_feedback("correct, absent absent", 3).unwrap();
/// assert_eq!(tokens[0], LetterColor::Correct);
/// ```
pub fn parse_feedback(input: &str, word_size: usize) -> Result<Vec<LetterColor>, FeedbackError> {
    let input = input.trim();
    let tokenized = input.contains(|c: char| c.is_whitespace() || c == ',');

    let colors = if tokenized {
        input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                LetterColor::from_symbol(token)
                    .ok_or_else(|| FeedbackError::UnknownSymbol(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        input
            .chars()
            .map(|ch| {
                let mut buf = [0u8; 4];
                let symbol = ch.encode_utf8(&mut buf);
                LetterColor::from_symbol(symbol)
                    .ok_or_else(|| FeedbackError::UnknownSymbol(symbol.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    if colors.len() != word_size {
        return Err(FeedbackError::WrongLength {
            expected: word_size,
            got: colors.len(),
        });
    }

    Ok(colors)
}
