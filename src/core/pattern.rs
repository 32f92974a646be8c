//! Wordle feedback pattern calculation and representation
//!
//! A pattern (the feedback code) stores one [`LetterColor`] per letter in 2 bits,
//! packed from the least-significant bits upward:
//! - 0 = Absent (gray)
//! - 1 = Misplaced (yellow)
//! - 2 = Correct (green)
//!
//! Guess letter `i` is stored at position `word_size - 1 - i`, so the first letter
//! of the guess occupies the highest used bits. Eight positions fit in a `u16`.

use super::color::{FeedbackError, LetterColor};
use super::word::{MAX_WORD_SIZE, Word};
use crate::error::{Error, Result};

/// Feedback pattern for a guess
///
/// Patterns are compared only for equality; the numeric value has no ordering meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pattern(u16);

impl Pattern {
    /// All letters absent
    pub const EMPTY: Self = Self(0);

    /// The all-correct pattern for words of `word_size` letters
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Pattern;
    ///
    /// assert_eq!(Pattern::perfect(5).bits(), 0b10_10_10_10_10);
    /// ```
    #[must_use]
    pub const fn perfect(word_size: usize) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < word_size && i < MAX_WORD_SIZE {
            bits |= (LetterColor::Correct as u16) << (i * 2);
            i += 1;
        }
        Self(bits)
    }

    /// Raw packed value
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check if this is the all-correct pattern for `word_size`
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, word_size: usize) -> bool {
        self.0 == Self::perfect(word_size).0
    }

    /// Return a copy with `position` set to `color`
    ///
    /// # Errors
    /// Returns `Error::InvalidPosition` if `position` is not in `0..8`.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{LetterColor, Pattern};
    ///
    /// let p = Pattern::EMPTY.set_color(1, LetterColor::Misplaced).unwrap();
    /// assert_eq!(p.bits(), 0b0100);
    /// assert!(Pattern::EMPTY.set_color(8, LetterColor::Correct).is_err());
    /// ```
    pub fn set_color(self, position: usize, color: LetterColor) -> Result<Self> {
        if position >= MAX_WORD_SIZE {
            return Err(Error::InvalidPosition(position));
        }
        Ok(self.with_color(position, color))
    }

    /// Color stored at `position`
    ///
    /// # Errors
    /// Returns `Error::InvalidPosition` if `position` is not in `0..8`.
    pub fn color_at(self, position: usize) -> Result<LetterColor> {
        if position >= MAX_WORD_SIZE {
            return Err(Error::InvalidPosition(position));
        }
        Ok(self.color_unchecked(position))
    }

    // Callers guarantee position < MAX_WORD_SIZE.
    #[inline]
    const fn with_color(self, position: usize, color: LetterColor) -> Self {
        let shift = position * 2;
        Self((self.0 & !(0b11 << shift)) | ((color as u16) << shift))
    }

    #[inline]
    const fn color_unchecked(self, position: usize) -> LetterColor {
        LetterColor::from_bits(self.0 >> (position * 2))
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the answer
    ///
    /// Both words must have the same length.
    ///
    /// # Algorithm
    /// 1. Count the letters of the target
    /// 2. First pass: mark exact matches correct and consume that letter
    /// 3. Second pass: mark remaining letters misplaced while unconsumed copies
    ///    are left in the target, absent otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("blame").unwrap();
    ///
    /// // A and E correct; C is stored in the highest bits
    /// assert_eq!(Pattern::calculate(&guess, &target).bits(), 0b00_00_10_00_10);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let word_size = guess.len();
        let guess_chars = guess.chars();
        let target_chars = target.chars();
        let mut available = target.char_counts();
        let mut correct = [false; MAX_WORD_SIZE];
        let mut pattern = Self::EMPTY;

        for (i, (&g, &t)) in guess_chars.iter().zip(target_chars).enumerate() {
            if g == t {
                correct[i] = true;
                if let Some(count) = available.get_mut(&g) {
                    *count -= 1;
                }
                pattern = pattern.with_color(word_size - 1 - i, LetterColor::Correct);
            }
        }

        for (i, letter) in guess_chars.iter().enumerate() {
            if correct[i] {
                continue;
            }
            let color = match available.get_mut(letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterColor::Misplaced
                }
                _ => LetterColor::Absent,
            };
            pattern = pattern.with_color(word_size - 1 - i, color);
        }

        pattern
    }

    /// Assemble a pattern from colors given in guess-letter order
    ///
    /// # Errors
    /// Returns `Error::MalformedFeedback` if `colors.len() != word_size`, or
    /// `Error::UnsupportedWordSize` if `word_size` exceeds 8.
    pub fn from_colors(colors: &[LetterColor], word_size: usize) -> Result<Self> {
        if word_size > MAX_WORD_SIZE {
            return Err(Error::UnsupportedWordSize(word_size));
        }
        if colors.len() != word_size {
            return Err(FeedbackError::WrongLength {
                expected: word_size,
                got: colors.len(),
            }
            .into());
        }

        colors
            .iter()
            .enumerate()
            .try_fold(Self::EMPTY, |pattern, (i, &color)| {
                pattern.set_color(word_size - 1 - i, color)
            })
    }

    /// Colors in guess-letter order
    #[must_use]
    pub fn colors(self, word_size: usize) -> Vec<LetterColor> {
        let n = word_size.min(MAX_WORD_SIZE);
        (0..n).map(|i| self.color_unchecked(n - 1 - i)).collect()
    }

    /// Parse a pattern from feedback text like "GY-GY" or "correct absent ..."
    ///
    /// # Errors
    /// Returns `Error::MalformedFeedback` for unknown symbols or a wrong count.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY", 5).unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨", 5).unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.to_emoji(5), "🟩🟨⬜🟩🟨");
    /// ```
    pub fn parse(text: &str, word_size: usize) -> Result<Self> {
        let colors = super::color::parse_feedback(text, word_size)?;
        Self::from_colors(&colors, word_size)
    }

    /// Emoji string in guess-letter order
    #[must_use]
    pub fn to_emoji(self, word_size: usize) -> String {
        self.colors(word_size)
            .into_iter()
            .map(LetterColor::to_emoji)
            .collect()
    }

    /// Count the number of correct (green) letters
    #[must_use]
    pub fn count_greens(self, word_size: usize) -> usize {
        self.colors(word_size)
            .into_iter()
            .filter(|&c| c == LetterColor::Correct)
            .count()
    }

    /// Count the number of misplaced (yellow) letters
    #[must_use]
    pub fn count_yellows(self, word_size: usize) -> usize {
        self.colors(word_size)
            .into_iter()
            .filter(|&c| c == LetterColor::Misplaced)
            .count()
    }
}
