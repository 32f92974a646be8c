//! Game session state machine
//!
//! A [`Session`] owns the current candidate set and the guess awaiting feedback.
//! Every command is a pure transition: [`Session::apply`] returns the next session
//! together with an [`Event`] describing what happened, and leaves `self` untouched.

use crate::core::{LetterColor, MAX_WORD_SIZE, MIN_WORD_SIZE, Pattern, Word};
use crate::error::{Error, Result};
use crate::solver::{filter_by_pattern, select_best_guess};
use log::{debug, info};

/// Session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Letters per word (3..=8)
    pub word_size: usize,
    /// Guess budget; `None` plays until solved
    pub max_guesses: Option<usize>,
}

impl SessionConfig {
    /// Interactive settings without a guess budget
    #[must_use]
    pub const fn new(word_size: usize) -> Self {
        Self {
            word_size,
            max_guesses: None,
        }
    }

    /// Self-play settings: `word_size + 1` guesses
    #[must_use]
    pub const fn self_play(word_size: usize) -> Self {
        Self {
            word_size,
            max_guesses: Some(word_size + 1),
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: Option<usize>) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Check the word size is supported
    ///
    /// # Errors
    /// Returns `Error::UnsupportedWordSize` outside 3..=8.
    pub fn validate(&self) -> Result<()> {
        if (MIN_WORD_SIZE..=MAX_WORD_SIZE).contains(&self.word_size) {
            Ok(())
        } else {
            Err(Error::UnsupportedWordSize(self.word_size))
        }
    }
}

/// Where the session is in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh game, nothing guessed yet
    Start,
    /// Waiting for a suggested or entered guess
    AwaitingGuess,
    /// A guess is active and needs feedback
    AwaitingFeedback,
    Solved,
    /// Guess budget used up without solving
    Exhausted,
    /// Player quit
    Abandoned,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Abandoned)
    }
}

/// A guess with the entropy it was chosen for
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub guess: Word,
    /// `None` for player-entered words and single-candidate picks
    pub entropy: Option<f64>,
}

/// One completed guess/feedback round
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: Pattern,
    pub entropy: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Player input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask for the highest-entropy guess
    Suggest,
    /// Use the player's own word as the guess
    Enter(Word),
    /// Feedback colors for the active guess, in guess-letter order
    Feedback(Vec<LetterColor>),
    /// Drop the active guess from the candidates (e.g. the game rejected it)
    Remove,
    /// Start a new game with the full lexicon
    Restart,
    Quit,
}

/// Result of a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Suggested {
        suggestion: Suggestion,
        remaining: usize,
    },
    Entered {
        guess: Word,
    },
    /// Feedback narrowed the candidates; `next` is the follow-up suggestion
    Narrowed {
        remaining: usize,
        next: Suggestion,
    },
    Solved {
        word: Word,
        guesses: usize,
    },
    Exhausted {
        guesses: usize,
        remaining: usize,
    },
    Removed {
        word: Word,
        found: bool,
        remaining: usize,
    },
    Restarted {
        candidates: usize,
    },
    Quit,
}

/// State of one game over a borrowed lexicon
#[derive(Debug, Clone)]
pub struct Session<'a> {
    lexicon: &'a [Word],
    config: SessionConfig,
    candidates: Vec<Word>,
    active: Option<Suggestion>,
    turns: Vec<Turn>,
    phase: Phase,
}

impl<'a> Session<'a> {
    /// Create a session whose candidates start as the whole lexicon
    ///
    /// # Errors
    /// Returns an error if the word size is unsupported, the lexicon is empty,
    /// or a lexicon word has the wrong length.
    pub fn new(lexicon: &'a [Word], config: SessionConfig) -> Result<Self> {
        config.validate()?;

        if lexicon.is_empty() {
            return Err(Error::EmptyLexicon {
                word_size: config.word_size,
            });
        }

        if let Some(word) = lexicon.iter().find(|w| w.len() != config.word_size) {
            return Err(Error::WordSizeMismatch {
                word: word.text().to_string(),
                expected: config.word_size,
            });
        }

        Ok(Self {
            lexicon,
            config,
            candidates: lexicon.to_vec(),
            active: None,
            turns: Vec::new(),
            phase: Phase::Start,
        })
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub const fn word_size(&self) -> usize {
        self.config.word_size
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a [Word] {
        self.lexicon
    }

    /// Words still consistent with all feedback
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Guess awaiting feedback
    #[must_use]
    pub const fn active(&self) -> Option<&Suggestion> {
        self.active.as_ref()
    }

    /// Completed rounds, oldest first
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Apply one command
    ///
    /// `Restart` and `Quit` are accepted in every phase; everything else fails
    /// with `Error::GameOver` once the game has ended. On error the caller keeps
    /// the current session.
    ///
    /// # Errors
    /// - `Error::EmptyCandidateSet` when asking for a guess with no candidates left,
    ///   or when feedback is inconsistent with every candidate
    /// - `Error::NoActiveGuess` for feedback or removal without a guess
    /// - `Error::MalformedFeedback` when the color count is wrong
    /// - `Error::WordSizeMismatch` when an entered word has the wrong length
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{LetterColor, Word};
    /// use wordle_assistant::session::{Command, Event, Phase, Session, SessionConfig};
    ///
    /// let lexicon = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
    /// let session = Session::new(&lexicon, SessionConfig::new(3)).unwrap();
    ///
    /// let (session, _) = session.apply(Command::Suggest).unwrap();
    /// assert_eq!(session.active().unwrap().guess.text(), "cat");
    ///
    /// let (session, event) = session
    ///     .apply(Command::Feedback(vec![LetterColor::Correct; 3]))
    ///     .unwrap();
    /// assert_eq!(session.phase(), Phase::Solved);
    /// assert!(matches!(event, Event::Solved { guesses: 1, .. }));
    /// ```
    pub fn apply(&self, command: Command) -> Result<(Self, Event)> {
        match command {
            Command::Restart => Ok(self.restart()),
            Command::Quit => Ok(self.quit()),
            _ if self.phase.is_over() => Err(Error::GameOver),
            Command::Suggest => self.suggest(),
            Command::Enter(word) => self.enter(word),
            Command::Feedback(colors) => self.feedback(&colors),
            Command::Remove => self.remove(),
        }
    }

    fn suggestion_for(candidates: &[Word]) -> Result<Suggestion> {
        let best = select_best_guess(candidates)?;
        Ok(Suggestion {
            guess: best.word.clone(),
            entropy: best.entropy,
        })
    }

    fn suggest(&self) -> Result<(Self, Event)> {
        let suggestion = Self::suggestion_for(&self.candidates)?;
        debug!(
            "suggesting {} ({:?} bits) from {} candidates",
            suggestion.guess,
            suggestion.entropy,
            self.candidates.len()
        );

        let mut next = self.clone();
        next.active = Some(suggestion.clone());
        next.phase = Phase::AwaitingFeedback;

        Ok((
            next,
            Event::Suggested {
                suggestion,
                remaining: self.candidates.len(),
            },
        ))
    }

    fn enter(&self, word: Word) -> Result<(Self, Event)> {
        if word.len() != self.config.word_size {
            return Err(Error::WordSizeMismatch {
                word: word.text().to_string(),
                expected: self.config.word_size,
            });
        }

        let mut next = self.clone();
        next.active = Some(Suggestion {
            guess: word.clone(),
            entropy: None,
        });
        next.phase = Phase::AwaitingFeedback;

        Ok((next, Event::Entered { guess: word }))
    }

    fn feedback(&self, colors: &[LetterColor]) -> Result<(Self, Event)> {
        let active = self.active.as_ref().ok_or(Error::NoActiveGuess)?;
        let word_size = self.config.word_size;
        let pattern = Pattern::from_colors(colors, word_size)?;
        let candidates_before = self.candidates.len();

        let mut next = self.clone();
        next.active = None;

        if pattern.is_perfect(word_size) {
            next.turns.push(Turn {
                guess: active.guess.clone(),
                pattern,
                entropy: active.entropy,
                candidates_before,
                candidates_after: 1,
            });
            next.candidates = vec![active.guess.clone()];
            next.phase = Phase::Solved;
            info!("solved {} in {} guesses", active.guess, next.turns.len());

            let guesses = next.turns.len();
            return Ok((
                next,
                Event::Solved {
                    word: active.guess.clone(),
                    guesses,
                },
            ));
        }

        let remaining = filter_by_pattern(pattern, &active.guess, &self.candidates);
        debug!(
            "{} {}: {} -> {} candidates",
            active.guess,
            pattern.to_emoji(word_size),
            candidates_before,
            remaining.len()
        );
        if remaining.is_empty() {
            return Err(Error::EmptyCandidateSet);
        }

        next.turns.push(Turn {
            guess: active.guess.clone(),
            pattern,
            entropy: active.entropy,
            candidates_before,
            candidates_after: remaining.len(),
        });
        next.candidates = remaining;

        let guesses = next.turns.len();
        if self.config.max_guesses.is_some_and(|max| guesses >= max) {
            next.phase = Phase::Exhausted;
            info!("guess budget exhausted after {guesses} guesses");
            let remaining = next.candidates.len();
            return Ok((next, Event::Exhausted { guesses, remaining }));
        }

        let suggestion = Self::suggestion_for(&next.candidates)?;
        next.active = Some(suggestion.clone());
        next.phase = Phase::AwaitingFeedback;

        let remaining = next.candidates.len();
        Ok((
            next,
            Event::Narrowed {
                remaining,
                next: suggestion,
            },
        ))
    }

    fn remove(&self) -> Result<(Self, Event)> {
        let active = self.active.as_ref().ok_or(Error::NoActiveGuess)?;

        let mut next = self.clone();
        let position = next.candidates.iter().position(|w| *w == active.guess);
        if let Some(index) = position {
            next.candidates.remove(index);
        }
        next.active = None;
        next.phase = Phase::AwaitingGuess;
        debug!("removed {} (present: {})", active.guess, position.is_some());

        let remaining = next.candidates.len();
        Ok((
            next,
            Event::Removed {
                word: active.guess.clone(),
                found: position.is_some(),
                remaining,
            },
        ))
    }

    fn restart(&self) -> (Self, Event) {
        let next = Self {
            lexicon: self.lexicon,
            config: self.config,
            candidates: self.lexicon.to_vec(),
            active: None,
            turns: Vec::new(),
            phase: Phase::Start,
        };
        let candidates = next.candidates.len();
        (next, Event::Restarted { candidates })
    }

    fn quit(&self) -> (Self, Event) {
        let mut next = self.clone();
        next.active = None;
        next.phase = Phase::Abandoned;
        (next, Event::Quit)
    }
}
