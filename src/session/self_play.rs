//! Automated games against a known secret word

use super::state::{Command, Phase, Session, SessionConfig, Turn};
use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use log::debug;
use rand::Rng;

/// How a self-played game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Exhausted,
}

/// Record of one self-played game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub secret: Word,
    pub outcome: Outcome,
    pub turns: Vec<Turn>,
}

impl GameReport {
    /// Number of guesses made
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// Play one game against `secret`, answering every guess with its true feedback
///
/// The secret should be a member of `lexicon`; otherwise the candidates can run
/// out and the game fails with `Error::EmptyCandidateSet`.
///
/// # Errors
/// Returns an error if the session cannot be created or the candidates run out.
///
/// # Examples
/// ```
/// use wordle_assistant::core::Word;
/// use wordle_assistant::session::{Outcome, SessionConfig, play_game};
///
/// let lexicon: Vec<Word> = ["cat", "cot", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let report = play_game(&lexicon, &lexicon[2], SessionConfig::self_play(3)).unwrap();
/// assert_eq!(report.outcome, Outcome::Solved);
/// assert_eq!(report.turns.last().unwrap().guess.text(), "dog");
/// ```
pub fn play_game(lexicon: &[Word], secret: &Word, config: SessionConfig) -> Result<GameReport> {
    let word_size = config.word_size;
    let (mut session, _) = Session::new(lexicon, config)?.apply(Command::Suggest)?;

    while session.phase() == Phase::AwaitingFeedback {
        let guess = &session.active().ok_or(Error::NoActiveGuess)?.guess;
        let colors = Pattern::calculate(guess, secret).colors(word_size);
        (session, _) = session.apply(Command::Feedback(colors))?;
    }

    let outcome = if session.phase() == Phase::Solved {
        Outcome::Solved
    } else {
        Outcome::Exhausted
    };
    debug!(
        "{secret}: {outcome:?} after {} guesses",
        session.turns().len()
    );

    Ok(GameReport {
        secret: secret.clone(),
        outcome,
        turns: session.turns().to_vec(),
    })
}

/// Play one game against a secret drawn uniformly from `lexicon`
///
/// # Errors
/// Returns `Error::EmptyLexicon` if `lexicon` is empty, otherwise as [`play_game`].
pub fn play_random_game<R: Rng>(
    lexicon: &[Word],
    config: SessionConfig,
    rng: &mut R,
) -> Result<GameReport> {
    if lexicon.is_empty() {
        return Err(Error::EmptyLexicon {
            word_size: config.word_size,
        });
    }

    let secret = &lexicon[rng.random_range(0..lexicon.len())];
    play_game(lexicon, secret, config)
}
