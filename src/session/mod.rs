//! Game sessions: the guess/feedback state machine and automated self-play

mod self_play;
mod state;

pub use self_play::{GameReport, Outcome, play_game, play_random_game};
pub use state::{Command, Event, Phase, Session, SessionConfig, Suggestion, Turn};
