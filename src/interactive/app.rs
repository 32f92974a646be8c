//! TUI application state and logic

use crate::core::{Word, parse_feedback};
use crate::error::Error;
use crate::session::{Command, Event as SessionEvent, Phase, Session};
use crate::solver::entropy::calculate_metrics;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    /// Sessions before each feedback round, newest last
    pub undo_stack: Vec<Session<'a>>,
    pub input_buffer: String,
    pub manual_word: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    /// Game over, either solved or out of guesses
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Guess count -> games won with it
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        Self {
            session,
            undo_stack: Vec::new(),
            input_buffer: String::new(),
            manual_word: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest the guess with the most information."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback pattern (e.g., 'GY-GY' or '🟩🟨⬜🟩🟨')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        }
    }

    #[must_use]
    pub fn word_size(&self) -> usize {
        self.session.word_size()
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    /// Ask the session for the next guess
    pub fn compute_suggestion(&mut self) {
        match self.session.apply(Command::Suggest) {
            Ok((next, _)) => self.session = next,
            Err(Error::EmptyCandidateSet) => {
                self.add_message(
                    "No valid guesses remaining! Press 'u' to undo or 'n' for a new game.",
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Key press while typing feedback
    ///
    /// `q`, `n`, `u` and `r` act as hotkeys only while the buffer is empty, so
    /// token feedback such as `gn y gr` can be typed in full.
    pub fn handle_feedback_key(&mut self, code: KeyCode) {
        let hotkeys = self.input_buffer.is_empty();
        match code {
            KeyCode::Char('q') if hotkeys => self.should_quit = true,
            KeyCode::Char('n') if hotkeys => self.new_game(),
            KeyCode::Char('u') if hotkeys => self.undo_last(),
            KeyCode::Char('r') if hotkeys => self.remove_current(),
            KeyCode::Tab => {
                self.input_mode = InputMode::ManualWord;
                let prompt = format!("Enter your own word ({} letters)", self.word_size());
                self.add_message(&prompt, MessageStyle::Info);
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                let input = self.input_buffer.clone();
                self.handle_feedback(&input);
            }
            _ => {}
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let colors = match parse_feedback(feedback, self.word_size()) {
            Ok(colors) => colors,
            Err(e) => {
                self.add_message(
                    &format!("Invalid pattern! Use G/Y/- or 🟩🟨⬜ ({e})"),
                    MessageStyle::Error,
                );
                return;
            }
        };

        match self.session.apply(Command::Feedback(colors)) {
            Ok((next, event)) => {
                let previous = std::mem::replace(&mut self.session, next);
                self.undo_stack.push(previous);
                self.input_buffer.clear();
                self.report(&event);
            }
            Err(Error::EmptyCandidateSet) => self.add_message(
                "No candidates match that pattern. Check it and try again, or press 'u' to undo.",
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn report(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Solved { guesses, .. } => {
                self.stats.games_won += 1;
                self.stats.total_games += 1;
                *self.stats.guess_distribution.entry(*guesses).or_insert(0) += 1;
                self.input_mode = InputMode::GameOver;

                let celebration = match *guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionEvent::Exhausted { guesses, remaining } => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("Out of guesses after {guesses}; {remaining} candidates left."),
                    MessageStyle::Error,
                );
            }
            SessionEvent::Narrowed { remaining, .. } => {
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
            }
            SessionEvent::Removed {
                word,
                found,
                remaining,
            } => {
                let text = if *found {
                    format!("Removed {} ({remaining} left)", word.text().to_uppercase())
                } else {
                    format!("{} is not a candidate", word.text().to_uppercase())
                };
                self.add_message(&text, MessageStyle::Info);
            }
            SessionEvent::Suggested { .. }
            | SessionEvent::Entered { .. }
            | SessionEvent::Restarted { .. }
            | SessionEvent::Quit => {}
        }
    }

    /// Drop the current guess from the candidates, e.g. when the game rejects it
    pub fn remove_current(&mut self) {
        match self.session.apply(Command::Remove) {
            Ok((next, event)) => {
                let previous = std::mem::replace(&mut self.session, next);
                self.undo_stack.push(previous);
                self.report(&event);
                self.compute_suggestion();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        if let Ok((next, _)) = self.session.apply(Command::Restart) {
            self.session = next;
        }
        self.undo_stack.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! I'll suggest the best first guess.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.session = previous;
            self.input_mode = InputMode::Feedback;
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Replace the suggested guess with the word typed in manual mode
    pub fn use_manual_word(&mut self) {
        let word = match Word::with_size(self.manual_word.as_str(), self.word_size()) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&format!("Invalid word: {e}"), MessageStyle::Error);
                return;
            }
        };

        let metrics = calculate_metrics(&word, self.session.candidates());
        let suggested = self.session.active().and_then(|s| s.entropy);
        let in_lexicon = self.session.lexicon().contains(&word);

        match self.session.apply(Command::Enter(word.clone())) {
            Ok((next, _)) => self.session = next,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        debug!("manual guess {word} ({:.3} bits)", metrics.entropy);

        if let Some(bits) = suggested
            && metrics.entropy < bits
        {
            self.add_message(
                &format!(
                    "Note: Suggested word had {bits:.2} bits ({:.2} more)",
                    bits - metrics.entropy
                ),
                MessageStyle::Info,
            );
        }
        if !in_lexicon {
            self.add_message(
                &format!("{} is not in the lexicon", word.text().to_uppercase()),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (entropy: {:.2} bits, {:.1}x reduction)",
                word.text().to_uppercase(),
                metrics.entropy,
                metrics.entropy.exp2()
            ),
            MessageStyle::Success,
        );

        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Bits of uncertainty removed so far
    #[must_use]
    pub fn bits_gained(&self) -> f64 {
        let start = self.session.lexicon().len() as f64;
        let now = self.candidates_count().max(1) as f64;
        (start / now).log2()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    _ => {}
                },
                InputMode::Feedback => app.handle_feedback_key(key.code),
                InputMode::ManualWord => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                        app.add_message("Cancelled manual word entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                    }
                    KeyCode::Char(c) => {
                        if app.manual_word.len() < app.word_size() && c.is_ascii_alphabetic() {
                            app.manual_word.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.manual_word.pop();
                    }
                    KeyCode::Enter => app.use_manual_word(),
                    _ => {}
                },
            }
        }

        if app.should_quit || app.session.phase() == Phase::Abandoned {
            break;
        }
    }

    Ok(())
}
