//! Simple interactive CLI mode
//!
//! Text-based command loop without TUI. Reads commands from any `BufRead` and
//! writes to any `Write`, so the loop can be driven from tests.

use crate::core::{LetterColor, Word, parse_feedback};
use crate::error::{Error, Result};
use crate::output::formatters::{colored_guess, format_entropy, pattern_code};
use crate::session::{Command, Event, Phase, Session, SessionConfig, Suggestion};
use colored::Colorize;
use std::io::{BufRead, Write};

const HELP: &str = "Commands:
  guess   - get the first/next guess
  word    - enter your own word (or: word <WORD>)
  remove  - remove the last guess from the candidates
  new     - start a new game
  quit    - exit";

/// Show candidate lists only when they are this short
const CANDIDATE_LIST_LIMIT: usize = 10;

/// Run the text command loop until `quit` or end of input
///
/// Returns the phase of the session when the loop ended.
///
/// # Errors
///
/// Returns an error if the session cannot be created or reading/writing fails.
pub fn run_simple<R: BufRead, W: Write>(
    lexicon: &[Word],
    config: SessionConfig,
    mut input: R,
    mut out: W,
) -> Result<Phase> {
    let word_size = config.word_size;
    let mut session = Session::new(lexicon, config)?;

    writeln!(out, "{}", "Wordle Assistant - Text Mode".bright_cyan().bold())?;
    writeln!(out, "{} {word_size}-letter words loaded.", lexicon.len())?;
    writeln!(out, "{HELP}")?;
    writeln!(
        out,
        "Feedback: one symbol per letter, G = green, Y = yellow, - = gray (or 'win').\n"
    )?;

    loop {
        let prompt = if session.phase() == Phase::AwaitingFeedback {
            "feedback"
        } else {
            "command"
        };
        let Some(line) = read_line(&mut input, &mut out, prompt)? else {
            return Ok(session.phase());
        };

        let Some(command) = parse_command(&line, &session, &mut input, &mut out)? else {
            continue;
        };

        let is_feedback = matches!(command, Command::Feedback(_));
        match session.apply(command) {
            Ok((next, event)) => {
                report_event(&mut out, &event, &next)?;
                session = next;
                if session.phase() == Phase::Abandoned {
                    return Ok(Phase::Abandoned);
                }
            }
            Err(Error::EmptyCandidateSet) if is_feedback => {
                writeln!(
                    out,
                    "No candidate matches that feedback. Check it and try again, or type 'new'."
                )?;
            }
            Err(Error::EmptyCandidateSet) => {
                writeln!(out, "No candidates left to suggest. Type 'new' to start over.")?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
}

/// Turn one input line into a session command, prompting again where needed
fn parse_command<R: BufRead, W: Write>(
    line: &str,
    session: &Session<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Command>> {
    let word_size = session.word_size();
    let lower = line.to_lowercase();
    let (head, rest) = lower
        .split_once(char::is_whitespace)
        .map_or((lower.as_str(), ""), |(h, r)| (h, r.trim()));

    let command = match head {
        "" => None,
        "quit" | "q" | "exit" => Some(Command::Quit),
        "new" | "n" => Some(Command::Restart),
        "guess" | "next" => Some(Command::Suggest),
        "remove" => Some(Command::Remove),
        "help" | "?" => {
            writeln!(out, "{HELP}")?;
            None
        }
        "word" => {
            let text = if rest.is_empty() {
                match read_line(input, out, "word")? {
                    Some(text) => text,
                    None => return Ok(Some(Command::Quit)),
                }
            } else {
                rest.to_string()
            };
            match Word::with_size(text, word_size) {
                Ok(word) => Some(Command::Enter(word)),
                Err(e) => {
                    writeln!(out, "Invalid word: {e}")?;
                    None
                }
            }
        }
        "win" | "solved" if session.phase() == Phase::AwaitingFeedback => {
            Some(Command::Feedback(vec![LetterColor::Correct; word_size]))
        }
        _ if session.phase() == Phase::AwaitingFeedback => {
            match parse_feedback(line, word_size) {
                Ok(colors) => Some(Command::Feedback(colors)),
                Err(e) => {
                    writeln!(out, "Invalid input! {e}")?;
                    None
                }
            }
        }
        other => {
            writeln!(out, "Unknown command {other:?}. Type 'help' for commands.")?;
            None
        }
    };

    Ok(command)
}

fn describe_suggestion(suggestion: &Suggestion) -> String {
    format!(
        "{} ({})",
        suggestion.guess.text().to_uppercase().bright_white().bold(),
        format_entropy(suggestion.entropy)
    )
}

fn report_event<W: Write>(out: &mut W, event: &Event, session: &Session<'_>) -> Result<()> {
    match event {
        Event::Suggested {
            suggestion,
            remaining,
        } => {
            writeln!(out, "{remaining} candidates remaining")?;
            writeln!(out, "Next guess: {}", describe_suggestion(suggestion))?;
        }
        Event::Entered { guess } => {
            writeln!(
                out,
                "Using {}. You can now enter the feedback.",
                guess.text().to_uppercase()
            )?;
        }
        Event::Narrowed { remaining, next } => {
            if let Some(turn) = session.turns().last() {
                writeln!(
                    out,
                    "{} {}",
                    colored_guess(&turn.guess, turn.pattern),
                    pattern_code(turn.pattern, session.word_size())
                )?;
            }
            writeln!(out, "{remaining} candidates remaining")?;
            if *remaining <= CANDIDATE_LIST_LIMIT {
                let list: Vec<String> = session
                    .candidates()
                    .iter()
                    .map(|w| w.text().to_uppercase())
                    .collect();
                writeln!(out, "  {}", list.join(" "))?;
            }
            writeln!(out, "Next guess should be: {}", describe_suggestion(next))?;
        }
        Event::Solved { word, guesses } => {
            writeln!(
                out,
                "{}",
                format!(
                    "You won! {} in {guesses} {}",
                    word.text().to_uppercase(),
                    if *guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
            for (i, turn) in session.turns().iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, colored_guess(&turn.guess, turn.pattern))?;
            }
            writeln!(out, "Type 'new' to play again or 'quit' to exit.")?;
        }
        Event::Exhausted { guesses, remaining } => {
            writeln!(
                out,
                "{}",
                format!("Out of guesses after {guesses}; {remaining} candidates were left.").red()
            )?;
        }
        Event::Removed {
            word,
            found,
            remaining,
        } => {
            if *found {
                writeln!(
                    out,
                    "Removing {} from the candidates ({remaining} left).",
                    word.text().to_uppercase()
                )?;
            } else {
                writeln!(out, "{} is not a candidate.", word.text().to_uppercase())?;
            }
        }
        Event::Restarted { candidates } => {
            writeln!(out, "New game started with {candidates} candidates.")?;
        }
        Event::Quit => writeln!(out, "Quitting game.")?,
    }
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}> ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
