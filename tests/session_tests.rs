// Integration tests for the assistant
// These drive the public API end to end: lexicon -> session -> text loop

use std::fs;
use std::io::Cursor;
use wordle_assistant::Error;
use wordle_assistant::commands::run_simple;
use wordle_assistant::core::{LetterColor, Pattern, Word};
use wordle_assistant::session::{
    Command, Event, Outcome, Phase, Session, SessionConfig, play_game,
};
use wordle_assistant::solver::{filter_by_pattern, next_best_guess};
use wordle_assistant::wordlists::{LexiconFormat, load_lexicon, words_from_slice};

const FIVES: &[&str] = &[
    "crane", "slate", "irate", "crate", "grate", "plate", "trace", "brave", "shale", "stale",
    "light", "night", "might", "sight", "fight", "apple", "lemon", "blame", "flame", "frame",
];

fn run_script(lexicon: &[Word], word_size: usize, script: &str) -> (Phase, String) {
    let mut out = Vec::new();
    let phase = run_simple(
        lexicon,
        SessionConfig::new(word_size),
        Cursor::new(script),
        &mut out,
    )
    .unwrap();
    (phase, String::from_utf8(out).unwrap())
}

#[test]
fn test_end_to_end_self_play_solves_every_word() {
    let lexicon = words_from_slice(FIVES, 5);

    for secret in &lexicon {
        let report = play_game(&lexicon, secret, SessionConfig::new(5)).unwrap();
        assert_eq!(report.outcome, Outcome::Solved);
        assert_eq!(&report.turns.last().unwrap().guess, secret);
    }
}

#[test]
fn test_interactive_session_matches_self_play() {
    // Feeding true feedback by hand must follow the same path as self-play
    let lexicon = words_from_slice(FIVES, 5);
    let secret = Word::new("fight").unwrap();
    let report = play_game(&lexicon, &secret, SessionConfig::new(5)).unwrap();

    let (mut session, _) = Session::new(&lexicon, SessionConfig::new(5))
        .unwrap()
        .apply(Command::Suggest)
        .unwrap();

    for turn in &report.turns {
        let active = session.active().unwrap();
        assert_eq!(active.guess, turn.guess);

        let colors = Pattern::calculate(&active.guess, &secret).colors(5);
        (session, _) = session.apply(Command::Feedback(colors)).unwrap();
    }
    assert_eq!(session.phase(), Phase::Solved);
}

#[test]
fn test_text_loop_plays_full_game() {
    let lexicon = words_from_slice(FIVES, 5);
    let secret = Word::new("might").unwrap();

    // Work out the feedback lines for the guesses the assistant will make
    let report = play_game(&lexicon, &secret, SessionConfig::new(5)).unwrap();
    let mut script = String::from("guess\n");
    for turn in &report.turns {
        let line: String = turn
            .pattern
            .colors(5)
            .into_iter()
            .map(LetterColor::to_char)
            .collect();
        script.push_str(&line);
        script.push('\n');
    }

    let (phase, out) = run_script(&lexicon, 5, &script);
    assert_eq!(phase, Phase::Solved);
    assert!(out.contains("You won!"));
    assert!(out.contains("MIGHT"));
}

#[test]
fn test_text_loop_word_remove_and_quit() {
    let lexicon = words_from_slice(FIVES, 5);
    let (phase, out) = run_script(&lexicon, 5, "word zzzzz\nremove\nword crane\nremove\nquit\n");

    assert_eq!(phase, Phase::Abandoned);
    assert!(out.contains("ZZZZZ is not a candidate."));
    assert!(out.contains("Removing CRANE from the candidates (19 left)."));
    assert!(out.contains("Quitting game."));
}

#[test]
fn test_feedback_tokens_and_emoji_are_accepted() {
    let lexicon = words_from_slice(FIVES, 5);
    let script = "word light\ncorrect correct correct correct correct\n";
    let (phase, _) = run_script(&lexicon, 5, script);
    assert_eq!(phase, Phase::Solved);

    let script = "word light\n🟩🟩🟩🟩🟩\n";
    let (phase, _) = run_script(&lexicon, 5, script);
    assert_eq!(phase, Phase::Solved);
}

#[test]
fn test_filter_then_select_never_returns_eliminated_word() {
    let lexicon = words_from_slice(FIVES, 5);
    let guess = Word::new("crane").unwrap();
    let secret = Word::new("flame").unwrap();

    let remaining = filter_by_pattern(Pattern::calculate(&guess, &secret), &guess, &lexicon);
    let next = next_best_guess(&remaining).unwrap();

    assert!(remaining.contains(&secret));
    assert!(!remaining.contains(&guess));
    assert!(remaining.contains(next));
}

#[test]
fn test_empty_candidates_is_reported_not_patched() {
    let lexicon = words_from_slice(FIVES, 5);
    let (session, _) = Session::new(&lexicon, SessionConfig::new(5))
        .unwrap()
        .apply(Command::Enter(Word::new("qqqqq").unwrap()))
        .unwrap();

    let colors = vec![LetterColor::Misplaced; 5];
    assert!(matches!(
        session.apply(Command::Feedback(colors)),
        Err(Error::EmptyCandidateSet)
    ));
    assert_eq!(session.candidates().len(), lexicon.len());
}

#[test]
fn test_self_play_budget_for_each_size() {
    let lexicons: [(usize, &[&str]); 6] = [
        (3, &["cat", "cot", "cut", "dog", "dig", "bat"]),
        (4, &["lamp", "lump", "limp", "camp", "damp"]),
        (5, FIVES),
        (6, &["planet", "planes", "plants", "slants"]),
        (7, &["example", "samples", "trample"]),
        (8, &["absolute", "obsolete", "resolute"]),
    ];

    for (size, list) in lexicons {
        let lexicon = words_from_slice(list, size);
        assert_eq!(lexicon.len(), list.len());

        let (session, event) = Session::new(&lexicon, SessionConfig::self_play(size))
            .unwrap()
            .apply(Command::Suggest)
            .unwrap();
        assert!(matches!(event, Event::Suggested { .. }));
        assert_eq!(session.config().max_guesses, Some(size + 1));
    }
}

#[test]
fn test_wordnet_lexicon_end_to_end() {
    let root = std::env::temp_dir().join(format!("wordle_assistant_it_{}", std::process::id()));
    let dict = root.join("dict");
    fs::create_dir_all(&dict).unwrap();
    fs::write(
        dict.join("index.noun"),
        "  1 license header\ncat n 1 0 1 0 0\ndog n 1 0 1 0 0\nice_age n 1 0 1 0 0\n",
    )
    .unwrap();
    fs::write(dict.join("index.verb"), "dog v 1 0 1 0 0\ncut v 1 0 1 0 0\n").unwrap();
    fs::write(dict.join("index.adj"), "hot a 1 0 1 0 0\n").unwrap();
    fs::write(dict.join("index.adv"), "").unwrap();

    let lexicon = load_lexicon(&root, LexiconFormat::Auto, 3).unwrap();
    let texts: Vec<&str> = lexicon.iter().map(Word::text).collect();
    assert_eq!(texts, ["cat", "dog", "cut", "hot"]);

    let report = play_game(&lexicon, &lexicon[3], SessionConfig::self_play(3)).unwrap();
    assert!(report.is_solved());

    fs::remove_dir_all(&root).unwrap();
}
