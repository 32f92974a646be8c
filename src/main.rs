//! Wordle Assistant - CLI
//!
//! Suggests maximum-entropy guesses for 3 to 8 letter Wordle variants, with TUI
//! and text modes, self-play solving, and benchmarking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use std::io;
use std::path::PathBuf;
use wordle_assistant::{
    commands::{BenchmarkConfig, analyze_word, run_benchmark, run_simple, solve_word},
    core::{MAX_WORD_SIZE, MIN_WORD_SIZE, Word},
    interactive::{App, run_tui},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    session::{Session, SessionConfig},
    wordlists::{LexiconFormat, load_lexicon},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle assistant that suggests the guess with the highest expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters per word (3-8)
    #[arg(short, long, global = true, default_value_t = 5, value_parser = parse_word_size)]
    size: usize,

    /// Lexicon: WordNet database directory or plain word list file
    #[arg(short, long, global = true, default_value = "WordNet-3.0")]
    lexicon: PathBuf,

    /// Lexicon format (auto: directory = wordnet, file = plain)
    #[arg(short, long, global = true, value_enum, default_value_t = LexiconFormat::Auto)]
    format: LexiconFormat,

    /// Guess budget (default: unlimited when playing, size + 1 when self-playing)
    #[arg(short, long, global = true)]
    max_guesses: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (guess/word/remove/new/quit commands)
    Simple,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy for each turn
        #[arg(long)]
        details: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Play many random self-play games and report statistics
    Benchmark {
        /// Number of random games to play
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Seed for reproducible secret selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_word_size(text: &str) -> Result<usize, String> {
    let size: usize = text.parse().map_err(|e| format!("{e}"))?;
    if (MIN_WORD_SIZE..=MAX_WORD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "word size must be between {MIN_WORD_SIZE} and {MAX_WORD_SIZE}"
        ))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = load_lexicon(&cli.lexicon, cli.format, cli.size)
        .with_context(|| format!("failed to load lexicon {}", cli.lexicon.display()))?;
    info!("{} {}-letter words available", lexicon.len(), cli.size);

    let interactive = SessionConfig::new(cli.size).with_max_guesses(cli.max_guesses);
    let self_play = match cli.max_guesses {
        Some(max) => SessionConfig::new(cli.size).with_max_guesses(Some(max)),
        None => SessionConfig::self_play(cli.size),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&lexicon, interactive),
        Commands::Simple => run_simple_command(&lexicon, interactive),
        Commands::Solve { word, details } => run_solve_command(&word, details, &lexicon, self_play),
        Commands::Analyze { word } => run_analyze_command(&word, &lexicon, cli.size),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &lexicon, self_play)
        }
    }
}

fn run_solve_command(
    word: &str,
    details: bool,
    lexicon: &[Word],
    config: SessionConfig,
) -> Result<()> {
    let result = solve_word(word, lexicon, config)?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_analyze_command(word: &str, lexicon: &[Word], word_size: usize) -> Result<()> {
    let result = analyze_word(word, lexicon, word_size)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: Option<u64>,
    lexicon: &[Word],
    config: SessionConfig,
) -> Result<()> {
    match seed {
        Some(seed) => println!("Running {count} random games (seed {seed})..."),
        None => println!("Running {count} random games..."),
    }

    let config = BenchmarkConfig {
        games: count,
        seed,
        session: config,
        show_progress: true,
    };
    let result = run_benchmark(lexicon, &config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(lexicon: &[Word], config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    run_simple(lexicon, config, stdin.lock(), io::stdout())?;
    Ok(())
}

fn run_play_command(lexicon: &[Word], config: SessionConfig) -> Result<()> {
    let session = Session::new(lexicon, config)?;
    run_tui(App::new(session))
}
