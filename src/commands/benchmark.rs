//! Benchmark command
//!
//! Plays many random self-play games in parallel and aggregates the results.

use crate::core::Word;
use crate::error::{Error, Result};
use crate::session::{GameReport, SessionConfig, play_random_game};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    /// Game `i` draws its secret from `seed + i`; `None` seeds from the OS
    pub seed: Option<u64>,
    pub session: SessionConfig,
    pub show_progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Mean guesses over solved games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets that were not found within the budget
    pub failed_words: Vec<Word>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    fn from_reports(reports: &[GameReport], duration: Duration) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failed_words = Vec::new();

        for report in reports {
            if report.is_solved() {
                *distribution.entry(report.guesses()).or_insert(0) += 1;
            } else {
                failed_words.push(report.secret.clone());
            }
        }

        let solved: usize = distribution.values().sum();
        let total_guesses: usize = distribution.iter().map(|(g, n)| g * n).sum();
        let average_guesses = if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        };
        let seconds = duration.as_secs_f64();

        Self {
            total_games: reports.len(),
            solved,
            failed: failed_words.len(),
            average_guesses,
            min_guesses: distribution.keys().next().copied().unwrap_or(0),
            max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
            distribution,
            failed_words,
            duration,
            games_per_second: if seconds > 0.0 {
                reports.len() as f64 / seconds
            } else {
                0.0
            },
        }
    }

    /// Fraction of games solved, in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_games as f64 * 100.0
        }
    }
}

fn progress_bar(games: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run `config.games` random games over `lexicon`
///
/// Games are independent and run in parallel.
///
/// # Errors
/// Returns `Error::EmptyLexicon` if `lexicon` is empty, or the first error
/// raised by any game.
pub fn run_benchmark(lexicon: &[Word], config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    if lexicon.is_empty() {
        return Err(Error::EmptyLexicon {
            word_size: config.session.word_size,
        });
    }

    info!(
        "benchmarking {} games over {} words",
        config.games,
        lexicon.len()
    );

    let pb = progress_bar(config.games, config.show_progress);
    let start = Instant::now();

    let reports = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let report = play_random_game(lexicon, config.session, &mut rng);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    Ok(BenchmarkResult::from_reports(&reports, start.elapsed()))
}
