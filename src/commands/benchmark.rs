//! Benchmark command
//!
//! Plays the solver against many secrets and summarizes the turn counts.
//! Used both for a random sample and for the whole candidate list.

use super::solve::MAX_TURNS;
use crate::solver::{CandidateId, GuessSelector, PatternTable, SolverError, play};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Number of secrets solved in each turn count
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets that needed more than six guesses, in input order
    pub failures: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct secrets at random
///
/// The same seed always yields the same sample. A count above the number of
/// candidates returns every candidate.
#[must_use]
pub fn sample_secrets(table: &PatternTable, count: usize, seed: u64) -> Vec<CandidateId> {
    let mut rng = StdRng::seed_from_u64(seed);
    table
        .all_candidates()
        .choose_multiple(&mut rng, count)
        .copied()
        .collect()
}

/// The first `limit` secrets in list order, or all of them
#[must_use]
pub fn all_secrets(table: &PatternTable, limit: Option<usize>) -> Vec<CandidateId> {
    let mut secrets = table.all_candidates();
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }
    secrets
}

/// Play one game per secret and collect statistics
///
/// Games run in parallel; `progress` is advanced once per finished game.
///
/// # Errors
///
/// Returns the first `SolverError` raised by any game.
pub fn run_benchmark(
    selector: &GuessSelector<'_>,
    secrets: &[CandidateId],
    hard: bool,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();

    let turns: Vec<usize> = secrets
        .par_iter()
        .map(|&secret| {
            let game = play(selector, secret, hard);
            progress.inc(1);
            game.map(|g| g.turns())
        })
        .collect::<Result<_, _>>()?;

    let duration = start.elapsed();
    let table = selector.table();

    let mut distribution = BTreeMap::new();
    for &t in &turns {
        *distribution.entry(t).or_insert(0) += 1;
    }

    let failures = secrets
        .iter()
        .zip(&turns)
        .filter(|&(_, &t)| t > MAX_TURNS)
        .map(|(&secret, &t)| (table.candidate(secret).text().to_string(), t))
        .collect();

    let total_words = turns.len();
    let total_guesses: usize = turns.iter().sum();
    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };
    let seconds = duration.as_secs_f64();

    Ok(BenchmarkResult {
        total_words,
        total_guesses,
        average_guesses,
        min_guesses: turns.iter().copied().min().unwrap_or(0),
        max_guesses: turns.iter().copied().max().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    })
}
