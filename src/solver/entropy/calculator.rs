//! Shannon entropy calculation for Wordle patterns
//!
//! Given a partition of the alphabet, computes the expected information gain.

use super::super::partition::{Partition, divide_alphabet};
use super::super::table::{CandidateId, GuessId, PatternTable};

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct patterns the guess can produce
    pub buckets: usize,
}

/// Probability of each bucket, in bucket order
///
/// Each value is `|bucket| / total`; the values sum to 1.
///
/// # Examples
/// ```
/// use greedy_wordle::core::Word;
/// use greedy_wordle::solver::{PatternTable, divide_alphabet, prob_dist};
///
/// let words = |list: &[&str]| list.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>();
/// let table = PatternTable::build(Vec::new(), words(&["shape", "shake", "shame"])).unwrap();
/// let guess = table.guess_id("shake").unwrap();
///
/// let dist = prob_dist(&divide_alphabet(&table, guess, &table.all_candidates()));
/// assert_eq!(dist, vec![2.0 / 3.0, 1.0 / 3.0]);
/// ```
#[must_use]
pub fn prob_dist(partition: &Partition) -> Vec<f64> {
    let total = partition.total() as f64;
    partition
        .buckets()
        .iter()
        .map(|bucket| bucket.words.len() as f64 / total)
        .collect()
}

/// Shannon entropy of a distribution
///
/// H = Σ p · log₂(1/p)
///
/// Every entry must be strictly positive, which partitions guarantee.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one entry with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n entries
#[must_use]
pub fn entropy(dist: &[f64]) -> f64 {
    debug_assert!(dist.iter().all(|&p| p > 0.0), "zero probability in distribution");
    dist.iter().map(|&p| p * (1.0 / p).log2()).sum()
}

/// Entropy of the pattern distribution `guess` produces over `alphabet`
#[must_use]
pub fn score_guess(table: &PatternTable, guess: GuessId, alphabet: &[CandidateId]) -> f64 {
    entropy(&prob_dist(&divide_alphabet(table, guess, alphabet)))
}

/// Calculate comprehensive metrics for a partition
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(partition: &Partition) -> GuessMetrics {
    if partition.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            buckets: 0,
        };
    }

    let dist = prob_dist(partition);

    let expected_remaining: f64 = partition
        .buckets()
        .iter()
        .zip(&dist)
        .map(|(bucket, p)| p * bucket.words.len() as f64)
        .sum();

    let max_partition = partition
        .buckets()
        .iter()
        .map(|bucket| bucket.words.len())
        .max()
        .unwrap_or(0);

    GuessMetrics {
        entropy: entropy(&dist),
        expected_remaining,
        max_partition,
        buckets: partition.len(),
    }
}
