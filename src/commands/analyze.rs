//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific guess against
//! the full alphabet.

use crate::core::Pattern;
use crate::solver::{GuessMetrics, PatternTable, SolverError, calculate_metrics, divide_alphabet};

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
    /// The largest buckets, biggest first
    pub largest_buckets: Vec<(Pattern, usize)>,
}

impl AnalysisResult {
    /// Factor by which the guess shrinks the alphabet on average, 2^H
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze `word` as an opening guess
///
/// `top` limits how many of the largest buckets are reported.
///
/// # Errors
///
/// Returns `SolverError::UnknownGuess` if `word` is not in the guess universe.
pub fn analyze_word(
    table: &PatternTable,
    word: &str,
    top: usize,
) -> Result<AnalysisResult, SolverError> {
    let word = word.trim().to_lowercase();
    let guess = table
        .guess_id(&word)
        .ok_or_else(|| SolverError::UnknownGuess(word.clone()))?;

    let partition = divide_alphabet(table, guess, &table.all_candidates());
    let metrics = calculate_metrics(&partition);

    let mut largest_buckets: Vec<(Pattern, usize)> = partition
        .buckets()
        .iter()
        .map(|bucket| (bucket.pattern, bucket.words.len()))
        .collect();
    // Stable sort keeps first-appearance order among equal sizes
    largest_buckets.sort_by_key(|&(_, size)| std::cmp::Reverse(size));
    largest_buckets.truncate(top);

    Ok(AnalysisResult {
        word,
        metrics,
        total_candidates: partition.total(),
        largest_buckets,
    })
}
