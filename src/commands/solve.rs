//! Word solving command
//!
//! Simulates one game against a known secret and returns the solution path.

use crate::core::Pattern;
use crate::solver::{GuessSelector, SelectionRule, SolverError, play};

/// Guesses allowed in a real game of Wordle
pub const MAX_TURNS: usize = 6;

/// Result of solving a word
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub target: String,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    /// Whether the secret was found within [`MAX_TURNS`] guesses
    #[must_use]
    pub fn success(&self) -> bool {
        self.guesses.len() <= MAX_TURNS
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub rule: SelectionRule,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
}

impl GuessStep {
    /// Bits actually gained by this guess
    #[must_use]
    pub fn information_gained(&self) -> f64 {
        (self.candidates_before as f64 / self.candidates_after.max(1) as f64).log2()
    }
}

/// Solve `target` with the given selector
///
/// # Errors
///
/// Returns `SolverError::UnknownSecret` if `target` is not a possible secret,
/// or any error raised while playing the game.
pub fn solve_word(
    selector: &GuessSelector<'_>,
    target: &str,
    hard: bool,
) -> Result<SolveResult, SolverError> {
    let table = selector.table();
    let target = target.trim().to_lowercase();
    let secret = table
        .candidate_id(&target)
        .ok_or_else(|| SolverError::UnknownSecret(target.clone()))?;

    let game = play(selector, secret, hard)?;
    let guesses = game
        .steps
        .iter()
        .map(|step| GuessStep {
            word: table.guess(step.guess).text().to_string(),
            pattern: step.pattern,
            rule: step.rule,
            candidates_before: step.candidates_before,
            candidates_after: step.candidates_after,
            entropy: step.entropy,
        })
        .collect();

    Ok(SolveResult { target, guesses })
}
