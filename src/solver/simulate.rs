//! Automated play against a known secret
//!
//! Drives a [`Session`] with feedback read from the pattern table, with no
//! interactive I/O. Used by the solve and benchmark commands.

use super::error::SolverError;
use super::policy::{GuessSelector, SelectionRule};
use super::session::{Outcome, Session};
use super::table::{CandidateId, GuessId};
use crate::core::Pattern;

/// One guess of a simulated game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub guess: GuessId,
    pub pattern: Pattern,
    pub rule: SelectionRule,
    pub entropy: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A complete simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct Playthrough {
    pub secret: CandidateId,
    pub steps: Vec<Step>,
}

impl Playthrough {
    /// Number of guesses used, including the winning one
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }
}

/// Play a full game against `secret` and record every step
///
/// # Errors
/// Returns `SolverError::TurnLimit` if the game has not ended after one turn
/// per candidate plus one (only possible with an opener that gives no
/// information), or any error raised by the session.
pub fn play(
    selector: &GuessSelector<'_>,
    secret: CandidateId,
    hard: bool,
) -> Result<Playthrough, SolverError> {
    let table = selector.table();
    let limit = table.candidate_count() + 1;
    let mut session = Session::new(selector, hard)?;
    let mut steps = Vec::new();

    loop {
        if steps.len() == limit {
            return Err(SolverError::TurnLimit {
                secret: table.candidate(secret).text().to_string(),
                limit,
            });
        }

        let suggestion = *session.suggestion();
        let pattern = table.pattern(suggestion.guess, secret);
        let candidates_before = session.alphabet().len();

        let outcome = session.observe(pattern)?;
        let candidates_after = match outcome {
            Outcome::Solved { .. } => 1,
            Outcome::Continue { remaining, .. } => remaining,
        };

        steps.push(Step {
            guess: suggestion.guess,
            pattern,
            rule: suggestion.rule,
            entropy: suggestion.entropy,
            candidates_before,
            candidates_after,
        });

        if outcome.is_solved() {
            return Ok(Playthrough { secret, steps });
        }
    }
}

/// Number of guesses needed to find `secret`
///
/// # Errors
/// Returns `SolverError::UnknownSecret` if `secret` is not a candidate word,
/// otherwise the same errors as [`play`].
pub fn play_word(
    selector: &GuessSelector<'_>,
    secret: &str,
    hard: bool,
) -> Result<usize, SolverError> {
    let id = selector
        .table()
        .candidate_id(secret)
        .ok_or_else(|| SolverError::UnknownSecret(secret.to_string()))?;
    Ok(play(selector, id, hard)?.turns())
}
