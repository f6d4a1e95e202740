//! Solver error type

use crate::core::Pattern;
use std::fmt;

/// Errors raised by guess selection, sessions and simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The configured opener is not in the guess universe
    UnknownOpener(String),
    /// A guess word outside the guess universe
    UnknownGuess(String),
    /// A secret word outside the candidate universe
    UnknownSecret(String),
    /// No guess in the search pool had positive entropy
    DegenerateSearch { alphabet_size: usize },
    /// No remaining candidate produces the reported feedback
    InconsistentFeedback { guess: String, pattern: Pattern },
    /// Feedback was reported after the game was already solved
    AlreadySolved { turns: usize },
    /// A simulated game ran past its turn limit
    TurnLimit { secret: String, limit: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOpener(word) => {
                write!(f, "Opening guess '{word}' is not an allowed guess")
            }
            Self::UnknownGuess(word) => write!(f, "'{word}' is not an allowed guess"),
            Self::UnknownSecret(word) => write!(f, "'{word}' is not a possible secret word"),
            Self::DegenerateSearch { alphabet_size } => write!(
                f,
                "No guess carries information over {alphabet_size} remaining candidates"
            ),
            Self::InconsistentFeedback { guess, pattern } => write!(
                f,
                "Feedback {pattern} for '{guess}' matches no remaining candidate"
            ),
            Self::AlreadySolved { turns } => {
                write!(f, "Game already solved in {turns} turns; restart first")
            }
            Self::TurnLimit { secret, limit } => {
                write!(f, "Gave up on '{secret}' after {limit} turns")
            }
        }
    }
}

impl std::error::Error for SolverError {}
