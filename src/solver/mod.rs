//! Wordle solving engine
//!
//! The pattern table is built once and shared by reference; everything else
//! reads from it.

pub mod entropy;
mod error;
mod partition;
mod policy;
mod session;
pub mod simulate;
mod table;

pub use entropy::{
    GuessMetrics, calculate_metrics, entropy, find_best_guess, prob_dist, score_guess,
};
pub use error::SolverError;
pub use partition::{Bucket, Partition, divide_alphabet};
pub use policy::{
    DEFAULT_OPENER, GuessSelector, Opener, SelectionRule, SelectorConfig, Suggestion,
};
pub use session::{Outcome, Session, SessionState};
pub use simulate::{Playthrough, Step, play, play_word};
pub use table::{CandidateId, GuessId, PatternTable, TableError};
