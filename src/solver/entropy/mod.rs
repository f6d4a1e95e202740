//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, entropy, prob_dist, score_guess};
pub use selector::find_best_guess;
