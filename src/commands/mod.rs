//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, all_secrets, run_benchmark, sample_secrets};
pub use interactive::{Feedback, parse_feedback, run_interactive};
pub use solve::{GuessStep, MAX_TURNS, SolveResult, solve_word};
