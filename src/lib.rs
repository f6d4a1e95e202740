//! Greedy Wordle Solver
//!
//! Suggests the guess with the highest Shannon entropy over the words that are
//! still possible, using a pattern table precomputed for every guess and
//! candidate.
//!
//! # Quick Start
//!
//! ```rust
//! use greedy_wordle::core::Word;
//! use greedy_wordle::solver::{GuessSelector, PatternTable, SelectorConfig, Session};
//!
//! let words = |list: &[&str]| list.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>();
//! let table = PatternTable::build(
//!     words(&["soare", "three"]),
//!     words(&["abide", "shape", "shake", "shame"]),
//! ).unwrap();
//! let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
//!
//! let mut session = Session::new(&selector, false).unwrap();
//! while !session.observe(table.lookup(session.suggest().text(), "shame").unwrap())
//!     .unwrap()
//!     .is_solved()
//! {}
//! assert!(session.turn() <= 4);
//! ```

// Core domain types
pub mod core;

// Pattern table, entropy search and sessions
pub mod solver;

// Word lists
pub mod wordlists;

// Pattern table persistence
pub mod cache;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
