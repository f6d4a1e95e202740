//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no solver knowledge.
//! All types here are pure, testable, and have clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{Pattern, PatternError, Tile};
pub use word::{WORD_LENGTH, Word, WordError};
