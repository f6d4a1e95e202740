//! Word lists for Wordle solving
//!
//! The two dictionaries are plain text files with one word per line.

pub mod loader;

pub use loader::{WordLists, load_from_file, words_from_slice};

/// Default location of the possible secret words
pub const DEFAULT_ANSWERS_PATH: &str = "data/possible_words.txt";

/// Default location of the allowed guesses
pub const DEFAULT_GUESSES_PATH: &str = "data/allowed_guesses.txt";
