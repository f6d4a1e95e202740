//! Word list loading utilities
//!
//! Provides functions to load word lists from files or string slices.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// The two dictionaries the solver works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    /// Words that can be the secret
    pub possible: Vec<Word>,
    /// Words that may be guessed
    pub allowed: Vec<Word>,
}

impl WordLists {
    /// Load both dictionaries from files
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either file cannot be read.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(possible: P, allowed: Q) -> io::Result<Self> {
        Ok(Self {
            possible: load_from_file(possible)?,
            allowed: load_from_file(allowed)?,
        })
    }
}

/// Load words from a file
///
/// Returns a vector of valid Word instances in file order, skipping blank
/// lines and any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use greedy_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/possible_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use greedy_wordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["soare", "toolong", "abide"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
