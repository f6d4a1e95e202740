//! Precomputed guess × candidate pattern table
//!
//! Every pattern the solver ever needs is computed once, up front, and stored
//! in a flat row-major array. Words are addressed by dense ids so the hot
//! loops never hash strings.

use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Index of a word in the guess universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuessId(usize);

/// Index of a word in the candidate (possible secret) universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(usize);

impl GuessId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl CandidateId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Errors raised while building or querying a pattern table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The candidate list was empty
    NoCandidates,
    /// Stored patterns do not match the word list sizes
    ShapeMismatch { expected: usize, found: usize },
    /// A word outside the known guess or candidate universe
    LookupMiss(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "Candidate word list is empty"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "Pattern table holds {found} entries, expected {expected}")
            }
            Self::LookupMiss(word) => write!(f, "'{word}' is not in the pattern table"),
        }
    }
}

impl std::error::Error for TableError {}

/// Immutable mapping from (guess, candidate) to feedback pattern
///
/// Built once and shared by reference with every selector and session.
///
/// # Examples
/// ```
/// use greedy_wordle::core::{Pattern, Word};
/// use greedy_wordle::solver::PatternTable;
///
/// let words = |list: &[&str]| list.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>();
/// let table = PatternTable::build(words(&["three"]), words(&["abide", "three"])).unwrap();
///
/// assert_eq!(table.lookup("three", "abide").unwrap().digits(), [0, 0, 0, 0, 2]);
/// // Candidates are always guessable too
/// assert_eq!(table.guess_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PatternTable {
    guesses: Vec<Word>,
    candidates: Vec<Word>,
    guess_ids: FxHashMap<String, GuessId>,
    candidate_ids: FxHashMap<String, CandidateId>,
    candidate_guesses: Vec<GuessId>,
    patterns: Vec<Pattern>,
}

impl PatternTable {
    /// Build the table over the full `allowed` × `possible` cross product
    ///
    /// The guess universe is `allowed` followed by any entry of `possible`
    /// it lacks. Both lists keep their order; repeated words are dropped
    /// after their first occurrence.
    ///
    /// # Errors
    /// Returns `TableError::NoCandidates` if `possible` is empty.
    pub fn build(allowed: Vec<Word>, possible: Vec<Word>) -> Result<Self, TableError> {
        let candidates = dedup(possible);
        if candidates.is_empty() {
            return Err(TableError::NoCandidates);
        }
        let guesses = dedup(allowed.into_iter().chain(candidates.iter().cloned()).collect());

        let patterns: Vec<Pattern> = guesses
            .par_iter()
            .map(|guess| {
                candidates
                    .iter()
                    .map(|candidate| Pattern::calculate(guess, candidate))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .concat();

        Self::from_parts(guesses, candidates, patterns)
    }

    /// Reassemble a table from its word lists and flat row-major patterns
    ///
    /// # Errors
    /// Returns `TableError` if the candidate list is empty, the pattern count
    /// does not equal `guesses.len() × candidates.len()`, or some candidate is
    /// missing from the guess list.
    pub fn from_parts(
        guesses: Vec<Word>,
        candidates: Vec<Word>,
        patterns: Vec<Pattern>,
    ) -> Result<Self, TableError> {
        if candidates.is_empty() {
            return Err(TableError::NoCandidates);
        }

        let expected = guesses.len() * candidates.len();
        if patterns.len() != expected {
            return Err(TableError::ShapeMismatch {
                expected,
                found: patterns.len(),
            });
        }

        let guess_ids: FxHashMap<String, GuessId> = guesses
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_string(), GuessId(i)))
            .collect();
        let candidate_ids: FxHashMap<String, CandidateId> = candidates
            .iter()
            .enumerate()
            .map(|(i, w)| (w.text().to_string(), CandidateId(i)))
            .collect();
        let candidate_guesses = candidates
            .iter()
            .map(|w| {
                guess_ids
                    .get(w.text())
                    .copied()
                    .ok_or_else(|| TableError::LookupMiss(w.text().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            guesses,
            candidates,
            guess_ids,
            candidate_ids,
            candidate_guesses,
            patterns,
        })
    }

    /// Pattern for a guess against a candidate, by id
    #[inline]
    #[must_use]
    pub fn pattern(&self, guess: GuessId, candidate: CandidateId) -> Pattern {
        self.patterns[guess.0 * self.candidates.len() + candidate.0]
    }

    /// Pattern for a guess against a candidate, by text
    ///
    /// # Errors
    /// Returns `TableError::LookupMiss` if either word is outside its universe.
    pub fn lookup(&self, guess: &str, candidate: &str) -> Result<Pattern, TableError> {
        let guess_id = self
            .guess_id(guess)
            .ok_or_else(|| TableError::LookupMiss(guess.to_string()))?;
        let candidate_id = self
            .candidate_id(candidate)
            .ok_or_else(|| TableError::LookupMiss(candidate.to_string()))?;
        Ok(self.pattern(guess_id, candidate_id))
    }

    #[must_use]
    pub fn guess_id(&self, word: &str) -> Option<GuessId> {
        self.guess_ids.get(word).copied()
    }

    #[must_use]
    pub fn candidate_id(&self, word: &str) -> Option<CandidateId> {
        self.candidate_ids.get(word).copied()
    }

    /// The guess id of a candidate word
    #[inline]
    #[must_use]
    pub fn candidate_as_guess(&self, candidate: CandidateId) -> GuessId {
        self.candidate_guesses[candidate.0]
    }

    #[must_use]
    pub fn guess(&self, id: GuessId) -> &Word {
        &self.guesses[id.0]
    }

    #[must_use]
    pub fn candidate(&self, id: CandidateId) -> &Word {
        &self.candidates[id.0]
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Every guess id, in source order
    #[must_use]
    pub fn all_guesses(&self) -> Vec<GuessId> {
        (0..self.guesses.len()).map(GuessId).collect()
    }

    /// Every candidate id, in source order
    #[must_use]
    pub fn all_candidates(&self) -> Vec<CandidateId> {
        (0..self.candidates.len()).map(CandidateId).collect()
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Flat row-major pattern storage (one row per guess)
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.text().to_string()))
        .collect()
}
