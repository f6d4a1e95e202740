//! Pure entropy-based word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::score_guess;
use super::super::table::{CandidateId, GuessId, PatternTable};
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Scores are computed in parallel but compared in `pool` order with a
/// strict `>`, so the first guess reaching the top score wins ties.
///
/// Returns the winning guess and its entropy, or `None` if no guess in the
/// pool has positive entropy.
///
/// # Examples
/// ```
/// use greedy_wordle::core::Word;
/// use greedy_wordle::solver::{PatternTable, find_best_guess};
///
/// let words = |list: &[&str]| list.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>();
/// let table = PatternTable::build(
///     words(&["zzzzz", "shake"]),
///     words(&["shape", "shake", "shame"]),
/// ).unwrap();
///
/// let pool = [table.guess_id("zzzzz").unwrap(), table.guess_id("shake").unwrap()];
/// let (best, entropy) = find_best_guess(&table, &table.all_candidates(), &pool).unwrap();
/// assert_eq!(table.guess(best).text(), "shake");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn find_best_guess(
    table: &PatternTable,
    alphabet: &[CandidateId],
    pool: &[GuessId],
) -> Option<(GuessId, f64)> {
    let scores: Vec<f64> = pool
        .par_iter()
        .map(|&guess| score_guess(table, guess, alphabet))
        .collect();

    let mut best = None;
    let mut highest = 0.0;
    for (&guess, &score) in pool.iter().zip(&scores) {
        if score > highest {
            best = Some(guess);
            highest = score;
        }
    }

    best.map(|guess| (guess, highest))
}
