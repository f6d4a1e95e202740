//! Alphabet partitioning by feedback pattern
//!
//! Splits the remaining candidates into buckets keyed by the pattern a guess
//! would produce against each of them.

use super::table::{CandidateId, GuessId, PatternTable};
use crate::core::Pattern;
use rustc_hash::FxHashMap;

/// Candidates sharing one feedback pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub pattern: Pattern,
    pub words: Vec<CandidateId>,
}

/// Buckets in order of first appearance while scanning the alphabet
///
/// No bucket is ever empty.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    buckets: Vec<Bucket>,
    slots: FxHashMap<Pattern, usize>,
    total: usize,
}

impl Partition {
    /// All buckets, in first-appearance order
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Words for a pattern, if any candidate produces it
    #[must_use]
    pub fn get(&self, pattern: Pattern) -> Option<&[CandidateId]> {
        self.slots
            .get(&pattern)
            .map(|&slot| self.buckets[slot].words.as_slice())
    }

    /// Consume the partition, keeping only the bucket for `pattern`
    #[must_use]
    pub fn take(mut self, pattern: Pattern) -> Option<Vec<CandidateId>> {
        let slot = self.slots.remove(&pattern)?;
        Some(self.buckets.swap_remove(slot).words)
    }

    /// Number of buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of candidates across all buckets
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}

/// Partition `alphabet` by the pattern `guess` produces against each word
///
/// Bucket order and order within a bucket both follow the order of
/// `alphabet`.
///
/// # Examples
/// ```
/// use greedy_wordle::core::{Pattern, Word};
/// use greedy_wordle::solver::{PatternTable, divide_alphabet};
///
/// let words = |list: &[&str]| list.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>();
/// let table = PatternTable::build(Vec::new(), words(&["shape", "shake", "shame"])).unwrap();
/// let guess = table.guess_id("shake").unwrap();
///
/// let partition = divide_alphabet(&table, guess, &table.all_candidates());
/// assert_eq!(partition.len(), 2);
/// assert_eq!(partition.get(Pattern::PERFECT).unwrap().len(), 1);
/// ```
#[must_use]
pub fn divide_alphabet(
    table: &PatternTable,
    guess: GuessId,
    alphabet: &[CandidateId],
) -> Partition {
    let mut partition = Partition {
        total: alphabet.len(),
        ..Partition::default()
    };

    for &word in alphabet {
        let pattern = table.pattern(guess, word);
        let slot = *partition.slots.entry(pattern).or_insert_with(|| {
            partition.buckets.push(Bucket {
                pattern,
                words: Vec::new(),
            });
            partition.buckets.len() - 1
        });
        partition.buckets[slot].words.push(word);
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(table: &PatternTable, ids: &[CandidateId]) -> Vec<String> {
        ids.iter()
            .map(|&id| table.candidate(id).text().to_string())
            .collect()
    }

    #[test]
    fn shake_splits_shape_family() {
        let table = PatternTable::build(Vec::new(), words(&["shape", "shake", "shame"])).unwrap();
        let guess = table.guess_id("shake").unwrap();
        let partition = divide_alphabet(&table, guess, &table.all_candidates());

        let perfect = partition.get(Pattern::PERFECT).unwrap();
        assert_eq!(texts(&table, perfect), ["shake"]);

        let near = Pattern::from_digits([2, 2, 2, 0, 2]).unwrap();
        assert_eq!(texts(&table, partition.get(near).unwrap()), ["shape", "shame"]);

        assert_eq!(partition.len(), 2);
        assert_eq!(partition.total(), 3);
        // "shape" comes first in the alphabet, so its bucket is first
        assert_eq!(partition.buckets()[0].pattern, near);
    }

    #[test]
    fn buckets_partition_the_alphabet_exactly() {
        let table = PatternTable::build(
            words(&["soare", "three"]),
            words(&["abide", "shape", "shake", "shame", "crane", "slate", "irate"]),
        )
        .unwrap();
        let alphabet = table.all_candidates();

        for guess in table.all_guesses() {
            let partition = divide_alphabet(&table, guess, &alphabet);
            assert!(partition.buckets().iter().all(|b| !b.words.is_empty()));

            let mut seen: Vec<CandidateId> = partition
                .buckets()
                .iter()
                .flat_map(|b| b.words.iter().copied())
                .collect();
            seen.sort();
            assert_eq!(seen, alphabet);

            for bucket in partition.buckets() {
                for &word in &bucket.words {
                    assert_eq!(table.pattern(guess, word), bucket.pattern);
                }
            }
        }
    }

    #[test]
    fn take_returns_only_matching_bucket() {
        let table = PatternTable::build(Vec::new(), words(&["shape", "shake", "shame"])).unwrap();
        let guess = table.guess_id("shake").unwrap();
        let partition = divide_alphabet(&table, guess, &table.all_candidates());

        let near = Pattern::from_digits([2, 2, 2, 0, 2]).unwrap();
        let remaining = partition.clone().take(near).unwrap();
        assert_eq!(texts(&table, &remaining), ["shape", "shame"]);
        assert!(partition.take(Pattern::new(0)).is_none());
    }

    #[test]
    fn empty_alphabet_has_no_buckets() {
        let table = PatternTable::build(Vec::new(), words(&["shape"])).unwrap();
        let guess = table.guess_id("shape").unwrap();
        let partition = divide_alphabet(&table, guess, &[]);
        assert!(partition.is_empty());
        assert_eq!(partition.total(), 0);
    }
}
