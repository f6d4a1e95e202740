//! Guess selection policy
//!
//! Wraps the full entropy search with an ordered list of shortcuts.

use super::entropy::find_best_guess;
use super::error::SolverError;
use super::table::{CandidateId, GuessId, PatternTable};

/// Precomputed maximum-entropy opener for the reference dictionaries
pub const DEFAULT_OPENER: &str = "soare";

/// How the opening guess is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opener {
    /// A known opener, used verbatim
    Fixed(String),
    /// Run the full search once when the selector is built
    Search,
}

/// Selector configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Opening guess used while the alphabet is still complete
    pub opener: Opener,
    /// Alphabets this small only search among themselves (default: 3)
    pub small_alphabet: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            opener: Opener::Fixed(DEFAULT_OPENER.to_string()),
            small_alphabet: 3,
        }
    }
}

/// Which rule produced a suggestion
///
/// Rules are checked in declaration order; the first match wins:
/// ```text
/// alphabet is complete                 → Opener
/// one candidate left                   → Certain
/// alphabet <= small_alphabet, or hard  → Restricted
/// otherwise                            → FullSearch
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// Full alphabet: the configured opener
    ///
    /// "Full" means the size of the loaded candidate list, so with a
    /// one-word dictionary this rule wins over [`SelectionRule::Certain`]
    /// and the opener is suggested instead of that word.
    Opener,
    /// One candidate left: guess it
    Certain,
    /// Search only among the remaining candidates
    Restricted,
    /// Search the whole guess universe
    FullSearch,
}

/// A suggested guess and how it was reached
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub guess: GuessId,
    pub rule: SelectionRule,
    /// Entropy of the guess, when a search computed it
    pub entropy: Option<f64>,
}

/// Guess selector with opener, endgame and hard-mode shortcuts
///
/// # Examples
/// ```
/// use greedy_wordle::core::Word;
/// use greedy_wordle::solver::{GuessSelector, PatternTable, SelectionRule, SelectorConfig};
///
/// let words = |list: &[&str]| list.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>();
/// let table = PatternTable::build(
///     words(&["soare", "three"]),
///     words(&["abide", "shape", "shake", "shame"]),
/// ).unwrap();
/// let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
///
/// let opening = selector.select(&table.all_candidates(), false).unwrap();
/// assert_eq!(opening.rule, SelectionRule::Opener);
/// assert_eq!(table.guess(opening.guess).text(), "soare");
/// ```
#[derive(Debug)]
pub struct GuessSelector<'t> {
    table: &'t PatternTable,
    opener: GuessId,
    small_alphabet: usize,
    full_pool: Vec<GuessId>,
}

impl<'t> GuessSelector<'t> {
    /// Create a selector over `table`
    ///
    /// # Errors
    /// Returns `SolverError::UnknownOpener` if a fixed opener is not in the
    /// guess universe, or `SolverError::DegenerateSearch` if an opener search
    /// finds no informative guess.
    pub fn new(table: &'t PatternTable, config: &SelectorConfig) -> Result<Self, SolverError> {
        let full_pool = table.all_guesses();

        let opener = match &config.opener {
            Opener::Fixed(word) => table
                .guess_id(word)
                .ok_or_else(|| SolverError::UnknownOpener(word.clone()))?,
            Opener::Search => {
                let alphabet = table.all_candidates();
                find_best_guess(table, &alphabet, &full_pool)
                    .map(|(guess, _)| guess)
                    .ok_or(SolverError::DegenerateSearch {
                        alphabet_size: alphabet.len(),
                    })?
            }
        };

        Ok(Self {
            table,
            opener,
            small_alphabet: config.small_alphabet,
            full_pool,
        })
    }

    #[must_use]
    pub const fn table(&self) -> &'t PatternTable {
        self.table
    }

    #[must_use]
    pub const fn opener(&self) -> GuessId {
        self.opener
    }

    /// Rule that applies to an alphabet of `size` words
    #[must_use]
    pub fn rule_for(&self, size: usize, hard: bool) -> SelectionRule {
        if size == self.table.candidate_count() {
            SelectionRule::Opener
        } else if size == 1 {
            SelectionRule::Certain
        } else if size <= self.small_alphabet || hard {
            SelectionRule::Restricted
        } else {
            SelectionRule::FullSearch
        }
    }

    /// Suggest the next guess for `alphabet`
    ///
    /// # Errors
    /// Returns `SolverError::DegenerateSearch` if the search finds no guess
    /// with positive entropy. The shortcuts make this unreachable for any
    /// non-empty alphabet produced by a session.
    pub fn select(&self, alphabet: &[CandidateId], hard: bool) -> Result<Suggestion, SolverError> {
        let rule = self.rule_for(alphabet.len(), hard);

        let (guess, entropy) = match rule {
            SelectionRule::Opener => (self.opener, None),
            SelectionRule::Certain => (self.table.candidate_as_guess(alphabet[0]), None),
            SelectionRule::Restricted => {
                let pool: Vec<GuessId> = alphabet
                    .iter()
                    .map(|&word| self.table.candidate_as_guess(word))
                    .collect();
                self.search(alphabet, &pool)?
            }
            SelectionRule::FullSearch => self.search(alphabet, &self.full_pool)?,
        };

        Ok(Suggestion {
            guess,
            rule,
            entropy,
        })
    }

    fn search(
        &self,
        alphabet: &[CandidateId],
        pool: &[GuessId],
    ) -> Result<(GuessId, Option<f64>), SolverError> {
        let best = find_best_guess(self.table, alphabet, pool);
        debug_assert!(
            best.is_some() || alphabet.is_empty(),
            "no informative guess over {} candidates",
            alphabet.len()
        );
        best.map(|(guess, entropy)| (guess, Some(entropy)))
            .ok_or(SolverError::DegenerateSearch {
                alphabet_size: alphabet.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn table() -> PatternTable {
        PatternTable::build(
            words(&["soare", "three", "zzzzz", "chimp"]),
            words(&[
                "abide", "shape", "shake", "shame", "crane", "slate", "irate", "trace", "stare",
            ]),
        )
        .unwrap()
    }

    fn ids(table: &PatternTable, list: &[&str]) -> Vec<CandidateId> {
        list.iter().map(|w| table.candidate_id(w).unwrap()).collect()
    }

    #[test]
    fn rules_checked_in_order() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let full = table.candidate_count();

        assert_eq!(selector.rule_for(full, false), SelectionRule::Opener);
        assert_eq!(selector.rule_for(full, true), SelectionRule::Opener);
        assert_eq!(selector.rule_for(1, true), SelectionRule::Certain);
        assert_eq!(selector.rule_for(1, false), SelectionRule::Certain);
        assert_eq!(selector.rule_for(3, false), SelectionRule::Restricted);
        assert_eq!(selector.rule_for(2, false), SelectionRule::Restricted);
        assert_eq!(selector.rule_for(4, false), SelectionRule::FullSearch);
        assert_eq!(selector.rule_for(4, true), SelectionRule::Restricted);
    }

    #[test]
    fn opener_on_full_alphabet_in_either_mode() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let alphabet = table.all_candidates();

        for hard in [false, true] {
            let suggestion = selector.select(&alphabet, hard).unwrap();
            assert_eq!(suggestion.rule, SelectionRule::Opener);
            assert_eq!(table.guess(suggestion.guess).text(), "soare");
            assert_eq!(suggestion.entropy, None);
        }
    }

    #[test]
    fn single_candidate_is_guessed_directly() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();

        let suggestion = selector.select(&ids(&table, &["trace"]), false).unwrap();
        assert_eq!(suggestion.rule, SelectionRule::Certain);
        assert_eq!(table.guess(suggestion.guess).text(), "trace");
    }

    #[test]
    fn hard_mode_stays_inside_alphabet() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let alphabet = ids(&table, &["shame", "shape"]);

        let suggestion = selector.select(&alphabet, true).unwrap();
        assert_eq!(suggestion.rule, SelectionRule::Restricted);
        assert_eq!(table.guess(suggestion.guess).text(), "shame");
    }

    #[test]
    fn hard_mode_restricts_large_alphabets_too() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let alphabet = ids(&table, &["shape", "shake", "shame", "crane", "slate"]);

        let suggestion = selector.select(&alphabet, true).unwrap();
        assert_eq!(suggestion.rule, SelectionRule::Restricted);
        let word = table.guess(suggestion.guess).text();
        assert!(["shape", "shake", "shame", "crane", "slate"].contains(&word));
    }

    #[test]
    fn full_search_may_pick_non_candidate() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let alphabet = ids(&table, &["shape", "shake", "shame", "abide"]);

        // chimp separates all four, no candidate manages more than three buckets
        let suggestion = selector.select(&alphabet, false).unwrap();
        assert_eq!(suggestion.rule, SelectionRule::FullSearch);
        assert_eq!(table.guess(suggestion.guess).text(), "chimp");
        assert!(table.candidate_id("chimp").is_none());
        assert!((suggestion.entropy.unwrap() - 2.0).abs() < 1e-9);

        let best = find_best_guess(&table, &alphabet, &table.all_guesses()).unwrap();
        assert_eq!(suggestion.guess, best.0);

        // Hard mode on the same alphabet stays inside it
        let hard = selector.select(&alphabet, true).unwrap();
        assert_eq!(hard.rule, SelectionRule::Restricted);
        assert_eq!(table.guess(hard.guess).text(), "shape");
        assert!((hard.entropy.unwrap() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn one_word_dictionary_still_gets_opener() {
        let table = PatternTable::build(words(&["soare"]), words(&["abide"])).unwrap();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();

        assert_eq!(selector.rule_for(1, false), SelectionRule::Opener);
        let suggestion = selector.select(&table.all_candidates(), false).unwrap();
        assert_eq!(table.guess(suggestion.guess).text(), "soare");
    }

    #[test]
    fn unknown_opener_rejected() {
        let table = table();
        let config = SelectorConfig {
            opener: Opener::Fixed("salet".to_string()),
            ..SelectorConfig::default()
        };
        assert_eq!(
            GuessSelector::new(&table, &config).unwrap_err(),
            SolverError::UnknownOpener("salet".to_string())
        );
    }

    #[test]
    fn searched_opener_matches_full_search() {
        let table = table();
        let config = SelectorConfig {
            opener: Opener::Search,
            ..SelectorConfig::default()
        };
        let selector = GuessSelector::new(&table, &config).unwrap();

        let (expected, _) =
            find_best_guess(&table, &table.all_candidates(), &table.all_guesses()).unwrap();
        assert_eq!(selector.opener(), expected);
    }

    #[test]
    fn empty_alphabet_is_degenerate() {
        let table = table();
        let config = SelectorConfig {
            small_alphabet: 0,
            ..SelectorConfig::default()
        };
        let selector = GuessSelector::new(&table, &config).unwrap();
        assert_eq!(
            selector.select(&[], false).unwrap_err(),
            SolverError::DegenerateSearch { alphabet_size: 0 }
        );
    }
}
