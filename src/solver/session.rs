//! Solver session state machine
//!
//! A session owns the current alphabet, the pending suggestion and the turn
//! counter. It is driven purely by feedback values, so the same type serves
//! the interactive prompt, batch simulation and tests.

use super::error::SolverError;
use super::partition::divide_alphabet;
use super::policy::{GuessSelector, Suggestion};
use super::table::{CandidateId, GuessId};
use crate::core::{Pattern, Word};

/// Where a session is in its game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// A suggestion is pending and feedback is expected
    AwaitingFeedback,
    /// The secret was found on turn `turns`
    Solved { turns: usize },
}

/// Result of observing one feedback pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Solved { turns: usize },
    Continue { suggestion: Suggestion, remaining: usize },
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// One game of Wordle from the solver's side
///
/// # Examples
/// ```
/// use greedy_wordle::core::{Pattern, Word};
/// use greedy_wordle::solver::{GuessSelector, PatternTable, SelectorConfig, Session};
///
/// let words = |list: &[&str]| list.iter().map(|w| Word::new(*w).unwrap()).collect::<Vec<_>>();
/// let table = PatternTable::build(
///     words(&["soare"]),
///     words(&["abide", "shape", "shake", "shame"]),
/// ).unwrap();
/// let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
///
/// let mut session = Session::new(&selector, false).unwrap();
/// assert_eq!(session.suggest().text(), "soare");
///
/// // Secret is "shake"
/// let feedback = table.lookup("soare", "shake").unwrap();
/// assert!(!session.observe(feedback).unwrap().is_solved());
/// ```
#[derive(Debug)]
pub struct Session<'s> {
    selector: &'s GuessSelector<'s>,
    hard: bool,
    alphabet: Vec<CandidateId>,
    pending: Suggestion,
    turn: usize,
    state: SessionState,
}

impl<'s> Session<'s> {
    /// Start a game with the full alphabet and compute the first suggestion
    ///
    /// # Errors
    /// Returns `SolverError` if the first suggestion cannot be computed.
    pub fn new(selector: &'s GuessSelector<'s>, hard: bool) -> Result<Self, SolverError> {
        let alphabet = selector.table().all_candidates();
        let pending = selector.select(&alphabet, hard)?;
        Ok(Self {
            selector,
            hard,
            alphabet,
            pending,
            turn: 1,
            state: SessionState::AwaitingFeedback,
        })
    }

    /// The word to play next
    #[must_use]
    pub fn suggest(&self) -> &'s Word {
        self.selector.table().guess(self.pending.guess)
    }

    /// The pending suggestion with the rule that produced it
    #[must_use]
    pub const fn suggestion(&self) -> &Suggestion {
        &self.pending
    }

    /// Apply feedback for the pending suggestion
    ///
    /// All-green feedback ends the game. Any other pattern narrows the
    /// alphabet to the candidates producing it and computes a new suggestion.
    /// On error the session is left unchanged.
    ///
    /// # Errors
    /// - `SolverError::AlreadySolved` if the game is over
    /// - `SolverError::InconsistentFeedback` if no candidate produces `pattern`
    /// - `SolverError::DegenerateSearch` if no next guess can be found
    pub fn observe(&mut self, pattern: Pattern) -> Result<Outcome, SolverError> {
        self.apply(self.pending.guess, pattern)
    }

    /// Apply feedback for a guess the player chose instead of the suggestion
    ///
    /// # Errors
    /// Returns `SolverError::UnknownGuess` if `word` is not in the guess
    /// universe, otherwise the same errors as [`Session::observe`].
    pub fn observe_guess(&mut self, word: &str, pattern: Pattern) -> Result<Outcome, SolverError> {
        let guess = self
            .selector
            .table()
            .guess_id(word)
            .ok_or_else(|| SolverError::UnknownGuess(word.to_string()))?;
        self.apply(guess, pattern)
    }

    fn apply(&mut self, guess: GuessId, pattern: Pattern) -> Result<Outcome, SolverError> {
        if let SessionState::Solved { turns } = self.state {
            return Err(SolverError::AlreadySolved { turns });
        }

        if pattern.is_perfect() {
            self.state = SessionState::Solved { turns: self.turn };
            return Ok(Outcome::Solved { turns: self.turn });
        }

        let table = self.selector.table();
        let alphabet = divide_alphabet(table, guess, &self.alphabet)
            .take(pattern)
            .ok_or_else(|| SolverError::InconsistentFeedback {
                guess: table.guess(guess).text().to_string(),
                pattern,
            })?;
        let suggestion = self.selector.select(&alphabet, self.hard)?;

        self.alphabet = alphabet;
        self.pending = suggestion;
        self.turn += 1;

        Ok(Outcome::Continue {
            suggestion,
            remaining: self.alphabet.len(),
        })
    }

    /// Start over with the full alphabet and turn counter 1
    ///
    /// # Errors
    /// Returns `SolverError` if the first suggestion cannot be computed.
    pub fn restart(&mut self) -> Result<(), SolverError> {
        *self = Self::new(self.selector, self.hard)?;
        Ok(())
    }

    /// Candidates still consistent with all feedback
    #[must_use]
    pub fn alphabet(&self) -> &[CandidateId] {
        &self.alphabet
    }

    #[must_use]
    pub const fn selector(&self) -> &'s GuessSelector<'s> {
        self.selector
    }

    /// Remaining candidates as words
    pub fn candidates(&self) -> impl Iterator<Item = &'s Word> + '_ {
        let table = self.selector.table();
        self.alphabet.iter().map(move |&id| table.candidate(id))
    }

    /// Current turn, starting at 1
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn is_hard(&self) -> bool {
        self.hard
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::table::PatternTable;
    use crate::solver::{SelectionRule, SelectorConfig};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn table() -> PatternTable {
        PatternTable::build(
            words(&["soare", "three", "chimp"]),
            words(&[
                "abide", "shape", "shake", "shame", "crane", "slate", "irate", "trace", "stare",
            ]),
        )
        .unwrap()
    }

    fn texts<'a>(words: impl Iterator<Item = &'a Word>) -> Vec<&'a str> {
        words.map(Word::text).collect()
    }

    #[test]
    fn new_session_suggests_opener() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let session = Session::new(&selector, false).unwrap();

        assert_eq!(session.suggest().text(), "soare");
        assert_eq!(session.turn(), 1);
        assert_eq!(session.alphabet().len(), table.candidate_count());
        assert_eq!(session.state(), SessionState::AwaitingFeedback);
    }

    #[test]
    fn feedback_narrows_to_matching_bucket() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, false).unwrap();

        let feedback = table.lookup("soare", "shame").unwrap();
        let outcome = session.observe(feedback).unwrap();

        let Outcome::Continue { remaining, .. } = outcome else {
            panic!("expected the game to continue");
        };
        assert_eq!(remaining, session.alphabet().len());
        assert_eq!(session.turn(), 2);
        for word in session.candidates() {
            assert_eq!(table.lookup("soare", word.text()).unwrap(), feedback);
        }
        assert!(texts(session.candidates()).contains(&"shame"));
    }

    #[test]
    fn all_green_solves_and_reports_turns() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, false).unwrap();

        let feedback = table.lookup("soare", "abide").unwrap();
        session.observe(feedback).unwrap();
        let outcome = session.observe(Pattern::PERFECT).unwrap();

        assert_eq!(outcome, Outcome::Solved { turns: 2 });
        assert_eq!(session.state(), SessionState::Solved { turns: 2 });
    }

    #[test]
    fn feedback_after_solve_is_rejected() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, false).unwrap();

        session.observe(Pattern::PERFECT).unwrap();
        assert_eq!(
            session.observe(Pattern::new(0)).unwrap_err(),
            SolverError::AlreadySolved { turns: 1 }
        );
    }

    #[test]
    fn inconsistent_feedback_leaves_session_untouched() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, false).unwrap();

        // No candidate is an anagram of soare
        let impossible = Pattern::from_digits([1, 1, 1, 1, 1]).unwrap();
        let err = session.observe(impossible).unwrap_err();

        assert_eq!(
            err,
            SolverError::InconsistentFeedback {
                guess: "soare".to_string(),
                pattern: impossible
            }
        );
        assert_eq!(session.turn(), 1);
        assert_eq!(session.alphabet().len(), table.candidate_count());
        assert_eq!(session.suggest().text(), "soare");
    }

    #[test]
    fn player_chosen_guess_is_applied() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, false).unwrap();

        let feedback = table.lookup("three", "abide").unwrap();
        session.observe_guess("three", feedback).unwrap();

        for word in session.candidates() {
            assert_eq!(table.lookup("three", word.text()).unwrap(), feedback);
        }
        assert_eq!(
            session.observe_guess("zzzzz", feedback).unwrap_err(),
            SolverError::UnknownGuess("zzzzz".to_string())
        );
    }

    #[test]
    fn endgame_suggests_last_candidate() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, false).unwrap();

        // chimp separates abide from every other candidate
        let feedback = table.lookup("chimp", "abide").unwrap();
        session.observe_guess("chimp", feedback).unwrap();

        assert_eq!(texts(session.candidates()), ["abide"]);
        assert_eq!(session.suggestion().rule, SelectionRule::Certain);
        assert_eq!(session.suggest().text(), "abide");
    }

    #[test]
    fn hard_mode_only_suggests_candidates() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, true).unwrap();
        assert!(session.is_hard());

        let feedback = table.lookup("soare", "slate").unwrap();
        session.observe(feedback).unwrap();

        let suggestion = session.suggest().text();
        assert!(texts(session.candidates()).contains(&suggestion));
    }

    #[test]
    fn restart_resets_everything() {
        let table = table();
        let selector = GuessSelector::new(&table, &SelectorConfig::default()).unwrap();
        let mut session = Session::new(&selector, false).unwrap();

        let feedback = table.lookup("soare", "crane").unwrap();
        session.observe(feedback).unwrap();
        session.observe(Pattern::PERFECT).unwrap();

        session.restart().unwrap();
        assert_eq!(session.turn(), 1);
        assert_eq!(session.state(), SessionState::AwaitingFeedback);
        assert_eq!(session.alphabet().len(), table.candidate_count());
        assert_eq!(session.suggest().text(), "soare");
    }
}
