//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Gray = 0,
    Yellow = 1,
    Green = 2,
}

impl Tile {
    /// Convert a feedback digit (0, 1 or 2) to a tile
    ///
    /// # Errors
    /// Returns `PatternError::OutOfRange` for any digit above 2.
    pub const fn from_digit(digit: u8) -> Result<Self, PatternError> {
        match digit {
            0 => Ok(Self::Gray),
            1 => Ok(Self::Yellow),
            2 => Ok(Self::Green),
            _ => Err(PatternError::OutOfRange(digit)),
        }
    }

    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// Error type for malformed feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Feedback did not have exactly five symbols
    WrongLength(usize),
    /// A symbol that is not a recognised feedback marker
    InvalidSymbol(char),
    /// A numeric symbol outside 0-2
    OutOfRange(u8),
    /// A raw encoded value of 243 or more
    InvalidValue(u8),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Feedback must have exactly 5 symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => write!(f, "Invalid feedback symbol '{ch}'"),
            Self::OutOfRange(digit) => {
                write!(f, "Feedback digit {digit} is out of range (expected 0-2)")
            }
            Self::InvalidValue(value) => {
                write!(f, "Pattern value {value} is out of range (expected 0-242)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
/// Serialized as the raw byte and range-checked when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from per-position tiles
    #[must_use]
    pub fn from_tiles(tiles: [Tile; WORD_LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for tile in tiles {
            value += tile.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Build a pattern from per-position digits in {0, 1, 2}
    ///
    /// # Errors
    /// Returns `PatternError::OutOfRange` if any digit is above 2.
    ///
    /// # Examples
    /// ```
    /// use greedy_wordle::core::Pattern;
    ///
    /// let pattern = Pattern::from_digits([0, 0, 0, 0, 2]).unwrap();
    /// assert_eq!(pattern.digits(), [0, 0, 0, 0, 2]);
    /// assert!(Pattern::from_digits([0, 3, 0, 0, 0]).is_err());
    /// ```
    pub fn from_digits(digits: [u8; WORD_LENGTH]) -> Result<Self, PatternError> {
        let mut tiles = [Tile::Gray; WORD_LENGTH];
        for (tile, digit) in tiles.iter_mut().zip(digits) {
            *tile = Tile::from_digit(digit)?;
        }
        Ok(Self::from_tiles(tiles))
    }

    /// Per-position tiles, first letter first
    #[must_use]
    pub fn tiles(self) -> [Tile; WORD_LENGTH] {
        let mut tiles = [Tile::Gray; WORD_LENGTH];
        let mut val = self.0;
        for tile in &mut tiles {
            *tile = match val % 3 {
                2 => Tile::Green,
                1 => Tile::Yellow,
                _ => Tile::Gray,
            };
            val /= 3;
        }
        tiles
    }

    /// Per-position digits, first letter first
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LENGTH] {
        self.tiles().map(Tile::digit)
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the secret
    ///
    /// # Algorithm
    /// 1. Green pass: exact position matches are green and consume that
    ///    position of the answer.
    /// 2. Yellow pass: every non-green guess letter, left to right, takes the
    ///    leftmost unconsumed matching position of the answer, if any.
    ///
    /// # Examples
    /// ```
    /// use greedy_wordle::core::{Word, Pattern};
    ///
    /// let guess = Word::new("three").unwrap();
    /// let answer = Word::new("abide").unwrap();
    ///
    /// // The first E finds the answer's only E already taken by the green
    /// assert_eq!(Pattern::calculate(&guess, &answer).digits(), [0, 0, 0, 0, 2]);
    /// ```
    #[must_use]
    // Allow: positions index guess, answer, tiles and taken together
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut tiles = [Tile::Gray; WORD_LENGTH];
        let mut taken = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                tiles[i] = Tile::Green;
                taken[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if tiles[i] == Tile::Green {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !taken[j] && answer[j] == guess[i]) {
                tiles[i] = Tile::Yellow;
                taken[j] = true;
            }
        }

        Self::from_tiles(tiles)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.tiles().iter().filter(|&&t| t == Tile::Yellow).count()
    }

    /// Parse feedback typed by a player
    ///
    /// Accepts five symbols, optionally comma separated:
    /// - `2`/`G`/`g`/🟩 for green
    /// - `1`/`Y`/`y`/🟨 for yellow
    /// - `0`/`-`/`_`/⬜/⬛ for gray
    ///
    /// # Errors
    /// Returns `PatternError` on a wrong symbol count, an unknown symbol, or a
    /// digit above 2.
    ///
    /// # Examples
    /// ```
    /// use greedy_wordle::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("2,1,0,2,1").unwrap();
    /// let p3 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p2, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let s = s.trim();

        let symbols: Vec<char> = if s.contains(',') {
            s.split(',')
                .map(|part| {
                    let mut chars = part.trim().chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => Ok(ch),
                        (Some(first), Some(_)) => Err(part
                            .trim()
                            .parse::<u8>()
                            .map_or(PatternError::InvalidSymbol(first), PatternError::OutOfRange)),
                        (None, _) => Err(PatternError::InvalidSymbol(',')),
                    }
                })
                .collect::<Result<_, _>>()?
        } else {
            s.chars().collect()
        };

        if symbols.len() != WORD_LENGTH {
            return Err(PatternError::WrongLength(symbols.len()));
        }

        let mut tiles = [Tile::Gray; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(symbols) {
            *tile = match ch {
                '2' | 'G' | 'g' | '🟩' => Tile::Green,
                '1' | 'Y' | 'y' | '🟨' => Tile::Yellow,
                '0' | '-' | '_' | '⬜' | '⬛' => Tile::Gray,
                '3'..='9' => return Err(PatternError::OutOfRange(ch as u8 - b'0')),
                _ => return Err(PatternError::InvalidSymbol(ch)),
            };
        }

        Ok(Self::from_tiles(tiles))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use greedy_wordle::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.tiles().iter().map(|t| t.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl TryFrom<u8> for Pattern {
    type Error = PatternError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(PatternError::InvalidValue(value))
        }
    }
}

impl From<Pattern> for u8 {
    fn from(pattern: Pattern) -> Self {
        pattern.0
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
