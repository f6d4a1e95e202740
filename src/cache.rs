//! Pattern table persistence
//!
//! Building the table is the most expensive step of a run, so it can be
//! written to disk once and reloaded. The file stores both word lists next to
//! the patterns, which lets a stale cache be detected and rebuilt.

use crate::core::{Pattern, Word};
use crate::solver::{PatternTable, TableError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Default cache location
pub const DEFAULT_CACHE_PATH: &str = "checkpoint/pattern_table.bin";

/// On-disk form of a pattern table
#[derive(Serialize, Deserialize)]
struct StoredTable {
    guesses: Vec<Word>,
    candidates: Vec<Word>,
    patterns: Vec<Pattern>,
}

#[derive(Serialize)]
struct StoredTableRef<'a> {
    guesses: &'a [Word],
    candidates: &'a [Word],
    patterns: &'a [Pattern],
}

/// Errors raised while reading or writing the cache
#[derive(Debug)]
pub enum CacheError {
    Io(io::Error),
    Encoding(bincode::Error),
    Table(TableError),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cache I/O failed: {e}"),
            Self::Encoding(e) => write!(f, "Cache file is malformed: {e}"),
            Self::Table(e) => write!(f, "Cached table is invalid: {e}"),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Encoding(e) => Some(e),
            Self::Table(e) => Some(e),
        }
    }
}

impl From<io::Error> for CacheError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<bincode::Error> for CacheError {
    fn from(e: bincode::Error) -> Self {
        Self::Encoding(e)
    }
}

impl From<TableError> for CacheError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

/// Where a table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    /// Read from an up-to-date cache file
    Loaded,
    /// Computed because the cache was missing, stale or unreadable
    Built,
}

/// Write `table` to `path`, replacing any existing file atomically
///
/// # Errors
///
/// Returns `CacheError` if the directory cannot be created or the file cannot
/// be written.
pub fn save_table(table: &PatternTable, path: &Path) -> Result<(), CacheError> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let stored = StoredTableRef {
        guesses: table.guesses(),
        candidates: table.candidates(),
        patterns: table.patterns(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &stored)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read a table previously written by [`save_table`]
///
/// # Errors
///
/// Returns `CacheError` if the file cannot be read, cannot be decoded, or
/// holds an inconsistent table.
pub fn load_table(path: &Path) -> Result<PatternTable, CacheError> {
    let reader = BufReader::new(File::open(path)?);
    let stored: StoredTable = bincode::deserialize_from(reader)?;
    Ok(PatternTable::from_parts(
        stored.guesses,
        stored.candidates,
        stored.patterns,
    )?)
}

/// Load the cached table for these word lists, or build and cache a new one
///
/// A cache whose word lists differ from a fresh build is ignored and
/// overwritten.
///
/// # Errors
///
/// Returns `CacheError::Table` if the word lists cannot form a table, or
/// `CacheError::Io`/`CacheError::Encoding` if the rebuilt table cannot be
/// written.
pub fn load_or_build(
    path: &Path,
    allowed: Vec<Word>,
    possible: Vec<Word>,
) -> Result<(PatternTable, TableSource), CacheError> {
    if let Ok(table) = load_table(path)
        && covers(&table, &allowed, &possible)
    {
        return Ok((table, TableSource::Loaded));
    }

    let table = PatternTable::build(allowed, possible)?;
    save_table(&table, path)?;
    Ok((table, TableSource::Built))
}

/// Whether `table` is exactly what building from these lists would produce
fn covers(table: &PatternTable, allowed: &[Word], possible: &[Word]) -> bool {
    table
        .guesses()
        .iter()
        .map(Word::text)
        .eq(dedup_order(allowed.iter().chain(possible)))
        && table
            .candidates()
            .iter()
            .map(Word::text)
            .eq(dedup_order(possible.iter()))
}

fn dedup_order<'a>(words: impl Iterator<Item = &'a Word>) -> impl Iterator<Item = &'a str> {
    let mut seen = FxHashSet::default();
    words.map(Word::text).filter(move |w| seen.insert(*w))
}
