//! # Record Archive
//!
//! Keeps the latest `(text, number)` record plus the history of every record
//! that came before it. Recording a new entry pushes the current one into
//! the history first.
//!
//! A process-wide instance is available through [`Archive::global`].

use std::fmt;
use std::sync::{Mutex, OnceLock};

use thiserror::Error;
use tracing::{error, info};

static GLOBAL_ARCHIVE: OnceLock<Mutex<Archive>> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArchiveError {
    #[error("invalid text: {0:?}, text should be a non-empty string")]
    EmptyText(String),

    #[error("invalid number: {0}, number should be a positive integer or float")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    text: String,
    number: f64,
}

impl Entry {
    /// Rejections are logged at ERROR before being returned.
    pub fn new(text: impl Into<String>, number: f64) -> Result<Self, ArchiveError> {
        Self::build(text.into(), number).inspect_err(|e| error!("{e}"))
    }

    fn build(text: String, number: f64) -> Result<Self, ArchiveError> {
        if text.is_empty() {
            return Err(ArchiveError::EmptyText(text));
        }
        if !number.is_finite() || number <= 0.0 {
            return Err(ArchiveError::InvalidNumber(number.to_string()));
        }
        Ok(Self { text, number })
    }

    /// Same as [`Entry::new`] but takes the number as unparsed text.
    pub fn parse(text: impl Into<String>, raw_number: &str) -> Result<Self, ArchiveError> {
        let number = raw_number
            .trim()
            .parse::<f64>()
            .map_err(|_| ArchiveError::InvalidNumber(raw_number.to_string()))
            .inspect_err(|e| error!("{e}"))?;
        Self::new(text, number)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> f64 {
        self.number
    }
}

#[derive(Debug, Default, Clone)]
pub struct Archive {
    current: Option<Entry>,
    texts: Vec<String>,
    numbers: Vec<f64>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide archive.
    pub fn global() -> &'static Mutex<Archive> {
        GLOBAL_ARCHIVE.get_or_init(|| Mutex::new(Archive::new()))
    }

    /// Runs `f` against the global archive.
    ///
    /// A poisoned lock is recovered: every mutation leaves the archive in a
    /// consistent state, so a panic elsewhere cannot corrupt it.
    pub fn with_global<R>(f: impl FnOnce(&mut Archive) -> R) -> R {
        let mut guard = Self::global()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }

    /// Makes `entry` current, moving the previous current entry into the history.
    pub fn record(&mut self, entry: Entry) -> &Entry {
        if let Some(prev) = self.current.take() {
            self.texts.push(prev.text);
            self.numbers.push(prev.number);
            info!("Text archive: {:?}\tNumber archive: {:?}", self.texts, self.numbers);
        }
        self.current.insert(entry)
    }

    /// Validates and records a new entry. The archive is untouched on error.
    pub fn submit(&mut self, text: impl Into<String>, raw_number: &str) -> Result<&Entry, ArchiveError> {
        let entry = Entry::parse(text, raw_number)?;
        Ok(self.record(entry))
    }

    pub fn current(&self) -> Option<&Entry> {
        self.current.as_ref()
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    /// Number of archived (non-current) records.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl fmt::Display for Archive {
    /// `{}` lists the current record and the history, `{:#}` is the constructor form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(entry) = &self.current else {
            return f.write_str(if f.alternate() { "Archive()" } else { "Empty archive" });
        };

        if f.alternate() {
            write!(f, "Archive({:?}, {})", entry.text, entry.number)
        } else {
            write!(
                f,
                "Text is {} and number is {}. Also {:?} and {:?}",
                entry.text, entry.number, self.texts, self.numbers
            )
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
