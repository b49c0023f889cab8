//! Ideograph → pinyin dictionary.
//!
//! `PinyinTable` maps a single code point to its toned pinyin, parsed from a
//! plain-text resource with one `HEXCODEPOINT=>pinyin` mapping per line.

mod table;

pub use table::PinyinTable;

use std::io;

/// Error loading the dictionary resource.
///
/// Malformed lines are not errors; they are skipped during parsing. Only a
/// resource that cannot be opened or read fails the load.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Per-character pinyin lookup backing a [`Converter`](crate::converter::Converter).
pub trait PinyinSource: Send + Sync {
    /// Toned pinyin for `ideograph`, or `None` when it has no entry.
    fn lookup(&self, ideograph: char) -> Option<&str>;

    /// Like [`lookup`](Self::lookup), but an absent entry reads as `""`.
    fn lookup_or_empty(&self, ideograph: char) -> &str {
        self.lookup(ideograph).unwrap_or("")
    }
}
