use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, debug_span};

use super::{DictError, PinyinSource};

const SEPARATOR: &str = "=>";

#[derive(Debug, Clone, Default)]
pub struct PinyinTable {
    entries: HashMap<char, String>,
    skipped: usize,
}

impl PinyinTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (char, String)>) -> Self {
        let mut table = Self::new();
        for (ideograph, pinyin) in entries {
            table.insert(ideograph, pinyin);
        }
        table
    }

    /// Parse `HEXCODEPOINT=>pinyin` lines from `reader`.
    ///
    /// Lines that don't split into exactly two parts on `=>`, or whose left
    /// part is not a hexadecimal scalar value, are skipped. A later line for
    /// the same code point replaces the earlier one.
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, DictError> {
        let _span = debug_span!("parse_pinyin_table").entered();
        let mut table = Self::new();
        let mut buf = Vec::new();
        let mut total_lines = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            total_lines += 1;
            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches('\n').trim_end_matches('\r');

            match parse_line(line) {
                Some((ideograph, pinyin)) => table.insert(ideograph, pinyin.to_string()),
                None => table.skipped += 1,
            }
        }

        debug!(
            total_lines,
            entries = table.entries.len(),
            skipped = table.skipped
        );
        Ok(table)
    }

    /// Open and parse a dictionary file. The file handle is released before
    /// returning, on success and on error alike.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    pub fn insert(&mut self, ideograph: char, pinyin: String) {
        self.entries.insert(ideograph, pinyin);
    }

    pub fn get(&self, ideograph: char) -> Option<&str> {
        self.entries.get(&ideograph).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lines the last parse ignored.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// All `(ideograph, pinyin)` pairs, ordered by code point.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut pairs: Vec<(char, &str)> = self
            .entries
            .iter()
            .map(|(&c, p)| (c, p.as_str()))
            .collect();
        pairs.sort_unstable_by_key(|&(c, _)| c);
        pairs.into_iter()
    }
}

fn parse_line(line: &str) -> Option<(char, &str)> {
    let mut parts = line.split(SEPARATOR);
    let (Some(code), Some(pinyin), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    let code_point = u32::from_str_radix(code, 16).ok()?;
    Some((char::from_u32(code_point)?, pinyin))
}

impl FromStr for PinyinTable {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl PinyinSource for PinyinTable {
    fn lookup(&self, ideograph: char) -> Option<&str> {
        self.get(ideograph)
    }
}
