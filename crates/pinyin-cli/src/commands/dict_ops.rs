use std::path::{Path, PathBuf};

use tracing::debug;

use pinyin_core::dict::{PinyinSource, PinyinTable};
use pinyin_core::punctuation::normalize_punctuation;
use pinyin_core::tone::syllable_tone;

use super::{load_settings, resolve_dict_path};
use crate::CliError;

fn dict_path(dict: Option<PathBuf>, settings_file: Option<&Path>) -> PathBuf {
    let settings = die!(load_settings(settings_file), "Error loading settings: {}");
    resolve_dict_path(dict, settings)
}

pub fn open_table(path: &Path) -> Result<PinyinTable, CliError> {
    Ok(PinyinTable::open(path)?)
}

/// One line per char: code point, char, pinyin (or `-`), tone number.
/// Tone 5 is the neutral tone.
pub fn lookup_lines(dict: &impl PinyinSource, text: &str) -> Vec<String> {
    text.chars()
        .map(|c| match dict.lookup(c) {
            Some(pinyin) => {
                let tone = syllable_tone(pinyin).map_or(5, |t| t.number());
                format!("U+{:04X}\t{c}\t{pinyin}\t{tone}", u32::from(c))
            }
            None => format!("U+{:04X}\t{c}\t-", u32::from(c)),
        })
        .collect()
}

pub fn lookup(dict: Option<PathBuf>, settings_file: Option<&Path>, text: &str) {
    let path = dict_path(dict, settings_file);
    let table = die!(
        open_table(&path),
        "Error opening dictionary {}: {}",
        path.display()
    );
    for line in lookup_lines(&table, text) {
        println!("{line}");
    }
}

pub fn info(dict: Option<PathBuf>, settings_file: Option<&Path>) {
    let path = dict_path(dict, settings_file);
    let table = die!(
        open_table(&path),
        "Error opening dictionary {}: {}",
        path.display()
    );
    let (first, last) = {
        let mut chars = table.iter().map(|(c, _)| c);
        let first = chars.next();
        (first, chars.last().or(first))
    };
    debug!(path = %path.display(), "dictionary info");

    println!("Dictionary: {}", path.display());
    println!("  entries: {}", table.len());
    println!("  skipped lines: {}", table.skipped());
    if let (Some(first), Some(last)) = (first, last) {
        println!(
            "  range: U+{:04X}..=U+{:04X}",
            u32::from(first),
            u32::from(last)
        );
    }
}

pub fn punct(text: &str) {
    println!("{}", normalize_punctuation(text));
}
