//! Hanzi-to-pinyin conversion.
//!
//! Each Unicode scalar value of the input is looked up on its own, rendered
//! according to [`Mode`], and the non-empty results are joined with the
//! configured separator. Characters without a dictionary entry (ASCII,
//! punctuation, whitespace) are dropped.

mod mode;
#[cfg(test)]
mod tests;
pub(crate) mod testutil;

use tracing::{debug, debug_span};

use crate::dict::{PinyinSource, PinyinTable};
use crate::resources::Resources;
use crate::tone::ToneTable;

pub use mode::{Mode, ModeParseError};

pub const DEFAULT_SEPARATOR: &str = " ";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("pinyin dictionary is not initialized")]
    Uninitialized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub separator: String,
    pub mode: Mode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            mode: Mode::default(),
        }
    }
}

/// A configured conversion of one input string.
///
/// Configuration methods consume the converter and return a new one, so a
/// converter never changes once built.
#[derive(Clone)]
pub struct Converter<'a, D = PinyinTable> {
    resources: &'a Resources<D>,
    text: &'a str,
    options: ConvertOptions,
}

impl<'a, D: PinyinSource> Converter<'a, D> {
    pub fn new(resources: &'a Resources<D>, text: &'a str) -> Self {
        Self {
            resources,
            text,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_separator(self, separator: impl Into<String>) -> Self {
        Self {
            options: ConvertOptions {
                separator: separator.into(),
                ..self.options
            },
            ..self
        }
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self {
            options: ConvertOptions {
                mode,
                ..self.options
            },
            ..self
        }
    }

    pub fn with_options(self, options: ConvertOptions) -> Self {
        Self { options, ..self }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert the whole input, joining syllables with the separator.
    pub fn convert(&self) -> Result<String, ConvertError> {
        Ok(self.syllables()?.join(&self.options.separator))
    }

    /// Rendered syllables in input order, before joining.
    ///
    /// Fails without producing anything when the dictionary is unavailable,
    /// even for empty input.
    pub fn syllables(&self) -> Result<Vec<String>, ConvertError> {
        let _span = debug_span!("convert", mode = %self.options.mode).entered();
        let dict = self
            .resources
            .dictionary()
            .ok_or(ConvertError::Uninitialized)?;
        let tones = self.resources.tones();

        let syllables: Vec<String> = self
            .text
            .chars()
            .map(|c| render(dict.lookup_or_empty(c), self.options.mode, tones))
            .filter(|s| !s.is_empty())
            .collect();

        debug!(
            chars = self.text.chars().count(),
            syllables = syllables.len()
        );
        Ok(syllables)
    }
}

/// Render one dictionary syllable in `mode`.
pub fn render(pinyin: &str, mode: Mode, tones: &ToneTable) -> String {
    match mode {
        Mode::Tone => pinyin.to_string(),
        Mode::WithoutTone => tones.strip_tones(pinyin),
        Mode::InitialsInCapitals => capitalize_initial(&tones.strip_tones(pinyin)),
    }
}

/// Upper-case the first char when its code point is above 32 (space).
/// This is not a letter test: digits and symbols are "upper-cased" too,
/// which leaves them unchanged.
fn capitalize_initial(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if u32::from(first) > 32 => first.to_uppercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}
