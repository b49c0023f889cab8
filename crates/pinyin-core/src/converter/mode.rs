use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// How each syllable is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Diacritics stripped, e.g. `guo`.
    #[default]
    WithoutTone,
    /// Dictionary form with diacritics, e.g. `guó`.
    Tone,
    /// Toneless with the first letter upper-cased, e.g. `Guo`.
    InitialsInCapitals,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::WithoutTone, Mode::Tone, Mode::InitialsInCapitals];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::WithoutTone => "without-tone",
            Mode::Tone => "tone",
            Mode::InitialsInCapitals => "initials-in-capitals",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown mode: {0} (expected without-tone, tone or initials-in-capitals)")]
pub struct ModeParseError(String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}
