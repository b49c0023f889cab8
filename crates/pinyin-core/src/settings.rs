//! Conversion settings: dictionary location, output defaults and the
//! punctuation policy.
//!
//! The process holds one [`Settings`] value. A front end may install its own
//! file with [`init_custom`] once, before anything reads [`settings`];
//! otherwise the embedded `default_settings.toml` is used.

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::converter::{ConvertOptions, Mode};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Validate `toml_content` and make it the process settings.
///
/// Fails with [`SettingsError::AlreadyInitialized`] once settings have been
/// installed or read.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let custom = parse_settings_toml(&toml_content)?;
    INSTANCE
        .set(custom)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// The installed settings, falling back to the embedded defaults.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        // build.rs rejects a default file that lacks the required tables.
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings must parse")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub output: OutputSettings,
    #[serde(default)]
    pub punctuation: PunctuationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub separator: String,
    #[serde(default)]
    pub mode: Mode,
}

impl OutputSettings {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            separator: self.separator.clone(),
            mode: self.mode,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PunctuationSettings {
    pub keep: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.dictionary.path.as_os_str().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "dictionary.path".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.output.separator.contains('\n') {
        return Err(SettingsError::InvalidValue {
            field: "output.separator".to_string(),
            reason: "must not contain a newline".to_string(),
        });
    }
    Ok(())
}
