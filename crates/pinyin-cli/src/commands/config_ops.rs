use std::fs;

use pinyin_core::settings::{default_toml, parse_settings_toml, Settings};

use crate::CliError;

pub fn settings_export() {
    print!("{}", default_toml());
}

/// One-line summary of a validated settings file.
pub fn settings_summary(s: &Settings) -> String {
    format!(
        "OK: dictionary.path={}, output.separator={:?}, output.mode={}, punctuation.keep={}",
        s.dictionary.path.display(),
        s.output.separator,
        s.output.mode,
        s.punctuation.keep
    )
}

pub fn validate_file(file: &str) -> Result<Settings, CliError> {
    let content = fs::read_to_string(file)?;
    Ok(parse_settings_toml(&content)?)
}

pub fn settings_validate(file: &str) {
    let s = die!(validate_file(file), "Error validating {file}: {}");
    println!("{}", settings_summary(&s));
}
