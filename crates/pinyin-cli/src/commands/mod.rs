macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod dict_ops;

use std::fs;
use std::path::{Path, PathBuf};

use pinyin_core::settings::{self, Settings};

use crate::CliError;

/// Install `file` as the process settings, or fall back to the embedded
/// defaults when no file is given.
pub fn load_settings(file: Option<&Path>) -> Result<&'static Settings, CliError> {
    if let Some(path) = file {
        let content = fs::read_to_string(path)?;
        settings::init_custom(content)?;
    }
    Ok(settings::settings())
}

/// `--dict` if given, else `dictionary.path` from settings.
pub fn resolve_dict_path(dict: Option<PathBuf>, settings: &Settings) -> PathBuf {
    dict.unwrap_or_else(|| settings.dictionary.path.clone())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pinyin_core::settings::{parse_settings_toml, SettingsError, DEFAULT_SETTINGS_TOML};

    use super::*;

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn dict_flag_overrides_settings() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let path = resolve_dict_path(Some(PathBuf::from("/tmp/other.txt")), &s);
        assert_eq!(path, Path::new("/tmp/other.txt"));
    }

    #[test]
    fn dict_path_falls_back_to_settings() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(resolve_dict_path(None, &s), Path::new("pinyin.txt"));
    }

    #[test]
    fn load_settings_missing_file() {
        let err = load_settings(Some(Path::new("/nonexistent/settings.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn load_settings_invalid_file() {
        let file = toml_file("[dictionary]\npath = \"\"\n[output]\nseparator = \" \"\n");
        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(matches!(
            err,
            CliError::Settings(SettingsError::InvalidValue { .. })
        ));
    }

    // Installs the process-wide settings; no other test in this crate reads
    // them, and the failing cases above return before installing.
    #[test]
    fn load_settings_installs_custom_file() {
        let file = toml_file(
            "[dictionary]\npath = \"/opt/pinyin.txt\"\n\
             [output]\nseparator = \"_\"\nmode = \"initials-in-capitals\"\n\
             [punctuation]\nkeep = true\n",
        );
        let s = load_settings(Some(file.path())).unwrap();
        assert_eq!(s.dictionary.path, Path::new("/opt/pinyin.txt"));
        assert_eq!(s.output.separator, "_");
        assert!(s.punctuation.keep);
        assert!(std::ptr::eq(load_settings(None).unwrap(), s));
    }
}
