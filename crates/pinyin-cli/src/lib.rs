pub mod commands;
pub mod trace_init;

use pinyin_core::converter::ConvertError;
use pinyin_core::dict::DictError;
use pinyin_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("dictionary: {0}")]
    Dict(#[from] DictError),

    #[error("{0}")]
    Convert(#[from] ConvertError),
}
