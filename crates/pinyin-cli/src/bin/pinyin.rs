use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pinyin_cli::commands::{config_ops, convert_ops, dict_ops};
use pinyin_cli::trace_init::init_tracing;
use pinyin_core::converter::Mode;

#[derive(Parser)]
#[command(name = "pinyin", about = "Hanzi to pinyin transliteration")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert hanzi text to pinyin
    Convert {
        /// Text to convert
        text: String,
        /// Dictionary file (default: dictionary.path from settings)
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Settings TOML file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Output mode: without-tone, tone or initials-in-capitals
        #[arg(short, long)]
        mode: Option<Mode>,
        /// Separator placed between syllables
        #[arg(short, long)]
        separator: Option<String>,
        /// Keep punctuation in ASCII form instead of dropping it
        #[arg(long)]
        keep_punctuation: bool,
    },
    /// Show the dictionary entry for each character
    Lookup {
        /// Characters to look up
        text: String,
        /// Dictionary file
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Settings TOML file
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Show dictionary statistics
    Info {
        /// Dictionary file
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Settings TOML file
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Replace full-width punctuation with ASCII
    Punct {
        /// Text to normalize
        text: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Convert {
            text,
            dict,
            settings,
            mode,
            separator,
            keep_punctuation,
        } => convert_ops::convert_cmd(
            &text,
            convert_ops::ConvertArgs {
                dict,
                settings,
                mode,
                separator,
                keep_punctuation,
            },
        ),
        Command::Lookup {
            text,
            dict,
            settings,
        } => dict_ops::lookup(dict, settings.as_deref(), &text),
        Command::Info { dict, settings } => dict_ops::info(dict, settings.as_deref()),
        Command::Punct { text } => dict_ops::punct(&text),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
