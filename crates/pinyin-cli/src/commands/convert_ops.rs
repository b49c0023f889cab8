use std::path::PathBuf;

use pinyin_core::converter::{ConvertError, ConvertOptions, Mode};
use pinyin_core::punctuation::{pieces, Piece};
use pinyin_core::settings::Settings;
use pinyin_core::Resources;

use super::{load_settings, resolve_dict_path};
use crate::CliError;

/// Command-line overrides for a conversion. `None` falls back to settings.
#[derive(Debug, Default)]
pub struct ConvertArgs {
    pub dict: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub mode: Option<Mode>,
    pub separator: Option<String>,
    pub keep_punctuation: bool,
}

/// Merge flags over settings: dictionary path, conversion options and
/// whether punctuation is kept (flag or `punctuation.keep`).
pub fn resolve_convert(args: ConvertArgs, settings: &Settings) -> (PathBuf, ConvertOptions, bool) {
    let mut options = settings.output.options();
    if let Some(mode) = args.mode {
        options.mode = mode;
    }
    if let Some(separator) = args.separator {
        options.separator = separator;
    }
    let keep = args.keep_punctuation || settings.punctuation.keep;
    (resolve_dict_path(args.dict, settings), options, keep)
}

/// Convert `text`, optionally keeping punctuation.
///
/// With `keep_punctuation`, each run between marks is converted on its own
/// and the marks are emitted in ASCII form, with no separator around them.
pub fn convert_text(
    resources: &Resources,
    text: &str,
    options: &ConvertOptions,
    keep_punctuation: bool,
) -> Result<String, ConvertError> {
    if !keep_punctuation {
        return resources
            .converter(text)
            .with_options(options.clone())
            .convert();
    }

    // Surface an unavailable dictionary even when the text is all punctuation.
    if !resources.is_initialized() {
        return Err(ConvertError::Uninitialized);
    }
    let mut out = String::new();
    for piece in pieces(text) {
        match piece {
            Piece::Text(run) => {
                out.push_str(
                    &resources
                        .converter(run)
                        .with_options(options.clone())
                        .convert()?,
                );
            }
            Piece::Mark { to, .. } => out.push_str(to),
        }
    }
    Ok(out)
}

/// Load the dictionary named by `args` and `settings`, then convert `text`.
pub fn run_convert(text: &str, args: ConvertArgs, settings: &Settings) -> Result<String, CliError> {
    let (dict_path, options, keep) = resolve_convert(args, settings);
    let resources = Resources::load(&dict_path);
    Ok(convert_text(&resources, text, &options, keep)?)
}

pub fn convert_cmd(text: &str, args: ConvertArgs) {
    let settings = die!(
        load_settings(args.settings.as_deref()),
        "Error loading settings: {}"
    );
    let result = die!(run_convert(text, args, settings), "Error: {}");
    println!("{result}");
}
