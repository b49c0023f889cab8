//! Hanzi to pinyin transliteration.
//!
//! Load a [`Resources`] once, then build a [`Converter`] per input:
//!
//! ```no_run
//! use std::path::Path;
//! use pinyin_core::{Mode, Resources};
//!
//! let resources = Resources::load(Path::new("pinyin.txt"));
//! let text = resources
//!     .converter("中国")
//!     .with_mode(Mode::Tone)
//!     .convert()?;
//! assert_eq!(text, "zhōng guó");
//! # Ok::<(), pinyin_core::ConvertError>(())
//! ```

pub mod converter;
pub mod dict;
pub mod punctuation;
pub mod resources;
pub mod settings;
pub mod tone;

pub use converter::{ConvertError, ConvertOptions, Converter, Mode};
pub use resources::Resources;
