//! Initialization result shared by every conversion.
//!
//! Both lookup tables are built once and then only read, so a single
//! `Resources` can back any number of concurrent [`Converter`]s.

use std::path::Path;

use tracing::{info, warn};

use crate::converter::Converter;
use crate::dict::{DictError, PinyinSource, PinyinTable};
use crate::tone::ToneTable;

pub struct Resources<D = PinyinTable> {
    tones: &'static ToneTable,
    /// `None` when the dictionary failed to load.
    dict: Option<D>,
}

impl Resources<PinyinTable> {
    /// Load the dictionary at `path`.
    ///
    /// A dictionary that cannot be opened leaves the resources unavailable:
    /// every later conversion fails with
    /// [`ConvertError::Uninitialized`](crate::converter::ConvertError::Uninitialized).
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(resources) => resources,
            Err(e) => {
                warn!(path = %path.display(), "pinyin dictionary unavailable: {e}");
                Self::unavailable()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self, DictError> {
        let table = PinyinTable::open(path)?;
        info!(
            path = %path.display(),
            entries = table.len(),
            skipped = table.skipped(),
            "loaded pinyin dictionary"
        );
        Ok(Self::new(table))
    }
}

impl<D: PinyinSource> Resources<D> {
    pub fn new(dict: D) -> Self {
        Self {
            tones: ToneTable::global(),
            dict: Some(dict),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            tones: ToneTable::global(),
            dict: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.dict.is_some()
    }

    pub fn dictionary(&self) -> Option<&D> {
        self.dict.as_ref()
    }

    pub fn tones(&self) -> &ToneTable {
        self.tones
    }

    /// Start configuring a conversion of `text` with default options.
    pub fn converter<'a>(&'a self, text: &'a str) -> Converter<'a, D> {
        Converter::new(self, text)
    }
}
