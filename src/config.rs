use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::segmenter::Mode;
use crate::width::text_width;

/// Defaults applied by [`crate::Segmenter::from_config`] and [`Config::width`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Segmentation mode (`grapheme`, `word` or `sentence`).
    pub mode: Mode,

    /// Locale tag for Ambiguous width resolution, e.g. `ja` or `zh-TW`.
    pub locale: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Config::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), mode = %config.mode, locale = ?config.locale, "loaded config");
        Ok(config)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Summed display width of `text` under the configured locale.
    pub fn width(&self, text: &str) -> usize {
        text_width(text, self.locale.as_deref())
    }
}
