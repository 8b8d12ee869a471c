use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Segmentation mode other than `grapheme`, `word` or `sentence`
    #[error("Unsupported mode: {0}")]
    InvalidMode(String),

    /// Segment access outside `[0, len)`
    #[error("segment index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Reading a configuration file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for [`crate::Config`]
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
