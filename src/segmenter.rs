//! Mode dispatch and the two ways of segmenting text: the [`Segmenter`]
//! object and the [`segment`] function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::grapheme::{self, GRAPHEME_RULES, GraphemeScanner};
use crate::rules::{self, Boundary, BreakSet};
use crate::segment::SegmentSequence;
use crate::sentence::{self, SENTENCE_RULES, SentenceScanner};
use crate::word::{self, WORD_RULES, WordScanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Grapheme,
    Word,
    Sentence,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Grapheme => "grapheme",
            Mode::Word => "word",
            Mode::Sentence => "sentence",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Exact lowercase names only.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grapheme" => Ok(Mode::Grapheme),
            "word" => Ok(Mode::Word),
            "sentence" => Ok(Mode::Sentence),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Boundary offsets (in code points) of `text` under `mode`.
pub fn break_positions(text: &str, mode: Mode) -> BreakSet {
    match mode {
        Mode::Grapheme => rules::break_set(GraphemeScanner::new(text), GRAPHEME_RULES, grapheme::FALLBACK),
        Mode::Word => rules::break_set(WordScanner::new(text), WORD_RULES, word::FALLBACK),
        Mode::Sentence => rules::break_set(SentenceScanner::new(text), SENTENCE_RULES, sentence::FALLBACK),
    }
}

/// Every candidate position of `text` with the rule that decided it.
///
/// ```
/// use rust_textseg::{explain, Mode, Verdict};
/// let trace = explain("\r\n", Mode::Grapheme);
/// assert_eq!(trace[1].rule, "GB3");
/// assert_eq!(trace[1].verdict, Verdict::NoBreak);
/// ```
pub fn explain(text: &str, mode: Mode) -> Vec<Boundary> {
    match mode {
        Mode::Grapheme => rules::walk(GraphemeScanner::new(text), GRAPHEME_RULES, grapheme::FALLBACK),
        Mode::Word => rules::walk(WordScanner::new(text), WORD_RULES, word::FALLBACK),
        Mode::Sentence => rules::walk(SentenceScanner::new(text), SENTENCE_RULES, sentence::FALLBACK),
    }
}

/// A mode and locale fixed once, applied to any number of texts.
///
/// The locale is carried for callers that read it back; boundaries do not
/// depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segmenter {
    mode: Mode,
    locale: Option<String>,
}

impl Segmenter {
    /// `mode` defaults to `grapheme`.
    ///
    /// ```
    /// use rust_textseg::Segmenter;
    /// let s = Segmenter::new(Some("word"), None).unwrap();
    /// assert_eq!(s.segment("Hello World").to_vec(), ["Hello", " ", "World"]);
    /// assert!(Segmenter::new(Some("invalid_mode"), None).is_err());
    /// ```
    pub fn new(mode: Option<&str>, locale: Option<&str>) -> Result<Self> {
        let mode = match mode {
            Some(name) => name.parse()?,
            None => Mode::default(),
        };
        Ok(Segmenter::with_mode(mode, locale))
    }

    pub fn with_mode(mode: Mode, locale: Option<&str>) -> Self {
        Segmenter { mode, locale: locale.map(str::to_string) }
    }

    pub fn from_config(config: &Config) -> Self {
        Segmenter::with_mode(config.mode, config.locale.as_deref())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn segment(&self, text: &str) -> SegmentSequence {
        let breaks = break_positions(text, self.mode);
        tracing::trace!(mode = %self.mode, segments = breaks.segment_count(), "segmented");
        SegmentSequence::from_breaks(text, breaks)
    }
}

/// One-shot form of [`Segmenter::segment`].
pub fn segment(text: &str, mode: Option<&str>, locale: Option<&str>) -> Result<SegmentSequence> {
    Ok(Segmenter::new(mode, locale)?.segment(text))
}
