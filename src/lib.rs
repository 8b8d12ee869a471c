//! East Asian Width lookup and Unicode text segmentation (UAX #29).
//!
//! ```
//! use rust_textseg::{eaw_width, segment};
//!
//! assert_eq!(eaw_width("あ", None), 2);
//! assert_eq!(eaw_width("±", Some("zh-TW")), 2);
//!
//! let words = segment("Hello World", Some("word"), None).unwrap();
//! assert_eq!(words.to_vec(), ["Hello", " ", "World"]);
//! ```

mod config;
mod error;
mod grapheme;
mod plugin;
mod properties;
mod rules;
mod segment;
mod segmenter;
mod sentence;
mod tables;
mod utils;
mod width;
mod word;

pub use config::Config;
pub use error::{Error, Result};
pub use properties::{GraphemeClass, IndicConjunctBreak, SentenceClass, WidthCategory, WordClass};
pub use rules::{Boundary, BreakSet, Verdict};
pub use segment::{SegmentSequence, Segments, WordKind};
pub use segmenter::{Mode, Segmenter, break_positions, explain, segment};
pub use tables::{PropertyTable, UNICODE_VERSION, table};
pub use width::{LocalePolicy, NO_CHARACTER, eaw_width, text_width, width_category};
