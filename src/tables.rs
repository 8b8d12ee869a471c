//! Property table: code point → width category / break classes.
//!
//! The ranges are packed by `build.rs` (through `xtask::pack_tables`) into a
//! zstd-compressed postcard blob and decoded once, on first use, into sorted
//! non-overlapping `(start, end, value)` arrays. Lookups binary-search those
//! arrays and fall back to the property default for anything not listed,
//! so every lookup is total over `u32`.

use crate::properties::{
    GraphemeClass, IndicConjunctBreak, SentenceClass, WidthCategory, WordClass,
};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Unicode version the embedded tables were generated from.
pub const UNICODE_VERSION: &str = "17.0.0";

const PACKED_TABLES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/ucd_tables.postcard.zst"));

static TABLE: Lazy<PropertyTable> = Lazy::new(PropertyTable::load);

/// The process-wide property table, decoded on first call.
pub fn table() -> &'static PropertyTable {
    &TABLE
}

// Mirrors xtask::PackedRange / xtask::PackedTables; postcard is positional.
#[derive(Deserialize)]
struct PackedRange {
    start: u32,
    end: u32,
    value: String,
}

#[derive(Deserialize)]
struct PackedTables {
    version: String,
    east_asian_width: Vec<PackedRange>,
    grapheme_break: Vec<PackedRange>,
    word_break: Vec<PackedRange>,
    sentence_break: Vec<PackedRange>,
    extended_pictographic: Vec<PackedRange>,
    indic_conjunct_break: Vec<PackedRange>,
}

/// Sorted, non-overlapping inclusive ranges with a value each.
#[derive(Debug, Clone)]
pub struct RangeTable<T> {
    ranges: Vec<(u32, u32, T)>,
}

impl<T> Default for RangeTable<T> {
    fn default() -> Self {
        RangeTable { ranges: Vec::new() }
    }
}

impl<T: Copy> RangeTable<T> {
    /// Builds a table from packed ranges, dropping values `parse` rejects.
    fn from_packed(name: &str, packed: Vec<PackedRange>, parse: impl Fn(&str) -> Option<T>) -> Self {
        let mut ranges = Vec::with_capacity(packed.len());
        for range in packed {
            match parse(&range.value) {
                Some(value) => ranges.push((range.start, range.end, value)),
                None => tracing::warn!(
                    table = name,
                    value = %range.value,
                    "skipping range with unknown property value"
                ),
            }
        }
        RangeTable { ranges }
    }

    pub fn get(&self, cp: u32) -> Option<T> {
        let idx = self.ranges.partition_point(|&(start, _, _)| start <= cp);
        if idx > 0 {
            let (start, end, value) = self.ranges[idx - 1];
            if cp >= start && cp <= end {
                return Some(value);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// All property lookups needed by width resolution and segmentation.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    version: String,
    east_asian_width: RangeTable<WidthCategory>,
    grapheme_break: RangeTable<GraphemeClass>,
    word_break: RangeTable<WordClass>,
    sentence_break: RangeTable<SentenceClass>,
    extended_pictographic: RangeTable<bool>,
    indic_conjunct_break: RangeTable<IndicConjunctBreak>,
}

impl PropertyTable {
    fn load() -> Self {
        match Self::decode(PACKED_TABLES) {
            Ok(table) => {
                tracing::debug!(
                    version = %table.version,
                    east_asian_width = table.east_asian_width.len(),
                    grapheme_break = table.grapheme_break.len(),
                    word_break = table.word_break.len(),
                    sentence_break = table.sentence_break.len(),
                    "decoded property table"
                );
                table
            }
            Err(e) => {
                tracing::error!("embedded property table is unreadable, using defaults: {}", e);
                PropertyTable::default()
            }
        }
    }

    fn decode(bytes: &[u8]) -> Result<Self, String> {
        let raw = zstd::decode_all(bytes).map_err(|e| e.to_string())?;
        let packed: PackedTables = postcard::from_bytes(&raw).map_err(|e| e.to_string())?;

        Ok(PropertyTable {
            version: packed.version,
            east_asian_width: RangeTable::from_packed(
                "east_asian_width",
                packed.east_asian_width,
                WidthCategory::from_ucd,
            ),
            grapheme_break: RangeTable::from_packed(
                "grapheme_break",
                packed.grapheme_break,
                GraphemeClass::from_ucd,
            ),
            word_break: RangeTable::from_packed("word_break", packed.word_break, WordClass::from_ucd),
            sentence_break: RangeTable::from_packed(
                "sentence_break",
                packed.sentence_break,
                SentenceClass::from_ucd,
            ),
            extended_pictographic: RangeTable::from_packed(
                "extended_pictographic",
                packed.extended_pictographic,
                |v| (v == "Yes").then_some(true),
            ),
            indic_conjunct_break: RangeTable::from_packed(
                "indic_conjunct_break",
                packed.indic_conjunct_break,
                IndicConjunctBreak::from_ucd,
            ),
        })
    }

    pub fn unicode_version(&self) -> &str {
        &self.version
    }

    pub fn width_category(&self, cp: u32) -> WidthCategory {
        self.east_asian_width.get(cp).unwrap_or_default()
    }

    pub fn grapheme_class(&self, cp: u32) -> GraphemeClass {
        self.grapheme_break.get(cp).unwrap_or_default()
    }

    pub fn word_class(&self, cp: u32) -> WordClass {
        self.word_break.get(cp).unwrap_or_default()
    }

    pub fn sentence_class(&self, cp: u32) -> SentenceClass {
        self.sentence_break.get(cp).unwrap_or_default()
    }

    pub fn extended_pictographic(&self, cp: u32) -> bool {
        self.extended_pictographic.get(cp).unwrap_or(false)
    }

    pub fn indic_conjunct_break(&self, cp: u32) -> IndicConjunctBreak {
        self.indic_conjunct_break.get(cp).unwrap_or_default()
    }
}
