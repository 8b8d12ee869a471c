//! Build-time packing of the UCD range tables in `data/`.
//!
//! `build.rs` calls [`pack_tables`] so the library can embed one compressed
//! blob instead of several hundred kilobytes of TSV text. The runtime side
//! (`src/tables.rs`) decodes the same [`PackedTables`] layout.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

pub mod ucd;

pub const UNICODE_VERSION: &str = "17.0.0";

/// Table files in `data/`, in the order they appear in [`PackedTables`].
pub const TABLE_FILES: [&str; 6] = [
    "east_asian_width.tsv",
    "grapheme_break.tsv",
    "word_break.tsv",
    "sentence_break.tsv",
    "extended_pictographic.tsv",
    "indic_conjunct_break.tsv",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedRange {
    pub start: u32,
    pub end: u32,
    pub value: String,
}

/// Field order is the wire format; keep in sync with `src/tables.rs`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PackedTables {
    pub version: String,
    pub east_asian_width: Vec<PackedRange>,
    pub grapheme_break: Vec<PackedRange>,
    pub word_break: Vec<PackedRange>,
    pub sentence_break: Vec<PackedRange>,
    pub extended_pictographic: Vec<PackedRange>,
    pub indic_conjunct_break: Vec<PackedRange>,
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

/// Parse one `START\tEND\tVALUE` table. Comment and blank lines are skipped.
/// Ranges must be sorted and non-overlapping.
pub fn parse_tsv(name: &str, content: &str) -> io::Result<Vec<PackedRange>> {
    let mut ranges: Vec<PackedRange> = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != 3 {
            return Err(invalid(format!("{name}:{}: expected 3 columns", lineno + 1)));
        }
        let start = u32::from_str_radix(parts[0], 16)
            .map_err(|e| invalid(format!("{name}:{}: {e}", lineno + 1)))?;
        let end = u32::from_str_radix(parts[1], 16)
            .map_err(|e| invalid(format!("{name}:{}: {e}", lineno + 1)))?;
        if start > end || end > 0x10FFFF {
            return Err(invalid(format!("{name}:{}: bad range {start:X}..{end:X}", lineno + 1)));
        }
        if let Some(prev) = ranges.last() {
            if start <= prev.end {
                return Err(invalid(format!("{name}:{}: range overlaps or is unsorted", lineno + 1)));
            }
        }
        ranges.push(PackedRange {
            start,
            end,
            value: parts[2].to_string(),
        });
    }

    Ok(ranges)
}

/// Read every table in `data_dir`, serialize with postcard and write the
/// zstd-compressed result to `out`.
pub fn pack_tables(data_dir: &Path, out: &Path) -> io::Result<()> {
    let mut parsed = Vec::with_capacity(TABLE_FILES.len());
    for name in TABLE_FILES {
        let content = fs::read_to_string(data_dir.join(name))?;
        parsed.push(parse_tsv(name, &content)?);
    }
    let mut parsed = parsed.into_iter();
    let mut next = || parsed.next().unwrap_or_default();

    let tables = PackedTables {
        version: UNICODE_VERSION.to_string(),
        east_asian_width: next(),
        grapheme_break: next(),
        word_break: next(),
        sentence_break: next(),
        extended_pictographic: next(),
        indic_conjunct_break: next(),
    };

    let bytes = postcard::to_stdvec(&tables).map_err(|e| invalid(e.to_string()))?;
    let compressed = zstd::encode_all(bytes.as_slice(), 19)?;
    fs::write(out, compressed)
}
