//! Regenerates `data/*.tsv` from a directory of raw UCD files.
//!
//! Expected layout (as unpacked from `UCD.zip`):
//!
//! ```text
//! EastAsianWidth.txt
//! DerivedCoreProperties.txt
//! extracted/DerivedGeneralCategory.txt
//! auxiliary/GraphemeBreakProperty.txt
//! auxiliary/WordBreakProperty.txt
//! auxiliary/SentenceBreakProperty.txt
//! emoji/emoji-data.txt
//! ```

use crate::UNICODE_VERSION;
use std::fs;
use std::io;
use std::path::Path;

const CODE_POINTS: usize = 0x11_0000;

/// Unlisted code points in these ranges default to Wide.
const DEFAULT_WIDE: [(u32, u32); 5] = [
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x20000, 0x2FFFD),
    (0x30000, 0x3FFFD),
];

/// Conjoining jamo that render as part of the preceding syllable.
const ZERO_JAMO: [(u32, u32); 2] = [(0x1160, 0x11FF), (0xD7B0, 0xD7FF)];

const SOFT_HYPHEN: u32 = 0xAD;

/// Dense per-code-point assignment; slot 0 is the omitted default.
struct Assignment {
    values: Vec<String>,
    slots: Vec<u8>,
}

impl Assignment {
    fn new() -> Self {
        Assignment {
            values: vec![String::new()],
            slots: vec![0; CODE_POINTS],
        }
    }

    fn set(&mut self, start: u32, end: u32, value: &str) {
        let idx = match self.values.iter().position(|v| v == value) {
            Some(i) => i,
            None => {
                self.values.push(value.to_string());
                self.values.len() - 1
            }
        };
        for cp in start..=end {
            if !(0xD800..=0xDFFF).contains(&cp) {
                self.slots[cp as usize] = idx as u8;
            }
        }
    }

    fn get(&self, cp: u32) -> Option<&str> {
        match self.slots[cp as usize] {
            0 => None,
            i => Some(self.values[i as usize].as_str()),
        }
    }

    fn clear(&mut self, value: &str) {
        if let Some(idx) = self.values.iter().position(|v| v == value) {
            for slot in self.slots.iter_mut() {
                if *slot as usize == idx {
                    *slot = 0;
                }
            }
        }
    }

    fn to_tsv(&self, title: &str) -> String {
        let mut out = format!(
            "# {title}\n# Unicode {UNICODE_VERSION}; start\tend\tvalue (hex code points, inclusive)\n"
        );
        let mut cp = 0usize;
        while cp < CODE_POINTS {
            let slot = self.slots[cp];
            let start = cp;
            while cp + 1 < CODE_POINTS && self.slots[cp + 1] == slot {
                cp += 1;
            }
            if slot != 0 {
                out.push_str(&format!(
                    "{:04X}\t{:04X}\t{}\n",
                    start, cp, self.values[slot as usize]
                ));
            }
            cp += 1;
        }
        out
    }
}

/// One data line split into trimmed `;` fields, with the range decoded.
fn records(content: &str) -> impl Iterator<Item = (u32, u32, Vec<&str>)> + '_ {
    content.lines().filter_map(|line| {
        let data = line.split('#').next()?.trim();
        if data.is_empty() {
            return None;
        }
        let mut fields = data.split(';').map(str::trim);
        let range = fields.next()?;
        let (start, end) = match range.split_once("..") {
            Some((a, b)) => (u32::from_str_radix(a, 16).ok()?, u32::from_str_radix(b, 16).ok()?),
            None => {
                let cp = u32::from_str_radix(range, 16).ok()?;
                (cp, cp)
            }
        };
        Some((start, end, fields.collect()))
    })
}

fn read(ucd_dir: &Path, rel: &str) -> io::Result<String> {
    fs::read_to_string(ucd_dir.join(rel))
        .map_err(|e| io::Error::new(e.kind(), format!("{rel}: {e}")))
}

fn east_asian_width(ucd_dir: &Path) -> io::Result<Assignment> {
    let mut table = Assignment::new();
    for (start, end) in DEFAULT_WIDE {
        table.set(start, end, "W");
    }
    for (start, end, fields) in records(&read(ucd_dir, "EastAsianWidth.txt")?) {
        if let Some(value) = fields.first() {
            table.set(start, end, value);
        }
    }
    table.clear("N");

    let categories = read(ucd_dir, "extracted/DerivedGeneralCategory.txt")?;
    for (start, end, fields) in records(&categories) {
        if matches!(fields.first(), Some(&("Cc" | "Cf" | "Mn" | "Me"))) {
            table.set(start, end, "Z");
        }
    }
    for (start, end) in ZERO_JAMO {
        table.set(start, end, "Z");
    }
    // U+00AD keeps its printable hyphen width
    if table.get(SOFT_HYPHEN) == Some("Z") {
        table.set(SOFT_HYPHEN, SOFT_HYPHEN, "A");
    }
    Ok(table)
}

fn simple_property(ucd_dir: &Path, rel: &str, default: &str) -> io::Result<Assignment> {
    let mut table = Assignment::new();
    for (start, end, fields) in records(&read(ucd_dir, rel)?) {
        if let Some(value) = fields.first() {
            table.set(start, end, value);
        }
    }
    table.clear(default);
    Ok(table)
}

fn extended_pictographic(ucd_dir: &Path) -> io::Result<Assignment> {
    let mut table = Assignment::new();
    for (start, end, fields) in records(&read(ucd_dir, "emoji/emoji-data.txt")?) {
        if fields.first() == Some(&"Extended_Pictographic") {
            table.set(start, end, "Yes");
        }
    }
    Ok(table)
}

fn indic_conjunct_break(ucd_dir: &Path) -> io::Result<Assignment> {
    let mut table = Assignment::new();
    for (start, end, fields) in records(&read(ucd_dir, "DerivedCoreProperties.txt")?) {
        if let [prop, value, ..] = fields.as_slice() {
            if *prop == "InCB" && *value != "None" {
                table.set(start, end, value);
            }
        }
    }
    Ok(table)
}

/// Rewrite every table in `data_dir` from the UCD files in `ucd_dir`.
pub fn generate(ucd_dir: &Path, data_dir: &Path) -> io::Result<()> {
    let tables = [
        (
            "east_asian_width.tsv",
            "East_Asian_Width (N omitted; Z = zero-width derived from Cc/Cf/Mn/Me and medial/final jamo)",
            east_asian_width(ucd_dir)?,
        ),
        (
            "grapheme_break.tsv",
            "Grapheme_Cluster_Break (Other omitted)",
            simple_property(ucd_dir, "auxiliary/GraphemeBreakProperty.txt", "Other")?,
        ),
        (
            "word_break.tsv",
            "Word_Break (Other omitted)",
            simple_property(ucd_dir, "auxiliary/WordBreakProperty.txt", "Other")?,
        ),
        (
            "sentence_break.tsv",
            "Sentence_Break (Other omitted)",
            simple_property(ucd_dir, "auxiliary/SentenceBreakProperty.txt", "Other")?,
        ),
        (
            "extended_pictographic.tsv",
            "Extended_Pictographic=Yes",
            extended_pictographic(ucd_dir)?,
        ),
        (
            "indic_conjunct_break.tsv",
            "Indic_Conjunct_Break (None omitted)",
            indic_conjunct_break(ucd_dir)?,
        ),
    ];

    fs::create_dir_all(data_dir)?;
    for (name, title, table) in tables {
        fs::write(data_dir.join(name), table.to_tsv(title))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records() {
        let content = "\
# comment line
0000..001F     ; N  # Cc    [32] <control-0000>..<control-001F>
00A1           ; A  # Po         INVERTED EXCLAMATION MARK
0915..0939    ; InCB; Consonant # Lo  [37] DEVANAGARI LETTER KA..DEVANAGARI LETTER HA
";
        let parsed: Vec<_> = records(content).collect();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], (0x0000, 0x001F, vec!["N"]));
        assert_eq!(parsed[1], (0x00A1, 0x00A1, vec!["A"]));
        assert_eq!(parsed[2], (0x0915, 0x0939, vec!["InCB", "Consonant"]));
    }

    #[test]
    fn test_assignment_merges_runs() {
        let mut table = Assignment::new();
        table.set(0x41, 0x5A, "ALetter");
        table.set(0x61, 0x7A, "ALetter");
        table.set(0x5B, 0x5B, "Other");
        table.clear("Other");
        let tsv = table.to_tsv("t");
        let lines: Vec<&str> = tsv.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(lines, vec!["0041\t005A\tALetter", "0061\t007A\tALetter"]);
    }
}
