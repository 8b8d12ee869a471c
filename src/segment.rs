use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::properties::WordClass;
use crate::rules::BreakSet;
use crate::tables::table;
use crate::utils::byte_offsets;

/// Rough word status of a segment, as word-mode consumers use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    /// Whitespace, punctuation, symbols or emoji.
    None,
    Number,
    Letter,
}

/// Segments of one text. Clones share the text and offsets.
#[derive(Debug, Clone)]
pub struct SegmentSequence {
    text: Arc<str>,
    breaks: Arc<BreakSet>,
    /// `breaks` converted to byte offsets into `text`.
    bytes: Arc<[usize]>,
}

impl SegmentSequence {
    /// `None` unless `breaks` ends at the code-point length of `text`.
    pub fn new(text: &str, breaks: BreakSet) -> Option<Self> {
        (breaks.end() == text.chars().count()).then(|| Self::from_breaks(text, breaks))
    }

    /// `breaks` must come from segmenting `text`.
    pub(crate) fn from_breaks(text: &str, breaks: BreakSet) -> Self {
        let bytes = byte_offsets(text, breaks.offsets());
        SegmentSequence {
            text: Arc::from(text),
            breaks: Arc::new(breaks),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len().saturating_sub(1)
    }

    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range of segment `i` in [`Self::text`].
    pub fn span(&self, i: usize) -> Option<Range<usize>> {
        if i < self.len() {
            Some(self.bytes[i]..self.bytes[i + 1])
        } else {
            None
        }
    }

    pub fn get(&self, i: usize) -> Option<&str> {
        self.span(i).map(|r| &self.text[r])
    }

    pub fn segment_at(&self, i: usize) -> Result<&str> {
        self.get(i).ok_or(Error::IndexOutOfRange { index: i, len: self.len() })
    }

    pub fn iter(&self) -> Segments<'_> {
        Segments { seq: self, front: 0, back: self.len() }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn break_set(&self) -> &BreakSet {
        &self.breaks
    }

    /// A segment with any letter (ideographs included) is [`WordKind::Letter`];
    /// otherwise one with a digit is [`WordKind::Number`].
    pub fn word_kind(&self, i: usize) -> Result<WordKind> {
        let segment = self.segment_at(i)?;
        let t = table();
        let mut kind = WordKind::None;
        for ch in segment.chars() {
            let class = t.word_class(ch as u32);
            if class.is_ah_letter() || class == WordClass::Katakana || ch.is_alphabetic() {
                return Ok(WordKind::Letter);
            }
            if class == WordClass::Numeric || ch.is_numeric() {
                kind = WordKind::Number;
            }
        }
        Ok(kind)
    }

    pub fn is_word_like(&self, i: usize) -> Result<bool> {
        Ok(self.word_kind(i)? != WordKind::None)
    }
}

impl PartialEq for SegmentSequence {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for SegmentSequence {}

impl Serialize for SegmentSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'a> IntoIterator for &'a SegmentSequence {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the segments of a [`SegmentSequence`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    seq: &'a SegmentSequence,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.front >= self.back {
            return None;
        }
        let segment = self.seq.get(self.front);
        self.front += 1;
        segment
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.seq.get(self.back)
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(text: &str, offsets: Vec<usize>) -> SegmentSequence {
        SegmentSequence::new(text, BreakSet::new(offsets).unwrap()).unwrap()
    }

    #[test]
    fn test_breaks_must_cover_text() {
        let cases: Vec<(&str, Vec<usize>, bool)> = vec![
            ("abcd", vec![0, 2, 4], true),
            ("", vec![0], true),
            ("中文", vec![0, 2], true),
            // stops short of the end
            ("abcd", vec![0, 2], false),
            // runs past the end
            ("ab", vec![0, 1, 5, 9], false),
            ("ab", vec![0, 1, 2, 3], false),
            ("", vec![0, 1], false),
        ];
        for (text, offsets, accepted) in cases {
            let seq = SegmentSequence::new(text, BreakSet::new(offsets.clone()).unwrap());
            assert_eq!(seq.is_some(), accepted, "breaks {:?} for {:?}", offsets, text);
            if let Some(seq) = seq {
                assert_eq!(seq.iter().collect::<String>(), text);
                assert_eq!(seq.break_set().end(), text.chars().count());
            }
        }
    }

    #[test]
    fn test_access() {
        let seq = sequence("aé中b", vec![0, 2, 3, 4]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.count(), 3);
        assert_eq!(seq.get(0), Some("aé"));
        assert_eq!(seq.get(1), Some("中"));
        assert_eq!(seq.get(2), Some("b"));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.span(1), Some(3..6));
        assert_eq!(seq.segment_at(2).unwrap(), "b");
        assert!(matches!(
            seq.segment_at(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_restartable_iteration() {
        let seq = sequence("abcd", vec![0, 1, 3, 4]);
        let first: Vec<&str> = seq.iter().collect();
        let second: Vec<&str> = (&seq).into_iter().collect();
        assert_eq!(first, vec!["a", "bc", "d"]);
        assert_eq!(first, second);
        assert_eq!(seq.iter().rev().collect::<Vec<_>>(), vec!["d", "bc", "a"]);
        assert_eq!(seq.iter().len(), 3);

        let mut it = seq.iter();
        assert_eq!(it.next(), Some("a"));
        assert_eq!(it.next_back(), Some("d"));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some("bc"));
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_empty() {
        let seq = sequence("", vec![0]);
        assert!(seq.is_empty());
        assert_eq!(seq.iter().next(), None);
        assert_eq!(seq.to_vec(), Vec::<String>::new());
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[]");
    }

    #[test]
    fn test_equality_by_segment_text() {
        let a = sequence("abc", vec![0, 1, 3]);
        let b = sequence("abc", vec![0, 1, 3]);
        let c = sequence("abc", vec![0, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_serialize() {
        let seq = sequence("a \"b\"", vec![0, 1, 2, 5]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), r#"["a"," ","\"b\""]"#);
    }

    #[test]
    fn test_word_kind() {
        let seq = sequence("Hi 42, 世界👋", vec![0, 2, 3, 5, 6, 7, 9, 10]);
        let cases = [
            (0, WordKind::Letter),
            (1, WordKind::None),
            (2, WordKind::Number),
            (3, WordKind::None),
            (4, WordKind::None),
            (5, WordKind::Letter),
            (6, WordKind::None),
        ];
        for (i, expected) in cases {
            assert_eq!(seq.word_kind(i).unwrap(), expected, "kind of {:?}", seq.get(i));
        }
        assert!(seq.is_word_like(0).unwrap());
        assert!(!seq.is_word_like(1).unwrap());
        assert!(seq.word_kind(7).is_err());
    }
}
