//! Word boundaries (UAX #29, WB3–WB999).
//!
//! WB4 folds Extend/Format/ZWJ into the character before them (unless that
//! is the start of text or a newline), so rules from WB5 on compare the
//! nearest non-folded characters rather than raw neighbours.

use crate::properties::WordClass as W;
use crate::rules::{Rule, Scanner, Verdict};
use crate::tables::table;

pub struct WordScanner {
    classes: Vec<W>,
    pictographic: Vec<bool>,
    /// Last non-folded index before the candidate.
    last: Option<usize>,
    /// Non-folded index before `last`.
    before_last: Option<usize>,
    /// Non-folded regional indicators ending at `last`.
    ri_run: usize,
}

impl WordScanner {
    pub fn new(text: &str) -> Self {
        let t = table();
        let (classes, pictographic): (Vec<W>, Vec<bool>) = text
            .chars()
            .map(|ch| (t.word_class(ch as u32), t.extended_pictographic(ch as u32)))
            .unzip();
        WordScanner {
            classes,
            pictographic,
            last: None,
            before_last: None,
            ri_run: 0,
        }
    }

    fn raw_prev(&self, pos: usize) -> W {
        self.classes[pos - 1]
    }

    fn next(&self, pos: usize) -> W {
        self.classes[pos]
    }

    fn prev(&self) -> W {
        self.last.map_or(W::Other, |i| self.classes[i])
    }

    fn prev2(&self) -> Option<W> {
        self.before_last.map(|i| self.classes[i])
    }

    /// First non-ignorable class after `pos`.
    fn after_next(&self, pos: usize) -> Option<W> {
        self.classes[pos + 1..].iter().copied().find(|c| !c.is_ignorable())
    }
}

impl Scanner for WordScanner {
    fn len(&self) -> usize {
        self.classes.len()
    }

    fn observe(&mut self, index: usize) {
        let class = self.classes[index];
        let folded = index > 0 && class.is_ignorable() && !self.classes[index - 1].is_newline();
        if folded {
            return;
        }
        self.before_last = self.last;
        self.last = Some(index);
        self.ri_run = if class == W::RegionalIndicator { self.ri_run + 1 } else { 0 };
    }
}

fn wb3(s: &WordScanner, pos: usize) -> bool {
    s.raw_prev(pos) == W::CR && s.next(pos) == W::LF
}

fn wb3a(s: &WordScanner, pos: usize) -> bool {
    s.raw_prev(pos).is_newline()
}

fn wb3b(s: &WordScanner, pos: usize) -> bool {
    s.next(pos).is_newline()
}

fn wb3c(s: &WordScanner, pos: usize) -> bool {
    s.raw_prev(pos) == W::ZWJ && s.pictographic[pos]
}

fn wb3d(s: &WordScanner, pos: usize) -> bool {
    s.raw_prev(pos) == W::WSegSpace && s.next(pos) == W::WSegSpace
}

fn wb4(s: &WordScanner, pos: usize) -> bool {
    s.next(pos).is_ignorable()
}

fn wb5(s: &WordScanner, pos: usize) -> bool {
    s.prev().is_ah_letter() && s.next(pos).is_ah_letter()
}

fn wb6(s: &WordScanner, pos: usize) -> bool {
    let next = s.next(pos);
    s.prev().is_ah_letter()
        && (next == W::MidLetter || next.is_mid_num_let_q())
        && s.after_next(pos).is_some_and(W::is_ah_letter)
}

fn wb7(s: &WordScanner, pos: usize) -> bool {
    let prev = s.prev();
    s.prev2().is_some_and(W::is_ah_letter)
        && (prev == W::MidLetter || prev.is_mid_num_let_q())
        && s.next(pos).is_ah_letter()
}

fn wb7a(s: &WordScanner, pos: usize) -> bool {
    s.prev() == W::HebrewLetter && s.next(pos) == W::SingleQuote
}

fn wb7b(s: &WordScanner, pos: usize) -> bool {
    s.prev() == W::HebrewLetter
        && s.next(pos) == W::DoubleQuote
        && s.after_next(pos) == Some(W::HebrewLetter)
}

fn wb7c(s: &WordScanner, pos: usize) -> bool {
    s.prev2() == Some(W::HebrewLetter) && s.prev() == W::DoubleQuote && s.next(pos) == W::HebrewLetter
}

fn wb8(s: &WordScanner, pos: usize) -> bool {
    s.prev() == W::Numeric && s.next(pos) == W::Numeric
}

fn wb9(s: &WordScanner, pos: usize) -> bool {
    s.prev().is_ah_letter() && s.next(pos) == W::Numeric
}

fn wb10(s: &WordScanner, pos: usize) -> bool {
    s.prev() == W::Numeric && s.next(pos).is_ah_letter()
}

fn wb11(s: &WordScanner, pos: usize) -> bool {
    let prev = s.prev();
    s.prev2() == Some(W::Numeric)
        && (prev == W::MidNum || prev.is_mid_num_let_q())
        && s.next(pos) == W::Numeric
}

fn wb12(s: &WordScanner, pos: usize) -> bool {
    let next = s.next(pos);
    s.prev() == W::Numeric
        && (next == W::MidNum || next.is_mid_num_let_q())
        && s.after_next(pos) == Some(W::Numeric)
}

fn wb13(s: &WordScanner, pos: usize) -> bool {
    s.prev() == W::Katakana && s.next(pos) == W::Katakana
}

fn wb13a(s: &WordScanner, pos: usize) -> bool {
    let prev = s.prev();
    (prev.is_ah_letter() || matches!(prev, W::Numeric | W::Katakana | W::ExtendNumLet))
        && s.next(pos) == W::ExtendNumLet
}

fn wb13b(s: &WordScanner, pos: usize) -> bool {
    let next = s.next(pos);
    s.prev() == W::ExtendNumLet && (next.is_ah_letter() || matches!(next, W::Numeric | W::Katakana))
}

fn wb15_16(s: &WordScanner, pos: usize) -> bool {
    s.prev() == W::RegionalIndicator && s.next(pos) == W::RegionalIndicator && s.ri_run % 2 == 1
}

pub static WORD_RULES: &[Rule<WordScanner>] = &[
    Rule { id: "WB3", verdict: Verdict::NoBreak, applies: wb3 },
    Rule { id: "WB3a", verdict: Verdict::Break, applies: wb3a },
    Rule { id: "WB3b", verdict: Verdict::Break, applies: wb3b },
    Rule { id: "WB3c", verdict: Verdict::NoBreak, applies: wb3c },
    Rule { id: "WB3d", verdict: Verdict::NoBreak, applies: wb3d },
    Rule { id: "WB4", verdict: Verdict::NoBreak, applies: wb4 },
    Rule { id: "WB5", verdict: Verdict::NoBreak, applies: wb5 },
    Rule { id: "WB6", verdict: Verdict::NoBreak, applies: wb6 },
    Rule { id: "WB7", verdict: Verdict::NoBreak, applies: wb7 },
    Rule { id: "WB7a", verdict: Verdict::NoBreak, applies: wb7a },
    Rule { id: "WB7b", verdict: Verdict::NoBreak, applies: wb7b },
    Rule { id: "WB7c", verdict: Verdict::NoBreak, applies: wb7c },
    Rule { id: "WB8", verdict: Verdict::NoBreak, applies: wb8 },
    Rule { id: "WB9", verdict: Verdict::NoBreak, applies: wb9 },
    Rule { id: "WB10", verdict: Verdict::NoBreak, applies: wb10 },
    Rule { id: "WB11", verdict: Verdict::NoBreak, applies: wb11 },
    Rule { id: "WB12", verdict: Verdict::NoBreak, applies: wb12 },
    Rule { id: "WB13", verdict: Verdict::NoBreak, applies: wb13 },
    Rule { id: "WB13a", verdict: Verdict::NoBreak, applies: wb13a },
    Rule { id: "WB13b", verdict: Verdict::NoBreak, applies: wb13b },
    Rule { id: "WB15", verdict: Verdict::NoBreak, applies: wb15_16 },
];

pub const FALLBACK: &str = "WB999";
