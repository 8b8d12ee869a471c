use crate::properties::SentenceClass as S;
use crate::rules::{Rule, Scanner, Verdict};
use crate::tables::table;

/// Where the text so far stands relative to `SATerm Close* Sp*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Other,
    Term,
    Close,
    Sp,
}

pub struct SentenceScanner {
    classes: Vec<S>,
    /// First OLetter, Upper, Lower, ParaSep or SATerm at or after each index.
    stop_ahead: Vec<Option<S>>,
    last: Option<usize>,
    before_last: Option<usize>,
    phase: Phase,
    /// The ATerm or STerm that opened the current phase.
    term: Option<S>,
}

impl SentenceScanner {
    pub fn new(text: &str) -> Self {
        let t = table();
        let classes: Vec<S> = text.chars().map(|ch| t.sentence_class(ch as u32)).collect();

        let mut stop_ahead = vec![None; classes.len()];
        let mut stop = None;
        for (i, &c) in classes.iter().enumerate().rev() {
            if matches!(c, S::OLetter | S::Upper | S::Lower) || c.is_para_sep() || c.is_sa_term() {
                stop = Some(c);
            }
            stop_ahead[i] = stop;
        }

        SentenceScanner {
            classes,
            stop_ahead,
            last: None,
            before_last: None,
            phase: Phase::Other,
            term: None,
        }
    }

    fn raw_prev(&self, pos: usize) -> S {
        self.classes[pos - 1]
    }

    fn next(&self, pos: usize) -> S {
        self.classes[pos]
    }

    fn prev(&self) -> S {
        self.last.map_or(S::Other, |i| self.classes[i])
    }

    fn prev2(&self) -> Option<S> {
        self.before_last.map(|i| self.classes[i])
    }

    fn after_term(&self) -> bool {
        self.phase != Phase::Other
    }

    fn lower_ahead(&self, pos: usize) -> bool {
        self.stop_ahead[pos] == Some(S::Lower)
    }
}

impl Scanner for SentenceScanner {
    fn len(&self) -> usize {
        self.classes.len()
    }

    fn observe(&mut self, index: usize) {
        let class = self.classes[index];
        let folded = index > 0 && class.is_ignorable() && !self.classes[index - 1].is_para_sep();
        if folded {
            return;
        }
        self.before_last = self.last;
        self.last = Some(index);

        self.phase = match (class, self.phase) {
            (S::ATerm | S::STerm, _) => Phase::Term,
            (S::Close, Phase::Term | Phase::Close) => Phase::Close,
            (S::Sp, Phase::Term | Phase::Close | Phase::Sp) => Phase::Sp,
            _ => Phase::Other,
        };
        self.term = match self.phase {
            Phase::Other => None,
            Phase::Term => Some(class),
            Phase::Close | Phase::Sp => self.term,
        };
    }
}

fn sb3(s: &SentenceScanner, pos: usize) -> bool {
    s.raw_prev(pos) == S::CR && s.next(pos) == S::LF
}

fn sb4(s: &SentenceScanner, pos: usize) -> bool {
    s.raw_prev(pos).is_para_sep()
}

fn sb5(s: &SentenceScanner, pos: usize) -> bool {
    s.next(pos).is_ignorable()
}

fn sb6(s: &SentenceScanner, pos: usize) -> bool {
    s.prev() == S::ATerm && s.next(pos) == S::Numeric
}

fn sb7(s: &SentenceScanner, pos: usize) -> bool {
    matches!(s.prev2(), Some(S::Upper | S::Lower)) && s.prev() == S::ATerm && s.next(pos) == S::Upper
}

fn sb8(s: &SentenceScanner, pos: usize) -> bool {
    s.term == Some(S::ATerm) && s.lower_ahead(pos)
}

fn sb8a(s: &SentenceScanner, pos: usize) -> bool {
    let next = s.next(pos);
    s.after_term() && (next == S::SContinue || next.is_sa_term())
}

fn sb9(s: &SentenceScanner, pos: usize) -> bool {
    let next = s.next(pos);
    matches!(s.phase, Phase::Term | Phase::Close)
        && (matches!(next, S::Close | S::Sp) || next.is_para_sep())
}

fn sb10(s: &SentenceScanner, pos: usize) -> bool {
    let next = s.next(pos);
    s.after_term() && (next == S::Sp || next.is_para_sep())
}

fn sb11(s: &SentenceScanner, _pos: usize) -> bool {
    s.after_term()
}

fn sb998(_s: &SentenceScanner, _pos: usize) -> bool {
    true
}

pub static SENTENCE_RULES: &[Rule<SentenceScanner>] = &[
    Rule { id: "SB3", verdict: Verdict::NoBreak, applies: sb3 },
    Rule { id: "SB4", verdict: Verdict::Break, applies: sb4 },
    Rule { id: "SB5", verdict: Verdict::NoBreak, applies: sb5 },
    Rule { id: "SB6", verdict: Verdict::NoBreak, applies: sb6 },
    Rule { id: "SB7", verdict: Verdict::NoBreak, applies: sb7 },
    Rule { id: "SB8", verdict: Verdict::NoBreak, applies: sb8 },
    Rule { id: "SB8a", verdict: Verdict::NoBreak, applies: sb8a },
    Rule { id: "SB9", verdict: Verdict::NoBreak, applies: sb9 },
    Rule { id: "SB10", verdict: Verdict::NoBreak, applies: sb10 },
    Rule { id: "SB11", verdict: Verdict::Break, applies: sb11 },
    Rule { id: "SB998", verdict: Verdict::NoBreak, applies: sb998 },
];

/// Never reached: SB998 matches every candidate.
pub const FALLBACK: &str = "SB999";
