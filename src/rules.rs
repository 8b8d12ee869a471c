//! Ordered boundary rules and the single pass that applies them.
//!
//! Each segmentation mode supplies a scanner (per-code-point classes plus the
//! running context its rules look back on) and a static, ordered rule list.
//! At every interior position the first rule whose predicate holds decides
//! the verdict; when none holds the position is a break.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Break,
    NoBreak,
}

/// One boundary rule. `applies(scanner, pos)` looks at the candidate
/// between code points `pos - 1` and `pos`.
pub struct Rule<S> {
    pub id: &'static str,
    pub verdict: Verdict,
    pub applies: fn(&S, usize) -> bool,
}

/// Per-mode state walked left to right by [`break_set`].
pub trait Scanner {
    /// Number of code points.
    fn len(&self) -> usize;

    /// Fold code point `index` into the running context. Called for every
    /// index in order, before the candidate at `index + 1` is evaluated.
    fn observe(&mut self, index: usize);
}

/// Strictly increasing code-point offsets of boundaries, always starting
/// with 0 and ending with the text length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BreakSet(Vec<usize>);

impl BreakSet {
    /// Accepts `offsets` only if it is non-empty, starts at 0 and is
    /// strictly increasing.
    pub fn new(offsets: Vec<usize>) -> Option<Self> {
        let valid = offsets.first() == Some(&0) && offsets.windows(2).all(|w| w[0] < w[1]);
        valid.then_some(BreakSet(offsets))
    }

    pub fn offsets(&self) -> &[usize] {
        &self.0
    }

    /// Number of boundaries (segments + 1, or 1 for empty text).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Code-point length of the text the set was computed for.
    pub fn end(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    pub fn segment_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

/// A decided candidate position, as reported by [`crate::explain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boundary {
    pub offset: usize,
    pub rule: &'static str,
    pub verdict: Verdict,
}

fn decide<S>(scanner: &S, rules: &[Rule<S>], fallback: &'static str, pos: usize) -> (&'static str, Verdict) {
    rules
        .iter()
        .find(|rule| (rule.applies)(scanner, pos))
        .map_or((fallback, Verdict::Break), |rule| (rule.id, rule.verdict))
}

/// Walks every candidate position once and records the decision for each.
/// `fallback` names the implicit final break rule (GB999, WB999, ...).
pub fn walk<S: Scanner>(mut scanner: S, rules: &[Rule<S>], fallback: &'static str) -> Vec<Boundary> {
    let n = scanner.len();
    let mut decisions = Vec::with_capacity(n + 1);
    decisions.push(Boundary { offset: 0, rule: "sot", verdict: Verdict::Break });

    for pos in 1..n {
        scanner.observe(pos - 1);
        let (rule, verdict) = decide(&scanner, rules, fallback, pos);
        tracing::trace!(offset = pos, rule, ?verdict, "boundary");
        decisions.push(Boundary { offset: pos, rule, verdict });
    }

    if n > 0 {
        decisions.push(Boundary { offset: n, rule: "eot", verdict: Verdict::Break });
    }
    decisions
}

/// Break offsets only; the decisions themselves are dropped.
pub fn break_set<S: Scanner>(scanner: S, rules: &[Rule<S>], fallback: &'static str) -> BreakSet {
    let offsets = walk(scanner, rules, fallback)
        .into_iter()
        .filter(|b| b.verdict == Verdict::Break)
        .map(|b| b.offset)
        .collect();
    BreakSet(offsets)
}
