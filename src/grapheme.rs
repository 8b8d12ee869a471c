use crate::properties::{GraphemeClass as G, IndicConjunctBreak};
use crate::rules::{Rule, Scanner, Verdict};
use crate::tables::table;

#[derive(Debug, Clone, Copy)]
struct Props {
    class: G,
    incb: IndicConjunctBreak,
    pictographic: bool,
}

/// Progress through `Consonant [Extend Linker]* Linker [Extend Linker]*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conjunct {
    None,
    Consonant,
    Linked,
}

pub struct GraphemeScanner {
    props: Vec<Props>,
    /// Regional indicators immediately before the candidate.
    ri_run: usize,
    /// Text so far ends with `ExtPict Extend*`.
    pict_tail: bool,
    /// Text so far ends with `ExtPict Extend* ZWJ`.
    pict_zwj: bool,
    conjunct: Conjunct,
}

impl GraphemeScanner {
    pub fn new(text: &str) -> Self {
        let t = table();
        let props = text
            .chars()
            .map(|ch| {
                let cp = ch as u32;
                Props {
                    class: t.grapheme_class(cp),
                    incb: t.indic_conjunct_break(cp),
                    pictographic: t.extended_pictographic(cp),
                }
            })
            .collect();
        GraphemeScanner {
            props,
            ri_run: 0,
            pict_tail: false,
            pict_zwj: false,
            conjunct: Conjunct::None,
        }
    }

    fn prev(&self, pos: usize) -> G {
        self.props[pos - 1].class
    }

    fn next(&self, pos: usize) -> G {
        self.props[pos].class
    }
}

impl Scanner for GraphemeScanner {
    fn len(&self) -> usize {
        self.props.len()
    }

    fn observe(&mut self, index: usize) {
        let p = self.props[index];

        self.ri_run = if p.class == G::RegionalIndicator { self.ri_run + 1 } else { 0 };

        self.pict_zwj = p.class == G::ZWJ && self.pict_tail;
        self.pict_tail = p.pictographic || (p.class == G::Extend && self.pict_tail);

        self.conjunct = match (p.incb, self.conjunct) {
            (IndicConjunctBreak::Consonant, _) => Conjunct::Consonant,
            (IndicConjunctBreak::Linker, Conjunct::None) => Conjunct::None,
            (IndicConjunctBreak::Linker, _) => Conjunct::Linked,
            (IndicConjunctBreak::Extend, state) => state,
            (IndicConjunctBreak::None, _) => Conjunct::None,
        };
    }
}

fn gb3(s: &GraphemeScanner, pos: usize) -> bool {
    s.prev(pos) == G::CR && s.next(pos) == G::LF
}

fn gb4(s: &GraphemeScanner, pos: usize) -> bool {
    s.prev(pos).is_control()
}

fn gb5(s: &GraphemeScanner, pos: usize) -> bool {
    s.next(pos).is_control()
}

fn gb6(s: &GraphemeScanner, pos: usize) -> bool {
    s.prev(pos) == G::L && matches!(s.next(pos), G::L | G::V | G::LV | G::LVT)
}

fn gb7(s: &GraphemeScanner, pos: usize) -> bool {
    matches!(s.prev(pos), G::LV | G::V) && matches!(s.next(pos), G::V | G::T)
}

fn gb8(s: &GraphemeScanner, pos: usize) -> bool {
    matches!(s.prev(pos), G::LVT | G::T) && s.next(pos) == G::T
}

fn gb9(s: &GraphemeScanner, pos: usize) -> bool {
    matches!(s.next(pos), G::Extend | G::ZWJ)
}

fn gb9a(s: &GraphemeScanner, pos: usize) -> bool {
    s.next(pos) == G::SpacingMark
}

fn gb9b(s: &GraphemeScanner, pos: usize) -> bool {
    s.prev(pos) == G::Prepend
}

fn gb9c(s: &GraphemeScanner, pos: usize) -> bool {
    s.conjunct == Conjunct::Linked && s.props[pos].incb == IndicConjunctBreak::Consonant
}

fn gb11(s: &GraphemeScanner, pos: usize) -> bool {
    s.pict_zwj && s.props[pos].pictographic
}

fn gb12_13(s: &GraphemeScanner, pos: usize) -> bool {
    s.next(pos) == G::RegionalIndicator && s.ri_run % 2 == 1
}

pub static GRAPHEME_RULES: &[Rule<GraphemeScanner>] = &[
    Rule { id: "GB3", verdict: Verdict::NoBreak, applies: gb3 },
    Rule { id: "GB4", verdict: Verdict::Break, applies: gb4 },
    Rule { id: "GB5", verdict: Verdict::Break, applies: gb5 },
    Rule { id: "GB6", verdict: Verdict::NoBreak, applies: gb6 },
    Rule { id: "GB7", verdict: Verdict::NoBreak, applies: gb7 },
    Rule { id: "GB8", verdict: Verdict::NoBreak, applies: gb8 },
    Rule { id: "GB9", verdict: Verdict::NoBreak, applies: gb9 },
    Rule { id: "GB9a", verdict: Verdict::NoBreak, applies: gb9a },
    Rule { id: "GB9b", verdict: Verdict::NoBreak, applies: gb9b },
    Rule { id: "GB9c", verdict: Verdict::NoBreak, applies: gb9c },
    Rule { id: "GB11", verdict: Verdict::NoBreak, applies: gb11 },
    Rule { id: "GB12", verdict: Verdict::NoBreak, applies: gb12_13 },
];

pub const FALLBACK: &str = "GB999";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{break_set, walk};

    fn clusters(text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let set = break_set(GraphemeScanner::new(text), GRAPHEME_RULES, FALLBACK);
        set.offsets()
            .windows(2)
            .map(|w| chars[w[0]..w[1]].iter().collect())
            .collect()
    }

    #[test]
    fn test_grapheme_clusters() {
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("Hello", vec!["H", "e", "l", "l", "o"]),
            ("a\r\nb", vec!["a", "\r\n", "b"]),
            ("\n\r", vec!["\n", "\r"]),
            ("e\u{301}x", vec!["e\u{301}", "x"]),
            // Hangul jamo L V T
            ("\u{1100}\u{1161}\u{11A8}", vec!["\u{1100}\u{1161}\u{11A8}"]),
            // precomposed LV + T
            ("\u{AC00}\u{11A8}", vec!["\u{AC00}\u{11A8}"]),
            // Devanagari: ka + virama + ssa is one conjunct
            ("\u{915}\u{94D}\u{937}", vec!["\u{915}\u{94D}\u{937}"]),
            ("नमस्ते", vec!["न", "म", "स्ते"]),
            // spacing mark stays with its base
            ("\u{915}\u{93E}", vec!["\u{915}\u{93E}"]),
            // two flags, then a lone regional indicator
            (
                "\u{1F1FA}\u{1F1F8}\u{1F1EC}\u{1F1E7}\u{1F1EF}",
                vec!["\u{1F1FA}\u{1F1F8}", "\u{1F1EC}\u{1F1E7}", "\u{1F1EF}"],
            ),
            // family: man ZWJ woman ZWJ girl ZWJ boy
            (
                "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}",
                vec!["\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}"],
            ),
            // rainbow flag: white flag VS16 ZWJ rainbow
            ("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}", vec!["\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"]),
            // ZWJ after a non-pictographic base does not join the next emoji
            ("a\u{200D}\u{1F308}", vec!["a\u{200D}", "\u{1F308}"]),
            // skin tone modifier is Extend
            ("\u{1F44B}\u{1F3FD}", vec!["\u{1F44B}\u{1F3FD}"]),
            ("こんにちは👋世界", vec!["こ", "ん", "に", "ち", "は", "👋", "世", "界"]),
        ];
        for (input, expected) in &cases {
            assert_eq!(&clusters(input), expected, "clusters of {:?}", input);
        }
    }

    #[test]
    fn test_rule_ids() {
        let trace = walk(GraphemeScanner::new("\r\na\u{301}"), GRAPHEME_RULES, FALLBACK);
        let ids: Vec<&str> = trace.iter().map(|b| b.rule).collect();
        assert_eq!(ids, vec!["sot", "GB3", "GB4", "GB9", "eot"]);
    }
}
