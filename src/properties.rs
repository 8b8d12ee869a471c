//! Unicode property values used by width resolution and segmentation.
//!
//! Each enum is parsed from the UCD short/long value names that appear in
//! the `data/*.tsv` tables (see [`WidthCategory::from_ucd`] and friends).

use serde::Serialize;

/// East Asian Width category of a code point, plus the derived `Zero`
/// category for controls, format characters and combining marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WidthCategory {
    Narrow,
    Wide,
    Halfwidth,
    Fullwidth,
    Ambiguous,
    #[default]
    Neutral,
    Zero,
}

impl WidthCategory {
    pub fn from_ucd(value: &str) -> Option<Self> {
        Some(match value {
            "Na" => Self::Narrow,
            "W" => Self::Wide,
            "H" => Self::Halfwidth,
            "F" => Self::Fullwidth,
            "A" => Self::Ambiguous,
            "N" => Self::Neutral,
            "Z" => Self::Zero,
            _ => return None,
        })
    }
}

/// `Grapheme_Cluster_Break` property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GraphemeClass {
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    #[default]
    Other,
}

impl GraphemeClass {
    pub fn from_ucd(value: &str) -> Option<Self> {
        Some(match value {
            "CR" => Self::CR,
            "LF" => Self::LF,
            "Control" => Self::Control,
            "Extend" => Self::Extend,
            "ZWJ" => Self::ZWJ,
            "Regional_Indicator" => Self::RegionalIndicator,
            "Prepend" => Self::Prepend,
            "SpacingMark" => Self::SpacingMark,
            "L" => Self::L,
            "V" => Self::V,
            "T" => Self::T,
            "LV" => Self::LV,
            "LVT" => Self::LVT,
            "Other" => Self::Other,
            _ => return None,
        })
    }

    /// GB4/GB5: CR, LF and Control all force a break on either side.
    pub fn is_control(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Control)
    }
}

/// `Word_Break` property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum WordClass {
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
    #[default]
    Other,
}

impl WordClass {
    pub fn from_ucd(value: &str) -> Option<Self> {
        Some(match value {
            "CR" => Self::CR,
            "LF" => Self::LF,
            "Newline" => Self::Newline,
            "Extend" => Self::Extend,
            "ZWJ" => Self::ZWJ,
            "Regional_Indicator" => Self::RegionalIndicator,
            "Format" => Self::Format,
            "Katakana" => Self::Katakana,
            "Hebrew_Letter" => Self::HebrewLetter,
            "ALetter" => Self::ALetter,
            "Single_Quote" => Self::SingleQuote,
            "Double_Quote" => Self::DoubleQuote,
            "MidNumLet" => Self::MidNumLet,
            "MidLetter" => Self::MidLetter,
            "MidNum" => Self::MidNum,
            "Numeric" => Self::Numeric,
            "ExtendNumLet" => Self::ExtendNumLet,
            "WSegSpace" => Self::WSegSpace,
            "Other" => Self::Other,
            _ => return None,
        })
    }

    pub fn is_newline(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Newline)
    }

    /// Characters WB4 folds into the preceding character.
    pub fn is_ignorable(self) -> bool {
        matches!(self, Self::Extend | Self::Format | Self::ZWJ)
    }

    /// AHLetter in the rule notation.
    pub fn is_ah_letter(self) -> bool {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }

    /// MidNumLetQ in the rule notation.
    pub fn is_mid_num_let_q(self) -> bool {
        matches!(self, Self::MidNumLet | Self::SingleQuote)
    }
}

/// `Sentence_Break` property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SentenceClass {
    CR,
    LF,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
    #[default]
    Other,
}

impl SentenceClass {
    pub fn from_ucd(value: &str) -> Option<Self> {
        Some(match value {
            "CR" => Self::CR,
            "LF" => Self::LF,
            "Extend" => Self::Extend,
            "Sep" => Self::Sep,
            "Format" => Self::Format,
            "Sp" => Self::Sp,
            "Lower" => Self::Lower,
            "Upper" => Self::Upper,
            "OLetter" => Self::OLetter,
            "Numeric" => Self::Numeric,
            "ATerm" => Self::ATerm,
            "SContinue" => Self::SContinue,
            "STerm" => Self::STerm,
            "Close" => Self::Close,
            "Other" => Self::Other,
            _ => return None,
        })
    }

    /// ParaSep in the rule notation.
    pub fn is_para_sep(self) -> bool {
        matches!(self, Self::Sep | Self::CR | Self::LF)
    }

    /// SATerm in the rule notation.
    pub fn is_sa_term(self) -> bool {
        matches!(self, Self::ATerm | Self::STerm)
    }

    /// Characters SB5 folds into the preceding character.
    pub fn is_ignorable(self) -> bool {
        matches!(self, Self::Extend | Self::Format)
    }
}

/// `Indic_Conjunct_Break` property values (GB9c).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum IndicConjunctBreak {
    Consonant,
    Extend,
    Linker,
    #[default]
    None,
}

impl IndicConjunctBreak {
    pub fn from_ucd(value: &str) -> Option<Self> {
        Some(match value {
            "Consonant" => Self::Consonant,
            "Extend" => Self::Extend,
            "Linker" => Self::Linker,
            "None" => Self::None,
            _ => return None,
        })
    }
}
