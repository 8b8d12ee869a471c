//! East Asian Width resolution.
//!
//! Ambiguous characters (§ ± × ÷ …) are one column in most contexts and two
//! in legacy East Asian typography. [`LocalePolicy`] picks between the two
//! from a locale tag; every other category has a fixed width.

use crate::properties::WidthCategory;
use crate::tables::table;

/// Width returned by [`eaw_width`] for empty text.
pub const NO_CHARACTER: i32 = -1;

/// How Ambiguous characters resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalePolicy {
    #[default]
    Default,
    EastAsianContext,
}

impl LocalePolicy {
    /// Primary subtag is whatever precedes the first `-`, `_`, `.` or `@`,
    /// so `ja`, `ja-JP`, `zh_Hant_TW` and `ko_KR.UTF-8` all count.
    /// Unknown, empty or absent tags fall back to [`LocalePolicy::Default`].
    pub fn from_locale(locale: Option<&str>) -> Self {
        let Some(tag) = locale else {
            return Self::Default;
        };
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match primary.as_str() {
            "ja" | "zh" | "ko" => Self::EastAsianContext,
            _ => {
                if !tag.is_empty() {
                    tracing::debug!(locale = tag, "no East Asian context for locale, using default width policy");
                }
                Self::Default
            }
        }
    }
}

impl WidthCategory {
    /// Display columns for this category under `policy`.
    pub fn width(self, policy: LocalePolicy) -> u8 {
        match self {
            Self::Wide | Self::Fullwidth => 2,
            Self::Halfwidth | Self::Narrow | Self::Neutral => 1,
            Self::Zero => 0,
            Self::Ambiguous => match policy {
                LocalePolicy::Default => 1,
                LocalePolicy::EastAsianContext => 2,
            },
        }
    }
}

/// East Asian Width category of a single character.
pub fn width_category(ch: char) -> WidthCategory {
    table().width_category(ch as u32)
}

/// Width of the first code point of `text`, or [`NO_CHARACTER`] (-1) when
/// `text` is empty. Anything after the first code point is ignored.
///
/// ```
/// use rust_textseg::eaw_width;
/// assert_eq!(eaw_width("あいう", None), 2);
/// assert_eq!(eaw_width("§", None), 1);
/// assert_eq!(eaw_width("§", Some("ja")), 2);
/// assert_eq!(eaw_width("", Some("ja")), -1);
/// ```
pub fn eaw_width(text: &str, locale: Option<&str>) -> i32 {
    match text.chars().next() {
        None => NO_CHARACTER,
        Some(ch) => {
            let policy = LocalePolicy::from_locale(locale);
            i32::from(width_category(ch).width(policy))
        }
    }
}

/// Sum of the widths of every code point in `text`.
pub fn text_width(text: &str, locale: Option<&str>) -> usize {
    let policy = LocalePolicy::from_locale(locale);
    let t = table();
    text.chars()
        .map(|ch| usize::from(t.width_category(ch as u32).width(policy)))
        .sum()
}
