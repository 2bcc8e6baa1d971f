//! Text shown in a segment the user has not filled in yet.

use std::sync::LazyLock;

use crate::intl::{Locale, LocalizedStrings};
use crate::types::SegmentType;

const DASH: char = '\u{2013}';

static DATE_TOKENS: LazyLock<LocalizedStrings> = LazyLock::new(|| {
    LocalizedStrings::new(&[
        ("en", &[("year", "yyyy"), ("month", "mm"), ("day", "dd")]),
        ("de", &[("year", "jjjj"), ("month", "mm"), ("day", "tt")]),
        ("fr", &[("year", "aaaa"), ("month", "mm"), ("day", "jj")]),
        ("es", &[("year", "aaaa"), ("month", "mm"), ("day", "dd")]),
        ("it", &[("year", "aaaa"), ("month", "mm"), ("day", "gg")]),
        ("pt", &[("year", "aaaa"), ("month", "mm"), ("day", "dd")]),
        ("nl", &[("year", "jjjj"), ("month", "mm"), ("day", "dd")]),
        ("ru", &[("year", "гггг"), ("month", "мм"), ("day", "дд")]),
        ("pl", &[("year", "rrrr"), ("month", "mm"), ("day", "dd")]),
        ("sv", &[("year", "åååå"), ("month", "mm"), ("day", "dd")]),
        ("ja", &[("year", "年"), ("month", "月"), ("day", "日")]),
        ("zh", &[("year", "年"), ("month", "月"), ("day", "日")]),
        ("ko", &[("year", "년"), ("month", "월"), ("day", "일")]),
        ("ar", &[("year", "سنة"), ("month", "شهر"), ("day", "يوم")]),
        ("he", &[("year", "שנה"), ("month", "חודש"), ("day", "יום")]),
    ])
});

/// Placeholder text for a segment.
///
/// `text` is the formatted text of the placeholder value; select-style
/// segments (era, day period) show it unchanged.
pub fn placeholder(ty: SegmentType, text: &str, locale: &Locale) -> String {
    match ty {
        SegmentType::Era | SegmentType::DayPeriod => text.to_string(),
        SegmentType::Year | SegmentType::Month | SegmentType::Day => DATE_TOKENS
            .get(ty.as_str(), locale)
            .map(str::to_string)
            .unwrap_or_else(|| dashes(2)),
        SegmentType::Millisecond => dashes(3),
        SegmentType::Hour | SegmentType::Minute | SegmentType::Second => dashes(2),
        SegmentType::TimeZoneName | SegmentType::Literal => text.to_string(),
    }
}

fn dashes(n: usize) -> String {
    std::iter::repeat_n(DASH, n).collect()
}
