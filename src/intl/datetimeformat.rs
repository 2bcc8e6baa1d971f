//! A bundled numeric date/time formatter that produces typed parts.
//!
//! Part type names follow the platform convention (`fractionalSecond`,
//! `dayPeriod`, `timeZoneName`, `literal`); the segment parser owns the
//! translation into engine field names.

use crate::options::FormatOptions;
use crate::types::{FieldStyle, HourCycle, SegmentType};
use crate::value::DateTimeValue;

use super::locale::Locale;

/// One typed piece of formatted output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedPart {
    pub part_type: &'static str,
    pub value: String,
}

impl FormattedPart {
    fn new(part_type: &'static str, value: impl Into<String>) -> Self {
        FormattedPart {
            part_type,
            value: value.into(),
        }
    }

    fn literal(value: impl Into<String>) -> Self {
        FormattedPart::new("literal", value)
    }
}

/// The locale formatting capability the segment engine depends on.
pub trait PartsFormatter {
    fn locale(&self) -> &Locale;

    /// Whether `fractional_second_digits` is rendered at all.
    fn supports_fractional_seconds(&self) -> bool;

    fn hour_cycle(&self, options: &FormatOptions) -> HourCycle;

    fn is_rtl(&self) -> bool;

    fn format_to_parts(&self, value: &DateTimeValue, options: &FormatOptions) -> Vec<FormattedPart>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DateOrder {
    Mdy,
    Dmy,
    Ymd,
}

#[derive(Debug)]
struct Conventions {
    date_order: DateOrder,
    date_separator: &'static str,
    /// Trailing text after the last date field.
    date_terminator: &'static str,
    /// Bidi mark placed after the day and month digits.
    date_mark: &'static str,
    pad_date: bool,
    date_time_separator: &'static str,
    hour_cycle: HourCycle,
    pad_hour: bool,
    am: &'static str,
    pm: &'static str,
    day_period_first: bool,
    day_period_separator: &'static str,
    decimal_separator: &'static str,
    numbering_system: &'static str,
}

const EN_US: Conventions = Conventions {
    date_order: DateOrder::Mdy,
    date_separator: "/",
    date_terminator: "",
    date_mark: "",
    pad_date: false,
    date_time_separator: ", ",
    hour_cycle: HourCycle::H12,
    pad_hour: false,
    am: "AM",
    pm: "PM",
    day_period_first: false,
    day_period_separator: " ",
    decimal_separator: ".",
    numbering_system: "latn",
};

const EN_GB: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    pad_date: true,
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    am: "am",
    pm: "pm",
    ..EN_US
};

const EN_DMY_12H: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    pad_date: true,
    am: "am",
    pm: "pm",
    ..EN_US
};

const DE: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    date_separator: ".",
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    decimal_separator: ",",
    ..EN_US
};

const FR: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    pad_date: true,
    date_time_separator: " ",
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    decimal_separator: ",",
    ..EN_US
};

const ES: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    hour_cycle: HourCycle::H23,
    am: "a.\u{a0}m.",
    pm: "p.\u{a0}m.",
    decimal_separator: ",",
    ..EN_US
};

const IT: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    decimal_separator: ",",
    ..EN_US
};

const PT: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    pad_date: true,
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    decimal_separator: ",",
    ..EN_US
};

const NL: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    date_separator: "-",
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    am: "a.m.",
    pm: "p.m.",
    decimal_separator: ",",
    ..EN_US
};

const RU: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    date_separator: ".",
    pad_date: true,
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    decimal_separator: ",",
    ..EN_US
};

const PL: Conventions = RU;

const SV: Conventions = Conventions {
    date_order: DateOrder::Ymd,
    date_separator: "-",
    pad_date: true,
    date_time_separator: " ",
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    am: "fm",
    pm: "em",
    decimal_separator: ",",
    ..EN_US
};

const JA: Conventions = Conventions {
    date_order: DateOrder::Ymd,
    date_time_separator: " ",
    hour_cycle: HourCycle::H23,
    am: "午前",
    pm: "午後",
    day_period_first: true,
    day_period_separator: "",
    ..EN_US
};

const ZH: Conventions = Conventions {
    date_order: DateOrder::Ymd,
    date_time_separator: " ",
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    am: "上午",
    pm: "下午",
    day_period_first: true,
    day_period_separator: "",
    ..EN_US
};

const KO: Conventions = Conventions {
    date_order: DateOrder::Ymd,
    date_separator: ". ",
    date_terminator: ".",
    date_time_separator: " ",
    am: "오전",
    pm: "오후",
    day_period_first: true,
    ..EN_US
};

const AR: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    date_mark: "\u{200f}",
    date_time_separator: "، ",
    am: "ص",
    pm: "م",
    decimal_separator: "٫",
    numbering_system: "arab",
    ..EN_US
};

const AR_LATN: Conventions = Conventions {
    numbering_system: "latn",
    decimal_separator: ".",
    ..AR
};

const HE: Conventions = Conventions {
    date_order: DateOrder::Dmy,
    date_separator: ".",
    hour_cycle: HourCycle::H23,
    pad_hour: true,
    am: "לפנה״צ",
    pm: "אחה״צ",
    ..EN_US
};

fn conventions_for(locale: &Locale) -> &'static Conventions {
    match (locale.language(), locale.region()) {
        ("en", Some("GB" | "IE")) => &EN_GB,
        ("en", Some("AU" | "NZ" | "IN")) => &EN_DMY_12H,
        ("en", _) => &EN_US,
        ("de", _) => &DE,
        ("fr", _) => &FR,
        ("es", _) => &ES,
        ("it", _) => &IT,
        ("pt", _) => &PT,
        ("nl", _) => &NL,
        ("ru", _) => &RU,
        ("pl", _) => &PL,
        ("sv", _) => &SV,
        ("ja", _) => &JA,
        ("zh", _) => &ZH,
        ("ko", _) => &KO,
        ("ar", Some("EG" | "SA" | "IQ" | "SY" | "JO" | "LB" | "SD" | "YE" | "KW" | "QA" | "BH" | "OM")) => &AR,
        ("ar", _) => &AR_LATN,
        ("he", _) => &HE,
        _ => &EN_US,
    }
}

fn is_supported_numbering_system(ns: &str) -> bool {
    matches!(
        ns,
        "latn"
            | "arab"
            | "arabext"
            | "beng"
            | "deva"
            | "fullwide"
            | "gujr"
            | "guru"
            | "hanidec"
            | "khmr"
            | "knda"
            | "laoo"
            | "mlym"
            | "mong"
            | "mymr"
            | "orya"
            | "tamldec"
            | "telu"
            | "thai"
            | "tibt"
    )
}

fn zero_digit(ns: &str) -> Option<char> {
    let zero = match ns {
        "arab" => '\u{0660}',
        "arabext" => '\u{06F0}',
        "beng" => '\u{09E6}',
        "deva" => '\u{0966}',
        "fullwide" => '\u{FF10}',
        "gujr" => '\u{0AE6}',
        "guru" => '\u{0A66}',
        "khmr" => '\u{17E0}',
        "knda" => '\u{0CE6}',
        "laoo" => '\u{0ED0}',
        "mlym" => '\u{0D66}',
        "mong" => '\u{1810}',
        "mymr" => '\u{1040}',
        "orya" => '\u{0B66}',
        "tamldec" => '\u{0BE6}',
        "telu" => '\u{0C66}',
        "thai" => '\u{0E50}',
        "tibt" => '\u{0F20}',
        _ => return None,
    };
    Some(zero)
}

const HAN_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

const DIGIT_SYSTEMS: [&str; 18] = [
    "arab", "arabext", "beng", "deva", "fullwide", "gujr", "guru", "khmr", "knda", "laoo", "mlym",
    "mong", "mymr", "orya", "tamldec", "telu", "thai", "tibt",
];

/// Transliterates ASCII digits 0-9 into the given numbering system.
pub fn transliterate_digits(s: &str, ns: &str) -> String {
    if ns == "hanidec" {
        return s
            .chars()
            .map(|ch| ch.to_digit(10).map_or(ch, |d| HAN_DIGITS[d as usize]))
            .collect();
    }
    let Some(zero) = zero_digit(ns) else {
        return s.to_string();
    };
    let zero_val = zero as u32;
    s.chars()
        .map(|ch| {
            if ch.is_ascii_digit() {
                char::from_u32(zero_val + (ch as u32 - '0' as u32)).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

/// Reads one decimal digit written in any supported numbering system.
pub fn digit_value(ch: char) -> Option<u32> {
    if ch.is_ascii_digit() {
        return ch.to_digit(10);
    }
    if let Some(d) = HAN_DIGITS.iter().position(|h| *h == ch) {
        return Some(d as u32);
    }
    DIGIT_SYSTEMS.iter().find_map(|ns| {
        let zero = zero_digit(ns)? as u32;
        let c = ch as u32;
        (zero..zero + 10).contains(&c).then(|| c - zero)
    })
}

fn format_2digit(n: u32) -> String {
    format!("{:02}", n % 100)
}

fn format_numeric(n: u32, style: FieldStyle, pad: bool) -> String {
    match style {
        FieldStyle::TwoDigit => format_2digit(n),
        FieldStyle::Numeric if pad => format!("{n:02}"),
        FieldStyle::Numeric => n.to_string(),
    }
}

fn era_short(era: i32) -> &'static str {
    if era >= 1 { "AD" } else { "BC" }
}

/// Field values pulled out of a value before formatting.
struct DateComponents {
    era: i32,
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl DateComponents {
    fn from_value(value: &DateTimeValue) -> Self {
        let get = |ty: SegmentType, default: i32| value.get(ty).unwrap_or(default).max(0) as u32;
        DateComponents {
            era: value.get(SegmentType::Era).unwrap_or(1),
            year: get(SegmentType::Year, 1970),
            month: get(SegmentType::Month, 1),
            day: get(SegmentType::Day, 1),
            hour: get(SegmentType::Hour, 0),
            minute: get(SegmentType::Minute, 0),
            second: get(SegmentType::Second, 0),
            millisecond: get(SegmentType::Millisecond, 0),
        }
    }
}

/// The bundled formatter.
#[derive(Clone, Debug)]
pub struct DateTimeFormat {
    locale: Locale,
    conventions: &'static Conventions,
    numbering_system: String,
    hour_cycle_keyword: Option<HourCycle>,
    fractional_seconds: bool,
    rtl: bool,
}

impl DateTimeFormat {
    pub fn new(locale: Locale) -> Self {
        let conventions = conventions_for(&locale);
        let numbering_system = locale
            .keyword("nu")
            .filter(|ns| is_supported_numbering_system(ns))
            .unwrap_or_else(|| conventions.numbering_system.to_string());
        let hour_cycle_keyword = locale.keyword("hc").and_then(|hc| HourCycle::from_keyword(&hc));
        let rtl = locale.is_rtl();
        DateTimeFormat {
            locale,
            conventions,
            numbering_system,
            hour_cycle_keyword,
            fractional_seconds: true,
            rtl,
        }
    }

    /// Behaves like a platform formatter that predates fractional-second
    /// support: `fractional_second_digits` is ignored.
    pub fn without_fractional_seconds(mut self) -> Self {
        self.fractional_seconds = false;
        self
    }

    pub fn numbering_system(&self) -> &str {
        &self.numbering_system
    }

    fn locale_default_hour12(&self) -> HourCycle {
        match self.locale.language() {
            "ja" => HourCycle::H11,
            _ => HourCycle::H12,
        }
    }

    fn day_period(&self, hour24: u32) -> &'static str {
        if hour24 < 12 {
            self.conventions.am
        } else {
            self.conventions.pm
        }
    }

    fn format_to_parts_raw(&self, value: &DateTimeValue, opts: &FormatOptions) -> Vec<FormattedPart> {
        let c = DateComponents::from_value(value);
        let conv = self.conventions;
        let hc = self.hour_cycle(opts);
        let mut parts: Vec<FormattedPart> = Vec::new();

        let has_date = opts.has_date();
        let has_time = opts.has_time();

        if has_date {
            let mut date_parts: Vec<FormattedPart> = Vec::new();
            let order: [SegmentType; 3] = match conv.date_order {
                DateOrder::Mdy => [SegmentType::Month, SegmentType::Day, SegmentType::Year],
                DateOrder::Dmy => [SegmentType::Day, SegmentType::Month, SegmentType::Year],
                DateOrder::Ymd => [SegmentType::Year, SegmentType::Month, SegmentType::Day],
            };
            for ty in order {
                let Some(style) = opts.style(ty) else {
                    continue;
                };
                if !date_parts.is_empty() {
                    date_parts.push(FormattedPart::literal(conv.date_separator));
                }
                let part = match ty {
                    SegmentType::Year => {
                        let y = match style {
                            FieldStyle::TwoDigit => format_2digit(c.year),
                            FieldStyle::Numeric => c.year.to_string(),
                        };
                        FormattedPart::new("year", y)
                    }
                    SegmentType::Month => FormattedPart::new("month", format_numeric(c.month, style, conv.pad_date)),
                    _ => FormattedPart::new("day", format_numeric(c.day, style, conv.pad_date)),
                };
                let marked = ty != SegmentType::Year && !conv.date_mark.is_empty();
                date_parts.push(part);
                if marked {
                    date_parts.push(FormattedPart::literal(conv.date_mark));
                }
            }
            // A trailing mark belongs to the separator that follows it.
            if date_parts.last().is_some_and(|p| p.part_type == "literal") {
                date_parts.pop();
            }
            parts.extend(date_parts);
            if !conv.date_terminator.is_empty() {
                parts.push(FormattedPart::literal(conv.date_terminator));
            }
            if opts.era {
                parts.push(FormattedPart::literal(" "));
                parts.push(FormattedPart::new("era", era_short(c.era)));
            }
        }

        if has_date && has_time {
            parts.push(FormattedPart::literal(conv.date_time_separator));
        }

        if has_time {
            let uses_period = hc.is_12_hour() && opts.hour.is_some();
            if uses_period && conv.day_period_first {
                parts.push(FormattedPart::new("dayPeriod", self.day_period(c.hour)));
                if !conv.day_period_separator.is_empty() {
                    parts.push(FormattedPart::literal(conv.day_period_separator));
                }
            }

            if let Some(style) = opts.hour {
                let shown = hc.display_hour(c.hour);
                // A 24-hour clock forced onto a 12-hour locale is padded.
                let pad = !hc.is_12_hour() && (conv.pad_hour || conv.hour_cycle.is_12_hour());
                parts.push(FormattedPart::new("hour", format_numeric(shown, style, pad)));
            }
            if opts.hour.is_some() && opts.minute.is_some() {
                parts.push(FormattedPart::literal(":"));
            }
            if let Some(style) = opts.minute {
                let pad = opts.hour.is_some() || opts.second.is_some();
                parts.push(FormattedPart::new("minute", format_numeric(c.minute, style, pad)));
            }
            if (opts.hour.is_some() || opts.minute.is_some()) && opts.second.is_some() {
                parts.push(FormattedPart::literal(":"));
            }
            if let Some(style) = opts.second {
                let pad = opts.hour.is_some() || opts.minute.is_some();
                parts.push(FormattedPart::new("second", format_numeric(c.second, style, pad)));
            }

            if let Some(digits) = opts.fractional_second_digits.filter(|_| self.fractional_seconds) {
                let frac = match digits {
                    1 => format!("{}", c.millisecond / 100),
                    2 => format!("{:02}", c.millisecond / 10),
                    _ => format!("{:03}", c.millisecond),
                };
                parts.push(FormattedPart::literal(conv.decimal_separator));
                parts.push(FormattedPart::new("fractionalSecond", frac));
            }

            if uses_period && !conv.day_period_first {
                parts.push(FormattedPart::literal(conv.day_period_separator));
                parts.push(FormattedPart::new("dayPeriod", self.day_period(c.hour)));
            }
        }

        if opts.time_zone_name {
            if let Some(abbr) = value.zone_abbreviation() {
                parts.push(FormattedPart::literal(" "));
                parts.push(FormattedPart::new("timeZoneName", abbr));
            }
        }

        merge_literals(parts)
    }
}

/// Joins adjacent literal parts. Platform formatters never emit two in a
/// row.
fn merge_literals(parts: Vec<FormattedPart>) -> Vec<FormattedPart> {
    let mut merged: Vec<FormattedPart> = Vec::with_capacity(parts.len());
    for part in parts {
        match merged.last_mut() {
            Some(last) if last.part_type == "literal" && part.part_type == "literal" => {
                last.value.push_str(&part.value);
            }
            _ => merged.push(part),
        }
    }
    merged
}

impl PartsFormatter for DateTimeFormat {
    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn supports_fractional_seconds(&self) -> bool {
        self.fractional_seconds
    }

    fn hour_cycle(&self, options: &FormatOptions) -> HourCycle {
        match options.hour12 {
            Some(true) => self.locale_default_hour12(),
            Some(false) => HourCycle::H23,
            None => self.hour_cycle_keyword.unwrap_or(self.conventions.hour_cycle),
        }
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn format_to_parts(&self, value: &DateTimeValue, options: &FormatOptions) -> Vec<FormattedPart> {
        let raw = self.format_to_parts_raw(value, options);
        if self.numbering_system == "latn" {
            return raw;
        }
        raw.into_iter()
            .map(|part| match part.part_type {
                "literal" | "timeZoneName" | "era" | "dayPeriod" => part,
                _ => FormattedPart {
                    value: transliterate_digits(&part.value, &self.numbering_system),
                    ..part
                },
            })
            .collect()
    }
}
