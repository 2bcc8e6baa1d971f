//! Turns formatter output into the ordered list of typed segments a field
//! editor renders.

use chrono::Datelike;

use crate::intl::{FormattedPart, PartsFormatter};
use crate::options::FormatOptions;
use crate::placeholder::placeholder;
use crate::types::{HourCycle, SegmentType};
use crate::value::{DateTimeValue, MAX_ERA_YEAR, days_in_month};

const LEFT_TO_RIGHT_ISOLATE: &str = "\u{2066}";
const POP_DIRECTIONAL_ISOLATE: &str = "\u{2069}";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub segment_type: SegmentType,
    /// What the editor shows: the formatted field, or the placeholder text
    /// while the segment is unfilled.
    pub text: String,
    pub value: Option<i32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub is_placeholder: bool,
    pub placeholder: String,
    pub is_editable: bool,
}

impl Segment {
    fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        Segment {
            segment_type: SegmentType::Literal,
            placeholder: text.clone(),
            text,
            value: None,
            min_value: None,
            max_value: None,
            is_placeholder: false,
            is_editable: false,
        }
    }
}

/// Maps a formatter part type onto the field it edits. This is the only
/// place platform part names are translated.
fn segment_type_for_part(part_type: &str) -> SegmentType {
    match part_type {
        "fractionalSecond" => SegmentType::Millisecond,
        "dayperiod" => SegmentType::DayPeriod,
        "relatedYear" => SegmentType::Year,
        other => SegmentType::from_name(other).unwrap_or(SegmentType::Literal),
    }
}

/// The range of values a field holds, in the value adapter's terms: hours
/// are 0-23, or one half of the day under a 12-hour cycle.
pub fn field_bounds(value: &DateTimeValue, ty: SegmentType, hour_cycle: HourCycle) -> Option<(i32, i32)> {
    let bounds = match ty {
        SegmentType::Era => (0, 1),
        SegmentType::Year => (1, MAX_ERA_YEAR),
        SegmentType::Month => (1, 12),
        SegmentType::Day => {
            let max = value
                .naive_date()
                .map_or(31, |d| days_in_month(d.year(), d.month()));
            (1, max as i32)
        }
        SegmentType::DayPeriod => (0, 12),
        SegmentType::Hour => {
            if hour_cycle.is_12_hour() {
                match value.get(SegmentType::Hour) {
                    Some(h) if h >= 12 => (12, 23),
                    _ => (0, 11),
                }
            } else {
                (0, 23)
            }
        }
        SegmentType::Minute | SegmentType::Second => (0, 59),
        SegmentType::Millisecond => (0, 999),
        SegmentType::TimeZoneName | SegmentType::Literal => return None,
    };
    Some(bounds)
}

/// Parses `value` into segments with every editable segment showing its
/// real content.
pub fn parse<F>(value: &DateTimeValue, options: &FormatOptions, formatter: &F) -> Vec<Segment>
where
    F: PartsFormatter + ?Sized,
{
    parse_with_placeholders(value, options, formatter, |_| true)
}

/// Parses `value` into segments; editable segments for which `is_filled`
/// returns false show placeholder text instead.
pub fn parse_with_placeholders<F>(
    value: &DateTimeValue,
    options: &FormatOptions,
    formatter: &F,
    is_filled: impl Fn(SegmentType) -> bool,
) -> Vec<Segment>
where
    F: PartsFormatter + ?Sized,
{
    let hour_cycle = formatter.hour_cycle(options);
    let locale = formatter.locale();
    let parts: Vec<FormattedPart> = formatter.format_to_parts(value, options);

    let mut segments: Vec<Segment> = parts
        .into_iter()
        .map(|part| {
            let ty = segment_type_for_part(part.part_type);
            if !ty.is_editable() {
                return Segment {
                    segment_type: ty,
                    ..Segment::literal(part.value)
                };
            }
            let (min_value, max_value) = field_bounds(value, ty, hour_cycle).unzip();
            let placeholder_text = placeholder(ty, &part.value, locale);
            let is_placeholder = !is_filled(ty);
            Segment {
                segment_type: ty,
                text: if is_placeholder {
                    placeholder_text.clone()
                } else {
                    part.value
                },
                value: value.get(ty),
                min_value,
                max_value,
                is_placeholder,
                placeholder: placeholder_text,
                is_editable: true,
            }
        })
        .collect();

    if formatter.is_rtl() {
        isolate_time_run(&mut segments);
    }
    segments
}

/// Wraps the run from the first to the last time field in a left-to-right
/// isolate so the digits keep their order inside right-to-left text.
fn isolate_time_run(segments: &mut Vec<Segment>) {
    let is_time = |s: &Segment| s.segment_type.is_time_run();
    let (Some(first), Some(last)) = (
        segments.iter().position(is_time),
        segments.iter().rposition(is_time),
    ) else {
        return;
    };
    segments.insert(last + 1, Segment::literal(POP_DIRECTIONAL_ISOLATE));
    segments.insert(first, Segment::literal(LEFT_TO_RIGHT_ISOLATE));
}
