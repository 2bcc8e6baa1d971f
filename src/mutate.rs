//! Edits a value one segment at a time. Every operation returns a new value.

use tracing::trace;

use crate::error::{Error, Result};
use crate::intl::digit_value;
use crate::segments::field_bounds;
use crate::types::{HourCycle, SegmentType};
use crate::value::{CycleOptions, DateTimeValue, FieldValues};

fn step(value: &DateTimeValue, ty: SegmentType, amount: i32, round: bool, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    if !ty.is_editable() {
        return Err(Error::NotEditable(ty));
    }
    trace!(segment = %ty, amount, round, "cycling segment");
    Ok(value.cycle(ty, amount, CycleOptions { round, hour_cycle }))
}

pub fn increment(value: &DateTimeValue, ty: SegmentType, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    step(value, ty, 1, false, hour_cycle)
}

pub fn decrement(value: &DateTimeValue, ty: SegmentType, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    step(value, ty, -1, false, hour_cycle)
}

/// Moves by the field's page step and lands on a multiple of it.
pub fn increment_page(value: &DateTimeValue, ty: SegmentType, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    step(value, ty, ty.page_step(), true, hour_cycle)
}

pub fn decrement_page(value: &DateTimeValue, ty: SegmentType, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    step(value, ty, -ty.page_step(), true, hour_cycle)
}

/// Range of numbers a user may type into a segment. Hours are in display
/// terms for the hour cycle (1-12 under `h12`); every other field matches
/// [`field_bounds`].
pub fn entry_bounds(value: &DateTimeValue, ty: SegmentType, hour_cycle: HourCycle) -> Option<(i32, i32)> {
    match ty {
        SegmentType::Hour => Some(hour_cycle.display_range()),
        _ => field_bounds(value, ty, hour_cycle),
    }
}

/// Reads segment text written with ASCII or locale digits.
pub fn parse_number(ty: SegmentType, text: &str) -> Result<i64> {
    let invalid = || Error::InvalidSegmentText {
        segment: ty,
        text: text.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    trimmed.chars().try_fold(0i64, |acc, ch| {
        let digit = digit_value(ch).ok_or_else(invalid)?;
        Ok(acc.saturating_mul(10).saturating_add(i64::from(digit)))
    })
}

fn check_range(ty: SegmentType, number: i64, bounds: Option<(i32, i32)>) -> Result<i32> {
    let (min, max) = bounds.ok_or(Error::NotEditable(ty))?;
    if number < i64::from(min) || number > i64::from(max) {
        return Err(Error::SegmentValueOutOfRange {
            segment: ty,
            value: number,
            min,
            max,
        });
    }
    Ok(number as i32)
}

/// Sets one field to `number`, which must lie within the bounds the
/// segment reports. Hours are in 24-hour terms.
pub fn set_number(value: &DateTimeValue, ty: SegmentType, number: i64, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    let number = check_range(ty, number, field_bounds(value, ty, hour_cycle))?;
    value.set(&FieldValues::default().with(ty, number))
}

/// Sets one field from numeric text in the same terms as the segment's
/// `value`, `min_value` and `max_value`.
pub fn set_direct(value: &DateTimeValue, ty: SegmentType, text: &str, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    if !ty.is_editable() {
        return Err(Error::NotEditable(ty));
    }
    let number = parse_number(ty, text)?;
    set_number(value, ty, number, hour_cycle)
}

/// Sets one field from a number as the user sees it. A 12-hour hour is
/// combined with the current day period.
pub fn set_typed_number(
    value: &DateTimeValue,
    ty: SegmentType,
    number: i64,
    hour_cycle: HourCycle,
) -> Result<DateTimeValue> {
    let mut number = check_range(ty, number, entry_bounds(value, ty, hour_cycle))?;
    if ty == SegmentType::Hour {
        let pm = value.get(SegmentType::Hour).is_some_and(|h| h >= 12);
        number = hour_cycle.to_hour24(number as u32, pm) as i32;
    }
    value.set(&FieldValues::default().with(ty, number))
}

/// Sets one field from text typed in display terms, like the segment's
/// `text`.
pub fn set_typed(value: &DateTimeValue, ty: SegmentType, text: &str, hour_cycle: HourCycle) -> Result<DateTimeValue> {
    if !ty.is_editable() {
        return Err(Error::NotEditable(ty));
    }
    let number = parse_number(ty, text)?;
    set_typed_number(value, ty, number, hour_cycle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(s: &str) -> DateTimeValue {
        s.parse().unwrap()
    }

    #[test]
    fn millisecond_steps() {
        let v = value("12:30:45");
        let next = increment(&v, SegmentType::Millisecond, HourCycle::H12).unwrap();
        assert_eq!(next.get(SegmentType::Millisecond), Some(1));
        let paged = increment_page(&next, SegmentType::Millisecond, HourCycle::H12).unwrap();
        assert_eq!(paged.get(SegmentType::Millisecond), Some(100));
    }

    #[test]
    fn page_from_950_lands_on_a_multiple_without_carry() {
        let v = value("12:30:45.950");
        let paged = increment_page(&v, SegmentType::Millisecond, HourCycle::H23).unwrap();
        let ms = paged.get(SegmentType::Millisecond).unwrap();
        assert_eq!(ms % 100, 0);
        assert_eq!(ms, 0);
        assert_eq!(paged.get(SegmentType::Second), Some(45));
        let back = decrement_page(&v, SegmentType::Millisecond, HourCycle::H23).unwrap();
        assert_eq!(back.get(SegmentType::Millisecond), Some(900));
    }

    #[test]
    fn page_steps_for_other_fields() {
        let v = value("2026-10-17T09:07:00");
        let hc = HourCycle::H23;
        assert_eq!(increment_page(&v, SegmentType::Year, hc).unwrap().get(SegmentType::Year), Some(2030));
        assert_eq!(increment_page(&v, SegmentType::Month, hc).unwrap().get(SegmentType::Month), Some(12));
        assert_eq!(increment_page(&v, SegmentType::Day, hc).unwrap().get(SegmentType::Day), Some(21));
        assert_eq!(increment_page(&v, SegmentType::Hour, hc).unwrap().get(SegmentType::Hour), Some(10));
        assert_eq!(increment_page(&v, SegmentType::Minute, hc).unwrap().get(SegmentType::Minute), Some(15));
        assert_eq!(decrement_page(&v, SegmentType::Minute, hc).unwrap().get(SegmentType::Minute), Some(0));
    }

    #[test]
    fn literal_and_zone_are_not_editable() {
        let v = value("2026-10-17T09:07[Europe/Paris]");
        assert_eq!(
            increment(&v, SegmentType::Literal, HourCycle::H23),
            Err(Error::NotEditable(SegmentType::Literal))
        );
        assert_eq!(
            set_direct(&v, SegmentType::TimeZoneName, "1", HourCycle::H23),
            Err(Error::NotEditable(SegmentType::TimeZoneName))
        );
    }

    #[test]
    fn set_direct_validates_range() {
        let v = value("2026-04-10T09:07");
        assert!(matches!(
            set_direct(&v, SegmentType::Day, "31", HourCycle::H23),
            Err(Error::SegmentValueOutOfRange { segment: SegmentType::Day, value: 31, min: 1, max: 30 })
        ));
        assert!(matches!(
            set_direct(&v, SegmentType::Millisecond, "1000", HourCycle::H23),
            Err(Error::SegmentValueOutOfRange { max: 999, .. })
        ));
        assert!(matches!(
            set_direct(&v, SegmentType::Minute, "4x", HourCycle::H23),
            Err(Error::InvalidSegmentText { .. })
        ));
        assert!(set_direct(&v, SegmentType::Minute, "", HourCycle::H23).is_err());
    }

    #[test]
    fn twelve_hour_entry_keeps_day_period() {
        let pm = value("15:00");
        let set = set_typed(&pm, SegmentType::Hour, "12", HourCycle::H12).unwrap();
        assert_eq!(set.get(SegmentType::Hour), Some(12));
        let set = set_typed(&pm, SegmentType::Hour, "7", HourCycle::H12).unwrap();
        assert_eq!(set.get(SegmentType::Hour), Some(19));
        let am = value("03:00");
        let set = set_typed(&am, SegmentType::Hour, "12", HourCycle::H12).unwrap();
        assert_eq!(set.get(SegmentType::Hour), Some(0));
        assert!(set_typed(&am, SegmentType::Hour, "0", HourCycle::H12).is_err());
        let set = set_typed(&am, SegmentType::Hour, "0", HourCycle::H11).unwrap();
        assert_eq!(set.get(SegmentType::Hour), Some(0));
        let set = set_typed_number(&am, SegmentType::Hour, 9, HourCycle::H12).unwrap();
        assert_eq!(set.get(SegmentType::Hour), Some(9));
    }

    #[test]
    fn direct_hour_uses_the_current_half_of_the_day() {
        let pm = value("15:00");
        let set = set_direct(&pm, SegmentType::Hour, "19", HourCycle::H12).unwrap();
        assert_eq!(set.get(SegmentType::Hour), Some(19));
        assert!(matches!(
            set_direct(&pm, SegmentType::Hour, "3", HourCycle::H12),
            Err(Error::SegmentValueOutOfRange { value: 3, min: 12, max: 23, .. })
        ));
        assert!(set_direct(&value("03:00"), SegmentType::Hour, "12", HourCycle::H12).is_err());
        assert!(set_direct(&pm, SegmentType::Hour, "3", HourCycle::H23).is_ok());
    }

    #[test]
    fn segment_bounds_agree_with_direct_entry() {
        use crate::intl::{DateTimeFormat, Locale, PartsFormatter};
        use crate::options::FormatOptions;
        use crate::types::Granularity;

        let dtf = DateTimeFormat::new(Locale::parse("en-US").unwrap());
        let opts = FormatOptions::resolve(Granularity::Millisecond, None);
        let hc = dtf.hour_cycle(&opts);
        assert_eq!(hc, HourCycle::H12);
        let pm = value("2026-10-17T15:00:30.500");
        let segments = crate::segments::parse(&pm, &opts, &dtf);

        let hour = segments.iter().find(|s| s.segment_type == SegmentType::Hour).unwrap();
        assert_eq!((hour.value, hour.min_value, hour.max_value), (Some(15), Some(12), Some(23)));

        for segment in segments.iter().filter(|s| s.is_editable) {
            let ty = segment.segment_type;
            let (min, max) = (segment.min_value.unwrap(), segment.max_value.unwrap());
            for n in [segment.value.unwrap(), min, max] {
                let set = set_direct(&pm, ty, &n.to_string(), hc).unwrap();
                assert_eq!(set.get(ty), Some(n), "{ty} {n}");
            }
            assert!(
                matches!(
                    set_direct(&pm, ty, &(max + 1).to_string(), hc),
                    Err(Error::SegmentValueOutOfRange { .. })
                ),
                "{ty}"
            );
            if min > 0 {
                assert!(
                    matches!(
                        set_direct(&pm, ty, &(min - 1).to_string(), hc),
                        Err(Error::SegmentValueOutOfRange { .. })
                    ),
                    "{ty}"
                );
            }
        }
    }

    #[test]
    fn accepts_locale_digits() {
        let v = value("2026-04-10T09:07");
        let set = set_direct(&v, SegmentType::Minute, "٤٥", HourCycle::H23).unwrap();
        assert_eq!(set.get(SegmentType::Minute), Some(45));
    }

    #[test]
    fn segments_accept_their_own_values_and_text() {
        use crate::intl::{DateTimeFormat, Locale, PartsFormatter, transliterate_digits};
        use crate::options::FormatOptions;
        use crate::types::Granularity;

        let values = [
            "2026-10-17T00:30:45.125",
            "2024-02-29T13:05:09.999",
            "2026-10-17T15:30:05.250[America/New_York]",
        ];
        for (locale, numbering) in [("en-US", "latn"), ("ar-EG", "arab")] {
            let dtf = DateTimeFormat::new(Locale::parse(locale).unwrap());
            for g in Granularity::ALL {
                let opts = FormatOptions::resolve(g, None);
                let hc = dtf.hour_cycle(&opts);
                for v in values {
                    let original = value(v);
                    let mut by_value = original.clone();
                    let mut by_text = original.clone();
                    for segment in crate::segments::parse(&original, &opts, &dtf) {
                        if !segment.is_editable {
                            continue;
                        }
                        let ty = segment.segment_type;
                        let n = segment.value.unwrap();
                        let digits = transliterate_digits(&n.to_string(), numbering);
                        by_value = set_direct(&by_value, ty, &digits, hc).unwrap();
                        by_text = match ty {
                            SegmentType::DayPeriod | SegmentType::Era => {
                                set_number(&by_text, ty, i64::from(n), hc).unwrap()
                            }
                            _ => set_typed(&by_text, ty, &segment.text, hc).unwrap(),
                        };
                    }
                    for ty in opts.fields() {
                        assert_eq!(by_value.get(ty), original.get(ty), "{locale} {g} {v} {ty}");
                        assert_eq!(by_text.get(ty), original.get(ty), "{locale} {g} {v} {ty}");
                    }
                    assert_eq!(by_value.time_zone(), original.time_zone(), "{locale} {v}");
                    assert_eq!(by_text, by_value, "{locale} {g} {v}");
                }
            }
        }
    }
}
