//! The three value shapes a date field edits, behind one get/set/cycle
//! surface.
//!
//! Years are era years (1-based inside their era); the era itself reads as
//! 0 for BC and 1 for AD. Every operation returns a new value.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Timelike,
};
use chrono_tz::Tz;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::{HourCycle, SegmentType};

/// Largest year shown inside either era.
pub const MAX_ERA_YEAR: i32 = 9999;

const NANOS_PER_MILLI: u32 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueShape {
    Time,
    DateTime,
    Zoned,
}

impl ValueShape {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueShape::Time => "time",
            ValueShape::DateTime => "date-time",
            ValueShape::Zoned => "zoned date-time",
        }
    }
}

/// A date/time value being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateTimeValue {
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Zoned(DateTime<Tz>),
}

/// A partial set of field values, as accepted by [`DateTimeValue::set`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub era: Option<i32>,
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub day_period: Option<i32>,
    pub hour: Option<i32>,
    pub minute: Option<i32>,
    pub second: Option<i32>,
    pub millisecond: Option<i32>,
}

impl FieldValues {
    pub fn with(mut self, ty: SegmentType, value: i32) -> Self {
        let slot = match ty {
            SegmentType::Era => &mut self.era,
            SegmentType::Year => &mut self.year,
            SegmentType::Month => &mut self.month,
            SegmentType::Day => &mut self.day,
            SegmentType::DayPeriod => &mut self.day_period,
            SegmentType::Hour => &mut self.hour,
            SegmentType::Minute => &mut self.minute,
            SegmentType::Second => &mut self.second,
            SegmentType::Millisecond => &mut self.millisecond,
            SegmentType::TimeZoneName | SegmentType::Literal => return self,
        };
        *slot = Some(value);
        self
    }
}

/// Options for [`DateTimeValue::cycle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleOptions {
    /// Snap to a multiple of the step instead of adding it.
    pub round: bool,
    /// Under a 12-hour cycle the hour stays inside its half of the day.
    pub hour_cycle: HourCycle,
}

impl Default for CycleOptions {
    fn default() -> Self {
        CycleOptions {
            round: false,
            hour_cycle: HourCycle::H23,
        }
    }
}

impl DateTimeValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            DateTimeValue::Time(_) => ValueShape::Time,
            DateTimeValue::DateTime(_) => ValueShape::DateTime,
            DateTimeValue::Zoned(_) => ValueShape::Zoned,
        }
    }

    pub fn has_date(&self) -> bool {
        match self.shape() {
            ValueShape::Time => false,
            ValueShape::DateTime | ValueShape::Zoned => true,
        }
    }

    pub fn time_zone(&self) -> Option<Tz> {
        match self {
            DateTimeValue::Zoned(dt) => Some(dt.timezone()),
            DateTimeValue::Time(_) | DateTimeValue::DateTime(_) => None,
        }
    }

    /// Short zone name for the instant, such as `PDT` or `CET`.
    pub fn zone_abbreviation(&self) -> Option<String> {
        match self {
            DateTimeValue::Zoned(dt) => Some(dt.format("%Z").to_string()),
            DateTimeValue::Time(_) | DateTimeValue::DateTime(_) => None,
        }
    }

    /// Places a value in `tz`. Plain date-times are read as wall-clock time
    /// there; zoned values keep their instant. Time-only values are
    /// returned unchanged.
    pub fn in_zone(&self, tz: Tz) -> DateTimeValue {
        match self {
            DateTimeValue::Time(_) => self.clone(),
            DateTimeValue::DateTime(dt) => DateTimeValue::Zoned(resolve_local(tz, *dt, None)),
            DateTimeValue::Zoned(dt) => DateTimeValue::Zoned(dt.with_timezone(&tz)),
        }
    }

    pub fn naive_date(&self) -> Option<NaiveDate> {
        match self {
            DateTimeValue::Time(_) => None,
            DateTimeValue::DateTime(dt) => Some(dt.date()),
            DateTimeValue::Zoned(dt) => Some(dt.naive_local().date()),
        }
    }

    pub fn naive_time(&self) -> NaiveTime {
        match self {
            DateTimeValue::Time(t) => *t,
            DateTimeValue::DateTime(dt) => dt.time(),
            DateTimeValue::Zoned(dt) => dt.naive_local().time(),
        }
    }

    /// Reads one field. Date fields are `None` on a time-only value;
    /// the millisecond is always present, 0 when there is no sub-second part.
    pub fn get(&self, ty: SegmentType) -> Option<i32> {
        let time = self.naive_time();
        match ty {
            SegmentType::Era => self.naive_date().map(|d| i32::from(d.year() > 0)),
            SegmentType::Year => self.naive_date().map(|d| era_year(d.year())),
            SegmentType::Month => self.naive_date().map(|d| d.month() as i32),
            SegmentType::Day => self.naive_date().map(|d| d.day() as i32),
            SegmentType::DayPeriod => Some(if time.hour() >= 12 { 12 } else { 0 }),
            SegmentType::Hour => Some(time.hour() as i32),
            SegmentType::Minute => Some(time.minute() as i32),
            SegmentType::Second => Some(time.second() as i32),
            SegmentType::Millisecond => Some(millisecond(time) as i32),
            SegmentType::TimeZoneName | SegmentType::Literal => None,
        }
    }

    /// Replaces the given fields. A day past the end of the resulting month
    /// is constrained to its last day; other out-of-range fields are errors.
    pub fn set(&self, fields: &FieldValues) -> Result<DateTimeValue> {
        let date = match self.naive_date() {
            Some(date) => {
                let era = check(SegmentType::Era, fields.era, 0, 1)?
                    .unwrap_or(i32::from(date.year() > 0));
                let year = check(SegmentType::Year, fields.year, 1, MAX_ERA_YEAR)?
                    .unwrap_or(era_year(date.year()));
                let month = check(SegmentType::Month, fields.month, 1, 12)?
                    .map_or(date.month(), |m| m as u32);
                let day = check(SegmentType::Day, fields.day, 1, 31)?.map_or(date.day(), |d| d as u32);
                Some(constrained_date(proleptic_year(era, year), month, day)?)
            }
            None => None,
        };

        let time = self.naive_time();
        let mut hour = check(SegmentType::Hour, fields.hour, 0, 23)?.map_or(time.hour(), |h| h as u32);
        if let Some(period) = check(SegmentType::DayPeriod, fields.day_period, 0, 12)? {
            hour = hour % 12 + if period >= 12 { 12 } else { 0 };
        }
        let minute = check(SegmentType::Minute, fields.minute, 0, 59)?.map_or(time.minute(), |m| m as u32);
        let second = check(SegmentType::Second, fields.second, 0, 59)?.map_or(time.second(), |s| s as u32);
        let nanos = match check(SegmentType::Millisecond, fields.millisecond, 0, 999)? {
            Some(ms) => ms as u32 * NANOS_PER_MILLI + time.nanosecond() % NANOS_PER_MILLI,
            None => time.nanosecond(),
        };
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
            .ok_or_else(|| Error::InvalidValue(format!("{hour}:{minute}:{second}.{nanos}")))?;
        Ok(self.with_parts(date, time))
    }

    /// Moves one field by `amount`, wrapping inside the field's range without
    /// carrying into coarser fields.
    pub fn cycle(&self, ty: SegmentType, amount: i32, options: CycleOptions) -> DateTimeValue {
        let time = self.naive_time();
        match ty {
            SegmentType::Era | SegmentType::Year | SegmentType::Month | SegmentType::Day => {
                let Some(date) = self.naive_date() else {
                    return self.clone();
                };
                let (mut year, mut month, mut day) = (date.year(), date.month() as i64, date.day() as i64);
                match ty {
                    SegmentType::Era => {
                        if amount % 2 != 0 {
                            year = 1 - year;
                        }
                    }
                    SegmentType::Year => {
                        let era = i32::from(year > 0);
                        let cycled = cycle_value(era_year(year) as i64, amount, 1, MAX_ERA_YEAR as i64, options.round);
                        year = proleptic_year(era, cycled as i32);
                    }
                    SegmentType::Month => month = cycle_value(month, amount, 1, 12, options.round),
                    _ => {
                        let max = days_in_month(year, month as u32) as i64;
                        day = cycle_value(day, amount, 1, max, options.round);
                    }
                }
                let max_day = days_in_month(year, month as u32) as i64;
                match NaiveDate::from_ymd_opt(year, month as u32, day.min(max_day) as u32) {
                    Some(date) => self.with_parts(Some(date), time),
                    None => self.clone(),
                }
            }
            SegmentType::DayPeriod => {
                if amount % 2 == 0 {
                    return self.clone();
                }
                let hour = (time.hour() + 12) % 24;
                self.with_time_fields(time, Some(hour), None, None, None)
            }
            SegmentType::Hour => {
                let hour = time.hour() as i64;
                let (min, max) = if options.hour_cycle.is_12_hour() {
                    if hour >= 12 { (12, 23) } else { (0, 11) }
                } else {
                    (0, 23)
                };
                let hour = cycle_value(hour, amount, min, max, options.round);
                self.with_time_fields(time, Some(hour as u32), None, None, None)
            }
            SegmentType::Minute => {
                let minute = cycle_value(time.minute() as i64, amount, 0, 59, options.round);
                self.with_time_fields(time, None, Some(minute as u32), None, None)
            }
            SegmentType::Second => {
                let second = cycle_value(time.second() as i64, amount, 0, 59, options.round);
                self.with_time_fields(time, None, None, Some(second as u32), None)
            }
            SegmentType::Millisecond => {
                let ms = cycle_value(millisecond(time) as i64, amount, 0, 999, options.round);
                self.with_time_fields(time, None, None, None, Some(ms as u32))
            }
            SegmentType::TimeZoneName | SegmentType::Literal => self.clone(),
        }
    }

    fn with_time_fields(
        &self,
        time: NaiveTime,
        hour: Option<u32>,
        minute: Option<u32>,
        second: Option<u32>,
        millisecond: Option<u32>,
    ) -> DateTimeValue {
        let nanos = match millisecond {
            Some(ms) => ms * NANOS_PER_MILLI + time.nanosecond() % NANOS_PER_MILLI,
            None => time.nanosecond(),
        };
        match NaiveTime::from_hms_nano_opt(
            hour.unwrap_or(time.hour()),
            minute.unwrap_or(time.minute()),
            second.unwrap_or(time.second()),
            nanos,
        ) {
            Some(t) => self.with_parts(self.naive_date(), t),
            None => self.clone(),
        }
    }

    fn with_parts(&self, date: Option<NaiveDate>, time: NaiveTime) -> DateTimeValue {
        match (self, date) {
            (DateTimeValue::Time(_), _) | (_, None) => DateTimeValue::Time(time),
            (DateTimeValue::DateTime(_), Some(date)) => DateTimeValue::DateTime(date.and_time(time)),
            (DateTimeValue::Zoned(dt), Some(date)) => {
                let offset = dt.offset().fix();
                DateTimeValue::Zoned(resolve_local(dt.timezone(), date.and_time(time), Some(offset)))
            }
        }
    }
}

/// Steps `value` by `amount` inside `min..=max`.
///
/// Without rounding the overshoot wraps around to the other end. With
/// rounding the value first moves one unit towards `amount`'s sign and then
/// snaps to the next multiple of `amount` in that direction; leaving the
/// range lands on the opposite bound.
pub fn cycle_value(value: i64, amount: i32, min: i64, max: i64, round: bool) -> i64 {
    let amount = amount as i64;
    if round {
        let mut value = value + amount.signum();
        if value < min {
            value = max;
        }
        let step = amount.abs().max(1);
        value = if amount > 0 {
            div_ceil(value, step) * step
        } else {
            value.div_euclid(step) * step
        };
        if value > max {
            value = min;
        }
        value.max(min)
    } else {
        let span = max - min + 1;
        min + (value - min + amount).rem_euclid(span)
    }
}

fn div_ceil(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

fn check(ty: SegmentType, value: Option<i32>, min: i32, max: i32) -> Result<Option<i32>> {
    match value {
        Some(v) if v < min || v > max => Err(Error::SegmentValueOutOfRange {
            segment: ty,
            value: v as i64,
            min,
            max,
        }),
        other => Ok(other),
    }
}

fn constrained_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::InvalidValue(format!("{year:04}-{month:02}-{day:02}")))
}

fn millisecond(time: NaiveTime) -> u32 {
    // Leap seconds carry nanoseconds past one second.
    (time.nanosecond() / NANOS_PER_MILLI).min(999)
}

pub(crate) fn era_year(year: i32) -> i32 {
    if year > 0 { year } else { 1 - year }
}

pub(crate) fn proleptic_year(era: i32, era_year: i32) -> i32 {
    if era >= 1 { era_year } else { 1 - era_year }
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Maps a wall-clock time in `tz` to an instant.
///
/// Repeated times keep `prefer` when it is one of the candidates, otherwise
/// the earlier instant. Skipped times move forward across the gap.
pub(crate) fn resolve_local(tz: Tz, local: NaiveDateTime, prefer: Option<FixedOffset>) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, later) => {
            let keep_later = prefer.is_some_and(|offset| later.offset().fix() == offset);
            debug!(%local, zone = tz.name(), keep_later, "ambiguous wall-clock time");
            if keep_later { later } else { earlier }
        }
        LocalResult::None => {
            trace!(%local, zone = tz.name(), "wall-clock time skipped by transition");
            local
                .checked_add_signed(TimeDelta::hours(1))
                .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
                .unwrap_or_else(|| tz.from_utc_datetime(&local))
        }
    }
}

static VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)^
        (?: (?P<year>[+-]?\d{4,6}) - (?P<month>\d{2}) - (?P<day>\d{2}) (?P<sep>[T\x20])? )?
        (?: (?P<hour>\d{1,2}) : (?P<minute>\d{2})
            (?: : (?P<second>\d{2}) (?: \. (?P<frac>\d{1,9}) )? )? )?
        (?: \[ (?P<zone>[A-Za-z0-9_+\-/]+) \] )?
        $",
    )
    .expect("value pattern is valid")
});

impl FromStr for DateTimeValue {
    type Err = Error;

    /// Parses `HH:MM[:SS[.fff]]`, `YYYY-MM-DD[THH:MM[:SS[.fff]]]`, and
    /// either date form followed by `[Area/Location]`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidValue(s.to_string());
        let caps = VALUE_RE.captures(s.trim()).ok_or_else(invalid)?;
        // A date and a time are joined by exactly one separator.
        if caps.name("year").is_some() && caps.name("sep").is_some() != caps.name("hour").is_some() {
            return Err(invalid());
        }
        let num = |name: &str| -> Result<Option<i64>> {
            caps.name(name)
                .map(|m| m.as_str().parse::<i64>().map_err(|_| invalid()))
                .transpose()
        };

        let time = match num("hour")? {
            Some(hour) => {
                let minute = num("minute")?.unwrap_or(0);
                let second = num("second")?.unwrap_or(0);
                let nanos = match caps.name("frac") {
                    Some(frac) => format!("{:0<9}", frac.as_str()).parse::<u32>().map_err(|_| invalid())?,
                    None => 0,
                };
                Some(
                    NaiveTime::from_hms_nano_opt(hour as u32, minute as u32, second as u32, nanos)
                        .ok_or_else(invalid)?,
                )
            }
            None => None,
        };
        let date = match num("year")? {
            Some(year) => {
                let month = num("month")?.unwrap_or(1);
                let day = num("day")?.unwrap_or(1);
                let year = i32::try_from(year).map_err(|_| invalid())?;
                Some(NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(invalid)?)
            }
            None => None,
        };
        let zone = caps.name("zone").map(|z| z.as_str());

        match (date, time, zone) {
            (None, None, _) => Err(invalid()),
            (None, Some(_), Some(_)) => Err(invalid()),
            (None, Some(time), None) => Ok(DateTimeValue::Time(time)),
            (Some(date), time, zone) => {
                let local = date.and_time(time.unwrap_or(NaiveTime::MIN));
                match zone {
                    None => Ok(DateTimeValue::DateTime(local)),
                    Some(name) => {
                        let tz: Tz = name.parse().map_err(|_| Error::InvalidTimeZone(name.to_string()))?;
                        Ok(DateTimeValue::Zoned(resolve_local(tz, local, None)))
                    }
                }
            }
        }
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            DateTimeValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            DateTimeValue::Zoned(dt) => write!(
                f,
                "{}[{}]",
                dt.format("%Y-%m-%dT%H:%M:%S%.f%:z"),
                dt.timezone().name()
            ),
        }
    }
}
