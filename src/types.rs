use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The kind of one displayable unit in a date/time field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentType {
    Era,
    Year,
    Month,
    Day,
    DayPeriod,
    Hour,
    Minute,
    Second,
    Millisecond,
    TimeZoneName,
    Literal,
}

impl SegmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentType::Era => "era",
            SegmentType::Year => "year",
            SegmentType::Month => "month",
            SegmentType::Day => "day",
            SegmentType::DayPeriod => "dayPeriod",
            SegmentType::Hour => "hour",
            SegmentType::Minute => "minute",
            SegmentType::Second => "second",
            SegmentType::Millisecond => "millisecond",
            SegmentType::TimeZoneName => "timeZoneName",
            SegmentType::Literal => "literal",
        }
    }

    /// Looks up an engine field name. Formatter part names that differ from
    /// these (such as `fractionalSecond`) are not accepted here.
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "era" => SegmentType::Era,
            "year" => SegmentType::Year,
            "month" => SegmentType::Month,
            "day" => SegmentType::Day,
            "dayPeriod" => SegmentType::DayPeriod,
            "hour" => SegmentType::Hour,
            "minute" => SegmentType::Minute,
            "second" => SegmentType::Second,
            "millisecond" => SegmentType::Millisecond,
            "timeZoneName" => SegmentType::TimeZoneName,
            "literal" => SegmentType::Literal,
            _ => return None,
        };
        Some(ty)
    }

    pub fn is_editable(self) -> bool {
        !matches!(self, SegmentType::TimeZoneName | SegmentType::Literal)
    }

    /// Select-style segments cycle through named values rather than digits.
    pub fn is_numeric(self) -> bool {
        self.is_editable() && !matches!(self, SegmentType::Era | SegmentType::DayPeriod)
    }

    /// Fields kept together as one left-to-right run inside RTL text.
    pub fn is_time_run(self) -> bool {
        matches!(
            self,
            SegmentType::Hour | SegmentType::Minute | SegmentType::Second | SegmentType::Millisecond
        )
    }

    pub fn page_step(self) -> i32 {
        match self {
            SegmentType::Year => 5,
            SegmentType::Month => 2,
            SegmentType::Day => 7,
            SegmentType::Hour => 2,
            SegmentType::Minute | SegmentType::Second => 15,
            SegmentType::Millisecond => 100,
            _ => 1,
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SegmentType::from_name(s).ok_or_else(|| format!("unknown segment type `{s}`"))
    }
}

/// The finest field a field editor exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    Day,
    Hour,
    #[default]
    Minute,
    Second,
    Millisecond,
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::Day,
        Granularity::Hour,
        Granularity::Minute,
        Granularity::Second,
        Granularity::Millisecond,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Hour => "hour",
            Granularity::Minute => "minute",
            Granularity::Second => "second",
            Granularity::Millisecond => "millisecond",
        }
    }

    pub fn segment_type(self) -> SegmentType {
        match self {
            Granularity::Day => SegmentType::Day,
            Granularity::Hour => SegmentType::Hour,
            Granularity::Minute => SegmentType::Minute,
            Granularity::Second => SegmentType::Second,
            Granularity::Millisecond => SegmentType::Millisecond,
        }
    }

    pub fn has_time(self) -> bool {
        self >= Granularity::Hour
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| Error::InvalidGranularity(s.to_string()))
    }
}

/// Display form of a numeric field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldStyle {
    Numeric,
    TwoDigit,
}

impl FieldStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldStyle::Numeric => "numeric",
            FieldStyle::TwoDigit => "2-digit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HourCycle {
    /// 0-11 with a day period.
    H11,
    /// 1-12 with a day period.
    H12,
    /// 0-23.
    H23,
    /// 1-24.
    H24,
}

impl HourCycle {
    pub fn as_str(self) -> &'static str {
        match self {
            HourCycle::H11 => "h11",
            HourCycle::H12 => "h12",
            HourCycle::H23 => "h23",
            HourCycle::H24 => "h24",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "h11" => Some(HourCycle::H11),
            "h12" => Some(HourCycle::H12),
            "h23" => Some(HourCycle::H23),
            "h24" => Some(HourCycle::H24),
            _ => None,
        }
    }

    pub fn is_12_hour(self) -> bool {
        matches!(self, HourCycle::H11 | HourCycle::H12)
    }

    /// Converts a 24-hour clock value to the number shown under this cycle.
    pub fn display_hour(self, hour24: u32) -> u32 {
        match self {
            HourCycle::H12 => match hour24 % 12 {
                0 => 12,
                h => h,
            },
            HourCycle::H11 => hour24 % 12,
            HourCycle::H23 => hour24,
            HourCycle::H24 => {
                if hour24 == 0 {
                    24
                } else {
                    hour24
                }
            }
        }
    }

    /// Range of numbers a user may type for the hour under this cycle.
    pub fn display_range(self) -> (i32, i32) {
        match self {
            HourCycle::H11 => (0, 11),
            HourCycle::H12 => (1, 12),
            HourCycle::H23 => (0, 23),
            HourCycle::H24 => (1, 24),
        }
    }

    /// Inverse of [`HourCycle::display_hour`]; `pm` selects the half of the
    /// day for 12-hour cycles.
    pub fn to_hour24(self, display: u32, pm: bool) -> u32 {
        match self {
            HourCycle::H11 | HourCycle::H12 => display % 12 + if pm { 12 } else { 0 },
            HourCycle::H23 => display,
            HourCycle::H24 => display % 24,
        }
    }
}

impl fmt::Display for HourCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
