use crate::types::SegmentType;

pub type Result<T> = std::result::Result<T, Error>;

/// Every recoverable failure the engine reports.
///
/// None of these are fatal: a caller editing a field decides whether to
/// clamp, ignore the keystroke, or surface the problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid granularity `{0}`: expected day, hour, minute, second or millisecond")]
    InvalidGranularity(String),

    #[error("{value} is out of range for the {segment} segment ({min}..={max})")]
    SegmentValueOutOfRange {
        segment: SegmentType,
        value: i64,
        min: i32,
        max: i32,
    },

    #[error("`{text}` is not a number for the {segment} segment")]
    InvalidSegmentText { segment: SegmentType, text: String },

    #[error("the {0} segment is not editable")]
    NotEditable(SegmentType),

    #[error("a {shape} value cannot be edited at {granularity} granularity")]
    IncompatibleValue {
        shape: &'static str,
        granularity: &'static str,
    },

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("unknown time zone `{0}`")]
    InvalidTimeZone(String),

    #[error("cannot parse `{0}` as a date/time value")]
    InvalidValue(String),
}
