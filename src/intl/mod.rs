//! Locale data behind the segment engine: locale tags, a bundled parts
//! formatter and field display names.

pub mod datetimeformat;
pub mod displaynames;
pub mod locale;
pub mod strings;

pub use datetimeformat::{DateTimeFormat, FormattedPart, PartsFormatter, digit_value, transliterate_digits};
pub use displaynames::{DisplayStyle, field_display_name};
pub use locale::Locale;
pub use strings::LocalizedStrings;
