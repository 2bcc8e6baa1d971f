//! Segment engine for date and time input fields.
//!
//! A field is shown as an ordered list of segments (`12`, `:`, `30`, ` `,
//! `PM`) derived from locale formatting data. Editable segments can be
//! stepped, paged, typed into and cleared; every edit produces a new value.
//!
//! ```
//! use datefield::{DateFieldState, Granularity, SegmentType, StateOptions};
//!
//! let mut field = DateFieldState::new(
//!     StateOptions::new("en-US")
//!         .granularity(Granularity::Millisecond)
//!         .value("12:30:45".parse()?),
//! )?;
//! field.increment_page(SegmentType::Millisecond)?;
//! let text: String = field.segments().iter().map(|s| s.text.as_str()).collect();
//! assert_eq!(text, "12:30:45.100 PM");
//! # Ok::<(), datefield::Error>(())
//! ```

pub mod error;
pub mod input;
pub mod intl;
pub mod mutate;
pub mod options;
pub mod placeholder;
pub mod segments;
pub mod state;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use intl::{DateTimeFormat, FormattedPart, Locale, PartsFormatter};
pub use options::{FieldOptions, FieldTable, FormatOptions, Resolver};
pub use segments::Segment;
pub use state::{DateFieldState, StateOptions};
pub use types::{FieldStyle, Granularity, HourCycle, SegmentType};
pub use value::{CycleOptions, DateTimeValue, FieldValues, ValueShape};
