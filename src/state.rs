//! One field-editing session: a value that may be partly filled in, the
//! options it is shown with, and the segment list derived from both.

use chrono::{Local, NaiveTime};
use chrono_tz::Tz;
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::input::{self, DigitEntry, EntryOutcome};
use crate::intl::{DateTimeFormat, DisplayStyle, Locale, PartsFormatter, digit_value, field_display_name};
use crate::mutate;
use crate::options::{FieldOptions, FormatOptions, Resolver};
use crate::segments::{self, Segment};
use crate::types::{Granularity, HourCycle, SegmentType};
use crate::value::{DateTimeValue, FieldValues, ValueShape, resolve_local};

/// Configuration for a [`DateFieldState`].
#[derive(Clone, Debug, Default)]
pub struct StateOptions {
    /// BCP-47 tag; empty means `en-US`.
    pub locale: String,
    /// Defaults to minute.
    pub granularity: Option<Granularity>,
    pub value: Option<DateTimeValue>,
    /// Value whose fields fill unfilled segments. Defaults to midnight today
    /// (in `time_zone` when given) or midnight for time-only fields.
    pub placeholder_value: Option<DateTimeValue>,
    /// Used for the default placeholder when there is no value.
    pub time_zone: Option<Tz>,
    pub hour12: Option<bool>,
    /// Coarsest field shown. Time-only values start at the hour or finer.
    pub max_granularity: Option<SegmentType>,
    pub force_leading_zeros: bool,
    pub show_era: bool,
    pub show_time_zone: bool,
    pub field_options: Option<FieldOptions>,
}

impl StateOptions {
    pub fn new(locale: impl Into<String>) -> Self {
        StateOptions {
            locale: locale.into(),
            ..StateOptions::default()
        }
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub fn value(mut self, value: DateTimeValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn placeholder_value(mut self, value: DateTimeValue) -> Self {
        self.placeholder_value = Some(value);
        self
    }

    pub fn time_zone(mut self, tz: Tz) -> Self {
        self.time_zone = Some(tz);
        self
    }

    pub fn hour12(mut self, hour12: Option<bool>) -> Self {
        self.hour12 = hour12;
        self
    }
}

pub struct DateFieldState {
    locale: Locale,
    formatter: Box<dyn PartsFormatter + Send + Sync>,
    granularity: Granularity,
    options: FormatOptions,
    value: Option<DateTimeValue>,
    placeholder_value: DateTimeValue,
    /// The placeholder value with every filled segment applied.
    display_value: DateTimeValue,
    /// Editable segment types this field shows.
    editable: Vec<SegmentType>,
    filled: FxHashSet<SegmentType>,
    segments: Vec<Segment>,
    entry: DigitEntry,
}

impl std::fmt::Debug for DateFieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateFieldState")
            .field("locale", &self.locale)
            .field("granularity", &self.granularity)
            .field("value", &self.value)
            .field("display_value", &self.display_value)
            .field("filled", &self.filled)
            .finish_non_exhaustive()
    }
}

fn default_placeholder(shape: Option<ValueShape>, time_only: bool, tz: Option<Tz>) -> DateTimeValue {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    match (shape, tz) {
        (Some(ValueShape::Time), _) => DateTimeValue::Time(NaiveTime::MIN),
        (None, _) if time_only => DateTimeValue::Time(NaiveTime::MIN),
        (Some(ValueShape::DateTime), _) => DateTimeValue::DateTime(midnight),
        (_, Some(tz)) => DateTimeValue::Zoned(resolve_local(tz, midnight, None)),
        _ => DateTimeValue::DateTime(midnight),
    }
}

impl DateFieldState {
    pub fn new(options: StateOptions) -> Result<Self> {
        let locale = if options.locale.is_empty() {
            Locale::default()
        } else {
            Locale::parse(&options.locale)?
        };
        let formatter = DateTimeFormat::new(locale.clone());
        DateFieldState::with_formatter(options, Box::new(formatter))
    }

    /// Builds a state around a caller-supplied formatter. The formatter's
    /// locale is the field's locale.
    pub fn with_formatter(options: StateOptions, formatter: Box<dyn PartsFormatter + Send + Sync>) -> Result<Self> {
        let locale = formatter.locale().clone();
        let granularity = options.granularity.unwrap_or_default();

        let shape = options
            .value
            .as_ref()
            .or(options.placeholder_value.as_ref())
            .map(DateTimeValue::shape);
        let time_only = shape == Some(ValueShape::Time) || options.max_granularity.is_some_and(|ty| ty >= SegmentType::Hour);
        if time_only && !granularity.has_time() {
            return Err(Error::IncompatibleValue {
                shape: ValueShape::Time.as_str(),
                granularity: granularity.as_str(),
            });
        }
        if let (Some(value), Some(placeholder)) = (&options.value, &options.placeholder_value) {
            if value.shape() != placeholder.shape() {
                return Err(Error::IncompatibleValue {
                    shape: placeholder.shape().as_str(),
                    granularity: granularity.as_str(),
                });
            }
        }

        let max_granularity = if time_only {
            options
                .max_granularity
                .filter(|ty| *ty >= SegmentType::Hour)
                .unwrap_or(SegmentType::Hour)
        } else {
            options.max_granularity.unwrap_or(SegmentType::Year)
        };
        let mut format_options = Resolver::new(granularity)
            .max_granularity(max_granularity)
            .hour12(options.hour12)
            .force_leading_zeros(options.force_leading_zeros)
            .show_era(options.show_era)
            .show_time_zone(options.show_time_zone)
            .resolve(options.field_options.as_ref());
        if format_options.fractional_second_digits.is_some() && !formatter.supports_fractional_seconds() {
            warn!(locale = %locale, "formatter cannot render fractional seconds; dropping the millisecond segment");
            format_options = format_options.without_fractional_seconds();
        }

        let zone = options
            .time_zone
            .or_else(|| options.value.as_ref().and_then(DateTimeValue::time_zone));
        let placeholder_value = options
            .placeholder_value
            .unwrap_or_else(|| default_placeholder(shape, time_only, zone));
        let editable: Vec<SegmentType> = segments::parse(&placeholder_value, &format_options, formatter.as_ref())
            .into_iter()
            .filter(|s| s.is_editable)
            .map(|s| s.segment_type)
            .collect();

        let mut state = DateFieldState {
            locale,
            formatter,
            granularity,
            options: format_options,
            value: None,
            display_value: placeholder_value.clone(),
            placeholder_value,
            editable,
            filled: FxHashSet::default(),
            segments: Vec::new(),
            entry: DigitEntry::new(),
        };
        debug!(locale = %state.locale, %granularity, segments = ?state.editable, "created date field");
        state.set_value(options.value)?;
        Ok(state)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The committed value; `None` until every segment is filled in.
    pub fn value(&self) -> Option<&DateTimeValue> {
        self.value.as_ref()
    }

    pub fn display_value(&self) -> &DateTimeValue {
        &self.display_value
    }

    pub fn is_complete(&self) -> bool {
        self.value.is_some()
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn format_options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn hour_cycle(&self) -> HourCycle {
        self.formatter.hour_cycle(&self.options)
    }

    pub fn is_rtl(&self) -> bool {
        self.formatter.is_rtl()
    }

    /// Accessible name for a segment, such as "hour".
    pub fn segment_label(&self, ty: SegmentType) -> Option<String> {
        field_display_name(ty, &self.locale, DisplayStyle::Long)
    }

    /// Replaces the value. `None` empties the field back to placeholders.
    pub fn set_value(&mut self, value: Option<DateTimeValue>) -> Result<()> {
        self.entry.reset();
        match value {
            Some(value) => {
                let shows_date = self
                    .editable
                    .iter()
                    .any(|ty| matches!(ty, SegmentType::Year | SegmentType::Month | SegmentType::Day));
                if shows_date && !value.has_date() {
                    return Err(Error::IncompatibleValue {
                        shape: value.shape().as_str(),
                        granularity: self.granularity.as_str(),
                    });
                }
                self.filled = self.editable.iter().copied().collect();
                self.display_value = value.clone();
                self.value = Some(value);
            }
            None => {
                self.filled.clear();
                self.display_value = self.placeholder_value.clone();
                self.value = None;
            }
        }
        self.rebuild();
        Ok(())
    }

    pub fn increment(&mut self, ty: SegmentType) -> Result<()> {
        self.adjust(ty, mutate::increment)
    }

    pub fn decrement(&mut self, ty: SegmentType) -> Result<()> {
        self.adjust(ty, mutate::decrement)
    }

    pub fn increment_page(&mut self, ty: SegmentType) -> Result<()> {
        self.adjust(ty, mutate::increment_page)
    }

    pub fn decrement_page(&mut self, ty: SegmentType) -> Result<()> {
        self.adjust(ty, mutate::decrement_page)
    }

    /// Sets a segment from typed text: digits in any supported numbering
    /// system, or the shown name of an era or day period.
    pub fn set_segment(&mut self, ty: SegmentType, text: &str) -> Result<()> {
        self.check_editable(ty)?;
        self.entry.reset();
        let updated = match self.named_value(ty, text) {
            Some(n) => mutate::set_number(&self.display_value, ty, i64::from(n), self.hour_cycle())?,
            None => mutate::set_typed(&self.display_value, ty, text, self.hour_cycle())?,
        };
        self.fill(ty, updated);
        Ok(())
    }

    /// Empties one segment, resetting its field from the placeholder value.
    pub fn clear_segment(&mut self, ty: SegmentType) -> Result<()> {
        self.check_editable(ty)?;
        self.entry.reset();
        if let Some(n) = self.placeholder_value.get(ty) {
            self.display_value = self.display_value.set(&FieldValues::default().with(ty, n))?;
        }
        self.filled.remove(&ty);
        if self.value.take().is_some() {
            debug!(segment = %ty, "value cleared");
        }
        self.rebuild();
        Ok(())
    }

    /// Types one digit into a segment.
    pub fn enter_digit(&mut self, ty: SegmentType, ch: char) -> Result<EntryOutcome> {
        self.check_editable(ty)?;
        let digit = digit_value(ch).ok_or_else(|| Error::InvalidSegmentText {
            segment: ty,
            text: ch.to_string(),
        })?;
        if !ty.is_numeric() {
            return Err(Error::InvalidSegmentText {
                segment: ty,
                text: ch.to_string(),
            });
        }
        let hour_cycle = self.hour_cycle();
        let (min, max) = mutate::entry_bounds(&self.display_value, ty, hour_cycle).ok_or(Error::NotEditable(ty))?;
        let outcome = self.entry.push(ty, digit, min, max);
        trace!(segment = %ty, digit, buffer = self.entry.buffer(), ?outcome, "digit entered");
        if let Some(n) = outcome.value {
            let updated = mutate::set_typed_number(&self.display_value, ty, i64::from(n), hour_cycle)?;
            self.fill(ty, updated);
        }
        Ok(outcome)
    }

    /// Deletes the last digit of a segment; a segment left empty is cleared.
    pub fn backspace(&mut self, ty: SegmentType) -> Result<()> {
        self.check_editable(ty)?;
        self.entry.reset();
        if !self.filled.contains(&ty) {
            return Ok(());
        }
        let text = self
            .segments
            .iter()
            .find(|s| s.segment_type == ty)
            .map(|s| s.text.clone())
            .unwrap_or_default();
        match input::backspace(&text).filter(|_| ty.is_numeric()) {
            Some(n) => {
                let updated = mutate::set_typed_number(&self.display_value, ty, i64::from(n), self.hour_cycle())?;
                self.fill(ty, updated);
                Ok(())
            }
            None => self.clear_segment(ty),
        }
    }

    /// Accepts the placeholder day period when it is the only segment left
    /// unfilled. Returns whether the value is now complete.
    pub fn confirm_placeholder(&mut self) -> bool {
        let missing: Vec<SegmentType> = self
            .editable
            .iter()
            .copied()
            .filter(|ty| !self.filled.contains(ty))
            .collect();
        if missing == [SegmentType::DayPeriod] {
            self.filled.insert(SegmentType::DayPeriod);
            self.commit_if_complete();
            self.rebuild();
        }
        self.is_complete()
    }

    fn check_editable(&self, ty: SegmentType) -> Result<()> {
        if ty.is_editable() && self.editable.contains(&ty) {
            Ok(())
        } else {
            Err(Error::NotEditable(ty))
        }
    }

    fn adjust(
        &mut self,
        ty: SegmentType,
        op: fn(&DateTimeValue, SegmentType, HourCycle) -> Result<DateTimeValue>,
    ) -> Result<()> {
        self.check_editable(ty)?;
        self.entry.reset();
        if self.filled.contains(&ty) {
            let updated = op(&self.display_value, ty, self.hour_cycle())?;
            self.fill(ty, updated);
        } else {
            trace!(segment = %ty, "revealing placeholder segment");
            self.fill(ty, self.display_value.clone());
        }
        Ok(())
    }

    fn fill(&mut self, ty: SegmentType, updated: DateTimeValue) {
        self.display_value = updated;
        self.filled.insert(ty);
        self.commit_if_complete();
        self.rebuild();
    }

    fn commit_if_complete(&mut self) {
        if self.editable.iter().all(|ty| self.filled.contains(ty)) {
            if self.value.as_ref() != Some(&self.display_value) {
                debug!(value = %self.display_value, "value committed");
            }
            self.value = Some(self.display_value.clone());
        }
    }

    /// Matches the shown name of an era or day period.
    fn named_value(&self, ty: SegmentType, text: &str) -> Option<i32> {
        let candidates: &[i32] = match ty {
            SegmentType::DayPeriod => &[0, 12],
            SegmentType::Era => &[0, 1],
            _ => return None,
        };
        let wanted = text.trim().to_lowercase();
        candidates.iter().copied().find(|n| {
            let Ok(candidate) = self.display_value.set(&FieldValues::default().with(ty, *n)) else {
                return false;
            };
            segments::parse(&candidate, &self.options, self.formatter.as_ref())
                .iter()
                .any(|s| s.segment_type == ty && s.text.to_lowercase() == wanted)
        })
    }

    fn rebuild(&mut self) {
        let filled = &self.filled;
        self.segments = segments::parse_with_placeholders(
            &self.display_value,
            &self.options,
            self.formatter.as_ref(),
            |ty| filled.contains(&ty),
        );
        trace!(count = self.segments.len(), complete = self.value.is_some(), "segments rebuilt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(s: &str) -> DateTimeValue {
        s.parse().unwrap()
    }

    fn texts(state: &DateFieldState) -> Vec<(SegmentType, String)> {
        state
            .segments()
            .iter()
            .map(|s| (s.segment_type, s.text.clone()))
            .collect()
    }

    fn segment(state: &DateFieldState, ty: SegmentType) -> Segment {
        state
            .segments()
            .iter()
            .find(|s| s.segment_type == ty)
            .cloned()
            .unwrap()
    }

    fn time_state() -> DateFieldState {
        DateFieldState::new(
            StateOptions::new("en-US")
                .granularity(Granularity::Millisecond)
                .value(value("12:30:45")),
        )
        .unwrap()
    }

    #[test]
    fn end_to_end_millisecond_time() {
        let mut state = time_state();
        assert_eq!(
            texts(&state),
            vec![
                (SegmentType::Hour, "12".to_string()),
                (SegmentType::Literal, ":".to_string()),
                (SegmentType::Minute, "30".to_string()),
                (SegmentType::Literal, ":".to_string()),
                (SegmentType::Second, "45".to_string()),
                (SegmentType::Literal, ".".to_string()),
                (SegmentType::Millisecond, "000".to_string()),
                (SegmentType::Literal, " ".to_string()),
                (SegmentType::DayPeriod, "PM".to_string()),
            ]
        );
        assert_eq!(segment(&state, SegmentType::Millisecond).value, Some(0));

        state.increment(SegmentType::Millisecond).unwrap();
        assert_eq!(segment(&state, SegmentType::Millisecond).value, Some(1));
        state.increment_page(SegmentType::Millisecond).unwrap();
        assert_eq!(segment(&state, SegmentType::Millisecond).value, Some(100));
        assert_eq!(segment(&state, SegmentType::Millisecond).text, "100");
        assert!(state.is_complete());
        assert_eq!(state.value().unwrap().get(SegmentType::Millisecond), Some(100));
    }

    #[test]
    fn typing_five_then_zero_gives_fifty() {
        let mut state = time_state();
        let first = state.enter_digit(SegmentType::Millisecond, '5').unwrap();
        assert!(!first.advance);
        assert_eq!(segment(&state, SegmentType::Millisecond).value, Some(5));
        state.enter_digit(SegmentType::Millisecond, '0').unwrap();
        assert_eq!(segment(&state, SegmentType::Millisecond).value, Some(50));
        assert_eq!(segment(&state, SegmentType::Millisecond).text, "050");
        let last = state.enter_digit(SegmentType::Millisecond, '1').unwrap();
        assert!(last.advance);
        assert_eq!(state.value().unwrap().get(SegmentType::Millisecond), Some(501));
    }

    #[test]
    fn time_only_value_with_day_granularity_is_rejected() {
        let err = DateFieldState::new(
            StateOptions::new("en-US")
                .granularity(Granularity::Day)
                .value(value("12:30")),
        )
        .unwrap_err();
        assert!(matches!(err, Error::IncompatibleValue { shape: "time", granularity: "day" }));
    }

    #[test]
    fn time_only_field_can_start_below_the_hour() {
        let mut options = StateOptions::new("en-US")
            .granularity(Granularity::Second)
            .value(value("12:30:45"));
        options.max_granularity = Some(SegmentType::Minute);
        let state = DateFieldState::new(options).unwrap();
        assert_eq!(
            texts(&state),
            vec![
                (SegmentType::Minute, "30".to_string()),
                (SegmentType::Literal, ":".to_string()),
                (SegmentType::Second, "45".to_string()),
            ]
        );

        let mut options = StateOptions::new("en-US").granularity(Granularity::Minute).value(value("12:30"));
        options.max_granularity = Some(SegmentType::Day);
        let state = DateFieldState::new(options).unwrap();
        assert_eq!(state.segments()[0].segment_type, SegmentType::Hour);
    }

    #[test]
    fn time_value_cannot_fill_a_date_field() {
        let mut state = DateFieldState::new(
            StateOptions::new("en-US")
                .granularity(Granularity::Minute)
                .placeholder_value(value("2026-01-01T00:00")),
        )
        .unwrap();
        assert!(matches!(
            state.set_value(Some(value("08:00"))),
            Err(Error::IncompatibleValue { shape: "time", .. })
        ));
        state.set_value(Some(value("2026-03-04T08:00"))).unwrap();
        assert!(state.is_complete());
    }

    #[test]
    fn bad_locale_is_rejected() {
        let err = DateFieldState::new(StateOptions::new("$$")).unwrap_err();
        assert_eq!(err, Error::InvalidLocale("$$".to_string()));
    }

    #[test]
    fn partial_value_lifecycle() {
        let mut state = DateFieldState::new(
            StateOptions::new("en-US")
                .granularity(Granularity::Day)
                .placeholder_value(value("2026-01-01")),
        )
        .unwrap();
        assert!(!state.is_complete());
        assert_eq!(
            texts(&state),
            vec![
                (SegmentType::Month, "mm".to_string()),
                (SegmentType::Literal, "/".to_string()),
                (SegmentType::Day, "dd".to_string()),
                (SegmentType::Literal, "/".to_string()),
                (SegmentType::Year, "yyyy".to_string()),
            ]
        );

        // The first step only reveals the placeholder's month.
        state.increment(SegmentType::Month).unwrap();
        assert_eq!(segment(&state, SegmentType::Month).text, "1");
        state.increment(SegmentType::Month).unwrap();
        assert_eq!(segment(&state, SegmentType::Month).text, "2");

        state.set_segment(SegmentType::Day, "14").unwrap();
        assert!(!state.is_complete());
        state.set_segment(SegmentType::Year, "2027").unwrap();
        assert!(state.is_complete());
        assert_eq!(state.value(), Some(&value("2027-02-14")));

        state.clear_segment(SegmentType::Day).unwrap();
        assert!(!state.is_complete());
        assert_eq!(segment(&state, SegmentType::Day).text, "dd");
        assert_eq!(state.display_value().get(SegmentType::Day), Some(1));

        state.set_value(None).unwrap();
        assert!(state.segments().iter().filter(|s| s.is_editable).all(|s| s.is_placeholder));
    }

    #[test]
    fn confirm_placeholder_fills_only_day_period() {
        let mut state = DateFieldState::new(
            StateOptions::new("en-US")
                .granularity(Granularity::Minute)
                .placeholder_value(value("09:00")),
        )
        .unwrap();
        assert!(!state.confirm_placeholder());
        state.set_segment(SegmentType::Hour, "9").unwrap();
        assert!(!state.confirm_placeholder());
        state.set_segment(SegmentType::Minute, "15").unwrap();
        assert!(state.confirm_placeholder());
        assert_eq!(state.value(), Some(&value("09:15")));
    }

    #[test]
    fn day_period_by_name() {
        let mut state = time_state();
        state.set_segment(SegmentType::DayPeriod, "am").unwrap();
        assert_eq!(state.value().unwrap().get(SegmentType::Hour), Some(0));
        state.increment(SegmentType::DayPeriod).unwrap();
        assert_eq!(segment(&state, SegmentType::DayPeriod).text, "PM");
        assert!(state.set_segment(SegmentType::DayPeriod, "noon").is_err());
    }

    #[test]
    fn backspace_then_clear() {
        let mut state = DateFieldState::new(
            StateOptions::new("en-GB")
                .granularity(Granularity::Day)
                .value(value("2026-10-17")),
        )
        .unwrap();
        state.backspace(SegmentType::Year).unwrap();
        assert_eq!(segment(&state, SegmentType::Year).text, "202");
        state.backspace(SegmentType::Day).unwrap();
        assert_eq!(segment(&state, SegmentType::Day).text, "01");
        state.backspace(SegmentType::Day).unwrap();
        assert!(segment(&state, SegmentType::Day).is_placeholder);
        assert!(!state.is_complete());
    }

    #[test]
    fn literals_and_hidden_fields_are_not_editable() {
        let mut state = time_state();
        assert_eq!(state.increment(SegmentType::Literal), Err(Error::NotEditable(SegmentType::Literal)));
        assert_eq!(state.increment(SegmentType::Year), Err(Error::NotEditable(SegmentType::Year)));
        assert!(matches!(
            state.set_segment(SegmentType::Minute, "75"),
            Err(Error::SegmentValueOutOfRange { .. })
        ));
    }

    #[test]
    fn legacy_formatter_drops_millisecond() {
        let formatter = DateTimeFormat::new(Locale::default()).without_fractional_seconds();
        let state = DateFieldState::with_formatter(
            StateOptions::new("en-US")
                .granularity(Granularity::Millisecond)
                .value(value("12:30:45")),
            Box::new(formatter),
        )
        .unwrap();
        assert_eq!(state.format_options().fractional_second_digits, None);
        assert!(state.segments().iter().all(|s| s.segment_type != SegmentType::Millisecond));
    }

    #[test]
    fn rtl_and_labels() {
        let state = DateFieldState::new(
            StateOptions::new("ar-EG")
                .granularity(Granularity::Minute)
                .value(value("2026-10-17T13:30")),
        )
        .unwrap();
        assert!(state.is_rtl());
        assert_eq!(state.hour_cycle(), HourCycle::H12);
        assert_eq!(state.segment_label(SegmentType::Hour).as_deref(), Some("الساعات"));
        assert!(state.segments().iter().any(|s| s.text == "\u{2066}"));
    }

    #[test]
    fn hour_twelve_entry() {
        let mut state = DateFieldState::new(
            StateOptions::new("en-US")
                .granularity(Granularity::Minute)
                .value(value("15:00")),
        )
        .unwrap();
        let outcome = state.enter_digit(SegmentType::Hour, '1').unwrap();
        assert_eq!(outcome, EntryOutcome { value: Some(1), advance: false });
        assert_eq!(state.value().unwrap().get(SegmentType::Hour), Some(13));
        state.enter_digit(SegmentType::Hour, '2').unwrap();
        assert_eq!(state.value().unwrap().get(SegmentType::Hour), Some(12));
        assert_eq!(segment(&state, SegmentType::Hour).text, "12");
    }
}
