//! Resolution of the locale-formatter options for a field.
//!
//! Which fields a date field shows is decided here and only here: every
//! field from the coarsest shown field down to the requested granularity is
//! included, nothing finer. Explicit options may change how an included field
//! is drawn (numeric or two-digit) but never whether it is drawn.

use crate::types::{FieldStyle, Granularity, SegmentType};

/// Default display form of each field, ordered coarse to fine.
///
/// This is plain configuration data: two fields configured differently in
/// the same process each carry their own table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTable {
    entries: Vec<(SegmentType, FieldStyle)>,
}

impl FieldTable {
    pub fn new(entries: Vec<(SegmentType, FieldStyle)>) -> Self {
        FieldTable { entries }
    }

    /// The table used when leading zeros are forced on every field but the
    /// year.
    pub fn two_digit() -> Self {
        FieldTable::new(vec![
            (SegmentType::Year, FieldStyle::Numeric),
            (SegmentType::Month, FieldStyle::TwoDigit),
            (SegmentType::Day, FieldStyle::TwoDigit),
            (SegmentType::Hour, FieldStyle::TwoDigit),
            (SegmentType::Minute, FieldStyle::TwoDigit),
            (SegmentType::Second, FieldStyle::TwoDigit),
            (SegmentType::Millisecond, FieldStyle::Numeric),
        ])
    }

    pub fn entries(&self) -> &[(SegmentType, FieldStyle)] {
        &self.entries
    }

    fn position(&self, ty: SegmentType) -> Option<usize> {
        self.entries.iter().position(|(t, _)| *t == ty)
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        FieldTable::new(vec![
            (SegmentType::Year, FieldStyle::Numeric),
            (SegmentType::Month, FieldStyle::Numeric),
            (SegmentType::Day, FieldStyle::Numeric),
            (SegmentType::Hour, FieldStyle::Numeric),
            (SegmentType::Minute, FieldStyle::TwoDigit),
            (SegmentType::Second, FieldStyle::TwoDigit),
            (SegmentType::Millisecond, FieldStyle::Numeric),
        ])
    }
}

/// Caller overrides for individual field styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldOptions {
    pub year: Option<FieldStyle>,
    pub month: Option<FieldStyle>,
    pub day: Option<FieldStyle>,
    pub hour: Option<FieldStyle>,
    pub minute: Option<FieldStyle>,
    pub second: Option<FieldStyle>,
}

impl FieldOptions {
    fn get(&self, ty: SegmentType) -> Option<FieldStyle> {
        match ty {
            SegmentType::Year => self.year,
            SegmentType::Month => self.month,
            SegmentType::Day => self.day,
            SegmentType::Hour => self.hour,
            SegmentType::Minute => self.minute,
            SegmentType::Second => self.second,
            _ => None,
        }
    }
}

/// The options handed to the locale formatter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub era: bool,
    pub year: Option<FieldStyle>,
    pub month: Option<FieldStyle>,
    pub day: Option<FieldStyle>,
    pub hour: Option<FieldStyle>,
    pub minute: Option<FieldStyle>,
    pub second: Option<FieldStyle>,
    /// Only ever `Some(3)`: millisecond granularity shows all three digits.
    pub fractional_second_digits: Option<u8>,
    /// `None` leaves the hour cycle to the locale.
    pub hour12: Option<bool>,
    pub time_zone_name: bool,
}

impl FormatOptions {
    /// Resolves the options for `granularity` using the default field table.
    pub fn resolve(granularity: Granularity, explicit: Option<&FieldOptions>) -> Self {
        Resolver::new(granularity).resolve(explicit)
    }

    pub fn style(&self, ty: SegmentType) -> Option<FieldStyle> {
        match ty {
            SegmentType::Year => self.year,
            SegmentType::Month => self.month,
            SegmentType::Day => self.day,
            SegmentType::Hour => self.hour,
            SegmentType::Minute => self.minute,
            SegmentType::Second => self.second,
            SegmentType::Millisecond => self.fractional_second_digits.map(|_| FieldStyle::Numeric),
            _ => None,
        }
    }

    fn set_style(&mut self, ty: SegmentType, style: FieldStyle) {
        match ty {
            SegmentType::Year => self.year = Some(style),
            SegmentType::Month => self.month = Some(style),
            SegmentType::Day => self.day = Some(style),
            SegmentType::Hour => self.hour = Some(style),
            SegmentType::Minute => self.minute = Some(style),
            SegmentType::Second => self.second = Some(style),
            SegmentType::Millisecond => self.fractional_second_digits = Some(3),
            _ => {}
        }
    }

    pub fn includes(&self, ty: SegmentType) -> bool {
        match ty {
            SegmentType::Era => self.era,
            SegmentType::TimeZoneName => self.time_zone_name,
            SegmentType::DayPeriod => self.hour.is_some(),
            _ => self.style(ty).is_some(),
        }
    }

    /// The date/time fields included, coarse to fine.
    pub fn fields(&self) -> Vec<SegmentType> {
        [
            SegmentType::Year,
            SegmentType::Month,
            SegmentType::Day,
            SegmentType::Hour,
            SegmentType::Minute,
            SegmentType::Second,
            SegmentType::Millisecond,
        ]
        .into_iter()
        .filter(|ty| self.style(*ty).is_some())
        .collect()
    }

    pub fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    pub fn has_time(&self) -> bool {
        self.hour.is_some()
            || self.minute.is_some()
            || self.second.is_some()
            || self.fractional_second_digits.is_some()
    }

    /// Drops the millisecond field for formatters that cannot render it.
    pub(crate) fn without_fractional_seconds(mut self) -> Self {
        self.fractional_second_digits = None;
        self
    }
}

/// Field-option resolution with its configuration spelled out.
#[derive(Clone, Debug)]
pub struct Resolver {
    pub fields: FieldTable,
    pub leading_zero_fields: FieldTable,
    pub granularity: Granularity,
    /// Coarsest field shown; time-only fields start at the hour.
    pub max_granularity: SegmentType,
    pub hour12: Option<bool>,
    pub force_leading_zeros: bool,
    pub show_era: bool,
    pub show_time_zone: bool,
}

impl Resolver {
    pub fn new(granularity: Granularity) -> Self {
        Resolver {
            fields: FieldTable::default(),
            leading_zero_fields: FieldTable::two_digit(),
            granularity,
            max_granularity: SegmentType::Year,
            hour12: None,
            force_leading_zeros: false,
            show_era: false,
            show_time_zone: false,
        }
    }

    pub fn max_granularity(mut self, ty: SegmentType) -> Self {
        self.max_granularity = ty;
        self
    }

    pub fn hour12(mut self, hour12: Option<bool>) -> Self {
        self.hour12 = hour12;
        self
    }

    pub fn force_leading_zeros(mut self, yes: bool) -> Self {
        self.force_leading_zeros = yes;
        self
    }

    pub fn show_era(mut self, yes: bool) -> Self {
        self.show_era = yes;
        self
    }

    pub fn show_time_zone(mut self, yes: bool) -> Self {
        self.show_time_zone = yes;
        self
    }

    pub fn has_time(&self) -> bool {
        self.granularity.has_time()
    }

    pub fn resolve(&self, explicit: Option<&FieldOptions>) -> FormatOptions {
        let table = if self.force_leading_zeros {
            &self.leading_zero_fields
        } else {
            &self.fields
        };
        let entries = table.entries();
        let end = table
            .position(self.granularity.segment_type())
            .unwrap_or(entries.len().saturating_sub(1));
        let start = table.position(self.max_granularity).unwrap_or(0).min(end);

        let mut opts = FormatOptions::default();
        for &(ty, default_style) in entries.iter().take(end + 1).skip(start) {
            let style = explicit.and_then(|e| e.get(ty)).unwrap_or(default_style);
            opts.set_style(ty, style);
        }

        if self.has_time() {
            opts.hour12 = self.hour12;
            opts.time_zone_name = self.show_time_zone;
        }
        opts.era = self.show_era && opts.year.is_some();
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [SegmentType; 7] = [
        SegmentType::Year,
        SegmentType::Month,
        SegmentType::Day,
        SegmentType::Hour,
        SegmentType::Minute,
        SegmentType::Second,
        SegmentType::Millisecond,
    ];

    #[test]
    fn includes_exactly_the_fields_down_to_granularity() {
        let overrides = [
            None,
            Some(FieldOptions {
                year: Some(FieldStyle::TwoDigit),
                second: Some(FieldStyle::Numeric),
                ..FieldOptions::default()
            }),
        ];
        for g in Granularity::ALL {
            for explicit in &overrides {
                let opts = FormatOptions::resolve(g, explicit.as_ref());
                let cut = ORDER.iter().position(|t| *t == g.segment_type()).unwrap();
                assert_eq!(opts.fields(), ORDER[..=cut].to_vec(), "{g}");
            }
        }
    }

    #[test]
    fn millisecond_always_uses_three_digits() {
        let opts = FormatOptions::resolve(Granularity::Millisecond, None);
        assert_eq!(opts.fractional_second_digits, Some(3));
        let opts = FormatOptions::resolve(Granularity::Second, None);
        assert_eq!(opts.fractional_second_digits, None);
    }

    #[test]
    fn explicit_options_change_style_only() {
        let explicit = FieldOptions {
            hour: Some(FieldStyle::TwoDigit),
            minute: Some(FieldStyle::Numeric),
            ..FieldOptions::default()
        };
        let opts = FormatOptions::resolve(Granularity::Day, Some(&explicit));
        assert_eq!(opts.hour, None);
        assert_eq!(opts.minute, None);

        let opts = FormatOptions::resolve(Granularity::Minute, Some(&explicit));
        assert_eq!(opts.hour, Some(FieldStyle::TwoDigit));
        assert_eq!(opts.minute, Some(FieldStyle::Numeric));
        assert_eq!(opts.day, Some(FieldStyle::Numeric));
    }

    #[test]
    fn default_styles() {
        let opts = FormatOptions::resolve(Granularity::Second, None);
        assert_eq!(opts.year, Some(FieldStyle::Numeric));
        assert_eq!(opts.hour, Some(FieldStyle::Numeric));
        assert_eq!(opts.minute, Some(FieldStyle::TwoDigit));
        assert_eq!(opts.second, Some(FieldStyle::TwoDigit));
    }

    #[test]
    fn forced_leading_zeros() {
        let opts = Resolver::new(Granularity::Minute)
            .force_leading_zeros(true)
            .resolve(None);
        assert_eq!(opts.year, Some(FieldStyle::Numeric));
        assert_eq!(opts.month, Some(FieldStyle::TwoDigit));
        assert_eq!(opts.day, Some(FieldStyle::TwoDigit));
        assert_eq!(opts.hour, Some(FieldStyle::TwoDigit));
    }

    #[test]
    fn time_only_fields_start_at_hour() {
        let opts = Resolver::new(Granularity::Millisecond)
            .max_granularity(SegmentType::Hour)
            .resolve(None);
        assert_eq!(
            opts.fields(),
            vec![
                SegmentType::Hour,
                SegmentType::Minute,
                SegmentType::Second,
                SegmentType::Millisecond
            ]
        );
        assert!(!opts.has_date());
        assert!(opts.has_time());
    }

    #[test]
    fn hour_cycle_and_zone_only_apply_with_time() {
        let day = Resolver::new(Granularity::Day)
            .hour12(Some(false))
            .show_time_zone(true)
            .resolve(None);
        assert_eq!(day.hour12, None);
        assert!(!day.time_zone_name);

        let minute = Resolver::new(Granularity::Minute)
            .hour12(Some(false))
            .show_time_zone(true)
            .resolve(None);
        assert_eq!(minute.hour12, Some(false));
        assert!(minute.time_zone_name);
    }

    #[test]
    fn era_needs_the_year() {
        let opts = Resolver::new(Granularity::Day).show_era(true).resolve(None);
        assert!(opts.era);
        let opts = Resolver::new(Granularity::Minute)
            .max_granularity(SegmentType::Hour)
            .show_era(true)
            .resolve(None);
        assert!(!opts.era);
    }

    #[test]
    fn custom_field_table_is_honoured() {
        let mut resolver = Resolver::new(Granularity::Day);
        resolver.fields = FieldTable::new(vec![
            (SegmentType::Year, FieldStyle::TwoDigit),
            (SegmentType::Month, FieldStyle::TwoDigit),
            (SegmentType::Day, FieldStyle::TwoDigit),
        ]);
        let opts = resolver.resolve(None);
        assert_eq!(opts.year, Some(FieldStyle::TwoDigit));
        assert_eq!(opts.day, Some(FieldStyle::TwoDigit));
    }
}
