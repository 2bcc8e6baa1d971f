//! Progressive numeric entry into a focused segment.

use crate::intl::digit_value;
use crate::types::SegmentType;

/// What one typed digit did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryOutcome {
    /// Number to store in the segment, in display terms. `None` when the
    /// digits so far are not a valid value on their own (a leading zero in
    /// a 1-based field).
    pub value: Option<i32>,
    /// The segment cannot take another digit; focus moves on.
    pub advance: bool,
}

/// Digits typed into the focused segment so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitEntry {
    segment: Option<SegmentType>,
    buffer: String,
}

impl DigitEntry {
    pub fn new() -> Self {
        DigitEntry::default()
    }

    pub fn reset(&mut self) {
        self.segment = None;
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Adds `digit` to the entry for `ty`, whose typed values run
    /// `min..=max`. Switching segments starts a fresh buffer.
    pub fn push(&mut self, ty: SegmentType, digit: u32, min: i32, max: i32) -> EntryOutcome {
        if self.segment != Some(ty) {
            self.buffer.clear();
            self.segment = Some(ty);
        }
        let max = i64::from(max);
        let mut candidate = format!("{}{}", self.buffer, digit);
        let mut number: i64 = candidate.parse().unwrap_or(i64::MAX);
        if number > max {
            candidate = digit.to_string();
            number = i64::from(digit);
        }

        let settable = number >= i64::from(min) && number <= max;
        let full = number.saturating_mul(10) > max || candidate.len() >= max.to_string().len();
        if full {
            self.buffer.clear();
        } else {
            self.buffer = candidate;
        }
        EntryOutcome {
            value: settable.then_some(number as i32),
            advance: full && settable,
        }
    }
}

/// Text left after deleting the last digit of a segment's text, as a
/// number. `None` means the segment should be cleared.
pub fn backspace(text: &str) -> Option<i32> {
    let digits: Vec<u32> = text.chars().map(digit_value).collect::<Option<_>>()?;
    let kept = &digits[..digits.len().checked_sub(1)?];
    let number = kept
        .iter()
        .try_fold(0i32, |acc, d| acc.checked_mul(10)?.checked_add(*d as i32))?;
    (!kept.is_empty() && number != 0).then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millisecond_digits_extend_left_to_right() {
        let mut entry = DigitEntry::new();
        let first = entry.push(SegmentType::Millisecond, 5, 0, 999);
        assert_eq!(first, EntryOutcome { value: Some(5), advance: false });
        let second = entry.push(SegmentType::Millisecond, 0, 0, 999);
        assert_eq!(second, EntryOutcome { value: Some(50), advance: false });
        let third = entry.push(SegmentType::Millisecond, 7, 0, 999);
        assert_eq!(third, EntryOutcome { value: Some(507), advance: true });
        assert_eq!(entry.buffer(), "");
    }

    #[test]
    fn two_digit_fields_advance() {
        let mut entry = DigitEntry::new();
        assert_eq!(entry.push(SegmentType::Minute, 4, 0, 59).advance, false);
        assert_eq!(entry.push(SegmentType::Minute, 5, 0, 59), EntryOutcome { value: Some(45), advance: true });
        // 7 can not be followed by another digit under 59.
        assert_eq!(entry.push(SegmentType::Minute, 7, 0, 59), EntryOutcome { value: Some(7), advance: true });
        assert_eq!(entry.push(SegmentType::Month, 1, 1, 12), EntryOutcome { value: Some(1), advance: false });
        assert_eq!(entry.push(SegmentType::Month, 2, 1, 12), EntryOutcome { value: Some(12), advance: true });
    }

    #[test]
    fn overflow_restarts_with_the_new_digit() {
        let mut entry = DigitEntry::new();
        entry.push(SegmentType::Day, 3, 1, 30);
        let outcome = entry.push(SegmentType::Day, 5, 1, 30);
        assert_eq!(outcome, EntryOutcome { value: Some(5), advance: true });
    }

    #[test]
    fn leading_zero_is_buffered() {
        let mut entry = DigitEntry::new();
        assert_eq!(entry.push(SegmentType::Hour, 0, 1, 12), EntryOutcome { value: None, advance: false });
        assert_eq!(entry.push(SegmentType::Hour, 9, 1, 12), EntryOutcome { value: Some(9), advance: true });
        assert_eq!(entry.push(SegmentType::Minute, 0, 0, 59), EntryOutcome { value: Some(0), advance: false });
    }

    #[test]
    fn switching_segment_starts_over() {
        let mut entry = DigitEntry::new();
        entry.push(SegmentType::Year, 2, 1, 9999);
        entry.push(SegmentType::Year, 0, 1, 9999);
        let outcome = entry.push(SegmentType::Minute, 3, 0, 59);
        assert_eq!(outcome.value, Some(3));
        for d in [2, 0, 2] {
            assert!(!entry.push(SegmentType::Year, d, 1, 9999).advance);
        }
        assert_eq!(entry.push(SegmentType::Year, 6, 1, 9999), EntryOutcome { value: Some(2026), advance: true });
    }

    #[test]
    fn backspace_drops_last_digit() {
        assert_eq!(backspace("2026"), Some(202));
        assert_eq!(backspace("٤٥"), Some(4));
        assert_eq!(backspace("7"), None);
        assert_eq!(backspace("05"), None);
        assert_eq!(backspace(""), None);
        assert_eq!(backspace("PM"), None);
    }
}
