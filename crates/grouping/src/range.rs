//! Date range covered by an index calculation.

use chrono::{Datelike, NaiveDate};

use crate::error::GroupingError;

/// Inclusive `(start, end)` calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns [`GroupingError::InvalidRange`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, GroupingError> {
        if end < start {
            return Err(GroupingError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range.
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(self) -> NaiveDate {
        self.end
    }
}

/// Renders a date as `Y-M-D` with no zero padding, e.g. `1960-1-1`.
///
/// This is the form used inside history entries. It is not ISO 8601.
pub fn compact_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_valid() {
        let range = DateRange::new(ymd(1960, 1, 1), ymd(1990, 12, 31)).unwrap();
        assert_eq!(range.start(), ymd(1960, 1, 1));
        assert_eq!(range.end(), ymd(1990, 12, 31));
    }

    #[test]
    fn single_day_range() {
        let day = ymd(2000, 2, 29);
        let range = DateRange::new(day, day).unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn reversed_range_rejected() {
        assert_eq!(
            DateRange::new(ymd(1990, 12, 31), ymd(1960, 1, 1)).unwrap_err(),
            GroupingError::InvalidRange {
                start: ymd(1990, 12, 31),
                end: ymd(1960, 1, 1),
            }
        );
    }

    #[test]
    fn compact_date_no_padding() {
        assert_eq!(compact_date(ymd(1960, 1, 1)), "1960-1-1");
        assert_eq!(compact_date(ymd(1990, 12, 31)), "1990-12-31");
        assert_eq!(compact_date(ymd(2001, 10, 5)), "2001-10-5");
    }

    #[test]
    fn compact_date_early_year() {
        assert_eq!(compact_date(ymd(850, 3, 7)), "850-3-7");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<DateRange>();
    }
}
