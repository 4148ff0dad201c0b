//! Error types for the ecattrs-grouping crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the ecattrs-grouping crate.
///
/// Only the strict [`GroupingSpec`](crate::GroupingSpec) representation and
/// the textual parsers produce these; token-list groupings never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroupingError {
    /// Returned when a grouping is neither a known calendar-period code nor
    /// a recognised `month` / `season` tagged grouping.
    #[error("unsupported grouping specification: {spec}")]
    Unsupported {
        /// The offending grouping, as written by the caller.
        spec: String,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a date range ends before it starts.
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },
}
