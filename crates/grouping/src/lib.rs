//! # ecattrs-grouping
//!
//! Human-readable descriptions of the temporal grouping used when an ECA
//! index was computed. The phrase ends up inside the `history` global
//! attribute, e.g. `(winter time series)`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalcGrouping (tokens + mode hint)"] -->|".describe()"| M["mode phrase"]
//!     B["GroupingSpec (code / month / season)"] -->|".describe()?"| M
//!     M --> H["history entry"]
//!     R["DateRange"] -->|"compact_date()"| H
//! ```
//!
//! Two grouping representations exist and they do not share a fallback
//! policy. [`CalcGrouping`] never fails: an unrecognised token list is
//! rendered literally. [`GroupingSpec`] is strict: a code outside the fixed
//! table is a [`GroupingError::Unsupported`].
//!
//! ## Quick Start
//!
//! ```
//! use ecattrs_grouping::{CalcGrouping, GroupingSpec, SeasonDescriptor};
//!
//! let calc: CalcGrouping = "year,month".parse().unwrap();
//! assert_eq!(calc.describe(), "monthly time series");
//!
//! let spec = GroupingSpec::Season(SeasonDescriptor::split("D", "JF"));
//! assert_eq!(spec.describe().unwrap(), "seasonal time series (season: DJF)");
//!
//! assert!(GroupingSpec::code("XYZ").describe().is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `structured` | Token-list grouping with optional mode hint |
//! | `period` | Calendar-period codes and tagged month/season groupings |
//! | `mode` | Common trait over both representations |
//! | `range` | Date range and compact date rendering |
//! | `error` | Error types |

mod error;
mod mode;
mod period;
mod range;
mod structured;

pub use error::GroupingError;
pub use mode::DescribeMode;
pub use period::{GroupingSpec, SeasonDescriptor};
pub use range::{DateRange, compact_date};
pub use structured::{CalcGrouping, GroupingToken};
