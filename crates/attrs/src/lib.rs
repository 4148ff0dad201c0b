//! # ecattrs-attrs
//!
//! Writes CF global and variable attributes for ECA index output through a
//! minimal [`AttributeSink`] capability. The crate never opens files: the
//! caller hands in whatever owns the metadata (an in-memory
//! [`AttributeMap`], a NetCDF handle wrapper, ...).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     I["ecattrs-indices"] -->|"title / comment / threshold text"| F["format_*"]
//!     G["ecattrs-grouping"] -->|"mode phrase"| F
//!     F -->|"write_*"| S["AttributeSink"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use ecattrs_attrs::{AttributeMap, AttributeSink, GlobalAttrs};
//! use ecattrs_grouping::{DateRange, GroupingSpec};
//!
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(1960, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
//! )
//! .unwrap();
//! let now = NaiveDate::from_ymd_opt(2012, 10, 2)
//!     .unwrap()
//!     .and_hms_opt(15, 30, 20)
//!     .unwrap();
//!
//! let mut attrs = AttributeMap::new();
//! GlobalAttrs::new("SU", &GroupingSpec::code("month"), range, now)
//!     .with_institution("Climate impact portal")
//!     .write_all(&mut attrs)
//!     .unwrap();
//!
//! assert_eq!(attrs.attribute("title").as_deref(), Some("ECA heat indice SU"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sink` | The sink capability and an in-memory implementation |
//! | `document` | Global plus per-variable attribute document |
//! | `global` | `title`, `history`, `references`, `institution`, `comment` |
//! | `variable` | Threshold and index variable attributes |
//! | `error` | Error types |

mod document;
mod error;
mod global;
mod sink;
mod variable;

pub use document::AttributeDocument;
pub use error::AttrError;
pub use global::{
    GlobalAttrs, REFERENCES, format_history, format_institution, format_references,
    history_entry, write_comment, write_history, write_institution, write_references,
    write_title,
};
pub use sink::{AttributeMap, AttributeSink};
pub use variable::{write_threshold_attrs, write_variable_attrs};
