//! # ecattrs-indices
//!
//! Static knowledge about ECA climate indices: which semantic group an index
//! belongs to, which indices carry a hemisphere comment, and the attribute
//! text for indices computed against a user-defined temperature threshold.
//!
//! ## Quick Start
//!
//! ```
//! use ecattrs_indices::{CategoryGroup, ThresholdIndex, classify, format_title};
//!
//! assert_eq!(classify("CDD").unwrap(), CategoryGroup::Drought);
//! assert_eq!(format_title("SU").unwrap(), "ECA heat indice SU");
//! assert!(classify("NOPE").is_err());
//!
//! let attrs = ThresholdIndex::Su.variable_attrs(25.0);
//! assert_eq!(attrs.units, "days");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `category` | Index-to-group classification and titles |
//! | `comment` | Per-index comment text |
//! | `threshold` | Attribute tables for threshold-bearing indices |
//! | `error` | Error types |

mod category;
mod comment;
mod error;
mod threshold;

pub use category::{CategoryGroup, classify, format_title, known_indices};
pub use comment::{GSL_COMMENT, format_comment};
pub use error::IndexError;
pub use threshold::{ThresholdAttrs, ThresholdIndex, VariableAttrs};
