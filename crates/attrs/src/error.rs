//! Error types for ecattrs-attrs.

use ecattrs_grouping::GroupingError;
use ecattrs_indices::IndexError;

/// Error type for all fallible operations in the ecattrs-attrs crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttrError {
    /// An index identifier could not be resolved.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A grouping could not be described.
    #[error(transparent)]
    Grouping(#[from] GroupingError),

    /// Returned when an attribute name is empty.
    #[error("attribute name must not be empty")]
    EmptyName,

    /// Returned by a sink that failed to store an attribute.
    #[error("failed to write attribute '{name}': {reason}")]
    Sink {
        /// Attribute that was being written.
        name: String,
        /// Description of the underlying failure.
        reason: String,
    },
}
