//! Error types for the ecattrs-indices crate.

/// Error type for all fallible operations in the ecattrs-indices crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Returned when an identifier is not in any category table.
    #[error("unknown index: {name}")]
    UnknownIndex {
        /// The identifier that was looked up.
        name: String,
    },

    /// Returned when an index has no user-defined threshold attributes.
    #[error("index {name} has no threshold attributes (expected SU, CSU or TR)")]
    NoThreshold {
        /// The identifier that was looked up.
        name: String,
    },
}
