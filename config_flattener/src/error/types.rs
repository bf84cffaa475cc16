//! Primary error enum for schema, value and loading failures.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while mapping configuration onto flat parameters.
///
/// The structural variants ([`Self::UnmappedKey`], [`Self::TypeMismatch`]
/// and [`Self::PrototypeCountMismatch`]) indicate drift between the schema
/// and the merged values, or a schema whose joined paths do not match its
/// prototype nesting. None of them are recoverable; loading stops at the
/// first one.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlattenError {
    /// A value key has no schema entry and no prototype fallback at its level.
    #[error("no matching definition found for node \"{key}\" of configuration tree")]
    UnmappedKey {
        /// Offending value key.
        key: String,
    },

    /// The schema expects a nested collection but the value is a scalar.
    #[error("found non-collection value for array node \"{key}\" of configuration tree")]
    TypeMismatch {
        /// Offending value key.
        key: String,
    },

    /// A terminal path holds a different number of placeholders than the
    /// instance keys collected on the way down to it.
    #[error(
        "prototype discrepancy ({found} vs. {expected}) found in path for node \"{key}\" of configuration tree"
    )]
    PrototypeCountMismatch {
        /// Value key whose terminal path was being resolved.
        key: String,
        /// Number of instance keys accumulated on the path.
        expected: usize,
        /// Number of doubled-separator placeholders in the path.
        found: usize,
    },

    /// The configured path separator is empty.
    #[error("path separator must not be empty")]
    InvalidSeparator,

    /// A prototyped node's prototype is a force-flattened prototype of its
    /// own. Both instance keys would have to share one placeholder.
    #[error(
        "prototype of node \"{path}\" is itself a force-flattened prototype; nested instance keys cannot be placed"
    )]
    NestedPrototype {
        /// Path of the outer prototyped node.
        path: String,
    },

    /// The merged value tree is not a mapping at its root.
    #[error("merged configuration root must be a mapping, found {found}")]
    RootNotMapping {
        /// Kind of value found at the root.
        found: &'static str,
    },

    /// Error originating from a configuration fragment file.
    #[error("configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while gathering values or settings from figment providers.
    #[error("failed to gather configuration: {0}")]
    Gathering(#[from] Box<FigmentError>),
}
