//! Constructors for `FlattenError` used across the crate.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::FlattenError;

impl FlattenError {
    /// Construct an [`FlattenError::UnmappedKey`] for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_flattener::FlattenError;
    /// let err = FlattenError::unmapped("colour");
    /// assert!(err.to_string().contains("\"colour\""));
    /// ```
    #[must_use]
    pub fn unmapped(key: impl Into<String>) -> Self {
        Self::UnmappedKey { key: key.into() }
    }

    /// Construct an [`FlattenError::TypeMismatch`] for `key`.
    #[must_use]
    pub fn type_mismatch(key: impl Into<String>) -> Self {
        Self::TypeMismatch { key: key.into() }
    }

    /// Construct an [`FlattenError::PrototypeCountMismatch`].
    #[must_use]
    pub fn prototype_count(key: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::PrototypeCountMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use config_flattener::FlattenError;
    /// let fe = figment::Error::from("boom");
    /// let e = FlattenError::gathering(fe);
    /// assert!(matches!(e, FlattenError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct a gathering error wrapped in an [`Arc`].
    #[must_use]
    pub fn gathering_arc(source: FigmentError) -> Arc<Self> {
        Arc::new(Self::gathering(source))
    }

    /// Returns `true` for the structural variants raised while resolving a
    /// value tree against a schema.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::UnmappedKey { .. }
                | Self::TypeMismatch { .. }
                | Self::PrototypeCountMismatch { .. }
        )
    }
}
