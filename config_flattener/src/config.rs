//! Settings controlling how schemas are flattened.

use std::sync::Arc;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::schema::DEFAULT_PATH_SEPARATOR;
use crate::{FlattenError, FlattenResult};

/// Settings for a [`crate::ConfigFlattener`].
///
/// Missing fields fall back to their defaults when deserialised.
///
/// # Examples
///
/// ```
/// use config_flattener::FlattenerConfig;
///
/// let config = FlattenerConfig::default();
/// assert_eq!(config.max_param_depth, 3);
/// assert_eq!(config.path_separator, ".");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct FlattenerConfig {
    /// Number of array levels split into separate parameters. Deeper arrays
    /// become one parameter holding the whole subtree; zero keeps every
    /// child of the root whole.
    pub max_param_depth: usize,
    /// Separator joining schema paths; must match the schema's own.
    pub path_separator: String,
}

impl Default for FlattenerConfig {
    fn default() -> Self {
        Self {
            max_param_depth: Self::DEFAULT_MAX_PARAM_DEPTH,
            path_separator: DEFAULT_PATH_SEPARATOR.to_owned(),
        }
    }
}

impl FlattenerConfig {
    /// Depth limit applied when none is configured.
    pub const DEFAULT_MAX_PARAM_DEPTH: usize = 3;

    /// Create settings from explicit values.
    #[must_use]
    pub fn new(max_param_depth: usize, path_separator: impl Into<String>) -> Self {
        Self {
            max_param_depth,
            path_separator: path_separator.into(),
        }
    }

    /// Settings that split every array level.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_param_depth: usize::MAX,
            ..Self::default()
        }
    }

    /// Check the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::InvalidSeparator`] when the separator is empty.
    pub fn validate(&self) -> FlattenResult<()> {
        if self.path_separator.is_empty() {
            return Err(Arc::new(FlattenError::InvalidSeparator));
        }
        Ok(())
    }

    /// Extract and validate settings from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::Gathering`] when extraction fails and
    /// [`FlattenError::InvalidSeparator`] when the separator is empty.
    pub fn from_figment(figment: &Figment) -> FlattenResult<Self> {
        let config: Self = figment.extract().map_err(FlattenError::gathering_arc)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from environment variables carrying `prefix`, layered
    /// over the defaults.
    ///
    /// With the prefix `APP_`, `APP_MAX_PARAM_DEPTH=5` sets the depth limit
    /// and `APP_PATH_SEPARATOR=/` the separator.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::from_figment`].
    pub fn load_from_env(prefix: &str) -> FlattenResult<Self> {
        let figment = Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(prefix));
        Self::from_figment(&figment)
    }
}
