//! Bridges `FlattenResult` into `figment::Jail` closures.
//!
//! # Examples
//!
//! ```
//! use config_flattener::{FlattenerConfig, ResultIntoFigment};
//!
//! figment::Jail::expect_with(|jail| {
//!     jail.set_env("FLATTENER_MAX_PARAM_DEPTH", "2");
//!     let config = FlattenerConfig::load_from_env("FLATTENER_").to_figment()?;
//!     assert_eq!(config.max_param_depth, 2);
//!     Ok(())
//! });
//! ```

use std::sync::Arc;

use crate::FlattenResult;

/// Converts `FlattenResult<T>` into `Result<T, figment::Error>`.
pub trait ResultIntoFigment<T> {
    /// Map the shared error into a `figment::Error`.
    ///
    /// A uniquely held gathering error is unwrapped back into the figment
    /// error it came from; anything else keeps its message.
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn to_figment(self) -> Result<T, figment::Error>;
}

impl<T> ResultIntoFigment<T> for FlattenResult<T> {
    fn to_figment(self) -> Result<T, figment::Error> {
        self.map_err(|shared| {
            Arc::try_unwrap(shared).map_or_else(
                |still_shared| figment::Error::from(still_shared.to_string()),
                figment::Error::from,
            )
        })
    }
}
