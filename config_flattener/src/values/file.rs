//! Reading configuration fragments from files.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

#[cfg(feature = "json5")]
use figment_json5::Json5;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde_json::Value;
use tracing::debug;

use crate::{FlattenError, FlattenResult};

/// Construct a [`FlattenError::File`] for a fragment path.
fn file_error(path: &Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<FlattenError> {
    Arc::new(FlattenError::File {
        path: path.to_path_buf(),
        source: err.into(),
    })
}

/// Parse fragment data according to the file extension.
///
/// JSON and JSON5 files require the `json5` feature; every other extension
/// is read as TOML.
fn parse_by_format(path: &Path, data: &str) -> FlattenResult<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json" | "json5") => {
            #[cfg(feature = "json5")]
            {
                Figment::from(Json5::string(data))
            }
            #[cfg(not(feature = "json5"))]
            {
                return Err(file_error(
                    path,
                    std::io::Error::other(
                        "json5 feature disabled: enable the 'json5' feature to support this file format",
                    ),
                ));
            }
        }
        _ => {
            // Validate first so parse failures carry this file's context.
            toml::from_str::<toml::Value>(data).map_err(|e| file_error(path, e))?;
            Figment::from(Toml::string(data))
        }
    };
    Ok(figment)
}

/// Load one configuration fragment from `path`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use config_flattener::values::load_fragment;
/// use std::path::Path;
///
/// # fn run() -> config_flattener::FlattenResult<()> {
/// if let Some(fragment) = load_fragment(Path::new("config.toml"))? {
///     assert!(fragment.is_object());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`FlattenError::File`] if reading or parsing the file fails.
pub fn load_fragment(path: &Path) -> FlattenResult<Option<Value>> {
    if !path.is_file() {
        return Ok(None);
    }
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    let figment = parse_by_format(path, &data)?;
    let value: Value = figment
        .extract()
        .map_err(|e| file_error(path, e.to_string()))?;
    debug!(path = %path.display(), "loaded configuration fragment");
    Ok(Some(value))
}
