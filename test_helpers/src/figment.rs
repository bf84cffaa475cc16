//! `figment::Jail` plumbing for fragment and environment tests.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use figment::Jail;

/// Runs `body` in a fresh jail and hands back what it produced.
///
/// # Errors
///
/// Returns the jail's error message when `body` fails.
pub fn with_jail<T>(body: impl FnOnce(&mut Jail) -> figment::error::Result<T>) -> Result<T> {
    let mut produced = None;
    Jail::try_with(|jail| body(jail).map(|value| produced = Some(value)))
        .map_err(|err| anyhow!("jail failed: {err}"))?;
    produced.context("jail body returned no value")
}

/// Writes a configuration fragment into the jail's directory and returns
/// its absolute path.
///
/// # Errors
///
/// Returns the jail's error when the file cannot be created.
pub fn write_fragment(jail: &Jail, name: &str, contents: &str) -> figment::error::Result<PathBuf> {
    jail.create_file(name, contents)?;
    Ok(jail.directory().join(name))
}
