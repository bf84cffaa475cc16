//! Assertions over flattened parameter maps.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde_json::Value;

/// Flat parameters keyed by name.
pub type ParamMap = BTreeMap<String, Value>;

/// Check that `actual` holds exactly the `expected` name/value pairs.
///
/// # Errors
///
/// Returns an error listing missing, unexpected and differing parameters.
pub fn expect_params(actual: &ParamMap, expected: &[(&str, Value)]) -> Result<()> {
    let wanted: ParamMap = expected
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect();
    let missing: Vec<&str> = wanted
        .keys()
        .filter(|name| !actual.contains_key(*name))
        .map(String::as_str)
        .collect();
    let unexpected: Vec<&str> = actual
        .keys()
        .filter(|name| !wanted.contains_key(*name))
        .map(String::as_str)
        .collect();
    let differing: Vec<String> = wanted
        .iter()
        .filter_map(|(name, value)| {
            actual
                .get(name)
                .filter(|found| *found != value)
                .map(|found| format!("{name}: expected {value}, found {found}"))
        })
        .collect();
    if missing.is_empty() && unexpected.is_empty() && differing.is_empty() {
        return Ok(());
    }
    bail!(
        "parameter mismatch; missing: {missing:?}; unexpected: {unexpected:?}; differing: {differing:?}"
    )
}

/// Names in `params`, in map order.
#[must_use]
pub fn names(params: &ParamMap) -> Vec<&str> {
    params.keys().map(String::as_str).collect()
}
