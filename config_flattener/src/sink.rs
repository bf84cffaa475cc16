//! Destinations for resolved parameters.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A resolved flat parameter.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Parameter {
    /// Flat parameter name.
    pub name: String,
    /// Value stored verbatim from the merged value tree.
    pub value: Value,
}

impl Parameter {
    /// Create a parameter from a name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Receives every resolved parameter exactly once, as it is resolved.
///
/// Implementations are single-writer; duplicate names follow last-write-wins
/// semantics.
pub trait ParameterSink {
    /// Store `value` under `name`.
    fn set_parameter(&mut self, name: String, value: Value);
}

impl<S: ParameterSink + ?Sized> ParameterSink for &mut S {
    fn set_parameter(&mut self, name: String, value: Value) {
        (**self).set_parameter(name, value);
    }
}

impl ParameterSink for BTreeMap<String, Value> {
    fn set_parameter(&mut self, name: String, value: Value) {
        if let Some(previous) = self.insert(name, value) {
            warn!(?previous, "parameter overwritten by a later write");
        }
    }
}

impl<H: BuildHasher> ParameterSink for HashMap<String, Value, H> {
    fn set_parameter(&mut self, name: String, value: Value) {
        if let Some(previous) = self.insert(name, value) {
            warn!(?previous, "parameter overwritten by a later write");
        }
    }
}

impl ParameterSink for Vec<Parameter> {
    fn set_parameter(&mut self, name: String, value: Value) {
        self.push(Parameter { name, value });
    }
}
