//! Walks a merged value tree in lockstep with its parameter structure.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::sink::ParameterSink;
use crate::structure::{ParamEntry, ParamStructure};
use crate::template::{count_placeholders, substitute};
use crate::{FlattenError, FlattenResult};

/// Where a value key landed in the structure.
enum Target<'s> {
    /// Declared child.
    Declared(&'s ParamEntry),
    /// Runtime instance of the level's prototype.
    Instance(&'s ParamStructure),
}

fn lookup<'s>(structure: &'s ParamStructure, key: &str) -> Option<Target<'s>> {
    structure
        .get(key)
        .map(Target::Declared)
        .or_else(|| structure.prototype().map(Target::Instance))
}

/// Keyed members of a nested value collection; sequences are keyed by index.
fn members(value: &Value) -> Option<Vec<(Cow<'_, str>, &Value)>> {
    match value {
        Value::Object(map) => Some(
            map.iter()
                .map(|(key, member)| (Cow::Borrowed(key.as_str()), member))
                .collect(),
        ),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(index, member)| (Cow::Owned(index.to_string()), member))
                .collect(),
        ),
        _ => None,
    }
}

pub(crate) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Emits one parameter per terminal entry reached by the value tree.
pub(crate) struct Resolver<'a, S: ?Sized> {
    separator: &'a str,
    sink: &'a mut S,
    emitted: usize,
}

impl<'a, S: ParameterSink + ?Sized> Resolver<'a, S> {
    pub(crate) const fn new(separator: &'a str, sink: &'a mut S) -> Self {
        Self {
            separator,
            sink,
            emitted: 0,
        }
    }

    /// Number of parameters written so far.
    pub(crate) const fn emitted(&self) -> usize {
        self.emitted
    }

    /// Resolve a merged value tree whose root must be a mapping.
    pub(crate) fn resolve(&mut self, values: &Value, structure: &ParamStructure) -> FlattenResult<()> {
        if !values.is_object() {
            return Err(Arc::new(FlattenError::RootNotMapping {
                found: kind_of(values),
            }));
        }
        self.level(values, structure, &[])
    }

    fn level(
        &mut self,
        values: &Value,
        structure: &ParamStructure,
        instance_keys: &[String],
    ) -> FlattenResult<()> {
        let Some(entries) = members(values) else {
            return Ok(());
        };
        for (key, value) in entries {
            match lookup(structure, &key) {
                Some(Target::Declared(ParamEntry::Nested(nested))) => {
                    Self::require_collection(&key, value)?;
                    self.level(value, nested, instance_keys)?;
                }
                Some(Target::Instance(prototype)) => {
                    Self::require_collection(&key, value)?;
                    let mut scoped = instance_keys.to_vec();
                    scoped.push(key.clone().into_owned());
                    self.level(value, prototype, &scoped)?;
                }
                Some(Target::Declared(ParamEntry::Terminal(template))) => {
                    let name = if instance_keys.is_empty() {
                        template.clone()
                    } else {
                        let expected = instance_keys.len();
                        let found = count_placeholders(template, self.separator);
                        if found != expected {
                            return Err(Arc::new(FlattenError::prototype_count(
                                key, expected, found,
                            )));
                        }
                        substitute(template, self.separator, instance_keys)
                    };
                    self.emit(name, value);
                }
                None => return Err(Arc::new(FlattenError::unmapped(key))),
            }
        }
        Ok(())
    }

    fn require_collection(key: &str, value: &Value) -> FlattenResult<()> {
        if value.is_object() || value.is_array() {
            Ok(())
        } else {
            Err(Arc::new(FlattenError::type_mismatch(key)))
        }
    }

    fn emit(&mut self, name: String, value: &Value) {
        trace!(parameter = %name, "resolved parameter");
        self.sink.set_parameter(name, value.clone());
        self.emitted = self.emitted.saturating_add(1);
    }
}
