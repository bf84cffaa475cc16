//! Parameter path structures derived from schema trees.
//!
//! A [`ParamStructure`] mirrors one level of a schema tree, pruned to what
//! the resolver needs: every named child is either a terminal entry holding
//! the flat parameter name (possibly with instance-key placeholders) or a
//! nested structure that is split further. A structure built from a
//! prototyped array additionally carries a prototype fallback used for keys
//! that only exist at runtime.

mod builder;

use std::collections::BTreeMap;

pub use builder::StructureBuilder;

/// Entry stored under a child name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamEntry {
    /// Flat parameter name template; the whole value beneath becomes one
    /// parameter.
    Terminal(String),
    /// Nested structure split into further parameters.
    Nested(ParamStructure),
}

/// One level of the parameter path structure.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParamStructure {
    entries: BTreeMap<String, ParamEntry>,
    prototype: Option<Box<ParamStructure>>,
}

impl ParamStructure {
    /// A level whose keys are all runtime instance keys sharing `prototype`.
    #[must_use]
    pub fn prototyped(prototype: Self) -> Self {
        Self {
            entries: BTreeMap::new(),
            prototype: Some(Box::new(prototype)),
        }
    }

    /// Insert an entry under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: ParamEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Entry declared under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamEntry> {
        self.entries.get(name)
    }

    /// Prototype fallback for undeclared keys, if this level has one.
    #[must_use]
    pub fn prototype(&self) -> Option<&Self> {
        self.prototype.as_deref()
    }

    /// Whether this level was built from a prototyped array.
    #[must_use]
    pub const fn is_prototyped(&self) -> bool {
        self.prototype.is_some()
    }

    /// Named entries in lexical order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ParamEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of named entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the level has neither named entries nor a prototype.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.prototype.is_none()
    }

    /// Count terminal entries reachable from this level, prototypes included.
    #[must_use]
    pub fn terminal_count(&self) -> usize {
        let named: usize = self
            .entries
            .values()
            .map(|entry| match entry {
                ParamEntry::Terminal(_) => 1,
                ParamEntry::Nested(nested) => nested.terminal_count(),
            })
            .sum();
        named + self.prototype().map_or(0, Self::terminal_count)
    }
}

impl FromIterator<(String, ParamEntry)> for ParamStructure {
    fn from_iter<I: IntoIterator<Item = (String, ParamEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            prototype: None,
        }
    }
}
