//! Ordered accumulation of configuration fragments.

use std::fmt;
use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use tracing::debug;

use crate::FlattenResult;

use super::file::load_fragment;
use super::merge::overlay;

/// Origin of a fragment.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum FragmentSource {
    /// Supplied directly by the caller.
    Inline,
    /// Read from a configuration file.
    File(Utf8PathBuf),
}

impl fmt::Display for FragmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("inline"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

/// One raw configuration fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    source: FragmentSource,
    value: Value,
}

impl Fragment {
    /// Fragment supplied directly by the caller.
    #[must_use]
    pub const fn inline(value: Value) -> Self {
        Self {
            source: FragmentSource::Inline,
            value,
        }
    }

    /// Fragment read from `path`.
    #[must_use]
    pub const fn file(value: Value, path: Utf8PathBuf) -> Self {
        Self {
            source: FragmentSource::File(path),
            value,
        }
    }

    /// Where the fragment came from.
    #[must_use]
    pub const fn source(&self) -> &FragmentSource {
        &self.source
    }

    /// Path of a file fragment.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match &self.source {
            FragmentSource::File(path) => Some(path),
            FragmentSource::Inline => None,
        }
    }

    /// Borrow the fragment's value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Take the fragment's value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Builder that accumulates fragments in precedence order, lowest first.
#[derive(Clone, Debug, Default)]
pub struct FragmentComposer {
    fragments: Vec<Fragment>,
}

impl FragmentComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Push an inline fragment.
    pub fn push(&mut self, value: Value) {
        self.push_fragment(Fragment::inline(value));
    }

    /// Push a prepared fragment.
    pub fn push_fragment(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Read `path` and push it as a fragment.
    ///
    /// Returns `Ok(false)` without pushing anything when the file does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlattenError::File`] when the file cannot be read or
    /// parsed.
    pub fn push_file(&mut self, path: &Path) -> FlattenResult<bool> {
        let Some(value) = load_fragment(path)? else {
            debug!(path = %path.display(), "configuration fragment not found");
            return Ok(false);
        };
        let utf8 = Utf8PathBuf::from_path_buf(path.to_path_buf())
            .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()));
        self.push_fragment(Fragment::file(value, utf8));
        Ok(true)
    }

    /// Fragments in push order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments pushed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragments were pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Overlay every fragment in order. No fragments yield an empty mapping.
    #[must_use]
    pub fn merged(&self) -> Value {
        let mut merged = Value::Object(Map::new());
        for fragment in &self.fragments {
            overlay(
                &mut merged,
                fragment.value.clone(),
                &fragment.source,
                &mut Vec::new(),
            );
        }
        merged
    }
}

impl Extend<Value> for FragmentComposer {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.fragments.extend(iter.into_iter().map(Fragment::inline));
    }
}

impl FromIterator<Value> for FragmentComposer {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut composer = Self::new();
        composer.extend(iter);
        composer
    }
}

impl IntoIterator for FragmentComposer {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}
