//! Walks a schema tree once to build its [`ParamStructure`].

use tracing::debug;

use crate::schema::SchemaNode;

use super::{ParamEntry, ParamStructure};

/// Builds parameter structures under a depth limit.
///
/// Depth advances by one for every array level descended, and only when the
/// limit is non-zero. An array child is split while its depth stays within
/// the limit. A prototyped child is split only when its prototype is
/// array-kind and force-flattened; that split ignores the limit. A limit of
/// zero disables splitting: every child of the root is terminal.
#[derive(Clone, Copy, Debug)]
pub struct StructureBuilder {
    max_depth: usize,
}

impl StructureBuilder {
    /// Create a builder with the given depth limit.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Build the structure for `root`.
    ///
    /// A scalar root yields an empty structure.
    #[must_use]
    pub fn build(&self, root: &SchemaNode) -> ParamStructure {
        let structure = self.level(root, 0);
        debug!(
            max_depth = self.max_depth,
            entries = structure.len(),
            terminals = structure.terminal_count(),
            prototyped = structure.is_prototyped(),
            "built parameter structure"
        );
        structure
    }

    const fn descend(&self, depth: usize) -> usize {
        if self.max_depth > 0 {
            depth.saturating_add(1)
        } else {
            depth
        }
    }

    fn level(&self, node: &SchemaNode, depth: usize) -> ParamStructure {
        match node {
            SchemaNode::Scalar(_) => ParamStructure::default(),
            SchemaNode::Array(array) => {
                let depth = self.descend(depth);
                array
                    .children()
                    .iter()
                    .map(|child| (child.name().to_owned(), self.entry(child, depth)))
                    .collect()
            }
            SchemaNode::Prototyped(prototyped) => {
                ParamStructure::prototyped(self.level(prototyped.prototype(), depth))
            }
        }
    }

    fn entry(&self, child: &SchemaNode, depth: usize) -> ParamEntry {
        if self.splits(child, depth) {
            ParamEntry::Nested(self.level(child, depth))
        } else {
            ParamEntry::Terminal(child.path().to_owned())
        }
    }

    fn splits(&self, child: &SchemaNode, depth: usize) -> bool {
        if self.max_depth == 0 {
            return false;
        }
        match child {
            SchemaNode::Scalar(_) => false,
            SchemaNode::Array(_) => depth <= self.max_depth,
            SchemaNode::Prototyped(prototyped) => {
                let prototype = prototyped.prototype();
                prototype.is_array_kind() && prototype.force_flatten()
            }
        }
    }
}
