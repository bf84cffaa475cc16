//! Path-less node definitions and the builder that joins their paths.

use std::sync::Arc;

use crate::{FlattenError, FlattenResult};

use super::DEFAULT_PATH_SEPARATOR;
use super::node::{ArrayNode, PrototypedArrayNode, ScalarNode, SchemaNode};

#[derive(Clone, Debug)]
enum DefinitionKind {
    Scalar,
    Array(Vec<NodeDefinition>),
    Prototyped(Box<NodeDefinition>),
}

/// Definition of a schema node before its path is known.
#[derive(Clone, Debug)]
pub struct NodeDefinition {
    name: String,
    kind: DefinitionKind,
    force_flatten: bool,
}

impl NodeDefinition {
    /// Define a scalar leaf.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DefinitionKind::Scalar,
            force_flatten: false,
        }
    }

    /// Define an array node with the given children.
    #[must_use]
    pub fn array<I>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self {
            name: name.into(),
            kind: DefinitionKind::Array(children.into_iter().collect()),
            force_flatten: false,
        }
    }

    /// Define a prototyped array node.
    ///
    /// The prototype's own name is discarded: prototypes are nameless so the
    /// joined paths of their descendants contain a doubled separator where
    /// the instance key belongs.
    #[must_use]
    pub fn prototyped(name: impl Into<String>, prototype: Self) -> Self {
        Self {
            name: name.into(),
            kind: DefinitionKind::Prototyped(Box::new(prototype)),
            force_flatten: false,
        }
    }

    /// Append a child to an array definition.
    ///
    /// Children added to scalar or prototyped definitions are ignored.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        if let DefinitionKind::Array(children) = &mut self.kind {
            children.push(child);
        }
        self
    }

    /// Attach the force-flatten attribute to this definition.
    ///
    /// Only array-kind definitions used as prototypes are affected.
    #[must_use]
    pub fn force_flatten(mut self) -> Self {
        self.force_flatten = true;
        self
    }

    /// Name of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    const fn is_split_prototype(&self) -> bool {
        matches!(self.kind, DefinitionKind::Prototyped(_)) && self.force_flatten
    }

    fn materialise(
        &self,
        name: &str,
        parent: Option<&str>,
        separator: &str,
    ) -> FlattenResult<SchemaNode> {
        let path = parent.map_or_else(|| name.to_owned(), |p| format!("{p}{separator}{name}"));
        let node = match &self.kind {
            DefinitionKind::Scalar => ScalarNode::new(name, path).into(),
            DefinitionKind::Array(children) => {
                let nodes = children
                    .iter()
                    .map(|child| child.materialise(&child.name, Some(&path), separator))
                    .collect::<FlattenResult<Vec<_>>>()?;
                ArrayNode::new(name, path, nodes)
                    .with_force_flatten(self.force_flatten)
                    .into()
            }
            DefinitionKind::Prototyped(prototype) => {
                // Two nameless levels in a row join into a single placeholder.
                if prototype.is_split_prototype() {
                    return Err(Arc::new(FlattenError::NestedPrototype { path }));
                }
                let node = prototype.materialise("", Some(&path), separator)?;
                PrototypedArrayNode::new(name, path, node)
                    .with_force_flatten(self.force_flatten)
                    .into()
            }
        };
        Ok(node)
    }
}

/// Builds a [`SchemaNode`] tree from a root [`NodeDefinition`].
///
/// Every path is joined with the builder's separator. The root's path is its
/// own name; each child appends `separator + name` to its parent's path.
#[derive(Clone, Debug)]
pub struct TreeBuilder {
    root: NodeDefinition,
    separator: String,
}

impl TreeBuilder {
    /// Create a builder using [`DEFAULT_PATH_SEPARATOR`].
    #[must_use]
    pub fn new(root: NodeDefinition) -> Self {
        Self {
            root,
            separator: DEFAULT_PATH_SEPARATOR.to_owned(),
        }
    }

    /// Override the separator used to join paths.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Separator used to join paths.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Build the schema tree.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::InvalidSeparator`] when the separator is empty
    /// and [`FlattenError::NestedPrototype`] when a prototype is itself a
    /// force-flattened prototype.
    pub fn build(&self) -> FlattenResult<SchemaNode> {
        if self.separator.is_empty() {
            return Err(Arc::new(FlattenError::InvalidSeparator));
        }
        self.root.materialise(&self.root.name, None, &self.separator)
    }
}
