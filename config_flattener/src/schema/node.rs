//! Schema node types.

/// A node of a configuration schema tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaNode {
    /// A leaf holding a single value.
    Scalar(ScalarNode),
    /// A fixed collection of named children.
    Array(ArrayNode),
    /// A repeatable collection whose instance keys are only known from values.
    Prototyped(PrototypedArrayNode),
}

/// Leaf node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarNode {
    name: String,
    path: String,
}

impl ScalarNode {
    /// Create a scalar node from its name and fully joined path.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Node with a fixed, ordered set of named children.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArrayNode {
    name: String,
    path: String,
    children: Vec<SchemaNode>,
    force_flatten: bool,
}

impl ArrayNode {
    /// Create an array node from its name, joined path and children.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, children: Vec<SchemaNode>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            children,
            force_flatten: false,
        }
    }

    /// Mark the node as force-flattened.
    ///
    /// The flag only matters when the node is the prototype of a
    /// [`PrototypedArrayNode`]: it lets the instances be split into
    /// per-field parameters instead of one opaque parameter, regardless of
    /// the depth limit.
    #[must_use]
    pub fn with_force_flatten(mut self, force_flatten: bool) -> Self {
        self.force_flatten = force_flatten;
        self
    }

    /// Children in declaration order.
    #[must_use]
    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }
}

/// Repeatable node; every instance shares the prototype's shape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrototypedArrayNode {
    name: String,
    path: String,
    prototype: Box<SchemaNode>,
    force_flatten: bool,
}

impl PrototypedArrayNode {
    /// Create a prototyped node from its name, joined path and prototype.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, prototype: SchemaNode) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            prototype: Box::new(prototype),
            force_flatten: false,
        }
    }

    /// Mark the node as force-flattened; see [`ArrayNode::with_force_flatten`].
    #[must_use]
    pub fn with_force_flatten(mut self, force_flatten: bool) -> Self {
        self.force_flatten = force_flatten;
        self
    }

    /// Shared shape of every instance.
    #[must_use]
    pub fn prototype(&self) -> &SchemaNode {
        &self.prototype
    }
}

impl SchemaNode {
    /// Name of the node within its parent. Prototypes have an empty name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(node) => &node.name,
            Self::Array(node) => &node.name,
            Self::Prototyped(node) => &node.name,
        }
    }

    /// Fully joined path of the node.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Scalar(node) => &node.path,
            Self::Array(node) => &node.path,
            Self::Prototyped(node) => &node.path,
        }
    }

    /// Whether the node is an array or a prototyped array.
    #[must_use]
    pub const fn is_array_kind(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Prototyped(_))
    }

    /// Whether the node carries the force-flatten attribute.
    #[must_use]
    pub const fn force_flatten(&self) -> bool {
        match self {
            Self::Scalar(_) => false,
            Self::Array(node) => node.force_flatten,
            Self::Prototyped(node) => node.force_flatten,
        }
    }

    /// Children of an array node; empty for the other kinds.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Array(node) => node.children(),
            Self::Scalar(_) | Self::Prototyped(_) => &[],
        }
    }

    /// Prototype of a prototyped array node.
    #[must_use]
    pub fn prototype(&self) -> Option<&Self> {
        match self {
            Self::Prototyped(node) => Some(node.prototype()),
            Self::Scalar(_) | Self::Array(_) => None,
        }
    }
}

impl From<ScalarNode> for SchemaNode {
    fn from(node: ScalarNode) -> Self {
        Self::Scalar(node)
    }
}

impl From<ArrayNode> for SchemaNode {
    fn from(node: ArrayNode) -> Self {
        Self::Array(node)
    }
}

impl From<PrototypedArrayNode> for SchemaNode {
    fn from(node: PrototypedArrayNode) -> Self {
        Self::Prototyped(node)
    }
}
