//! Schema trees describing the shape of a configuration.
//!
//! A [`SchemaNode`] tree carries structure only: names, joined paths and the
//! kind of every node. Trees are usually produced by a [`TreeBuilder`] from
//! path-less [`NodeDefinition`]s so that every joined path uses the same
//! separator the flattener substitutes with.
//!
//! # Example
//!
//! ```rust
//! use config_flattener::schema::{NodeDefinition, TreeBuilder};
//!
//! let root = NodeDefinition::array(
//!     "app",
//!     [NodeDefinition::array("db", [NodeDefinition::scalar("host")])],
//! );
//! let tree = TreeBuilder::new(root).build()?;
//! let host = tree.children()[0].children()[0].path();
//! assert_eq!(host, "app.db.host");
//! # Ok::<_, std::sync::Arc<config_flattener::FlattenError>>(())
//! ```

mod definition;
mod node;

pub use definition::{NodeDefinition, TreeBuilder};
pub use node::{ArrayNode, PrototypedArrayNode, ScalarNode, SchemaNode};

/// Separator used to join node paths when none is configured.
pub const DEFAULT_PATH_SEPARATOR: &str = ".";

#[cfg(test)]
mod tests;
