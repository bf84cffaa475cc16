//! Flattening entrypoint tying schema structures to value resolution.

use tracing::debug;

use serde_json::Value;

use crate::FlattenResult;
use crate::config::FlattenerConfig;
use crate::resolve::Resolver;
use crate::schema::{NodeDefinition, SchemaNode, TreeBuilder};
use crate::sink::{Parameter, ParameterSink};
use crate::structure::{ParamStructure, StructureBuilder};

/// Maps a schema tree and its merged values onto flat parameters.
///
/// Each call builds the parameter structure afresh, then resolves the values
/// against it. The first structural error aborts the call; parameters written
/// to the sink before the error remain written, so callers should treat the
/// whole load as failed.
///
/// # Examples
///
/// ```
/// use config_flattener::ConfigFlattener;
/// use config_flattener::schema::NodeDefinition;
/// use serde_json::json;
///
/// let flattener = ConfigFlattener::default();
/// let schema = flattener.tree_builder(NodeDefinition::array(
///     "app",
///     [NodeDefinition::prototyped(
///         "items",
///         NodeDefinition::array("item", [NodeDefinition::scalar("name")]).force_flatten(),
///     )],
/// )).build()?;
/// let values = json!({"items": {"a": {"name": "first"}, "b": {"name": "second"}}});
///
/// let params = flattener.flatten(&schema, &values)?;
/// let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["app.items.a.name", "app.items.b.name"]);
/// # Ok::<_, std::sync::Arc<config_flattener::FlattenError>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigFlattener {
    config: FlattenerConfig,
}

impl ConfigFlattener {
    /// Create a flattener from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlattenError::InvalidSeparator`] when the separator
    /// is empty.
    pub fn new(config: FlattenerConfig) -> FlattenResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Settings in use.
    #[must_use]
    pub const fn config(&self) -> &FlattenerConfig {
        &self.config
    }

    /// A tree builder joining paths with this flattener's separator.
    #[must_use]
    pub fn tree_builder(&self, root: NodeDefinition) -> TreeBuilder {
        TreeBuilder::new(root).with_separator(self.config.path_separator.clone())
    }

    /// Build the parameter structure for `schema`.
    #[must_use]
    pub fn structure(&self, schema: &SchemaNode) -> ParamStructure {
        StructureBuilder::new(self.config.max_param_depth).build(schema)
    }

    /// Flatten `values` into `sink`, returning the number of parameters
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlattenError::RootNotMapping`] when `values` is not
    /// a mapping, and the structural errors described on
    /// [`crate::FlattenError`] when `values` drifts from `schema`.
    pub fn flatten_into<S>(
        &self,
        schema: &SchemaNode,
        values: &Value,
        sink: &mut S,
    ) -> FlattenResult<usize>
    where
        S: ParameterSink + ?Sized,
    {
        let structure = self.structure(schema);
        let mut resolver = Resolver::new(&self.config.path_separator, sink);
        resolver.resolve(values, &structure)?;
        let emitted = resolver.emitted();
        debug!(root = schema.path(), parameters = emitted, "flattened configuration");
        Ok(emitted)
    }

    /// Flatten `values` into a vector, in resolution order.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::flatten_into`].
    pub fn flatten(&self, schema: &SchemaNode, values: &Value) -> FlattenResult<Vec<Parameter>> {
        let mut params = Vec::new();
        self.flatten_into(schema, values, &mut params)?;
        Ok(params)
    }
}
