//! Extension trait loading configuration fragments into a parameter sink.

use serde_json::Value;
use tracing::debug;

use crate::FlattenResult;
use crate::config::FlattenerConfig;
use crate::flattener::ConfigFlattener;
use crate::schema::NodeDefinition;
use crate::sink::ParameterSink;
use crate::values::FragmentComposer;

/// Trait implemented by components that turn their configuration into flat
/// container parameters automatically.
///
/// Implementors describe the schema; the provided [`Self::load`] builds the
/// schema tree with the configured separator, merges the fragments in order
/// and writes every resolved parameter to the sink.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use config_flattener::ParameterExtension;
/// use config_flattener::schema::NodeDefinition;
/// use serde_json::{Value, json};
///
/// struct Mailer;
///
/// impl ParameterExtension for Mailer {
///     fn schema(&self) -> NodeDefinition {
///         NodeDefinition::array(
///             "mailer",
///             [NodeDefinition::scalar("dsn"), NodeDefinition::scalar("sender")],
///         )
///     }
/// }
///
/// let mut params: BTreeMap<String, Value> = BTreeMap::new();
/// Mailer.load(
///     [json!({"dsn": "smtp://localhost", "sender": "a@example.com"}),
///      json!({"sender": "b@example.com"})],
///     &mut params,
/// )?;
/// assert_eq!(params["mailer.sender"], json!("b@example.com"));
/// # Ok::<_, std::sync::Arc<config_flattener::FlattenError>>(())
/// ```
pub trait ParameterExtension {
    /// Root definition of the configuration schema.
    fn schema(&self) -> NodeDefinition;

    /// Flattening settings; defaults to [`FlattenerConfig::default`].
    fn config(&self) -> FlattenerConfig {
        FlattenerConfig::default()
    }

    /// Merge `fragments` in order and write the flattened parameters to
    /// `sink`, returning the number written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlattenError::InvalidSeparator`] for unusable
    /// settings and any error raised by [`ConfigFlattener::flatten_into`].
    fn load<I, S>(&self, fragments: I, sink: &mut S) -> FlattenResult<usize>
    where
        I: IntoIterator<Item = Value>,
        S: ParameterSink + ?Sized,
    {
        let composer: FragmentComposer = fragments.into_iter().collect();
        self.load_composed(&composer, sink)
    }

    /// Like [`Self::load`], for fragments already gathered in a composer.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::load`].
    fn load_composed<S>(&self, composer: &FragmentComposer, sink: &mut S) -> FlattenResult<usize>
    where
        S: ParameterSink + ?Sized,
    {
        let flattener = ConfigFlattener::new(self.config())?;
        let schema = flattener.tree_builder(self.schema()).build()?;
        debug!(
            root = schema.name(),
            fragments = composer.len(),
            "loading configuration parameters"
        );
        flattener.flatten_into(&schema, &composer.merged(), sink)
    }
}
