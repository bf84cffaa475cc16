//! Flatten hierarchical configuration into container parameters.
//!
//! A configuration is described twice: once as a [`schema::SchemaNode`]
//! tree holding structure only, and once as the merged value tree holding
//! the values. [`ConfigFlattener`] walks the schema to build a
//! [`structure::ParamStructure`], then walks the values in lockstep with it
//! and writes one flat parameter per leaf to a [`ParameterSink`].
//!
//! Repeatable ("prototyped") arrays are keyed at runtime. Their descendants'
//! joined paths carry a doubled separator for every instance key, e.g.
//! `app.servers..host`, which is replaced by the key when values are
//! resolved: `app.servers.primary.host`.
//!
//! Arrays deeper than [`FlattenerConfig::max_param_depth`] are not split: the
//! whole value beneath becomes a single parameter. Prototypes only split when
//! their element schema opts in with the force-flatten attribute.

mod config;
mod error;
mod extension;
mod flattener;
mod resolve;
mod result_ext;
pub mod schema;
mod sink;
pub mod structure;
pub mod template;
pub mod values;

use std::sync::Arc;

pub use config::FlattenerConfig;
pub use error::FlattenError;
pub use extension::ParameterExtension;
pub use flattener::ConfigFlattener;
pub use result_ext::ResultIntoFigment;
pub use sink::{Parameter, ParameterSink};

/// Result type used throughout the crate.
pub type FlattenResult<T> = Result<T, Arc<FlattenError>>;
