//! Error types produced while flattening configuration into parameters.

mod constructors;
mod conversions;
mod types;

pub use types::FlattenError;
