//! Merging raw configuration fragments into one value tree.
//!
//! Fragments arrive in precedence order, lowest first, from inline values
//! or files. They are overlaid with [`merge_value`] so later fragments win
//! key by key while sibling keys survive.
//!
//! # Example
//!
//! ```rust
//! use config_flattener::values::FragmentComposer;
//! use serde_json::json;
//!
//! let mut composer = FragmentComposer::new();
//! composer.push(json!({"db": {"host": "localhost", "port": 5432}}));
//! composer.push(json!({"db": {"host": "db.internal"}}));
//!
//! assert_eq!(
//!     composer.merged(),
//!     json!({"db": {"host": "db.internal", "port": 5432}})
//! );
//! ```

mod composer;
mod file;
mod merge;

pub use composer::{Fragment, FragmentComposer, FragmentSource};
pub use file::load_fragment;
pub use merge::merge_value;

#[cfg(test)]
mod tests;
