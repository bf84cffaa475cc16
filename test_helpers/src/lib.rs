//! Test helpers shared across crates.
//!
//! This crate provides `figment::Jail` plumbing and assertions over flat
//! parameter maps.

pub mod figment;
pub mod params;
