// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod resolution;

pub use resolution::{FileResolver, StdinResolver, resolver_for};
