//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`engine`]: Resolves content per requested kind and assembles the
//!   ordered result
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod engine;

pub use engine::{CountContent, count};
