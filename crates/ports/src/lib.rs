//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: Where the input comes from and how it is resolved into
//!   content for each counting kind
//!
//! These ports allow the engine to stay independent of the filesystem and
//! of the process's standard input.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::{ContentResolver, SourceDesignator};
