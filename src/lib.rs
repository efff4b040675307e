// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod options;
pub mod presentation;

pub use ccwc_domain::{CountKind, CountRequest, CountResult};
pub use ccwc_ports::SourceDesignator;
pub use ccwc_shared_kernel::{CcwcError, Result};
