#![allow(clippy::multiple_crate_versions)]

pub mod counting;
pub mod model;

pub use model::{ContentUnit, CountEntry, CountKind, CountRequest, CountResult};
