mod content;
mod kind;
mod result;

pub use content::ContentUnit;
pub use kind::{CountKind, CountRequest};
pub use result::{CountEntry, CountResult};
