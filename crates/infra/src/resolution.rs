//! Resolvers turning a [`SourceDesignator`] into content.

mod file;
mod stdin;

use ccwc_domain::{ContentUnit, CountKind};
use ccwc_ports::{ContentResolver, SourceDesignator};
use ccwc_shared_kernel::{InfraResult, InfrastructureError};

pub use file::FileResolver;
pub use stdin::StdinResolver;

/// Build the resolver matching `source`, binding stdin to the process's standard input.
pub fn resolver_for(source: SourceDesignator) -> Box<dyn ContentResolver> {
    match source {
        SourceDesignator::File(path) => Box::new(FileResolver::new(path)),
        SourceDesignator::Stdin => Box::new(StdinResolver::new(std::io::stdin())),
    }
}

/// Shape raw input for `kind`: untouched bytes, or strict UTF-8 text.
fn into_content(bytes: Vec<u8>, kind: CountKind, source: &SourceDesignator) -> InfraResult<ContentUnit> {
    if kind.is_raw() {
        return Ok(ContentUnit::Bytes(bytes));
    }
    String::from_utf8(bytes).map(ContentUnit::Text).map_err(|source_err| {
        let offset = source_err.utf8_error().valid_up_to();
        InfrastructureError::Decoding {
            source_name: source.to_string(),
            offset,
            source: source_err,
        }
    })
}
