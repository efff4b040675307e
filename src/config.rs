// src/config.rs
use ccwc_domain::CountRequest;
use ccwc_ports::SourceDesignator;
use ccwc_shared_kernel::DomainError;

use crate::{args::Invocation, options::OutputFormat};

/// Everything one run needs, passed explicitly to [`crate::app::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub request: CountRequest,
    pub source: SourceDesignator,
    pub format: OutputFormat,
}

impl TryFrom<Invocation> for Config {
    type Error = DomainError;

    fn try_from(invocation: Invocation) -> Result<Self, Self::Error> {
        let source = match invocation.args.file {
            None => SourceDesignator::Stdin,
            Some(name) if name == "-" => SourceDesignator::Stdin,
            Some(name) => SourceDesignator::file(name)?,
        };

        Ok(Self { request: invocation.request, source, format: invocation.args.format })
    }
}
