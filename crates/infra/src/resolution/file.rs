use std::{io, path::PathBuf};

use ccwc_domain::{ContentUnit, CountKind};
use ccwc_ports::{ContentResolver, SourceDesignator};
use ccwc_shared_kernel::{InfrastructureError, Result};
use log::debug;

use super::into_content;
use crate::persistence::FileReader;

/// Resolves content from a named file, reading it in full on every call.
#[derive(Debug)]
pub struct FileResolver {
    source: SourceDesignator,
    path: PathBuf,
}

impl FileResolver {
    pub fn new(path: PathBuf) -> Self {
        Self { source: SourceDesignator::File(path.clone()), path }
    }

    fn read(&self) -> Result<Vec<u8>> {
        FileReader::read_to_end(&self.path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                InfrastructureError::NotFound { path: self.path.clone() }.into()
            } else {
                InfrastructureError::FileRead { source_name: self.path.display().to_string(), source: err }.into()
            }
        })
    }
}

impl ContentResolver for FileResolver {
    fn source(&self) -> &SourceDesignator {
        &self.source
    }

    fn resolve(&mut self, kind: CountKind) -> Result<ContentUnit> {
        let bytes = self.read()?;
        debug!("read {} bytes from {} for {kind}", bytes.len(), self.path.display());
        Ok(into_content(bytes, kind, &self.source)?)
    }
}
