use std::io::{self, Read};

use ccwc_domain::{ContentUnit, CountKind};
use ccwc_ports::{ContentResolver, SourceDesignator};
use ccwc_shared_kernel::{InfrastructureError, Result};
use log::debug;

use super::into_content;
use crate::persistence::FileReader;

/// Resolves content from a single-use stream.
///
/// The stream is drained on the first call; later calls derive their content
/// from the captured buffer and never touch the stream again. A failed drain
/// is remembered and reported again on every later call.
#[derive(Debug)]
pub struct StdinResolver<R> {
    source: SourceDesignator,
    reader: Option<R>,
    captured: std::result::Result<Vec<u8>, CaptureFailure>,
}

/// Kind and message of a failed drain; `io::Error` itself is not `Clone`.
#[derive(Debug, Clone)]
struct CaptureFailure {
    kind: io::ErrorKind,
    message: String,
}

impl<R: Read> StdinResolver<R> {
    pub fn new(reader: R) -> Self {
        Self { source: SourceDesignator::Stdin, reader: Some(reader), captured: Ok(Vec::new()) }
    }

    fn captured(&mut self) -> Result<&[u8]> {
        if let Some(mut reader) = self.reader.take() {
            self.captured = FileReader::drain(&mut reader).map_err(|err| CaptureFailure {
                kind: err.kind(),
                message: err.to_string(),
            });
            match &self.captured {
                Ok(bytes) => debug!("captured {} bytes from standard input", bytes.len()),
                Err(failure) => debug!("standard input capture failed: {}", failure.message),
            }
        }

        match &self.captured {
            Ok(bytes) => Ok(bytes.as_slice()),
            Err(failure) => Err(InfrastructureError::FileRead {
                source_name: self.source.to_string(),
                source: io::Error::new(failure.kind, failure.message.clone()),
            }
            .into()),
        }
    }
}

impl<R: Read> ContentResolver for StdinResolver<R> {
    fn source(&self) -> &SourceDesignator {
        &self.source
    }

    fn resolve(&mut self, kind: CountKind) -> Result<ContentUnit> {
        let bytes = self.captured()?.to_vec();
        Ok(into_content(bytes, kind, &self.source)?)
    }
}
