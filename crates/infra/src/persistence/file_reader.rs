use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading whole inputs.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    ///
    /// The handle is dropped before returning, on success and on error.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut reader = Self::open_buffered(path)?;
        Self::drain(&mut reader)
    }

    /// Read everything `reader` yields until EOF.
    pub fn drain<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
