//! Input acquisition - the whole PDF is buffered in memory.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use tracing::info;

/// Read PDF bytes from `path`, or from standard input when no path is given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => {
            info!("Reading PDF from {}", path.display());
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            info!("Reading PDF from standard input");
            read_all(io::stdin().lock()).context("failed to read standard input")
        }
    }
}

/// Read a stream until end-of-stream.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}
