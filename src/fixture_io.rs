// Fixture file I/O.
// Writes go through a temp file in the target directory and are renamed into
// place, so a reader never sees a half-written fixture.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::FixtureError;

pub fn write_fixture(path: &Path, bytes: &[u8]) -> Result<(), FixtureError> {
    let write_err = |source: io::Error| FixtureError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "fixture written");
    Ok(())
}

/// Read a fixture and insist on its exact size.
pub fn read_fixture(path: &Path, expected: usize) -> Result<Vec<u8>, FixtureError> {
    let data = fs::read(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if data.len() != expected {
        return Err(FixtureError::Size {
            path: path.to_path_buf(),
            expected,
            actual: data.len(),
        });
    }
    Ok(data)
}
