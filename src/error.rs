use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to write fixture {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read fixture {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("fixture {} has {actual} bytes, expected {expected}", .path.display())]
    Size {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("scramble table entry {index} is {value}, outside the table range")]
    TableValueOutOfRange { index: usize, value: u16 },

    #[error("scramble table entry {index} repeats value {value}")]
    TableDuplicate { index: usize, value: u16 },
}
