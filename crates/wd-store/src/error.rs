use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StoreError {
    /// Reading the input document failed.
    Read { path: PathBuf, source: io::Error },
    /// Writing the output document failed.
    Write { path: PathBuf, source: io::Error },
    /// Input and output name the same file; the source document is
    /// never overwritten in place.
    SamePath(PathBuf),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            StoreError::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            StoreError::SamePath(path) => write!(
                f,
                "refusing to overwrite input in place: {}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StoreError {}

pub type Result<T> = std::result::Result<T, StoreError>;
