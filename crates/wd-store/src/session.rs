use std::fs;
use std::path::{Path, PathBuf};

use wd_core::Document;

use crate::error::{Result, StoreError};

/// Resolve `.`/`..` components and symlinks where possible. A path
/// that does not exist yet resolves through its parent directory, so a
/// fresh output name still compares against the input's real location.
fn canonical_form(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// One editing session over a WD input document.
///
/// The input file is read in full when the session opens and never
/// touched again; edits land on the in-memory document, and `persist`
/// rewrites the whole output file. Opening with input and output
/// naming the same file is refused up front, including dot and
/// symlink spellings of it.
#[derive(Debug)]
pub struct Session {
    input: PathBuf,
    output: PathBuf,
    document: Document,
}

impl Session {
    pub fn open(input: &Path, output: &Path) -> Result<Self> {
        if canonical_form(input) == canonical_form(output) {
            return Err(StoreError::SamePath(output.to_path_buf()));
        }
        let text = fs::read_to_string(input).map_err(|source| StoreError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        let document = Document::parse(&text);
        tracing::debug!("opened session on {} ({} lines)", input.display(), document.len());
        Ok(Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            document,
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Full overwrite of the output path from the in-memory document.
    pub fn persist(&self) -> Result<()> {
        fs::write(&self.output, self.document.render()).map_err(|source| StoreError::Write {
            path: self.output.clone(),
            source,
        })?;
        tracing::debug!("persisted document to {}", self.output.display());
        Ok(())
    }
}
