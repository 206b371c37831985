//! Named sources of integer lines.
//!
//! The evaluator only needs "the lines of source `name`, or not found".
//! Where those lines come from is up to the [`SourceLoader`]: the CLI reads
//! files, tests and embedders can hand in strings.

use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lazy line iterator over one source.
///
/// Whatever the loader acquired for the source (an open file, say) is
/// released when the iterator is dropped.
pub type Lines<'a> = Box<dyn Iterator<Item = io::Result<String>> + 'a>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source not found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub trait SourceLoader {
    /// Open the source called `name` for line-by-line reading.
    fn load(&self, name: &str) -> Result<Lines<'_>, LoadError>;
}

/// Loads sources from the filesystem.
///
/// Names are paths, resolved against the base directory when one is set
/// and against the working directory otherwise.
#[derive(Clone, Debug, Default)]
pub struct FileLoader {
    base_dir: Option<PathBuf>,
}

impl FileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        FileLoader {
            base_dir: Some(base_dir.into()),
        }
    }

    /// The path a source name refers to.
    pub fn resolve(&self, name: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(name),
            None => Path::new(name).to_path_buf(),
        }
    }
}

impl SourceLoader for FileLoader {
    fn load(&self, name: &str) -> Result<Lines<'_>, LoadError> {
        let file = File::open(self.resolve(name)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound,
            _ => LoadError::Io(err),
        })?;
        Ok(Box::new(BufReader::new(file).lines()))
    }
}

/// Sources held in memory, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    sources: FxHashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.sources.insert(name.into(), contents.into());
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, name: &str) -> Result<Lines<'_>, LoadError> {
        let contents = self.sources.get(name).ok_or(LoadError::NotFound)?;
        Ok(Box::new(contents.lines().map(|line| Ok(line.to_string()))))
    }
}
