//! # Source Loading
//!
//! The tokenizer never touches the filesystem on its own. Reading a
//! `ConfigFile` and resolving include patterns go through a [`SourceLoader`],
//! so embedders can serve configuration from anywhere.
//!
//! * [`FsSourceLoader`]: reads from disk, resolving include patterns with `glob`
//! * [`MemorySourceLoader`]: serves sources from an in-memory map

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    #[error("Source not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid include pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },
}

pub type SourceResult<T> = Result<T, SourceError>;

/// File access and include resolution used by the tokenizer.
pub trait SourceLoader {
    /// Returns the full text of the source at `path`.
    fn load(&self, path: &Path) -> SourceResult<String>;

    /// Expands an include pattern into the sources it names, in the order
    /// they should be spliced. An empty result is not an error.
    fn resolve(&self, pattern: &str) -> SourceResult<Vec<PathBuf>>;
}

/// Reads sources from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsSourceLoader {
    base_dir: Option<PathBuf>,
}

impl FsSourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative paths and patterns are resolved against `base_dir`.
    pub fn with_base_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl SourceLoader for FsSourceLoader {
    #[tracing::instrument(level = "debug", skip(self))]
    fn load(&self, path: &Path) -> SourceResult<String> {
        let full = self.absolute(path);
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(full.display().to_string()),
            _ => SourceError::Io {
                path: full.display().to_string(),
                message: e.to_string(),
            },
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn resolve(&self, pattern: &str) -> SourceResult<Vec<PathBuf>> {
        let full = self.absolute(Path::new(pattern));
        let full = full.to_string_lossy();
        let entries = glob::glob(&full).map_err(|e| SourceError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => {
                    return Err(SourceError::Io {
                        path: e.path().display().to_string(),
                        message: e.error().to_string(),
                    })
                }
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// Serves sources from memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceLoader {
    sources: BTreeMap<String, String>,
}

impl MemorySourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source<P: Into<String>, C: Into<String>>(mut self, path: P, contents: C) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert<P: Into<String>, C: Into<String>>(&mut self, path: P, contents: C) {
        self.sources.insert(path.into(), contents.into());
    }
}

impl SourceLoader for MemorySourceLoader {
    fn load(&self, path: &Path) -> SourceResult<String> {
        let key = path.to_string_lossy();
        self.sources
            .get(key.as_ref())
            .cloned()
            .ok_or_else(|| SourceError::NotFound(key.to_string()))
    }

    fn resolve(&self, pattern: &str) -> SourceResult<Vec<PathBuf>> {
        let matcher = glob::Pattern::new(pattern).map_err(|e| SourceError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        // BTreeMap iteration keeps the result sorted
        Ok(self
            .sources
            .keys()
            .filter(|path| matcher.matches(path))
            .map(PathBuf::from)
            .collect())
    }
}
