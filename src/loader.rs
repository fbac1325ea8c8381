//! Content loading for `\#include` directives.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Resolves an include reference to raw text.
///
/// The parser never propagates a load failure: any `Err` becomes the
/// in-document message `File <reference> not found.` so one missing include
/// cannot prevent the rest of the document from rendering.
pub trait ContentLoader {
    fn load(&self, reference: &str) -> Result<String>;
}

/// Loads include references as files resolved against a base directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    base: PathBuf,
}

impl FsLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for FsLoader {
    /// Resolves references against the current directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl ContentLoader for FsLoader {
    fn load(&self, reference: &str) -> Result<String> {
        Ok(fs::read_to_string(self.base.join(reference))?)
    }
}

/// In-memory loader, useful for tests and for embedding documents.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    entries: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `reference`.
    pub fn insert(&mut self, reference: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(reference.into(), content.into());
    }
}

impl ContentLoader for MemoryLoader {
    fn load(&self, reference: &str) -> Result<String> {
        self.entries
            .get(reference)
            .cloned()
            .ok_or_else(|| Error::NotFound(reference.to_string()))
    }
}
