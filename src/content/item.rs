//! Lesson content model

use serde::Serialize;
use std::path::Path;

use super::FrontMatter;
use crate::helpers::route_for;

/// A content file split into metadata and body.
///
/// Built once per generation pass and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    /// Path relative to the content directory, `/`-separated
    pub file_path: String,

    /// Author-supplied metadata
    pub front_matter: FrontMatter,

    /// Raw markup after the front-matter block
    pub body: String,
}

impl ContentItem {
    pub fn new(file_path: impl Into<String>, front_matter: FrontMatter, body: String) -> Self {
        Self {
            file_path: file_path.into(),
            front_matter,
            body,
        }
    }

    /// Public URL path, e.g. `guides/intro.mdx` -> `/guides/intro`
    pub fn route(&self) -> String {
        route_for(&self.file_path)
    }

    /// The front-matter title, if declared
    pub fn title(&self) -> Option<String> {
        self.front_matter.title()
    }

    /// Title for links: the declared title, else the file stem
    pub fn display_title(&self) -> String {
        self.title().unwrap_or_else(|| {
            Path::new(&self.file_path)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        })
    }
}
