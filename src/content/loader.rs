//! Content loader - loads lessons from the content directory

use std::fs;
use std::path::Path;

use super::{enumerator, frontmatter, ContentError, ContentItem};
use crate::Site;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Enumerate the content directory and load every entry, in listing order.
    ///
    /// The first entry that cannot be read aborts the whole load.
    pub fn load_all(&self) -> Result<Vec<ContentItem>, ContentError> {
        let content_dir = &self.site.content_dir;
        let file_paths = if self.site.config.recursive {
            enumerator::list_files_recursive(content_dir)?
        } else {
            enumerator::list_entries(content_dir)?
        };

        file_paths
            .into_iter()
            .map(|file_path| load_item(content_dir, file_path))
            .collect()
    }
}

/// Read a single content file and split off its front-matter
pub fn load_item(content_dir: &Path, file_path: String) -> Result<ContentItem, ContentError> {
    let path = content_dir.join(&file_path);
    let bytes = fs::read(&path).map_err(|source| ContentError::ReadFile {
        path: path.clone(),
        source,
    })?;

    let (front_matter, body) = frontmatter::extract(&bytes);
    tracing::debug!(
        "Loaded {} ({} front-matter fields)",
        file_path,
        front_matter.len()
    );

    Ok(ContentItem::new(file_path, front_matter, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_with_content(files: &[(&str, &str)]) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        fs::create_dir_all(&content_dir).unwrap();
        for (name, body) in files {
            let path = content_dir.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, body).unwrap();
        }
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_load_all() {
        let (_dir, site) = site_with_content(&[
            ("b-second.mdx", "---\ntitle: Second\n---\nTwo"),
            ("a-first.mdx", "---\ntitle: First\n---\nOne"),
            ("c-plain.md", "No metadata here"),
        ]);

        let items = ContentLoader::new(&site).load_all().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].file_path, "a-first.mdx");
        assert_eq!(items[0].title(), Some("First".to_string()));
        assert_eq!(items[0].body, "One");
        assert_eq!(items[1].route(), "/b-second");
        assert!(items[2].front_matter.is_empty());
        assert_eq!(items[2].body, "No metadata here");
    }

    #[test]
    fn test_load_all_empty() {
        let (_dir, site) = site_with_content(&[]);
        assert!(ContentLoader::new(&site).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_content_dir_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let err = ContentLoader::new(&site).load_all().unwrap_err();
        assert!(matches!(err, ContentError::ReadDir { .. }));
    }

    #[test]
    fn test_directory_entry_fails_read() {
        let (_dir, site) = site_with_content(&[("guides/intro.mdx", "---\ntitle: Intro\n---\n")]);
        let err = ContentLoader::new(&site).load_all().unwrap_err();
        assert!(matches!(err, ContentError::ReadFile { .. }));
    }

    #[test]
    fn test_recursive_load() {
        let (dir, _) = site_with_content(&[
            ("guides/intro.mdx", "---\ntitle: Intro\n---\nHi"),
            ("guides/setup.mdx", "---\ntitle: Setup\n---\n"),
        ]);
        fs::write(dir.path().join("_config.yml"), "recursive: true\n").unwrap();
        let site = Site::new(dir.path()).unwrap();

        let items = ContentLoader::new(&site).load_all().unwrap();
        let routes: Vec<_> = items.iter().map(|i| i.route()).collect();
        assert_eq!(routes, vec!["/guides/intro", "/guides/setup"]);
    }
}
