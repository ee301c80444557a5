//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Generate the static site: enumerate, read, split, render
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let items = site.load_content()?;
    tracing::info!(
        "Loaded {} lessons from {:?}",
        items.len(),
        site.content_dir
    );

    let generator = Generator::new(site)?;
    let written = generator.generate(&items)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} files in {:.2}s",
        written,
        duration.as_secs_f64()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generate_site() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("testing-your-first-application.mdx"),
            "---\ntitle: Testing Your First Application\n---\n# Setup\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        run(&site).unwrap();

        let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(index.contains(
            r#"<a href="/testing-your-first-application">Testing Your First Application</a>"#
        ));
        assert!(site
            .public_dir
            .join("testing-your-first-application/index.html")
            .exists());
    }

    #[test]
    fn test_generate_without_content_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site).is_err());
        assert!(!site.public_dir.exists());
    }
}
