//! Generator module - renders the landing page and lesson pages using built-in Tera templates

use anyhow::{Context as _, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::content::{ContentItem, MarkdownRenderer};
use crate::helpers::{asset_url, encode_route, full_url_for, url_for};
use crate::templates::{LessonData, LessonLink, SiteData, TemplateRenderer};
use crate::Site;

/// Static site generator using Tera templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
            markdown: MarkdownRenderer::new(),
        })
    }

    /// Generate the landing page and one page per lesson.
    /// Returns the number of files written.
    pub fn generate(&self, items: &[ContentItem]) -> Result<usize> {
        check_unique_routes(items)?;

        fs::create_dir_all(&self.site.public_dir)?;

        let index_path = self.site.public_dir.join("index.html");
        let html = self.render_index(items)?;
        fs::write(&index_path, html)
            .with_context(|| format!("Failed to write {:?}", index_path))?;
        tracing::debug!("Generated: {:?}", index_path);

        let mut written = 1;
        for item in items {
            let output = self.output_path(item);
            let html = self.render_lesson(item)?;
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, html).with_context(|| format!("Failed to write {:?}", output))?;
            tracing::debug!("Generated: {:?}", output);
            written += 1;
        }

        Ok(written)
    }

    /// Render the landing page: hero banner plus the lesson list
    pub fn render_index(&self, items: &[ContentItem]) -> Result<String> {
        let lessons: Vec<LessonLink> = items
            .iter()
            .map(|item| LessonLink {
                title: item.display_title(),
                href: url_for(&self.site.config, &encode_route(&item.route())),
                description: item.front_matter.description(),
            })
            .collect();

        let mut hero = self.site.config.hero.clone();
        if let Some(image) = hero.image.as_mut() {
            image.src = asset_url(&self.site.config, &image.src);
        }

        let mut context = Context::new();
        context.insert("site", &self.build_site_data());
        context.insert("hero", &hero);
        context.insert("lessons", &lessons);
        context.insert("canonical", &full_url_for(&self.site.config, "/"));

        self.renderer.render("index.html", &context)
    }

    /// Render a single lesson page from its body
    pub fn render_lesson(&self, item: &ContentItem) -> Result<String> {
        let lesson = LessonData {
            title: item.display_title(),
            description: item.front_matter.description(),
            content: self.markdown.render(&item.body),
        };

        let mut context = Context::new();
        context.insert("site", &self.build_site_data());
        context.insert("lesson", &lesson);
        context.insert(
            "canonical",
            &full_url_for(&self.site.config, &encode_route(&item.route())),
        );

        self.renderer
            .render("lesson.html", &context)
            .with_context(|| format!("Failed to render lesson {}", item.file_path))
    }

    /// `public/<route>/index.html`
    fn output_path(&self, item: &ContentItem) -> PathBuf {
        let route = item.route();
        let mut path = self.site.public_dir.clone();
        for segment in route.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.join("index.html")
    }

    fn build_site_data(&self) -> SiteData {
        let config = &self.site.config;
        SiteData {
            title: config.title.clone(),
            description: config.description.clone(),
            home: url_for(config, "/"),
            favicon: url_for(config, "/favicon.ico"),
        }
    }
}

/// Fail when two content files would be written to the same route,
/// e.g. `intro.md` and `intro.mdx`
fn check_unique_routes(items: &[ContentItem]) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for item in items {
        if let Some(first) = seen.insert(item.route(), &item.file_path) {
            anyhow::bail!(
                "{} and {} both map to route {}",
                first,
                item.file_path,
                item.route()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn item(file_path: &str, source: &str) -> ContentItem {
        let (fm, body) = FrontMatter::parse(source);
        ContentItem::new(file_path, fm, body.to_string())
    }

    fn test_site() -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_render_index_lists_lessons() {
        let (_dir, site) = test_site();
        let generator = Generator::new(&site).unwrap();
        let items = vec![
            item("intro.mdx", "---\ntitle: Getting Started\n---\nHi"),
            item("guides/setup.md", "---\ntitle: Setup & Install\n---\n"),
        ];

        let html = generator.render_index(&items).unwrap();
        assert!(html.contains(r#"<a href="/intro">Getting Started</a>"#));
        assert!(html.contains(r#"<a href="/guides/setup">Setup &amp; Install</a>"#));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("Real World Testing with Cypress"));
        assert!(html.contains("Start Learning"));
    }

    #[test]
    fn test_render_index_empty() {
        let (_dir, site) = test_site();
        let generator = Generator::new(&site).unwrap();

        let html = generator.render_index(&[]).unwrap();
        assert!(!html.contains("<li>"));
        assert!(html.contains("hero-heading"));
    }

    #[test]
    fn test_render_index_uses_root() {
        let (dir, _) = test_site();
        fs::write(dir.path().join("_config.yml"), "root: /course/\n").unwrap();
        let site = Site::new(dir.path()).unwrap();
        let generator = Generator::new(&site).unwrap();

        let html = generator
            .render_index(&[item("intro.mdx", "---\ntitle: Intro\n---\n")])
            .unwrap();
        assert!(html.contains(r#"href="/course/intro""#));
    }

    #[test]
    fn test_render_index_prefixes_hero_image() {
        let (dir, _) = test_site();
        fs::write(dir.path().join("_config.yml"), "root: /course/\n").unwrap();
        let site = Site::new(dir.path()).unwrap();
        let generator = Generator::new(&site).unwrap();

        let html = generator.render_index(&[]).unwrap();
        assert!(html.contains(r#"src="/course/images/home/hero/home-rwa-hero.svg""#));
        assert!(html.contains(r#"href="/course/favicon.ico""#));
    }

    #[test]
    fn test_render_index_encodes_href() {
        let (_dir, site) = test_site();
        let generator = Generator::new(&site).unwrap();

        let html = generator
            .render_index(&[item("a \"b\" & c.mdx", "---\ntitle: Odd Name\n---\n")])
            .unwrap();
        assert!(html.contains(r#"<a href="/a%20%22b%22%20%26%20c">Odd Name</a>"#));
    }

    #[test]
    fn test_generate_rejects_duplicate_routes() {
        let (dir, site) = test_site();
        let generator = Generator::new(&site).unwrap();
        let items = vec![
            item("intro.md", "---\ntitle: Markdown\n---\nAAA"),
            item("intro.mdx", "---\ntitle: MDX\n---\nBBB"),
        ];

        let err = generator.generate(&items).unwrap_err().to_string();
        assert!(err.contains("intro.md"));
        assert!(err.contains("intro.mdx"));
        assert!(err.contains("/intro"));
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_render_lesson() {
        let (_dir, site) = test_site();
        let generator = Generator::new(&site).unwrap();
        let lesson = item(
            "intro.mdx",
            "---\ntitle: Intro\ndescription: First steps\n---\n# Welcome\n",
        );

        let html = generator.render_lesson(&lesson).unwrap();
        assert!(html.contains("<h1>Welcome</h1>"));
        assert!(html.contains("First steps"));
        assert!(html.contains("<title>Intro | Real World Testing with Cypress</title>"));
    }

    #[test]
    fn test_generate_writes_pages() {
        let (dir, site) = test_site();
        let generator = Generator::new(&site).unwrap();
        let items = vec![
            item("intro.mdx", "---\ntitle: Intro\n---\nHello"),
            item("guides/setup.mdx", "---\ntitle: Setup\n---\nInstall"),
        ];

        let written = generator.generate(&items).unwrap();
        assert_eq!(written, 3);
        let public = dir.path().join("public");
        assert!(public.join("index.html").exists());
        assert!(public.join("intro/index.html").exists());
        assert!(public.join("guides/setup/index.html").exists());
    }
}
