//! Built-in course templates using Tera template engine
//!
//! The landing page and lesson templates are embedded directly in the binary.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

/// Template renderer with the embedded course theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all course templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // URLs and rendered lesson bodies are inserted verbatim; text is
        // escaped explicitly in the templates
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("course/layout.html")),
            ("index.html", include_str!("course/index.html")),
            ("lesson.html", include_str!("course/lesson.html")),
            (
                "partials/hero.html",
                include_str!("course/partials/hero.html"),
            ),
        ])?;

        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "...".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    /// Root-relative URL of the landing page
    pub home: String,
    pub favicon: String,
}

/// One entry in the landing page lesson list
#[derive(Debug, Clone, Serialize)]
pub struct LessonLink {
    pub title: String,
    pub href: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonData {
    pub title: String,
    pub description: Option<String>,
    /// Rendered HTML body
    pub content: String,
}
