//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// List nested lesson files (`section/slug.mdx`) instead of only the
    /// entries directly inside the content directory
    pub recursive: bool,

    // Home page
    #[serde(default)]
    pub hero: HeroConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Real World Testing with Cypress".to_string(),
            description: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            recursive: false,

            hero: HeroConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }
}

/// Static copy for the landing page hero banner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub heading: String,
    pub tagline: String,
    pub stats: Vec<HeroStat>,
    pub buttons: Vec<HeroButton>,
    pub image: Option<HeroImage>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            heading: "Real World Testing with Cypress".to_string(),
            tagline: "Learn from top industry experts and level-up your testing knowledge \u{2014} for free!"
                .to_string(),
            stats: vec![
                HeroStat::new("Courses", "4"),
                HeroStat::new("Lessons", "25+"),
                HeroStat::new("Examples", "30+"),
            ],
            buttons: vec![
                HeroButton {
                    label: "Start Learning".to_string(),
                    primary: true,
                },
                HeroButton {
                    label: "Get Course Updates".to_string(),
                    primary: false,
                },
            ],
            image: Some(HeroImage::default()),
        }
    }
}

/// A single figure in the hero feature list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroStat {
    pub label: String,
    pub value: String,
}

impl HeroStat {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Presentational call-to-action button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroButton {
    pub label: String,
    #[serde(default)]
    pub primary: bool,
}

/// Hero illustration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl Default for HeroImage {
    fn default() -> Self {
        Self {
            src: "/images/home/hero/home-rwa-hero.svg".to_string(),
            alt: "Home Page Hero Image".to_string(),
            width: 938,
            height: 676,
        }
    }
}
