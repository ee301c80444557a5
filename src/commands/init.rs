//! Initialize a new course site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Course site configuration

# Site
title: Real World Testing with Cypress
description: ''

# URL
url: http://example.com
root: /

# Directory
content_dir: content
public_dir: public
# List lessons nested one level down (section/slug.mdx)
recursive: false

# Home page
hero:
  heading: Real World Testing with Cypress
  tagline: Learn from top industry experts and level-up your testing knowledge — for free!
  stats:
    - label: Courses
      value: "4"
    - label: Lessons
      value: "25+"
    - label: Examples
      value: "30+"
  buttons:
    - label: Start Learning
      primary: true
    - label: Get Course Updates
  image:
    src: /images/home/hero/home-rwa-hero.svg
    alt: Home Page Hero Image
    width: 938
    height: 676
"#;

const SAMPLE_LESSON: &str = r#"---
title: Testing Your First Application
description: Install Cypress and write a first end-to-end test
---

# Testing Your First Application

```js
describe("home page", () => {
  it("shows the lesson list", () => {
    cy.visit("/")
    cy.get("[data-test=hero-heading]").should("be.visible")
  })
})
```
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("content"))?;
    fs::write(&config_path, DEFAULT_CONFIG)?;
    fs::write(
        target_dir.join("content/testing-your-first-application.mdx"),
        SAMPLE_LESSON,
    )?;

    tracing::debug!("Wrote {:?}", config_path);
    Ok(())
}
