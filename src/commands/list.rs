//! List site content

use anyhow::Result;
use serde::Serialize;

use crate::content::{ContentItem, FrontMatter};
use crate::Site;

/// Listing entry printed by `list --json`
#[derive(Debug, Serialize)]
struct ListedItem<'a> {
    file_path: &'a str,
    route: String,
    title: Option<String>,
    front_matter: &'a FrontMatter,
}

/// List lessons in listing order
pub fn run(site: &Site, json: bool) -> Result<()> {
    let items = site.load_content()?;

    let output = if json {
        render_json(&items)?
    } else {
        render_plain(&items)
    };
    println!("{}", output);

    Ok(())
}

fn render_json(items: &[ContentItem]) -> Result<String> {
    let listed: Vec<_> = items
        .iter()
        .map(|item| ListedItem {
            file_path: &item.file_path,
            route: item.route(),
            title: item.title(),
            front_matter: &item.front_matter,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&listed)?)
}

fn render_plain(items: &[ContentItem]) -> String {
    let mut output = format!("Lessons ({}):", items.len());
    for item in items {
        output.push_str(&format!(
            "\n  {} - {} [{}]",
            item.route(),
            item.display_title(),
            item.file_path
        ));
    }
    output
}
