//! Content module - discovers lesson files and splits off their front-matter

pub mod enumerator;
mod error;
mod frontmatter;
mod item;
pub mod loader;
mod markdown;

pub use error::ContentError;
pub use frontmatter::{extract, FrontMatter};
pub use item::ContentItem;
pub use markdown::MarkdownRenderer;
