//! Markdown rendering for lesson bodies

use pulldown_cmark::{html, Options, Parser};

/// Renders lesson bodies (Markdown or MDX) to HTML
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    smart_punctuation: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            smart_punctuation: true,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front-matter has already been split off by FrontMatter::parse()
        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }

        let source = strip_mdx_statements(markdown);
        let parser = Parser::new_ext(&source, options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop top-level MDX `import`/`export` lines, which are not Markdown.
/// Lines inside fenced code blocks are left alone.
fn strip_mdx_statements(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut in_fence = false;

    for line in source.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }
        let is_statement = line.starts_with("import ") || line.starts_with("export ");
        if in_fence || !is_statement {
            output.push_str(line);
        }
    }

    output
}
