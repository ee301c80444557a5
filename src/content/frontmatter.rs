//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Line that opens and closes a front-matter block
const DELIMITER: &str = "---";

/// Key/value metadata declared at the top of a content file.
///
/// No schema is enforced: whatever keys the author writes are kept, in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Never fails. Input without a delimited block, or with a block that is
    /// not YAML key/value pairs, yields empty front-matter and the whole
    /// input as body.
    pub fn parse(content: &str) -> (Self, &str) {
        let input = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(rest) = strip_opening_delimiter(input) else {
            return (FrontMatter::default(), content);
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if is_delimiter(line) {
                let yaml_content = &rest[..offset];
                let remaining = &rest[offset + line.len()..];
                return match Self::parse_yaml(yaml_content) {
                    Some(fm) => (fm, remaining),
                    None => (FrontMatter::default(), content),
                };
            }
            offset += line.len();
        }

        // No closing ---, treat as no front-matter
        (FrontMatter::default(), content)
    }

    /// Parse the block between the delimiters. `None` means the block is
    /// malformed and the file should be treated as having no front-matter.
    fn parse_yaml(yaml_content: &str) -> Option<Self> {
        if yaml_content.trim().is_empty() {
            return Some(FrontMatter::default());
        }

        // A thematic break followed by prose is not metadata
        if !has_yaml_structure(yaml_content) {
            return None;
        }

        let value = match serde_yaml::from_str::<serde_yaml::Value>(yaml_content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, treating as content: {}", e);
                return None;
            }
        };

        match value {
            serde_yaml::Value::Mapping(map) => {
                let fields = map
                    .into_iter()
                    .filter_map(|(k, v)| Some((key_to_string(&k)?, v)))
                    .collect();
                Some(Self { fields })
            }
            serde_yaml::Value::Null => Some(FrontMatter::default()),
            other => {
                tracing::warn!(
                    "Front-matter is not a key/value mapping ({:?}), treating as content",
                    other
                );
                None
            }
        }
    }

    /// Look up a raw field
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.fields.get(key)
    }

    /// Look up a field as a string. Numbers and booleans are stringified.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// The `title` field
    pub fn title(&self) -> Option<String> {
        self.get_str("title")
    }

    /// The `description` field
    pub fn description(&self) -> Option<String> {
        self.get_str("description")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_yaml::Value)> {
        self.fields.iter()
    }
}

/// Split raw file bytes into front-matter and body.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn extract(bytes: &[u8]) -> (FrontMatter, String) {
    let text = String::from_utf8_lossy(bytes);
    let (fm, body) = FrontMatter::parse(&text);
    (fm, body.to_string())
}

/// Return the text after the opening delimiter line, if the input starts with one
fn strip_opening_delimiter(input: &str) -> Option<&str> {
    match input.split_once('\n') {
        Some((first, rest)) if is_delimiter(first) => Some(rest),
        _ => None,
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Valid front-matter should have at least one line YAML reads as a mapping key
fn has_yaml_structure(yaml_content: &str) -> bool {
    yaml_content.lines().any(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#') && is_mapping_key_line(trimmed)
    })
}

/// `key: value` or `key:` where the key is quoted, or a plain scalar without
/// whitespace. Prose such as `Check out https://...` has whitespace before
/// its first colon and is rejected.
fn is_mapping_key_line(line: &str) -> bool {
    let after_key = match line.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let rest = &line[1..];
            match rest.find(quote) {
                Some(end) if end > 0 => &rest[end + 1..],
                _ => return false,
            }
        }
        Some(first) if "[]{}#&*!|>%@`,?".contains(first) => return false,
        Some(_) => {
            let Some(colon_pos) = line.find(':') else {
                return false;
            };
            let key = &line[..colon_pos];
            if key.is_empty() || key.chars().any(char::is_whitespace) {
                return false;
            }
            &line[colon_pos..]
        }
        None => return false,
    };

    match after_key.strip_prefix(':') {
        Some(value) => value.is_empty() || value.starts_with([' ', '\t']),
        None => false,
    }
}

fn key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
