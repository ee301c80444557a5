//! URL helper functions

use lazy_static::lazy_static;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use crate::config::SiteConfig;

lazy_static! {
    static ref MDX_EXTENSION: Regex = Regex::new(r"\.mdx?$").unwrap();
}

/// Characters escaped in a route; `/` stays a separator
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Derive the public route of a content file
///
/// # Examples
/// ```ignore
/// route_for("guides/intro.mdx") // -> "/guides/intro"
/// ```
pub fn route_for(file_path: &str) -> String {
    let path = MDX_EXTENSION.replace(file_path, "");
    format!("/{}", path.trim_start_matches('/'))
}

/// Percent-encode a route so it can be written into an HTML attribute
///
/// # Examples
/// ```ignore
/// encode_route("/a \"b\" & c") // -> "/a%20%22b%22%20%26%20c"
/// ```
pub fn encode_route(route: &str) -> String {
    utf8_percent_encode(route, PATH).to_string()
}

/// URL for a static asset: absolute URLs are kept, site paths get the root
pub fn asset_url(config: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        path.to_string()
    } else {
        url_for(config, path)
    }
}

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/guides/intro") // -> "/course/guides/intro"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/guides/intro") // -> "https://example.com/course/guides/intro"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}
