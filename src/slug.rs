//! Slug derivation from document paths.
//!
//! A document's slug is its address: the path relative to the content root,
//! extension stripped, each component normalized to lowercase URL-safe
//! form, components joined by `/` so directory hierarchy survives into the
//! URL space.
//!
//! ```text
//! posts/Hello World.md      → posts/hello-world
//! 2024/My Great Post!.md    → 2024/my-great-post
//! about.markdown            → about
//! ```
//!
//! Slugs must be globally unique across the document set; uniqueness is
//! checked in the graph stage once every document is known.

use std::path::Path;

/// Derive a slug from a path relative to the content root.
///
/// Strips the file extension, then sanitizes each path component
/// independently and joins them with `/`. A component that sanitizes to
/// nothing (e.g. `"???"`) is dropped from the slug.
pub fn from_relative_path(relative_path: &Path) -> String {
    let without_ext = relative_path.with_extension("");
    let components: Vec<String> = without_ext
        .components()
        .map(|c| sanitize_component(&c.as_os_str().to_string_lossy()))
        .filter(|c| !c.is_empty())
        .collect();
    components.join("/")
}

/// Sanitize a single path component for use in a URL.
///
/// - Lowercases ASCII letters
/// - Replaces every non-alphanumeric character (whitespace included) with a dash
/// - Collapses consecutive dashes into one
/// - Strips leading and trailing dashes
fn sanitize_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    let mut prev_dash = false;
    for c in component.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}
