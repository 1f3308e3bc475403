//! Page assembly and manifest output.
//!
//! Stage 3 of the build pipeline. Consumes the full processed document
//! set, orders it through the [graph](crate::graph) barrier, assembles the
//! final immutable [`Page`] records, and writes the `pages.json` manifest
//! that rendering, feed, and listing consumers all read.
//!
//! ## Excerpt Rule
//!
//! A page's excerpt is its front-matter `description`, verbatim, when one
//! was given. Otherwise it is the stripped body pruned to the configured
//! character budget at a word boundary — a literal prefix of the plain
//! text, with no ellipsis appended. Derivation never fails; an empty body
//! yields an empty excerpt.
//!
//! Assembly is pure: it reads documents and site metadata and produces
//! pages, mutating neither.

use crate::config::SiteMetadata;
use crate::frontmatter;
use crate::graph::{self, GraphEntry, GraphError};
use crate::types::{Document, Page};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Manifest filename written to the output directory.
pub const MANIFEST_FILE: &str = "pages.json";

/// The complete build output: site metadata plus the ordered page set.
///
/// This is the single source of truth for chronological order and
/// adjacency; consumers read it and must not mutate it.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildOutput {
    pub site: SiteMetadata,
    pub pages: Vec<Page>,
}

/// Order the full document set and assemble final page records.
///
/// Fails only on slug collisions (surfaced from the graph stage); page
/// assembly itself cannot fail.
pub fn assemble(
    documents: Vec<Document>,
    site: &SiteMetadata,
    excerpt_length: usize,
) -> Result<BuildOutput, GenerateError> {
    let entries = graph::build(documents)?;
    let pages = entries
        .into_iter()
        .map(|entry| assemble_page(entry, excerpt_length))
        .collect();

    Ok(BuildOutput {
        site: site.clone(),
        pages,
    })
}

/// Write the manifest, returning its path.
pub fn write_manifest(output: &BuildOutput, out_dir: &Path) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(out_dir)?;
    let manifest_path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(output)?;
    fs::write(&manifest_path, json)?;
    Ok(manifest_path)
}

/// Merge one graph entry into its final page record.
fn assemble_page(entry: GraphEntry, excerpt_length: usize) -> Page {
    let doc = entry.document;
    let excerpt = match &doc.description {
        Some(description) => description.clone(),
        None => prune(&doc.plain_text, excerpt_length),
    };

    Page {
        slug: doc.slug,
        title: doc.title,
        display_date: frontmatter::display_date(doc.date),
        date: doc.date,
        description: doc.description,
        excerpt,
        body_html: doc.body_html,
        reading_time: doc.reading_time,
        previous_slug: entry.previous_slug,
        next_slug: entry.next_slug,
    }
}

/// Truncate `text` to at most `budget` characters without splitting a word
/// where avoidable.
///
/// Words are taken whole until the next one would overflow the budget. A
/// single word longer than the whole budget is the one unavoidable case:
/// it is cut mid-word at the budget.
fn prune(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let needed = if out.is_empty() { word_len } else { word_len + 1 };
        if used + needed > budget {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        used += needed;
    }

    if out.is_empty() {
        text.chars().take(budget).collect()
    } else {
        out
    }
}
