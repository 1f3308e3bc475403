//! Content graph construction.
//!
//! The synchronization barrier of the pipeline: runs only once every
//! document has been parsed, because neither global slug uniqueness nor
//! chronological position can be decided from a partial set.
//!
//! ## Ordering
//!
//! Documents sort by date descending (newest first); exact-date ties break
//! by slug ascending. The comparator is total, so the resulting order is
//! identical regardless of how the filesystem enumerated the files —
//! rebuilding the same content always yields the same graph.
//!
//! ## Adjacency
//!
//! Each entry links to its neighbors in the sorted sequence:
//! `previous_slug` points at the adjacent newer post, `next_slug` at the
//! adjacent older one. The newest post has no previous; the oldest has no
//! next.
//!
//! ```text
//! index:      0 (newest)      1               2 (oldest)
//! entry:      [March post] ←→ [Feb post]  ←→  [Jan post]
//! previous:   None            march-slug      feb-slug
//! next:       feb-slug        jan-slug        None
//! ```

use crate::types::Document;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// A slug produced by more than one source document.
#[derive(Debug)]
pub struct SlugCollision {
    pub slug: String,
    pub paths: Vec<PathBuf>,
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("{}", render_collisions(.0))]
    Collisions(Vec<SlugCollision>),
}

fn render_collisions(collisions: &[SlugCollision]) -> String {
    let mut out = format!("{} slug collision(s):", collisions.len());
    for collision in collisions {
        let _ = write!(out, "\n  `{}` produced by:", collision.slug);
        for path in &collision.paths {
            let _ = write!(out, "\n    {}", path.display());
        }
    }
    out
}

/// One position in the ordered graph: a document plus its neighbor links.
#[derive(Debug)]
pub struct GraphEntry {
    pub document: Document,
    pub previous_slug: Option<String>,
    pub next_slug: Option<String>,
}

/// Build the ordered, cross-linked content graph from the full document set.
///
/// Fails if any slug is claimed by more than one document; every collision
/// is reported with all of its source paths.
pub fn build(mut documents: Vec<Document>) -> Result<Vec<GraphEntry>, GraphError> {
    check_slug_uniqueness(&documents)?;

    documents.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

    let slugs: Vec<String> = documents.iter().map(|d| d.slug.clone()).collect();
    let last = documents.len().saturating_sub(1);

    Ok(documents
        .into_iter()
        .enumerate()
        .map(|(i, document)| GraphEntry {
            document,
            previous_slug: (i > 0).then(|| slugs[i - 1].clone()),
            next_slug: (i < last).then(|| slugs[i + 1].clone()),
        })
        .collect())
}

/// An ambiguous URL space is a build defect, not a warning: every slug
/// claimed twice is fatal, and all of them are reported together.
fn check_slug_uniqueness(documents: &[Document]) -> Result<(), GraphError> {
    let mut by_slug: BTreeMap<&str, Vec<&PathBuf>> = BTreeMap::new();
    for doc in documents {
        by_slug.entry(&doc.slug).or_default().push(&doc.source_path);
    }

    let collisions: Vec<SlugCollision> = by_slug
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(slug, mut paths)| {
            paths.sort();
            SlugCollision {
                slug: slug.to_string(),
                paths: paths.into_iter().cloned().collect(),
            }
        })
        .collect();

    if collisions.is_empty() {
        Ok(())
    } else {
        Err(GraphError::Collisions(collisions))
    }
}
