//! Content discovery.
//!
//! Stage 1 of the build pipeline. Walks the content root and reads every
//! markdown document into a [`SourceDocument`], ready for the parallel
//! processing stage.
//!
//! ## Directory Structure
//!
//! Any tree of markdown files works; directories become slug prefixes:
//!
//! ```text
//! content/
//! ├── config.toml                  # Site configuration (optional)
//! ├── hello-world.md               # → slug "hello-world"
//! ├── posts/
//! │   ├── first-post.md            # → slug "posts/first-post"
//! │   └── 2024/
//! │       └── year-review.md       # → slug "posts/2024/year-review"
//! └── drafts/.wip.md               # hidden files are skipped
//! ```
//!
//! ## Ordering
//!
//! Enumeration order carries no meaning. The graph stage establishes the
//! one true ordering after every document is parsed; nothing downstream
//! may depend on filesystem order.
//!
//! ## Failure
//!
//! A single unreadable file aborts the scan. A partial document set would
//! silently drop posts and corrupt previous/next links, so there is no
//! skip-and-continue mode.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("content root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("cannot walk content tree: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A raw document as found on disk. Immutable; consumed by the process
/// stage and discarded after parsing.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Absolute path on disk, for error reporting.
    pub source_path: PathBuf,
    /// Path relative to the content root; the slug derives from this.
    pub relative_path: PathBuf,
    /// Full file contents, front matter included.
    pub raw: String,
}

/// File extensions recognized as documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Recursively discover and read all documents under `root`.
pub fn scan(root: &Path) -> Result<Vec<SourceDocument>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_document(path) {
            continue;
        }

        let raw = fs::read_to_string(path).map_err(|source| ScanError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        // strip_prefix cannot fail: walkdir only yields paths under root
        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_path_buf();

        documents.push(SourceDocument {
            source_path: path.to_path_buf(),
            relative_path,
            raw,
        });
    }

    Ok(documents)
}

/// Skip dotfiles and dot-directories (editor droppings, VCS metadata).
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            DOCUMENT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
