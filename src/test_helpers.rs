//! Shared test utilities for the smallpress test suite.
//!
//! Builders for the intermediate pipeline types, so stage tests can start
//! from the exact input shape they care about without running the stages
//! before them.

use crate::scan::SourceDocument;
use crate::types::Document;
use crate::{markdown, readtime};
use chrono::NaiveDate;
use std::path::PathBuf;

/// A scanned document, as if `scan` had read `raw` from `rel` under an
/// imaginary `/content` root. No filesystem involved.
pub fn source_doc(rel: &str, raw: &str) -> SourceDocument {
    SourceDocument {
        source_path: PathBuf::from("/content").join(rel),
        relative_path: PathBuf::from(rel),
        raw: raw.to_string(),
    }
}

/// A processed document with an empty body. Title equals the slug, which
/// keeps ordering assertions readable.
pub fn document(slug: &str, date: &str) -> Document {
    document_with_body(slug, date, "")
}

/// A processed document with the given markdown body, derived fields
/// computed the same way the process stage computes them (200 wpm).
pub fn document_with_body(slug: &str, date: &str, body: &str) -> Document {
    let plain_text = markdown::plain_text(body);
    let reading_time = readtime::estimate(&plain_text, 200);
    Document {
        source_path: PathBuf::from("/content").join(format!("{slug}.md")),
        slug: slug.to_string(),
        title: slug.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date must be YYYY-MM-DD"),
        description: None,
        body_html: markdown::render_html(body),
        plain_text,
        reading_time,
    }
}
