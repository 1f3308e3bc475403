//! Per-document processing.
//!
//! Stage 2 of the build pipeline. Each scanned document independently gets
//! its front matter parsed and validated, its slug derived, its body
//! rendered to HTML, and its reading time estimated. Documents share no
//! state at this point, so the stage fans out across the rayon thread
//! pool.
//!
//! ## Error Collection
//!
//! A broken post should not hide the other broken posts. Failures from
//! this stage are collected rather than short-circuited: if any document
//! fails, the stage returns every failure at once, sorted by path, so one
//! build run reports the full damage. The graph stage only ever sees a
//! fully valid document set.

use crate::frontmatter::{self, FrontMatterError};
use crate::scan::SourceDocument;
use crate::types::Document;
use crate::{markdown, readtime, slug};
use rayon::prelude::*;
use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// One document that failed validation, and why.
#[derive(Debug)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub error: FrontMatterError,
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{}", render_failures(.0))]
    Documents(Vec<DocumentFailure>),
}

fn render_failures(failures: &[DocumentFailure]) -> String {
    let mut out = format!("{} document(s) failed validation:", failures.len());
    for failure in failures {
        let _ = write!(out, "\n  {}: {}", failure.path.display(), failure.error);
    }
    out
}

/// Process all documents in parallel.
///
/// Returns the full set of parsed documents, or every per-document failure
/// if any document is invalid. Output order follows input order; the graph
/// stage imposes the real ordering later.
pub fn process(
    documents: Vec<SourceDocument>,
    words_per_minute: u32,
) -> Result<Vec<Document>, ProcessError> {
    let results: Vec<Result<Document, DocumentFailure>> = documents
        .into_par_iter()
        .map(|doc| process_document(doc, words_per_minute))
        .collect();

    let mut processed = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(doc) => processed.push(doc),
            Err(failure) => failures.push(failure),
        }
    }

    if failures.is_empty() {
        Ok(processed)
    } else {
        failures.sort_by(|a, b| a.path.cmp(&b.path));
        Err(ProcessError::Documents(failures))
    }
}

/// Parse and derive everything for a single document. Pure per-document
/// work; no shared state.
fn process_document(
    doc: SourceDocument,
    words_per_minute: u32,
) -> Result<Document, DocumentFailure> {
    let (front, body) = frontmatter::parse(&doc.raw).map_err(|error| DocumentFailure {
        path: doc.source_path.clone(),
        error,
    })?;

    let plain_text = markdown::plain_text(body);
    let reading_time = readtime::estimate(&plain_text, words_per_minute);

    Ok(Document {
        slug: slug::from_relative_path(&doc.relative_path),
        source_path: doc.source_path,
        title: front.title,
        date: front.date,
        description: front.description,
        body_html: markdown::render_html(body),
        plain_text,
        reading_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::source_doc;
    use chrono::NaiveDate;

    const WPM: u32 = 200;

    #[test]
    fn processes_a_valid_document() {
        let doc = source_doc(
            "posts/hello world.md",
            "---\ntitle: Hello\ndate: 2024-03-01\n---\nSome *body* text.",
        );

        let out = process(vec![doc], WPM).unwrap();
        assert_eq!(out.len(), 1);
        let d = &out[0];
        assert_eq!(d.slug, "posts/hello-world");
        assert_eq!(d.title, "Hello");
        assert_eq!(d.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(d.plain_text, "Some body text.");
        assert!(d.body_html.contains("<em>body</em>"));
        assert_eq!(d.reading_time.minutes, 1);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(process(vec![], WPM).unwrap().is_empty());
    }

    #[test]
    fn single_invalid_document_fails_with_its_path() {
        let doc = source_doc("bad.md", "---\ntitle: No Date\n---\nBody.");

        let err = process(vec![doc], WPM).unwrap_err();
        let ProcessError::Documents(failures) = err;
        assert_eq!(failures.len(), 1);
        assert!(failures[0].path.ends_with("bad.md"));
        assert!(matches!(failures[0].error, FrontMatterError::MissingDate));
    }

    #[test]
    fn all_failures_reported_in_one_pass() {
        let docs = vec![
            source_doc("ok.md", "---\ntitle: Fine\ndate: 2024-01-01\n---\n"),
            source_doc("z-missing-date.md", "---\ntitle: T\n---\n"),
            source_doc("a-missing-title.md", "---\ndate: 2024-01-01\n---\n"),
            source_doc("m-bad-date.md", "---\ntitle: T\ndate: nope\n---\n"),
        ];

        let err = process(docs, WPM).unwrap_err();
        let ProcessError::Documents(failures) = err;
        assert_eq!(failures.len(), 3);
        // Sorted by path so output is deterministic regardless of worker order
        assert!(failures[0].path.ends_with("a-missing-title.md"));
        assert!(failures[1].path.ends_with("m-bad-date.md"));
        assert!(failures[2].path.ends_with("z-missing-date.md"));
    }

    #[test]
    fn failure_message_lists_every_document() {
        let docs = vec![
            source_doc("one.md", "no front matter"),
            source_doc("two.md", "---\ntitle: T\n---\n"),
        ];

        let message = process(docs, WPM).unwrap_err().to_string();
        assert!(message.contains("2 document(s) failed validation"));
        assert!(message.contains("one.md"));
        assert!(message.contains("two.md"));
    }

    #[test]
    fn reading_time_uses_configured_wpm() {
        let body: String = vec!["word"; 300].join(" ");
        let doc = source_doc(
            "long.md",
            &format!("---\ntitle: Long\ndate: 2024-01-01\n---\n{body}"),
        );

        let out = process(vec![doc], 100).unwrap();
        assert_eq!(out[0].reading_time.minutes, 3);
    }
}
