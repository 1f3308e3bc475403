//! CLI output formatting for all pipeline stages.
//!
//! Output is information-centric: the primary line for every page is its
//! semantic identity — positional index, title, date, reading time — with
//! slugs and source paths as indented context lines.
//!
//! ```text
//! Pages
//! 001 Getting Started With Async Rust (March 01, 2024, 7 min read)
//!     Slug: posts/async-rust
//! 002 A Year In Review (January 05, 2024, 3 min read)
//!     Slug: posts/year-review
//!
//! 2 pages in chronological order
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::BuildOutput;
use crate::scan::SourceDocument;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Scan stage
// ============================================================================

/// Inventory of discovered documents, sorted by relative path.
///
/// Scan order itself is meaningless (the graph decides the real order), so
/// the listing sorts for readability.
pub fn format_scan_output(documents: &[SourceDocument], source: &Path) -> Vec<String> {
    let mut lines = vec![format!("Documents in {}", source.display())];

    let mut rels: Vec<String> = documents
        .iter()
        .map(|d| d.relative_path.display().to_string())
        .collect();
    rels.sort();

    for (i, rel) in rels.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), rel));
    }

    lines.push(String::new());
    lines.push(format!("{} document(s) discovered", documents.len()));
    lines
}

pub fn print_scan_output(documents: &[SourceDocument], source: &Path) {
    for line in format_scan_output(documents, source) {
        println!("{line}");
    }
}

// ============================================================================
// Build stage
// ============================================================================

/// Ordered page listing for a finished build.
pub fn format_build_output(output: &BuildOutput) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    for (i, page) in output.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}, {})",
            format_index(i + 1),
            page.title,
            page.display_date,
            page.reading_time.text
        ));
        lines.push(format!("    Slug: {}", page.slug));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} page(s) in chronological order",
        output.pages.len()
    ));
    lines
}

pub fn print_build_output(output: &BuildOutput) {
    for line in format_build_output(output) {
        println!("{line}");
    }
}
