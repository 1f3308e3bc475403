//! Shared types used across all pipeline stages.
//!
//! These types flow between stages (scan → process → graph → generate) and
//! into the `pages.json` manifest, so they must serialize identically
//! everywhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A reading-time estimate derived from body word count.
///
/// Minutes are the ceiling of `words / words_per_minute`; an empty body is
/// 0 minutes. `cups` is the decorative coffee-cup count the index page
/// renders next to each post: one cup per started 10-minute bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Estimated minutes, rounded up. 0 only for an empty body.
    pub minutes: u32,
    /// Human-readable label, e.g. `"3 min read"`.
    pub text: String,
    /// Coffee cups to render: `ceil(minutes / 10)`.
    pub cups: u32,
}

/// A parsed document after the per-document processing phase.
///
/// Carries everything the graph builder and page assembler need; the raw
/// source text is gone by this point. `source_path` survives solely for
/// error reporting (slug collisions name the files involved).
#[derive(Debug, Clone)]
pub struct Document {
    /// Absolute path of the source file, for error messages.
    pub source_path: PathBuf,
    /// URL slug derived from the path relative to the content root.
    pub slug: String,
    /// Post title from front matter. Never empty.
    pub title: String,
    /// Publication date from front matter.
    pub date: NaiveDate,
    /// Optional summary from front matter. When absent, the assembler
    /// derives an excerpt from the body instead.
    pub description: Option<String>,
    /// Body rendered to HTML.
    pub body_html: String,
    /// Whitespace-normalized plain text of the body (markup stripped).
    pub plain_text: String,
    pub reading_time: ReadingTime,
}

/// The final, immutable page record handed to rendering.
///
/// Pages are assembled once per build and never mutated afterwards;
/// downstream consumers (templates, the feed, listing pages) all read the
/// same collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Unique URL slug, e.g. `posts/hello-world`.
    pub slug: String,
    pub title: String,
    /// Publication date (ISO in the manifest).
    pub date: NaiveDate,
    /// Human-readable date, e.g. `"May 01, 2015"`.
    pub display_date: String,
    /// Front-matter description, verbatim, if one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Description fallback: body text pruned to the excerpt budget.
    pub excerpt: String,
    /// Body rendered to HTML.
    pub body_html: String,
    pub reading_time: ReadingTime,
    /// Slug of the adjacent newer post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_slug: Option<String>,
    /// Slug of the adjacent older post, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_slug: Option<String>,
}
