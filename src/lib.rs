//! # smallpress
//!
//! A minimal static blog build pipeline. Your filesystem is the data
//! source: markdown files with YAML front matter become an ordered,
//! cross-linked collection of page records, serialized as a JSON manifest
//! for whatever renders the actual HTML.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! Content flows through four stages; the first two are per-document, the
//! last two see the whole set at once:
//!
//! ```text
//! 1. Scan      content/   →  Vec<SourceDocument>   (filesystem → raw documents)
//! 2. Process   documents  →  Vec<Document>         (parallel: parse, slug, render, estimate)
//!              ── barrier: every document must be parsed before ordering ──
//! 3. Graph     documents  →  Vec<GraphEntry>       (uniqueness, sort, previous/next)
//! 4. Generate  entries    →  dist/pages.json       (final Page records + RSS feed)
//! ```
//!
//! The barrier between stages 2 and 3 is structural, not incidental: a
//! page's position and neighbor links depend on every other page, so
//! nothing global is decided until the full set is parsed. Before the
//! barrier, documents never touch shared state and process freely in
//! parallel.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content root, reads raw documents |
//! | [`process`] | Stage 2 — parallel per-document parsing and derivation, collecting all failures |
//! | [`graph`] | Stage 3 — slug uniqueness, chronological ordering, previous/next links |
//! | [`generate`] | Stage 4 — final page assembly and the `pages.json` manifest |
//! | [`frontmatter`] | YAML front-matter splitting, validation, date handling |
//! | [`slug`] | path → URL-safe slug derivation |
//! | [`markdown`] | body → HTML rendering and plain-text extraction |
//! | [`readtime`] | word count → reading-time estimates |
//! | [`feed`] | RSS 2.0 feed from the assembled pages |
//! | [`config`] | `config.toml` loading, site metadata, tunables |
//! | [`output`] | CLI output formatting — page listings per stage |
//! | [`types`] | Shared types serialized between stages (`Document`, `Page`) |
//!
//! # Design Decisions
//!
//! ## Deterministic Ordering
//!
//! Pages sort by date descending with slug-ascending tie-breaks — a total
//! order with no dependence on filesystem enumeration. Rebuilding the same
//! content produces a byte-identical manifest, which makes builds diffable
//! and deploys cacheable.
//!
//! ## Collect Errors, Then Fail
//!
//! Per-document validation failures (missing titles, bad dates) are
//! collected across the whole set and reported in one pass, sorted by
//! path. Fixing a twenty-post import should take one build, not twenty.
//! Slug collisions get the same treatment after the barrier. IO failures
//! are the exception: a file we cannot read aborts immediately, because a
//! silently partial document set would corrupt ordering and links.
//!
//! ## Records Out, Rendering Elsewhere
//!
//! The pipeline stops at fully-populated page records: slug, title, dates,
//! rendered body HTML, excerpt, reading time, neighbor links. Templates
//! consume `pages.json` and simply read fields — no query layer, no
//! template engine in the build, no coupling between content validation
//! and visual churn.
//!
//! ## YAML Front Matter, Markdown Bodies
//!
//! Documents use the `---`-fenced YAML front-matter convention with
//! `title`, `date`, and optional `description`. Unknown keys are ignored
//! so posts can carry extra metadata for other tools. Bodies are rendered
//! once with pulldown-cmark; the same stripped plain text feeds both word
//! counts and excerpts, so the numbers always agree with the preview.

pub mod config;
pub mod feed;
pub mod frontmatter;
pub mod generate;
pub mod graph;
pub mod markdown;
pub mod output;
pub mod process;
pub mod readtime;
pub mod scan;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
