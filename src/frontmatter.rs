//! Front-matter extraction, parsing, and validation.
//!
//! Every document starts with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello World
//! date: 2015-05-01
//! description: Optional one-line summary
//! ---
//! Body markdown follows...
//! ```
//!
//! `title` and `date` are required; `description` is optional. Unknown keys
//! are ignored so posts can carry extra metadata without breaking the
//! build. Dates accept `YYYY-MM-DD` or a full RFC 3339 timestamp and
//! re-format for display as `"May 01, 2015"`.
//!
//! Parsing is pure: the same bytes always produce the same result, and no
//! state is touched outside the returned values.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("missing front matter block (document must start with `---`)")]
    MissingBlock,
    #[error("unterminated front matter block (no closing `---`)")]
    Unterminated,
    #[error("invalid front matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("missing or empty required field `title`")]
    MissingTitle,
    #[error("missing required field `date`")]
    MissingDate,
    #[error("unparseable date `{0}` (expected YYYY-MM-DD or RFC 3339)")]
    BadDate(String),
}

/// Validated front matter for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Raw key/value view of the YAML block, before validation.
/// Unknown keys are dropped here by serde.
#[derive(Debug, Default, Deserialize)]
struct RawFrontMatter {
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
}

/// Split a document into validated front matter and its body.
///
/// The body is returned as a slice of the input, starting immediately
/// after the closing fence line. A leading BOM is tolerated. `...` is
/// accepted as a closing fence (the YAML document-end marker).
pub fn parse(raw: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let input = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut lines = input.split_inclusive('\n');
    let first = lines.next().ok_or(FrontMatterError::MissingBlock)?;
    if first.trim_end() != "---" {
        return Err(FrontMatterError::MissingBlock);
    }

    // Scan for the closing fence, tracking byte offsets so the body can be
    // returned without copying.
    let mut fence = None;
    let mut pos = first.len();
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            fence = Some((pos, pos + line.len()));
            break;
        }
        pos += line.len();
    }
    let (fence_start, body_start) = fence.ok_or(FrontMatterError::Unterminated)?;

    let yaml = &input[first.len()..fence_start];
    let body = &input[body_start..];

    let raw_fields: RawFrontMatter = if yaml.trim().is_empty() {
        RawFrontMatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    let title = raw_fields
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(FrontMatterError::MissingTitle)?;

    let date_str = raw_fields.date.ok_or(FrontMatterError::MissingDate)?;
    let date = parse_date(&date_str)?;

    let description = raw_fields
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    Ok((
        FrontMatter {
            title,
            date,
            description,
        },
        body,
    ))
}

/// Parse a front-matter date: `YYYY-MM-DD` first, RFC 3339 as fallback.
fn parse_date(s: &str) -> Result<NaiveDate, FrontMatterError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    Err(FrontMatterError::BadDate(s.to_string()))
}

/// Human-readable date used on post and listing pages: `"May 01, 2015"`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
