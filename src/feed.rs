//! RSS feed generation.
//!
//! A downstream consumer of the page collection: reads the assembled
//! [`BuildOutput`](crate::generate::BuildOutput) and produces an RSS 2.0
//! channel with one item per page, in graph order (newest first). Never
//! mutates the pages it reads.

use crate::config::SiteMetadata;
use crate::generate::BuildOutput;
use crate::types::Page;
use chrono::{NaiveDate, NaiveTime};
use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed validation failed: {0}")]
    Invalid(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generate the feed XML for a build.
pub fn build_feed(output: &BuildOutput) -> Result<String, FeedError> {
    let items: Vec<rss::Item> = output
        .pages
        .iter()
        .map(|page| page_to_item(page, &output.site))
        .collect();

    let channel = ChannelBuilder::default()
        .title(output.site.title.clone())
        .link(output.site.url.clone())
        .description(output.site.description.clone())
        .generator("smallpress".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| FeedError::Invalid(e.to_string()))?;
    Ok(channel.to_string())
}

/// Write the feed XML into the output directory, returning its path.
pub fn write_feed(
    output: &BuildOutput,
    out_dir: &Path,
    filename: &str,
) -> Result<PathBuf, FeedError> {
    let xml = build_feed(output)?;
    fs::create_dir_all(out_dir)?;
    let feed_path = out_dir.join(filename);
    fs::write(&feed_path, xml)?;
    Ok(feed_path)
}

fn page_to_item(page: &Page, site: &SiteMetadata) -> rss::Item {
    let link = permalink(&site.url, &page.slug);

    ItemBuilder::default()
        .title(page.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description((!page.excerpt.is_empty()).then(|| page.excerpt.clone()))
        .pub_date(rfc2822(page.date))
        .build()
}

/// Absolute URL for a page: site URL + slug, with a trailing slash.
fn permalink(site_url: &str, slug: &str) -> String {
    format!("{}/{}/", site_url.trim_end_matches('/'), slug)
}

/// RFC 2822 timestamp for a publication date (midnight UTC).
fn rfc2822(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc2822()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteMetadata;
    use crate::generate::assemble;
    use crate::test_helpers::{document, document_with_body};

    fn site() -> SiteMetadata {
        SiteMetadata {
            title: "Test Blog".to_string(),
            description: "A test blog".to_string(),
            url: "https://blog.example.com".to_string(),
            ..SiteMetadata::default()
        }
    }

    fn build_output(docs: Vec<crate::types::Document>) -> BuildOutput {
        assemble(docs, &site(), 160).unwrap()
    }

    #[test]
    fn channel_carries_site_metadata() {
        let output = build_output(vec![document("post", "2024-01-15")]);
        let xml = build_feed(&output).unwrap();

        assert!(xml.contains("<title>Test Blog</title>"));
        assert!(xml.contains("<link>https://blog.example.com</link>"));
        assert!(xml.contains("<description>A test blog</description>"));
    }

    #[test]
    fn one_item_per_page_in_graph_order() {
        let output = build_output(vec![
            document("older", "2024-01-15"),
            document("newer", "2024-02-15"),
        ]);
        let xml = build_feed(&output).unwrap();

        let newer = xml.find("https://blog.example.com/newer/").unwrap();
        let older = xml.find("https://blog.example.com/older/").unwrap();
        assert!(newer < older, "newest post must come first");
    }

    #[test]
    fn item_links_are_permalinks() {
        let output = build_output(vec![document("posts/hello", "2024-01-15")]);
        let xml = build_feed(&output).unwrap();

        assert!(xml.contains("<link>https://blog.example.com/posts/hello/</link>"));
        assert!(xml.contains("isPermaLink=\"true\""));
    }

    #[test]
    fn pub_date_is_rfc2822() {
        let output = build_output(vec![document("post", "2015-05-14")]);
        let xml = build_feed(&output).unwrap();

        assert!(xml.contains("14 May 2015"));
        assert!(xml.contains("00:00:00"));
    }

    #[test]
    fn item_description_uses_excerpt() {
        let output = build_output(vec![document_with_body(
            "post",
            "2024-01-15",
            "A short body that becomes the excerpt.",
        )]);
        let xml = build_feed(&output).unwrap();

        assert!(xml.contains("A short body that becomes the excerpt."));
    }

    #[test]
    fn trailing_slash_on_site_url_does_not_double() {
        assert_eq!(
            permalink("https://blog.example.com/", "post"),
            "https://blog.example.com/post/"
        );
        assert_eq!(
            permalink("https://blog.example.com", "post"),
            "https://blog.example.com/post/"
        );
    }

    #[test]
    fn empty_page_set_is_a_valid_feed() {
        let output = build_output(vec![]);
        assert!(build_feed(&output).is_ok());
    }

    #[test]
    fn write_feed_creates_the_file() {
        use tempfile::TempDir;

        let tmp = TempDir::new().unwrap();
        let output = build_output(vec![document("post", "2024-01-15")]);

        let path = write_feed(&output, &tmp.path().join("dist"), "feed.xml").unwrap();
        let xml = fs::read_to_string(&path).unwrap();
        assert!(path.ends_with("feed.xml"));
        assert!(xml.contains("<rss"));
    }
}
