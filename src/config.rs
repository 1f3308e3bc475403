//! Site configuration module.
//!
//! Handles loading and validating the `config.toml` at the content root.
//! All keys are optional — user files are sparse overrides on top of stock
//! defaults — and unknown keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "My Blog"
//! author = ""
//! description = ""
//! url = ""                  # Absolute site URL; required when the feed is enabled
//!
//! [site.social]
//! twitter = "someone"       # Handles only; omit the ones you don't have
//! github = "someone"
//!
//! [content]
//! words_per_minute = 200    # Reading-speed constant for time estimates
//! excerpt_length = 160      # Character budget for derived excerpts
//!
//! [feed]
//! enable = true
//! path = "feed.xml"         # Relative to the output directory
//!
//! [processing]
//! max_workers = 4           # Omit for auto = CPU cores
//! ```
//!
//! Site metadata is loaded once before the pipeline starts and never
//! mutated afterwards; every stage reads the same immutable value.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Full build configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site-wide metadata merged into the build output.
    pub site: SiteMetadata,
    /// Content-derivation tunables (reading speed, excerpt budget).
    pub content: ContentConfig,
    /// RSS feed settings.
    pub feed: FeedConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are usable together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "content.words_per_minute must be at least 1".into(),
            ));
        }
        if self.content.excerpt_length == 0 {
            return Err(ConfigError::Validation(
                "content.excerpt_length must be at least 1".into(),
            ));
        }
        if self.feed.enable && self.site.url.is_empty() {
            return Err(ConfigError::Validation(
                "feed.enable requires site.url to be set".into(),
            ));
        }
        if self.feed.enable && self.feed.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "feed.path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Site-wide metadata: title, author, socials.
///
/// Pure configuration, not state — there is no write path during a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMetadata {
    /// Site title, used by listings and the feed channel.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// One-line site description.
    pub description: String,
    /// Absolute site URL (no trailing slash needed), e.g.
    /// `https://blog.example.com`. Needed to build permalinks in the feed.
    pub url: String,
    /// Social handles for the rendering layer's bio/footer widgets.
    pub social: SocialHandles,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: String::new(),
            description: String::new(),
            url: String::new(),
            social: SocialHandles::default(),
        }
    }
}

/// Social account handles (not full URLs).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialHandles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Content-derivation tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Reading-speed constant for time estimates.
    pub words_per_minute: u32,
    /// Character budget for excerpts derived from the body.
    pub excerpt_length: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            excerpt_length: 160,
        }
    }
}

/// RSS feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Whether `build` writes a feed next to the page manifest.
    pub enable: bool,
    /// Feed filename, relative to the output directory.
    pub path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "feed.xml".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel document workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_workers: Option<usize>,
}

/// Resolve the effective worker count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_workers(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_workers.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Load config from `config.toml` in the given directory.
///
/// Missing file means stock defaults. Unknown keys are rejected, and the
/// result is validated before use.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config: SiteConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys documented.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# smallpress configuration
# ========================
# All options are optional. Defaults are shown; delete anything you don't
# want to override.

[site]
# Site title, shown by listings and used as the feed channel title.
title = "My Blog"
# Author display name.
author = ""
# One-line site description (also the feed channel description).
description = ""
# Absolute site URL, e.g. "https://blog.example.com".
# Required when [feed] enable = true.
url = ""

# Social handles (not URLs). Omit the ones you don't have.
[site.social]
# twitter = "someone"
# medium = "someone"
# linkedin = "someone"
# github = "someone"

[content]
# Reading-speed constant used for "N min read" estimates.
words_per_minute = 200
# Character budget for excerpts derived from post bodies
# (used when a post has no `description` in its front matter).
excerpt_length = 160

[feed]
# Write an RSS feed next to pages.json during `build`.
enable = false
# Feed filename, relative to the output directory.
path = "feed.xml"

[processing]
# Max parallel document workers. Omit for auto (= CPU cores).
# Values above the core count are clamped down.
# max_workers = 4
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "My Blog");
        assert_eq!(config.content.words_per_minute, 200);
        assert_eq!(config.content.excerpt_length, 160);
        assert!(!config.feed.enable);
    }

    #[test]
    fn sparse_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[site]\ntitle = \"Context Switch\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "Context Switch");
        assert_eq!(config.content.words_per_minute, 200);
    }

    #[test]
    fn full_config_loads() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
title = "Context Switch"
author = "Akshay"
description = "Personal blog"
url = "https://blog.example.com"

[site.social]
twitter = "someone"
github = "someone"

[content]
words_per_minute = 250
excerpt_length = 120

[feed]
enable = true
path = "rss.xml"

[processing]
max_workers = 2
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.author, "Akshay");
        assert_eq!(config.site.social.twitter.as_deref(), Some("someone"));
        assert_eq!(config.site.social.medium, None);
        assert_eq!(config.content.words_per_minute, 250);
        assert!(config.feed.enable);
        assert_eq!(config.feed.path, "rss.xml");
        assert_eq!(config.processing.max_workers, Some(2));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site]\ntitel = \"typo\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not toml [").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn zero_wpm_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[content]\nwords_per_minute = 0\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn feed_without_url_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[feed]\nenable = true\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let from_stock: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(from_stock.site.title, SiteConfig::default().site.title);
        assert_eq!(
            from_stock.content.words_per_minute,
            SiteConfig::default().content.words_per_minute
        );
        assert_eq!(from_stock.feed.enable, SiteConfig::default().feed.enable);
    }

    #[test]
    fn effective_workers_clamps_to_cores() {
        let cores = std::thread::available_parallelism().unwrap().get();
        assert_eq!(
            effective_workers(&ProcessingConfig {
                max_workers: Some(1)
            }),
            1
        );
        assert_eq!(
            effective_workers(&ProcessingConfig {
                max_workers: Some(cores + 100)
            }),
            cores
        );
        assert_eq!(effective_workers(&ProcessingConfig { max_workers: None }), cores);
    }
}
