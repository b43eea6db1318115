//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    /// Authoring mode: when true, unpublished posts are visible.
    /// Overridden by the NIB_PREVIEW environment variable.
    pub preview: bool,

    /// Number of posts shown on the home page
    pub recent_posts: usize,

    /// Words-per-minute used for the reading time estimate
    pub reading_speed_wpm: usize,

    /// Syntect theme for fenced code blocks
    pub highlight_theme: String,

    /// Theme shown before the visitor has any persisted preference
    pub default_theme: ThemeDefault,

    /// Grace delay in milliseconds before a hover dropdown closes
    pub dropdown_close_delay_ms: u64,

    /// Header navigation links
    pub nav: Vec<NavLink>,

    /// Entries of the portfolio dropdown menu
    pub portfolio: Vec<NavLink>,
}

/// A single navigation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

/// Initial theme when nothing is persisted and the platform
/// preference is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeDefault {
    Light,
    Dark,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "A Personal Site".to_string(),
            description: String::new(),
            author: "Anonymous".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            preview: false,

            recent_posts: 3,
            reading_speed_wpm: 200,

            highlight_theme: "base16-ocean.dark".to_string(),
            default_theme: ThemeDefault::Light,
            dropdown_close_delay_ms: 150,

            nav: vec![
                NavLink {
                    name: "Home".to_string(),
                    href: "/".to_string(),
                },
                NavLink {
                    name: "Blog".to_string(),
                    href: "/blog/".to_string(),
                },
                NavLink {
                    name: "About".to_string(),
                    href: "/about/".to_string(),
                },
            ],
            portfolio: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file.
    ///
    /// The NIB_PREVIEW environment variable (when set to anything other
    /// than "0" or empty) forces preview mode on regardless of the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;

        if let Ok(val) = std::env::var("NIB_PREVIEW") {
            if !val.is_empty() && val != "0" {
                config.preview = true;
            }
        }

        Ok(config)
    }
}
