//! nib: a small static site engine for a personal blog
//!
//! Content lives as markdown files with YAML front matter; pages are
//! rendered through embedded Tera templates into a public directory.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod render;
pub mod server;
pub mod templates;
pub mod widgets;

use anyhow::Result;
use std::path::Path;

/// The site context: configuration plus resolved directories.
///
/// Created once at startup and passed explicitly to everything that
/// needs it; there is no global site state.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding blog post files
    pub posts_dir: std::path::PathBuf,
    /// Directory holding standalone page files (about, etc.)
    pub pages_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site context from a base directory.
    ///
    /// Reads `site.yml` if present, otherwise uses defaults.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let posts_dir = content_dir.join("blog");
        let pages_dir = content_dir.join("pages");
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            pages_dir,
            public_dir,
        })
    }

    /// Build a post repository for this site.
    pub fn repository(&self) -> content::PostRepository {
        let store = content::ContentStore::new(&self.posts_dir, self.config.reading_speed_wpm);
        content::PostRepository::new(store, self.config.preview)
    }

    /// Generate the static site.
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove the public directory.
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
