//! Embedded Tera templates for the site's pages
//!
//! All templates are compiled into the binary with `include_str!`, so
//! a site directory needs nothing beyond its content files.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::content::Post;
use crate::render::Heading;

/// Template renderer with the embedded page set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Page content is pre-rendered HTML; escaping happens upstream
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            ("page.html", include_str!("site/page.html")),
            ("tags.html", include_str!("site/tags.html")),
            ("tag_single.html", include_str!("site/tag_single.html")),
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("site/partials/post_card.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// The stylesheet written alongside the generated pages
pub const SITE_CSS: &str = include_str!("site/site.css");

/// A post as the templates see it
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub slug: String,
    pub url: String,
    pub date: String,
    pub reading_time: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub published: bool,
}

impl PostView {
    pub fn new(post: &Post, root: &str) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            url: format!("{}blog/{}/", root, post.slug),
            date: post.date.format("%Y-%m-%d").to_string(),
            reading_time: post.reading_time.clone(),
            excerpt: post.excerpt.clone(),
            tags: post.tags.clone(),
            published: post.published,
        }
    }
}

/// A table-of-contents entry as the templates see it
#[derive(Debug, Clone, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    /// Indent steps relative to level 2
    pub indent: u8,
}

impl TocEntry {
    pub fn new(heading: &Heading) -> Self {
        Self {
            id: heading.id.clone(),
            text: heading.text.clone(),
            indent: heading.level.saturating_sub(2),
        }
    }
}

/// A tag with its post count, for the tags listing
#[derive(Debug, Clone, Serialize)]
pub struct TagView {
    pub name: String,
    pub url: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        // Tera validates templates at load time
        TemplateRenderer::new().unwrap();
    }

    #[test]
    fn test_toc_entry_indent() {
        let h2 = Heading {
            id: "a".into(),
            text: "A".into(),
            level: 2,
        };
        let h4 = Heading {
            id: "b".into(),
            text: "B".into(),
            level: 4,
        };
        assert_eq!(TocEntry::new(&h2).indent, 0);
        assert_eq!(TocEntry::new(&h4).indent, 2);
    }
}
