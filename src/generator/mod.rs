//! Generator module - writes the static pages for the whole site

use anyhow::{Context as _, Result};
use chrono::Datelike;
use std::fs;
use tera::Context;

use crate::content::{ContentStore, Post, PostRepository};
use crate::render::{extract_headings, MarkdownRenderer};
use crate::templates::{PostView, TagView, TemplateRenderer, TocEntry, SITE_CSS};
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    markdown: MarkdownRenderer,
    templates: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let markdown = MarkdownRenderer::with_theme(&site.config.highlight_theme);
        let templates = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            markdown,
            templates,
        })
    }

    /// Generate the entire site into the public directory.
    pub fn generate(&self, repo: &PostRepository) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;
        self.write_assets()?;

        let posts = repo.list_all();
        tracing::info!("Generating site for {} posts", posts.len());

        // Rendered bodies are reused by the detail pages and the feed
        let rendered: Vec<(Post, String)> = posts
            .iter()
            .map(|p| {
                let html = self.markdown.render(&p.body)?;
                Ok((p.clone(), html))
            })
            .collect::<Result<_>>()?;

        self.generate_home(repo)?;
        self.generate_blog_index(&posts)?;
        self.generate_post_pages(&rendered)?;
        self.generate_tag_pages(repo)?;
        self.generate_standalone_pages()?;
        self.generate_atom_feed(&rendered)?;

        Ok(())
    }

    /// Root path with a guaranteed trailing slash
    fn root(&self) -> String {
        let root = self.site.config.root.trim_end_matches('/');
        format!("{}/", root)
    }

    /// Create a base context with common variables
    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.site.config);
        context.insert("root", &self.root());
        context.insert(
            "current_year",
            &chrono::Local::now().year().to_string(),
        );
        context
    }

    fn post_views(&self, posts: &[Post]) -> Vec<PostView> {
        let root = self.root();
        posts.iter().map(|p| PostView::new(p, &root)).collect()
    }

    /// Home page: hero plus the most recent posts
    fn generate_home(&self, repo: &PostRepository) -> Result<()> {
        let recent = self.post_views(&repo.recent(self.site.config.recent_posts));

        let mut context = self.base_context();
        context.insert("recent", &recent);

        let html = self.templates.render("index.html", &context)?;
        self.write_page("index.html", &html)
    }

    /// Full listing at /blog/
    fn generate_blog_index(&self, posts: &[Post]) -> Result<()> {
        let mut context = self.base_context();
        context.insert("posts", &self.post_views(posts));

        let html = self.templates.render("blog.html", &context)?;
        self.write_page("blog/index.html", &html)
    }

    /// Detail pages at /blog/{slug}/, each with its table of contents
    fn generate_post_pages(&self, rendered: &[(Post, String)]) -> Result<()> {
        let root = self.root();

        for (post, content) in rendered {
            let toc: Vec<TocEntry> = extract_headings(&post.body)
                .map(|h| TocEntry::new(&h))
                .collect();

            let mut context = self.base_context();
            context.insert("post", &PostView::new(post, &root));
            context.insert("content", content);
            context.insert("toc", &toc);

            let html = self.templates.render("post.html", &context)?;
            self.write_page(&format!("blog/{}/index.html", post.slug), &html)?;
        }

        Ok(())
    }

    /// Tag index at /tags/ plus one listing per tag
    fn generate_tag_pages(&self, repo: &PostRepository) -> Result<()> {
        let root = self.root();

        let tags: Vec<TagView> = repo
            .all_tags()
            .into_iter()
            .map(|name| {
                let tag_slug = slug::slugify(&name);
                TagView {
                    url: format!("{}tags/{}/", root, tag_slug),
                    count: repo.by_tag(&name).len(),
                    name,
                }
            })
            .collect();

        let mut context = self.base_context();
        context.insert("tags", &tags);
        let html = self.templates.render("tags.html", &context)?;
        self.write_page("tags/index.html", &html)?;

        for tag in &tags {
            let posts = repo.by_tag(&tag.name);
            let mut context = self.base_context();
            context.insert("tag_name", &tag.name);
            context.insert("posts", &self.post_views(&posts));

            let html = self.templates.render("tag_single.html", &context)?;
            let tag_slug = slug::slugify(&tag.name);
            self.write_page(&format!("tags/{}/index.html", tag_slug), &html)?;
        }

        tracing::info!("Generated {} tag pages", tags.len());
        Ok(())
    }

    /// Standalone pages (about, etc.) from the pages directory
    fn generate_standalone_pages(&self) -> Result<()> {
        let store = ContentStore::new(&self.site.pages_dir, self.site.config.reading_speed_wpm);

        for page in store.entries() {
            let content = self.markdown.render(&page.body)?;

            let mut context = self.base_context();
            context.insert("title", &page.title);
            context.insert("content", &content);

            let html = self.templates.render("page.html", &context)?;
            self.write_page(&format!("{}/index.html", page.slug), &html)?;
        }

        Ok(())
    }

    /// Atom feed of the most recent posts
    fn generate_atom_feed(&self, rendered: &[(Post, String)]) -> Result<()> {
        let base_url = self.site.config.url.trim_end_matches('/');

        let mut feed = String::new();
        feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        feed.push('\n');
        feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        feed.push('\n');
        feed.push_str(&format!(
            "  <title>{}</title>\n",
            escape_xml(&self.site.config.title)
        ));
        feed.push_str(&format!(
            "  <link href=\"{}/atom.xml\" rel=\"self\"/>\n",
            base_url
        ));
        feed.push_str(&format!("  <link href=\"{}/\"/>\n", base_url));
        feed.push_str(&format!(
            "  <updated>{}</updated>\n",
            chrono::Utc::now().to_rfc3339()
        ));
        feed.push_str(&format!("  <id>{}/</id>\n", base_url));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&self.site.config.author)
        ));

        for (post, content) in rendered.iter().take(20) {
            let url = format!("{}{}blog/{}/", base_url, self.root(), post.slug);
            feed.push_str("  <entry>\n");
            feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", url));
            feed.push_str(&format!("    <id>{}</id>\n", url));
            feed.push_str(&format!(
                "    <published>{}</published>\n",
                post.date.to_rfc3339()
            ));
            feed.push_str(&format!(
                "    <updated>{}</updated>\n",
                post.date.to_rfc3339()
            ));
            if !post.excerpt.is_empty() {
                feed.push_str(&format!(
                    "    <summary>{}</summary>\n",
                    escape_xml(&post.excerpt)
                ));
            }
            feed.push_str(&format!(
                "    <content type=\"html\"><![CDATA[{}]]></content>\n",
                content
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        self.write_page("atom.xml", &feed)?;
        tracing::info!("Generated atom.xml");
        Ok(())
    }

    /// Write the embedded stylesheet
    fn write_assets(&self) -> Result<()> {
        self.write_page("css/site.css", SITE_CSS)
    }

    /// Write one output file under the public directory
    fn write_page(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.site.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {:?}", parent))?;
        }
        fs::write(&output_path, content)
            .with_context(|| format!("writing {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
