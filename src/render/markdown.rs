//! Markdown rendering with per-element display rules
//!
//! Parsing is pulldown-cmark's job; this adapter only rewrites the
//! event stream: anchor ids on headings, new-tab affordances on
//! external links, intrinsic dimensions on images, and syntax
//! highlighting on fenced code blocks with a language annotation.

use anyhow::Result;
use pulldown_cmark::{
    html, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::headings::{atx_heading_text, HeadingIds};

/// Intrinsic image dimensions applied when the source gives none.
const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 400;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    /// Create with a specific syntect theme
    pub fn with_theme(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Render a markdown body to HTML.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;

        // Source offsets are kept so heading anchors can be derived from
        // the raw text, before smart punctuation rewrites it
        let events: Vec<(Event, std::ops::Range<usize>)> =
            Parser::new_ext(markdown, options).into_offset_iter().collect();
        let mut out: Vec<Event> = Vec::with_capacity(events.len());

        let mut ids = HeadingIds::new();
        // Whether each currently-open link was rewritten as raw HTML
        let mut link_stack: Vec<bool> = Vec::new();
        // Some(lang) while inside a code block
        let mut code_lang: Option<Option<String>> = None;
        let mut code_buf = String::new();
        // (dest, title, alt accumulator) while inside an image
        let mut image: Option<(String, String, String)> = None;

        for (event, range) in &events {
            match event.clone() {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_lang = Some(lang);
                    code_buf.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_lang.take().flatten();
                    let rendered = self.render_code_block(&code_buf, lang.as_deref());
                    out.push(Event::Html(rendered.into()));
                }
                Event::Text(text) if code_lang.is_some() => {
                    code_buf.push_str(&text);
                }

                Event::Start(Tag::Image {
                    dest_url, title, ..
                }) => {
                    image = Some((dest_url.to_string(), title.to_string(), String::new()));
                }
                Event::End(TagEnd::Image) => {
                    if let Some((dest, title, alt)) = image.take() {
                        out.push(Event::Html(image_html(&dest, &title, &alt).into()));
                    }
                }
                Event::Text(text) if image.is_some() => {
                    if let Some((_, _, alt)) = image.as_mut() {
                        alt.push_str(&text);
                    }
                }
                // Drop other markup inside image alt text
                _ if image.is_some() => {}

                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) if toc_level(level) => {
                    // Same raw-text assignment as extract_headings, so
                    // navigation anchors and rendered ids agree
                    let assigned = atx_heading_text(&markdown[range.clone()])
                        .map(|text| ids.assign(text).into());
                    out.push(Event::Start(Tag::Heading {
                        level,
                        id: assigned.or(id),
                        classes,
                        attrs,
                    }));
                }

                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    let external =
                        dest_url.starts_with("http://") || dest_url.starts_with("https://");
                    link_stack.push(external);
                    if external {
                        let title_attr = if title.is_empty() {
                            String::new()
                        } else {
                            format!(r#" title="{}""#, html_escape(&title))
                        };
                        out.push(Event::Html(
                            format!(
                                r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                                html_escape(&dest_url),
                                title_attr
                            )
                            .into(),
                        ));
                    } else {
                        out.push(Event::Start(Tag::Link {
                            link_type,
                            dest_url,
                            title,
                            id,
                        }));
                    }
                }
                Event::End(TagEnd::Link) => {
                    if link_stack.pop().unwrap_or(false) {
                        out.push(Event::Html("</a>".into()));
                    } else {
                        out.push(Event::End(TagEnd::Link));
                    }
                }

                other => out.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, out.into_iter());

        Ok(html_output)
    }

    /// Render one code block.
    ///
    /// A language annotation selects syntax highlighting; without one,
    /// fenced and indented blocks alike render as plain preformatted
    /// text, keeping them visually distinct from highlighted blocks.
    fn render_code_block(&self, code: &str, lang: Option<&str>) -> String {
        let Some(lang) = lang else {
            return format!("<pre><code>{}</code></pre>", html_escape(code));
        };

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("No themes available")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => {
                format!(r#"<figure class="highlight {}">{}</figure>"#, lang, highlighted)
            }
            Err(_) => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(code)
            ),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Is this heading level part of navigation?
fn toc_level(level: HeadingLevel) -> bool {
    matches!(
        level,
        HeadingLevel::H2 | HeadingLevel::H3 | HeadingLevel::H4
    )
}

/// Build the image element: fixed intrinsic dimensions plus a caption
/// when alt text is present.
fn image_html(dest: &str, title: &str, alt: &str) -> String {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, html_escape(title))
    };

    let img = format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}" loading="lazy"{}>"#,
        html_escape(dest),
        html_escape(alt),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
        title_attr
    );

    if alt.is_empty() {
        format!("<figure>{}</figure>", img)
    } else {
        format!(
            "<figure>{}<figcaption>{}</figcaption></figure>",
            img,
            html_escape(alt)
        )
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
