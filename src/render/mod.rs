//! Rendering: markdown to HTML plus heading extraction for navigation

mod headings;
mod markdown;

pub use headings::{extract_headings, heading_id, Heading, HeadingIds};
pub use markdown::MarkdownRenderer;
