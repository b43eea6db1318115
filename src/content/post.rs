//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A blog post, built fresh from its file on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, derived from the filename minus extension.
    /// Doubles as the URL segment: `/blog/{slug}/`.
    pub slug: String,

    /// Post title ("Untitled" when the file gives none)
    pub title: String,

    /// Publication date (falls back to the time of the read)
    pub date: DateTime<Local>,

    /// Short summary for listings, may be empty
    pub excerpt: String,

    /// Raw markdown body, front-matter block stripped
    pub body: String,

    /// Estimated reading duration, e.g. "4 min read"
    pub reading_time: String,

    /// Tags in the order the file lists them
    pub tags: Vec<String>,

    /// Whether the post is visible outside preview mode
    pub published: bool,
}

/// Estimate reading duration from a word count heuristic.
///
/// Words are whitespace-separated runs; duration rounds up so a
/// one-word post still reads "1 min read".
pub fn estimate_reading_time(body: &str, words_per_minute: usize) -> String {
    let words = body.split_whitespace().count();
    let wpm = words_per_minute.max(1);
    let minutes = words.div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}
