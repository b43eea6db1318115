//! Heading extraction for table-of-contents navigation

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Matches markdown headings of levels 2-4. Level 1 is reserved for
    /// the document title and never appears in navigation.
    static ref HEADING_RE: Regex = Regex::new(r"(?m)^(#{2,4})\s+(.+)$").unwrap();
}

/// A navigation entry derived from a post body.
///
/// Recomputed on every render; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// URL-safe anchor identifier
    pub id: String,
    /// Display text as written in the source
    pub text: String,
    /// Nesting level, 2 through 4
    pub level: u8,
}

/// Derive the base anchor identifier from heading text: lowercase,
/// strip everything outside `[a-z0-9 \t-]`, then collapse each
/// whitespace run to a single hyphen.
pub fn heading_id(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let mut id = String::with_capacity(kept.len());
    let mut pending_hyphen = false;
    for c in kept.chars() {
        if c.is_whitespace() {
            pending_hyphen = !id.is_empty();
        } else {
            if pending_hyphen {
                id.push('-');
                pending_hyphen = false;
            }
            id.push(c);
        }
    }
    id
}

/// The display text of a navigation-level `#`-prefixed heading, when
/// `raw` begins with one. Setext underlined headings and other levels
/// yield `None`.
pub(crate) fn atx_heading_text(raw: &str) -> Option<&str> {
    HEADING_RE
        .captures(raw)
        .map(|cap| cap.get(2).map_or("", |m| m.as_str()).trim())
}

/// Tracks identifiers already handed out in one document pass so that
/// repeated heading text gets `-2`, `-3`, ... suffixes instead of
/// colliding anchors.
#[derive(Debug, Default)]
pub struct HeadingIds {
    seen: HashMap<String, usize>,
}

impl HeadingIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the anchor for the next occurrence of `text`. The first
    /// occurrence keeps the bare identifier.
    pub fn assign(&mut self, text: &str) -> String {
        let base = heading_id(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{}-{}", base, count)
        }
    }
}

/// Scan a markdown body for headings of levels 2-4, in document order.
///
/// The returned iterator is lazy and restartable: calling the function
/// again starts a fresh scan with fresh collision numbering.
pub fn extract_headings(body: &str) -> impl Iterator<Item = Heading> + '_ {
    let mut ids = HeadingIds::new();
    HEADING_RE.captures_iter(body).map(move |cap| {
        let level = cap[1].len() as u8;
        let text = cap[2].trim().to_string();
        let id = ids.assign(&text);
        Heading { id, text, level }
    })
}
