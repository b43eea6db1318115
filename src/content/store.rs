//! Content store - enumerates and parses post files from a directory

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::post::estimate_reading_time;
use super::{ContentError, FrontMatter, Post};

/// Reads post files from a fixed directory.
///
/// There is no cache: every call re-reads from disk, so the file on
/// disk is always authoritative.
#[derive(Clone)]
pub struct ContentStore {
    dir: PathBuf,
    reading_speed_wpm: usize,
}

impl ContentStore {
    /// Create a store over the given posts directory.
    pub fn new<P: AsRef<Path>>(dir: P, reading_speed_wpm: usize) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            reading_speed_wpm,
        }
    }

    /// Enumerate all posts as a lazy iterator, one per markdown file.
    ///
    /// Only top-level files count: the slug maps 1:1 to a filename, so
    /// anything enumerated here is also reachable through `read`.
    /// Files are visited in sorted filename order, which makes the
    /// enumeration order (and therefore sort tie-breaking downstream)
    /// deterministic. A missing directory yields an empty iterator; a
    /// single malformed file is logged and skipped, never aborting the
    /// listing.
    pub fn entries(&self) -> impl Iterator<Item = Post> + '_ {
        let mut paths: Vec<PathBuf> = if self.dir.exists() {
            WalkDir::new(&self.dir)
                .max_depth(1)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file() && is_markdown_file(e.path()))
                .map(|e| e.path().to_path_buf())
                .collect()
        } else {
            Vec::new()
        };
        paths.sort();

        paths.into_iter().filter_map(move |path| {
            match self.load(&path) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!("Skipping post {:?}: {}", path, e);
                    None
                }
            }
        })
    }

    /// Read a single post by slug.
    ///
    /// The slug maps 1:1 to `{dir}/{slug}.md` (or `.markdown`). A
    /// missing file is `NotFound`; an unreadable or unparseable file is
    /// logged and surfaced as an error, never a panic.
    pub fn read(&self, slug: &str) -> Result<Post, ContentError> {
        let path = ["md", "markdown"]
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", slug, ext)))
            .find(|p| p.exists())
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))?;

        self.load(&path)
    }

    /// Parse one file into a Post, filling documented defaults for
    /// anything the front matter leaves out.
    fn load(&self, path: &Path) -> Result<Post, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content).map_err(|e| ContentError::Parse {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let date = fm.parse_date().unwrap_or_else(Local::now);
        let title = fm.title.unwrap_or_else(|| "Untitled".to_string());
        let excerpt = fm.excerpt.unwrap_or_default();
        let reading_time = estimate_reading_time(body, self.reading_speed_wpm);

        Ok(Post {
            slug,
            title,
            date,
            excerpt,
            body: body.to_string(),
            reading_time,
            tags: fm.tags,
            published: fm.published,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let store = ContentStore::new("/nonexistent/posts", 200);
        assert_eq!(store.entries().count(), 0);
    }

    #[test]
    fn test_entries_parse_and_default() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "first.md",
            "---\ntitle: First\ndate: 2024-03-01\ntags: [a, b]\n---\nHello world.\n",
        );
        write_post(dir.path(), "second.md", "No front matter at all.\n");

        let store = ContentStore::new(dir.path(), 200);
        let posts: Vec<Post> = store.entries().collect();
        assert_eq!(posts.len(), 2);

        // Sorted filename order
        assert_eq!(posts[0].slug, "first");
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[0].tags, vec!["a", "b"]);
        assert_eq!(posts[0].body.trim(), "Hello world.");

        assert_eq!(posts[1].slug, "second");
        assert_eq!(posts[1].title, "Untitled");
        assert!(posts[1].published);
        assert!(posts[1].excerpt.is_empty());
    }

    #[test]
    fn test_malformed_file_skipped_in_listing() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "good.md", "---\ntitle: Good\n---\nok\n");
        write_post(
            dir.path(),
            "bad.md",
            "---\ntitle: [unclosed\npublished: what\n---\nbody\n",
        );

        let store = ContentStore::new(dir.path(), 200);
        let posts: Vec<Post> = store.entries().collect();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn test_read_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "hello.md", "---\ntitle: Hi\n---\nbody\n");

        let store = ContentStore::new(dir.path(), 200);
        let post = store.read("hello").unwrap();
        assert_eq!(post.title, "Hi");

        let err = store.read("missing").unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }

    #[test]
    fn test_round_trip_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "full.md",
            "---\ntitle: Full Post\ndate: 2024-06-10\nexcerpt: The summary\ntags:\n  - zeta\n  - alpha\npublished: false\n---\nBody line one.\n\nBody line two.\n",
        );

        let store = ContentStore::new(dir.path(), 200);
        let post = store.read("full").unwrap();
        assert_eq!(post.title, "Full Post");
        assert_eq!(post.date.format("%Y-%m-%d").to_string(), "2024-06-10");
        assert_eq!(post.excerpt, "The summary");
        // Tag order preserved as given
        assert_eq!(post.tags, vec!["zeta", "alpha"]);
        assert!(!post.published);
        // Body is the file minus the metadata block
        assert!(post.body.starts_with("Body line one."));
        assert!(post.body.contains("Body line two."));
        assert!(!post.body.contains("title:"));
    }

    #[test]
    fn test_subdirectory_files_not_enumerated() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "top.md", "---\ntitle: Top\n---\nbody\n");
        let nested = dir.path().join("series");
        fs::create_dir_all(&nested).unwrap();
        write_post(&nested, "nested.md", "---\ntitle: Nested\n---\nbody\n");

        let store = ContentStore::new(dir.path(), 200);
        let slugs: Vec<String> = store.entries().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["top"]);
    }

    #[test]
    fn test_non_markdown_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "post.md", "---\ntitle: P\n---\nbody\n");
        write_post(dir.path(), "image.png", "not markdown");
        write_post(dir.path(), "notes.txt", "also not markdown");

        let store = ContentStore::new(dir.path(), 200);
        assert_eq!(store.entries().count(), 1);
    }
}
