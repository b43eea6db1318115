//! Post repository - query operations over the content store

use std::collections::BTreeSet;

use super::{ContentError, ContentStore, Post};

/// Queries over the full set of posts, independent of storage details.
///
/// Publish visibility is applied uniformly: outside preview mode an
/// unpublished post is indistinguishable from a missing one.
#[derive(Clone)]
pub struct PostRepository {
    store: ContentStore,
    preview: bool,
}

impl PostRepository {
    /// Create a repository. `preview` is the authoring-mode toggle that
    /// relaxes publish-visibility filtering.
    pub fn new(store: ContentStore, preview: bool) -> Self {
        Self { store, preview }
    }

    /// All visible posts, newest first.
    ///
    /// The sort is stable, so posts sharing a date keep the store's
    /// enumeration order.
    pub fn list_all(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .store
            .entries()
            .filter(|p| p.published || self.preview)
            .collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Look up a single post by its exact slug.
    ///
    /// Read or parse failures are logged and folded into `NotFound`;
    /// the caller only ever distinguishes "have it" from "don't".
    pub fn get(&self, slug: &str) -> Result<Post, ContentError> {
        let post = self.store.read(slug).map_err(|e| {
            if !matches!(e, ContentError::NotFound(_)) {
                tracing::warn!("Failed to read post '{}': {}", slug, e);
            }
            ContentError::NotFound(slug.to_string())
        })?;

        if !post.published && !self.preview {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        Ok(post)
    }

    /// The first `n` posts of `list_all`'s ordering.
    pub fn recent(&self, n: usize) -> Vec<Post> {
        let mut posts = self.list_all();
        posts.truncate(n);
        posts
    }

    /// Distinct tags across all visible posts, sorted lexicographically.
    pub fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .list_all()
            .into_iter()
            .flat_map(|p| p.tags)
            .collect();
        tags.into_iter().collect()
    }

    /// Posts carrying a tag that matches the query ignoring case.
    pub fn by_tag(&self, tag: &str) -> Vec<Post> {
        let wanted = tag.to_lowercase();
        self.list_all()
            .into_iter()
            .filter(|p| p.tags.iter().any(|t| t.to_lowercase() == wanted))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_post(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn seeded_repo(preview: bool) -> (tempfile::TempDir, PostRepository) {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "oldest.md",
            "---\ntitle: Oldest\ndate: 2023-01-01\ntags: [Rust]\n---\nbody\n",
        );
        write_post(
            dir.path(),
            "newest.md",
            "---\ntitle: Newest\ndate: 2024-06-01\ntags: [rust, web]\n---\nbody\n",
        );
        write_post(
            dir.path(),
            "middle.md",
            "---\ntitle: Middle\ndate: 2023-07-15\ntags: [notes]\n---\nbody\n",
        );
        write_post(
            dir.path(),
            "draft.md",
            "---\ntitle: Draft\ndate: 2024-12-01\npublished: false\ntags: [secret]\n---\nbody\n",
        );

        let store = ContentStore::new(dir.path(), 200);
        let repo = PostRepository::new(store, preview);
        (dir, repo)
    }

    #[test]
    fn test_list_all_sorted_and_filtered() {
        let (_dir, repo) = seeded_repo(false);
        let posts = repo.list_all();
        assert_eq!(posts.len(), 3);
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
        for window in posts.windows(2) {
            assert!(window[0].date >= window[1].date);
        }
        assert!(posts.iter().all(|p| p.published));
    }

    #[test]
    fn test_preview_mode_shows_drafts() {
        let (_dir, repo) = seeded_repo(true);
        let posts = repo.list_all();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].title, "Draft");
    }

    #[test]
    fn test_stable_tie_break_on_equal_dates() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "b.md", "---\ntitle: B\ndate: 2024-01-01\n---\n\n");
        write_post(dir.path(), "a.md", "---\ntitle: A\ndate: 2024-01-01\n---\n\n");
        write_post(dir.path(), "c.md", "---\ntitle: C\ndate: 2024-01-01\n---\n\n");

        let repo = PostRepository::new(ContentStore::new(dir.path(), 200), false);
        let titles: Vec<String> = repo.list_all().into_iter().map(|p| p.title).collect();
        // Enumeration (sorted filename) order preserved among ties
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_get_by_slug() {
        let (_dir, repo) = seeded_repo(false);
        let post = repo.get("middle").unwrap();
        assert_eq!(post.title, "Middle");

        assert!(matches!(
            repo.get("nope"),
            Err(ContentError::NotFound(_))
        ));
    }

    #[test]
    fn test_every_listed_post_is_gettable() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "plain.md", "---\ntitle: Plain\n---\nbody\n");
        let nested = dir.path().join("series");
        std::fs::create_dir_all(&nested).unwrap();
        write_post(&nested, "nested.md", "---\ntitle: Nested\n---\nbody\n");

        let repo = PostRepository::new(ContentStore::new(dir.path(), 200), false);
        let posts = repo.list_all();
        assert!(!posts.is_empty());
        for post in posts {
            assert_eq!(repo.get(&post.slug).unwrap().slug, post.slug);
        }
    }

    #[test]
    fn test_get_unpublished_looks_missing() {
        let (_dir, repo) = seeded_repo(false);
        assert!(matches!(
            repo.get("draft"),
            Err(ContentError::NotFound(_))
        ));

        let (_dir2, preview_repo) = seeded_repo(true);
        assert_eq!(preview_repo.get("draft").unwrap().title, "Draft");
    }

    #[test]
    fn test_recent() {
        let (_dir, repo) = seeded_repo(false);
        let all = repo.list_all();

        let two = repo.recent(2);
        assert_eq!(two.len(), 2);
        assert_eq!(two[0].slug, all[0].slug);
        assert_eq!(two[1].slug, all[1].slug);

        assert!(repo.recent(0).is_empty());
        assert_eq!(repo.recent(100).len(), all.len());
    }

    #[test]
    fn test_all_tags_sorted_distinct() {
        let (_dir, repo) = seeded_repo(false);
        let tags = repo.all_tags();
        // Drafts excluded; "Rust" and "rust" are distinct identities
        assert_eq!(tags, vec!["Rust", "notes", "rust", "web"]);
    }

    #[test]
    fn test_by_tag_case_insensitive() {
        let (_dir, repo) = seeded_repo(false);
        let posts = repo.by_tag("RUST");
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Oldest"]);

        assert!(repo.by_tag("secret").is_empty());
        assert!(repo.by_tag("missing").is_empty());
    }
}
