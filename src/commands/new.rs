use anyhow::{bail, Result};
use std::fs;

use crate::Site;

/// Scaffold a new draft post under the blog content directory.
pub fn run(site: &Site, title: &str) -> Result<()> {
    let post_slug = slug::slugify(title);
    if post_slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}", title);
    }

    fs::create_dir_all(&site.posts_dir)?;
    let path = site.posts_dir.join(format!("{}.md", post_slug));
    if path.exists() {
        bail!("Post already exists: {:?}", path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\ntags: []\nexcerpt: \"\"\npublished: false\n---\n\nWrite here.\n",
        title,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
    );
    fs::write(&path, content)?;

    println!("Created {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_draft_post() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        run(&site, "My First Post").unwrap();

        let path = site.posts_dir.join("my-first-post.md");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\ntitle: My First Post\n"));
        assert!(content.contains("published: false"));
    }

    #[test]
    fn test_new_refuses_existing_post() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        run(&site, "Taken").unwrap();
        assert!(run(&site, "Taken").is_err());
    }

    #[test]
    fn test_new_rejects_unsluggable_title() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site, "!!!").is_err());
    }
}
