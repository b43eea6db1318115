use anyhow::Result;

use crate::Site;

/// What to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Posts,
    Tags,
}

/// Print posts or tags to stdout.
pub fn run(site: &Site, kind: ListKind) -> Result<()> {
    let repo = site.repository();

    match kind {
        ListKind::Posts => {
            let posts = repo.list_all();
            if posts.is_empty() {
                println!("No posts found.");
                return Ok(());
            }
            for post in posts {
                let marker = if post.published { " " } else { "*" };
                println!(
                    "{} {}  {}  ({})",
                    marker,
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                );
            }
        }
        ListKind::Tags => {
            let tags = repo.all_tags();
            if tags.is_empty() {
                println!("No tags found.");
                return Ok(());
            }
            for tag in tags {
                println!("{}  ({})", tag, repo.by_tag(&tag).len());
            }
        }
    }

    Ok(())
}
