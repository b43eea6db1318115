//! Content loading and queries over the blog's markdown files

mod error;
mod frontmatter;
mod post;
mod repository;
mod store;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use post::Post;
pub use repository::PostRepository;
pub use store::ContentStore;
