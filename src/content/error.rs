//! Content error types

use thiserror::Error;

/// Errors from the content store and repository.
///
/// Nothing here is fatal to the caller: listing paths degrade to empty
/// results, lookup paths surface `NotFound`.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No post with the given slug, or the post exists but is hidden
    /// by publish-visibility filtering.
    #[error("post not found: {0}")]
    NotFound(String),

    /// Front matter could not be parsed.
    #[error("failed to parse {file}: {reason}")]
    Parse { file: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
