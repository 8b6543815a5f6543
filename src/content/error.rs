//! Errors raised while loading content

use std::path::PathBuf;
use thiserror::Error;

/// A content file could not be turned into a post
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in {path:?}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("post {path:?} has no title in its front-matter")]
    MissingTitle { path: PathBuf },

    #[error("{first:?} and {second:?} both map to permalink {slug}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}
