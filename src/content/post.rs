//! Post records and their linear ordering

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A blog post, fully resolved for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Optional summary used for page metadata
    pub description: Option<String>,

    /// Pre-rendered HTML body
    pub body: String,

    /// Tags listed at the bottom of the post
    pub tags: Vec<String>,

    /// Tags shown in the hero banner
    pub hero_tags: Vec<String>,

    /// Display date, already formatted
    pub date: String,

    /// Reading time in minutes
    pub reading_time: u32,

    /// Plain-text excerpt of the body
    pub excerpt: String,

    /// Permalink path, e.g. `/hello-world/`
    pub slug: String,

    /// Publication instant, used for ordering
    pub published: DateTime<Local>,

    /// Source file path relative to the source directory
    pub source: String,
}

impl Post {
    /// Create a post with minimal required fields
    pub fn new(title: &str, slug: &str, published: DateTime<Local>) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            body: String::new(),
            tags: Vec::new(),
            hero_tags: Vec::new(),
            date: published.format("%Y-%m-%d").to_string(),
            reading_time: 1,
            excerpt: String::new(),
            slug: slug.to_string(),
            published,
            source: String::new(),
        }
    }

    /// Reference to this post from a neighbouring page
    pub fn as_neighbor(&self) -> Neighbor {
        Neighbor {
            slug: self.slug.clone(),
            title: self.title.clone(),
        }
    }
}

/// Link target for an adjacent post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub slug: String,
    pub title: String,
}

/// Previous/next neighbours of a post in the site ordering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// The next-older post
    pub previous: Option<Neighbor>,
    /// The next-newer post
    pub next: Option<Neighbor>,
}

/// Compute neighbours for posts sorted newest first
///
/// The returned contexts are index-aligned with `posts`.
pub fn page_contexts(posts: &[Post]) -> Vec<PageContext> {
    (0..posts.len())
        .map(|i| PageContext {
            previous: posts.get(i + 1).map(Post::as_neighbor),
            next: i
                .checked_sub(1)
                .and_then(|j| posts.get(j))
                .map(Post::as_neighbor),
        })
        .collect()
}
