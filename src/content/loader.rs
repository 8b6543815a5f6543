//! Content loader - loads posts from the source directory

use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MarkdownRenderer, Post};
use crate::config::SiteConfig;
use crate::helpers::{count_words, excerpt, format_date, url_for};
use crate::Folio;

/// Loads posts from `<source>/_posts`
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self {
            folio,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all published posts, newest first
    ///
    /// Any post that cannot be loaded fails the whole load.
    pub fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let posts_dir = self.folio.source_dir.join("_posts");
        if !posts_dir.exists() {
            tracing::warn!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen: HashMap<String, std::path::PathBuf> = HashMap::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_post(path)? {
                Some(post) => {
                    if let Some(first) = seen.insert(post.slug.clone(), path.to_path_buf()) {
                        return Err(ContentError::DuplicateSlug {
                            slug: post.slug,
                            first,
                            second: path.to_path_buf(),
                        });
                    }
                    tracing::debug!("Loaded post {:?} -> {}", path, post.slug);
                    posts.push(post);
                }
                None => tracing::debug!("Skipping unpublished post {:?}", path),
            }
        }

        posts.sort_by(|a, b| b.published.cmp(&a.published));

        Ok(posts)
    }

    /// Load a single post, `None` when it is an unpublished draft
    fn load_post(&self, path: &Path) -> Result<Option<Post>, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);

        let source = path
            .strip_prefix(&self.folio.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        build_post(
            &self.folio.config,
            &self.renderer,
            path,
            &source,
            &content,
            modified.unwrap_or_else(Local::now),
        )
    }
}

/// Turn the text of a post file into a resolved [`Post`]
///
/// `fallback_date` is used when the front-matter has no parseable date.
pub fn build_post(
    config: &SiteConfig,
    renderer: &MarkdownRenderer,
    path: &Path,
    source: &str,
    content: &str,
    fallback_date: DateTime<Local>,
) -> Result<Option<Post>, ContentError> {
    let (fm, body) = FrontMatter::parse(content).map_err(|e| ContentError::FrontMatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !fm.published && !config.render_drafts {
        return Ok(None);
    }

    let title = fm
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ContentError::MissingTitle {
            path: path.to_path_buf(),
        })?
        .to_string();

    let published = fm.parse_date().unwrap_or(fallback_date);
    let html = renderer.render(body);

    let reading_time = fm
        .reading_time
        .unwrap_or_else(|| estimate_reading_time(count_words(&html), config.words_per_minute));

    let summary = match fm.excerpt {
        Some(ref e) if !e.trim().is_empty() => e.trim().to_string(),
        _ => excerpt(&html, config.excerpt_length),
    };

    let permalink = url_for(config, &post_slug(path));
    let mut post = Post::new(&title, &permalink, published);
    post.description = fm.description.filter(|d| !d.trim().is_empty());
    post.body = html;
    post.tags = fm.tags;
    post.hero_tags = fm.hero_tags;
    post.date = format_date(&published, &config.date_format);
    post.reading_time = reading_time;
    post.excerpt = summary;
    post.source = source.to_string();

    Ok(Some(post))
}

/// Permalink path of a post: `/<file-stem>/`, or `/<dir>/` for `<dir>/index.md`
pub fn post_slug(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let name = if stem == "index" {
        path.parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or(stem)
    } else {
        stem
    };
    format!("/{}/", slug::slugify(name))
}

/// Minutes needed to read `words`, at least one
pub fn estimate_reading_time(words: usize, words_per_minute: usize) -> u32 {
    let minutes = words.div_ceil(words_per_minute.max(1));
    u32::try_from(minutes.max(1)).unwrap_or(u32::MAX)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "markdown" | "mdx"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fallback() -> DateTime<Local> {
        Local.with_ymd_and_hms(2019, 5, 4, 0, 0, 0).unwrap()
    }

    fn build(content: &str) -> Result<Option<Post>, ContentError> {
        build_post(
            &SiteConfig::default(),
            &MarkdownRenderer::new(),
            Path::new("source/_posts/hello-world.md"),
            "_posts/hello-world.md",
            content,
            fallback(),
        )
    }

    #[test]
    fn test_build_post() {
        let post = build(
            r#"---
title: Hello World
date: 2024-01-15
description: First words
tags: [systems]
heroTags: [Go, Rust]
readingTime: 7
---

Some **markdown** body.
"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(post.title, "Hello World");
        assert_eq!(post.slug, "/hello-world/");
        assert_eq!(post.date, "January 15th, 2024");
        assert_eq!(post.reading_time, 7);
        assert_eq!(post.hero_tags, vec!["Go", "Rust"]);
        assert_eq!(post.tags, vec!["systems"]);
        assert_eq!(post.description.as_deref(), Some("First words"));
        assert!(post.body.contains("<strong>markdown</strong>"));
        assert_eq!(post.excerpt, "Some markdown body.");
        assert_eq!(post.source, "_posts/hello-world.md");
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let post = build("---\ntitle: Bare\n---\nShort.\n").unwrap().unwrap();
        assert_eq!(post.published, fallback());
        assert_eq!(post.date, "May 4th, 2019");
        assert_eq!(post.reading_time, 1);
        assert_eq!(post.description, None);
        assert!(post.tags.is_empty());
        assert!(post.hero_tags.is_empty());
    }

    #[test]
    fn test_excerpt_override() {
        let post = build("---\ntitle: X\nexcerpt: Custom summary\n---\nBody text.\n")
            .unwrap()
            .unwrap();
        assert_eq!(post.excerpt, "Custom summary");
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let err = build("---\ndate: 2024-01-15\n---\nNo title.\n").unwrap_err();
        assert!(matches!(err, ContentError::MissingTitle { .. }));
    }

    #[test]
    fn test_malformed_front_matter_is_reported() {
        let err = build("---\ntitle: Real Title\nreadingTime: five\n---\nBody\n").unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
    }

    #[test]
    fn test_unpublished_is_skipped() {
        let post = build("---\ntitle: Draft\npublished: false\n---\nWIP\n").unwrap();
        assert!(post.is_none());
    }

    #[test]
    fn test_permalink_includes_root() {
        let config = SiteConfig {
            root: "/blog/".to_string(),
            ..SiteConfig::default()
        };
        let post = build_post(
            &config,
            &MarkdownRenderer::new(),
            Path::new("source/_posts/hello-world.md"),
            "_posts/hello-world.md",
            "---\ntitle: Nested\n---\nBody.\n",
            fallback(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(post.slug, "/blog/hello-world/");
    }

    #[test]
    fn test_post_slug() {
        assert_eq!(post_slug(Path::new("_posts/My Post.md")), "/my-post/");
        assert_eq!(
            post_slug(Path::new("_posts/intro-to-rust/index.md")),
            "/intro-to-rust/"
        );
    }

    #[test]
    fn test_estimate_reading_time() {
        assert_eq!(estimate_reading_time(0, 200), 1);
        assert_eq!(estimate_reading_time(200, 200), 1);
        assert_eq!(estimate_reading_time(201, 200), 2);
        assert_eq!(estimate_reading_time(1000, 0), 1000);
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("source/_posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("older.md"),
            "---\ntitle: Older\ndate: 2020-01-01\n---\nOld.\n",
        )
        .unwrap();
        fs::write(
            posts_dir.join("newer.md"),
            "---\ntitle: Newer\ndate: 2023-01-01\n---\nNew.\n",
        )
        .unwrap();
        fs::write(posts_dir.join("notes.txt"), "ignored").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let posts = ContentLoader::new(&folio).load_posts().unwrap();

        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }

    #[test]
    fn test_load_posts_rejects_duplicate_permalinks() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("source/_posts");
        fs::create_dir_all(posts_dir.join("intro")).unwrap();
        fs::write(posts_dir.join("intro.md"), "---\ntitle: One\n---\nA.\n").unwrap();
        fs::write(
            posts_dir.join("intro/index.md"),
            "---\ntitle: Two\n---\nB.\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let err = ContentLoader::new(&folio).load_posts().unwrap_err();
        match err {
            ContentError::DuplicateSlug { slug, .. } => assert_eq!(slug, "/intro/"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_posts_without_directory() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&folio).load_posts().unwrap().is_empty());
    }
}
