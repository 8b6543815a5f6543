//! Generator module - renders pages through the components and writes them out

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::clock::{Clock, SystemClock};
use crate::components::{
    render_blog_post, render_document, render_post_list, LayoutOptions, Seo,
};
use crate::content::{page_contexts, Post};
use crate::helpers::{strip_root, to_kebab_case};
use crate::Folio;

/// Posts sharing one tag slug
struct TagGroup<'a> {
    /// Label of the first occurrence of the tag
    name: String,
    posts: Vec<&'a Post>,
}

/// Static site generator
pub struct Generator {
    folio: Folio,
    clock: Box<dyn Clock>,
}

impl Generator {
    /// Create a generator reading the system clock
    pub fn new(folio: &Folio) -> Self {
        Self::with_clock(folio, Box::new(SystemClock))
    }

    /// Create a generator with an explicit clock
    pub fn with_clock(folio: &Folio, clock: Box<dyn Clock>) -> Self {
        Self {
            folio: folio.clone(),
            clock,
        }
    }

    /// Generate the entire site from posts sorted newest first
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)?;

        self.copy_source_assets()?;
        self.generate_post_pages(posts)?;
        self.generate_index_page(posts)?;
        self.generate_tag_pages(posts)?;

        Ok(())
    }

    /// Generate one page per post with previous/next links
    fn generate_post_pages(&self, posts: &[Post]) -> Result<()> {
        let site = &self.folio.config;

        for (post, context) in posts.iter().zip(page_contexts(posts)) {
            let html = render_document(
                site,
                &Seo::for_post(site, post),
                render_blog_post(site, post, &context),
                &LayoutOptions::blog_post(),
                self.clock.as_ref(),
            );

            let output_path = self.page_path(strip_root(site, &post.slug));
            write_page(&output_path, &html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        tracing::info!("Generated {} post pages", posts.len());
        Ok(())
    }

    /// Generate the home page listing every post
    fn generate_index_page(&self, posts: &[Post]) -> Result<()> {
        let site = &self.folio.config;
        let all: Vec<&Post> = posts.iter().collect();

        let html = render_document(
            site,
            &Seo::for_page(site, &site.title, "/"),
            render_post_list("Blog", &all),
            &LayoutOptions::default(),
            self.clock.as_ref(),
        );

        write_page(&self.folio.public_dir.join("index.html"), &html)?;
        tracing::debug!("Generated index page");
        Ok(())
    }

    /// Generate one listing page per distinct tag slug
    fn generate_tag_pages(&self, posts: &[Post]) -> Result<()> {
        let site = &self.folio.config;
        let groups = group_by_tag(posts);

        for (slug, group) in &groups {
            let title = format!("Posts tagged \"{}\"", group.name);
            let path = format!("{}/{}/", site.tag_dir.trim_matches('/'), slug);

            let html = render_document(
                site,
                &Seo::for_page(site, &title, &path),
                render_post_list(&title, &group.posts),
                &LayoutOptions::default(),
                self.clock.as_ref(),
            );

            write_page(&self.page_path(&path), &html)?;
        }

        tracing::info!("Generated {} tag pages", groups.len());
        Ok(())
    }

    /// `public/<path>/index.html`
    fn page_path(&self, path: &str) -> PathBuf {
        self.folio
            .public_dir
            .join(path.trim_matches('/'))
            .join("index.html")
    }

    /// Copy static files (images, styles, ...) to the public directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.folio.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let is_markdown = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("md" | "markdown" | "mdx")
            );
            let is_special = relative
                .components()
                .next()
                .and_then(|c| c.as_os_str().to_str())
                .map(|first| first.starts_with('_'))
                .unwrap_or(false);

            if is_markdown || is_special {
                continue;
            }

            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest).with_context(|| format!("Failed to copy {:?}", path))?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

/// Group posts by the kebab-case slug of their tags and hero tags
///
/// Each post appears at most once per group, in input order.
fn group_by_tag(posts: &[Post]) -> BTreeMap<String, TagGroup<'_>> {
    let mut groups: BTreeMap<String, TagGroup<'_>> = BTreeMap::new();

    for post in posts {
        for tag in post.hero_tags.iter().chain(&post.tags) {
            let slug = to_kebab_case(tag);
            if slug.is_empty() {
                continue;
            }

            let group = groups.entry(slug).or_insert_with(|| TagGroup {
                name: tag.clone(),
                posts: Vec::new(),
            });
            if !group.posts.iter().any(|p| std::ptr::eq(*p, post)) {
                group.posts.push(post);
            }
        }
    }

    groups
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create dir {:?}", parent))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn post(title: &str, day: u32, hero_tags: &[&str], tags: &[&str]) -> Post {
        let date = Local.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        let mut post = Post::new(title, &format!("/{}/", slug::slugify(title)), date);
        post.hero_tags = hero_tags.iter().map(|t| t.to_string()).collect();
        post.tags = tags.iter().map(|t| t.to_string()).collect();
        post.body = format!("<p>{} body</p>", title);
        post
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post("Newest", 3, &["Rust"], &["systems"]),
            post("Middle", 2, &["Go", "Rust"], &["Systems"]),
            post("Oldest", 1, &[], &[]),
        ]
    }

    fn generator(dir: &TempDir) -> Generator {
        let folio = Folio::new(dir.path()).unwrap();
        let clock = FixedClock(Local.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap());
        Generator::with_clock(&folio, Box::new(clock))
    }

    #[test]
    fn test_group_by_tag() {
        let posts = sample_posts();
        let groups = group_by_tag(&posts);

        let slugs: Vec<_> = groups.keys().map(String::as_str).collect();
        assert_eq!(slugs, vec!["go", "rust", "systems"]);

        assert_eq!(groups["rust"].posts.len(), 2);
        // "systems" and "Systems" share a slug, first spelling wins
        assert_eq!(groups["systems"].name, "systems");
        assert_eq!(groups["systems"].posts.len(), 2);
    }

    #[test]
    fn test_generate_writes_pages() {
        let dir = TempDir::new().unwrap();
        let generator = generator(&dir);
        generator.generate(&sample_posts()).unwrap();

        let public = dir.path().join("public");
        for page in [
            "index.html",
            "newest/index.html",
            "middle/index.html",
            "oldest/index.html",
            "tags/go/index.html",
            "tags/rust/index.html",
            "tags/systems/index.html",
        ] {
            assert!(public.join(page).exists(), "missing {}", page);
        }

        let middle = fs::read_to_string(public.join("middle/index.html")).unwrap();
        assert!(middle.contains("<title>Middle | Raj Rajhans</title>"));
        assert!(middle.contains(r#"href="/oldest/""#));
        assert!(middle.contains(r#"href="/newest/""#));
        assert!(middle.contains(r#"href="/tags/go""#));
        assert!(middle.contains("Copyright © Raj Rajhans 2023"));

        let rust = fs::read_to_string(public.join("tags/rust/index.html")).unwrap();
        assert!(rust.contains(r#"href="/newest/""#));
        assert!(rust.contains(r#"href="/middle/""#));
        assert!(!rust.contains(r#"href="/oldest/""#));
    }

    #[test]
    fn test_nested_root_links() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "root: /blog/\n").unwrap();
        let posts_dir = dir.path().join("source/_posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("a.md"),
            "---\ntitle: A\ndate: 2024-01-02\nheroTags: [Rust]\n---\nFirst.\n",
        )
        .unwrap();
        fs::write(
            posts_dir.join("b.md"),
            "---\ntitle: B\ndate: 2024-01-01\n---\nSecond.\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let posts = crate::content::loader::ContentLoader::new(&folio)
            .load_posts()
            .unwrap();
        generator(&dir).generate(&posts).unwrap();

        let public = dir.path().join("public");
        assert!(public.join("a/index.html").exists());
        assert!(!public.join("blog").exists());

        let index = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(index.contains(r#"href="/blog/a/""#));
        assert!(!index.contains(r#"href="/a/""#));

        let a = fs::read_to_string(public.join("a/index.html")).unwrap();
        assert!(a.contains(r#"href="/blog/b/""#));
        assert!(a.contains(r#"href="/blog/tags/rust""#));
        assert!(a.contains(r#"content="http://example.com/blog/a/""#));

        let tag = fs::read_to_string(public.join("tags/rust/index.html")).unwrap();
        assert!(tag.contains(r#"href="/blog/a/""#));
    }

    #[test]
    fn test_copies_static_assets_only() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source");
        fs::create_dir_all(source.join("_posts")).unwrap();
        fs::create_dir_all(source.join("images")).unwrap();
        fs::write(source.join("images/pic.png"), b"png").unwrap();
        fs::write(source.join("_posts/post.md"), "---\ntitle: x\n---\n").unwrap();
        fs::write(source.join("about.md"), "# About").unwrap();

        generator(&dir).generate(&[]).unwrap();

        let public = dir.path().join("public");
        assert!(public.join("images/pic.png").exists());
        assert!(!public.join("_posts").exists());
        assert!(!public.join("about.md").exists());
        assert!(public.join("index.html").exists());
    }
}
