//! List site content

use anyhow::Result;
use std::collections::BTreeMap;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::helpers::to_kebab_case;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(folio).load_posts()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!(
                    "  {} - {} [{}]",
                    post.published.format("%Y-%m-%d"),
                    post.title,
                    post.slug
                );
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(&posts);
            println!("Tags ({}):", tags.len());
            for (slug, count) in tags {
                println!("  {} ({})", slug, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

/// Post count per tag slug, most used first
fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for post in posts {
        let mut slugs: Vec<String> = post
            .hero_tags
            .iter()
            .chain(&post.tags)
            .map(|t| to_kebab_case(t))
            .filter(|s| !s.is_empty())
            .collect();
        slugs.sort();
        slugs.dedup();

        for slug in slugs {
            *counts.entry(slug).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
