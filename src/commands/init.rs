//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Folio;

const CONFIG_TEMPLATE: &str = r#"# Site
title: Raj Rajhans
description: ''
author: Raj Rajhans
author_bio: Ambivert. Perpetually audacious. Tech aficionado, and a striving nonconformist
author_picture: /raj-profile-pic-1.png
language: en

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public
tag_dir: tags

# Writing
date_format: MMMM Do, YYYY
words_per_minute: 200
excerpt_length: 160
render_drafts: false

# Navigation
nav_links:
  - label: Home
    path: /
  - label: Blog
    path: /blog/
  - label: About
    path: /about/

footer_links: []
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("source/_posts"))?;

    write_if_missing(&target_dir.join("_config.yml"), CONFIG_TEMPLATE)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
description: The first post on this site
heroTags: [Welcome]
tags: [meta]
---

This is your very first post. Edit it under `source/_posts/` and run
`folio-rs generate` to rebuild the site.

## Writing

```bash
$ folio-rs new "My New Post"
```
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    write_if_missing(
        &target_dir.join("source/_posts/hello-world.md"),
        &sample_post,
    )?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::warn!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}

/// Run the init command with an existing site instance
pub fn run(folio: &Folio) -> Result<()> {
    init_site(&folio.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_loadable_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.author, "Raj Rajhans");
        assert_eq!(folio.config.nav_links.len(), 3);
        assert!(folio.config.footer_links.is_empty());

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello World");
        assert_eq!(posts[0].hero_tags, vec!["Welcome"]);
    }

    #[test]
    fn test_init_through_site_handle() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("blog");
        Folio::new(&target).unwrap().init().unwrap();

        assert!(target.join("_config.yml").exists());
        assert!(target.join("source/_posts/hello-world.md").exists());
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Mine\n").unwrap();
        init_site(dir.path()).unwrap();

        let config = fs::read_to_string(dir.path().join("_config.yml")).unwrap();
        assert_eq!(config, "title: Mine\n");
    }
}
