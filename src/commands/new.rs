//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Write `source/_posts/<slug>.md` with a front-matter skeleton
pub fn create_post(folio: &Folio, title: &str) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = folio.source_dir.join("_posts");
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        r#"---
title: {}
date: {}
description: ''
heroTags: []
tags: []
---
"#,
        serde_yaml::to_string(title)?.trim_end(),
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;
    tracing::debug!("Created post {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(folio: &Folio, title: &str) -> Result<()> {
    let path = create_post(folio, title)?;
    println!("Created: {:?}", path);
    Ok(())
}
