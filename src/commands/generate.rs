//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Folio;

/// Load every post and build the whole site
pub fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let posts = ContentLoader::new(folio).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(folio).generate(&posts)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Watch the source directory and config, rebuilding on change
pub async fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel::<DebounceEventResult>();

    // Bursts of events within the window arrive as one batch
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if folio.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", folio.source_dir);
    }

    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    for result in rx {
        match result {
            Ok(events) => {
                if !needs_rebuild(folio, events.iter().map(|e| e.path.as_path())) {
                    continue;
                }

                tracing::info!("File changed, regenerating...");
                // Config edits need a fresh site instance
                if let Err(e) = Folio::new(&folio.base_dir).and_then(|fresh| run(&fresh)) {
                    tracing::error!("Generation failed: {:#}", e);
                }
            }
            Err(e) => tracing::warn!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Whether a batch of changed paths touches anything outside the output
/// directory and editor scratch files
fn needs_rebuild<'a>(folio: &Folio, paths: impl IntoIterator<Item = &'a Path>) -> bool {
    paths.into_iter().any(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        !path.starts_with(&folio.public_dir)
            && !name.ends_with('~')
            && !name.starts_with(".#")
            && name != ".DS_Store"
    })
}
