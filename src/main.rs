use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod metadata;
mod store;
mod sync;
mod track;

use config::Settings;
use metadata::LoftyExtractor;
use store::SqliteStore;
use sync::Indexer;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut settings = Settings::load().context("failed to load configuration")?;

    // The first argument, when given, overrides the configured collection root.
    if let Some(root) = env::args().nth(1) {
        settings.collection.root = root.into();
    }
    settings.validate().map_err(anyhow::Error::msg)?;

    let store = SqliteStore::open(&settings.database.path).with_context(|| {
        format!(
            "failed to open track catalog at {}",
            settings.database.path.display()
        )
    })?;

    let mut indexer = Indexer::new(
        settings.collection,
        store,
        Box::new(LoftyExtractor),
        Vec::new(),
    );

    let summary = indexer.index_all();
    info!(
        added = summary.added,
        moved = summary.moved,
        modified = summary.modified,
        unchanged = summary.unchanged,
        failed = summary.failed,
        "full scan complete"
    );

    indexer.watch().context("failed to watch collection")?;

    Ok(())
}
