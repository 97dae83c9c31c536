pub mod browse;
pub mod list;

use anyhow::{Context, Result, bail};
use regview_core::InMemoryCatalog;
use tracing::info;

use crate::config::Config;

pub fn load_catalog(config: &Config, cli_override: Option<&str>) -> Result<InMemoryCatalog> {
    let Some(path) = config.catalog_path(cli_override) else {
        bail!("No catalog configured. Pass --catalog PATH or set `catalog` in config.toml");
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = InMemoryCatalog::from_json(&content)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;

    info!(path = %path.display(), artifacts = catalog.len(), "catalog loaded");
    Ok(catalog)
}
