//! tracing subscriber setup.
//!
//! Filter priority: `REGVIEW_LOG`, then `RUST_LOG`, then the level from the
//! command line or config file.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::types::LogLevel;

pub const LOG_ENV: &str = "REGVIEW_LOG";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// No subscriber is installed
    Disabled,
}

pub fn build_env_filter(level: LogLevel) -> EnvFilter {
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var)
            && !directives.trim().is_empty()
            && let Ok(filter) = EnvFilter::try_new(directives.trim())
        {
            return filter;
        }
    }
    EnvFilter::new(level.to_string())
}

pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter = build_env_filter(level);

    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .context("Failed to install log subscriber")
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .context("Failed to install log subscriber")
        }
    }
}
