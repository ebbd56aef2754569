//! Tracing subscriber setup for the binaries.
//!
//! Filtering follows `RUST_LOG` (default `warn`). When `ASCII_ANIM_LOG_PATH`
//! names a file, logs are appended there without ANSI colours so they cannot
//! interleave with frames drawn on the terminal; otherwise they go to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_PATH: &str = "ASCII_ANIM_LOG_PATH";

pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let log_path = std::env::var(ENV_LOG_PATH)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    // A subscriber installed earlier (e.g. by a test harness) wins.
    let _ = match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {path}"))?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    Ok(())
}
