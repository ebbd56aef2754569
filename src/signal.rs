//! Ctrl+C handling for the binaries.
//!
//! SIGINT (and SIGTERM) raise a shared flag instead of killing the process.
//! Pacers poll the flag, so the driver stops at the next frame boundary and
//! the binary still restores the terminal and reports the outcome.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

/// Install the process-wide handler and return the flag it raises.
///
/// Can only succeed once per process.
pub fn stop_on_ctrl_c() -> Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        debug!("interrupt signal received");
        flag.store(true, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;
    Ok(stop)
}
