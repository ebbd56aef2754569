//! Terminal ASCII animation runner (default binary).
//!
//! Plays the demo scene in the alternate screen. `q`, `Esc` or Ctrl+C stop the
//! run between frames; Ctrl+C during the start delay skips the run. Configuration
//! comes from `ASCII_ANIM_*` environment variables and an optional TOML file
//! (see `ascii_anim::engine::config`).

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use ascii_anim::engine::{
    demo_scene, AnimConfig, FrameDriver, Pacer, RunOutcome, SleepPacer, StopReason,
};
use ascii_anim::input::KeyPacer;
use ascii_anim::term::TerminalRenderer;

fn main() -> Result<()> {
    ascii_anim::logging::init()?;

    let config = AnimConfig::from_env()?;
    let mut driver = FrameDriver::new(&config, demo_scene())?;
    info!(?config, "configuration loaded");

    let stop = ascii_anim::signal::stop_on_ctrl_c()?;

    println!("Starting ASCII Animation...");
    println!("Press Ctrl+C to stop\n");

    let mut delay = SleepPacer::with_stop_flag(Arc::clone(&stop));
    delay.wait(config.start_delay());
    let reason = if delay.interrupted() {
        info!("interrupted during start delay");
        StopReason::Interrupted
    } else {
        run_in_terminal(&config, &mut driver, stop)?.reason
    };

    if reason == StopReason::Interrupted {
        println!("\nAnimation stopped by user.");
    }
    println!("\nAnimation complete!");
    Ok(())
}

fn run_in_terminal(
    config: &AnimConfig,
    driver: &mut FrameDriver,
    stop: Arc<AtomicBool>,
) -> Result<RunOutcome> {
    let mut term = TerminalRenderer::new().with_counter(config.show_frame_counter);
    term.enter()?;

    // Raw mode turns Ctrl+C into a key; the flag still covers `kill -INT`.
    let result = driver.run(&mut term, KeyPacer::new().with_stop_flag(stop));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
