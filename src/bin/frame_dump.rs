//! Headless frame dump.
//!
//! Runs the demo scene with the configured size, frame count and rate and
//! writes every rendered frame to stdout, without terminal control sequences.
//! Ctrl+C stops a paced dump at the next frame boundary.
//!
//! `--no-pacing` skips the inter-frame wait, which is handy for piping into
//! files and diffing runs. Signals keep their default behaviour in that mode.

use std::io;

use anyhow::{bail, Result};
use tracing::info;

use ascii_anim::engine::{
    demo_scene, AnimConfig, FrameDriver, NoPacer, SleepPacer, StopReason, WriterSink,
};

fn main() -> Result<()> {
    ascii_anim::logging::init()?;

    let mut paced = true;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-pacing" => paced = false,
            other => bail!("unknown argument {other:?} (expected --no-pacing)"),
        }
    }

    let config = AnimConfig::from_env()?;
    let mut driver = FrameDriver::new(&config, demo_scene())?;

    let stdout = io::stdout();
    let sink = WriterSink::new(stdout.lock()).with_counter(config.show_frame_counter);
    let outcome = if paced {
        let stop = ascii_anim::signal::stop_on_ctrl_c()?;
        driver.run(sink, SleepPacer::with_stop_flag(stop))?
    } else {
        driver.run(sink, NoPacer)?
    };

    info!(
        frames = outcome.frames_emitted,
        reason = outcome.reason.as_str(),
        "dump finished"
    );
    if outcome.reason == StopReason::Interrupted {
        eprintln!(
            "stopped after {} of {} frames",
            outcome.frames_emitted,
            driver.total_frames()
        );
    }
    Ok(())
}
