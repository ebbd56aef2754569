//! Frame driver - the clear/draw/emit/pace loop.
//!
//! The driver owns the grid and the frame counter. A run moves through two
//! states only: `Running` until the configured frame count is reached or the
//! pacer reports an interruption, then `Stopped`. A stopped driver never
//! resumes.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{AnimConfig, ConfigError};
use crate::core::Grid;
use crate::pacer::Pacer;
use crate::scene::Scene;
use crate::sink::{FrameSink, RenderedFrame};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All configured frames were emitted.
    Completed,
    /// The pacer reported an external stop between frames.
    Interrupted,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Completed => "completed",
            StopReason::Interrupted => "interrupted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped(StopReason),
}

/// Result of [`FrameDriver::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub reason: StopReason,
    pub frames_emitted: u64,
}

pub struct FrameDriver {
    grid: Grid,
    scene: Scene,
    frames: u64,
    interval: Duration,
    frame: u64,
    state: DriverState,
    /// Reused serialization buffer.
    text: String,
}

impl FrameDriver {
    /// Validate `config` and allocate the grid. Nothing is drawn yet.
    pub fn new(config: &AnimConfig, scene: Scene) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self {
            grid,
            scene,
            frames: config.frames,
            interval: config.frame_interval()?,
            frame: 0,
            state: DriverState::Running,
            text: String::new(),
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Index of the next frame to draw; equals the number of frames emitted.
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    pub fn total_frames(&self) -> u64 {
        self.frames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Compose frame `index` and return its text without emitting it or
    /// advancing the frame counter.
    pub fn draw_frame(&mut self, index: u64) -> &str {
        self.compose(index);
        &self.text
    }

    /// Run until every frame has been emitted or the pacer interrupts.
    ///
    /// Interruption is checked before each frame, never in the middle of one,
    /// so every frame handed to `sink` is complete. Errors come only from the
    /// sink; the driver stays at the failed frame in that case.
    pub fn run<S, P>(&mut self, mut sink: S, mut pacer: P) -> Result<RunOutcome>
    where
        S: FrameSink,
        P: Pacer,
    {
        if let DriverState::Stopped(reason) = self.state {
            return Ok(self.outcome(reason));
        }

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            frames = self.frames,
            elements = self.scene.len(),
            "animation started"
        );

        while self.frame < self.frames {
            if pacer.interrupted() {
                return Ok(self.stop(StopReason::Interrupted));
            }

            let index = self.frame;
            self.compose(index);
            let frame = RenderedFrame {
                index,
                total: self.frames,
                text: &self.text,
            };
            sink.emit(&frame)
                .with_context(|| format!("failed to emit frame {index}"))?;
            debug!(frame = index, "frame emitted");

            self.frame += 1;
            if self.frame < self.frames {
                pacer.wait(self.interval);
            }
        }

        Ok(self.stop(StopReason::Completed))
    }

    fn compose(&mut self, index: u64) {
        self.grid.clear();
        self.scene.draw(&mut self.grid, index);
        self.grid.render_into(&mut self.text);
    }

    fn stop(&mut self, reason: StopReason) -> RunOutcome {
        self.state = DriverState::Stopped(reason);
        info!(
            reason = reason.as_str(),
            frames_emitted = self.frame,
            "animation stopped"
        );
        self.outcome(reason)
    }

    fn outcome(&self, reason: StopReason) -> RunOutcome {
        RunOutcome {
            reason,
            frames_emitted: self.frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacer::NoPacer;
    use crate::scene::Element;
    use crate::sink::VecSink;

    struct CountingPacer {
        waits: Vec<Duration>,
        interrupt_after: Option<usize>,
        polls: usize,
    }

    impl Pacer for CountingPacer {
        fn wait(&mut self, interval: Duration) {
            self.waits.push(interval);
        }

        fn interrupted(&mut self) -> bool {
            self.polls += 1;
            matches!(self.interrupt_after, Some(n) if self.polls > n)
        }
    }

    fn config(frames: u64) -> AnimConfig {
        AnimConfig {
            width: 4,
            height: 2,
            frames,
            fps: 10.0,
            ..AnimConfig::default()
        }
    }

    fn marker_scene() -> Scene {
        Scene::new().with(Element::new("marker", |g, frame| {
            g.set(frame as i32 % 4, 0, 'x')
        }))
    }

    #[test]
    fn rejects_invalid_config_before_running() {
        let err = FrameDriver::new(&config(0), Scene::new()).err().unwrap();
        assert!(matches!(err, ConfigError::InvalidFrameCount));
    }

    #[test]
    fn waits_between_frames_only() {
        let mut driver = FrameDriver::new(&config(3), marker_scene()).unwrap();
        let mut pacer = CountingPacer {
            waits: Vec::new(),
            interrupt_after: None,
            polls: 0,
        };
        let outcome = driver.run(VecSink::new(), &mut pacer).unwrap();
        assert_eq!(outcome.reason, StopReason::Completed);
        assert_eq!(outcome.frames_emitted, 3);
        assert_eq!(pacer.waits, vec![Duration::from_millis(100); 2]);
        assert_eq!(pacer.polls, 3);
    }

    #[test]
    fn frames_are_cleared_between_draws() {
        let mut driver = FrameDriver::new(&config(2), marker_scene()).unwrap();
        let mut sink = VecSink::new();
        driver.run(&mut sink, NoPacer).unwrap();
        assert_eq!(sink.frames()[0], "+----+\n|x   |\n|    |\n+----+");
        assert_eq!(sink.frames()[1], "+----+\n| x  |\n|    |\n+----+");
    }

    #[test]
    fn interruption_stops_at_frame_boundary() {
        let mut driver = FrameDriver::new(&config(10), marker_scene()).unwrap();
        let mut sink = VecSink::new();
        let mut pacer = CountingPacer {
            waits: Vec::new(),
            interrupt_after: Some(2),
            polls: 0,
        };
        let outcome = driver.run(&mut sink, &mut pacer).unwrap();
        assert_eq!(
            outcome,
            RunOutcome {
                reason: StopReason::Interrupted,
                frames_emitted: 2
            }
        );
        assert_eq!(sink.frames().len(), 2);
        assert_eq!(driver.state(), DriverState::Stopped(StopReason::Interrupted));
    }

    #[test]
    fn stopped_driver_does_not_resume() {
        let mut driver = FrameDriver::new(&config(2), marker_scene()).unwrap();
        driver.run(VecSink::new(), NoPacer).unwrap();

        let mut sink = VecSink::new();
        let outcome = driver.run(&mut sink, NoPacer).unwrap();
        assert_eq!(outcome.reason, StopReason::Completed);
        assert_eq!(outcome.frames_emitted, 2);
        assert!(sink.frames().is_empty());
    }

    #[test]
    fn sink_errors_propagate() {
        struct FailingSink;
        impl FrameSink for FailingSink {
            fn emit(&mut self, _frame: &RenderedFrame<'_>) -> Result<()> {
                anyhow::bail!("closed")
            }
        }

        let mut driver = FrameDriver::new(&config(2), marker_scene()).unwrap();
        let err = driver.run(FailingSink, NoPacer).unwrap_err();
        assert!(err.to_string().contains("frame 0"));
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.frame_index(), 0);
    }

    #[test]
    fn draw_frame_does_not_advance() {
        let mut driver = FrameDriver::new(&config(5), marker_scene()).unwrap();
        let text = driver.draw_frame(3).to_owned();
        assert_eq!(text, "+----+\n|   x|\n|    |\n+----+");
        assert_eq!(driver.frame_index(), 0);
    }
}
