//! Frame pacing and interruption.
//!
//! The driver asks its [`Pacer`] two things: whether the run was interrupted
//! (checked at every frame boundary) and to wait out the inter-frame interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Longest single sleep before the stop flag is checked again.
const STOP_CHECK_INTERVAL: Duration = Duration::from_millis(10);

pub trait Pacer {
    /// Block for roughly `interval` before the next frame.
    fn wait(&mut self, interval: Duration);

    /// Whether an external stop was requested. Polled between frames only.
    fn interrupted(&mut self) -> bool {
        false
    }
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn wait(&mut self, interval: Duration) {
        (**self).wait(interval)
    }

    fn interrupted(&mut self) -> bool {
        (**self).interrupted()
    }
}

/// Never waits and is never interrupted. Useful for headless dumps and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn wait(&mut self, _interval: Duration) {}
}

/// Sleeps the current thread; stops once the shared flag is raised.
///
/// The flag is usually raised from a signal handler (see the binaries). A
/// wait in progress ends within about 10ms of the flag going up; the driver
/// then stops at the next frame boundary.
#[derive(Debug, Clone, Default)]
pub struct SleepPacer {
    stop: Arc<AtomicBool>,
}

impl SleepPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_flag(stop: Arc<AtomicBool>) -> Self {
        Self { stop }
    }

    /// Handle that can be raised from elsewhere to interrupt the run.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }
}

impl Pacer for SleepPacer {
    fn wait(&mut self, interval: Duration) {
        // `None` means the deadline is past what `Instant` can hold.
        let deadline = Instant::now().checked_add(interval);
        while !self.stop.load(Ordering::SeqCst) {
            let remaining = match deadline {
                Some(d) => d.saturating_duration_since(Instant::now()),
                None => STOP_CHECK_INTERVAL,
            };
            if remaining.is_zero() {
                break;
            }
            thread::sleep(remaining.min(STOP_CHECK_INTERVAL));
        }
    }

    fn interrupted(&mut self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_pacer_reports_raised_flag() {
        let mut pacer = SleepPacer::new();
        assert!(!pacer.interrupted());
        pacer.stop_flag().store(true, Ordering::SeqCst);
        assert!(pacer.interrupted());
    }

    #[test]
    fn sleep_pacer_waits() {
        let mut pacer = SleepPacer::new();
        let start = Instant::now();
        pacer.wait(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn raised_flag_cuts_a_wait_short() {
        let stop = Arc::new(AtomicBool::new(false));
        let mut pacer = SleepPacer::with_stop_flag(Arc::clone(&stop));

        let raiser = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            stop.store(true, Ordering::SeqCst);
        });
        let start = Instant::now();
        pacer.wait(Duration::from_secs(30));
        raiser.join().unwrap();

        assert!(start.elapsed() < Duration::from_secs(10));
        assert!(pacer.interrupted());
    }

    #[test]
    fn wait_with_flag_already_raised_returns_at_once() {
        let mut pacer = SleepPacer::new();
        pacer.stop_flag().store(true, Ordering::SeqCst);
        let start = Instant::now();
        pacer.wait(Duration::MAX);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn no_pacer_is_never_interrupted() {
        let mut pacer = NoPacer;
        pacer.wait(Duration::from_secs(3600));
        assert!(!pacer.interrupted());
    }
}
