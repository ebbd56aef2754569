//! Keyboard-aware pacing: waits between frames while watching for quit keys.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use tracing::{debug, warn};

use crate::engine::Pacer;
use crate::map::is_interrupt;

/// Longest single poll before the stop flag is checked again.
const STOP_CHECK_INTERVAL: Duration = Duration::from_millis(10);

/// Source of terminal events.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Pacer that sleeps by polling for terminal input.
///
/// A quit key seen during a wait ends that wait early; the driver picks the
/// request up at the next frame boundary. An optional shared stop flag (raised
/// by a signal handler) is honoured the same way.
pub struct KeyPacer<E: EventSource = TerminalEvents> {
    events: E,
    quit: bool,
    stop: Option<Arc<AtomicBool>>,
}

impl KeyPacer<TerminalEvents> {
    pub fn new() -> Self {
        Self::with_source(TerminalEvents)
    }
}

impl Default for KeyPacer<TerminalEvents> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventSource> KeyPacer<E> {
    pub fn with_source(events: E) -> Self {
        Self {
            events,
            quit: false,
            stop: None,
        }
    }

    /// Also stop once `stop` is raised, e.g. by a SIGINT handler.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|stop| stop.load(Ordering::SeqCst))
    }

    /// Consume pending events for up to `timeout`. Returns once a quit key
    /// arrives, the timeout expires with no event pending, the stop flag is
    /// raised, or the event source fails.
    ///
    /// Events already queued are drained even when the timeout has expired,
    /// so a quit key behind other input is not left for the next frame.
    fn pump(&mut self, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        loop {
            if self.stop_requested() {
                debug!("stop flag raised");
                self.quit = true;
                return;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            // Bounded so the stop flag is rechecked while idle.
            match self.events.poll(remaining.min(STOP_CHECK_INTERVAL)) {
                Ok(true) => match self.events.read() {
                    Ok(ev) if is_interrupt(&ev) => {
                        debug!("quit key received");
                        self.quit = true;
                        return;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal event");
                        thread::sleep(remaining);
                        return;
                    }
                },
                Ok(false) if remaining.is_zero() => return,
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "failed to poll terminal events");
                    thread::sleep(remaining);
                    return;
                }
            }
        }
    }
}

impl<E: EventSource> Pacer for KeyPacer<E> {
    fn wait(&mut self, interval: Duration) {
        if !self.quit {
            self.pump(interval);
        }
    }

    fn interrupted(&mut self) -> bool {
        if !self.quit {
            // Catch keys pressed while the last frame was being drawn.
            self.pump(Duration::ZERO);
        }
        self.quit
    }
}
