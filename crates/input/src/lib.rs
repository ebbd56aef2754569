//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto run control and provides [`KeyPacer`], a
//! [`Pacer`](crate::engine::Pacer) that waits out the frame interval while
//! watching for `q`, `Esc` or Ctrl+C.

pub mod map;
pub mod pacer;

pub use ascii_anim_engine as engine;

pub use map::{is_interrupt, should_quit};
pub use pacer::{EventSource, KeyPacer, TerminalEvents};
