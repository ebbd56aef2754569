//! Terminal output module.
//!
//! A deliberately small front-end: [`TerminalRenderer`] is a
//! [`FrameSink`](crate::engine::FrameSink) that redraws each rendered frame
//! in the alternate screen. It knows nothing about shapes or motion.

pub mod renderer;

pub use ascii_anim_engine as engine;

pub use renderer::{encode_frame_into, TerminalRenderer};
