//! ASCII animation (workspace facade crate).
//!
//! Re-exports the member crates as `ascii_anim::{types, core, engine, input, term}`
//! and hosts the logging and Ctrl+C setup shared by the binaries.

pub mod logging;
pub mod signal;

pub use ascii_anim_core as core;
pub use ascii_anim_engine as engine;
pub use ascii_anim_input as input;
pub use ascii_anim_term as term;
pub use ascii_anim_types as types;
