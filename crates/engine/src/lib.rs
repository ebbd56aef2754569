//! Animation engine - configuration, scene and the per-frame driver loop
//!
//! This crate wires the pure drawing primitives from `ascii-anim-core` into a
//! frame loop:
//!
//! 1. Clear the grid
//! 2. Draw every scene element for the current frame index, in order
//! 3. Serialize the grid and hand it to a [`FrameSink`]
//! 4. Advance the frame index and let the [`Pacer`] wait out the interval
//!
//! Terminal output and keyboard handling live in other crates; the engine only
//! defines the [`FrameSink`] and [`Pacer`] seams they plug into.
//!
//! # Example
//!
//! ```
//! use ascii_anim_engine::{demo_scene, AnimConfig, FrameDriver, NoPacer, StopReason, VecSink};
//!
//! let config = AnimConfig { frames: 3, ..AnimConfig::default() };
//! let mut driver = FrameDriver::new(&config, demo_scene()).unwrap();
//!
//! let mut sink = VecSink::new();
//! let outcome = driver.run(&mut sink, NoPacer).unwrap();
//!
//! assert_eq!(outcome.reason, StopReason::Completed);
//! assert_eq!(sink.frames().len(), 3);
//! ```

pub mod config;
pub mod driver;
pub mod pacer;
pub mod scene;
pub mod sink;

pub use ascii_anim_core as core;
pub use ascii_anim_types as types;

pub use config::{AnimConfig, ConfigError};
pub use driver::{DriverState, FrameDriver, RunOutcome, StopReason};
pub use pacer::{NoPacer, Pacer, SleepPacer};
pub use scene::{demo_scene, Element, Scene, DEMO_TEXT};
pub use sink::{FrameSink, RenderedFrame, VecSink, WriterSink};
