//! Core drawing module - pure, deterministic, and testable
//!
//! This crate holds the character grid, the shape rasterizers and the motion
//! functions that animate them. It has **zero dependencies** on terminals,
//! timers or I/O:
//!
//! - **Deterministic**: every frame is a pure function of its frame index
//! - **Clipping by default**: shapes may extend past the grid; stray writes are dropped
//! - **Testable**: coverage of every primitive can be inspected without a terminal
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size character buffer with bordered text serialization
//! - [`raster`]: box, filled box, Bresenham line, midpoint circle, text runs
//! - [`motion`]: bounce, slide, blink and wave functions of the frame index
//! - [`error`]: construction errors
//!
//! # Example
//!
//! ```
//! use ascii_anim_core::{draw_box, draw_text, motion, Grid};
//! use ascii_anim_types::{Point, Rect, BOUNCE_SPEED, BOX_CHAR};
//!
//! let mut grid = Grid::new(20, 10).unwrap();
//!
//! let offset = motion::bounce(3, 4, BOUNCE_SPEED);
//! draw_box(&mut grid, Rect::new(1, 1 + offset, 6, 3), BOX_CHAR);
//! draw_text(&mut grid, Point::new(-2, 0), "HELLO");
//!
//! let text = grid.render();
//! assert_eq!(text.lines().count(), 12);
//! assert_eq!(grid.get(0, 0), 'L');
//! ```

pub mod error;
pub mod grid;
pub mod motion;
pub mod raster;

pub use ascii_anim_types as types;

// Re-export commonly used items for convenience
pub use error::GridError;
pub use grid::Grid;
pub use motion::{blink, bounce, slide, wave_offset};
pub use raster::{
    circle_points, draw_box, draw_circle, draw_line, draw_text, fill_box, line_points,
    CirclePoints, LinePoints,
};
