//! Core types module - geometry descriptors and shared constants
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! rasterizer, the animation engine and the terminal front-end alike.
//!
//! # Coordinates
//!
//! Cells are addressed as `(x, y)` with the origin in the top-left corner,
//! `x` growing to the right and `y` growing downwards. Coordinates are signed:
//! shapes are allowed to extend past the grid edges and are clipped on write.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 40 | Grid columns |
//! | `DEFAULT_HEIGHT` | 15 | Grid rows |
//! | `DEFAULT_FRAMES` | 60 | Frames per run |
//! | `DEFAULT_FPS` | 8.0 | Target frame rate |
//! | `DEFAULT_START_DELAY_MS` | 1000 | Pause before the first frame |
//!
//! # Motion defaults
//!
//! - `BOUNCE_SPEED`: 0.2 radians per frame
//! - `BLINK_ON_FRAMES` / `BLINK_OFF_FRAMES`: 5 / 5
//! - `WAVE_AMPLITUDE`: 2 rows, `WAVE_FREQUENCY`: 0.3 radians per column
//! - `WAVE_PHASE_STEP`: 0.2 radians per frame
//!
//! # Examples
//!
//! ```
//! use ascii_anim_types::{Circle, Point, Rect, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let origin = Point::new(0, 0);
//! let moved = origin.offset(3, -1);
//! assert_eq!(moved, Point::new(3, -1));
//!
//! let rect = Rect::new(5, 2, 10, 5);
//! assert_eq!(rect.right(), 14);
//! assert_eq!(rect.bottom(), 6);
//!
//! let circle = Circle::new(30, 7, 4);
//! assert_eq!(circle.center(), Point::new(30, 7));
//!
//! assert_eq!(DEFAULT_WIDTH, 40);
//! assert_eq!(DEFAULT_HEIGHT, 15);
//! ```

/// Default grid width in cells (40 columns)
pub const DEFAULT_WIDTH: u16 = 40;

/// Default grid height in cells (15 rows)
pub const DEFAULT_HEIGHT: u16 = 15;

/// Default number of frames in a run
pub const DEFAULT_FRAMES: u64 = 60;

/// Default target frame rate
pub const DEFAULT_FPS: f64 = 8.0;

/// Pause before the first frame is drawn (milliseconds)
pub const DEFAULT_START_DELAY_MS: u64 = 1000;

/// Character every cell holds after `clear`
pub const BLANK: char = ' ';

/// Default fill character for box outlines and filled boxes
pub const BOX_CHAR: char = '#';

/// Default fill character for line segments
pub const LINE_CHAR: char = '*';

/// Default fill character for circle outlines
pub const CIRCLE_CHAR: char = 'o';

/// Border corner glyph used by `Grid::render`
pub const BORDER_CORNER: char = '+';

/// Border glyph for the top and bottom edges
pub const BORDER_HORIZONTAL: char = '-';

/// Border glyph for the left and right edges
pub const BORDER_VERTICAL: char = '|';

/// Default angular speed of the bounce motion (radians per frame)
pub const BOUNCE_SPEED: f64 = 0.2;

/// Default number of visible frames per blink cycle
pub const BLINK_ON_FRAMES: u32 = 5;

/// Default number of hidden frames per blink cycle
pub const BLINK_OFF_FRAMES: u32 = 5;

/// Default wave amplitude in rows
pub const WAVE_AMPLITUDE: i32 = 2;

/// Default wave spatial frequency (radians per column)
pub const WAVE_FREQUENCY: f64 = 0.3;

/// Phase advance of the wave per frame (radians)
pub const WAVE_PHASE_STEP: f64 = 0.2;

/// A cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`, saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left cell.
///
/// Width and height are signed; a non-positive extent describes an empty
/// rectangle rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Rightmost column covered by the rectangle.
    ///
    /// Saturates instead of wrapping; a saturated edge lies off any grid.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width).saturating_sub(1)
    }

    /// Bottom row covered by the rectangle.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height).saturating_sub(1)
    }
}

/// Circle given by centre and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl Circle {
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    pub const fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}
