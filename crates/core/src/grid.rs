//! Grid module - the fixed-size character buffer every shape is drawn into
//!
//! The grid is a `width x height` array of characters stored flat in row-major
//! order (`y * width + x`). Dimensions are fixed at construction; `clear` only
//! resets contents.
//!
//! Writes outside the grid are dropped silently. Rasterizers rely on this to
//! emit shapes that hang off the edges without checking bounds themselves.
//!
//! Cells only ever hold printable characters: control characters (`'\n'`,
//! `'\t'`, escape sequences) are stored as a space, so the rendered frame
//! always has `height + 2` lines.

use crate::error::GridError;
use crate::types::{BLANK, BORDER_CORNER, BORDER_HORIZONTAL, BORDER_VERTICAL};

/// Fixed-size 2D character buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid filled with spaces.
    ///
    /// Fails with [`GridError::InvalidDimension`] when either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![BLANK; len],
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw row-major cell storage.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Check whether `(x, y)` lies inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).is_some()
    }

    /// Reset every cell to a space. Dimensions are kept.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Write `ch` at `(x, y)`; out-of-bounds writes are ignored.
    ///
    /// A control character overwrites the cell with a space.
    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = if ch.is_control() { BLANK } else { ch };
        }
    }

    /// Character at `(x, y)`, or a space when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> char {
        self.idx(x, y).map(|i| self.cells[i]).unwrap_or(BLANK)
    }

    /// Iterate over the rows as character slices, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Serialize into a bordered text block.
    ///
    /// ```text
    /// +----+
    /// |    |
    /// +----+
    /// ```
    ///
    /// Lines are joined with `\n`; there is no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rendered_len());
        self.render_into(&mut out);
        out
    }

    /// Serialize into an existing string, replacing its contents.
    ///
    /// Reusing the same `String` across frames avoids reallocating once it has
    /// grown to the frame size.
    pub fn render_into(&self, out: &mut String) {
        out.clear();
        out.reserve(self.rendered_len());

        self.push_border(out);
        for line in self.lines() {
            out.push('\n');
            out.push(BORDER_VERTICAL);
            out.extend(line.iter());
            out.push(BORDER_VERTICAL);
        }
        out.push('\n');
        self.push_border(out);
    }

    fn push_border(&self, out: &mut String) {
        out.push(BORDER_CORNER);
        for _ in 0..self.width {
            out.push(BORDER_HORIZONTAL);
        }
        out.push(BORDER_CORNER);
    }

    fn rendered_len(&self) -> usize {
        let line = self.width as usize + 3;
        line * (self.height as usize + 2)
    }
}
