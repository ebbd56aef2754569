//! Rasterizer module - turns geometric primitives into grid cells
//!
//! Every draw function computes the cells a shape covers and hands each one to
//! [`Grid::set`]. Clipping is left entirely to the grid, so shapes may extend
//! past any edge (or lie completely outside) without special handling here.
//!
//! The cell computations are also exposed as iterators ([`line_points`],
//! [`circle_points`]) so callers can inspect coverage without a grid.
//!
//! Coordinates near the ends of the `i32` range saturate rather than wrap.
//! A saturated cell is far outside any grid, so it is simply clipped.

use std::iter::FusedIterator;

use crate::grid::Grid;
use crate::types::{Circle, Point, Rect};

/// Draw the outline of `rect`.
///
/// One-cell-wide or one-cell-tall rectangles collapse naturally: opposite
/// edges land on the same cells. Empty rectangles draw nothing.
pub fn draw_box(grid: &mut Grid, rect: Rect, ch: char) {
    if rect.is_empty() {
        return;
    }
    let (right, bottom) = (rect.right(), rect.bottom());
    for i in 0..rect.width {
        let x = rect.x.saturating_add(i);
        grid.set(x, rect.y, ch);
        grid.set(x, bottom, ch);
    }
    for j in 0..rect.height {
        let y = rect.y.saturating_add(j);
        grid.set(rect.x, y, ch);
        grid.set(right, y, ch);
    }
}

/// Fill every cell of `rect`.
pub fn fill_box(grid: &mut Grid, rect: Rect, ch: char) {
    for j in 0..rect.height {
        let y = rect.y.saturating_add(j);
        for i in 0..rect.width {
            grid.set(rect.x.saturating_add(i), y, ch);
        }
    }
}

/// Draw the segment between `a` and `b`, both endpoints included.
///
/// The covered cells do not depend on which endpoint is passed first: the
/// segment is always walked from the smaller `(x, y)` endpoint.
pub fn draw_line(grid: &mut Grid, a: Point, b: Point, ch: char) {
    let (from, to) = if a <= b { (a, b) } else { (b, a) };
    for p in line_points(from, to) {
        grid.set(p.x, p.y, ch);
    }
}

/// Draw a circle outline with the midpoint algorithm.
///
/// Radius 0 draws the centre cell; a negative radius draws nothing.
pub fn draw_circle(grid: &mut Grid, circle: Circle, ch: char) {
    for p in circle_points(circle).flatten() {
        grid.set(p.x, p.y, ch);
    }
}

/// Write `text` left to right starting at `at`, one cell per `char`.
///
/// No wrapping; characters past the right edge are clipped like any other write.
pub fn draw_text(grid: &mut Grid, at: Point, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        let x = i32::try_from(i).map_or(i32::MAX, |i| at.x.saturating_add(i));
        grid.set(x, at.y, ch);
    }
}

/// Bresenham cells from `from` to `to`, in walking order.
///
/// The error term is kept in `i64`, so endpoints anywhere in the `i32` range
/// are walked exactly.
pub fn line_points(from: Point, to: Point) -> LinePoints {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    LinePoints {
        cur: from,
        end: to,
        dx,
        dy,
        sx: if from.x < to.x { 1 } else { -1 },
        sy: if from.y < to.y { 1 } else { -1 },
        err: dx - dy,
        done: false,
    }
}

/// Iterator over the cells of an integer Bresenham line.
#[derive(Debug, Clone)]
pub struct LinePoints {
    cur: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(p)
    }
}

impl FusedIterator for LinePoints {}

/// Midpoint-circle steps for `circle`.
///
/// Each item holds the eight symmetric cells for one step of the algorithm;
/// use `.flatten()` for a plain cell stream. Cells may repeat (on the
/// diagonals and for radius 0).
pub fn circle_points(circle: Circle) -> CirclePoints {
    CirclePoints {
        cx: circle.cx,
        cy: circle.cy,
        x: circle.radius,
        y: 0,
        err: 0,
    }
}

/// Iterator over midpoint-circle steps, eight mirrored cells per step.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    cx: i32,
    cy: i32,
    x: i32,
    y: i32,
    err: i64,
}

impl Iterator for CirclePoints {
    type Item = [Point; 8];

    fn next(&mut self) -> Option<[Point; 8]> {
        if self.x < self.y {
            return None;
        }
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        let (px, nx) = (cx.saturating_add(x), cx.saturating_sub(x));
        let (py, ny) = (cy.saturating_add(y), cy.saturating_sub(y));
        let (pyx, nyx) = (cx.saturating_add(y), cx.saturating_sub(y));
        let (pxy, nxy) = (cy.saturating_add(x), cy.saturating_sub(x));
        let step = [
            Point::new(px, py),
            Point::new(pyx, pxy),
            Point::new(nyx, pxy),
            Point::new(nx, py),
            Point::new(nx, ny),
            Point::new(nyx, nxy),
            Point::new(pyx, nxy),
            Point::new(px, ny),
        ];

        // x >= y >= 0 here, so neither step can overflow.
        self.y += 1;
        self.err += 1 + 2 * i64::from(self.y);
        if 2 * (self.err - i64::from(self.x)) + 1 > 0 {
            self.x -= 1;
            self.err += 1 - 2 * i64::from(self.x);
        }
        Some(step)
    }
}

impl FusedIterator for CirclePoints {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn line_single_point() {
        let p = Point::new(3, 3);
        assert_eq!(line_points(p, p).collect::<Vec<_>>(), vec![p]);
    }

    #[test]
    fn line_horizontal_and_vertical() {
        assert_eq!(
            line_points(Point::new(0, 1), Point::new(3, 1)).collect::<Vec<_>>(),
            pts(&[(0, 1), (1, 1), (2, 1), (3, 1)])
        );
        assert_eq!(
            line_points(Point::new(2, 3), Point::new(2, 0)).collect::<Vec<_>>(),
            pts(&[(2, 3), (2, 2), (2, 1), (2, 0)])
        );
    }

    #[test]
    fn line_shallow_slope_sequence() {
        // dx=4, dy=2: err starts at 2.
        assert_eq!(
            line_points(Point::new(0, 0), Point::new(4, 2)).collect::<Vec<_>>(),
            pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)])
        );
    }

    #[test]
    fn line_steep_negative_slope_sequence() {
        assert_eq!(
            line_points(Point::new(0, 0), Point::new(-1, -3)).collect::<Vec<_>>(),
            pts(&[(0, 0), (0, -1), (-1, -2), (-1, -3)])
        );
    }

    #[test]
    fn line_walk_direction_matters_but_draw_does_not() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 1);
        assert_eq!(
            line_points(a, b).collect::<Vec<_>>(),
            pts(&[(0, 0), (1, 0), (2, 1)])
        );
        assert_eq!(
            line_points(b, a).collect::<Vec<_>>(),
            pts(&[(2, 1), (1, 1), (0, 0)])
        );

        let mut g1 = Grid::new(4, 4).unwrap();
        let mut g2 = Grid::new(4, 4).unwrap();
        draw_line(&mut g1, a, b, '*');
        draw_line(&mut g2, b, a, '*');
        assert_eq!(g1, g2);
    }

    #[test]
    fn circle_radius_zero_is_center_only() {
        let steps: Vec<_> = circle_points(Circle::new(2, 2, 0)).collect();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].iter().all(|&p| p == Point::new(2, 2)));
    }

    #[test]
    fn circle_negative_radius_is_empty() {
        assert_eq!(circle_points(Circle::new(2, 2, -1)).count(), 0);
    }

    #[test]
    fn circle_radius_one() {
        let mut grid = Grid::new(3, 3).unwrap();
        draw_circle(&mut grid, Circle::new(1, 1, 1), 'o');
        assert_eq!(grid.render(), "+---+\n| o |\n|o o|\n| o |\n+---+");
    }

    #[test]
    fn box_one_by_one_is_single_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        draw_box(&mut grid, Rect::new(1, 1, 1, 1), '#');
        assert_eq!(grid.cells().iter().filter(|&&c| c == '#').count(), 1);
        assert_eq!(grid.get(1, 1), '#');
    }

    #[test]
    fn box_with_non_positive_extent_draws_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        draw_box(&mut grid, Rect::new(1, 1, 0, 2), '#');
        draw_box(&mut grid, Rect::new(1, 1, 2, -2), '#');
        fill_box(&mut grid, Rect::new(0, 0, -1, 3), '#');
        assert!(grid.cells().iter().all(|&c| c == ' '));
    }

    #[test]
    fn line_spanning_the_whole_i32_range() {
        let from = Point::new(i32::MIN, 0);
        let to = Point::new(i32::MAX, 1);
        assert_eq!(
            line_points(from, to).take(3).collect::<Vec<_>>(),
            pts(&[(i32::MIN, 0), (i32::MIN + 1, 0), (i32::MIN + 2, 0)])
        );
        assert_eq!(
            line_points(to, from).take(2).collect::<Vec<_>>(),
            pts(&[(i32::MAX, 1), (i32::MAX - 1, 1)])
        );
    }

    #[test]
    fn line_ending_at_i32_max() {
        let from = Point::new(i32::MAX - 2, i32::MIN);
        let to = Point::new(i32::MAX, i32::MIN);
        assert_eq!(
            line_points(from, to).collect::<Vec<_>>(),
            pts(&[
                (i32::MAX - 2, i32::MIN),
                (i32::MAX - 1, i32::MIN),
                (i32::MAX, i32::MIN)
            ])
        );
    }

    #[test]
    fn huge_circle_first_step_saturates() {
        let step = circle_points(Circle::new(i32::MAX, i32::MIN, i32::MAX))
            .next()
            .unwrap();
        assert_eq!(step[0], Point::new(i32::MAX, i32::MIN));
        assert_eq!(step[1], Point::new(i32::MAX, -1));
        assert_eq!(step[3], Point::new(0, i32::MIN));
        assert_eq!(step[5], Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn shapes_near_i32_limits_are_clipped() {
        let mut grid = Grid::new(4, 2).unwrap();
        draw_text(&mut grid, Point::new(i32::MAX, 0), "ab");
        draw_box(&mut grid, Rect::new(i32::MAX - 1, 0, 5, 2), '#');
        fill_box(&mut grid, Rect::new(i32::MAX - 1, i32::MAX - 1, 3, 3), '#');
        draw_box(&mut grid, Rect::new(i32::MIN, i32::MIN, 3, 3), '#');
        assert!(grid.cells().iter().all(|&c| c == ' '));

        // The in-range cells of a clipped run still land.
        draw_text(&mut grid, Point::new(-2, 1), "xyzw");
        assert_eq!(grid.render(), "+----+\n|    |\n|zw  |\n+----+");
    }

    #[test]
    fn text_clips_at_both_edges() {
        let mut grid = Grid::new(4, 1).unwrap();
        draw_text(&mut grid, Point::new(-2, 0), "HELLO");
        assert_eq!(grid.lines().next().unwrap(), &['L', 'L', 'O', ' ']);
    }
}
