//! Scene: the ordered list of animated elements drawn every frame.
//!
//! An element pairs a motion function with a draw call. Elements are applied
//! in insertion order, so where two of them touch the same cell the later one
//! wins. There is no other layering.

use std::fmt;

use crate::core::{
    blink, bounce, draw_box, draw_circle, draw_text, slide, wave_offset, Grid,
};
use crate::types::{
    Circle, Point, Rect, BOUNCE_SPEED, BOX_CHAR, WAVE_AMPLITUDE, WAVE_FREQUENCY,
};

type DrawFn = Box<dyn Fn(&mut Grid, u64)>;

/// A named draw step, evaluated once per frame.
pub struct Element {
    name: &'static str,
    draw: DrawFn,
}

impl Element {
    /// Element whose draw call receives the frame index directly.
    pub fn new<D>(name: &'static str, draw: D) -> Self
    where
        D: Fn(&mut Grid, u64) + 'static,
    {
        Self {
            name,
            draw: Box::new(draw),
        }
    }

    /// Element built from a motion function and a draw call fed its output.
    pub fn animated<T, M, D>(name: &'static str, motion: M, draw: D) -> Self
    where
        M: Fn(u64) -> T + 'static,
        D: Fn(&mut Grid, T) + 'static,
    {
        Self::new(name, move |grid, frame| draw(grid, motion(frame)))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn draw(&self, grid: &mut Grid, frame: u64) {
        (self.draw)(grid, frame)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element").field("name", &self.name).finish()
    }
}

/// Ordered collection of elements.
#[derive(Debug, Default)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Scene::push`].
    pub fn with(mut self, element: Element) -> Self {
        self.push(element);
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.elements.iter().map(Element::name)
    }

    /// Draw every element for `frame`, in order.
    pub fn draw(&self, grid: &mut Grid, frame: u64) {
        for element in &self.elements {
            element.draw(grid, frame);
        }
    }
}

/// Text carried across the grid by the demo scene.
pub const DEMO_TEXT: &str = "CODEFLOW";

/// The stock animation: bouncing box, sliding text, blinking circle, wave.
pub fn demo_scene() -> Scene {
    Scene::new()
        .with(Element::animated(
            "bouncing-box",
            |frame| bounce(frame, 8, BOUNCE_SPEED),
            |grid, dy| draw_box(grid, Rect::new(5, 2 + dy, 10, 5), BOX_CHAR),
        ))
        .with(Element::new("sliding-text", |grid, frame| {
            let len = DEMO_TEXT.chars().count() as i32;
            let x = slide(frame, -len, grid.width() as i32, 60);
            draw_text(grid, Point::new(x, 7), DEMO_TEXT);
        }))
        .with(Element::animated(
            "blinking-circle",
            |frame| blink(frame, 8, 4),
            |grid, visible| {
                if visible {
                    draw_circle(grid, Circle::new(30, 7, 4), '*');
                }
            },
        ))
        .with(Element::new("wave-line", |grid, frame| {
            for x in 0..grid.width() as i32 {
                let dy = wave_offset(x, frame, WAVE_AMPLITUDE, WAVE_FREQUENCY);
                grid.set(x, 12 + dy, '~');
            }
        }))
}
