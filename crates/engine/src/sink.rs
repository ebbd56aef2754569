//! Frame sinks: where rendered frames go.

use std::io::Write;

use anyhow::{Context, Result};

/// One serialized frame, borrowed from the driver for the duration of `emit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedFrame<'a> {
    /// Zero-based frame index
    pub index: u64,
    /// Frames in the whole run
    pub total: u64,
    /// Bordered text block from `Grid::render`
    pub text: &'a str,
}

impl RenderedFrame<'_> {
    /// `Frame: n/N` with a one-based `n`.
    pub fn counter_line(&self) -> String {
        format!("Frame: {}/{}", self.index + 1, self.total)
    }
}

pub trait FrameSink {
    fn emit(&mut self, frame: &RenderedFrame<'_>) -> Result<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn emit(&mut self, frame: &RenderedFrame<'_>) -> Result<()> {
        (**self).emit(frame)
    }
}

/// Keeps every emitted frame in memory.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    frames: Vec<String>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<String> {
        self.frames
    }
}

impl FrameSink for VecSink {
    fn emit(&mut self, frame: &RenderedFrame<'_>) -> Result<()> {
        self.frames.push(frame.text.to_owned());
        Ok(())
    }
}

/// Writes frames as plain text, one block after another.
pub struct WriterSink<W: Write> {
    out: W,
    show_counter: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_counter: false,
        }
    }

    pub fn with_counter(mut self, show_counter: bool) -> Self {
        self.show_counter = show_counter;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for WriterSink<W> {
    fn emit(&mut self, frame: &RenderedFrame<'_>) -> Result<()> {
        writeln!(self.out, "{}", frame.text).context("failed to write frame")?;
        if self.show_counter {
            writeln!(self.out, "{}", frame.counter_line())?;
        }
        self.out.flush()?;
        Ok(())
    }
}
