//! TerminalRenderer: draws rendered frames on a real terminal.
//!
//! Every frame is a full redraw: clear, home the cursor, print the block.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use tracing::debug;

use crate::engine::{FrameSink, RenderedFrame};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    show_counter: bool,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            show_counter: true,
            entered: false,
        }
    }

    /// Print `Frame: n/N` under each frame.
    pub fn with_counter(mut self, show_counter: bool) -> Self {
        self.show_counter = show_counter;
        self
    }

    /// Switch to the alternate screen in raw mode with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        debug!("terminal entered");
        Ok(())
    }

    /// Restore the terminal. Safe to call when `enter` was never called.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.entered = false;
        debug!("terminal restored");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalRenderer {
    fn emit(&mut self, frame: &RenderedFrame<'_>) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, self.show_counter, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Lines end in `\r\n` because raw mode disables newline translation.
pub fn encode_frame_into(
    frame: &RenderedFrame<'_>,
    show_counter: bool,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for line in frame.text.lines() {
        out.queue(Print(line))?;
        out.queue(Print("\r\n"))?;
    }
    if show_counter {
        out.queue(Print(frame.counter_line()))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "+--+\n|ab|\n+--+";

    fn encoded(show_counter: bool) -> String {
        let frame = RenderedFrame {
            index: 4,
            total: 10,
            text: BLOCK,
        };
        let mut out = Vec::new();
        encode_frame_into(&frame, show_counter, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn encodes_lines_with_crlf() {
        let out = encoded(false);
        assert!(out.contains("+--+\r\n|ab|\r\n+--+\r\n"));
        assert!(!out.contains("Frame:"));
    }

    #[test]
    fn encodes_counter_after_block() {
        let out = encoded(true);
        assert!(out.ends_with("+--+\r\nFrame: 5/10\r\n"));
    }

    #[test]
    fn exit_without_enter_is_noop() {
        let mut term = TerminalRenderer::new();
        assert!(term.exit().is_ok());
    }
}
