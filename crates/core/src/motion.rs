//! Motion functions - pure maps from a frame index to position or visibility
//!
//! None of these keep state: the same arguments always give the same answer,
//! so any frame of an animation can be reproduced in isolation. All of them
//! are total over `u64` frame indices and degenerate parameters (zero
//! duration, empty blink cycle) fall back to a fixed value instead of
//! dividing by zero.

use crate::types::WAVE_PHASE_STEP;

/// Vertical bounce: `floor(|sin(frame * speed)| * amplitude)`.
///
/// Oscillates in `[0, amplitude]` with a period of `π / speed` frames.
pub fn bounce(frame: u64, amplitude: i32, speed: f64) -> i32 {
    ((frame as f64 * speed).sin().abs() * amplitude as f64).floor() as i32
}

/// Linear slide from `start` to `end` over `duration` frames, floored.
///
/// Holds at `end` once `frame >= duration`; never overshoots. A zero
/// duration means the slide has already finished.
pub fn slide(frame: u64, start: i32, end: i32, duration: u64) -> i32 {
    if duration == 0 || frame >= duration {
        return end;
    }
    let progress = frame as f64 / duration as f64;
    let (start_f, end_f) = (f64::from(start), f64::from(end));
    // The float-to-int cast saturates; the clamp below keeps it within `end`.
    let pos = (start_f + (end_f - start_f) * progress).floor() as i32;
    if start <= end {
        pos.min(end)
    } else {
        pos.max(end)
    }
}

/// Blink visibility: on for the first `on_frames` of each
/// `on_frames + off_frames` cycle.
///
/// An empty cycle (both counts zero) is never visible.
pub fn blink(frame: u64, on_frames: u32, off_frames: u32) -> bool {
    let cycle = on_frames as u64 + off_frames as u64;
    if cycle == 0 {
        return false;
    }
    frame % cycle < on_frames as u64
}

/// Per-column wave offset: `floor(sin(x * frequency + frame * 0.2) * amplitude)`.
pub fn wave_offset(x: i32, frame: u64, amplitude: i32, frequency: f64) -> i32 {
    let phase = x as f64 * frequency + frame as f64 * WAVE_PHASE_STEP;
    (phase.sin() * amplitude as f64).floor() as i32
}
