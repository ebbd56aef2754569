//! Error types for grid construction.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both sides must be positive")]
    InvalidDimension { width: u16, height: u16 },
}
