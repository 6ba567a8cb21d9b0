use ncpwire_transport::TransportError;

use crate::header::MAX_LENGTH;

/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The length does not fit the 11-bit header field.
    #[error("frame length {length} out of range (max {MAX_LENGTH})")]
    LengthOutOfRange { length: usize },

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The kind bits hold the unassigned value `0b11`.
    #[error("invalid message kind bits {0:#04b}")]
    InvalidKind(u8),

    /// Reserved header bits are set.
    #[error("reserved header bits set in type byte {0:#04x}")]
    ReservedBits(u8),

    /// The underlying transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// An I/O error occurred on an async stream.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
