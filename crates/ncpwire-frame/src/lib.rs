//! Frame layer of the NCP wire protocol.
//!
//! Every message on the wire is a 4-byte header followed by its payload:
//! - byte 0: message kind in bits 7..6, reserved bits 5..3, length bits 10..8
//! - byte 1: length bits 7..0
//! - byte 2: class id
//! - byte 3: command/event id within the class
//!
//! Frame boundaries come solely from the decoded length. [`FramedTransport`]
//! reassembles frames from arbitrary transport chunks, so callers always see
//! complete frames.

pub mod codec;
pub mod error;
pub mod framed;
pub mod header;
pub mod key;

#[cfg(feature = "async")]
pub mod async_codec;

pub use codec::{decode_frame, encode_frame, Frame, FrameConfig, DEFAULT_MAX_PAYLOAD};
pub use error::{FrameError, Result};
pub use framed::FramedTransport;
pub use header::{decode_header, encode_header, Header, MessageKind, HEADER_SIZE, MAX_LENGTH};
pub use key::MessageKey;

#[cfg(feature = "async")]
pub use async_codec::NcpCodec;
