//! The 4-byte frame header.
//!
//! ```text
//! ┌──────────────────────────────┬───────────┬──────────┬──────────┐
//! │ byte 0                       │ byte 1    │ byte 2   │ byte 3   │
//! │ kind[7:6] rsvd[5:3] len[2:0] │ len[7:0]  │ class id │ id       │
//! └──────────────────────────────┴───────────┴──────────┴──────────┘
//! ```
//!
//! `len[2:0]` in byte 0 carries bits 10..8 of the 11-bit payload length.

use std::fmt;

use crate::error::{FrameError, Result};
use crate::key::MessageKey;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 4;

/// Largest length the header can carry.
pub const MAX_LENGTH: usize = 0x7FF;

const KIND_SHIFT: u8 = 6;
const RESERVED_MASK: u8 = 0b0011_1000;
const LENGTH_HIGH_MASK: u8 = 0b0000_0111;

/// Message kind tag carried in the top two bits of the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Command,
    Response,
    Event,
}

impl MessageKind {
    pub const ALL: [MessageKind; 3] = [Self::Command, Self::Response, Self::Event];

    const fn bits(self) -> u8 {
        match self {
            Self::Command => 0b00,
            Self::Response => 0b01,
            Self::Event => 0b10,
        }
    }

    fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0b00 => Ok(Self::Command),
            0b01 => Ok(Self::Response),
            0b10 => Ok(Self::Event),
            other => Err(FrameError::InvalidKind(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Response => "response",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub kind: MessageKind,
    pub class_id: u8,
    pub id: u8,
    pub length: u16,
}

impl Header {
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.class_id, self.id)
    }

    pub fn encode(&self) -> Result<[u8; HEADER_SIZE]> {
        encode_header(self.kind, self.class_id, self.id, self.length as usize)
    }
}

/// Pack a header. Fails with `LengthOutOfRange` when `length > 0x7FF`.
pub fn encode_header(
    kind: MessageKind,
    class_id: u8,
    id: u8,
    length: usize,
) -> Result<[u8; HEADER_SIZE]> {
    if length > MAX_LENGTH {
        return Err(FrameError::LengthOutOfRange { length });
    }
    let type_byte = (kind.bits() << KIND_SHIFT) | ((length >> 8) as u8 & LENGTH_HIGH_MASK);
    Ok([type_byte, length as u8, class_id, id])
}

/// Unpack a header, failing closed on an unassigned kind or reserved bits.
pub fn decode_header(bytes: [u8; HEADER_SIZE]) -> Result<Header> {
    let type_byte = bytes[0];
    if type_byte & RESERVED_MASK != 0 {
        return Err(FrameError::ReservedBits(type_byte));
    }
    let kind = MessageKind::from_bits(type_byte >> KIND_SHIFT)?;
    let length = (u16::from(type_byte & LENGTH_HIGH_MASK) << 8) | u16::from(bytes[1]);
    Ok(Header {
        kind,
        class_id: bytes[2],
        id: bytes[3],
        length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version_command_bytes() {
        let bytes = encode_header(MessageKind::Command, 0x01, 0x1B, 0).unwrap();
        assert_eq!(bytes, [0x00, 0x00, 0x01, 0x1B]);
    }

    #[test]
    fn test_length_split_across_type_byte() {
        let bytes = encode_header(MessageKind::Response, 0x0a, 0x03, 0x2F1).unwrap();
        assert_eq!(bytes, [0x42, 0xF1, 0x0a, 0x03]);

        let bytes = encode_header(MessageKind::Event, 0x01, 0x00, 18).unwrap();
        assert_eq!(bytes, [0x80, 18, 0x01, 0x00]);
    }

    #[test]
    fn test_header_roundtrip_all_lengths_and_ids() {
        for kind in MessageKind::ALL {
            for length in (0..=MAX_LENGTH).step_by(7).chain([MAX_LENGTH]) {
                for (class_id, id) in [(0u8, 0u8), (0x01, 0x1B), (0x5b, 0x80), (0xff, 0xff)] {
                    let bytes = encode_header(kind, class_id, id, length).unwrap();
                    let header = decode_header(bytes).unwrap();
                    assert_eq!(header.kind, kind);
                    assert_eq!(header.class_id, class_id);
                    assert_eq!(header.id, id);
                    assert_eq!(header.length as usize, length);
                }
            }
        }
    }

    #[test]
    fn test_header_roundtrip_every_class_and_id() {
        for class_id in 0..=u8::MAX {
            for id in 0..=u8::MAX {
                let header = Header {
                    kind: MessageKind::Command,
                    class_id,
                    id,
                    length: 0x123,
                };
                assert_eq!(decode_header(header.encode().unwrap()).unwrap(), header);
            }
        }
    }

    #[test]
    fn test_length_out_of_range() {
        let err = encode_header(MessageKind::Command, 0, 0, MAX_LENGTH + 1).unwrap_err();
        assert!(matches!(err, FrameError::LengthOutOfRange { length: 0x800 }));
    }

    #[test]
    fn test_decode_rejects_invalid_kind() {
        let err = decode_header([0xC0, 0x00, 0x01, 0x00]).unwrap_err();
        assert!(matches!(err, FrameError::InvalidKind(0b11)));
    }

    #[test]
    fn test_decode_rejects_reserved_bits() {
        for bit in 3..6 {
            let err = decode_header([1 << bit, 0x00, 0x01, 0x00]).unwrap_err();
            assert!(matches!(err, FrameError::ReservedBits(_)));
        }
    }
}
