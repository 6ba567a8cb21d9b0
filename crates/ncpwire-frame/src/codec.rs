use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::header::{decode_header, encode_header, MessageKind, HEADER_SIZE, MAX_LENGTH};
use crate::key::MessageKey;

/// Default maximum payload size.
pub const DEFAULT_MAX_PAYLOAD: usize = 256;

/// One complete header + payload unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: MessageKind,
    pub class_id: u8,
    pub id: u8,
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(kind: MessageKind, key: MessageKey, payload: impl Into<Bytes>) -> Self {
        Self {
            kind,
            class_id: key.class_id,
            id: key.id,
            payload: payload.into(),
        }
    }

    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.class_id, self.id)
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format, appending to `dst`.
///
/// `dst` is left untouched on error.
pub fn encode_frame(
    kind: MessageKind,
    key: MessageKey,
    payload: &[u8],
    dst: &mut BytesMut,
) -> Result<()> {
    let header = encode_header(kind, key.class_id, key.id, payload.len())?;
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_slice(&header);
    dst.put_slice(payload);
    Ok(())
}

/// Decode a frame from a buffer.
///
/// Returns `Ok(None)` if the buffer doesn't contain a complete frame yet.
/// On success, consumes the frame bytes from the buffer. A malformed header
/// or an oversized length fails without consuming anything.
pub fn decode_frame(src: &mut BytesMut, max_payload: usize) -> Result<Option<Frame>> {
    if src.len() < HEADER_SIZE {
        return Ok(None);
    }

    let header = decode_header([src[0], src[1], src[2], src[3]])?;
    let payload_len = header.length as usize;
    if payload_len > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: payload_len,
            max: max_payload,
        });
    }

    let total = HEADER_SIZE + payload_len;
    if src.len() < total {
        return Ok(None);
    }

    src.advance(HEADER_SIZE);
    let payload = src.split_to(payload_len).freeze();

    Ok(Some(Frame {
        kind: header.kind,
        class_id: header.class_id,
        id: header.id,
        payload,
    }))
}

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default: 256, capped at `0x7FF`.
    pub max_payload_size: usize,
}

impl FrameConfig {
    /// The effective limit after applying the header cap.
    pub fn effective_max_payload(&self) -> usize {
        self.max_payload_size.min(MAX_LENGTH)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: MessageKey = MessageKey::new(0x01, 0x1B);

    #[test]
    fn test_encode_decode_roundtrip() {
        let mut buf = BytesMut::new();
        let payload = [0x00, 0x00, 0x07, 0x00];

        encode_frame(MessageKind::Response, VERSION, &payload, &mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE + payload.len());

        let frame = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert_eq!(frame.kind, MessageKind::Response);
        assert_eq!(frame.key(), VERSION);
        assert_eq!(frame.payload.as_ref(), &payload);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_decode_incomplete_header() {
        let mut buf = BytesMut::from(&[0x00, 0x00, 0x01][..]);
        assert!(decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD).unwrap().is_none());
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_decode_incomplete_payload() {
        let mut buf = BytesMut::new();
        encode_frame(MessageKind::Event, VERSION, b"hello", &mut buf).unwrap();
        buf.truncate(HEADER_SIZE + 2);

        assert!(decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD).unwrap().is_none());
        assert_eq!(buf.len(), HEADER_SIZE + 2);
    }

    #[test]
    fn test_decode_payload_too_large() {
        let mut buf = BytesMut::new();
        encode_frame(MessageKind::Event, VERSION, &[0u8; 300], &mut buf).unwrap();

        let result = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD);
        assert!(matches!(
            result,
            Err(FrameError::PayloadTooLarge {
                size: 300,
                max: 256
            })
        ));
    }

    #[test]
    fn test_decode_bad_header_consumes_nothing() {
        let mut buf = BytesMut::from(&[0xC0, 0x00, 0x01, 0x00][..]);
        assert!(matches!(
            decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD),
            Err(FrameError::InvalidKind(_))
        ));
        assert_eq!(buf.len(), HEADER_SIZE);
    }

    #[test]
    fn test_multiple_frames() {
        let mut buf = BytesMut::new();
        encode_frame(
            MessageKind::Event,
            MessageKey::new(0x01, 0x00),
            b"first",
            &mut buf,
        )
        .unwrap();
        encode_frame(MessageKind::Response, VERSION, b"second", &mut buf).unwrap();

        let f1 = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert_eq!(f1.kind, MessageKind::Event);
        assert_eq!(f1.payload.as_ref(), b"first");

        let f2 = decode_frame(&mut buf, DEFAULT_MAX_PAYLOAD)
            .unwrap()
            .unwrap();
        assert_eq!(f2.kind, MessageKind::Response);
        assert_eq!(f2.payload.as_ref(), b"second");

        assert!(buf.is_empty());
    }

    #[test]
    fn test_encode_rejects_oversize_and_leaves_dst() {
        let mut buf = BytesMut::from(&b"keep"[..]);
        let oversize = [0u8; MAX_LENGTH + 1];
        let err = encode_frame(MessageKind::Command, VERSION, &oversize, &mut buf).unwrap_err();
        assert!(matches!(err, FrameError::LengthOutOfRange { .. }));
        assert_eq!(buf.as_ref(), b"keep");
    }

    #[test]
    fn test_frame_wire_size() {
        let frame = Frame::new(MessageKind::Command, VERSION, Bytes::from_static(b"test"));
        assert_eq!(frame.wire_size(), HEADER_SIZE + 4);
    }

    #[test]
    fn test_config_caps_at_header_limit() {
        let cfg = FrameConfig {
            max_payload_size: 64 * 1024,
        };
        assert_eq!(cfg.effective_max_payload(), MAX_LENGTH);
        assert_eq!(FrameConfig::default().effective_max_payload(), 256);
    }
}
