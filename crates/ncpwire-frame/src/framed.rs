use bytes::BytesMut;
use ncpwire_transport::Transport;
use tracing::{debug, trace};

use crate::codec::{decode_frame, encode_frame, Frame, FrameConfig};
use crate::error::{FrameError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// Reads and writes complete frames over a [`Transport`].
///
/// Handles partial and coalesced chunks internally: callers always get
/// complete frames, in arrival order.
pub struct FramedTransport<T> {
    inner: T,
    read_buf: BytesMut,
    write_buf: BytesMut,
    config: FrameConfig,
}

impl<T: Transport> FramedTransport<T> {
    /// Create a new framed transport with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new framed transport with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            read_buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            write_buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Encode and send one frame.
    pub fn send_frame(&mut self, frame: &Frame) -> Result<()> {
        let max = self.config.effective_max_payload();
        if frame.payload.len() > max {
            return Err(FrameError::PayloadTooLarge {
                size: frame.payload.len(),
                max,
            });
        }

        self.write_buf.clear();
        encode_frame(frame.kind, frame.key(), &frame.payload, &mut self.write_buf)?;
        debug!(kind = %frame.kind, key = %frame.key(), len = frame.payload.len(), "send frame");
        self.inner.send(&self.write_buf)?;
        Ok(())
    }

    /// Send bytes that already hold one or more encoded frames.
    pub fn send_encoded(&mut self, wire: &[u8]) -> Result<()> {
        trace!(len = wire.len(), "send encoded");
        self.inner.send(wire)?;
        Ok(())
    }

    /// Read the next complete frame (blocking).
    ///
    /// A malformed header discards everything buffered so far, since the
    /// stream position can no longer be trusted.
    pub fn recv_frame(&mut self) -> Result<Frame> {
        loop {
            if let Some(frame) = self.buffered_frame()? {
                return Ok(frame);
            }

            let chunk = self.inner.receive()?;
            trace!(len = chunk.len(), buffered = self.read_buf.len(), "received chunk");
            self.read_buf.extend_from_slice(&chunk);
        }
    }

    /// Decode a frame already sitting in the read buffer, without touching
    /// the transport.
    pub fn buffered_frame(&mut self) -> Result<Option<Frame>> {
        match decode_frame(&mut self.read_buf, self.config.effective_max_payload()) {
            Ok(Some(frame)) => {
                debug!(
                    kind = %frame.kind,
                    key = %frame.key(),
                    len = frame.payload.len(),
                    "recv frame"
                );
                Ok(Some(frame))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                debug!(error = %err, discarded = self.read_buf.len(), "dropping unframeable input");
                self.read_buf.clear();
                Err(err)
            }
        }
    }

    /// Number of received bytes not yet consumed as frames.
    pub fn buffered_len(&self) -> usize {
        self.read_buf.len()
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume and return the inner transport.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current frame configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Update maximum payload size for subsequent frames.
    pub fn set_max_payload_size(&mut self, max_payload_size: usize) {
        self.config.max_payload_size = max_payload_size;
    }
}

impl<T> std::fmt::Debug for FramedTransport<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramedTransport")
            .field("buffered", &self.read_buf.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use bytes::Bytes;
    use ncpwire_transport::TransportError;

    use super::*;
    use crate::header::{MessageKind, HEADER_SIZE};
    use crate::key::MessageKey;

    #[derive(Default)]
    struct ChunkTransport {
        chunks: VecDeque<Bytes>,
        sent: Vec<Vec<u8>>,
    }

    impl ChunkTransport {
        fn with_wire(wire: &[u8], chunk: usize) -> Self {
            Self {
                chunks: wire.chunks(chunk).map(Bytes::copy_from_slice).collect(),
                sent: Vec::new(),
            }
        }
    }

    impl Transport for ChunkTransport {
        fn send(&mut self, bytes: &[u8]) -> ncpwire_transport::Result<()> {
            self.sent.push(bytes.to_vec());
            Ok(())
        }

        fn receive(&mut self) -> ncpwire_transport::Result<Bytes> {
            self.chunks.pop_front().ok_or(TransportError::Closed)
        }
    }

    fn frame(kind: MessageKind, key: MessageKey, payload: &[u8]) -> Frame {
        Frame::new(kind, key, Bytes::copy_from_slice(payload))
    }

    fn wire(frames: &[Frame]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        for f in frames {
            encode_frame(f.kind, f.key(), &f.payload, &mut buf).unwrap();
        }
        buf.to_vec()
    }

    const BOOT: MessageKey = MessageKey::new(0x01, 0x00);
    const HELLO: MessageKey = MessageKey::new(0x01, 0x00);

    #[test]
    fn send_frame_writes_header_and_payload() {
        let mut framed = FramedTransport::new(ChunkTransport::default());
        let frame = Frame::new(
            MessageKind::Command,
            MessageKey::new(0x01, 0x1B),
            Bytes::new(),
        );
        framed.send_frame(&frame).unwrap();

        assert_eq!(framed.get_ref().sent, vec![vec![0x00, 0x00, 0x01, 0x1B]]);
    }

    #[test]
    fn send_frame_rejects_oversize_payload() {
        let mut framed = FramedTransport::new(ChunkTransport::default());
        let frame = Frame::new(MessageKind::Command, HELLO, vec![0u8; 257]);
        let err = framed.send_frame(&frame).unwrap_err();

        assert!(matches!(
            err,
            FrameError::PayloadTooLarge {
                size: 257,
                max: 256
            }
        ));
        assert!(framed.get_ref().sent.is_empty());
    }

    #[test]
    fn reassembles_byte_by_byte() {
        let bytes = wire(&[frame(MessageKind::Event, BOOT, b"slow")]);
        let mut framed = FramedTransport::new(ChunkTransport::with_wire(&bytes, 1));

        let frame = framed.recv_frame().unwrap();
        assert_eq!(frame.kind, MessageKind::Event);
        assert_eq!(frame.payload.as_ref(), b"slow");
    }

    #[test]
    fn splits_coalesced_chunk_in_order() {
        let bytes = wire(&[
            frame(MessageKind::Event, BOOT, b"one"),
            frame(MessageKind::Response, HELLO, &[0, 0]),
            frame(MessageKind::Event, MessageKey::new(0x06, 0x00), b"three"),
        ]);
        let mut framed = FramedTransport::new(ChunkTransport::with_wire(&bytes, bytes.len()));

        let kinds: Vec<_> = (0..3).map(|_| framed.recv_frame().unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::Event,
                MessageKind::Response,
                MessageKind::Event,
            ]
        );
        assert_eq!(framed.buffered_len(), 0);
    }

    #[test]
    fn closed_mid_frame_surfaces_transport_error() {
        let mut bytes = wire(&[frame(MessageKind::Event, BOOT, b"partial")]);
        bytes.truncate(HEADER_SIZE + 2);
        let mut framed = FramedTransport::new(ChunkTransport::with_wire(&bytes, 64));

        let err = framed.recv_frame().unwrap_err();
        assert!(matches!(err, FrameError::Transport(TransportError::Closed)));
    }

    #[test]
    fn malformed_header_discards_buffer() {
        let mut bytes = vec![0xFF, 0x00, 0x01, 0x00];
        bytes.extend(wire(&[frame(MessageKind::Event, BOOT, b"")]));
        let mut framed = FramedTransport::new(ChunkTransport::with_wire(&bytes, bytes.len()));

        assert!(matches!(framed.recv_frame(), Err(FrameError::ReservedBits(0xFF))));
        assert_eq!(framed.buffered_len(), 0);
    }

    #[test]
    fn buffered_frame_does_not_read_transport() {
        let bytes = wire(&[frame(MessageKind::Event, BOOT, b"x")]);
        let mut framed = FramedTransport::new(ChunkTransport::with_wire(&bytes, bytes.len()));

        assert!(framed.buffered_frame().unwrap().is_none());
        assert_eq!(framed.get_ref().chunks.len(), 1);
    }

    #[test]
    fn configured_limit_applies_to_inbound() {
        let bytes = wire(&[frame(MessageKind::Event, BOOT, &[0u8; 32])]);
        let cfg = FrameConfig {
            max_payload_size: 16,
        };
        let mut framed =
            FramedTransport::with_config(ChunkTransport::with_wire(&bytes, bytes.len()), cfg);

        assert!(matches!(
            framed.recv_frame(),
            Err(FrameError::PayloadTooLarge { size: 32, max: 16 })
        ));
    }

    #[test]
    #[cfg(unix)]
    fn roundtrip_over_socket_pair() {
        use ncpwire_transport::StreamTransport;

        let (left, right) = std::os::unix::net::UnixStream::pair().unwrap();
        let mut writer = FramedTransport::new(StreamTransport::new(left));
        let mut reader = FramedTransport::new(StreamTransport::new(right));

        for i in 0..32u8 {
            let frame = Frame::new(
                MessageKind::Event,
                MessageKey::new(0x01, i),
                vec![i; i as usize],
            );
            writer.send_frame(&frame).unwrap();
        }
        for i in 0..32u8 {
            let frame = reader.recv_frame().unwrap();
            assert_eq!(frame.id, i);
            assert_eq!(frame.payload.len(), i as usize);
        }
    }
}
