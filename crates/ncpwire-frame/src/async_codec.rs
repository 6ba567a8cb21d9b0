//! tokio-util codec for async stream transports.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::{decode_frame, encode_frame, Frame, FrameConfig};
use crate::error::{FrameError, Result};

/// Frame codec for `tokio_util::codec::Framed`.
#[derive(Debug, Clone, Default)]
pub struct NcpCodec {
    config: FrameConfig,
}

impl NcpCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FrameConfig) -> Self {
        Self { config }
    }
}

impl Decoder for NcpCodec {
    type Item = Frame;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>> {
        decode_frame(src, self.config.effective_max_payload())
    }
}

impl Encoder<Frame> for NcpCodec {
    type Error = FrameError;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<()> {
        let max = self.config.effective_max_payload();
        if frame.payload.len() > max {
            return Err(FrameError::PayloadTooLarge {
                size: frame.payload.len(),
                max,
            });
        }
        encode_frame(frame.kind, frame.key(), &frame.payload, dst)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use futures_util::{SinkExt, StreamExt};
    use tokio_util::codec::{FramedRead, FramedWrite};

    use super::*;
    use crate::header::MessageKind;
    use crate::key::MessageKey;

    #[tokio::test]
    async fn framed_roundtrip_over_duplex() {
        let (client, server) = tokio::io::duplex(64);
        let mut sink = FramedWrite::new(client, NcpCodec::new());
        let mut stream = FramedRead::new(server, NcpCodec::new());

        let sent = vec![
            Frame::new(
                MessageKind::Command,
                MessageKey::new(0x01, 0x1B),
                Bytes::new(),
            ),
            Frame::new(
                MessageKind::Event,
                MessageKey::new(0x01, 0x00),
                vec![7u8; 18],
            ),
            Frame::new(
                MessageKind::Response,
                MessageKey::new(0x01, 0x1B),
                vec![0u8; 18],
            ),
        ];
        for frame in sent.clone() {
            sink.send(frame).await.unwrap();
        }
        drop(sink);

        let mut received = Vec::new();
        while let Some(frame) = stream.next().await {
            received.push(frame.unwrap());
        }
        assert_eq!(received, sent);
    }

    #[tokio::test]
    async fn encoder_rejects_oversize() {
        let (client, _server) = tokio::io::duplex(64);
        let mut sink = FramedWrite::new(
            client,
            NcpCodec::with_config(FrameConfig {
                max_payload_size: 8,
            }),
        );
        let err = sink
            .send(Frame::new(
                MessageKind::Command,
                MessageKey::new(0x01, 0x00),
                vec![0u8; 9],
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameError::PayloadTooLarge { size: 9, max: 8 }));
    }

    #[test]
    fn decoder_waits_for_complete_frame() {
        let mut codec = NcpCodec::new();
        let mut buf = BytesMut::from(&[0x80, 0x02, 0x01, 0x00, 0xAA][..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        buf.extend_from_slice(&[0xBB]);
        let frame = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(frame.kind, MessageKind::Event);
        assert_eq!(frame.payload.as_ref(), &[0xAA, 0xBB]);
    }
}
