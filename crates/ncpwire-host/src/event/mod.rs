//! Typed events.

mod records;

pub use records::*;

use bytes::BytesMut;
use ncpwire_catalog::payload::encode_payload;
use ncpwire_catalog::{Catalog, CodecError, Message};
use ncpwire_frame::{Frame, MessageKind, MAX_LENGTH};

impl Event {
    /// Decode an event frame against `catalog`.
    pub fn decode(catalog: &Catalog, frame: &Frame) -> Result<Self, CodecError> {
        if frame.kind != MessageKind::Event {
            return Err(CodecError::UnknownMessage {
                kind: frame.kind,
                key: frame.key(),
            });
        }
        Event::from_message(&catalog.decode(frame)?)
    }

    /// The event as a catalog message, field names and types included.
    pub fn to_message(&self, catalog: &Catalog) -> Result<Message, CodecError> {
        let key = self.key();
        let unknown = CodecError::UnknownMessage {
            kind: MessageKind::Event,
            key,
        };
        let descriptor = catalog.event(key).ok_or(unknown)?;
        let mut payload = BytesMut::new();
        encode_payload(descriptor.fields, &self.values(), MAX_LENGTH, &mut payload)?;
        descriptor.decode(payload.freeze())
    }
}

#[cfg(test)]
mod tests {
    use bytes::{BufMut, Bytes, BytesMut};
    use ncpwire_catalog::payload::fixed_size;
    use ncpwire_catalog::{class, table};
    use ncpwire_frame::MessageKey;

    use super::*;

    fn boot_frame() -> Frame {
        let mut payload = BytesMut::new();
        for v in [7u16, 2, 1, 312] {
            payload.put_u16_le(v);
        }
        payload.put_u32_le(0x0102_0304);
        payload.put_u16_le(0x0005);
        payload.put_u32_le(0xCAFE_F00D);
        Frame::new(
            MessageKind::Event,
            MessageKey::new(class::SYSTEM, 0x00),
            payload.freeze(),
        )
    }

    #[test]
    fn decodes_system_boot() {
        let catalog = Catalog::builtin();
        let event = Event::decode(&catalog, &boot_frame()).unwrap();
        assert_eq!(
            event,
            Event::SystemBoot(SystemBoot {
                major: 7,
                minor: 2,
                patch: 1,
                build: 312,
                bootloader: 0x0102_0304,
                hw: 5,
                hash: 0xCAFE_F00D,
            })
        );
        assert_eq!(event.name(), "system_boot");
        assert_eq!(event.key(), MessageKey::new(class::SYSTEM, 0x00));
    }

    #[test]
    fn rejects_non_event_frames() {
        let catalog = Catalog::builtin();
        let mut frame = boot_frame();
        frame.kind = MessageKind::Response;
        assert!(matches!(
            Event::decode(&catalog, &frame),
            Err(CodecError::UnknownMessage { .. })
        ));
    }

    #[test]
    fn truncated_event_fails_closed() {
        let catalog = Catalog::builtin();
        let mut frame = boot_frame();
        frame.payload = frame.payload.slice(..10);
        assert!(matches!(
            Event::decode(&catalog, &frame),
            Err(CodecError::Truncated { .. })
        ));
    }

    #[test]
    fn to_message_names_the_decoded_fields() {
        let catalog = Catalog::builtin();
        let frame = boot_frame();
        let message = Event::decode(&catalog, &frame)
            .unwrap()
            .to_message(&catalog)
            .unwrap();

        assert_eq!(message, catalog.decode(&frame).unwrap());
        assert_eq!(message.name(), "system_boot");
        assert_eq!(message.get("build").unwrap().as_i64(), Some(312));
        assert_eq!(message.get("hash").unwrap().as_i64(), Some(0xCAFE_F00D));
    }

    #[test]
    fn to_message_keeps_arrays_and_blobs() {
        let catalog = Catalog::builtin();
        let event = Event::UserMessageToHost(UserMessageToHost {
            message: Bytes::from_static(&[0xc0, 0xff, 0xee]),
        });
        let message = event.to_message(&catalog).unwrap();
        assert_eq!(message.bytes(0).unwrap().as_ref(), &[0xc0, 0xff, 0xee]);
        assert_eq!(Event::from_message(&message).unwrap(), event);

        let event = Event::SmBonded(SmBonded {
            connection: 1,
            bonding: 2,
            security_mode: 3,
        });
        assert_eq!(
            Event::from_message(&event.to_message(&catalog).unwrap()).unwrap(),
            event
        );
    }

    #[test]
    fn every_catalog_event_has_a_variant() {
        let catalog = Catalog::builtin();
        for d in table::EVENTS {
            // All-zero payload: scalars are zero, arrays are empty.
            let payload = Bytes::from(vec![0u8; fixed_size(d.fields)]);
            let frame = Frame::new(MessageKind::Event, d.key(), payload);
            let event = Event::decode(&catalog, &frame)
                .unwrap_or_else(|e| panic!("{}: {e}", d.name));
            assert_eq!(event.key(), d.key());
            assert_eq!(event.name(), d.name);
            assert_eq!(
                event.to_message(&catalog).unwrap(),
                catalog.decode(&frame).unwrap()
            );
        }
    }
}
