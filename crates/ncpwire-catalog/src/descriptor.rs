//! Command and event descriptors.

use bytes::{Bytes, BytesMut};
use ncpwire_frame::{MessageKey, MessageKind};

use crate::class;
use crate::error::{CodecError, Result};
use crate::field::Field;
use crate::message::Message;
use crate::payload::{encode_payload, encoded_len};
use crate::value::Value;

/// Size of the status field that leads every response.
pub const STATUS_SIZE: usize = 2;

/// Layout of one command and its response.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub class_id: u8,
    pub id: u8,
    pub name: &'static str,
    pub params: &'static [Field],
    /// `None` for fire-and-forget commands.
    pub response: Option<&'static [Field]>,
    pub deprecated: bool,
}

impl CommandDescriptor {
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.class_id, self.id)
    }

    pub fn class_name(&self) -> &'static str {
        class::class_name(self.class_id)
    }

    /// Whether the NCP answers this command.
    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    /// Size of the request payload for `args`, after checking their shape.
    pub fn request_len(&self, args: &[Value], max: usize) -> Result<usize> {
        encoded_len(self.params, args, max)
    }

    /// Append the request payload for `args` to `dst`; `dst` is unchanged on error.
    pub fn encode_request(&self, args: &[Value], max: usize, dst: &mut BytesMut) -> Result<usize> {
        encode_payload(self.params, args, max, dst)
    }

    pub fn decode_request(&self, payload: Bytes) -> Result<Message> {
        Message::decode(
            MessageKind::Command,
            self.key(),
            self.name,
            self.params,
            payload,
        )
    }

    /// Decode a response payload.
    ///
    /// A failed command may be answered with the status alone; a 2-byte
    /// payload carrying a nonzero status decodes as a status-only message.
    pub fn decode_response(&self, payload: Bytes) -> Result<Message> {
        let fields = self.response.ok_or(CodecError::UnknownMessage {
            kind: MessageKind::Response,
            key: self.key(),
        })?;
        let fields = if payload.len() == STATUS_SIZE
            && fields.len() > 1
            && (payload[0] != 0 || payload[1] != 0)
        {
            &fields[..1]
        } else {
            fields
        };
        Message::decode(
            MessageKind::Response,
            self.key(),
            self.name,
            fields,
            payload,
        )
    }
}

/// Layout of one event.
#[derive(Debug, PartialEq, Eq)]
pub struct EventDescriptor {
    pub class_id: u8,
    pub id: u8,
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl EventDescriptor {
    pub fn key(&self) -> MessageKey {
        MessageKey::new(self.class_id, self.id)
    }

    pub fn class_name(&self) -> &'static str {
        class::class_name(self.class_id)
    }

    pub fn decode(&self, payload: Bytes) -> Result<Message> {
        Message::decode(
            MessageKind::Event,
            self.key(),
            self.name,
            self.fields,
            payload,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::MAX_PAYLOAD;
    use crate::table::cmd;

    #[test]
    fn fire_and_forget_has_no_response() {
        assert!(!cmd::SYSTEM_RESET.has_response());
        assert!(!cmd::DFU_RESET.has_response());
        assert!(!cmd::USER_RESET_TO_DFU.has_response());
        assert!(cmd::SYSTEM_HELLO.has_response());
        assert!(matches!(
            cmd::SYSTEM_RESET.decode_response(Bytes::new()),
            Err(CodecError::UnknownMessage { .. })
        ));
    }

    #[test]
    fn status_only_response_for_failed_command() {
        let msg = cmd::SYSTEM_GET_VERSION
            .decode_response(Bytes::from_static(&[0x02, 0x01]))
            .unwrap();
        assert_eq!(msg.u16(0).unwrap(), 0x0102);
        assert_eq!(msg.values().len(), 1);
    }

    #[test]
    fn short_success_response_is_truncated() {
        let err = cmd::SYSTEM_GET_VERSION
            .decode_response(Bytes::from_static(&[0x00, 0x00]))
            .unwrap_err();
        assert!(matches!(err, CodecError::Truncated { field: "major", .. }));
    }

    #[test]
    fn request_roundtrips_through_params() {
        let mut dst = BytesMut::new();
        let args = [Value::U16(0x0010), Value::U16(4)];
        let len = cmd::GATT_SERVER_READ_ATTRIBUTE_VALUE
            .encode_request(&args, MAX_PAYLOAD, &mut dst)
            .unwrap();
        assert_eq!(len, 4);
        assert_eq!(dst.as_ref(), &[0x10, 0x00, 0x04, 0x00]);

        let msg = cmd::GATT_SERVER_READ_ATTRIBUTE_VALUE
            .decode_request(dst.freeze())
            .unwrap();
        assert_eq!(msg.kind(), MessageKind::Command);
        assert_eq!(msg.key(), MessageKey::new(class::GATT_SERVER, 0x00));
        assert_eq!(msg.get("offset").unwrap(), &Value::U16(4));
    }
}
