use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use ncpwire_frame::{Frame, MessageKey, MessageKind};
use tracing::debug;

use crate::descriptor::{CommandDescriptor, EventDescriptor};
use crate::error::{CodecError, Result};
use crate::field::FieldType;
use crate::message::Message;
use crate::payload::{validate_layout, MAX_PAYLOAD};
use crate::table;

/// Key-indexed lookup over command and event descriptors.
///
/// Commands and responses share a key space; events have their own.
#[derive(Debug)]
pub struct Catalog {
    commands: HashMap<MessageKey, &'static CommandDescriptor>,
    events: HashMap<MessageKey, &'static EventDescriptor>,
    commands_by_name: HashMap<&'static str, &'static CommandDescriptor>,
    events_by_name: HashMap<&'static str, &'static EventDescriptor>,
}

impl Catalog {
    /// Build and validate a catalog from descriptor tables.
    pub fn new(
        commands: &[&'static CommandDescriptor],
        events: &[&'static EventDescriptor],
    ) -> Result<Self> {
        let catalog = Self::index(commands, events);
        if catalog.commands.len() != commands.len()
            || catalog.commands_by_name.len() != commands.len()
        {
            return Err(CodecError::InvalidLayout {
                message: "catalog",
                reason: "duplicate command key or name",
            });
        }
        if catalog.events.len() != events.len() || catalog.events_by_name.len() != events.len() {
            return Err(CodecError::InvalidLayout {
                message: "catalog",
                reason: "duplicate event key or name",
            });
        }
        catalog.validate()?;
        debug!(
            commands = catalog.commands.len(),
            events = catalog.events.len(),
            "catalog built"
        );
        Ok(catalog)
    }

    /// The built-in table, shared process-wide.
    ///
    /// Its layouts are checked by this crate's tests rather than at startup.
    pub fn builtin() -> Arc<Catalog> {
        static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Arc::new(Self::index(table::COMMANDS, table::EVENTS)))
            .clone()
    }

    fn index(commands: &[&'static CommandDescriptor], events: &[&'static EventDescriptor]) -> Self {
        Self {
            commands: commands.iter().map(|d| (d.key(), *d)).collect(),
            events: events.iter().map(|d| (d.key(), *d)).collect(),
            commands_by_name: commands.iter().map(|d| (d.name, *d)).collect(),
            events_by_name: events.iter().map(|d| (d.name, *d)).collect(),
        }
    }

    /// Check every layout against the payload rules.
    pub fn validate(&self) -> Result<()> {
        for d in self.commands.values() {
            validate_layout(d.name, d.params, MAX_PAYLOAD)?;
            if let Some(response) = d.response {
                validate_layout(d.name, response, MAX_PAYLOAD)?;
                if response.first().map(|f| f.ty) != Some(FieldType::U16) {
                    return Err(CodecError::InvalidLayout {
                        message: d.name,
                        reason: "response does not start with a 16-bit status",
                    });
                }
            }
        }
        for d in self.events.values() {
            validate_layout(d.name, d.fields, MAX_PAYLOAD)?;
        }
        Ok(())
    }

    pub fn command(&self, key: MessageKey) -> Option<&'static CommandDescriptor> {
        self.commands.get(&key).copied()
    }

    pub fn command_by_name(&self, name: &str) -> Option<&'static CommandDescriptor> {
        self.commands_by_name.get(name).copied()
    }

    pub fn event(&self, key: MessageKey) -> Option<&'static EventDescriptor> {
        self.events.get(&key).copied()
    }

    pub fn event_by_name(&self, name: &str) -> Option<&'static EventDescriptor> {
        self.events_by_name.get(name).copied()
    }

    /// Commands ordered by key.
    pub fn commands(&self) -> Vec<&'static CommandDescriptor> {
        let mut all: Vec<_> = self.commands.values().copied().collect();
        all.sort_unstable_by_key(|d| d.key());
        all
    }

    /// Events ordered by key.
    pub fn events(&self) -> Vec<&'static EventDescriptor> {
        let mut all: Vec<_> = self.events.values().copied().collect();
        all.sort_unstable_by_key(|d| d.key());
        all
    }

    /// Name of the message a frame carries, if known.
    pub fn message_name(&self, kind: MessageKind, key: MessageKey) -> Option<&'static str> {
        match kind {
            MessageKind::Command | MessageKind::Response => self.command(key).map(|d| d.name),
            MessageKind::Event => self.event(key).map(|d| d.name),
        }
    }

    /// Decode any frame against its catalog layout.
    pub fn decode(&self, frame: &Frame) -> Result<Message> {
        let key = frame.key();
        let unknown = CodecError::UnknownMessage {
            kind: frame.kind,
            key,
        };
        match frame.kind {
            MessageKind::Command => self
                .command(key)
                .ok_or(unknown)?
                .decode_request(frame.payload.clone()),
            MessageKind::Response => self
                .command(key)
                .ok_or(unknown)?
                .decode_response(frame.payload.clone()),
            MessageKind::Event => self
                .event(key)
                .ok_or(unknown)?
                .decode(frame.payload.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::{Bytes, BytesMut};

    use super::*;
    use crate::class;
    use crate::field::{Field, LengthPrefix};
    use crate::payload::{decode_payload, encode_payload, fixed_size};
    use crate::table::{cmd, evt};
    use crate::value::Value;

    #[test]
    fn builtin_table_is_valid() {
        let catalog = Catalog::new(table::COMMANDS, table::EVENTS).unwrap();
        assert_eq!(catalog.commands().len(), table::COMMANDS.len());
        assert_eq!(catalog.events().len(), table::EVENTS.len());
    }

    #[test]
    fn builtin_table_size() {
        assert_eq!(table::COMMANDS.len(), 203);
        assert_eq!(table::EVENTS.len(), 58);
        let fire_and_forget = table::COMMANDS.iter().filter(|d| !d.has_response()).count();
        assert_eq!(fire_and_forget, 3);
    }

    #[test]
    fn builtin_is_shared() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(
            a.command(MessageKey::new(0x01, 0x1B)),
            Some(&cmd::SYSTEM_GET_VERSION)
        );
    }

    #[test]
    fn lookups_by_key_and_name() {
        let catalog = Catalog::builtin();
        let d = catalog.command_by_name("system_get_version").unwrap();
        assert_eq!(d.key(), MessageKey::new(class::SYSTEM, 0x1B));
        assert_eq!(
            catalog.event_by_name("system_boot"),
            Some(&evt::SYSTEM_BOOT)
        );
        assert!(catalog.command_by_name("system_make_coffee").is_none());
        assert_eq!(
            catalog.message_name(MessageKind::Event, MessageKey::new(class::SYSTEM, 0x00)),
            Some("system_boot")
        );
    }

    #[test]
    fn duplicate_keys_rejected() {
        let err = Catalog::new(&[&cmd::SYSTEM_HELLO, &cmd::SYSTEM_HELLO], &[]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLayout { .. }));
    }

    #[test]
    fn bad_layout_rejected() {
        static BAD: CommandDescriptor = CommandDescriptor {
            class_id: 0x7e,
            id: 0,
            name: "bad",
            params: &[Field::array8("a"), Field::u8("b")],
            response: None,
            deprecated: false,
        };
        assert!(matches!(
            Catalog::new(&[&BAD], &[]),
            Err(CodecError::InvalidLayout { message: "bad", .. })
        ));
    }

    #[test]
    fn decode_frame_by_kind() {
        let catalog = Catalog::builtin();
        let mut payload = vec![0u8; 18];
        payload[2] = 7;
        let frame = Frame::new(
            MessageKind::Response,
            MessageKey::new(class::SYSTEM, 0x1B),
            payload,
        );
        let msg = catalog.decode(&frame).unwrap();
        assert_eq!(msg.name(), "system_get_version");
        assert_eq!(msg.u16(1).unwrap(), 7);

        let unknown = Frame::new(
            MessageKind::Event,
            MessageKey::new(0x7e, 0x7e),
            Bytes::new(),
        );
        assert!(matches!(
            catalog.decode(&unknown),
            Err(CodecError::UnknownMessage {
                kind: MessageKind::Event,
                ..
            })
        ));

        let no_reply = Frame::new(MessageKind::Response, cmd::SYSTEM_RESET.key(), Bytes::new());
        assert!(matches!(
            catalog.decode(&no_reply),
            Err(CodecError::UnknownMessage { .. })
        ));
    }

    /// One representative value per field, chosen to exercise sign, width
    /// and (for arrays) the largest length that still fits.
    fn sample_values(fields: &[Field], seed: u8) -> Vec<Value> {
        let fixed = fixed_size(fields);
        fields
            .iter()
            .map(|f| match f.ty {
                FieldType::U8 => Value::U8(seed),
                FieldType::I8 => Value::I8(-(seed as i8 & 0x3f)),
                FieldType::U16 => Value::U16(u16::from(seed) << 8 | 0x5A),
                FieldType::I16 => Value::I16(-(i16::from(seed) + 1)),
                FieldType::U32 => Value::U32(0xA5A5_0000 | u32::from(seed)),
                FieldType::I32 => Value::I32(-(i32::from(seed) << 12)),
                FieldType::Blob(n) => Value::Blob((0..n).map(|i| i as u8 ^ seed).collect()),
                FieldType::Array(prefix) => {
                    let room = (MAX_PAYLOAD - fixed).min(prefix.max_len());
                    let len = if seed % 2 == 0 { room } else { room.min(5) };
                    Value::Array((0..len).map(|i| (i as u8).wrapping_add(seed)).collect())
                }
            })
            .collect()
    }

    fn roundtrip(name: &str, fields: &'static [Field]) {
        for seed in [0u8, 1, 0x7f, 0xff] {
            let values = sample_values(fields, seed);
            let mut dst = BytesMut::new();
            encode_payload(fields, &values, MAX_PAYLOAD, &mut dst)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            let decoded =
                decode_payload(fields, dst.freeze()).unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(decoded, values, "{name}");
        }
    }

    #[test]
    fn every_descriptor_roundtrips() {
        for d in table::COMMANDS {
            roundtrip(d.name, d.params);
            if let Some(response) = d.response {
                roundtrip(d.name, response);
            }
        }
        for d in table::EVENTS {
            roundtrip(d.name, d.fields);
        }
    }

    #[test]
    fn both_prefix_widths_present() {
        let widths: Vec<LengthPrefix> = table::COMMANDS
            .iter()
            .flat_map(|d| d.params.iter())
            .filter_map(|f| match f.ty {
                FieldType::Array(prefix) => Some(prefix),
                _ => None,
            })
            .collect();
        assert!(widths.contains(&LengthPrefix::U8));
        assert!(widths.contains(&LengthPrefix::U16));
    }
}
