use bytes::Bytes;
use ncpwire_frame::{MessageKey, MessageKind};

use crate::error::{CodecError, Result};
use crate::field::Field;
use crate::payload::{copy_out, decode_payload};
use crate::value::Value;

/// A payload decoded against its catalog layout.
///
/// Accessors are typed and fail closed: asking for a field as the wrong
/// type, or for a field the layout does not have, is an error rather than a
/// reinterpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    kind: MessageKind,
    key: MessageKey,
    name: &'static str,
    fields: &'static [Field],
    values: Vec<Value>,
}

macro_rules! scalar_accessor {
    ($(#[$doc:meta])* $fn:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $fn(&self, index: usize) -> Result<$ty> {
            match self.value(index)? {
                Value::$variant(v) => Ok(*v),
                other => Err(self.type_error(index, stringify!($ty), other)),
            }
        }
    };
}

impl Message {
    /// Decode `payload` against `fields`.
    pub fn decode(
        kind: MessageKind,
        key: MessageKey,
        name: &'static str,
        fields: &'static [Field],
        payload: Bytes,
    ) -> Result<Self> {
        let values = decode_payload(fields, payload)?;
        Ok(Self {
            kind,
            key,
            name,
            fields,
            values,
        })
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn key(&self) -> MessageKey {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The layout the values were decoded against.
    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Field/value pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Field, &Value)> + '_ {
        self.fields.iter().zip(self.values.iter())
    }

    pub fn value(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| CodecError::NoSuchField {
            message: self.name,
            field: format!("#{index}"),
        })
    }

    /// Look a value up by field name.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.iter()
            .find(|(field, _)| field.name == name)
            .map(|(_, value)| value)
            .ok_or_else(|| CodecError::NoSuchField {
                message: self.name,
                field: name.to_string(),
            })
    }

    scalar_accessor!(u8, U8, u8);
    scalar_accessor!(i8, I8, i8);
    scalar_accessor!(u16, U16, u16);
    scalar_accessor!(i16, I16, i16);
    scalar_accessor!(u32, U32, u32);
    scalar_accessor!(i32, I32, i32);

    /// A fixed-size blob field as an array.
    pub fn blob<const N: usize>(&self, index: usize) -> Result<[u8; N]> {
        match self.value(index)? {
            Value::Blob(bytes) => {
                <[u8; N]>::try_from(bytes.as_ref()).map_err(|_| CodecError::BlobLength {
                    field: self.field_name(index),
                    expected: N,
                    found: bytes.len(),
                })
            }
            other => Err(self.type_error(index, "blob", other)),
        }
    }

    /// A blob or array field's bytes, sharing the payload's storage.
    pub fn bytes(&self, index: usize) -> Result<Bytes> {
        match self.value(index)? {
            Value::Blob(bytes) | Value::Array(bytes) => Ok(bytes.clone()),
            other => Err(self.type_error(index, "bytes", other)),
        }
    }

    /// Copy an array field into `dst`, truncating to its capacity, and return
    /// the array's full length.
    pub fn copy_array(&self, index: usize, dst: &mut [u8]) -> Result<usize> {
        match self.value(index)? {
            Value::Array(bytes) => Ok(copy_out(bytes, dst)),
            other => Err(self.type_error(index, "array", other)),
        }
    }

    fn field_name(&self, index: usize) -> &'static str {
        self.fields.get(index).map_or("?", |f| f.name)
    }

    fn type_error(&self, index: usize, requested: &'static str, actual: &Value) -> CodecError {
        CodecError::FieldType {
            field: self.field_name(index),
            requested,
            actual: actual.type_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LAYOUT: &[Field] = &[
        Field::u16("result"),
        Field::addr("address"),
        Field::i8("rssi"),
        Field::array8("data"),
    ];

    fn sample() -> Message {
        let mut payload = vec![0x00, 0x00, 1, 2, 3, 4, 5, 6, 0xC4, 3];
        payload.extend_from_slice(b"abc");
        Message::decode(
            MessageKind::Response,
            MessageKey::new(0x05, 0x01),
            "sample",
            LAYOUT,
            Bytes::from(payload),
        )
        .unwrap()
    }

    #[test]
    fn typed_accessors() {
        let msg = sample();
        assert_eq!(msg.u16(0).unwrap(), 0);
        assert_eq!(msg.blob::<6>(1).unwrap(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(msg.i8(2).unwrap(), -60);
        assert_eq!(msg.bytes(3).unwrap().as_ref(), b"abc");
        assert_eq!(msg.get("rssi").unwrap(), &Value::I8(-60));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let msg = sample();
        assert_eq!(
            msg.u8(0).unwrap_err(),
            CodecError::FieldType {
                field: "result",
                requested: "u8",
                actual: "uint16"
            }
        );
        assert!(matches!(
            msg.blob::<16>(1),
            Err(CodecError::BlobLength { expected: 16, .. })
        ));
        assert!(matches!(
            msg.copy_array(1, &mut [0; 4]),
            Err(CodecError::FieldType { .. })
        ));
    }

    #[test]
    fn missing_field_is_an_error() {
        let msg = sample();
        assert!(matches!(msg.value(9), Err(CodecError::NoSuchField { .. })));
        assert!(matches!(msg.get("nope"), Err(CodecError::NoSuchField { .. })));
    }

    #[test]
    fn copy_array_truncates_and_reports_length() {
        let msg = sample();
        let mut small = [0u8; 2];
        assert_eq!(msg.copy_array(3, &mut small).unwrap(), 3);
        assert_eq!(&small, b"ab");

        let mut large = [0u8; 8];
        assert_eq!(msg.copy_array(3, &mut large).unwrap(), 3);
        assert_eq!(&large[..3], b"abc");
    }
}
