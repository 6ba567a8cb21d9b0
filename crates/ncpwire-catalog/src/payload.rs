//! Table-driven payload codec.
//!
//! Scalars are little-endian and fixed width. Blobs are copied as-is with no
//! length on the wire. At most one array may appear, always last, as a
//! length prefix (width fixed per field) followed by the raw bytes.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::{CodecError, Result};
use crate::field::{Field, FieldType, LengthPrefix};
use crate::value::Value;

/// Default maximum payload size.
pub const MAX_PAYLOAD: usize = ncpwire_frame::DEFAULT_MAX_PAYLOAD;

/// Bytes a layout occupies before any array content.
pub fn fixed_size(fields: &[Field]) -> usize {
    fields.iter().map(|f| f.ty.fixed_size()).sum()
}

/// Check the layout rules: at most one array, only in last position, and
/// the fixed part fits in `max`.
pub fn validate_layout(message: &'static str, fields: &[Field], max: usize) -> Result<()> {
    let arrays = fields.iter().filter(|f| f.ty.is_array()).count();
    if arrays > 1 {
        return Err(CodecError::InvalidLayout {
            message,
            reason: "more than one variable-length array",
        });
    }
    if arrays == 1 && fields.last().is_some_and(|f| !f.ty.is_array()) {
        return Err(CodecError::InvalidLayout {
            message,
            reason: "variable-length array is not the last field",
        });
    }
    if fixed_size(fields) > max {
        return Err(CodecError::InvalidLayout {
            message,
            reason: "fixed fields exceed maximum payload size",
        });
    }
    Ok(())
}

/// Check `values` against `fields` and compute the encoded size.
pub fn encoded_len(fields: &[Field], values: &[Value], max: usize) -> Result<usize> {
    if fields.len() != values.len() {
        return Err(CodecError::ArgumentCount {
            expected: fields.len(),
            found: values.len(),
        });
    }

    let mut size = 0usize;
    for (field, value) in fields.iter().zip(values) {
        if !value.matches(field.ty) {
            return Err(CodecError::ValueMismatch {
                field: field.name,
                expected: field.ty.type_name(),
                found: value.type_name(),
            });
        }
        size += field.ty.fixed_size();
        match (field.ty, value) {
            (FieldType::Blob(n), Value::Blob(bytes)) if bytes.len() != n => {
                return Err(CodecError::BlobLength {
                    field: field.name,
                    expected: n,
                    found: bytes.len(),
                });
            }
            (FieldType::Array(prefix), Value::Array(bytes)) => {
                size += bytes.len();
                if bytes.len() > prefix.max_len() {
                    return Err(CodecError::CommandTooLong { size, max });
                }
            }
            _ => {}
        }
    }

    if size > max {
        return Err(CodecError::CommandTooLong { size, max });
    }
    Ok(size)
}

/// Append the encoding of `values` to `dst`, returning the bytes written.
///
/// All checks run before the first write: on error `dst` is unchanged.
pub fn encode_payload(
    fields: &[Field],
    values: &[Value],
    max: usize,
    dst: &mut BytesMut,
) -> Result<usize> {
    let len = encoded_len(fields, values, max)?;
    dst.reserve(len);
    for (field, value) in fields.iter().zip(values) {
        match value {
            Value::U8(v) => dst.put_u8(*v),
            Value::I8(v) => dst.put_i8(*v),
            Value::U16(v) => dst.put_u16_le(*v),
            Value::I16(v) => dst.put_i16_le(*v),
            Value::U32(v) => dst.put_u32_le(*v),
            Value::I32(v) => dst.put_i32_le(*v),
            Value::Blob(bytes) => dst.put_slice(bytes),
            Value::Array(bytes) => {
                match field.ty {
                    FieldType::Array(LengthPrefix::U16) => dst.put_u16_le(bytes.len() as u16),
                    _ => dst.put_u8(bytes.len() as u8),
                }
                dst.put_slice(bytes);
            }
        }
    }
    trace!(len, "encoded payload");
    Ok(len)
}

/// Decode `src` against `fields`.
///
/// Fails closed: a short payload is `Truncated`, leftover bytes after the
/// last field are `TrailingBytes`. Blob and array values share `src`'s
/// storage.
pub fn decode_payload(fields: &[Field], mut src: Bytes) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        let needed = field.ty.fixed_size();
        if src.remaining() < needed {
            return Err(CodecError::Truncated {
                field: field.name,
                needed,
                available: src.remaining(),
            });
        }
        let value = match field.ty {
            FieldType::U8 => Value::U8(src.get_u8()),
            FieldType::I8 => Value::I8(src.get_i8()),
            FieldType::U16 => Value::U16(src.get_u16_le()),
            FieldType::I16 => Value::I16(src.get_i16_le()),
            FieldType::U32 => Value::U32(src.get_u32_le()),
            FieldType::I32 => Value::I32(src.get_i32_le()),
            FieldType::Blob(n) => Value::Blob(src.split_to(n)),
            FieldType::Array(prefix) => {
                let len = match prefix {
                    LengthPrefix::U8 => usize::from(src.get_u8()),
                    LengthPrefix::U16 => usize::from(src.get_u16_le()),
                };
                if src.remaining() < len {
                    return Err(CodecError::Truncated {
                        field: field.name,
                        needed: len,
                        available: src.remaining(),
                    });
                }
                Value::Array(src.split_to(len))
            }
        };
        values.push(value);
    }

    if src.has_remaining() {
        return Err(CodecError::TrailingBytes {
            count: src.remaining(),
        });
    }
    Ok(values)
}

/// Copy up to `dst.len()` bytes of `src` and return the full length of `src`.
///
/// A return value larger than `dst.len()` means the output was truncated.
pub fn copy_out(src: &[u8], dst: &mut [u8]) -> usize {
    let n = src.len().min(dst.len());
    dst[..n].copy_from_slice(&src[..n]);
    src.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRITE: &[Field] = &[
        Field::u8("connection"),
        Field::u16("characteristic"),
        Field::array8("value"),
    ];
    const UPLOAD: &[Field] = &[
        Field::u16("session"),
        Field::u16("attribute"),
        Field::array16("data"),
    ];

    fn write_args(value: Vec<u8>) -> Vec<Value> {
        vec![
            Value::U8(1),
            Value::U16(0x0203),
            Value::Array(Bytes::from(value)),
        ]
    }

    #[test]
    fn encodes_little_endian_with_prefix() {
        let mut dst = BytesMut::new();
        let len = encode_payload(WRITE, &write_args(vec![0xAA, 0xBB]), MAX_PAYLOAD, &mut dst)
            .unwrap();
        assert_eq!(len, 6);
        assert_eq!(dst.as_ref(), &[0x01, 0x03, 0x02, 0x02, 0xAA, 0xBB]);
    }

    #[test]
    fn prefix_width_is_per_field() {
        let mut dst = BytesMut::new();
        let args = [
            Value::U16(1),
            Value::U16(2),
            Value::Array(Bytes::from_static(&[9; 3])),
        ];
        encode_payload(UPLOAD, &args, MAX_PAYLOAD, &mut dst).unwrap();
        assert_eq!(dst.as_ref(), &[1, 0, 2, 0, 3, 0, 9, 9, 9]);

        let values = decode_payload(UPLOAD, dst.freeze()).unwrap();
        assert_eq!(values, args.to_vec());
    }

    #[test]
    fn command_too_long_leaves_buffer_unchanged() {
        let mut dst = BytesMut::from(&b"prior request"[..]);
        let before = dst.clone();
        // 1 + 2 + 1 prefix + 253 = 257 > 256
        let err = encode_payload(WRITE, &write_args(vec![0; 253]), MAX_PAYLOAD, &mut dst)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::CommandTooLong {
                size: 257,
                max: 256
            }
        );
        assert_eq!(dst, before);
    }

    #[test]
    fn largest_fitting_array_encodes() {
        let mut dst = BytesMut::new();
        let len = encode_payload(WRITE, &write_args(vec![0; 252]), MAX_PAYLOAD, &mut dst).unwrap();
        assert_eq!(len, MAX_PAYLOAD);
    }

    #[test]
    fn array_longer_than_prefix_is_too_long() {
        let mut dst = BytesMut::new();
        let err = encode_payload(WRITE, &write_args(vec![0; 300]), 0x7FF, &mut dst).unwrap_err();
        assert!(matches!(err, CodecError::CommandTooLong { .. }));
        assert!(dst.is_empty());
    }

    #[test]
    fn value_shape_errors() {
        let mut dst = BytesMut::new();
        let err = encode_payload(WRITE, &[Value::U8(1)], MAX_PAYLOAD, &mut dst).unwrap_err();
        assert_eq!(
            err,
            CodecError::ArgumentCount {
                expected: 3,
                found: 1
            }
        );

        let bad = [Value::U16(1), Value::U16(2), Value::Array(Bytes::new())];
        let err = encode_payload(WRITE, &bad, MAX_PAYLOAD, &mut dst).unwrap_err();
        assert!(matches!(
            err,
            CodecError::ValueMismatch {
                field: "connection",
                ..
            }
        ));

        let addr = [Field::addr("address")];
        let short = [Value::Blob(Bytes::from_static(&[1, 2]))];
        let err = encode_payload(&addr, &short, MAX_PAYLOAD, &mut dst).unwrap_err();
        assert_eq!(
            err,
            CodecError::BlobLength {
                field: "address",
                expected: 6,
                found: 2
            }
        );
        assert!(dst.is_empty());
    }

    #[test]
    fn decode_fails_closed_on_short_input() {
        let err = decode_payload(WRITE, Bytes::from_static(&[0x01, 0x03])).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Truncated {
                field: "characteristic",
                ..
            }
        ));

        let err =
            decode_payload(WRITE, Bytes::from_static(&[0x01, 0x03, 0x02, 0x05, 0xAA])).unwrap_err();
        assert_eq!(
            err,
            CodecError::Truncated {
                field: "value",
                needed: 5,
                available: 1
            }
        );
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let err =
            decode_payload(&[Field::u16("result")], Bytes::from_static(&[0, 0, 1])).unwrap_err();
        assert_eq!(err, CodecError::TrailingBytes { count: 1 });
    }

    #[test]
    fn scalars_roundtrip_at_width_extremes() {
        let fields = [
            Field::u8("a"),
            Field::i8("b"),
            Field::u16("c"),
            Field::i16("d"),
            Field::u32("e"),
            Field::i32("f"),
        ];
        for values in [
            vec![
                Value::U8(0),
                Value::I8(i8::MIN),
                Value::U16(0),
                Value::I16(i16::MIN),
                Value::U32(0),
                Value::I32(i32::MIN),
            ],
            vec![
                Value::U8(u8::MAX),
                Value::I8(i8::MAX),
                Value::U16(u16::MAX),
                Value::I16(i16::MAX),
                Value::U32(u32::MAX),
                Value::I32(i32::MAX),
            ],
            vec![
                Value::U8(0x5A),
                Value::I8(-1),
                Value::U16(0x1234),
                Value::I16(-2),
                Value::U32(0xDEADBEEF),
                Value::I32(-3),
            ],
        ] {
            let mut dst = BytesMut::new();
            encode_payload(&fields, &values, MAX_PAYLOAD, &mut dst).unwrap();
            assert_eq!(decode_payload(&fields, dst.freeze()).unwrap(), values);
        }
    }

    #[test]
    fn copy_out_reports_true_length_for_every_capacity() {
        let src: Vec<u8> = (0..40).collect();
        for capacity in 0..=64 {
            let mut dst = vec![0xEEu8; capacity];
            let reported = copy_out(&src, &mut dst);
            let copied = src.len().min(capacity);
            assert_eq!(reported, src.len());
            assert_eq!(&dst[..copied], &src[..copied]);
            assert!(dst[copied..].iter().all(|b| *b == 0xEE));
        }
    }

    #[test]
    fn layout_rules() {
        assert!(validate_layout("ok", WRITE, MAX_PAYLOAD).is_ok());

        let two = [Field::array8("a"), Field::array8("b")];
        assert!(matches!(
            validate_layout("two", &two, MAX_PAYLOAD),
            Err(CodecError::InvalidLayout { .. })
        ));

        let misplaced = [Field::array8("a"), Field::u8("b")];
        assert!(matches!(
            validate_layout("misplaced", &misplaced, MAX_PAYLOAD),
            Err(CodecError::InvalidLayout { .. })
        ));

        let wide = [Field::key128("a"); 17];
        assert!(matches!(
            validate_layout("wide", &wide, MAX_PAYLOAD),
            Err(CodecError::InvalidLayout { .. })
        ));
    }
}
