use std::fmt;

use bytes::Bytes;

use crate::field::FieldType;

/// The value of one field, as encoded or decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    Blob(Bytes),
    Array(Bytes),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::U8(_) => "uint8",
            Self::I8(_) => "int8",
            Self::U16(_) => "uint16",
            Self::I16(_) => "int16",
            Self::U32(_) => "uint32",
            Self::I32(_) => "int32",
            Self::Blob(_) => "blob",
            Self::Array(_) => "array",
        }
    }

    /// Whether this value has the shape `ty` expects. Blob length is checked
    /// separately.
    pub fn matches(&self, ty: FieldType) -> bool {
        matches!(
            (self, ty),
            (Self::U8(_), FieldType::U8)
                | (Self::I8(_), FieldType::I8)
                | (Self::U16(_), FieldType::U16)
                | (Self::I16(_), FieldType::I16)
                | (Self::U32(_), FieldType::U32)
                | (Self::I32(_), FieldType::I32)
                | (Self::Blob(_), FieldType::Blob(_))
                | (Self::Array(_), FieldType::Array(_))
        )
    }

    /// Integer value widened to `i64`, or `None` for byte fields.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::U8(v) => Some(v.into()),
            Self::I8(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::Blob(_) | Self::Array(_) => None,
        }
    }

    /// Raw bytes of a blob or array field.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Blob(b) | Self::Array(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.as_i64() {
            return write!(f, "{n}");
        }
        if let Some(bytes) = self.as_bytes() {
            for b in bytes.iter() {
                write!(f, "{b:02x}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::LengthPrefix;

    #[test]
    fn matches_field_types() {
        assert!(Value::U16(1).matches(FieldType::U16));
        assert!(!Value::U16(1).matches(FieldType::I16));
        assert!(Value::Blob(Bytes::new()).matches(FieldType::Blob(6)));
        assert!(Value::Array(Bytes::new()).matches(FieldType::Array(LengthPrefix::U16)));
        assert!(!Value::Array(Bytes::new()).matches(FieldType::Blob(6)));
    }

    #[test]
    fn display_is_decimal_or_hex() {
        assert_eq!(Value::I8(-7).to_string(), "-7");
        assert_eq!(Value::U32(70000).to_string(), "70000");
        assert_eq!(
            Value::Blob(Bytes::from_static(&[0x01, 0xab])).to_string(),
            "01ab"
        );
        assert_eq!(Value::Array(Bytes::new()).to_string(), "");
    }
}
