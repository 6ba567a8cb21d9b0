//! Field layout metadata.

use std::fmt;

/// Width of the length prefix in front of a variable-length array.
///
/// The width is per field: most arrays carry a 1-byte prefix, a few
/// (GATT database value uploads) carry 2 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthPrefix {
    U8,
    U16,
}

impl LengthPrefix {
    pub const fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
        }
    }

    /// Largest array length the prefix can express.
    pub const fn max_len(self) -> usize {
        match self {
            Self::U8 => u8::MAX as usize,
            Self::U16 => u16::MAX as usize,
        }
    }
}

/// Wire type of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    /// Fixed-size opaque bytes with no length on the wire.
    Blob(usize),
    /// Length-prefixed bytes; only allowed as the last field.
    Array(LengthPrefix),
}

impl FieldType {
    /// Bytes this field always occupies: the full width for scalars and
    /// blobs, the prefix width for arrays.
    pub const fn fixed_size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::Blob(n) => n,
            Self::Array(prefix) => prefix.width(),
        }
    }

    pub const fn is_array(self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::I8 => "int8",
            Self::U16 => "uint16",
            Self::I16 => "int16",
            Self::U32 => "uint32",
            Self::I32 => "int32",
            Self::Blob(2) => "uuid16",
            Self::Blob(6) => "bd_addr",
            Self::Blob(16) => "blob128",
            Self::Blob(_) => "blob",
            Self::Array(LengthPrefix::U8) => "uint8array",
            Self::Array(LengthPrefix::U16) => "byte_array",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob(n) => write!(f, "{}[{n}]", self.type_name()),
            _ => f.write_str(self.type_name()),
        }
    }
}

/// A named field in a message layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

impl Field {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }

    pub const fn u8(name: &'static str) -> Self {
        Self::new(name, FieldType::U8)
    }

    pub const fn i8(name: &'static str) -> Self {
        Self::new(name, FieldType::I8)
    }

    pub const fn u16(name: &'static str) -> Self {
        Self::new(name, FieldType::U16)
    }

    pub const fn i16(name: &'static str) -> Self {
        Self::new(name, FieldType::I16)
    }

    pub const fn u32(name: &'static str) -> Self {
        Self::new(name, FieldType::U32)
    }

    pub const fn i32(name: &'static str) -> Self {
        Self::new(name, FieldType::I32)
    }

    /// 6-byte Bluetooth device address.
    pub const fn addr(name: &'static str) -> Self {
        Self::new(name, FieldType::Blob(6))
    }

    /// 16-byte key.
    pub const fn key128(name: &'static str) -> Self {
        Self::new(name, FieldType::Blob(16))
    }

    /// 16-byte UUID.
    pub const fn uuid128(name: &'static str) -> Self {
        Self::new(name, FieldType::Blob(16))
    }

    /// 2-byte UUID.
    pub const fn uuid16(name: &'static str) -> Self {
        Self::new(name, FieldType::Blob(2))
    }

    /// Array with a 1-byte length prefix.
    pub const fn array8(name: &'static str) -> Self {
        Self::new(name, FieldType::Array(LengthPrefix::U8))
    }

    /// Array with a 2-byte length prefix.
    pub const fn array16(name: &'static str) -> Self {
        Self::new(name, FieldType::Array(LengthPrefix::U16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sizes() {
        assert_eq!(Field::u8("a").ty.fixed_size(), 1);
        assert_eq!(Field::i16("a").ty.fixed_size(), 2);
        assert_eq!(Field::u32("a").ty.fixed_size(), 4);
        assert_eq!(Field::addr("a").ty.fixed_size(), 6);
        assert_eq!(Field::uuid128("a").ty.fixed_size(), 16);
        assert_eq!(Field::array8("a").ty.fixed_size(), 1);
        assert_eq!(Field::array16("a").ty.fixed_size(), 2);
    }

    #[test]
    fn prefix_limits() {
        assert_eq!(LengthPrefix::U8.max_len(), 255);
        assert_eq!(LengthPrefix::U16.max_len(), 65535);
    }

    #[test]
    fn display_names() {
        assert_eq!(FieldType::Blob(6).to_string(), "bd_addr[6]");
        assert_eq!(
            FieldType::Array(LengthPrefix::U16).to_string(),
            "byte_array"
        );
        assert_eq!(FieldType::I8.to_string(), "int8");
    }
}
