//! Message identity within a kind.

use std::fmt;

/// The `(class_id, id)` pair naming a command, response or event.
///
/// Packs to the flat 16-bit key `class_id << 8 | id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub class_id: u8,
    pub id: u8,
}

impl MessageKey {
    pub const fn new(class_id: u8, id: u8) -> Self {
        Self { class_id, id }
    }

    /// The flat 16-bit form.
    pub const fn packed(self) -> u16 {
        ((self.class_id as u16) << 8) | self.id as u16
    }

    pub const fn from_packed(key: u16) -> Self {
        Self {
            class_id: (key >> 8) as u8,
            id: key as u8,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}:{:#04x}", self.class_id, self.id)
    }
}

impl From<(u8, u8)> for MessageKey {
    fn from((class_id, id): (u8, u8)) -> Self {
        Self::new(class_id, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let key = MessageKey::new(0x01, 0x1B);
        assert_eq!(key.packed(), 0x011B);
        assert_eq!(MessageKey::from_packed(0x011B), key);
    }

    #[test]
    fn test_ordering_follows_packed_key() {
        let a = MessageKey::new(0x01, 0xFF);
        let b = MessageKey::new(0x02, 0x00);
        assert!(a < b);
        assert!(a.packed() < b.packed());
    }

    #[test]
    fn test_display() {
        assert_eq!(MessageKey::new(0x0a, 0x03).to_string(), "0x0a:0x03");
    }
}
