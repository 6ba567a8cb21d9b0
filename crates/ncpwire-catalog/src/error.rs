use ncpwire_frame::{MessageKey, MessageKind};

/// Errors raised while encoding or decoding message payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The encoded payload would exceed the maximum payload size.
    #[error("command too long ({size} bytes, max {max})")]
    CommandTooLong { size: usize, max: usize },

    /// The payload ended before `field` was complete.
    #[error("payload truncated at field {field:?} (need {needed} bytes, have {available})")]
    Truncated {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    /// Bytes remained after the last field was decoded.
    #[error("{count} trailing bytes after last field")]
    TrailingBytes { count: usize },

    /// Wrong number of values supplied for a layout.
    #[error("expected {expected} values, got {found}")]
    ArgumentCount { expected: usize, found: usize },

    /// A supplied value does not match the field type.
    #[error("field {field:?} expects {expected}, got {found}")]
    ValueMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A fixed-size blob was supplied with the wrong length.
    #[error("field {field:?} expects {expected} bytes, got {found}")]
    BlobLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// The message has no such field.
    #[error("{message} has no field {field}")]
    NoSuchField {
        message: &'static str,
        field: String,
    },

    /// A typed accessor was used on a field of another type.
    #[error("field {field:?} is {actual}, not {requested}")]
    FieldType {
        field: &'static str,
        requested: &'static str,
        actual: &'static str,
    },

    /// A descriptor violates the layout rules.
    #[error("invalid layout for {message}: {reason}")]
    InvalidLayout {
        message: &'static str,
        reason: &'static str,
    },

    /// No catalog entry for this kind and key.
    #[error("unknown {kind} {key}")]
    UnknownMessage { kind: MessageKind, key: MessageKey },
}

pub type Result<T> = std::result::Result<T, CodecError>;
