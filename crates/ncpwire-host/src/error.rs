use std::time::Duration;

use ncpwire_catalog::CodecError;
use ncpwire_frame::{FrameError, MessageKey, MessageKind};
use ncpwire_transport::TransportError;

use crate::status::Status;

/// Errors that can occur while dispatching commands or waiting for events.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Transport-level error, including read timeouts and peer close.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Frame-level error (malformed header, oversized frame).
    #[error("frame error: {0}")]
    Frame(FrameError),

    /// Payload encode/decode error, including `CommandTooLong`.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// A frame arrived that no outstanding request accounts for.
    #[error("protocol violation: unexpected {kind} {key} (awaiting {})", fmt_expected(.expected))]
    ProtocolViolation {
        expected: Option<MessageKey>,
        kind: MessageKind,
        key: MessageKey,
    },

    /// The NCP answered with a nonzero status.
    #[error("{command} failed with status {status}")]
    Status {
        command: &'static str,
        status: Status,
    },

    /// Another call is in flight on this dispatcher.
    #[error("dispatcher busy")]
    Busy,

    /// No matching response before the configured deadline.
    #[error("response timed out after {0:?}")]
    Timeout(Duration),

    /// `call` was used on a fire-and-forget command.
    #[error("{0} is fire-and-forget and has no response")]
    NoResponseExpected(&'static str),

    /// `notify` was used on a command that expects a response.
    #[error("{0} expects a response")]
    ResponseExpected(&'static str),

    /// No catalog command with this name.
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}

impl From<FrameError> for DispatchError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::Transport(inner) => Self::Transport(inner),
            other => Self::Frame(other),
        }
    }
}

fn fmt_expected(expected: &Option<MessageKey>) -> String {
    match expected {
        Some(key) => format!("response {key}"),
        None => "nothing".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_transport_errors_flatten() {
        let err: DispatchError = FrameError::Transport(TransportError::Timeout).into();
        assert!(matches!(err, DispatchError::Transport(TransportError::Timeout)));

        let err: DispatchError = FrameError::InvalidKind(3).into();
        assert!(matches!(err, DispatchError::Frame(FrameError::InvalidKind(3))));
    }

    #[test]
    fn protocol_violation_message() {
        let err = DispatchError::ProtocolViolation {
            expected: Some(MessageKey::new(0x01, 0x1B)),
            kind: MessageKind::Response,
            key: MessageKey::new(0x01, 0x00),
        };
        assert_eq!(
            err.to_string(),
            "protocol violation: unexpected response 0x01:0x00 (awaiting response 0x01:0x1b)"
        );
    }
}
