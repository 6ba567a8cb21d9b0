use std::ops::Deref;

use ncpwire_catalog::Message;

use crate::error::{DispatchError, Result};
use crate::status::Status;

/// A decoded command response: its status plus the full message.
///
/// Derefs to [`Message`] for typed field access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    message: Message,
}

impl Response {
    /// Wrap a decoded response message, reading its leading status.
    pub fn new(message: Message) -> Result<Self> {
        let status = Status(message.u16(0)?);
        Ok(Self { status, message })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Pass the response through if the status is zero.
    pub fn success(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(DispatchError::Status {
                command: self.message.name(),
                status: self.status,
            })
        }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn into_message(self) -> Message {
        self.message
    }
}

impl Deref for Response {
    type Target = Message;

    fn deref(&self) -> &Message {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use ncpwire_catalog::table::cmd;

    use super::*;

    #[test]
    fn success_passes_zero_status() {
        let message = cmd::SYSTEM_HELLO
            .decode_response(Bytes::from_static(&[0, 0]))
            .unwrap();
        let response = Response::new(message).unwrap().success().unwrap();
        assert_eq!(response.status(), Status::SUCCESS);
        assert_eq!(response.name(), "system_hello");
    }

    #[test]
    fn nonzero_status_is_an_error() {
        let message = cmd::SYSTEM_GET_VERSION
            .decode_response(Bytes::from_static(&[0x81, 0x01]))
            .unwrap();
        let err = Response::new(message).unwrap().success().unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Status {
                command: "system_get_version",
                status: Status(0x0181)
            }
        ));
    }
}
