use std::fmt;
use std::io;

use ncpwire_catalog::CodecError;
use ncpwire_frame::FrameError;
use ncpwire_host::DispatchError;
use ncpwire_transport::TransportError;

// Exit codes follow the sysexits-style table shared by our CLIs.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::ConnectionRefused | io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Connect { source, .. } | TransportError::Io(source) => {
            io_error(context, source)
        }
        TransportError::InvalidEndpoint { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        TransportError::Timeout => CliError::new(TIMEOUT, format!("{context}: {err}")),
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::Transport(err) => transport_error(context, err),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

/// Encode-side failures are bad arguments; decode-side failures are bad data.
pub fn codec_error(context: &str, err: CodecError) -> CliError {
    let code = match err {
        CodecError::CommandTooLong { .. }
        | CodecError::ArgumentCount { .. }
        | CodecError::ValueMismatch { .. }
        | CodecError::BlobLength { .. }
        | CodecError::NoSuchField { .. } => USAGE,
        CodecError::InvalidLayout { .. } => INTERNAL,
        _ => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn dispatch_error(context: &str, err: DispatchError) -> CliError {
    match err {
        DispatchError::Transport(err) => transport_error(context, err),
        DispatchError::Frame(err) => frame_error(context, err),
        DispatchError::Codec(err) => codec_error(context, err),
        DispatchError::Timeout(_) => CliError::new(TIMEOUT, format!("{context}: {err}")),
        DispatchError::ProtocolViolation { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        DispatchError::UnknownCommand(_)
        | DispatchError::NoResponseExpected(_)
        | DispatchError::ResponseExpected(_) => CliError::new(USAGE, format!("{context}: {err}")),
        other => CliError::new(FAILURE, format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ncpwire_host::Status;

    use super::*;

    #[test]
    fn transport_errors_map_to_codes() {
        assert_eq!(transport_error("x", TransportError::Timeout).code, TIMEOUT);
        assert_eq!(
            transport_error("x", TransportError::Closed).code,
            TRANSPORT_ERROR
        );
        let refused = TransportError::Connect {
            addr: "tcp://127.0.0.1:1".into(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        assert_eq!(transport_error("x", refused).code, FAILURE);
    }

    #[test]
    fn dispatch_errors_map_to_codes() {
        let status = DispatchError::Status {
            command: "system_hello",
            status: Status(0x0181),
        };
        assert_eq!(dispatch_error("x", status).code, FAILURE);
        assert_eq!(
            dispatch_error("x", DispatchError::Timeout(Duration::from_secs(1))).code,
            TIMEOUT
        );
        assert_eq!(
            dispatch_error("x", DispatchError::UnknownCommand("nope".into())).code,
            USAGE
        );
        let nested = DispatchError::Transport(TransportError::Timeout);
        assert_eq!(dispatch_error("x", nested).code, TIMEOUT);
    }

    #[test]
    fn codec_errors_split_by_direction() {
        let too_long = CodecError::CommandTooLong {
            size: 300,
            max: 256,
        };
        assert_eq!(codec_error("x", too_long).code, USAGE);
        assert_eq!(
            codec_error("x", CodecError::TrailingBytes { count: 2 }).code,
            DATA_INVALID
        );
    }
}
