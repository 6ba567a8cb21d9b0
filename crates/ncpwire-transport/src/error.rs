/// Errors raised by the transport collaborator.
///
/// These are never folded into a protocol status value; callers see them as
/// a distinct error kind all the way up the stack.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to connect to the specified address.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// The address string could not be parsed.
    #[error("invalid endpoint {addr:?}: {reason}")]
    InvalidEndpoint { addr: String, reason: &'static str },

    /// An I/O error occurred on the transport stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No bytes arrived before the configured read deadline.
    #[error("transport timed out")]
    Timeout,

    /// The peer closed the stream.
    #[error("transport closed by peer")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
