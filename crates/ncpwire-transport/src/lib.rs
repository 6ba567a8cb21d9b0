//! Byte-stream transport seam for the NCP protocol stack.
//!
//! The protocol layers above only need two operations from the link to the
//! co-processor: push a complete frame out, and pull whatever bytes have
//! arrived. [`Transport`] captures exactly that. [`StreamTransport`] adapts
//! any blocking `Read + Write` stream (a TCP socket, a Unix socket, an opened
//! serial device) and [`Endpoint`] connects the socket flavours from an
//! address string.
//!
//! This is the lowest layer of ncpwire. Everything else builds on top of
//! the [`Transport`] trait provided here.

pub mod endpoint;
pub mod error;
pub mod stream;
pub mod traits;

pub use endpoint::{Endpoint, TransportConfig};
pub use error::{Result, TransportError};
pub use stream::{NcpStream, StreamTransport};
pub use traits::Transport;
