use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use bytes::Bytes;
use tracing::trace;

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Default size of a single `receive` read.
pub const DEFAULT_READ_CHUNK: usize = 512;

/// A connected socket to an NCP: implements Read + Write.
///
/// This is the stream type returned by [`Endpoint::connect`](crate::Endpoint::connect).
pub struct NcpStream {
    inner: NcpStreamInner,
}

enum NcpStreamInner {
    Tcp(TcpStream),
    #[cfg(unix)]
    Unix(std::os::unix::net::UnixStream),
}

impl Read for NcpStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            NcpStreamInner::Tcp(stream) => stream.read(buf),
            #[cfg(unix)]
            NcpStreamInner::Unix(stream) => stream.read(buf),
        }
    }
}

impl Write for NcpStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            NcpStreamInner::Tcp(stream) => stream.write(buf),
            #[cfg(unix)]
            NcpStreamInner::Unix(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.inner {
            NcpStreamInner::Tcp(stream) => stream.flush(),
            #[cfg(unix)]
            NcpStreamInner::Unix(stream) => stream.flush(),
        }
    }
}

impl NcpStream {
    /// Wrap a connected TCP stream.
    pub fn from_tcp(stream: TcpStream) -> Self {
        Self {
            inner: NcpStreamInner::Tcp(stream),
        }
    }

    /// Wrap a connected Unix domain socket stream.
    #[cfg(unix)]
    pub fn from_unix(stream: std::os::unix::net::UnixStream) -> Self {
        Self {
            inner: NcpStreamInner::Unix(stream),
        }
    }

    /// Set read timeout on the underlying stream.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        match &self.inner {
            NcpStreamInner::Tcp(stream) => stream.set_read_timeout(timeout).map_err(Into::into),
            #[cfg(unix)]
            NcpStreamInner::Unix(stream) => stream.set_read_timeout(timeout).map_err(Into::into),
        }
    }

    /// Set write timeout on the underlying stream.
    pub fn set_write_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        match &self.inner {
            NcpStreamInner::Tcp(stream) => stream.set_write_timeout(timeout).map_err(Into::into),
            #[cfg(unix)]
            NcpStreamInner::Unix(stream) => stream.set_write_timeout(timeout).map_err(Into::into),
        }
    }

    /// Transport name for diagnostics.
    pub fn transport_name(&self) -> &'static str {
        match &self.inner {
            NcpStreamInner::Tcp(_) => "tcp",
            #[cfg(unix)]
            NcpStreamInner::Unix(_) => "unix-domain-socket",
        }
    }
}

impl std::fmt::Debug for NcpStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NcpStream")
            .field("type", &self.transport_name())
            .finish()
    }
}

/// [`Transport`] over any blocking `Read + Write` stream.
#[derive(Debug)]
pub struct StreamTransport<S> {
    stream: S,
    chunk: Vec<u8>,
}

impl<S: Read + Write + Send> StreamTransport<S> {
    /// Wrap `stream` with the default read chunk size.
    pub fn new(stream: S) -> Self {
        Self::with_chunk_size(stream, DEFAULT_READ_CHUNK)
    }

    /// Wrap `stream`, reading at most `chunk_size` bytes per `receive`.
    pub fn with_chunk_size(stream: S, chunk_size: usize) -> Self {
        Self {
            stream,
            chunk: vec![0u8; chunk_size.max(1)],
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Unwrap into the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write + Send> Transport for StreamTransport<S> {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        write_all_retry(&mut self.stream, bytes)?;
        loop {
            match self.stream.flush() {
                Ok(()) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(map_io(e)),
            }
        }
        trace!(len = bytes.len(), "transport sent");
        Ok(())
    }

    fn receive(&mut self) -> Result<Bytes> {
        loop {
            match self.stream.read(&mut self.chunk) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => {
                    trace!(len = n, "transport received");
                    return Ok(Bytes::copy_from_slice(&self.chunk[..n]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(map_io(e)),
            }
        }
    }
}

fn write_all_retry<W: Write>(writer: &mut W, mut buf: &[u8]) -> Result<()> {
    while !buf.is_empty() {
        match writer.write(buf) {
            Ok(0) => return Err(TransportError::Closed),
            Ok(n) => buf = &buf[n..],
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(map_io(e)),
        }
    }
    Ok(())
}

fn map_io(e: std::io::Error) -> TransportError {
    match e.kind() {
        ErrorKind::WouldBlock | ErrorKind::TimedOut => TransportError::Timeout,
        ErrorKind::UnexpectedEof
        | ErrorKind::BrokenPipe
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted => TransportError::Closed,
        _ => TransportError::Io(e),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::net::UnixStream;

    #[test]
    fn test_send_receive_over_socket_pair() {
        let (a, b) = UnixStream::pair().unwrap();
        let mut left = StreamTransport::new(NcpStream::from_unix(a));
        let mut right = StreamTransport::new(NcpStream::from_unix(b));

        left.send(&[0x00, 0x00, 0x01, 0x1B]).unwrap();
        let got = right.receive().unwrap();
        assert_eq!(&got[..], &[0x00, 0x00, 0x01, 0x1B]);
    }

    #[test]
    fn test_receive_respects_chunk_size() {
        let (a, b) = UnixStream::pair().unwrap();
        let mut left = StreamTransport::new(a);
        let mut right = StreamTransport::with_chunk_size(b, 3);

        left.send(b"abcdef").unwrap();
        let first = right.receive().unwrap();
        assert_eq!(&first[..], b"abc");
        let second = right.receive().unwrap();
        assert_eq!(&second[..], b"def");
    }

    #[test]
    fn test_receive_reports_closed_at_eof() {
        let (a, b) = UnixStream::pair().unwrap();
        drop(a);
        let mut right = StreamTransport::new(b);
        assert!(matches!(right.receive(), Err(TransportError::Closed)));
    }

    #[test]
    fn test_read_timeout_maps_to_timeout() {
        let (_a, b) = UnixStream::pair().unwrap();
        let stream = NcpStream::from_unix(b);
        stream
            .set_read_timeout(Some(Duration::from_millis(20)))
            .unwrap();
        let mut right = StreamTransport::new(stream);
        assert!(matches!(right.receive(), Err(TransportError::Timeout)));
    }

    #[test]
    fn test_debug_names_transport() {
        let (a, _b) = UnixStream::pair().unwrap();
        let stream = NcpStream::from_unix(a);
        assert_eq!(stream.transport_name(), "unix-domain-socket");
        assert!(format!("{stream:?}").contains("unix-domain-socket"));
    }
}
