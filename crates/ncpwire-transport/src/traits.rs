use bytes::Bytes;

use crate::error::Result;

/// A bidirectional byte link to the co-processor.
///
/// `send` hands over one complete frame; implementations must write it in
/// full or fail. `receive` blocks until at least one byte is available and
/// returns whatever chunk arrived. Chunks carry no framing: a single chunk
/// may hold a partial frame or several frames back to back.
pub trait Transport: Send {
    /// Write `bytes` to the link in full.
    fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Block until bytes are available and return them.
    ///
    /// Fails with [`TransportError::Timeout`](crate::TransportError::Timeout)
    /// when a read deadline elapses and
    /// [`TransportError::Closed`](crate::TransportError::Closed) at end of
    /// stream.
    fn receive(&mut self) -> Result<Bytes>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }

    fn receive(&mut self) -> Result<Bytes> {
        (**self).receive()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }

    fn receive(&mut self) -> Result<Bytes> {
        (**self).receive()
    }
}
