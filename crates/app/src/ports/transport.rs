//! Transport port: the byte stream the console talks over.

use std::future::Future;

/// Failures of the underlying byte stream. These are the only errors that
/// end the console loop.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The peer closed the stream.
    #[error("transport closed")]
    Closed,

    /// Any other I/O failure.
    #[error("transport I/O error")]
    Io(#[from] std::io::Error),
}

/// A bidirectional byte stream.
///
/// Reads are byte-granular so the line reader can stop exactly at a
/// terminator; implementations are expected to buffer internally.
pub trait Transport: Send {
    /// Wait for the next byte. Resolves to [`TransportError::Closed`] once the
    /// stream is exhausted.
    fn read_byte(&mut self) -> impl Future<Output = Result<u8, TransportError>> + Send;

    /// Queue `bytes` for the peer.
    fn write_all(&mut self, bytes: &[u8])
    -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Push everything queued so far to the peer.
    fn flush(&mut self) -> impl Future<Output = Result<(), TransportError>> + Send;
}
