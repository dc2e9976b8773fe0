//! # barbos-adapter-stdio
//!
//! Stream transport for the console.
//!
//! [`StreamTransport`] adapts any `tokio` reader/writer pair to the
//! [`Transport`] port. The daemon uses [`StreamTransport::stdio`]; a UART
//! bridge, a pipe from a relay, or an in-memory buffer in tests plug in the
//! same way.
//!
//! ## Dependency rule
//!
//! Depends on `barbos-app` (port trait) only.

use barbos_app::ports::{Transport, TransportError};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// A [`Transport`] over a buffered reader and a writer.
pub struct StreamTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl StreamTransport<Stdin, Stdout> {
    /// Transport over the process standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StreamTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Give back the writer, e.g. to inspect what was sent.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R, W> Transport for StreamTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_byte(&mut self) -> Result<u8, TransportError> {
        match self.reader.read_u8().await {
            Ok(byte) => Ok(byte),
            Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
                tracing::debug!("input stream reached end of file");
                Err(TransportError::Closed)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.writer.write_all(bytes).await.map_err(map_write_error)
    }

    async fn flush(&mut self) -> Result<(), TransportError> {
        self.writer.flush().await.map_err(map_write_error)
    }
}

/// A broken pipe means the peer stopped listening, which ends the session
/// the same way end-of-file does.
fn map_write_error(err: std::io::Error) -> TransportError {
    if err.kind() == std::io::ErrorKind::BrokenPipe {
        TransportError::Closed
    } else {
        TransportError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbos_app::console::Console;
    use barbos_app::session::{self, SessionOptions};

    #[tokio::test]
    async fn should_read_bytes_in_order() {
        let mut transport = StreamTransport::new(&b"AB"[..], Vec::new());
        assert_eq!(transport.read_byte().await.unwrap(), b'A');
        assert_eq!(transport.read_byte().await.unwrap(), b'B');
    }

    #[tokio::test]
    async fn should_report_closed_at_end_of_input() {
        let mut transport = StreamTransport::new(&b""[..], Vec::new());
        assert!(matches!(
            transport.read_byte().await,
            Err(TransportError::Closed)
        ));
    }

    #[tokio::test]
    async fn should_collect_written_bytes() {
        let mut transport = StreamTransport::new(&b""[..], Vec::new());
        transport.write_all(b"armed\n").await.unwrap();
        transport.flush().await.unwrap();
        assert_eq!(transport.into_writer(), b"armed\n");
    }

    #[test]
    fn should_map_broken_pipe_to_closed() {
        let err = std::io::Error::from(std::io::ErrorKind::BrokenPipe);
        assert!(matches!(map_write_error(err), TransportError::Closed));
    }

    #[tokio::test]
    async fn should_serve_a_session_over_duplex_stream() {
        let (client, server) = tokio::io::duplex(256);
        let (server_read, server_write) = tokio::io::split(server);
        let (mut client_read, mut client_write) = tokio::io::split(client);

        client_write.write_all(b"ALARM armed?\n").await.unwrap();
        client_write.shutdown().await.unwrap();

        let mut console = Console::default();
        let mut transport = StreamTransport::new(server_read, server_write);
        let options = SessionOptions {
            banner: false,
            ..SessionOptions::default()
        };
        let result = session::run(&mut console, &mut transport, &options).await;
        assert!(matches!(result, Err(TransportError::Closed)));
        drop(transport);

        let mut output = String::new();
        client_read.read_to_string(&mut output).await.unwrap();
        assert_eq!(output, "barbOS> not armed\nbarbOS> ");
    }
}
