//! Console session: the prompt, read, dispatch, reply loop.
//!
//! One line is processed to completion before the next read; the only
//! suspension point is the transport read. Output is flushed after the
//! prompt and after each reply so a relay can frame on either.

use crate::console::Console;
use crate::line_reader::{DEFAULT_MAX_LINE_LEN, read_line};
use crate::ports::{Transport, TransportError};

/// Greeting written once when the session starts.
pub const BANNER: &str = "welcome to barbOS...";

pub const DEFAULT_PROMPT: &str = "barbOS> ";

/// Presentation settings for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Written, unterminated, before every read.
    pub prompt: String,
    /// Whether to greet with [`BANNER`].
    pub banner: bool,
    /// Bytes kept from a single line; the rest is discarded.
    pub max_line_len: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

/// Drive `console` over `transport` until the transport fails.
///
/// There is no in-band way to stop: the loop runs until the peer closes the
/// stream or an I/O error occurs.
///
/// # Errors
///
/// Returns [`TransportError::Closed`] when the peer hangs up, or the I/O
/// error that broke the stream.
pub async fn run<T: Transport>(
    console: &mut Console,
    transport: &mut T,
    options: &SessionOptions,
) -> Result<(), TransportError> {
    if options.banner {
        transport.write_all(BANNER.as_bytes()).await?;
        transport.write_all(b"\n").await?;
    }

    loop {
        transport.write_all(options.prompt.as_bytes()).await?;
        transport.flush().await?;

        let line = read_line(transport, options.max_line_len).await?;
        let reply = console.execute(&line);
        for text in reply.lines() {
            transport.write_all(text.as_bytes()).await?;
            transport.write_all(b"\n").await?;
        }
        transport.flush().await?;
    }
}
