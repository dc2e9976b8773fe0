//! Line reader: accumulates transport bytes up to a CR or LF.

use crate::ports::{Transport, TransportError};

/// Default ceiling on the bytes kept from a single line.
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Read one line from `transport`, without its terminator.
///
/// Either CR (`0x0D`) or LF (`0x0A`) ends the line, so a CR LF pair yields
/// the line followed by an empty one. Bytes past `max_len` are discarded up
/// to the terminator. Invalid UTF-8 is replaced, not rejected.
///
/// # Errors
///
/// Returns [`TransportError::Closed`] when the stream ends before a
/// terminator, or any other transport failure.
pub async fn read_line<T: Transport>(
    transport: &mut T,
    max_len: usize,
) -> Result<String, TransportError> {
    let mut line = Vec::new();
    let mut discarded = 0usize;
    loop {
        match transport.read_byte().await? {
            b'\r' | b'\n' => break,
            byte if line.len() < max_len => line.push(byte),
            _ => discarded += 1,
        }
    }
    if discarded > 0 {
        tracing::warn!(max_len, discarded, "command line too long, tail discarded");
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}
