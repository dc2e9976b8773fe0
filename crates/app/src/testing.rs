//! In-memory transport for unit tests.

use std::collections::VecDeque;

use crate::ports::{Transport, TransportError};

/// Replays a fixed input and records everything written.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    input: VecDeque<u8>,
    pub output: Vec<u8>,
    pub flushes: usize,
}

impl ScriptedTransport {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl Transport for ScriptedTransport {
    async fn read_byte(&mut self) -> Result<u8, TransportError> {
        self.input.pop_front().ok_or(TransportError::Closed)
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), TransportError> {
        self.flushes += 1;
        Ok(())
    }
}
