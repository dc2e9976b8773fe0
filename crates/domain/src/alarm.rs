//! Alarm: armed flag, four-part disarm code, and the self-test buffer.

use crate::error::{ConsoleError, ValidationError};
use crate::test_buffer::{OverflowPolicy, TestBuffer, WriteOutcome};

/// Pattern the self-test buffer starts with; its length is the capacity.
pub const DEFAULT_TEST_PATTERN: &str = "beepBEEP";

pub const DEFAULT_CODE: [i64; 4] = [1, 3, 3, 7];

pub const DEFAULT_INFO: &str = "OoO Alarm...";

/// Simulated alarm panel.
#[derive(Debug, Clone)]
pub struct Alarm {
    armed: bool,
    code: [i64; 4],
    info: String,
    test_buffer: TestBuffer,
    max_test_repeat: usize,
}

impl Default for Alarm {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Alarm {
    /// Create a builder for constructing an [`Alarm`].
    #[must_use]
    pub fn builder() -> AlarmBuilder {
        AlarmBuilder::default()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Disarm when `attempt` matches the stored code.
    ///
    /// All four components are compared, whatever the first mismatch.
    pub fn disarm(&mut self, attempt: [i64; 4]) -> bool {
        let matches = self
            .code
            .iter()
            .zip(attempt.iter())
            .fold(true, |acc, (stored, given)| acc & (stored == given));
        if matches {
            self.armed = false;
        }
        matches
    }

    #[must_use]
    pub fn info(&self) -> &str {
        &self.info
    }

    #[must_use]
    pub fn test_buffer(&self) -> &TestBuffer {
        &self.test_buffer
    }

    /// Replace the self-test pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Capacity`] when `pattern` exceeds the buffer
    /// and the overflow policy rejects it.
    pub fn set_test_pattern(&mut self, pattern: &[u8]) -> Result<WriteOutcome, ConsoleError> {
        Ok(self.test_buffer.write(pattern)?)
    }

    /// Run the self-test: the pattern repeated `count` times. Negative counts
    /// produce nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RepeatTooLarge`] when `count` exceeds the
    /// configured ceiling.
    pub fn self_test(&self, count: i64) -> Result<Vec<u8>, ConsoleError> {
        let Ok(count) = usize::try_from(count) else {
            return Ok(Vec::new());
        };
        if count > self.max_test_repeat {
            return Err(ValidationError::RepeatTooLarge {
                requested: i64::try_from(count).unwrap_or(i64::MAX),
                max: self.max_test_repeat,
            }
            .into());
        }
        Ok(self.test_buffer.repeat(count))
    }
}

/// Step-by-step builder for [`Alarm`].
#[derive(Debug)]
pub struct AlarmBuilder {
    code: [i64; 4],
    info: String,
    test_pattern: String,
    overflow_policy: OverflowPolicy,
    max_test_repeat: usize,
}

impl Default for AlarmBuilder {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE,
            info: DEFAULT_INFO.to_string(),
            test_pattern: DEFAULT_TEST_PATTERN.to_string(),
            overflow_policy: OverflowPolicy::default(),
            max_test_repeat: 4096,
        }
    }
}

impl AlarmBuilder {
    #[must_use]
    pub fn code(mut self, code: [i64; 4]) -> Self {
        self.code = code;
        self
    }

    #[must_use]
    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    #[must_use]
    pub fn test_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.test_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    #[must_use]
    pub fn max_test_repeat(mut self, max: usize) -> Self {
        self.max_test_repeat = max;
        self
    }

    #[must_use]
    pub fn build(self) -> Alarm {
        Alarm {
            armed: false,
            code: self.code,
            info: self.info,
            test_buffer: TestBuffer::with_pattern(self.test_pattern.as_bytes(), self.overflow_policy),
            max_test_repeat: self.max_test_repeat,
        }
    }
}
