//! Fixed-capacity scratch buffer behind the alarm self-test.
//!
//! The buffer owns `capacity` bytes of payload followed by [`GUARD_LEN`]
//! guard bytes initialised to [`GUARD_BYTE`]. Writes go through
//! [`TestBuffer::write`], whose behaviour on oversized input is chosen by an
//! [`OverflowPolicy`]. Only [`OverflowPolicy::UncheckedCompat`] ever writes
//! into the guard region, which makes the historical overrun observable
//! without leaving the allocation.

use serde::Deserialize;

use crate::error::CapacityViolation;

/// Number of guard bytes placed right after the payload.
pub const GUARD_LEN: usize = 8;

/// Sentinel value the guard bytes start with.
pub const GUARD_BYTE: u8 = 0xA5;

/// What to do with a write longer than the buffer capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Refuse the write and leave the buffer unchanged.
    #[default]
    Reject,
    /// Keep the first `capacity` bytes.
    Truncate,
    /// Copy byte by byte without a capacity check, spilling into the guard
    /// region. For compatibility testing against the historical defect only.
    UncheckedCompat,
}

/// Result of a successful [`TestBuffer::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Everything fit.
    Stored,
    /// `dropped` trailing bytes were discarded.
    Truncated { dropped: usize },
    /// `spilled` bytes landed in the guard region and `lost` bytes past the
    /// guard region were discarded.
    Overran { spilled: usize, lost: usize },
}

#[derive(Debug, Clone)]
pub struct TestBuffer {
    storage: Vec<u8>,
    capacity: usize,
    len: usize,
    policy: OverflowPolicy,
}

impl TestBuffer {
    /// Create a buffer sized to `pattern` and holding it.
    #[must_use]
    pub fn with_pattern(pattern: &[u8], policy: OverflowPolicy) -> Self {
        let capacity = pattern.len();
        let mut storage = vec![GUARD_BYTE; capacity + GUARD_LEN];
        storage[..capacity].copy_from_slice(pattern);
        Self {
            storage,
            capacity,
            len: capacity,
            policy,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// The current payload.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// The guard bytes that follow the payload.
    #[must_use]
    pub fn guard(&self) -> &[u8] {
        &self.storage[self.capacity..]
    }

    #[must_use]
    pub fn guard_intact(&self) -> bool {
        self.guard().iter().all(|&b| b == GUARD_BYTE)
    }

    /// Replace the payload with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityViolation`] when `bytes` is longer than the capacity
    /// and the policy is [`OverflowPolicy::Reject`]. The buffer is unchanged.
    pub fn write(&mut self, bytes: &[u8]) -> Result<WriteOutcome, CapacityViolation> {
        if bytes.len() <= self.capacity {
            self.storage[..bytes.len()].copy_from_slice(bytes);
            self.len = bytes.len();
            return Ok(WriteOutcome::Stored);
        }

        match self.policy {
            OverflowPolicy::Reject => Err(CapacityViolation {
                attempted: bytes.len(),
                capacity: self.capacity,
            }),
            OverflowPolicy::Truncate => {
                self.storage[..self.capacity].copy_from_slice(&bytes[..self.capacity]);
                self.len = self.capacity;
                Ok(WriteOutcome::Truncated {
                    dropped: bytes.len() - self.capacity,
                })
            }
            OverflowPolicy::UncheckedCompat => {
                let written = bytes.len().min(self.storage.len());
                self.storage[..written].copy_from_slice(&bytes[..written]);
                self.len = self.capacity;
                Ok(WriteOutcome::Overran {
                    spilled: written - self.capacity,
                    lost: bytes.len() - written,
                })
            }
        }
    }

    /// The payload repeated `count` times.
    #[must_use]
    pub fn repeat(&self, count: usize) -> Vec<u8> {
        self.contents().repeat(count)
    }
}
