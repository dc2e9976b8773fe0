//! Smart speaker: a bounded play queue and a popularity tally.

use std::collections::{HashMap, VecDeque};

use crate::error::{ConsoleError, LookupFailure, ValidationError};

pub const DEFAULT_QUEUE_CAPACITY: usize = 128;

/// Simulated smart speaker.
#[derive(Debug, Clone)]
pub struct Speaker {
    queue: VecDeque<String>,
    votes: HashMap<String, i64>,
    capacity: usize,
}

impl Default for Speaker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }
}

impl Speaker {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            votes: HashMap::new(),
            capacity,
        }
    }

    /// Songs waiting to be played, head first.
    pub fn queued(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Current tally for `song`; songs never reviewed have a tally of 0.
    #[must_use]
    pub fn tally(&self, song: &str) -> i64 {
        self.votes.get(song).copied().unwrap_or_default()
    }

    /// Append `song` to the tail and return the new queue length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::QueueFull`] when the queue is at capacity.
    pub fn enqueue(&mut self, song: impl Into<String>) -> Result<usize, ConsoleError> {
        if self.queue.len() >= self.capacity {
            return Err(ValidationError::QueueFull {
                capacity: self.capacity,
            }
            .into());
        }
        self.queue.push_back(song.into());
        Ok(self.queue.len())
    }

    fn is_queued(&self, song: &str) -> bool {
        self.queue.iter().any(|queued| queued == song)
    }

    /// Remove and return the head of the queue. The song's tally is dropped
    /// once no other copy of it is still queued.
    ///
    /// # Errors
    ///
    /// Returns [`LookupFailure::NothingToPlay`] when the queue is empty.
    pub fn play(&mut self) -> Result<String, ConsoleError> {
        let song = self
            .queue
            .pop_front()
            .ok_or(LookupFailure::NothingToPlay)?;
        if !self.is_queued(&song) {
            self.votes.remove(&song);
        }
        Ok(song)
    }

    /// Add `score` to the tally of a queued `song` and return the new tally.
    ///
    /// # Errors
    ///
    /// Returns [`LookupFailure::NotQueued`] when `song` is not in the queue.
    /// No tally is created in that case.
    pub fn review(&mut self, song: &str, score: i64) -> Result<i64, ConsoleError> {
        if !self.is_queued(song) {
            return Err(LookupFailure::NotQueued(song.to_string()).into());
        }
        let tally = self.votes.entry(song.to_string()).or_default();
        *tally = tally.saturating_add(score);
        Ok(*tally)
    }

    /// Move the song with the highest tally to the head of the queue.
    ///
    /// Songs never reviewed count as a tally of 0, so they beat songs with a
    /// negative tally. Ties go to the song that comes first in the queue.
    /// Returns the song now at the head, or `None` when the queue is empty.
    pub fn promote_popular(&mut self) -> Option<&str> {
        let mut best: Option<(usize, i64)> = None;
        for (idx, song) in self.queue.iter().enumerate() {
            let tally = self.tally(song);
            if best.is_none_or(|(_, top)| tally > top) {
                best = Some((idx, tally));
            }
        }

        let (idx, _) = best?;
        if let Some(song) = self.queue.remove(idx) {
            self.queue.push_front(song);
        }
        self.queue.front().map(String::as_str)
    }
}
