//! Message id generation.
//!
//! Ids never come from the wall clock: two messages created within the same
//! clock tick would collide. Instead every conversation draws from an
//! [`IdSource`], which hands out strictly increasing ids.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::message::MessageId;

/// First id handed out to appended messages. Ids below this are reserved for
/// seed messages.
pub const FIRST_DYNAMIC_ID: u64 = 3;

/// Source of fresh message ids.
pub trait IdSource: Send + std::fmt::Debug {
    /// Return an id never returned before by this source.
    fn next_id(&mut self) -> MessageId;
}

static PROCESS_COUNTER: AtomicU64 = AtomicU64::new(FIRST_DYNAMIC_ID);

/// Draws ids from a single process-wide counter.
///
/// Ids are unique across every conversation in the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIds;

impl IdSource for ProcessIds {
    fn next_id(&mut self) -> MessageId {
        MessageId(PROCESS_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Per-owner counter, deterministic from a known start.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start counting at [`FIRST_DYNAMIC_ID`].
    pub fn new() -> Self {
        Self::starting_at(FIRST_DYNAMIC_ID)
    }

    /// Start counting at `first`, never below [`FIRST_DYNAMIC_ID`].
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first.max(FIRST_DYNAMIC_ID),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next);
        self.next += 1;
        id
    }
}
