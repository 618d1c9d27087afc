// SPDX-License-Identifier: MPL-2.0
//! Bounded event storage.
//!
//! Diagnostics must never grow without limit on a long-lived board, so
//! events land in a fixed-capacity ring: once full, each push evicts
//! the oldest entry.

use std::collections::VecDeque;

/// Minimum accepted buffer capacity.
pub const MIN_BUFFER_CAPACITY: usize = 10;

/// Maximum accepted buffer capacity.
pub const MAX_BUFFER_CAPACITY: usize = 10_000;

/// Default buffer capacity.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1000;

/// Capacity for the diagnostic event buffer, clamped to sane bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_BUFFER_CAPACITY, MAX_BUFFER_CAPACITY))
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_BUFFER_CAPACITY)
    }
}

/// Fixed-capacity ring buffer, oldest entries first.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Builds a buffer from an unclamped capacity. Tests use this to
    /// get capacities below [`MIN_BUFFER_CAPACITY`]; zero is bumped to 1.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one when full.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Entries in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
