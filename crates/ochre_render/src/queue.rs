//! Work queue of tile indices.
//!
//! The original free-list design allocated one linked-list node per tile;
//! here the queue is a single contiguous deque of indices with the same
//! semantics: FIFO consumption in enqueue order, plus a priority re-enqueue
//! that puts returned work at the front, ahead of untouched tiles.

use std::collections::VecDeque;

/// FIFO queue of unconsumed tile indices.
#[derive(Debug, Default)]
pub struct TileQueue {
    entries: VecDeque<usize>,
}

impl TileQueue {
    /// Create a queue holding the indices `0..tile_count` in order.
    pub fn new(tile_count: usize) -> Self {
        Self {
            entries: (0..tile_count).collect(),
        }
    }

    /// True iff at least one tile index remains unconsumed.
    pub fn has_next(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Remove and return the tile index at the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Callers must check `has_next` first.
    pub fn take_next(&mut self) -> usize {
        match self.entries.pop_front() {
            Some(index) => index,
            None => panic!("take_next called on an empty tile queue"),
        }
    }

    /// Re-enqueue a tile index at the front of the queue.
    ///
    /// Returned work is prioritized ahead of untouched work, so a caller
    /// implementing a retry policy re-renders the failed tile next.
    pub fn put_back(&mut self, tile_index: usize) {
        self.entries.push_front(tile_index);
    }

    /// Number of tile indices remaining.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff no work remains.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
