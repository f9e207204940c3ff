//! Min-priority frontier for best-first search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::domain::PortId;

/// A frontier entry: a port reached at `cost`, ordered by `priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub priority: u64,
    pub port: PortId,
    pub cost: u64,
}

/// Binary min-heap of ports to expand.
///
/// Entries pop in non-decreasing priority; equal priorities pop in the
/// order they were pushed. A port may be pushed more than once, so the
/// caller skips entries for ports it has already finalized.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<(u64, u64, PortId, u64)>>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a port with its accumulated cost and search priority.
    pub fn push(&mut self, port: PortId, cost: u64, priority: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse((priority, seq, port, cost)));
    }

    /// Remove and return the lowest-priority entry.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap
            .pop()
            .map(|Reverse((priority, _, port, cost))| FrontierEntry {
                priority,
                port,
                cost,
            })
    }

    /// Returns true if there is nothing left to expand.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, including stale ones.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
