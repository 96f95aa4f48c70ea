// SPDX-License-Identifier: GPL-2.0

//! FIFO worklist of pending program values.
//!
//! Order affects convergence speed, not correctness: reprocessing a
//! stable value is a no-op. A FIFO queue gives predictable breadth-first
//! propagation along use-def chains. Membership is deduplicated with a
//! bit per value to bound the amount of queued work; a value can always
//! be pushed again after it has been popped.

use crate::ir::function::ValueId;
use crate::stdlib::{vec, Vec, VecDeque};

/// Pending-value queue for one analysis run.
#[derive(Debug, Clone)]
pub struct Worklist {
    queue: VecDeque<ValueId>,
    pending: Vec<bool>,
    peak_len: usize,
}

impl Worklist {
    /// Create a worklist sized for `value_count` program values.
    pub fn new(value_count: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            pending: vec![false; value_count],
            peak_len: 0,
        }
    }

    /// Push a value unless it is already pending.
    ///
    /// Returns whether the value was actually enqueued.
    pub fn push(&mut self, id: ValueId) -> bool {
        if self.pending[id.index()] {
            return false;
        }
        self.pending[id.index()] = true;
        self.queue.push_back(id);
        if self.queue.len() > self.peak_len {
            self.peak_len = self.queue.len();
        }
        true
    }

    /// Pop the oldest pending value.
    pub fn pop(&mut self) -> Option<ValueId> {
        let id = self.queue.pop_front()?;
        self.pending[id.index()] = false;
        Some(id)
    }

    /// Whether a value is currently pending.
    pub fn is_pending(&self, id: ValueId) -> bool {
        self.pending[id.index()]
    }

    /// Whether the worklist is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of pending values.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Largest queue length observed so far.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut wl = Worklist::new(4);
        assert!(wl.push(ValueId::new(2)));
        assert!(wl.push(ValueId::new(0)));
        assert!(wl.push(ValueId::new(3)));
        assert_eq!(wl.pop(), Some(ValueId::new(2)));
        assert_eq!(wl.pop(), Some(ValueId::new(0)));
        assert_eq!(wl.pop(), Some(ValueId::new(3)));
        assert_eq!(wl.pop(), None);
    }

    #[test]
    fn test_dedup_while_pending() {
        let mut wl = Worklist::new(2);
        assert!(wl.push(ValueId::new(1)));
        assert!(!wl.push(ValueId::new(1)));
        assert_eq!(wl.len(), 1);
        assert_eq!(wl.pop(), Some(ValueId::new(1)));
        // Allowed again once popped.
        assert!(wl.push(ValueId::new(1)));
    }

    #[test]
    fn test_peak_len() {
        let mut wl = Worklist::new(3);
        wl.push(ValueId::new(0));
        wl.push(ValueId::new(1));
        wl.pop();
        wl.push(ValueId::new(2));
        assert_eq!(wl.peak_len(), 2);
    }
}
