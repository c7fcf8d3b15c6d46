//! Bounded trace of past tip ordinates.

use std::collections::VecDeque;

/// Number of samples kept for the visible trace.
pub const HISTORY_CAPACITY: usize = 200;

/// Append-only ring of wave samples. Stored oldest-first; read back
/// newest-first through [`WaveHistory::recent`].
#[derive(Clone, Debug)]
pub struct WaveHistory {
    samples: VecDeque<f64>,
}

impl Default for WaveHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Push `value` as the newest sample, dropping the oldest once full.
    pub fn append(&mut self, value: f64) {
        self.samples.push_back(value);
        if self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    /// The most recent `limit` samples, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().rev().take(limit).copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_is_newest_first() {
        let mut h = WaveHistory::new();
        for v in [1.0, 2.0, 3.0] {
            h.append(v);
        }
        let got: Vec<f64> = h.recent(2).collect();
        assert_eq!(got, vec![3.0, 2.0]);
        assert_eq!(h.latest(), Some(3.0));
    }

    #[test]
    fn oldest_dropped_at_capacity() {
        let mut h = WaveHistory::new();
        for i in 0..(HISTORY_CAPACITY + 1) {
            h.append(i as f64);
        }
        assert_eq!(h.len(), HISTORY_CAPACITY);
        assert_eq!(h.recent(HISTORY_CAPACITY).last(), Some(1.0));
    }
}
