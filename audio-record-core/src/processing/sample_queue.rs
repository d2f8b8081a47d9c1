use std::collections::VecDeque;

/// Bounded FIFO of float samples.
///
/// Overflow drops the oldest samples. Wrap in `parking_lot::Mutex` for
/// cross-thread access.
#[derive(Debug, Clone)]
pub struct SampleQueue {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl SampleQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append samples, keeping at most `capacity` of the newest.
    ///
    /// Returns how many queued samples were dropped to make room.
    pub fn push(&mut self, samples: &[f32]) -> usize {
        if self.capacity == 0 {
            return samples.len();
        }

        let tail = if samples.len() > self.capacity {
            &samples[samples.len() - self.capacity..]
        } else {
            samples
        };

        let overflow = (self.samples.len() + tail.len()).saturating_sub(self.capacity);
        self.samples.drain(..overflow);
        self.samples.extend(tail.iter().copied());
        overflow + (samples.len() - tail.len())
    }

    /// Move up to `dst.len()` samples into `dst`, oldest first.
    pub fn drain_into(&mut self, dst: &mut [f32]) -> usize {
        let count = dst.len().min(self.samples.len());
        for (slot, sample) in dst.iter_mut().zip(self.samples.drain(..count)) {
            *slot = sample;
        }
        count
    }

    /// Remove and return up to `count` samples.
    pub fn pop(&mut self, count: usize) -> Vec<f32> {
        let count = count.min(self.samples.len());
        self.samples.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_pop() {
        let mut queue = SampleQueue::new(10);
        assert_eq!(queue.push(&[1.0, 2.0, 3.0]), 0);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(2), vec![1.0, 2.0]);
        assert_eq!(queue.pop(10), vec![3.0]);
        assert!(queue.is_empty());
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut queue = SampleQueue::new(4);
        queue.push(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(queue.push(&[5.0, 6.0]), 2);
        assert_eq!(queue.pop(4), vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn push_larger_than_capacity_keeps_tail() {
        let mut queue = SampleQueue::new(3);
        queue.push(&[9.0]);
        assert_eq!(queue.push(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3);
        assert_eq!(queue.pop(3), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn drain_into_partial_slice() {
        let mut queue = SampleQueue::new(8);
        queue.push(&[0.1, 0.2]);

        let mut dst = [0.0f32; 4];
        assert_eq!(queue.drain_into(&mut dst), 2);
        assert_eq!(dst, [0.1, 0.2, 0.0, 0.0]);
        assert_eq!(queue.drain_into(&mut dst), 0);
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut queue = SampleQueue::new(0);
        assert_eq!(queue.push(&[1.0]), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue = SampleQueue::new(4);
        queue.push(&[1.0, 2.0]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 4);
    }
}
