use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::error::BufferError;

/// Byte buffer view with its own position/limit/mark cursor over shared storage.
///
/// Cursor invariant: `mark <= position <= limit <= capacity`.
///
/// [`duplicate`](Self::duplicate) creates a second view over the same storage.
/// Writes through either view are visible to both; cursor moves are not. The
/// record shim relies on this so a source can consume a buffer without moving
/// the caller's position.
#[derive(Debug)]
pub struct DirectBuffer {
    storage: Arc<Mutex<Vec<u8>>>,
    capacity: usize,
    position: usize,
    limit: usize,
    mark: Option<usize>,
}

impl DirectBuffer {
    /// Zero-filled buffer with `position = 0` and `limit = capacity`.
    pub fn allocate(capacity: usize) -> Self {
        Self::wrap(vec![0; capacity])
    }

    /// Take ownership of `data` as the backing storage.
    pub fn wrap(data: Vec<u8>) -> Self {
        let capacity = data.len();
        Self {
            storage: Arc::new(Mutex::new(data)),
            capacity,
            position: 0,
            limit: capacity,
            mark: None,
        }
    }

    /// New view over the same storage, starting from this view's cursor state.
    pub fn duplicate(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            capacity: self.capacity,
            position: self.position,
            limit: self.limit,
            mark: self.mark,
        }
    }

    /// Whether both views are backed by the same storage.
    pub fn shares_storage_with(&self, other: &DirectBuffer) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes between position and limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Move the position. A mark beyond the new position is discarded.
    pub fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.limit {
            return Err(BufferError::PositionOutOfRange {
                position,
                limit: self.limit,
            });
        }
        if self.mark.is_some_and(|mark| mark > position) {
            self.mark = None;
        }
        self.position = position;
        Ok(())
    }

    /// Move the limit, pulling position and mark back inside it.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), BufferError> {
        if limit > self.capacity {
            return Err(BufferError::LimitOutOfRange {
                limit,
                capacity: self.capacity,
            });
        }
        self.limit = limit;
        if self.position > limit {
            self.position = limit;
        }
        if self.mark.is_some_and(|mark| mark > limit) {
            self.mark = None;
        }
        Ok(())
    }

    /// Advance the position by `count` bytes.
    pub fn advance(&mut self, count: usize) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(BufferError::Underflow {
                requested: count,
                remaining,
            });
        }
        self.position += count;
        Ok(())
    }

    pub fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// Return the position to the last mark.
    pub fn reset(&mut self) -> Result<(), BufferError> {
        let mark = self.mark.ok_or(BufferError::InvalidMark)?;
        self.position = mark;
        Ok(())
    }

    /// Position to 0, limit to capacity, mark discarded. Contents are kept.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity;
        self.mark = None;
    }

    /// Limit to the current position, then position to 0.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
        self.mark = None;
    }

    pub fn rewind(&mut self) {
        self.position = 0;
        self.mark = None;
    }

    /// Relative bulk write at the current position.
    pub fn put(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if bytes.len() > remaining {
            return Err(BufferError::Overflow {
                requested: bytes.len(),
                remaining,
            });
        }
        let start = self.position;
        self.storage.lock()[start..start + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
        Ok(())
    }

    /// Relative bulk read from the current position.
    pub fn get(&mut self, dst: &mut [u8]) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if dst.len() > remaining {
            return Err(BufferError::Underflow {
                requested: dst.len(),
                remaining,
            });
        }
        let start = self.position;
        dst.copy_from_slice(&self.storage.lock()[start..start + dst.len()]);
        self.position += dst.len();
        Ok(())
    }

    /// Absolute read of one byte, ignoring the cursor.
    pub fn get_at(&self, index: usize) -> Option<u8> {
        if index >= self.limit {
            return None;
        }
        self.storage.lock().get(index).copied()
    }

    /// Copy of the whole backing storage, regardless of cursor state.
    pub fn to_vec(&self) -> Vec<u8> {
        self.storage.lock().clone()
    }
}
