//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Fixed-capacity byte ring buffer.
//!
//! A [`RingBuffer`] is a bounded FIFO byte queue used to hold application
//! bytes that are waiting to be fanned out to, or merged from, a telnet
//! session. All operations are all-or-nothing: a `put`, `get`, or `transfer`
//! either moves exactly the requested number of bytes or leaves every
//! buffer involved completely unchanged.
//!
//! # Example
//!
//! ```
//! use gateway_ringbuf::RingBuffer;
//!
//! let mut ring = RingBuffer::new(8).unwrap();
//! ring.put(b"abc").unwrap();
//! assert_eq!(ring.bytes_used(), 3);
//!
//! let mut out = [0u8; 3];
//! ring.get(&mut out).unwrap();
//! assert_eq!(&out, b"abc");
//! assert_eq!(ring.bytes_used(), 0);
//! ```

use thiserror::Error;

/// Errors produced by [`RingBuffer`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    /// `new` was asked to allocate a zero-capacity buffer.
    #[error("ring buffer capacity must be greater than zero")]
    ZeroCapacity,

    /// A `put`, `get`, or `transfer` would not fit: fewer bytes are
    /// available (or free) than the operation requires. The buffer(s)
    /// involved are left unchanged.
    #[error("ring buffer operation would not fit (requested {requested}, available {available})")]
    WouldNotFit {
        /// Number of bytes the operation tried to move.
        requested: usize,
        /// Number of bytes actually available (free space for `put`, used
        /// bytes for `get`/as the source side of `transfer`).
        available: usize,
    },
}

/// A fixed-capacity byte FIFO.
///
/// `capacity` is set at construction and never changes. `used + free ==
/// capacity` always holds. The buffer is not `Send`/`Sync` by design — the
/// gateway core is single-threaded and a `RingBuffer` is always owned
/// exclusively by one session or one server.
#[derive(Debug)]
pub struct RingBuffer {
    storage: Box<[u8]>,
    head: usize,
    tail: usize,
    used: usize,
}

impl RingBuffer {
    /// Allocate a new ring buffer with the given capacity in bytes.
    ///
    /// Fails if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }
        Ok(Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            used: 0,
        })
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of bytes currently queued.
    pub fn bytes_used(&self) -> usize {
        self.used
    }

    /// Number of bytes that can still be `put` without overflowing.
    pub fn bytes_free(&self) -> usize {
        self.capacity() - self.used
    }

    /// `true` when no bytes are queued.
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Append `src` to the buffer.
    ///
    /// Fails with [`RingBufferError::WouldNotFit`] when `src.len() >
    /// bytes_free()`; on failure the buffer is left unchanged.
    pub fn put(&mut self, src: &[u8]) -> Result<(), RingBufferError> {
        let free = self.bytes_free();
        if src.len() > free {
            return Err(RingBufferError::WouldNotFit {
                requested: src.len(),
                available: free,
            });
        }
        let capacity = self.capacity();
        let first = capacity - self.head;
        if src.len() <= first {
            self.storage[self.head..self.head + src.len()].copy_from_slice(src);
        } else {
            self.storage[self.head..capacity].copy_from_slice(&src[..first]);
            self.storage[..src.len() - first].copy_from_slice(&src[first..]);
        }
        self.head = (self.head + src.len()) % capacity;
        self.used += src.len();
        Ok(())
    }

    /// Consume exactly `dst.len()` bytes from the front of the buffer into
    /// `dst`.
    ///
    /// Fails with [`RingBufferError::WouldNotFit`] when `dst.len() >
    /// bytes_used()`; on failure the buffer is left unchanged.
    pub fn get(&mut self, dst: &mut [u8]) -> Result<(), RingBufferError> {
        if dst.len() > self.used {
            return Err(RingBufferError::WouldNotFit {
                requested: dst.len(),
                available: self.used,
            });
        }
        let capacity = self.capacity();
        let first = capacity - self.tail;
        if dst.len() <= first {
            dst.copy_from_slice(&self.storage[self.tail..self.tail + dst.len()]);
        } else {
            dst[..first].copy_from_slice(&self.storage[self.tail..capacity]);
            dst[first..].copy_from_slice(&self.storage[..dst.len() - first]);
        }
        self.tail = (self.tail + dst.len()) % capacity;
        self.used -= dst.len();
        Ok(())
    }

    /// Move exactly `n` bytes from `src` into `dst`.
    ///
    /// Fails when `src` has fewer than `n` bytes queued or `dst` has fewer
    /// than `n` free; on failure neither buffer is mutated.
    pub fn transfer(dst: &mut RingBuffer, src: &mut RingBuffer, n: usize) -> Result<(), RingBufferError> {
        if n > src.used {
            return Err(RingBufferError::WouldNotFit {
                requested: n,
                available: src.used,
            });
        }
        if n > dst.bytes_free() {
            return Err(RingBufferError::WouldNotFit {
                requested: n,
                available: dst.bytes_free(),
            });
        }
        let mut staging = vec![0u8; n];
        src.get(&mut staging)
            .expect("bounds already verified above");
        dst.put(&staging).expect("bounds already verified above");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_capacity() {
        assert_eq!(RingBuffer::new(0), Err(RingBufferError::ZeroCapacity));
    }

    #[test]
    fn put_then_get_round_trips() {
        let mut ring = RingBuffer::new(16).unwrap();
        ring.put(b"hello").unwrap();
        assert_eq!(ring.bytes_used(), 5);
        assert_eq!(ring.bytes_free(), 11);

        let mut out = [0u8; 5];
        ring.get(&mut out).unwrap();
        assert_eq!(&out, b"hello");
        assert!(ring.is_empty());
    }

    #[test]
    fn put_past_capacity_is_a_no_op() {
        let mut ring = RingBuffer::new(4).unwrap();
        let err = ring.put(b"abcde").unwrap_err();
        assert_eq!(
            err,
            RingBufferError::WouldNotFit {
                requested: 5,
                available: 4
            }
        );
        assert_eq!(ring.bytes_used(), 0);
    }

    #[test]
    fn get_past_used_is_a_no_op() {
        let mut ring = RingBuffer::new(4).unwrap();
        ring.put(b"ab").unwrap();
        let mut out = [0u8; 3];
        let err = ring.get(&mut out).unwrap_err();
        assert_eq!(
            err,
            RingBufferError::WouldNotFit {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(ring.bytes_used(), 2);
    }

    #[test]
    fn wraps_around_the_backing_storage() {
        let mut ring = RingBuffer::new(4).unwrap();
        ring.put(b"ab").unwrap();
        let mut out = [0u8; 2];
        ring.get(&mut out).unwrap();
        ring.put(b"cdef").unwrap();
        let mut out = [0u8; 4];
        ring.get(&mut out).unwrap();
        assert_eq!(&out, b"cdef");
    }

    #[test]
    fn transfer_moves_bytes_between_two_rings() {
        let mut src = RingBuffer::new(8).unwrap();
        let mut dst = RingBuffer::new(8).unwrap();
        src.put(b"xyz").unwrap();

        RingBuffer::transfer(&mut dst, &mut src, 3).unwrap();

        assert_eq!(src.bytes_used(), 0);
        assert_eq!(dst.bytes_used(), 3);
        let mut out = [0u8; 3];
        dst.get(&mut out).unwrap();
        assert_eq!(&out, b"xyz");
    }

    #[test]
    fn transfer_leaves_both_rings_untouched_on_failure() {
        let mut src = RingBuffer::new(8).unwrap();
        let mut dst = RingBuffer::new(2).unwrap();
        src.put(b"xyz").unwrap();

        let err = RingBuffer::transfer(&mut dst, &mut src, 3).unwrap_err();
        assert_eq!(
            err,
            RingBufferError::WouldNotFit {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(src.bytes_used(), 3);
        assert_eq!(dst.bytes_used(), 0);
    }
}
