//! # samplering - fixed-capacity ring buffer with block reads
//!
//! A circular storage engine for streaming numeric data (audio samples,
//! sensor readings) where the producer must never stall.
//!
//! ## Design
//!
//! - Fixed capacity chosen at construction, never resized
//! - Independent read and write cursors, both wrapping modulo capacity
//! - Drop-oldest overwrite: `push` always succeeds; a full buffer silently
//!   discards its oldest unread element
//! - Two consumption modes: single-element (`next`) and contiguous-block
//!   (`next_block`, which truncates at the physical end of storage)
//! - Single-threaded and non-blocking; callers serialize access externally
//!
//! ## Example
//!
//! ```
//! use samplering::RingBuffer;
//!
//! let mut rb = RingBuffer::new(5).unwrap();
//!
//! // Producer: push never fails.
//! rb.push(1.0);
//! rb.push(2.0);
//! rb.push(3.0);
//!
//! // Consumer: FIFO order, absence (not an error) when drained.
//! assert_eq!(rb.next(), Some(1.0));
//! assert_eq!(rb.next_block(), Some(vec![2.0, 3.0]));
//! assert_eq!(rb.next(), None);
//! ```

#![warn(missing_docs)]

mod ring_buffer;

pub use ring_buffer::{Error, RingBuffer};
