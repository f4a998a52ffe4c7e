use std::fmt;

/// Errors produced by ring buffer construction
///
/// All other operations are total: an empty buffer is a normal state for a
/// consumer that races ahead of the producer, so reads model "nothing there"
/// as `None` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested capacity is zero
    InvalidCapacity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity => write!(f, "ring buffer capacity must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

/// Fixed-capacity circular buffer with drop-oldest overwrite semantics
///
/// - Independent read and write cursors, wrapping modulo capacity
/// - `push` always succeeds; when full, the oldest unread element is discarded
/// - `next` consumes one element, `next_block` consumes a contiguous run
///   bounded by the physical end of storage
///
/// Not synchronized; `&mut self` mutators assume single-threaded use. An
/// embedding that shares the buffer across threads must serialize access
/// externally.
///
/// # Invariants
/// - `read_pos < capacity` and `write_pos < capacity` at all times
/// - `count <= capacity`; the `count` valid elements occupy the cyclic range
///   starting at `read_pos`
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    storage: Vec<T>,
    capacity: usize,
    read_pos: usize,
    write_pos: usize,
    count: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Create a ring buffer with `capacity` slots
    ///
    /// Slots are prefilled with `T::default()`; validity is tracked by the
    /// cursors, never by a sentinel value.
    ///
    /// # Returns
    /// * `Ok(RingBuffer)` on success
    /// * `Err(Error::InvalidCapacity)` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            storage: vec![T::default(); capacity],
            capacity,
            read_pos: 0,
            write_pos: 0,
            count: 0,
        })
    }

    /// Push a single value
    ///
    /// Writes at the write cursor and advances it. If the buffer was full,
    /// the read cursor advances too: the oldest unread element is silently
    /// discarded and `len()` stays at capacity. Never fails, never blocks.
    pub fn push(&mut self, value: T) {
        self.storage[self.write_pos] = value;
        self.write_pos = (self.write_pos + 1) % self.capacity;
        if self.count == self.capacity {
            // full: overwrite claimed the oldest unread slot
            self.read_pos = (self.read_pos + 1) % self.capacity;
        } else {
            self.count += 1;
        }
    }

    /// Push a block of values, oldest-first
    ///
    /// Equivalent to calling [`push`](Self::push) for each element in order;
    /// the same drop-oldest policy applies, so a block longer than the
    /// capacity leaves only its last `capacity` elements retrievable.
    pub fn push_block(&mut self, block: &[T]) {
        for &value in block {
            self.push(value);
        }
    }

    /// Consume and return the oldest element, or `None` if the buffer is empty
    pub fn next(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let out = self.storage[self.read_pos];
        self.read_pos = (self.read_pos + 1) % self.capacity;
        self.count -= 1;
        Some(out)
    }

    /// Consume a contiguous run of elements starting at the read cursor
    ///
    /// Returns `None` if the buffer is empty; otherwise a non-empty copy of
    /// `min(len, capacity - read_pos)` elements. The run never wraps past
    /// the physical end of storage, so draining a wrapped buffer takes at
    /// most two calls.
    pub fn next_block(&mut self) -> Option<Vec<T>> {
        if self.count == 0 {
            return None;
        }
        let run = self.count.min(self.capacity - self.read_pos);
        let block = self.storage[self.read_pos..self.read_pos + run].to_vec();
        self.read_pos = (self.read_pos + run) % self.capacity;
        self.count -= run;
        Some(block)
    }

    /// Peek at the physical slot `index`, or `None` if out of bounds
    ///
    /// Reads the backing storage directly regardless of which slots hold
    /// unread data; the cursors do not move. Intended for debugging and
    /// visualization of the raw buffer contents.
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.capacity {
            return None;
        }
        Some(self.storage[index])
    }

    /// Current read cursor, always in `[0, capacity)`
    pub fn read_pos(&self) -> usize {
        self.read_pos
    }

    /// Current write cursor, always in `[0, capacity)`
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Number of valid unread elements
    pub fn len(&self) -> usize {
        self.count
    }

    /// True if no unread elements are available
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True if the next push will overwrite the oldest unread element
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Total number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
