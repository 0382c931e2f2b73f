use crate::{Error, Result};

/// A FIFO queue over a ring buffer that doubles when full
///
/// Head and tail positions are derived from two monotonically increasing
/// counters (`pushed`, `popped`) taken modulo the capacity. The counters are
/// the source of truth for size and emptiness; only `clear` resets them.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    /// Ring storage; `None` marks a free cell
    buffer: Vec<Option<T>>,

    /// Total number of pushes since the last clear
    pushed: usize,

    /// Total number of pops since the last clear
    popped: usize,
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        CircularQueue {
            buffer: Vec::new(),
            pushed: 0,
            popped: 0,
        }
    }
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with no backing storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue able to hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut queue = CircularQueue::new();
        queue.buffer = Self::allocate(capacity)?;
        Ok(queue)
    }

    pub fn len(&self) -> usize {
        self.pushed - self.popped
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` at the tail, growing to `max(1, 2 * capacity)` first
    /// when the ring is full
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.len() == self.capacity() {
            let new_capacity = self
                .capacity()
                .checked_mul(2)
                .ok_or(Error::Allocation { requested: usize::MAX })?
                .max(1);
            self.grow(new_capacity)?;
        }

        let tail = self.pushed % self.capacity();
        self.buffer[tail] = Some(value);
        self.pushed += 1;
        Ok(())
    }

    /// Removes and returns the head element; popping an empty queue is a no-op
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let head = self.head();
        self.popped += 1;
        self.buffer[head].take()
    }

    /// The oldest element
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyAccess("queue"));
        }
        self.buffer[self.head()]
            .as_ref()
            .ok_or(Error::EmptyAccess("queue"))
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::EmptyAccess("queue"));
        }
        let head = self.head();
        self.buffer[head]
            .as_mut()
            .ok_or(Error::EmptyAccess("queue"))
    }

    /// The newest element
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyAccess("queue"));
        }
        self.buffer[self.tail()]
            .as_ref()
            .ok_or(Error::EmptyAccess("queue"))
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::EmptyAccess("queue"));
        }
        let tail = self.tail();
        self.buffer[tail]
            .as_mut()
            .ok_or(Error::EmptyAccess("queue"))
    }

    /// Drops every element and resets both counters; storage is kept
    pub fn clear(&mut self) {
        for cell in self.buffer.iter_mut() {
            *cell = None;
        }
        self.pushed = 0;
        self.popped = 0;
    }

    /// Iterates from the head (oldest) to the tail (newest)
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (self.popped..self.pushed)
            .filter_map(move |counter| self.buffer[counter % capacity].as_ref())
    }

    fn head(&self) -> usize {
        self.popped % self.capacity()
    }

    fn tail(&self) -> usize {
        (self.pushed - 1) % self.capacity()
    }

    /// Moves the live elements into a fresh ring of `new_capacity` cells,
    /// laid out contiguously from counter 0
    fn grow(&mut self, new_capacity: usize) -> Result<()> {
        let mut buffer = Self::allocate(new_capacity)?;
        let live = self.len();

        for (slot, counter) in (self.popped..self.pushed).enumerate() {
            let from = counter % self.capacity();
            buffer[slot] = self.buffer[from].take();
        }

        self.buffer = buffer;
        self.popped = 0;
        self.pushed = live;
        Ok(())
    }

    fn allocate(capacity: usize) -> Result<Vec<Option<T>>> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Allocation { requested: capacity })?;
        buffer.resize_with(capacity, || None);
        Ok(buffer)
    }
}
