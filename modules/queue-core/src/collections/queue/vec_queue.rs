
use alloc::vec::Vec;

use super::{FifoQueue, QueueError, QueueSize};

/// Unbounded FIFO queue backed by a growable array.
///
/// Enqueue pushes onto the end of the vector; dequeue removes index zero and shifts the remaining
/// elements forward, so it costs O(n).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecQueue<T> {
  items: Vec<T>,
}

impl<T> VecQueue<T> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new() }
  }

  /// Creates an empty queue with room for `capacity` elements before reallocating.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { items: Vec::with_capacity(capacity) }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the queue holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Appends an element. Never fails; the backing vector grows as needed.
  pub fn enqueue(&mut self, item: T) {
    self.items.push(item);
  }

  /// Removes and returns the oldest element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    if self.items.is_empty() {
      return Err(QueueError::Empty);
    }
    Ok(self.items.remove(0))
  }

  /// Returns the oldest element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn peek(&self) -> Result<&T, QueueError<T>> {
    self.items.first().ok_or(QueueError::Empty)
  }

  /// Checks whether any stored element equals `item`.
  #[must_use]
  pub fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    self.items.contains(item)
  }

  /// Removes and drops every element, keeping the allocation.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Returns the stored elements as a slice, oldest first.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.items
  }
}

impl<T> FifoQueue<T> for VecQueue<T> {
  fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
    VecQueue::enqueue(self, item);
    Ok(())
  }

  fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    VecQueue::dequeue(self)
  }

  fn peek(&self) -> Result<&T, QueueError<T>> {
    VecQueue::peek(self)
  }

  fn len(&self) -> usize {
    self.items.len()
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limitless()
  }

  fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    VecQueue::contains(self, item)
  }

  fn clear(&mut self) {
    VecQueue::clear(self);
  }
}

impl<T> From<Vec<T>> for VecQueue<T> {
  fn from(items: Vec<T>) -> Self {
    Self { items }
  }
}

impl<T> FromIterator<T> for VecQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { items: iter.into_iter().collect() }
  }
}
