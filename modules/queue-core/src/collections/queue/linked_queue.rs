#[cfg(test)]
mod tests;

use alloc::collections::{LinkedList, linked_list};

use super::{FifoQueue, QueueError, QueueSize};

/// Unbounded FIFO queue backed by a doubly linked list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedQueue<T> {
  items: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: LinkedList::new() }
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

  /// Appends an element. Never fails.
  pub fn enqueue(&mut self, item: T) {
    self.items.push_back(item);
  }

  /// Removes and returns the oldest element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    self.items.pop_front().ok_or(QueueError::Empty)
  }

  /// Returns the oldest element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn peek(&self) -> Result<&T, QueueError<T>> {
    self.items.front().ok_or(QueueError::Empty)
  }

  /// Checks whether any stored element equals `item`.
  #[must_use]
  pub fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    self.items.contains(item)
  }

  /// Removes and drops every element.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Returns an iterator over the stored elements, oldest first.
  pub fn iter(&self) -> linked_list::Iter<'_, T> {
    self.items.iter()
  }
}

impl<T> FifoQueue<T> for LinkedQueue<T> {
  fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
    LinkedQueue::enqueue(self, item);
    Ok(())
  }

  fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    LinkedQueue::dequeue(self)
  }

  fn peek(&self) -> Result<&T, QueueError<T>> {
    LinkedQueue::peek(self)
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
    LinkedQueue::contains(self, item)
  }

  fn clear(&mut self) {
    LinkedQueue::clear(self);
  }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { items: iter.into_iter().collect() }
  }
}
