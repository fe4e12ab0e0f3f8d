use super::{QueueError, QueueSize};

/// First-in-first-out queue interface shared by every storage strategy.
///
/// Implementations are single-threaded containers: none of the methods synchronize access, and a
/// sequence of calls is never atomic as a whole.
pub trait FifoQueue<T> {
  /// Appends an element behind the most recently enqueued one.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying `item` back when the queue cannot accept it.
  fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>>;

  /// Removes and returns the oldest element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to remove.
  fn dequeue(&mut self) -> Result<T, QueueError<T>>;

  /// Returns the oldest element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to inspect.
  fn peek(&self) -> Result<&T, QueueError<T>>;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Returns the capacity limit of the queue.
  fn capacity(&self) -> QueueSize;

  /// Indicates whether the queue holds no elements.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the next enqueue would be rejected.
  fn is_full(&self) -> bool {
    self.capacity().is_reached_by(self.len())
  }

  /// Checks whether any stored element equals `item`.
  fn contains(&self, item: &T) -> bool
  where
    T: PartialEq;

  /// Removes and drops every stored element.
  fn clear(&mut self);
}
