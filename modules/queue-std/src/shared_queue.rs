
use core::marker::PhantomData;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fifo_queue_core_rs::{FifoQueue, QueueError, QueueSize};

/// Mutex-guarded wrapper that lets several threads drive one queue through `&self`.
///
/// Each method locks for the duration of a single queue operation. A check-then-act sequence such
/// as "enqueue unless full" is not atomic unless it runs inside [`with_lock`](Self::with_lock).
///
/// A poisoned lock is recovered rather than reported. Queue operations finish their bookkeeping
/// before an element destructor can run, so the guarded queue is always consistent.
pub struct SharedQueue<T, Q> {
  inner: Mutex<Q>,
  _pd:   PhantomData<fn(T) -> T>,
}

impl<T, Q> SharedQueue<T, Q>
where
  Q: FifoQueue<T>,
{
  /// Wraps `queue` for shared use.
  #[must_use]
  pub const fn new(queue: Q) -> Self {
    Self { inner: Mutex::new(queue), _pd: PhantomData }
  }

  /// Appends an element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying `item` back when the queue is full.
  pub fn enqueue(&self, item: T) -> Result<(), QueueError<T>> {
    self.lock().enqueue(item)
  }

  /// Removes and returns the oldest element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn dequeue(&self) -> Result<T, QueueError<T>> {
    self.lock().dequeue()
  }

  /// Returns a clone of the oldest element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn peek_cloned(&self) -> Result<T, QueueError<T>>
  where
    T: Clone, {
    self.lock().peek().cloned()
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.lock().len()
  }

  /// Indicates whether the queue holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// Indicates whether the next enqueue would be rejected.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.lock().is_full()
  }

  /// Returns the capacity limit of the wrapped queue.
  #[must_use]
  pub fn capacity(&self) -> QueueSize {
    self.lock().capacity()
  }

  /// Checks whether any stored element equals `item`.
  #[must_use]
  pub fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    self.lock().contains(item)
  }

  /// Removes and drops every stored element.
  pub fn clear(&self) {
    self.lock().clear();
  }

  /// Runs `f` with exclusive access to the wrapped queue.
  pub fn with_lock<R>(&self, f: impl FnOnce(&mut Q) -> R) -> R {
    let mut guard = self.lock();
    f(&mut guard)
  }

  /// Unwraps the queue.
  #[must_use]
  pub fn into_inner(self) -> Q {
    self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  fn lock(&self) -> MutexGuard<'_, Q> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T, Q> From<Q> for SharedQueue<T, Q>
where
  Q: FifoQueue<T>,
{
  fn from(queue: Q) -> Self {
    Self::new(queue)
  }
}
