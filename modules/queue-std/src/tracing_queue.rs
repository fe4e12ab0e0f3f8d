//! `tracing`-backed decorator for any [`FifoQueue`].


use core::any::type_name;

use fifo_queue_core_rs::{FifoQueue, QueueError, QueueSize};
use tracing::{Level, event};

/// Target name used by every event [`TracingQueue`] emits.
pub const QUEUE_EVENT_TARGET: &str = "fifo_queue::queue";

/// Queue decorator that reports operations to the `tracing` crate.
///
/// Successful enqueues and dequeues are logged at `TRACE`, rejected enqueues at `WARN`, and reads
/// from an empty queue as well as clears at `DEBUG`. The wrapped queue's semantics are unchanged.
#[derive(Debug, Clone, Default)]
pub struct TracingQueue<Q> {
  inner: Q,
}

impl<Q> TracingQueue<Q> {
  /// Default target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = QUEUE_EVENT_TARGET;

  /// Wraps `queue`.
  #[must_use]
  pub const fn new(queue: Q) -> Self {
    Self { inner: queue }
  }

  /// Returns the wrapped queue.
  #[must_use]
  pub const fn inner(&self) -> &Q {
    &self.inner
  }

  /// Unwraps the queue.
  #[must_use]
  pub fn into_inner(self) -> Q {
    self.inner
  }
}

impl<T, Q> FifoQueue<T> for TracingQueue<Q>
where
  Q: FifoQueue<T>,
{
  fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
    match self.inner.enqueue(item) {
      | Ok(()) => {
        event!(
          target: QUEUE_EVENT_TARGET,
          Level::TRACE,
          element = type_name::<T>(),
          len = self.inner.len(),
          capacity = ?self.inner.capacity(),
          "enqueued"
        );
        Ok(())
      },
      | Err(err) => {
        event!(
          target: QUEUE_EVENT_TARGET,
          Level::WARN,
          element = type_name::<T>(),
          len = self.inner.len(),
          capacity = ?self.inner.capacity(),
          "enqueue rejected: {}",
          err
        );
        Err(err)
      },
    }
  }

  fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    let result = self.inner.dequeue();
    match &result {
      | Ok(_) => event!(
        target: QUEUE_EVENT_TARGET,
        Level::TRACE,
        element = type_name::<T>(),
        len = self.inner.len(),
        capacity = ?self.inner.capacity(),
        "dequeued"
      ),
      | Err(err) => event!(
        target: QUEUE_EVENT_TARGET,
        Level::DEBUG,
        element = type_name::<T>(),
        "dequeue failed: {}",
        err
      ),
    }
    result
  }

  fn peek(&self) -> Result<&T, QueueError<T>> {
    let result = self.inner.peek();
    if let Err(err) = &result {
      event!(target: QUEUE_EVENT_TARGET, Level::DEBUG, element = type_name::<T>(), "peek failed: {}", err);
    }
    result
  }

  fn len(&self) -> usize {
    self.inner.len()
  }

  fn capacity(&self) -> QueueSize {
    self.inner.capacity()
  }

  fn is_full(&self) -> bool {
    self.inner.is_full()
  }

  fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    self.inner.contains(item)
  }

  fn clear(&mut self) {
    let dropped = self.inner.len();
    self.inner.clear();
    event!(target: QUEUE_EVENT_TARGET, Level::DEBUG, element = type_name::<T>(), dropped = dropped, "cleared");
  }
}
