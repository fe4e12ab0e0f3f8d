use core::iter::FusedIterator;

use super::CircularQueue;

/// Draining iterator returned by [`CircularQueue::drain`].
///
/// Dropping it clears whatever the caller did not consume.
pub struct Drain<'a, T> {
  queue: &'a mut CircularQueue<T>,
}

impl<'a, T> Drain<'a, T> {
  pub(super) const fn new(queue: &'a mut CircularQueue<T>) -> Self {
    Self { queue }
  }
}

impl<T> Iterator for Drain<'_, T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.dequeue().ok()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.queue.len();
    (remaining, Some(remaining))
  }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
  fn drop(&mut self) {
    self.queue.clear();
  }
}
