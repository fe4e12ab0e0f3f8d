use core::iter::FusedIterator;

use super::CircularQueue;

/// Borrowing iterator over the live elements of a [`CircularQueue`], front to rear.
pub struct Iter<'a, T> {
  queue: &'a CircularQueue<T>,
  head:  usize,
  tail:  usize,
}

impl<'a, T> Iter<'a, T> {
  pub(super) const fn new(queue: &'a CircularQueue<T>) -> Self {
    Self { queue, head: 0, tail: queue.len() }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.head == self.tail {
      return None;
    }
    let item = self.queue.get(self.head);
    self.head += 1;
    item
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.tail - self.head;
    (remaining, Some(remaining))
  }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.head == self.tail {
      return None;
    }
    self.tail -= 1;
    self.queue.get(self.tail)
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
