
use alloc::boxed::Box;
use core::{any::type_name, fmt, iter};

use super::{Drain, FifoQueue, Iter, QueueCapacity, QueueError, QueueSize};

/// Fixed-capacity FIFO queue backed by a ring of slots.
///
/// The live elements occupy the `len` slots starting at `front`, wrapping from the last slot back
/// to the first. `rear` always equals `(front + len) % capacity`. Every slot outside that window
/// is `None`: dequeued and cleared elements are moved out, never left behind in the ring.
///
/// The capacity is fixed at construction. Enqueueing never moves existing elements and the
/// storage is never reallocated, so every operation except [`contains`](Self::contains) and
/// [`clear`](Self::clear) runs in constant time.
///
/// The queue performs no synchronization. Wrap it in an external lock to share it between threads.
#[derive(Clone)]
pub struct CircularQueue<T> {
  slots: Box<[Option<T>]>,
  front: usize,
  rear:  usize,
  len:   usize,
}

impl<T> CircularQueue<T> {
  /// Creates an empty queue able to hold `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidArgument`] when `capacity` is zero.
  ///
  /// # Panics
  ///
  /// Panics if the slot storage for `capacity` elements exceeds `isize::MAX` bytes.
  pub fn new(capacity: usize) -> Result<Self, QueueError<T>> {
    let capacity = QueueCapacity::new(capacity)?;
    Ok(Self::with_capacity(capacity))
  }

  /// Creates an empty queue from a signed capacity.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::InvalidArgument`] when `capacity` is zero or negative.
  ///
  /// # Panics
  ///
  /// Panics if the slot storage for `capacity` elements exceeds `isize::MAX` bytes.
  pub fn try_from_signed(capacity: isize) -> Result<Self, QueueError<T>> {
    let capacity = QueueCapacity::try_from(capacity)?;
    Ok(Self::with_capacity(capacity))
  }

  /// Creates an empty queue from an already validated capacity.
  ///
  /// # Panics
  ///
  /// Panics if the slot storage for `capacity` elements exceeds `isize::MAX` bytes.
  #[must_use]
  pub fn with_capacity(capacity: QueueCapacity) -> Self {
    let slots = iter::repeat_with(|| None).take(capacity.get()).collect();
    Self { slots, front: 0, rear: 0, len: 0 }
  }

  /// Returns the number of live elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Returns how many more elements can be enqueued before the queue is full.
  #[must_use]
  pub fn remaining(&self) -> usize {
    self.capacity() - self.len
  }

  /// Indicates whether the queue holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Indicates whether the queue holds `capacity` elements.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len == self.capacity()
  }

  /// Appends an element at the rear of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying `item` back when the queue is full. The queue is left
  /// unchanged.
  pub fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
    if self.is_full() {
      return Err(QueueError::Full(item));
    }
    debug_assert!(self.slots[self.rear].is_none());
    self.slots[self.rear] = Some(item);
    self.rear = self.advance(self.rear);
    self.len += 1;
    Ok(())
  }

  /// Removes and returns the element at the front of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    if self.is_empty() {
      return Err(QueueError::Empty);
    }
    let item = self.slots[self.front].take().ok_or(QueueError::Empty)?;
    self.front = self.advance(self.front);
    self.len -= 1;
    Ok(item)
  }

  /// Returns the element at the front of the queue without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements.
  pub fn peek(&self) -> Result<&T, QueueError<T>> {
    if self.is_empty() {
      return Err(QueueError::Empty);
    }
    self.slots[self.front].as_ref().ok_or(QueueError::Empty)
  }

  /// Checks whether any live element equals `item`.
  ///
  /// Only the live window is scanned; an empty queue answers `false` without touching storage.
  #[must_use]
  pub fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    self.iter().any(|candidate| candidate == item)
  }

  /// Removes and drops every live element, then rewinds both indices to the first slot.
  pub fn clear(&mut self) {
    while self.dequeue().is_ok() {}
    self.front = 0;
    self.rear = 0;
  }

  /// Returns an iterator over the live elements from front to rear.
  #[must_use]
  pub const fn iter(&self) -> Iter<'_, T> {
    Iter::new(self)
  }

  /// Removes the live elements in FIFO order through the returned iterator.
  ///
  /// Elements the iterator does not yield are dropped when it goes out of scope.
  pub const fn drain(&mut self) -> Drain<'_, T> {
    Drain::new(self)
  }

  /// Returns the live element `offset` positions behind the front.
  pub(super) fn get(&self, offset: usize) -> Option<&T> {
    if offset >= self.len {
      return None;
    }
    let capacity = self.capacity();
    let index = self.front + offset;
    let index = if index >= capacity { index - capacity } else { index };
    self.slots[index].as_ref()
  }

  fn advance(&self, index: usize) -> usize {
    let next = index + 1;
    if next == self.capacity() { 0 } else { next }
  }
}

impl<T> FifoQueue<T> for CircularQueue<T> {
  fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
    CircularQueue::enqueue(self, item)
  }

  fn dequeue(&mut self) -> Result<T, QueueError<T>> {
    CircularQueue::dequeue(self)
  }

  fn peek(&self) -> Result<&T, QueueError<T>> {
    CircularQueue::peek(self)
  }

  fn len(&self) -> usize {
    self.len
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::limited(self.slots.len())
  }

  fn is_full(&self) -> bool {
    CircularQueue::is_full(self)
  }

  fn contains(&self, item: &T) -> bool
  where
    T: PartialEq, {
    CircularQueue::contains(self, item)
  }

  fn clear(&mut self) {
    CircularQueue::clear(self);
  }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
  type IntoIter = Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> fmt::Debug for CircularQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "CircularQueue<{}> {{ len: {}, capacity: {} }}", type_name::<T>(), self.len, self.capacity())
  }
}
