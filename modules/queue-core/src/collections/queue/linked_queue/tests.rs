use alloc::{rc::Rc, vec::Vec};

use super::*;

#[test]
fn dequeues_in_insertion_order() {
  let mut queue = LinkedQueue::new();
  queue.enqueue("first");
  queue.enqueue("second");
  assert_eq!(queue.dequeue(), Ok("first"));
  assert_eq!(queue.dequeue(), Ok("second"));
  assert_eq!(queue.dequeue(), Err(QueueError::Empty));
  assert_eq!(queue.peek(), Err(QueueError::Empty));
}

#[test]
fn iter_lists_oldest_first() {
  let queue: LinkedQueue<_> = (1..=3).collect();
  assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
  assert_eq!(queue.peek(), Ok(&1));
  assert!(queue.contains(&3));
  assert!(!queue.contains(&4));
}

#[test]
fn clear_drops_elements() {
  let tracked = Rc::new(());
  let mut queue = LinkedQueue::new();
  queue.enqueue(Rc::clone(&tracked));
  queue.clear();
  assert!(queue.is_empty());
  assert_eq!(queue.len(), 0);
  assert_eq!(Rc::strong_count(&tracked), 1);
}

#[test]
fn trait_view_is_unbounded() {
  let mut queue = LinkedQueue::new();
  FifoQueue::enqueue(&mut queue, 1_u8).unwrap();
  assert_eq!(FifoQueue::capacity(&queue), QueueSize::limitless());
  assert!(!FifoQueue::is_full(&queue));
  assert_eq!(FifoQueue::len(&queue), 1);
}
