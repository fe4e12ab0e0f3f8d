extern crate std;

use std::{format, string::ToString};

use super::*;

#[test]
fn queue_error_full_variant() {
  let error = QueueError::Full(42);
  assert!(error.is_full());
  assert!(!error.is_empty());
  assert_eq!(error.into_item(), Some(42));
}

#[test]
fn queue_error_empty_variant() {
  let error: QueueError<i32> = QueueError::Empty;
  assert!(error.is_empty());
  assert_eq!(error.into_item(), None);
}

#[test]
fn queue_error_invalid_argument_variant() {
  let error: QueueError<&str> = QueueError::InvalidArgument(CapacityError::new(0));
  assert!(!error.is_full());
  assert!(!error.is_empty());
  assert_eq!(error.into_item(), None);
}

#[test]
fn queue_error_from_capacity_error() {
  let queue_error: QueueError<u8> = CapacityError::new(-3).into();
  assert_eq!(queue_error, QueueError::InvalidArgument(CapacityError::new(-3)));
}

#[test]
fn queue_error_kinds_stay_distinct() {
  assert_ne!(QueueError::Full(1), QueueError::Empty);
  assert_ne!(QueueError::<i32>::Empty, QueueError::InvalidArgument(CapacityError::new(0)));
  assert_eq!(QueueError::Full(1), QueueError::Full(1));
  assert_ne!(QueueError::Full(1), QueueError::Full(2));
}

#[test]
fn queue_error_display() {
  assert_eq!(QueueError::Full(7).to_string(), "queue is full");
  assert_eq!(QueueError::<i32>::Empty.to_string(), "queue is empty");
  let invalid: QueueError<i32> = CapacityError::new(-1).into();
  assert_eq!(invalid.to_string(), "invalid argument: queue capacity must be positive, got -1");
}

#[test]
fn queue_error_source_points_at_capacity_error() {
  use core::error::Error;

  let invalid: QueueError<i32> = CapacityError::new(0).into();
  assert!(invalid.source().is_some());
  assert!(QueueError::Full(1).source().is_none());
}

#[test]
fn queue_error_debug_format() {
  let debug_str = format!("{:?}", QueueError::Full(10));
  assert!(debug_str.contains("Full"));
  assert!(debug_str.contains("10"));
}
