extern crate std;

use std::string::ToString;

use super::CapacityError;

#[test]
fn keeps_requested_capacity() {
  let error = CapacityError::new(-1);
  assert_eq!(error.requested(), -1);
}

#[test]
fn display_mentions_requested_value() {
  let error = CapacityError::new(0);
  assert_eq!(error.to_string(), "queue capacity must be positive, got 0");
}
