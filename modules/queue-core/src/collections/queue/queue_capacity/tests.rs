use core::num::NonZeroUsize;

use super::*;

#[test]
fn rejects_zero() {
  assert_eq!(QueueCapacity::new(0), Err(CapacityError::new(0)));
  assert_eq!(QueueCapacity::try_from(0_usize), Err(CapacityError::new(0)));
}

#[test]
fn rejects_negative_signed_values() {
  assert_eq!(QueueCapacity::try_from(-1_isize), Err(CapacityError::new(-1)));
  assert_eq!(QueueCapacity::try_from(isize::MIN), Err(CapacityError::new(isize::MIN)));
  assert_eq!(QueueCapacity::try_from(0_isize), Err(CapacityError::new(0)));
}

#[test]
fn accepts_positive_values() {
  assert_eq!(QueueCapacity::new(1).unwrap().get(), 1);
  assert_eq!(QueueCapacity::try_from(16_isize).unwrap().get(), 16);
  assert_eq!(usize::from(QueueCapacity::new(usize::MAX).unwrap()), usize::MAX);
}

#[test]
fn converts_from_non_zero() {
  let value = NonZeroUsize::new(8).unwrap();
  assert_eq!(QueueCapacity::from(value).get(), 8);
}
