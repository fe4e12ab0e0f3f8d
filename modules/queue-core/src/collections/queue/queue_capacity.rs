#[cfg(test)]
mod tests;

use core::num::NonZeroUsize;

use super::CapacityError;

/// Validated, strictly positive capacity for a bounded queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueueCapacity(NonZeroUsize);

impl QueueCapacity {
  /// Creates a capacity from an unsigned value.
  ///
  /// # Errors
  ///
  /// Returns a [`CapacityError`] when `capacity` is zero.
  pub const fn new(capacity: usize) -> Result<Self, CapacityError> {
    match NonZeroUsize::new(capacity) {
      | Some(value) => Ok(Self(value)),
      | None => Err(CapacityError::new(0)),
    }
  }

  /// Returns the capacity as `usize`.
  #[must_use]
  pub const fn get(self) -> usize {
    self.0.get()
  }
}

impl From<NonZeroUsize> for QueueCapacity {
  fn from(value: NonZeroUsize) -> Self {
    Self(value)
  }
}

impl TryFrom<usize> for QueueCapacity {
  type Error = CapacityError;

  fn try_from(value: usize) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl TryFrom<isize> for QueueCapacity {
  type Error = CapacityError;

  fn try_from(value: isize) -> Result<Self, Self::Error> {
    let unsigned = usize::try_from(value).map_err(|_| CapacityError::new(value))?;
    Self::new(unsigned)
  }
}

impl From<QueueCapacity> for usize {
  fn from(value: QueueCapacity) -> Self {
    value.get()
  }
}
