#[cfg(test)]
mod tests;

use core::fmt;

/// Error returned when a requested queue capacity is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
  requested: isize,
}

impl CapacityError {
  /// Creates an error for the rejected capacity.
  #[must_use]
  pub const fn new(requested: isize) -> Self {
    Self { requested }
  }

  /// Returns the capacity that was rejected.
  #[must_use]
  pub const fn requested(&self) -> isize {
    self.requested
  }
}

impl fmt::Display for CapacityError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "queue capacity must be positive, got {}", self.requested)
  }
}

impl core::error::Error for CapacityError {}
