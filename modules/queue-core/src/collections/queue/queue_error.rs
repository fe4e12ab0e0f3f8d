#[cfg(test)]
mod tests;

use core::fmt;

use super::CapacityError;

/// Errors that occur during queue operations.
///
/// Each failure is reported at the offending call and leaves the queue exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue could not be constructed because the requested capacity is not positive.
  InvalidArgument(CapacityError),
  /// The queue is full and cannot accept more elements. Contains the element that was attempted to
  /// be added.
  Full(T),
  /// The queue has no elements to consume.
  Empty,
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::InvalidArgument(_) | Self::Empty => None,
    }
  }

  /// Indicates whether the error reports a full queue.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    matches!(self, Self::Full(_))
  }

  /// Indicates whether the error reports an empty queue.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    matches!(self, Self::Empty)
  }
}

impl<T> From<CapacityError> for QueueError<T> {
  fn from(err: CapacityError) -> Self {
    QueueError::InvalidArgument(err)
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
      | Self::Full(_) => f.write_str("queue is full"),
      | Self::Empty => f.write_str("queue is empty"),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      | Self::InvalidArgument(err) => Some(err),
      | Self::Full(_) | Self::Empty => None,
    }
  }
}
