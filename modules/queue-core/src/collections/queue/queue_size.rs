
/// Enumeration representing the size limit of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// No limit (unlimited).
  Limitless,
  /// Limited to the specified size.
  Limited(usize),
}

impl QueueSize {
  /// Constant constructor representing an unlimited size queue.
  #[must_use]
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  /// Constant constructor representing a queue limited to the specified size.
  #[must_use]
  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  /// Indicates whether a queue holding `len` elements has reached this limit.
  #[must_use]
  pub const fn is_reached_by(self, len: usize) -> bool {
    match self {
      | Self::Limitless => false,
      | Self::Limited(value) => len >= value,
    }
  }
}
