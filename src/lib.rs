#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(feature = "std"), no_std)]

//! FIFO queues in three storage strategies behind one interface.
//!
//! - [`CircularQueue`]: fixed-capacity ring buffer; never reallocates or moves elements.
//! - [`VecQueue`]: unbounded queue over a growable array.
//! - [`LinkedQueue`]: unbounded queue over a doubly linked list.
//!
//! With the default `std` feature the crate also re-exports [`SharedQueue`] and [`TracingQueue`].


pub use fifo_queue_core_rs::{
  CapacityError, CircularQueue, Drain, FifoQueue, Iter, LinkedQueue, QueueCapacity, QueueError, QueueSize, VecQueue,
};
#[cfg(feature = "std")]
pub use fifo_queue_std_rs::{QUEUE_EVENT_TARGET, SharedQueue, TracingQueue};

/// Returns the version of this crate as recorded in its package metadata.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
