#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![no_std]

//! Core FIFO queue collection.
//!
//! Provides a fixed-capacity ring buffer queue ([`CircularQueue`]) together with two unbounded
//! queues backed by a growable array ([`VecQueue`]) and a doubly linked list ([`LinkedQueue`]).
//! All of them implement [`FifoQueue`], so callers can swap the storage strategy without touching
//! the code that drives the queue.
//!
//! None of the queues synchronize access internally. Share an instance across threads only through
//! an external lock such as the `SharedQueue` wrapper of the std companion crate.

extern crate alloc;

pub mod collections;

pub use collections::queue::{
  CapacityError, CircularQueue, Drain, FifoQueue, Iter, LinkedQueue, QueueCapacity, QueueError, QueueSize, VecQueue,
};
