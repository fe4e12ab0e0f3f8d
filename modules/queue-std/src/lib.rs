#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]

//! Standard library extensions for the FIFO queues.
//!
//! The core queues are single-threaded. [`SharedQueue`] adds the external mutual exclusion needed
//! to share one between threads, and [`TracingQueue`] reports queue activity through `tracing`.

mod shared_queue;
mod tracing_queue;

pub use shared_queue::SharedQueue;
pub use tracing_queue::{QUEUE_EVENT_TARGET, TracingQueue};
