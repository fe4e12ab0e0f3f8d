//! FIFO queues sharing the [`FifoQueue`] interface.

mod capacity_error;
mod circular_queue;
mod drain;
mod fifo_queue;
mod iter;
mod linked_queue;
mod queue_capacity;
mod queue_error;
mod queue_size;
mod vec_queue;


pub use capacity_error::CapacityError;
pub use circular_queue::CircularQueue;
pub use drain::Drain;
pub use fifo_queue::FifoQueue;
pub use iter::Iter;
pub use linked_queue::LinkedQueue;
pub use queue_capacity::QueueCapacity;
pub use queue_error::QueueError;
pub use queue_size::QueueSize;
pub use vec_queue::VecQueue;
