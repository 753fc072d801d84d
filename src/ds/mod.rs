//! Container types: FIFO queue, LIFO stack, fixed-capacity ring buffer and
//! hash set.

pub mod queue;
pub mod ring_buffer;
pub mod set;
pub mod stack;

pub use queue::Queue;
pub use ring_buffer::{RingBuffer, WriteMode};
pub use set::Set;
pub use stack::Stack;
