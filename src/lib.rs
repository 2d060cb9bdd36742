//! # generic_queue_rs
//!
//! A generic multiple-producer-multiple-consumer FIFO queue guarded by a
//! per-instance mutex, together with arithmetic and containers restricted to
//! closed sets of numeric kinds.
//!
//! ```
//! use generic_queue_rs::Queue;
//!
//! let q = Queue::new();
//! q.put(1);
//! q.put(2);
//! assert_eq!(q.size(), 2);
//! assert_eq!(q.pop(), (1, true));
//! assert_eq!(q.size(), 1);
//! ```

mod common;

pub mod containers;
pub mod numeric;
pub mod queue;

// Re-exports for convenience
pub use common::QueueOps;
pub use containers::{FloatMap, MapKey, Named, Series, Slice};
pub use numeric::{add, sub, Float, Number, Signed};
pub use queue::{Popped, Queue};

/// Keeps the numeric and key type sets closed to this crate
mod sealed {
    pub trait Sealed {}
}
