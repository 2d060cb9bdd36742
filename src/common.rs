//! Common functionality for queues
//!
//! This module provides the operation surface shared by queue
//! implementations, so that helpers and tests can be written once against it.

/// Trait for queue operations
///
/// Implementations must make every operation atomic with respect to the
/// others on the same instance.
pub trait QueueOps<T> {
    /// Appends an element at the tail of the queue
    fn put(&self, element: T);

    /// Removes the head element
    ///
    /// Returns None if the queue was empty.
    fn try_pop(&self) -> Option<T>;

    /// Removes the head element, falling back to the zero value
    ///
    /// The flag is true when an element was found. An empty queue yields
    /// `(T::default(), false)`.
    fn pop(&self) -> (T, bool)
    where
        T: Default,
    {
        match self.try_pop() {
            Some(element) => (element, true),
            None => (T::default(), false),
        }
    }

    /// Returns the number of elements at the time of the call
    fn size(&self) -> usize;

    /// Checks if the queue was empty at the time of the call
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
