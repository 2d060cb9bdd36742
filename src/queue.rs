//! Implementation of the mutex-protected queue
//!
//! [`Queue`] is an unbounded FIFO over any element type. A single lock owned
//! by the instance serializes `put`, `pop` and `size`, so check-and-remove is
//! atomic and two consumers can never take the same head element.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crossbeam_utils::CachePadded;
use tracing::{debug, trace};

use crate::common::QueueOps;

/// Outcome of [`Queue::pop_status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Popped<T> {
    /// The head element, and whether removing it left the queue empty
    Element { value: T, now_empty: bool },
    /// The queue held nothing
    Empty,
}

impl<T> Popped<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Popped::Element { value, .. } => Some(value),
            Popped::Empty => None,
        }
    }

    /// True if the queue is known to be empty after the pop
    pub fn left_empty(&self) -> bool {
        match self {
            Popped::Element { now_empty, .. } => *now_empty,
            Popped::Empty => true,
        }
    }
}

/// A thread-safe unbounded FIFO queue
///
/// Each instance owns its lock, so unrelated queues never contend with each
/// other. Share it between threads behind an `Arc` or in a `static`.
pub struct Queue<T> {
    /// Elements in arrival order, head at the front
    ///
    /// Padded so adjacent queues do not share a cache line.
    elements: CachePadded<Mutex<VecDeque<T>>>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue
    pub const fn new() -> Self {
        Self {
            elements: CachePadded::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Creates a new empty queue with room for `capacity` elements
    ///
    /// The queue still grows past `capacity` as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: CachePadded::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Acquires the lock, recovering it if a panicking thread poisoned it
    ///
    /// No critical section can leave the deque half-updated, so the data
    /// behind a poisoned lock is still valid.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.elements.lock().unwrap_or_else(|poisoned| {
            debug!("recovering poisoned queue lock");
            poisoned.into_inner()
        })
    }

    /// Appends `element` to the tail
    pub fn put(&self, element: T) {
        let mut elements = self.lock();
        elements.push_back(element);
        trace!(len = elements.len(), "put");
    }

    /// Removes and returns the head element, or None if the queue is empty
    pub fn try_pop(&self) -> Option<T> {
        let mut elements = self.lock();
        let element = elements.pop_front();
        trace!(len = elements.len(), found = element.is_some(), "pop");
        element
    }

    /// Removes the head element, falling back to the zero value
    ///
    /// The flag reports whether an element was found: an empty queue yields
    /// `(T::default(), false)`. Use [`Queue::pop_status`] to also learn
    /// whether this pop drained the queue.
    pub fn pop(&self) -> (T, bool)
    where
        T: Default,
    {
        match self.try_pop() {
            Some(element) => (element, true),
            None => (T::default(), false),
        }
    }

    /// Removes the head element and reports whether that left the queue empty
    ///
    /// Both facts are observed under one acquisition of the lock.
    pub fn pop_status(&self) -> Popped<T> {
        let mut elements = self.lock();
        match elements.pop_front() {
            Some(value) => {
                let now_empty = elements.is_empty();
                trace!(len = elements.len(), now_empty, "pop");
                Popped::Element { value, now_empty }
            }
            None => Popped::Empty,
        }
    }

    /// Returns the number of elements at the time of the call
    ///
    /// The count may be stale as soon as it is returned if other threads are
    /// using the queue.
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Checks if the queue was empty at the time of the call
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Consumes the queue, returning the remaining elements head first
    pub fn into_inner(self) -> VecDeque<T> {
        CachePadded::into_inner(self.elements)
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> QueueOps<T> for Queue<T> {
    fn put(&self, element: T) {
        Queue::put(self, element)
    }

    fn try_pop(&self) -> Option<T> {
        Queue::try_pop(self)
    }

    fn size(&self) -> usize {
        Queue::size(self)
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.lock();
        f.debug_struct("Queue")
            .field("elements", &*elements)
            .finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: CachePadded::new(Mutex::new(iter.into_iter().collect())),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Exclusive access, no need to take the lock.
        let elements = self.elements.get_mut().unwrap_or_else(PoisonError::into_inner);
        elements.extend(iter);
    }
}
