/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/3/26
******************************************************************************/

//! Singly linked FIFO queue with a fail-fast, removal-capable cursor.
//!
//! [`LinkedQueue`] provides O(1) [`offer`](LinkedQueue::offer) and
//! [`poll`](LinkedQueue::poll) over index-linked nodes in a slot arena.
//! Traversal comes in two flavors:
//!
//! - [`iter`](LinkedQueue::iter): a plain borrowing iterator for read-only
//!   passes; the borrow checker excludes mutation for its lifetime.
//! - [`cursor`](LinkedQueue::cursor): a detached [`Cursor`] that snapshots
//!   the queue's revision counter, may delete the element it last yielded,
//!   and fails with [`QueueError::StructurallyModified`] if the queue is
//!   mutated underneath it.
//!
//! # Examples
//!
//! ```
//! use orderly_rs::queue::LinkedQueue;
//!
//! let mut retries: LinkedQueue<&str> = LinkedQueue::new();
//! retries.offer("job-1");
//! retries.offer("job-2");
//! retries.offer("job-3");
//!
//! // Prune through the cursor without invalidating it.
//! let mut cursor = retries.cursor();
//! while cursor.has_next() {
//!     if cursor.next(&retries).unwrap().ends_with('2') {
//!         cursor.remove(&mut retries).unwrap();
//!     }
//! }
//!
//! assert_eq!(retries.poll(), Some("job-1"));
//! assert_eq!(retries.poll(), Some("job-3"));
//! assert_eq!(retries.poll(), None);
//! ```

pub mod cursor;
pub mod linked;

#[cfg(test)]
mod tests;

// Re-export main types
pub use cursor::{Cursor, QueueError};
pub use linked::{IntoIter, Iter, LinkedQueue};
