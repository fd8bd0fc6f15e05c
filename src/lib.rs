/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/3/26
******************************************************************************/

//! Ordered and concurrent collection primitives.
//!
//! This crate provides three small, purpose-built containers:
//!
//! - [`SortedVec`]: an insertion-sorted sequence over a caller-supplied
//!   `Vec`, with a pluggable ordering fixed per seeding call. Insertion is
//!   a backward scan-and-splice, never a full re-sort.
//! - [`ConcurrentSortedVec`]: the same sequence behind a single
//!   mutual-exclusion lock, serializing every mutation for shared use
//!   between threads.
//! - [`LinkedQueue`]: an independent singly linked FIFO queue with O(1)
//!   `offer`/`poll` and a fail-fast [`Cursor`] that can delete elements
//!   mid-traversal.
//!
//! # Examples
//!
//! ```
//! use orderly_rs::{LinkedQueue, SortedVec};
//!
//! let mut ranked = SortedVec::from_vec_by(Vec::new(), |a: &u32, b: &u32| a.cmp(b));
//! ranked.insert_all([5, 1, 3]);
//! assert_eq!(ranked.as_slice(), &[5, 3, 1]);
//!
//! let mut queue: LinkedQueue<u32> = ranked.into_inner().into_iter().collect();
//! assert_eq!(queue.poll(), Some(5));
//! ```

pub mod queue;
pub mod sorted;

// Re-export main types
pub use queue::{Cursor, IntoIter, Iter, LinkedQueue, QueueError};
pub use sorted::{ConcurrentSortedVec, RankFn, SortRegime, SortedVec};
