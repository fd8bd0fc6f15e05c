/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/3/26
******************************************************************************/

//! Fail-fast, removal-capable traversal cursor for [`LinkedQueue`].
//!
//! A [`Cursor`] is detached: it holds no borrow of the queue and is handed
//! the queue explicitly on every call. That is what makes the fail-fast
//! guard observable at all in Rust: the queue stays free to mutate between
//! cursor calls, and the cursor detects it on the next call instead of
//! returning elements from a chain that no longer exists in that shape.
//!
//! At creation the cursor snapshots the queue's revision counter, its
//! length (the number of elements it will yield), and the head link. [`next`](Cursor::next) and
//! [`remove`](Cursor::remove) re-check the revision first on every call;
//! [`offer`](LinkedQueue::offer) and [`poll`](LinkedQueue::poll) bump it,
//! while cursor removal deliberately does not, so a single pass may prune
//! elements through its own cursor without invalidating itself.
//!
//! A cursor must only be used with the queue that created it. Exhaustion is
//! terminal; create a fresh cursor to traverse again.

use super::linked::LinkedQueue;
use std::marker::PhantomData;
use thiserror::Error;

/// Errors signaled by [`Cursor`] calls.
///
/// All are raised synchronously at the offending call; the queue itself is
/// left consistent because every guard runs before any mutation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue was structurally mutated (`offer`/`poll`) after the cursor
    /// was created.
    #[error(
        "queue was structurally modified during traversal: cursor revision {expected}, queue revision {found}"
    )]
    StructurallyModified {
        /// Revision captured at cursor creation.
        expected: u64,
        /// Revision found on the queue at call time.
        found: u64,
    },

    /// The cursor has yielded every element of its snapshot.
    #[error("cursor is exhausted, no further elements")]
    Exhausted,

    /// `remove` was called with no current element: before the first
    /// `next`, after the current element was already removed, or on a
    /// cursor created over an empty queue.
    #[error("cursor has no current element to remove")]
    NoCurrentElement,
}

/// Single-pass, forward-only cursor over a [`LinkedQueue`].
///
/// Created by [`LinkedQueue::cursor`]. See the [module docs](self) for the
/// traversal protocol.
#[derive(Debug)]
pub struct Cursor<E> {
    /// Queue revision captured at creation.
    revision: u64,
    /// Yields left out of the captured length.
    remaining: usize,
    /// Next node to yield.
    next: Option<usize>,
    /// Most recently yielded node; cleared by `remove`.
    last: Option<usize>,
    /// Predecessor of `last` (and of `next` once `last` is removed).
    pred: Option<usize>,
    _elements: PhantomData<fn() -> E>,
}

impl<E> Cursor<E> {
    pub(crate) fn new(queue: &LinkedQueue<E>) -> Self {
        Self {
            revision: queue.revision(),
            remaining: queue.len(),
            next: queue.head_index(),
            last: None,
            pred: None,
            _elements: PhantomData,
        }
    }

    /// Returns `true` while fewer elements have been yielded than existed
    /// when the cursor was created. Never fails; staleness is only detected
    /// by [`next`](Self::next) and [`remove`](Self::remove).
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Advances one link and returns the next element.
    ///
    /// # Errors
    ///
    /// - [`QueueError::StructurallyModified`] if the queue's revision no
    ///   longer matches the one captured at creation.
    /// - [`QueueError::Exhausted`] once every snapshot element has been
    ///   yielded.
    pub fn next<'q>(&mut self, queue: &'q LinkedQueue<E>) -> Result<&'q E, QueueError> {
        self.check_revision(queue)?;
        if self.remaining == 0 {
            return Err(QueueError::Exhausted);
        }
        let Some(idx) = self.next else {
            return Err(QueueError::Exhausted);
        };
        if let Some(last) = self.last {
            self.pred = Some(last);
        }
        self.last = Some(idx);
        self.next = queue.node_next(idx);
        self.remaining -= 1;
        Ok(queue.node_value(idx))
    }

    /// Unlinks and returns the most recently yielded element.
    ///
    /// Fixes the predecessor link (or the queue head, or the tail) and
    /// decrements the queue's length. Deliberately does **not** bump the
    /// queue's revision: pruning through the cursor keeps the cursor alive,
    /// while any interleaved `offer`/`poll` is still caught on the next
    /// call.
    ///
    /// # Errors
    ///
    /// - [`QueueError::StructurallyModified`] on a revision mismatch.
    /// - [`QueueError::NoCurrentElement`] if nothing has been yielded yet,
    ///   the element was already removed, or the queue was empty when the
    ///   cursor was created.
    pub fn remove(&mut self, queue: &mut LinkedQueue<E>) -> Result<E, QueueError> {
        self.check_revision(queue)?;
        let Some(idx) = self.last.take() else {
            return Err(QueueError::NoCurrentElement);
        };
        Ok(queue.unlink(self.pred, idx))
    }

    fn check_revision(&self, queue: &LinkedQueue<E>) -> Result<(), QueueError> {
        let found = queue.revision();
        if found != self.revision {
            return Err(QueueError::StructurallyModified {
                expected: self.revision,
                found,
            });
        }
        Ok(())
    }
}
