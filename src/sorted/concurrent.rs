/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/3/26
******************************************************************************/

//! Lock-guarded wrapper serializing all mutations of a [`SortedVec`].
//!
//! [`ConcurrentSortedVec`] holds exactly one mutual-exclusion lock, created
//! at construction and living for the object's lifetime. Every mutating
//! operation acquires it for its entire duration, including the underlying
//! scan-and-splice, and releases it on every exit path via the RAII guard.
//! Mutations are therefore linearizable with respect to each other.
//!
//! # Consistency model
//!
//! The read accessors ([`len`](ConcurrentSortedVec::len),
//! [`snapshot`](ConcurrentSortedVec::snapshot),
//! [`lock`](ConcurrentSortedVec::lock)) acquire the same lock. A torn read
//! of a `Vec` mid-splice is undefined behavior, not merely a stale view, so
//! reads take the stronger locked consistency instead of racing the
//! writers.

use super::vec::{SortRegime, SortedVec};
use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// A [`SortedVec`] shared between threads behind a single lock.
///
/// # Examples
///
/// ```
/// use orderly_rs::ConcurrentSortedVec;
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new(ConcurrentSortedVec::from_vec(vec![10u32, 30]));
///
/// let writer = Arc::clone(&shared);
/// thread::spawn(move || writer.insert(20)).join().unwrap();
///
/// assert_eq!(shared.snapshot(), vec![10, 20, 30]);
/// ```
#[derive(Debug)]
pub struct ConcurrentSortedVec<E> {
    inner: Mutex<SortedVec<E>>,
}

impl<E: Ord> Default for ConcurrentSortedVec<E> {
    fn default() -> Self {
        Self::new(SortedVec::default())
    }
}

impl<E> ConcurrentSortedVec<E> {
    /// Wraps an already-seeded sequence.
    #[must_use]
    pub fn new(seq: SortedVec<E>) -> Self {
        Self {
            inner: Mutex::new(seq),
        }
    }

    /// Seeds a shared sequence in the natural ascending regime.
    #[must_use]
    pub fn from_vec(backing: Vec<E>) -> Self
    where
        E: Ord,
    {
        Self::new(SortedVec::from_vec(backing))
    }

    /// Seeds a shared sequence in the ranked descending regime.
    #[must_use]
    pub fn from_vec_by<F>(backing: Vec<E>, rank: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        Self::new(SortedVec::from_vec_by(backing, rank))
    }

    /// Acquires the guard, recovering from poisoning.
    ///
    /// Every `SortedVec` mutation leaves the backing structurally valid even
    /// if a caller-supplied rank function panics mid-operation, so a
    /// poisoned lock still guards a usable sequence.
    fn guard(&self) -> MutexGuard<'_, SortedVec<E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the backing vector under the lock, switching to the natural
    /// ascending regime.
    pub fn set_backing(&self, backing: Vec<E>)
    where
        E: Ord,
    {
        let mut seq = self.guard();
        seq.set_backing(backing);
        debug!(len = seq.len(), "re-seeded shared sequence, natural order");
    }

    /// Replaces the backing vector and rank function under the lock.
    pub fn set_backing_by<F>(&self, backing: Vec<E>, rank: F)
    where
        F: Fn(&E, &E) -> Ordering + Send + Sync + 'static,
    {
        let mut seq = self.guard();
        seq.set_backing_by(backing, rank);
        debug!(len = seq.len(), "re-seeded shared sequence, ranked order");
    }

    /// Inserts `element` at its sorted position under the lock.
    pub fn insert(&self, element: E) {
        self.guard().insert(element);
    }

    /// Inserts the element if present; `None` is silently ignored.
    ///
    /// The lock is still taken for `None` so the call linearizes with other
    /// mutations even when it ends up doing nothing.
    pub fn insert_opt(&self, element: Option<E>) {
        self.guard().insert_opt(element);
    }

    /// Inserts every element of `elements` in one critical section.
    ///
    /// Concurrent observers never see a partially-applied batch.
    pub fn insert_all<I>(&self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        let mut seq = self.guard();
        let before = seq.len();
        seq.insert_all(elements);
        trace!(added = seq.len() - before, total = seq.len(), "bulk insert");
    }

    /// Removes the first occurrence of `item` under the lock.
    pub fn remove_item(&self, item: &E) -> bool
    where
        E: PartialEq,
    {
        self.guard().remove_item(item)
    }

    /// Removes and returns the element at `index` under the lock.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. The lock is released during
    /// unwinding; the sequence itself stays valid.
    pub fn remove_at(&self, index: usize) -> E {
        self.guard().remove_at(index)
    }

    /// Removes every element equal to any of `items` in one critical
    /// section. Returns `true` if the sequence changed.
    pub fn remove_all(&self, items: &[E]) -> bool
    where
        E: PartialEq,
    {
        self.guard().remove_all(items)
    }

    /// Keeps only the elements for which `pred` returns `true`.
    pub fn retain<F>(&self, pred: F)
    where
        F: FnMut(&E) -> bool,
    {
        self.guard().retain(pred);
    }

    /// Keeps only the elements equal to one of `items`. Returns `true` if
    /// the sequence changed.
    pub fn retain_all(&self, items: &[E]) -> bool
    where
        E: PartialEq,
    {
        self.guard().retain_all(items)
    }

    /// Removes all elements under the lock.
    pub fn clear(&self) {
        let mut seq = self.guard();
        let dropped = seq.len();
        seq.clear();
        debug!(dropped, "cleared shared sequence");
    }

    /// Number of elements at the moment the lock was held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Returns `true` if the sequence held no elements at the moment the
    /// lock was held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// The regime the wrapped sequence was last seeded with.
    #[must_use]
    pub fn regime(&self) -> SortRegime {
        self.guard().regime()
    }

    /// Clones the elements out in sort order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.guard().as_slice().to_vec()
    }

    /// Holds the lock and hands out the live inner sequence.
    ///
    /// This is the escape hatch for multi-step access: the guard keeps
    /// every other caller out until it is dropped, including callers that
    /// only read. Going through
    /// [`backing_mut`](SortedVec::backing_mut) on the guarded sequence can
    /// still void the sort invariant; that contract is unchanged here.
    pub fn lock(&self) -> MutexGuard<'_, SortedVec<E>> {
        self.guard()
    }

    /// Consumes the wrapper and returns the inner sequence.
    #[must_use]
    pub fn into_inner(self) -> SortedVec<E> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
