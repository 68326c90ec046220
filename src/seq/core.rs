//! Core cursor trait and the shared handle every combinator holds.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::pipeline::Pipeline;

/// Pull-based cursor over values of type `Item`.
///
/// A cursor is a small state machine, not a value. Its protocol is:
///
/// 1. `reset` positions it before the first element. It may be called any
///    number of times and is idempotent.
/// 2. `next` returns the following element and advances permanently.
/// 3. Once `next` returns `None`, every later call returns `None` until the
///    next `reset`.
///
/// Callers must `reset` a cursor before the first `next`. The iteration
/// adapter ([`SeqIter`](super::iter::SeqIter)) and every terminal operation
/// of [`Pipeline`] do this for you; direct callers have to follow the same
/// discipline. What a cursor yields when `next` is called without a prior
/// `reset` is up to the implementation.
pub trait Seq {
    type Item;

    /// Rewind to the position before the first element.
    fn reset(&mut self);

    /// Produce the next element, or `None` once the pass is exhausted.
    ///
    /// Requires a prior call to [`Seq::reset`].
    fn next(&mut self) -> Option<Self::Item>;
}

/// A cursor that belongs to a bucket identified by a key.
pub trait KeyedSeq: Seq {
    type Key;

    fn key(&self) -> Self::Key;
}

impl<S: Seq + ?Sized> Seq for Box<S> {
    type Item = S::Item;

    fn reset(&mut self) {
        (**self).reset()
    }

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

/// Shared, reference-counted handle to a type-erased cursor.
///
/// Cloning the handle never copies the cursor: all clones drive the same
/// position state. This is what lets several combinators wrap one parent.
/// The handle is single-threaded; two holders must not drive the cursor
/// at the same time.
pub struct SeqRef<T> {
    inner: Rc<RefCell<dyn Seq<Item = T>>>,
}

impl<T> Clone for SeqRef<T> {
    fn clone(&self) -> Self {
        SeqRef {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> SeqRef<T> {
    /// Move a cursor behind a shared handle
    pub fn new<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + 'static,
    {
        let inner: Rc<RefCell<dyn Seq<Item = T>>> = Rc::new(RefCell::new(seq));
        SeqRef { inner }
    }

    /// True if both handles point at the same cursor instance
    pub fn ptr_eq(&self, other: &SeqRef<T>) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
    }

    /// Number of live handles sharing this cursor
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T> Seq for SeqRef<T> {
    type Item = T;

    fn reset(&mut self) {
        self.inner.borrow_mut().reset()
    }

    fn next(&mut self) -> Option<T> {
        self.inner.borrow_mut().next()
    }
}

impl<T> fmt::Debug for SeqRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqRef")
            .field("holders", &self.holders())
            .finish()
    }
}

/// Extension trait for moving concrete cursors into the shared world
pub trait SeqExt: Seq + Sized + 'static {
    /// Erase the cursor type behind a shared handle
    fn shared(self) -> SeqRef<Self::Item> {
        SeqRef::new(self)
    }

    /// Start a fluent pipeline over this cursor
    fn into_pipeline(self) -> Pipeline<Self::Item>
    where
        Self::Item: 'static,
    {
        Pipeline::new(self.shared())
    }
}

impl<S: Seq + Sized + 'static> SeqExt for S {}
