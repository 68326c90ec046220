//! In-memory cursor sources: empty, once, from_vec, from_iter, from_fn
use std::iter::Fuse;
use std::marker::PhantomData;

use super::core::Seq;

// ================================
// Basic Constructors
// ================================

pub struct Empty<T> {
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn reset(&mut self) {}

    fn next(&mut self) -> Option<T> {
        None
    }
}

pub struct Once<T> {
    pub(crate) value: T,
    pub(crate) done: bool,
}

impl<T: Clone> Seq for Once<T> {
    type Item = T;

    fn reset(&mut self) {
        self.done = false;
    }

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        self.done = true;
        Some(self.value.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeFirst,
    At(usize),
}

/// Positional walk over an owned buffer.
///
/// Also serves as the storage of [`Group`](super::group::Group) and
/// [`Grouper`](super::group::Grouper).
#[derive(Debug, Clone)]
pub struct VecSeq<T> {
    items: Vec<T>,
    position: Position,
}

impl<T> VecSeq<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: Position::BeforeFirst,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Seq for VecSeq<T> {
    type Item = T;

    fn reset(&mut self) {
        self.position = Position::BeforeFirst;
    }

    fn next(&mut self) -> Option<T> {
        // Clamped at len so an exhausted walk stays exhausted.
        let index = match self.position {
            Position::BeforeFirst => 0,
            Position::At(i) => (i + 1).min(self.items.len()),
        };
        self.position = Position::At(index);
        self.items.get(index).cloned()
    }
}

// ================================
// Iterator-backed Constructors
// ================================

/// Replays a cloneable iterable, starting a fresh iterator on every reset
pub struct IterSeq<I: IntoIterator> {
    pub(crate) source: I,
    pub(crate) iter: Option<Fuse<I::IntoIter>>,
}

impl<I> Seq for IterSeq<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn reset(&mut self) {
        self.iter = Some(self.source.clone().into_iter().fuse());
    }

    fn next(&mut self) -> Option<I::Item> {
        if self.iter.is_none() {
            self.reset();
        }
        self.iter.as_mut()?.next()
    }
}

/// Calls a factory on every reset to obtain the iterator for the next pass
pub struct FromFn<F, I> {
    pub(crate) factory: F,
    pub(crate) iter: Option<Fuse<I>>,
}

impl<F, I> Seq for FromFn<F, I>
where
    F: FnMut() -> I,
    I: Iterator,
{
    type Item = I::Item;

    fn reset(&mut self) {
        self.iter = Some((self.factory)().fuse());
    }

    fn next(&mut self) -> Option<I::Item> {
        if self.iter.is_none() {
            self.reset();
        }
        self.iter.as_mut()?.next()
    }
}

/// A cursor that never yields
pub fn empty<T>() -> Empty<T> {
    Empty {
        _phantom: PhantomData,
    }
}

/// A cursor that yields `value` once per pass
pub fn once<T: Clone>(value: T) -> Once<T> {
    Once { value, done: false }
}

/// A cursor over the items of `items`, in order
pub fn from_vec<T: Clone>(items: Vec<T>) -> VecSeq<T> {
    VecSeq::new(items)
}

/// A cursor over a cloneable iterable such as a range or a borrowed slice
pub fn from_iter<I>(iterable: I) -> IterSeq<I>
where
    I: IntoIterator + Clone,
{
    IterSeq {
        source: iterable,
        iter: None,
    }
}

/// A cursor whose passes are produced by `factory`
pub fn from_fn<F, I>(factory: F) -> FromFn<F, I>
where
    F: FnMut() -> I,
    I: Iterator,
{
    FromFn {
        factory,
        iter: None,
    }
}
