//! Stateless transform combinators: filter, map
use std::marker::PhantomData;

use super::core::{Seq, SeqRef};

// Filter
pub struct Filter<T, F> {
    pub(crate) parent: SeqRef<T>,
    pub(crate) predicate: F,
}

impl<T, F> Filter<T, F>
where
    F: FnMut(&T) -> bool,
{
    pub fn new(parent: SeqRef<T>, predicate: F) -> Self {
        Self { parent, predicate }
    }
}

impl<T, F> Seq for Filter<T, F>
where
    F: FnMut(&T) -> bool,
{
    type Item = T;

    fn reset(&mut self) {
        self.parent.reset();
    }

    fn next(&mut self) -> Option<T> {
        loop {
            let item = self.parent.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

// Map
pub struct Map<T, U, F> {
    pub(crate) parent: SeqRef<T>,
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<U>,
}

impl<T, U, F> Map<T, U, F>
where
    F: FnMut(T) -> U,
{
    pub fn new(parent: SeqRef<T>, f: F) -> Self {
        Self {
            parent,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, U, F> Seq for Map<T, U, F>
where
    F: FnMut(T) -> U,
{
    type Item = U;

    fn reset(&mut self) {
        self.parent.reset();
    }

    fn next(&mut self) -> Option<U> {
        self.parent.next().map(&mut self.f)
    }
}
