//! Flattening combinator over a cursor of cursors
use super::core::{Seq, SeqRef};

/// Exposes every item of every inner cursor, outer order first.
///
/// Each inner cursor is reset right before it is walked. Empty inner cursors
/// are skipped, and an outer cursor with no inner cursors yields nothing.
pub struct Flatten<I> {
    pub(crate) outer: SeqRef<I>,
    pub(crate) current: Option<I>,
    pub(crate) started: bool,
}

impl<I: Seq> Flatten<I> {
    pub fn new(outer: SeqRef<I>) -> Self {
        Self {
            outer,
            current: None,
            started: false,
        }
    }

    fn pull_inner(&mut self) -> Option<I> {
        let mut inner = self.outer.next()?;
        inner.reset();
        Some(inner)
    }
}

impl<I: Seq> Seq for Flatten<I> {
    type Item = I::Item;

    fn reset(&mut self) {
        self.outer.reset();
        self.current = None;
        self.started = false;
    }

    fn next(&mut self) -> Option<I::Item> {
        if !self.started {
            self.started = true;
            self.current = self.pull_inner();
        }

        while let Some(inner) = self.current.as_mut() {
            if let Some(item) = inner.next() {
                return Some(item);
            }
            self.current = self.pull_inner();
        }
        None
    }
}
