//! Iteration adapter bridging the cursor protocol to `Iterator` and to an
//! explicit begin / advance / current idiom.

use std::fmt;

use super::core::{Seq, SeqRef};
use crate::error::{SeqError, SeqResult};

#[derive(Debug)]
enum Position<T> {
    /// Constructed, cursor not reset yet
    NotStarted,
    /// Holding the value most recently pulled
    Current(T),
    /// The value was handed out by `Iterator::next`; the pull is deferred
    /// to the following call
    Yielded,
    /// The cursor reported exhaustion (or this is an end sentinel)
    Exhausted,
}

/// Position over a shared cursor.
///
/// [`SeqIter::begin`] resets the cursor and loads the first value;
/// [`SeqIter::end`] is a sentinel that holds no value. Two positions compare
/// equal when both are exhausted, whatever cursor they belong to. Otherwise
/// they must share the cursor instance and, when holding values, hold equal
/// values.
pub struct SeqIter<T> {
    seq: SeqRef<T>,
    position: Position<T>,
}

impl<T> SeqIter<T> {
    /// Wrap `seq` without touching it
    pub fn new(seq: SeqRef<T>) -> Self {
        Self {
            seq,
            position: Position::NotStarted,
        }
    }

    /// Reset `seq` and load its first value
    pub fn begin(seq: SeqRef<T>) -> Self {
        let mut iter = Self::new(seq);
        iter.restart();
        iter
    }

    /// Sentinel position past the last value of `seq`
    pub fn end(seq: SeqRef<T>) -> Self {
        Self {
            seq,
            position: Position::Exhausted,
        }
    }

    /// Reset the cursor and load its first value
    pub fn restart(&mut self) {
        self.seq.reset();
        self.advance();
    }

    /// Pull the next value into the current position
    pub fn advance(&mut self) {
        self.position = match self.seq.next() {
            Some(value) => Position::Current(value),
            None => Position::Exhausted,
        };
    }

    pub fn has_value(&self) -> bool {
        matches!(self.position, Position::Current(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::Exhausted)
    }

    /// The value at the current position
    pub fn current(&self) -> SeqResult<&T> {
        match &self.position {
            Position::Current(value) => Ok(value),
            _ => Err(SeqError::EmptyValue),
        }
    }

    /// Consume the adapter, keeping the value at the current position
    pub fn into_current(self) -> SeqResult<T> {
        match self.position {
            Position::Current(value) => Ok(value),
            _ => Err(SeqError::EmptyValue),
        }
    }

    pub fn seq(&self) -> &SeqRef<T> {
        &self.seq
    }
}

impl<T: PartialEq> PartialEq for SeqIter<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.position, &other.position) {
            (Position::Exhausted, Position::Exhausted) => true,
            (Position::Current(a), Position::Current(b)) => self.seq.ptr_eq(&other.seq) && a == b,
            (Position::NotStarted, Position::NotStarted)
            | (Position::Yielded, Position::Yielded) => self.seq.ptr_eq(&other.seq),
            _ => false,
        }
    }
}

/// Yields the current value; the cursor advances on the following call.
///
/// A not-started adapter resets its cursor on the first call, so
/// `SeqIter::new(seq)` can be dropped straight into a `for` loop. The cursor
/// is never pulled past the last value handed out, so a loop that breaks
/// early leaves the rest of the source untouched.
impl<T> Iterator for SeqIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.position {
            Position::NotStarted => self.restart(),
            Position::Yielded => self.advance(),
            Position::Current(_) | Position::Exhausted => {}
        }
        match std::mem::replace(&mut self.position, Position::Yielded) {
            Position::Current(value) => Some(value),
            _ => {
                self.position = Position::Exhausted;
                None
            }
        }
    }
}

impl<T> std::iter::FusedIterator for SeqIter<T> {}

impl<T: fmt::Debug> fmt::Debug for SeqIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqIter")
            .field("seq", &self.seq)
            .field("position", &self.position)
            .finish()
    }
}
