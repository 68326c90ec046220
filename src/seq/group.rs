//! Eager grouping combinator.
//!
//! Unlike every other combinator in this crate, [`Grouper`] does its work at
//! construction time: it drains the source cursor once, buckets the items by
//! key, and never touches the source again. Building one is O(n) even if the
//! result is never consumed.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::constructors::VecSeq;
use super::core::{KeyedSeq, Seq, SeqRef};
use super::iter::SeqIter;
use crate::error::{SeqError, SeqResult};

/// One bucket of a grouping: an append-only buffer and its key.
///
/// The buffer freezes the first time the group is reset or pulled.
pub struct Group<K, T> {
    key: K,
    items: VecSeq<T>,
    frozen: bool,
}

impl<K, T> Group<K, T> {
    pub fn new(key: K) -> Self {
        Self::with_capacity(key, 0)
    }

    pub fn with_capacity(key: K, capacity: usize) -> Self {
        Self {
            key,
            items: VecSeq::with_capacity(capacity),
            frozen: false,
        }
    }

    /// Append an item. Fails once iteration has started.
    pub fn add_item(&mut self, item: T) -> SeqResult<()> {
        if self.frozen {
            log::warn!("Rejected append to a group that is already being iterated");
            return Err(SeqError::FrozenGroup);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<K, T: Clone> Seq for Group<K, T> {
    type Item = T;

    fn reset(&mut self) {
        self.frozen = true;
        self.items.reset();
    }

    fn next(&mut self) -> Option<T> {
        self.frozen = true;
        self.items.next()
    }
}

impl<K: Clone, T: Clone> KeyedSeq for Group<K, T> {
    type Key = K;

    fn key(&self) -> K {
        self.key.clone()
    }
}

/// Shared handle to a [`Group`], as yielded by [`Grouper`]
pub struct GroupRef<K, T> {
    inner: Rc<RefCell<Group<K, T>>>,
}

impl<K, T> Clone for GroupRef<K, T> {
    fn clone(&self) -> Self {
        GroupRef {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K, T> GroupRef<K, T> {
    pub fn new(group: Group<K, T>) -> Self {
        GroupRef {
            inner: Rc::new(RefCell::new(group)),
        }
    }

    pub fn add_item(&self, item: T) -> SeqResult<()> {
        self.inner.borrow_mut().add_item(item)
    }

    pub fn is_frozen(&self) -> bool {
        self.inner.borrow().is_frozen()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Copy of the buffered items; does not move the cursor
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.borrow().items().to_vec()
    }

    pub fn ptr_eq(&self, other: &GroupRef<K, T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn with_key<R>(&self, f: impl FnOnce(&K) -> R) -> R {
        f(&self.inner.borrow().key)
    }
}

impl<K, T: Clone> Seq for GroupRef<K, T> {
    type Item = T;

    fn reset(&mut self) {
        self.inner.borrow_mut().reset()
    }

    fn next(&mut self) -> Option<T> {
        self.inner.borrow_mut().next()
    }
}

impl<K: Clone, T: Clone> KeyedSeq for GroupRef<K, T> {
    type Key = K;

    fn key(&self) -> K {
        self.inner.borrow().key()
    }
}

impl<K: fmt::Debug, T> fmt::Debug for GroupRef<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = self.inner.borrow();
        f.debug_struct("GroupRef")
            .field("key", &group.key)
            .field("len", &group.len())
            .field("frozen", &group.frozen)
            .finish()
    }
}

// Identity, not key equality.
impl<K, T> PartialEq for GroupRef<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Walks the groups of a drained source in ascending key order.
///
/// `reset` rewinds the walk over the groups only; the source is never pulled
/// again after [`Grouper::drain`] returns.
pub struct Grouper<K, T> {
    groups: VecSeq<GroupRef<K, T>>,
    drained: usize,
}

impl<K, T> Grouper<K, T>
where
    K: Ord + Clone,
    T: Clone + 'static,
{
    /// Drain `source` into groups keyed by `key_fn`
    pub fn drain<F>(source: SeqRef<T>, key_fn: F) -> Self
    where
        F: FnMut(&T) -> K,
    {
        Self::drain_with_capacity(source, key_fn, 0)
    }

    /// Like [`Grouper::drain`], pre-sizing each new group's buffer
    pub fn drain_with_capacity<F>(source: SeqRef<T>, mut key_fn: F, capacity: usize) -> Self
    where
        F: FnMut(&T) -> K,
    {
        let mut table: BTreeMap<K, Group<K, T>> = BTreeMap::new();
        let mut drained = 0usize;

        for item in SeqIter::new(source) {
            let key = key_fn(&item);
            table
                .entry(key)
                .or_insert_with_key(|key| Group::with_capacity(key.clone(), capacity))
                .items
                .push(item);
            drained += 1;
        }

        let groups = table.into_values().map(GroupRef::new).collect();
        Self {
            groups: VecSeq::new(groups),
            drained,
        }
    }

    /// Look a group up by key without moving the cursor
    pub fn group(&self, key: &K) -> Option<GroupRef<K, T>> {
        let groups = self.groups.as_slice();
        groups
            .binary_search_by(|group| group.with_key(|k| k.cmp(key)))
            .ok()
            .map(|index| groups[index].clone())
    }

    pub fn keys(&self) -> Vec<K> {
        self.groups.as_slice().iter().map(|g| g.key()).collect()
    }
}

impl<K, T> Grouper<K, T> {
    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of source items consumed at construction
    pub fn drained(&self) -> usize {
        self.drained
    }
}

impl<K, T> Seq for Grouper<K, T> {
    type Item = GroupRef<K, T>;

    fn reset(&mut self) {
        self.groups.reset();
    }

    fn next(&mut self) -> Option<GroupRef<K, T>> {
        self.groups.next()
    }
}
