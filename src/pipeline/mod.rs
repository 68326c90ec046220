//! Fluent facade over shared cursors
//!
//! A [`Pipeline`] is a cheap handle around a [`SeqRef`]. Chaining methods
//! (`filter`, `map`, `choose`, `group_eager`, `flatten`) allocate a new
//! combinator that shares the current cursor and return a new pipeline over
//! it; the receiver is left untouched. Terminal methods (`reduce`, `count`,
//! `first`, `any`, ...) drive the chain from a fresh `reset`.
//!
//! Everything is lazy except [`Pipeline::group_eager`], which drains its
//! source before returning.

pub mod builder;

use std::fmt;
use std::rc::Rc;

use crate::error::{SeqError, SeqResult};
use crate::seq::{Filter, Flatten, GroupRef, Grouper, Map, Seq, SeqIter, SeqRef};
use crate::seq_configuration::PipelineConfig;
use crate::seq_metrics::{self, SeqMetrics, SharedMetrics};

pub use builder::PipelineBuilder;

pub struct Pipeline<T> {
    seq: SeqRef<T>,
    config: Rc<PipelineConfig>,
    metrics: Option<SharedMetrics>,
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Pipeline {
            seq: self.seq.clone(),
            config: Rc::clone(&self.config),
            metrics: self.metrics.clone(),
        }
    }
}

impl<T: 'static> Pipeline<T> {
    /// Wrap a shared cursor
    pub fn new(seq: SeqRef<T>) -> Self {
        Self::from_parts(seq, Rc::new(PipelineConfig::default()), None)
    }

    /// Wrap a cursor that may be absent
    pub fn try_new(seq: Option<SeqRef<T>>) -> SeqResult<Self> {
        match seq {
            Some(seq) => Ok(Self::new(seq)),
            None => {
                log::error!("Pipeline constructed without a cursor");
                Err(SeqError::MissingDependency("seq"))
            }
        }
    }

    /// Move a concrete cursor behind a shared handle and wrap it
    pub fn from_seq<S>(seq: S) -> Self
    where
        S: Seq<Item = T> + 'static,
    {
        Self::new(SeqRef::new(seq))
    }

    pub(crate) fn from_parts(
        seq: SeqRef<T>,
        config: Rc<PipelineConfig>,
        metrics: Option<SharedMetrics>,
    ) -> Self {
        Pipeline {
            seq,
            config,
            metrics,
        }
    }

    fn derive<U: 'static>(&self, seq: SeqRef<U>) -> Pipeline<U> {
        Pipeline::from_parts(seq, Rc::clone(&self.config), self.metrics.clone())
    }

    /// The shared cursor this pipeline drives
    pub fn seq(&self) -> SeqRef<T> {
        self.seq.clone()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Snapshot of the nearest metered stage's counters (the builder's source
    /// or the latest [`Pipeline::metered`] call), if any
    pub fn metrics(&self) -> Option<SeqMetrics> {
        self.metrics.as_ref().map(|metrics| metrics.borrow().clone())
    }

    // ================================
    // Chaining
    // ================================

    /// Keep only the items accepted by `predicate`
    pub fn filter<F>(&self, predicate: F) -> Pipeline<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.derive(SeqRef::new(Filter::new(self.seq.clone(), predicate)))
    }

    /// Transform every item, one output per input
    pub fn map<U, F>(&self, f: F) -> Pipeline<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.derive(SeqRef::new(Map::new(self.seq.clone(), f)))
    }

    /// Transform and filter in one step: keep the `Some` results of `chooser`
    pub fn choose<U, F>(&self, chooser: F) -> Pipeline<U>
    where
        U: 'static,
        F: FnMut(T) -> Option<U> + 'static,
    {
        self.map(chooser)
            .filter(Option::is_some)
            // Only `Some` values get past the filter above.
            .map(|chosen: Option<U>| chosen.expect("filtered to present values"))
    }

    /// Bucket the items by `key_fn`, yielding one group per key in key order.
    ///
    /// This drains the current cursor before returning. The resulting
    /// pipeline never pulls from it again; resetting it only rewinds the walk
    /// over the groups.
    pub fn group_eager<K, F>(&self, key_fn: F) -> Pipeline<GroupRef<K, T>>
    where
        K: Ord + Clone + 'static,
        T: Clone,
        F: FnMut(&T) -> K,
    {
        let grouper =
            Grouper::drain_with_capacity(self.seq.clone(), key_fn, self.config.group_capacity);
        log::debug!(
            "[{}] grouped {} items into {} groups",
            self.config.name,
            grouper.drained(),
            grouper.len()
        );
        self.derive(SeqRef::new(grouper))
    }

    /// Concatenate the inner cursors yielded by this pipeline
    pub fn flatten(&self) -> Pipeline<T::Item>
    where
        T: Seq,
        T::Item: 'static,
    {
        self.derive(SeqRef::new(Flatten::new(self.seq.clone())))
    }

    /// Meter this stage, returning the metered pipeline and its counters
    pub fn metered(&self) -> (Pipeline<T>, SharedMetrics) {
        let (seq, metrics) =
            seq_metrics::with_metrics(self.seq.clone(), Some(self.config.name.clone()));
        let metered = Pipeline::from_parts(seq, Rc::clone(&self.config), Some(metrics.clone()));
        (metered, metrics)
    }

    // ================================
    // Terminal operations
    // ================================

    /// Left fold in yield order: `fold(item, accumulator) -> accumulator`
    pub fn reduce<A, F>(&self, mut fold: F, seed: A) -> A
    where
        F: FnMut(T, A) -> A,
    {
        let mut accumulator = seed;
        for item in self {
            accumulator = fold(item, accumulator);
        }
        accumulator
    }

    pub fn count(&self) -> usize {
        self.reduce(|_, count| count + 1, 0)
    }

    /// The first item, or `None` if the pipeline is empty.
    ///
    /// The cursor is left positioned just past the returned item.
    pub fn first(&self) -> Option<T> {
        SeqIter::begin(self.seq.clone()).into_current().ok()
    }

    pub fn first_by<F>(&self, predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.filter(predicate).first()
    }

    pub fn any(&self) -> bool {
        !SeqIter::begin(self.seq.clone()).is_end()
    }

    pub fn any_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.filter(predicate).any()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.reduce(
            |item, mut items: Vec<T>| {
                items.push(item);
                items
            },
            Vec::new(),
        )
    }
}

impl<T> Seq for Pipeline<T> {
    type Item = T;

    fn reset(&mut self) {
        self.seq.reset();
    }

    fn next(&mut self) -> Option<T> {
        self.seq.next()
    }
}

impl<T> IntoIterator for &Pipeline<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        SeqIter::new(self.seq.clone())
    }
}

impl<T> IntoIterator for Pipeline<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        SeqIter::new(self.seq)
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.config.name)
            .field("seq", &self.seq)
            .field("metered", &self.metrics.is_some())
            .finish()
    }
}
