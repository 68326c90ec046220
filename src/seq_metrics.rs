//! Pull metrics for cursors
//!
//! [`Metered`] wraps a cursor and counts what flows through it. Wrapping a
//! pipeline's source makes eager work observable: a grouper pulls its whole
//! source at construction, while lazy combinators only pull on demand.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::seq::{Seq, SeqRef};

/// Counters collected for one metered cursor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeqMetrics {
    pub name: Option<String>,
    pub items_yielded: u64,
    pub resets: u64,
    pub exhaustions: u64,
}

/// Shared handle through which a [`Metered`] cursor reports
pub type SharedMetrics = Rc<RefCell<SeqMetrics>>;

impl SeqMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn record_item(&mut self) {
        self.items_yielded += 1;
    }

    pub fn record_reset(&mut self) {
        self.resets += 1;
    }

    pub fn record_exhaustion(&mut self) {
        self.exhaustions += 1;
    }

    /// Items per completed pass, or the running total if no pass finished
    pub fn items_per_pass(&self) -> f64 {
        if self.exhaustions > 0 {
            self.items_yielded as f64 / self.exhaustions as f64
        } else {
            self.items_yielded as f64
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Cursor that forwards to its parent and records every reset and pull
pub struct Metered<T> {
    parent: SeqRef<T>,
    metrics: SharedMetrics,
    // Only the first `None` of a pass counts as an exhaustion.
    exhausted: bool,
}

impl<T> Metered<T> {
    pub fn new(parent: SeqRef<T>, metrics: SharedMetrics) -> Self {
        Self {
            parent,
            metrics,
            exhausted: false,
        }
    }

    pub fn metrics(&self) -> SharedMetrics {
        Rc::clone(&self.metrics)
    }
}

impl<T> Seq for Metered<T> {
    type Item = T;

    fn reset(&mut self) {
        self.exhausted = false;
        self.metrics.borrow_mut().record_reset();
        log::trace!("Metered cursor reset");
        self.parent.reset();
    }

    fn next(&mut self) -> Option<T> {
        let item = self.parent.next();
        let mut metrics = self.metrics.borrow_mut();
        match item {
            Some(_) => metrics.record_item(),
            None if !self.exhausted => {
                self.exhausted = true;
                metrics.record_exhaustion();
                log::trace!(
                    "Metered cursor exhausted after {} items",
                    metrics.items_yielded
                );
            }
            None => {}
        }
        item
    }
}

/// Wrap `seq` in a metering cursor, returning it with its metrics handle
pub fn with_metrics<T: 'static>(seq: SeqRef<T>, name: Option<String>) -> (SeqRef<T>, SharedMetrics) {
    let mut metrics = SeqMetrics::new();
    if let Some(name) = name {
        metrics = metrics.with_name(name);
    }
    let metrics = Rc::new(RefCell::new(metrics));
    let metered = SeqRef::new(Metered::new(seq, Rc::clone(&metrics)));
    (metered, metrics)
}
