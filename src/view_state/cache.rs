//! Memoized window computation.
//!
//! The window is a pure function of its inputs, so the last result is kept
//! and reused while the inputs stay the same. Collection identity is the
//! [`Dataset`] revision: every new dataset gets a fresh revision, clones share
//! it.

use super::window::{compute_window, WindowPlan, WindowRequest};
use crate::model::Record;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// An immutable record collection with a process-unique revision.
#[derive(Debug)]
pub struct Dataset<R> {
    records: Arc<[R]>,
    revision: u64,
}

impl<R> Dataset<R> {
    /// Wrap `records` under a new revision.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: records.into(),
            revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Revision identifying this collection.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The records.
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }
}

impl<R> Clone for Dataset<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            revision: self.revision,
        }
    }
}

impl<R> Deref for Dataset<R> {
    type Target = [R];

    fn deref(&self) -> &[R] {
        &self.records
    }
}

impl<R> From<Vec<R>> for Dataset<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

/// Key for window cache lookup.
///
/// Includes every input that affects the window so a hit is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowCacheKey {
    /// Dataset revision, `None` when no collection is supplied.
    pub revision: Option<u64>,
    /// Windowing inputs.
    pub request: WindowRequest,
}

/// Single-entry cache of the last computed window.
#[derive(Debug, Default)]
pub struct WindowCache {
    entry: Option<(WindowCacheKey, WindowPlan)>,
    hits: u64,
    misses: u64,
}

impl WindowCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan for `dataset` and `request`, computing it on a miss.
    pub fn plan<R: Record>(
        &mut self,
        dataset: Option<&Dataset<R>>,
        request: &WindowRequest,
    ) -> &WindowPlan {
        let key = WindowCacheKey {
            revision: dataset.map(Dataset::revision),
            request: request.clone(),
        };

        let hit = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if hit {
            self.hits += 1;
            trace!(revision = ?key.revision, "window cache hit");
        } else {
            self.misses += 1;
            trace!(revision = ?key.revision, "window cache miss");
            self.entry = None;
        }

        let (_, plan) = self.entry.get_or_insert_with(|| {
            let records: &[R] = dataset.map(Dataset::as_slice).unwrap_or(&[]);
            (key, compute_window(records, request))
        });
        plan
    }

    /// Drop the cached plan.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Whether a plan is cached.
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to compute.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
