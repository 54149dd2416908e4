//! Dispatch metrics.
//!
//! Two levels:
//!
//! - [`RunMetrics`]: timings and cache outcome for one request, returned by
//!   `Dispatcher::answer_verbose`.
//! - [`Stats`]: process-wide counters, updated on every request and read as
//!   a [`StatsSnapshot`].

use super::trigger::Match;
use crate::envelope::Envelope;
use crate::solution::AnswerType;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// What the cache gate did for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheStatus {
    /// No module matched, or the module is not cache-eligible, or caching is
    /// disabled.
    #[default]
    Bypassed,
    Hit,
    /// Looked up, not found, answer not stored.
    Miss,
    /// Looked up, not found, answer stored.
    Stored,
    /// The store or the stored entry failed; the request went on without it.
    Failed,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    pub total: Duration,
    /// Time spent evaluating trigger patterns.
    pub matching: Duration,
    /// Time spent in the module's solve step (zero on a cache hit).
    pub solve: Duration,
    /// Modules whose triggers were evaluated, the winner included.
    pub modules_tried: usize,
    pub cache: CacheStatus,
}

/// A dispatch bundled with what happened along the way.
#[derive(Debug, Clone)]
pub struct AnswerRun {
    pub envelope: Envelope,
    /// Primary type of the module that matched.
    pub module: Option<AnswerType>,
    pub matched: Option<Match>,
    pub metrics: RunMetrics,
}

#[derive(Debug, Default)]
pub struct Stats {
    queries: AtomicU64,
    triggered: AtomicU64,
    solves: AtomicU64,
    cache_hits: AtomicU64,
    cache_stores: AtomicU64,
    errors: AtomicU64,
    timeouts: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub queries: u64,
    pub triggered: u64,
    pub solves: u64,
    pub cache_hits: u64,
    pub cache_stores: u64,
    pub errors: u64,
    pub timeouts: u64,
}

impl Stats {
    pub(crate) fn record(&self, run: &AnswerRun) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if !run.envelope.triggered {
            return;
        }
        self.triggered.fetch_add(1, Ordering::Relaxed);

        match run.metrics.cache {
            CacheStatus::Hit => {
                self.cache_hits.fetch_add(1, Ordering::Relaxed);
                return;
            }
            CacheStatus::Stored => {
                self.cache_stores.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }

        self.solves.fetch_add(1, Ordering::Relaxed);
        if let Some(err) = &run.envelope.err {
            self.errors.fetch_add(1, Ordering::Relaxed);
            if err.is_timeout() {
                self.timeouts.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            triggered: self.triggered.load(Ordering::Relaxed),
            solves: self.solves.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_stores: self.cache_stores.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
        }
    }
}
