//! Audit orchestration
//!
//! Ties discovery, spell checking, and link probing together: discovers the
//! page set, fans page processing out over a bounded worker pool, and
//! aggregates findings, broken links, and run statistics.

pub mod coordinator;

pub use coordinator::{run_audit, AuditOutcome, Coordinator};

use std::sync::atomic::{AtomicU64, Ordering};

/// Run-wide counters, safe to update from concurrent page workers
#[derive(Debug, Default)]
pub struct RunStats {
    pages_processed: AtomicU64,
    pages_failed: AtomicU64,
    words_checked: AtomicU64,
    errors_found: AtomicU64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_page_processed(&self) {
        self.pages_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_page_failed(&self) {
        self.pages_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_words_checked(&self, count: u64) {
        self.words_checked.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_errors_found(&self, count: u64) {
        self.errors_found.fetch_add(count, Ordering::Relaxed);
    }

    /// Takes a consistent point-in-time copy of the counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pages_processed: self.pages_processed.load(Ordering::Relaxed),
            pages_failed: self.pages_failed.load(Ordering::Relaxed),
            words_checked: self.words_checked.load(Ordering::Relaxed),
            errors_found: self.errors_found.load(Ordering::Relaxed),
        }
    }
}

/// Plain-value view of [`RunStats`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsSnapshot {
    pub pages_processed: u64,
    pub pages_failed: u64,
    pub words_checked: u64,
    pub errors_found: u64,
}
