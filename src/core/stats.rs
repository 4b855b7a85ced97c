//! Per-logger counters
//!
//! Tracks how many records a logger emitted, suppressed by level gating, or
//! failed to hand to its printer.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one logger instance
///
/// # Example
///
/// ```
/// use rust_logger_facade::LoggerStats;
///
/// let stats = LoggerStats::new();
/// stats.record_emitted();
/// stats.record_suppressed();
///
/// assert_eq!(stats.emitted(), 1);
/// assert_eq!(stats.suppressed(), 1);
/// assert_eq!(stats.failed(), 0);
/// ```
#[derive(Debug, Default)]
pub struct LoggerStats {
    /// Records that passed gating and were printed
    emitted: AtomicU64,

    /// Records dropped by level gating
    suppressed: AtomicU64,

    /// Records whose printer returned an error
    failed: AtomicU64,
}

impl LoggerStats {
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of printed-or-failed records that failed, as a percentage
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed() as f64;
        let total = self.emitted() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}
