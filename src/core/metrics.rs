//! Logger metrics for observability
//!
//! Counters describing what the dispatch core did: records delivered,
//! messages truncated, rendering and sink failures, buffer allocations.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use ultralog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_sink_failure();
///
/// assert_eq!(metrics.records_dispatched(), 1);
/// assert_eq!(metrics.sink_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records the sink accepted
    records_dispatched: AtomicU64,

    /// Messages cut at the maximum length
    truncated_messages: AtomicU64,

    /// Messages replaced by the fallback text
    format_failures: AtomicU64,

    /// Records the sink rejected or panicked on
    sink_failures: AtomicU64,

    /// Formatting buffer (re)allocations
    buffer_allocations: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            records_dispatched: AtomicU64::new(0),
            truncated_messages: AtomicU64::new(0),
            format_failures: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            buffer_allocations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_dispatched(&self) -> u64 {
        self.records_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn truncated_messages(&self) -> u64 {
        self.truncated_messages.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_failures(&self) -> u64 {
        self.format_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn buffer_allocations(&self) -> u64 {
        self.buffer_allocations.load(Ordering::Relaxed)
    }

    /// Record a delivered record. Returns the previous count.
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.records_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_truncated(&self) -> u64 {
        self.truncated_messages.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_failure(&self) -> u64 {
        self.format_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_buffer_allocation(&self) -> u64 {
        self.buffer_allocations.fetch_add(1, Ordering::Relaxed)
    }

    /// Sink failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been dispatched.
    pub fn sink_failure_rate(&self) -> f64 {
        let failed = self.sink_failures() as f64;
        let total = self.records_dispatched() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.records_dispatched.store(0, Ordering::Relaxed);
        self.truncated_messages.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
        self.buffer_allocations.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_dispatched: AtomicU64::new(self.records_dispatched()),
            truncated_messages: AtomicU64::new(self.truncated_messages()),
            format_failures: AtomicU64::new(self.format_failures()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            buffer_allocations: AtomicU64::new(self.buffer_allocations()),
        }
    }
}
