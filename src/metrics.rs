// src/metrics.rs
//
// Observability counters for the analyser. Export via logs or whatever
// telemetry surface the host owns; nothing here affects the returned
// velocity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct AnalyzerMetrics {
    pub samples_pushed: Arc<AtomicU64>,
    pub queries: Arc<AtomicU64>,
    pub warmup_queries: Arc<AtomicU64>,
    pub tilted_queries: Arc<AtomicU64>,
    pub shake_flags: Arc<AtomicU64>,
    pub amplitude_flags: Arc<AtomicU64>,
    pub freq_flags: Arc<AtomicU64>,
    pub started_at: Instant,
}

impl AnalyzerMetrics {
    pub fn new() -> Self {
        Self {
            samples_pushed: Arc::new(AtomicU64::new(0)),
            queries: Arc::new(AtomicU64::new(0)),
            warmup_queries: Arc::new(AtomicU64::new(0)),
            tilted_queries: Arc::new(AtomicU64::new(0)),
            shake_flags: Arc::new(AtomicU64::new(0)),
            amplitude_flags: Arc::new(AtomicU64::new(0)),
            freq_flags: Arc::new(AtomicU64::new(0)),
            started_at: Instant::now(),
        }
    }

    pub fn inc(&self, counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            samples_pushed: self.samples_pushed.load(Ordering::Relaxed),
            queries: self.queries.load(Ordering::Relaxed),
            warmup_queries: self.warmup_queries.load(Ordering::Relaxed),
            tilted_queries: self.tilted_queries.load(Ordering::Relaxed),
            shake_flags: self.shake_flags.load(Ordering::Relaxed),
            amplitude_flags: self.amplitude_flags.load(Ordering::Relaxed),
            freq_flags: self.freq_flags.load(Ordering::Relaxed),
            elapsed_secs: self.started_at.elapsed().as_secs_f64(),
        }
    }
}

impl Default for AnalyzerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub samples_pushed: u64,
    pub queries: u64,
    pub warmup_queries: u64,
    pub tilted_queries: u64,
    pub shake_flags: u64,
    pub amplitude_flags: u64,
    pub freq_flags: u64,
    pub elapsed_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = AnalyzerMetrics::new();
        let summary = metrics.summary();
        assert_eq!(summary.samples_pushed, 0);
        assert_eq!(summary.queries, 0);
        assert_eq!(summary.tilted_queries, 0);
    }

    #[test]
    fn test_inc_reflected_in_summary() {
        let metrics = AnalyzerMetrics::new();
        metrics.inc(&metrics.queries);
        metrics.inc(&metrics.queries);
        metrics.inc(&metrics.warmup_queries);

        let summary = metrics.summary();
        assert_eq!(summary.queries, 2);
        assert_eq!(summary.warmup_queries, 1);
    }
}
