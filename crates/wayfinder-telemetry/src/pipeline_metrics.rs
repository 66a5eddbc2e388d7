use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for cross-task pipeline monitoring
#[derive(Clone, Default)]
pub struct PipelineMetrics {
    // Recognition side
    pub utterances_received: Arc<AtomicU64>,
    pub no_match_cycles: Arc<AtomicU64>,
    pub recognition_errors: Arc<AtomicU64>,

    // Intent outcomes
    pub intents_navigate: Arc<AtomicU64>,
    pub intents_find: Arc<AtomicU64>,

    // Vision side
    pub captures_triggered: Arc<AtomicU64>,
    pub detections_received: Arc<AtomicU64>,
    pub objects_found: Arc<AtomicU64>,

    // Output side
    pub announcements_spoken: Arc<AtomicU64>,

    // Activity
    pub last_utterance_time: Arc<RwLock<Option<Instant>>>,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_utterance(&self) {
        self.utterances_received.fetch_add(1, Ordering::Relaxed);
        *self.last_utterance_time.write() = Some(Instant::now());
    }

    pub fn record_no_match(&self) {
        self.no_match_cycles.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_recognition_error(&self) {
        self.recognition_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_navigate(&self) {
        self.intents_navigate.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_find(&self) {
        self.intents_find.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_capture(&self) {
        self.captures_triggered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detections(&self, count: u64) {
        self.detections_received.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_object_found(&self) {
        self.objects_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_announcement(&self) {
        self.announcements_spoken.fetch_add(1, Ordering::Relaxed);
    }

    /// Consistent-enough point-in-time copy for display and tests.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            utterances_received: self.utterances_received.load(Ordering::Relaxed),
            no_match_cycles: self.no_match_cycles.load(Ordering::Relaxed),
            recognition_errors: self.recognition_errors.load(Ordering::Relaxed),
            intents_navigate: self.intents_navigate.load(Ordering::Relaxed),
            intents_find: self.intents_find.load(Ordering::Relaxed),
            captures_triggered: self.captures_triggered.load(Ordering::Relaxed),
            detections_received: self.detections_received.load(Ordering::Relaxed),
            objects_found: self.objects_found.load(Ordering::Relaxed),
            announcements_spoken: self.announcements_spoken.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of the pipeline counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub utterances_received: u64,
    pub no_match_cycles: u64,
    pub recognition_errors: u64,
    pub intents_navigate: u64,
    pub intents_find: u64,
    pub captures_triggered: u64,
    pub detections_received: u64,
    pub objects_found: u64,
    pub announcements_spoken: u64,
}
