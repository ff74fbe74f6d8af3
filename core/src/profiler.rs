//! Wall-clock profiling marks for validating performance-sensitive paths.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::debug;

/// Sentinel duration returned by [`Profiler::measure`] when the start label
/// has no recorded mark. Measuring against a missing mark is not a failure.
pub const MISSING_MARK: f64 = -1.0;

/// Maps labels to monotonic timestamps.
#[derive(Debug)]
pub struct Profiler {
    epoch: Instant,
    marks: BTreeMap<String, Instant>,
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler {
    /// Creates a profiler whose epoch is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            marks: BTreeMap::new(),
        }
    }

    /// Records `label` at the current instant, replacing any earlier mark
    /// under the same label.
    pub fn mark(&mut self, label: impl Into<String>) {
        self.marks.insert(label.into(), Instant::now());
    }

    /// Measures the milliseconds elapsed since the mark recorded under
    /// `start_label`, logging the result under `label`.
    ///
    /// Returns [`MISSING_MARK`] when no mark exists for `start_label`.
    #[must_use]
    pub fn measure(&self, label: &str, start_label: &str) -> f64 {
        let Some(start) = self.marks.get(start_label) else {
            return MISSING_MARK;
        };
        let ms = start.elapsed().as_secs_f64() * 1_000.0;
        debug!(label, start = start_label, ms, "profiler measurement");
        ms
    }

    /// Milliseconds elapsed since the profiler was created.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1_000.0
    }

    /// Returns `true` if a mark exists under `label`.
    #[must_use]
    pub fn has_mark(&self, label: &str) -> bool {
        self.marks.contains_key(label)
    }

    /// Drops every recorded mark.
    pub fn clear(&mut self) {
        self.marks.clear();
    }
}
