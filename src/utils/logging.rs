use log::{Level, log_enabled, warn};
use std::time::{Duration, Instant};

/// Scoped timer that traces how long a section of the frame took.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Logs a warning when a frame took longer than its fixed time step.
///
/// Returns whether the budget was exceeded.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f64) -> bool {
    let elapsed_ms = duration.as_secs_f64() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("Frame exceeded budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}
