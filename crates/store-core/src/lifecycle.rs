//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle phases for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, processing started.
    Start,
    /// Shell HTML has been flushed to client.
    ShellSent,
    /// A named section has been sent.
    SectionSent(String),
    /// Request completed successfully.
    Completion,
    /// An error occurred.
    Error(String),
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Mark section start.
    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section_{}_start", section));
    }

    /// Mark section sent.
    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{}_sent", section));
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.marks
            .get("shell_sent")
            .map(|t| t.duration_since(self.start))
    }

    /// Get time to first section.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.starts_with("section_") && k.ends_with("_sent"))
            .map(|(_, t)| t.duration_since(self.start))
            .min()
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_to_shell_requires_mark() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_shell().is_none());
        timing.mark("shell_sent");
        assert!(timing.time_to_shell().is_some());
    }

    #[test]
    fn first_section_is_minimum() {
        let mut timing = TimingContext::new();
        timing.mark_section_sent("status");
        timing.mark_section_sent("detail");
        let first = timing.time_to_first_section().unwrap();
        assert!(first <= timing.elapsed());
    }
}
