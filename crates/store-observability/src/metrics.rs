//! Platform-level timing metrics.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use store_core::RequestId;

/// Metrics for a single request, finalized once the response is complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Section timings.
    pub sections: HashMap<String, SectionMetrics>,
    /// The upstream product fetch, if one was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<UpstreamMetrics>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl RequestMetrics {
    /// One-line human summary, printed at request completion.
    pub fn to_summary(&self) -> String {
        let shell = self
            .time_to_shell_us
            .map(|us| format!("{}us", us))
            .unwrap_or_else(|| "-".to_string());
        let upstream = match &self.upstream {
            Some(u) => format!(
                "upstream={} {}us",
                u.status_code
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "err".to_string()),
                u.duration_us
            ),
            None => "upstream=-".to_string(),
        };
        format!(
            "request={} shell={} sections={} {} total={}us",
            self.request_id,
            shell,
            self.sections.len(),
            upstream,
            self.total_duration_us
        )
    }
}

/// Metrics for a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Section name.
    pub name: String,
    /// Time from request start to section sent (microseconds).
    pub sent_us: u64,
    /// Bytes sent for this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
}

/// Metrics for the upstream product fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamMetrics {
    /// URL fetched.
    pub url: String,
    /// Fetch duration (microseconds).
    pub duration_us: u64,
    /// HTTP status code, absent on transport failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Whether the fetch produced a usable response.
    pub success: bool,
}

/// Collector for request metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    sections: Vec<(String, Instant, Option<usize>)>,
    upstream: Option<UpstreamMetrics>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            sections: Vec::new(),
            upstream: None,
        }
    }

    /// Set workload name.
    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    /// Set route path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record shell sent.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Record a section sent with its payload size.
    pub fn record_section_sent(&mut self, name: &str, bytes: Option<usize>) {
        self.sections.push((name.to_string(), Instant::now(), bytes));
    }

    /// Record the upstream product fetch.
    pub fn record_upstream(
        &mut self,
        url: &str,
        duration: Duration,
        status_code: Option<u16>,
        success: bool,
    ) {
        self.upstream = Some(UpstreamMetrics {
            url: url.to_string(),
            duration_us: duration.as_micros() as u64,
            status_code,
            success,
        });
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        let start = self.start;
        let sections = self
            .sections
            .into_iter()
            .map(|(name, sent, bytes)| {
                let sent_us = sent.duration_since(start).as_micros() as u64;
                (name.clone(), SectionMetrics { name, sent_us, bytes })
            })
            .collect();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            route: self.route,
            time_to_shell_us: self
                .shell_sent
                .map(|t| t.duration_since(start).as_micros() as u64),
            sections,
            upstream: self.upstream,
            total_duration_us: start.elapsed().as_micros() as u64,
            status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_collects_sections_and_upstream() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-1"));
        metrics.set_workload("product-detail");
        metrics.record_shell_sent();
        metrics.record_section_sent("status", Some(120));
        metrics.record_section_sent("detail", Some(4096));
        metrics.record_upstream(
            "https://api.example.com/products/16",
            Duration::from_millis(12),
            Some(200),
            true,
        );

        let finalized = metrics.finalize(Some(200));
        assert_eq!(finalized.sections.len(), 2);
        assert_eq!(finalized.sections["detail"].bytes, Some(4096));
        assert!(finalized.time_to_shell_us.is_some());
        assert_eq!(finalized.upstream.as_ref().unwrap().status_code, Some(200));
        assert_eq!(finalized.status_code, Some(200));
    }

    #[test]
    fn summary_mentions_upstream_status() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-2"));
        metrics.record_upstream("u", Duration::from_millis(1), Some(404), false);
        let summary = metrics.finalize(Some(200)).to_summary();
        assert!(summary.contains("upstream=404"));
    }

    #[test]
    fn summary_without_upstream() {
        let metrics = MetricsCollector::new(RequestId::from_string("req-3"));
        assert!(metrics.finalize(None).to_summary().contains("upstream=-"));
    }
}
