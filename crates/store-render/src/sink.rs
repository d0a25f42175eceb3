//! Platform-controlled streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use store_core::{LifecyclePhase, TimingContext, WorkloadError};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over the underlying sink so it works with any `Sink<Vec<u8>>`,
/// including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        if self.state == SinkState::Initial {
            return Err(WorkloadError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(WorkloadError::StreamError(
                "Sink already completed".to_string(),
            ));
        }

        self.timing.mark_section_start(name);
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        if self.state == SinkState::Initial {
            return Err(WorkloadError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(WorkloadError::StreamError(
                "Sink already completed".to_string(),
            ));
        }

        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }

    /// Complete the response.
    pub fn complete(&mut self) {
        self.state = SinkState::Completed;
        self.timing.mark("complete");
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(last) => LifecyclePhase::SectionSent(last.clone()),
                None => LifecyclePhase::ShellSent,
            },
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::StreamExt;

    fn test_sink() -> (
        StreamingSink<mpsc::UnboundedSender<Vec<u8>>, mpsc::SendError>,
        mpsc::UnboundedReceiver<Vec<u8>>,
    ) {
        let (tx, rx) = mpsc::unbounded();
        (StreamingSink::new(tx, TimingContext::new()), rx)
    }

    #[test]
    fn section_before_shell_is_rejected() {
        let (mut sink, _rx) = test_sink();
        let err = block_on(sink.send_section("status", "<p></p>")).unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
    }

    #[test]
    fn shell_then_sections_stream_in_order() {
        let (mut sink, mut rx) = test_sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("status", "<p>loading</p>").await.unwrap();
            sink.send_section("detail", "<section/>").await.unwrap();
        });
        assert_eq!(sink.sections_sent(), ["status", "detail"]);
        assert_eq!(
            sink.phase(),
            LifecyclePhase::SectionSent("detail".to_string())
        );

        drop(sink);
        let frames: Vec<Vec<u8>> = block_on(rx.by_ref().collect());
        assert_eq!(frames[0], b"<html>");
        assert_eq!(frames[1], b"<p>loading</p>");
    }

    #[test]
    fn shell_cannot_be_sent_twice() {
        let (mut sink, _rx) = test_sink();
        block_on(sink.send_shell("<html>")).unwrap();
        assert!(block_on(sink.send_shell("<html>")).is_err());
    }

    #[test]
    fn completed_sink_rejects_sections() {
        let (mut sink, _rx) = test_sink();
        block_on(sink.send_shell("<html>")).unwrap();
        sink.complete();
        assert!(block_on(sink.send_section("late", "<p></p>")).is_err());
        assert_eq!(sink.phase(), LifecyclePhase::Completion);
    }
}
