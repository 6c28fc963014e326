//! Progress reporting for pipeline runs.
//!
//! The pipeline emits [`ProgressEvent`]s synchronously from the task driving
//! it. Within one stage, `current` never decreases, also when chunk calls run
//! concurrently. Sinks should return quickly; a blocking sink stalls the run.

use std::fmt;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    PreparingQuickSummary,
    QuickSummary,
    ProcessingFiles,
    AnalyzingChunks,
    AnalysisResponse,
    GeneratingSummary,
    FinalSummary,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::PreparingQuickSummary => "Preparing quick summary",
            Stage::QuickSummary => "Quick summary",
            Stage::ProcessingFiles => "Processing files",
            Stage::AnalyzingChunks => "Analyzing chunks",
            Stage::AnalysisResponse => "Analysis response",
            Stage::GeneratingSummary => "Generating summary",
            Stage::FinalSummary => "Final summary",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub stage: Stage,
    pub current: usize,
    pub total: usize,
    /// Completion text for response stages, empty otherwise.
    pub response: String,
}

impl ProgressEvent {
    pub fn new(stage: Stage, current: usize, total: usize) -> Self {
        Self {
            stage,
            current,
            total,
            response: String::new(),
        }
    }

    pub fn with_response(stage: Stage, current: usize, total: usize, response: String) -> Self {
        Self {
            stage,
            current,
            total,
            response,
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn emit(&self, event: ProgressEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _event: ProgressEvent) {}
}

/// Forwards events to an unbounded channel, for consumers on another task.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ProgressSink for ChannelSink {
    fn emit(&self, event: ProgressEvent) {
        // A dropped receiver only means nobody is watching.
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_stage_labels() {
        assert_eq!(Stage::PreparingQuickSummary.to_string(), "Preparing quick summary");
        assert_eq!(Stage::AnalysisResponse.label(), "Analysis response");
        assert_eq!(Stage::FinalSummary.label(), "Final summary");
    }

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |event: ProgressEvent| seen.lock().unwrap().push(event.stage);
        sink.emit(ProgressEvent::new(Stage::ProcessingFiles, 1, 2));
        assert_eq!(*seen.lock().unwrap(), vec![Stage::ProcessingFiles]);
    }

    #[tokio::test]
    async fn test_channel_sink() {
        let (sink, mut rx) = ChannelSink::new();
        sink.emit(ProgressEvent::with_response(
            Stage::QuickSummary,
            1,
            1,
            "done".to_string(),
        ));
        let event = rx.recv().await.unwrap();
        assert_eq!(event.stage, Stage::QuickSummary);
        assert_eq!(event.response, "done");

        drop(rx);
        sink.emit(ProgressEvent::new(Stage::FinalSummary, 1, 1));
    }
}
