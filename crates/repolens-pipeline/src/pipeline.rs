use crate::error::{PipelineError, Result};
use crate::explain::explain_file;
use crate::progress::{ProgressEvent, ProgressSink, Stage};
use crate::quick::quick_summary;
use crate::reducer::reduce_summaries;
use crate::summarizer::summarize_chunks;
use repolens_config::Config;
use repolens_core::{select_files, Chunker, Completer, LanguageStats};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Upper bound on chunk length, in bytes.
    pub max_chars: usize,
    /// Chunk summaries in flight at once.
    pub concurrency: usize,
}

impl PipelineOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_chars: config.chunking.max_chars,
            concurrency: config.summary.concurrency,
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Selecting,
    Chunking,
    Summarizing,
    Reducing,
    QuickPrompt,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Tracks one run through the state machine, logging every transition.
struct Run {
    state: PipelineState,
}

impl Run {
    fn start() -> Self {
        Self {
            state: PipelineState::Idle,
        }
    }

    fn enter(&mut self, next: PipelineState) {
        debug!(from = %self.state, to = %next, "pipeline transition");
        self.state = next;
    }

    fn fail(&mut self, err: PipelineError) -> PipelineError {
        if err.is_cancelled() {
            info!(state = %self.state, "pipeline cancelled");
        } else {
            warn!(state = %self.state, error = %err, "pipeline failed");
        }
        self.state = PipelineState::Failed;
        err
    }
}

/// Drives a summarization run against one completer.
#[derive(Clone)]
pub struct Pipeline {
    options: PipelineOptions,
    completer: Arc<dyn Completer>,
}

impl Pipeline {
    pub fn new(options: PipelineOptions, completer: Arc<dyn Completer>) -> Self {
        Self { options, completer }
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    /// Select, chunk, summarize and reduce `files` (path -> content).
    pub async fn summarize<I, P, C>(
        &self,
        files: I,
        detailed: bool,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<String>
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        let mut run = Run::start();

        run.enter(PipelineState::Selecting);
        let corpus = select_files(files, detailed);
        if corpus.is_empty() {
            return Err(run.fail(PipelineError::EmptyCorpus));
        }

        run.enter(PipelineState::Chunking);
        let total = corpus.len();
        let mut chunker = Chunker::new(self.options.max_chars);
        for (idx, entry) in corpus.iter().enumerate() {
            sink.emit(ProgressEvent::new(Stage::ProcessingFiles, idx + 1, total));
            chunker.push(entry);
        }
        let chunks = chunker.finish();
        info!(
            files = total,
            chunks = chunks.len(),
            max_chars = self.options.max_chars,
            "corpus chunked"
        );

        run.enter(PipelineState::Summarizing);
        let summaries = summarize_chunks(
            &chunks,
            self.completer.as_ref(),
            self.options.concurrency,
            sink,
            cancel,
        )
        .await
        .map_err(|e| run.fail(e))?;

        if summaries.len() > 1 {
            run.enter(PipelineState::Reducing);
        }
        let description = reduce_summaries(summaries, self.completer.as_ref(), sink, cancel)
            .await
            .map_err(|e| run.fail(e))?;

        run.enter(PipelineState::Done);
        Ok(description)
    }

    /// Single-prompt overview from the directory tree and language mix.
    pub async fn quick(
        &self,
        dir_structure: &str,
        languages: &LanguageStats,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let mut run = Run::start();
        run.enter(PipelineState::QuickPrompt);
        let text = quick_summary(dir_structure, languages, self.completer.as_ref(), sink, cancel)
            .await
            .map_err(|e| run.fail(e))?;
        run.enter(PipelineState::Done);
        Ok(text)
    }

    pub async fn explain(
        &self,
        path: &Path,
        content: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        explain_file(path, content, self.completer.as_ref(), cancel).await
    }
}
