use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A per-chunk completion call failed. `chunk` is 1-based.
    #[error("failed to analyze chunk {chunk}: {source}")]
    Completion {
        chunk: usize,
        #[source]
        source: anyhow::Error,
    },

    /// The call combining partial summaries failed.
    #[error("failed to generate summary: {source}")]
    Reduction {
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    QuickSummary(anyhow::Error),

    #[error("failed to explain {}: {source}", .path.display())]
    Explain {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("analysis cancelled")]
    Cancelled,

    #[error("no files to analyze")]
    EmptyCorpus,
}

impl PipelineError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PipelineError::Cancelled)
    }
}
