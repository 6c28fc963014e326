//! Chunked map-reduce summarization of a repository.
//!
//! The detailed path orders files, packs them into bounded chunks, asks the
//! completer for one summary per chunk and combines the partial summaries with
//! one more call. The quick path sends a single prompt built from the
//! directory tree and language statistics.

pub mod analyzer;
pub mod error;
pub mod explain;
pub mod pipeline;
pub mod progress;
pub mod prompts;
pub mod quick;
pub mod reducer;
pub mod summarizer;

mod call;

pub use analyzer::Analyzer;
pub use error::{PipelineError, Result};
pub use pipeline::{Pipeline, PipelineOptions, PipelineState};
pub use progress::{ChannelSink, NullSink, ProgressEvent, ProgressSink, Stage};
pub use tokio_util::sync::CancellationToken;
