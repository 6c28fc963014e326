use crate::call::{self, CallError};
use crate::error::{PipelineError, Result};
use crate::progress::{ProgressEvent, ProgressSink, Stage};
use crate::prompts;
use futures::stream::{self, StreamExt};
use repolens_core::models::ChunkSummary;
use repolens_core::{Chunk, Completer};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Summarize every chunk, returning summaries in chunk order.
///
/// Up to `concurrency` calls are in flight at once. The first failure by chunk
/// index ends the run; calls still in flight are dropped. With a concurrency
/// of one, no call is issued after a failed one.
pub async fn summarize_chunks(
    chunks: &[Chunk],
    completer: &dyn Completer,
    concurrency: usize,
    sink: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> Result<Vec<ChunkSummary>> {
    let total = chunks.len();

    let mut responses = stream::iter(chunks.iter().enumerate())
        .map(|(idx, chunk)| {
            let index = idx + 1;
            sink.emit(ProgressEvent::new(Stage::AnalyzingChunks, index, total));
            let prompt = prompts::chunk_prompt(chunk);
            async move {
                debug!(chunk = index, total, bytes = chunk.len(), "summarizing chunk");
                (index, call::complete(completer, &prompt, cancel).await)
            }
        })
        .buffered(concurrency.max(1));

    let mut summaries = Vec::with_capacity(total);
    while let Some((index, result)) = responses.next().await {
        match result {
            Ok(text) => {
                sink.emit(ProgressEvent::with_response(
                    Stage::AnalysisResponse,
                    index,
                    total,
                    text.clone(),
                ));
                summaries.push(text);
            }
            Err(CallError::Cancelled) => return Err(PipelineError::Cancelled),
            Err(CallError::Failed(source)) => {
                warn!(chunk = index, error = %source, "chunk analysis failed");
                return Err(PipelineError::Completion {
                    chunk: index,
                    source,
                });
            }
        }
    }

    Ok(summaries)
}
