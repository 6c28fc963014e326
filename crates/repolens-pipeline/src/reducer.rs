use crate::call::{self, CallError};
use crate::error::{PipelineError, Result};
use crate::progress::{ProgressEvent, ProgressSink, Stage};
use crate::prompts;
use repolens_core::models::ChunkSummary;
use repolens_core::Completer;
use tokio_util::sync::CancellationToken;

/// Combine partial summaries into one text.
///
/// A single summary is returned as is, without a completion call.
pub async fn reduce_summaries(
    mut summaries: Vec<ChunkSummary>,
    completer: &dyn Completer,
    sink: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> Result<String> {
    match summaries.len() {
        0 => return Err(PipelineError::EmptyCorpus),
        1 => return Ok(summaries.remove(0)),
        _ => {}
    }

    let prompt = prompts::reduce_prompt(&summaries);
    sink.emit(ProgressEvent::new(Stage::GeneratingSummary, 0, 1));

    let text = call::complete(completer, &prompt, cancel)
        .await
        .map_err(|e| match e {
            CallError::Cancelled => PipelineError::Cancelled,
            CallError::Failed(source) => PipelineError::Reduction { source },
        })?;

    sink.emit(ProgressEvent::with_response(
        Stage::FinalSummary,
        1,
        1,
        text.clone(),
    ));
    Ok(text)
}
