use crate::call::{self, CallError};
use crate::error::{PipelineError, Result};
use crate::prompts;
use repolens_core::Completer;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Ask for a walkthrough of one file.
pub async fn explain_file(
    path: &Path,
    content: &str,
    completer: &dyn Completer,
    cancel: &CancellationToken,
) -> Result<String> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let prompt = prompts::explain_prompt(&filename, content);

    call::complete(completer, &prompt, cancel)
        .await
        .map_err(|e| match e {
            CallError::Cancelled => PipelineError::Cancelled,
            CallError::Failed(source) => PipelineError::Explain {
                path: path.to_path_buf(),
                source,
            },
        })
}
