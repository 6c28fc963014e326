use repolens_core::Completer;
use tokio_util::sync::CancellationToken;

pub(crate) enum CallError {
    Cancelled,
    Failed(anyhow::Error),
}

/// One completion call that gives up as soon as `cancel` fires.
pub(crate) async fn complete(
    completer: &dyn Completer,
    prompt: &str,
    cancel: &CancellationToken,
) -> Result<String, CallError> {
    if cancel.is_cancelled() {
        return Err(CallError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CallError::Cancelled),
        result = completer.complete(prompt) => result.map_err(CallError::Failed),
    }
}
