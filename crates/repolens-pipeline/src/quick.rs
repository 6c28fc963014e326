use crate::call::{self, CallError};
use crate::error::{PipelineError, Result};
use crate::progress::{ProgressEvent, ProgressSink, Stage};
use crate::prompts;
use repolens_core::{Completer, LanguageStats};
use tokio_util::sync::CancellationToken;

/// `"Go (70.0%), Python (30.0%)"`, sorted by the formatted strings.
pub fn format_languages(languages: &LanguageStats) -> String {
    let mut parts: Vec<String> = languages
        .iter()
        .map(|(lang, pct)| format!("{} ({:.1}%)", lang, pct))
        .collect();
    parts.sort();
    parts.join(", ")
}

/// One-call overview built from the directory tree and language statistics.
pub async fn quick_summary(
    dir_structure: &str,
    languages: &LanguageStats,
    completer: &dyn Completer,
    sink: &dyn ProgressSink,
    cancel: &CancellationToken,
) -> Result<String> {
    sink.emit(ProgressEvent::new(Stage::PreparingQuickSummary, 0, 1));

    let prompt = prompts::quick_prompt(dir_structure, &format_languages(languages));
    let text = call::complete(completer, &prompt, cancel)
        .await
        .map_err(|e| match e {
            CallError::Cancelled => PipelineError::Cancelled,
            CallError::Failed(source) => PipelineError::QuickSummary(source),
        })?;

    sink.emit(ProgressEvent::with_response(
        Stage::QuickSummary,
        1,
        1,
        text.clone(),
    ));
    Ok(text)
}
