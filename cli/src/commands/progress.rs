use super::ui;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use repolens_pipeline::{ProgressEvent, ProgressSink, Stage};
use std::sync::Mutex;
use std::time::Duration;

/// Terminal rendering of pipeline progress: a counter bar for files and
/// chunks, a spinner around single calls.
pub struct ProgressView {
    verbose: bool,
    current: Mutex<Option<(Stage, ProgressBar)>>,
}

/// Stages that share one bar on screen.
fn bar_stage(stage: Stage) -> Stage {
    match stage {
        Stage::AnalysisResponse => Stage::AnalyzingChunks,
        Stage::FinalSummary => Stage::GeneratingSummary,
        Stage::QuickSummary => Stage::PreparingQuickSummary,
        other => other,
    }
}

fn new_bar(stage: Stage, total: usize) -> ProgressBar {
    match stage {
        Stage::ProcessingFiles | Stage::AnalyzingChunks => {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:30.cyan/blue} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            pb
        }
        _ => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        }
    }
}

impl ProgressView {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            current: Mutex::new(None),
        }
    }

    /// Clear whatever bar is still on screen.
    pub fn finish(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some((_, bar)) = current.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl ProgressSink for ProgressView {
    fn emit(&self, event: ProgressEvent) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };

        let key = bar_stage(event.stage);
        if !matches!(&*current, Some((stage, _)) if *stage == key) {
            if let Some((_, bar)) = current.take() {
                bar.finish_and_clear();
            }
            *current = Some((key, new_bar(key, event.total)));
        }
        let Some((_, bar)) = current.as_ref() else {
            return;
        };

        match event.stage {
            Stage::ProcessingFiles => {
                bar.set_position(event.current as u64);
                bar.set_message(event.stage.label());
            }
            Stage::AnalyzingChunks => {
                bar.set_message(format!(
                    "{} {}/{}",
                    event.stage.label(),
                    event.current,
                    event.total
                ));
            }
            Stage::AnalysisResponse => {
                bar.set_position(event.current as u64);
                if self.verbose {
                    let title = format!("{} {}/{}", event.stage, event.current, event.total);
                    bar.suspend(|| {
                        ui::print_panel(
                            &title,
                            &event.response,
                            Style::new().blue(),
                            Some(Style::new().dim()),
                        )
                    });
                }
            }
            Stage::PreparingQuickSummary | Stage::GeneratingSummary => {
                bar.set_message(format!("{}...", event.stage.label()));
            }
            Stage::QuickSummary | Stage::FinalSummary => {
                bar.finish_with_message(format!("{} ready", event.stage.label()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_share_bars() {
        assert_eq!(bar_stage(Stage::AnalysisResponse), Stage::AnalyzingChunks);
        assert_eq!(bar_stage(Stage::FinalSummary), Stage::GeneratingSummary);
        assert_eq!(bar_stage(Stage::ProcessingFiles), Stage::ProcessingFiles);
    }

    #[test]
    fn test_view_follows_stages() {
        let view = ProgressView::new(false);
        view.emit(ProgressEvent::new(Stage::ProcessingFiles, 1, 2));
        view.emit(ProgressEvent::new(Stage::AnalyzingChunks, 1, 3));
        view.emit(ProgressEvent::with_response(
            Stage::AnalysisResponse,
            1,
            3,
            "partial".to_string(),
        ));

        {
            let current = view.current.lock().unwrap();
            let (stage, bar) = current.as_ref().unwrap();
            assert_eq!(*stage, Stage::AnalyzingChunks);
            assert_eq!(bar.position(), 1);
            assert_eq!(bar.length(), Some(3));
        }

        view.finish();
        assert!(view.current.lock().unwrap().is_none());
    }
}
