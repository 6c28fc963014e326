use super::progress::ProgressView;
use super::ui;
use super::utils::{load_config, render_markdown_answer, selected_profile, timestamp};
use anyhow::{Context, Result};
use clap::Args;
use repolens_core::report::render_markdown;
use repolens_llm::build_completer;
use repolens_pipeline::{Analyzer, CancellationToken};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Repository to analyze
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Where to write the Markdown overview
    #[arg(short, long, default_value = "SUMMARY.md")]
    pub output: PathBuf,

    /// Profile from ~/.repolens/config.yaml (default profile otherwise)
    #[arg(long)]
    pub profile: Option<String>,

    /// Summarize every file instead of a single quick prompt
    #[arg(long)]
    pub detailed: bool,

    /// Maximum chunk size in bytes
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Chunk summaries in flight at once
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,
}

/// Cancel `token` on Ctrl-C.
pub fn cancel_on_ctrl_c(token: &CancellationToken) {
    let token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling");
            token.cancel();
        }
    });
}

/// Terminal rendering of the summary text.
fn final_analysis(description: &str) -> String {
    render_markdown_answer(description.trim())
}

pub async fn handle_analyze(
    args: AnalyzeArgs,
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let mut config = load_config(config_path, &args.repo)?;
    if let Some(n) = args.chunk_size {
        config.chunking.max_chars = n;
    }
    if let Some(n) = args.concurrency {
        config.summary.concurrency = n;
    }
    let detailed = args.detailed || config.summary.detailed;

    let profile = selected_profile(args.profile.as_deref())?;
    let completer = build_completer(&config.llm, profile.as_ref())?;

    ui::print_header(&format!("Analyzing {}", args.repo.display()));
    ui::print_key_value("Mode", if detailed { "detailed" } else { "quick" });
    if detailed {
        ui::print_key_value("Chunk size", &config.chunking.max_chars.to_string());
        ui::print_key_value("Concurrency", &config.summary.concurrency.to_string());
    }

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(&cancel);

    let analyzer = Analyzer::new(config, completer);
    let view = ProgressView::new(verbose);
    let result = analyzer.analyze(&args.repo, detailed, &view, &cancel).await;
    view.finish();
    let result = result?;

    ui::print_header("Final Analysis");
    println!("{}", final_analysis(&result.repo.description));

    let markdown = render_markdown(&result, &timestamp());
    tokio::fs::write(&args.output, markdown)
        .await
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    ui::print_success(&format!(
        "Overview of {} written to {}",
        result.repo.name,
        args.output.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_analysis_renders_description() {
        let out = final_analysis("\nA command line tool that summarizes repositories.\n");
        assert!(out.contains("summarizes"));
        assert!(out.contains("repositories"));
    }
}
