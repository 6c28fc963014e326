use super::analyze::cancel_on_ctrl_c;
use super::ui;
use super::utils::{load_config, render_markdown_answer, selected_profile};
use anyhow::Result;
use clap::Args;
use console::Style;
use repolens_llm::build_completer;
use repolens_pipeline::{Analyzer, CancellationToken};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// File to explain
    #[arg(short, long)]
    pub file: PathBuf,

    /// Profile from ~/.repolens/config.yaml (default profile otherwise)
    #[arg(long)]
    pub profile: Option<String>,
}

pub async fn handle_explain(args: ExplainArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, Path::new("."))?;
    let profile = selected_profile(args.profile.as_deref())?;
    let completer = build_completer(&config.llm, profile.as_ref())?;

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(&cancel);

    ui::print_panel(
        "Running",
        &format!("Explaining {}...", args.file.display()),
        Style::new().yellow(),
        None,
    );

    let analyzer = Analyzer::new(config, completer);
    let explanation = analyzer.explain(&args.file, &cancel).await?;

    ui::print_header(&format!("Explanation of {}", args.file.display()));
    println!("{}", render_markdown_answer(&explanation));
    Ok(())
}
