use crate::pipeline::{Pipeline, PipelineOptions};
use crate::progress::ProgressSink;
use anyhow::{Context, Result};
use repolens_config::Config;
use repolens_core::dependencies::find_dependencies;
use repolens_core::scanner::{find_entry_points, Repository};
use repolens_core::structure::build_dir_structure;
use repolens_core::{AnalysisResult, Completer, RepoInfo};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub const GENERATED_WITH: &str = "repolens";

/// Repository scan plus summarization, end to end.
pub struct Analyzer {
    config: Config,
    pipeline: Pipeline,
}

impl Analyzer {
    pub fn new(config: Config, completer: Arc<dyn Completer>) -> Self {
        let pipeline = Pipeline::new(PipelineOptions::from_config(&config), completer);
        Self { config, pipeline }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub async fn analyze(
        &self,
        repo_path: &Path,
        detailed: bool,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult> {
        let repo = Repository::open(repo_path, &self.config.core)
            .context("failed to open repository")?;

        let files = repo.list_files();
        info!(root = %repo.root().display(), files = files.len(), detailed, "scanned repository");

        let languages = repo
            .language_stats(&files)
            .context("failed to get language statistics")?;
        let dir_structure = build_dir_structure(&files);

        let (contents, description) = if detailed {
            let contents = repo.read_all(&files)?;
            let description = self
                .pipeline
                .summarize(
                    contents.iter().map(|(p, c)| (p.clone(), c.clone())),
                    true,
                    sink,
                    cancel,
                )
                .await?;
            (contents, description)
        } else {
            let contents = repo.important_files(&files)?;
            let description = self
                .pipeline
                .quick(&dir_structure, &languages, sink, cancel)
                .await?;
            (contents, description)
        };

        Ok(AnalysisResult {
            repo: RepoInfo {
                name: repo.name(),
                description,
                languages,
                components: Vec::new(),
                entry_points: find_entry_points(&files),
                dependencies: find_dependencies(&contents),
            },
            architecture: String::new(),
            setup: String::new(),
            flow_diagram: String::new(),
            generated_with: GENERATED_WITH.to_string(),
        })
    }

    pub async fn explain(&self, file_path: &Path, cancel: &CancellationToken) -> Result<String> {
        let content = tokio::fs::read(file_path)
            .await
            .with_context(|| format!("failed to read file {}", file_path.display()))?;
        let content = String::from_utf8_lossy(&content);
        Ok(self.pipeline.explain(file_path, &content, cancel).await?)
    }
}
