// Repository discovery: file listing, reading and language statistics
use crate::models::{Language, LanguageStats};
use anyhow::{bail, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use repolens_config::CoreConfig;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directories never descended into.
pub const DEPENDENCY_DIRS: &[&str] = &[
    "node_modules",
    "vendor",
    "dist",
    "build",
    ".venv",
    "venv",
    "env",
    "target",
    ".git",
];

/// Package manifests read for quick summaries.
pub const MANIFEST_FILES: &[&str] = &[
    "go.mod",
    "package.json",
    "requirements.txt",
    "Cargo.toml",
    "Gemfile",
    "composer.json",
    "pom.xml",
    "build.gradle",
];

/// File names treated as program entry points.
pub const ENTRY_POINT_FILES: &[&str] = &[
    "main.go",
    "main.rs",
    "main.py",
    "app.py",
    "index.js",
    "index.ts",
];

#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
    max_file_bytes: u64,
}

impl Repository {
    pub fn open(path: impl AsRef<Path>, config: &CoreConfig) -> Result<Self> {
        let path = path.as_ref();
        let root = path
            .canonicalize()
            .with_context(|| format!("repository path does not exist: {}", path.display()))?;
        if !root.is_dir() {
            bail!("repository path is not a directory: {}", root.display());
        }
        if !root.join(".git").exists() {
            debug!(root = %root.display(), "no .git directory, scanning as a plain tree");
        }

        Ok(Self {
            root,
            include: build_globset(&config.include_paths),
            exclude: build_globset(&config.exclude_paths),
            max_file_bytes: config.max_file_bytes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name of the repository root.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    /// Sorted, `/`-separated paths relative to the root.
    pub fn list_files(&self) -> Vec<String> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                let name = entry.file_name().to_string_lossy();
                !(is_dir && entry.depth() > 0 && DEPENDENCY_DIRS.contains(&&*name))
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("error scanning path: {}", err);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let rel = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if let Some(set) = &self.include {
                if !set.is_match(&rel) {
                    continue;
                }
            }
            if let Some(set) = &self.exclude {
                if set.is_match(&rel) {
                    continue;
                }
            }
            files.push(rel);
        }

        files.sort();
        debug!(count = files.len(), "listed repository files");
        files
    }

    /// Read one file as text, replacing invalid UTF-8.
    pub fn read_file(&self, rel: &str) -> Result<String> {
        let path = self.root.join(rel);
        let bytes =
            fs::read(&path).with_context(|| format!("failed to read file {}", path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read every listed file, skipping binary and oversized ones.
    pub fn read_all(&self, files: &[String]) -> Result<BTreeMap<String, String>> {
        let mut contents = BTreeMap::new();
        for rel in files {
            let path = self.root.join(rel);
            let size = fs::metadata(&path)
                .with_context(|| format!("failed to stat {}", path.display()))?
                .len();
            if size > self.max_file_bytes {
                debug!(path = %rel, size, "skipping oversized file");
                continue;
            }
            let bytes =
                fs::read(&path).with_context(|| format!("failed to read file {}", path.display()))?;
            if bytes.contains(&0) {
                debug!(path = %rel, "skipping binary file");
                continue;
            }
            contents.insert(rel.clone(), String::from_utf8_lossy(&bytes).into_owned());
        }
        Ok(contents)
    }

    /// Language -> percentage of bytes among files with a known language.
    pub fn language_stats(&self, files: &[String]) -> Result<LanguageStats> {
        let mut bytes_by_lang: BTreeMap<&'static str, u64> = BTreeMap::new();
        let mut total = 0u64;

        for rel in files {
            let lang = Language::from_path(rel);
            if lang == Language::Unknown {
                continue;
            }
            let path = self.root.join(rel);
            let size = fs::metadata(&path)
                .with_context(|| format!("failed to stat {}", path.display()))?
                .len();
            *bytes_by_lang.entry(lang.name()).or_default() += size;
            total += size;
        }

        let mut stats = LanguageStats::new();
        if total > 0 {
            for (lang, bytes) in bytes_by_lang {
                stats.insert(lang.to_string(), bytes as f64 / total as f64 * 100.0);
            }
        }
        Ok(stats)
    }

    /// README, manifests and entry points: the material for a quick summary.
    pub fn important_files(&self, files: &[String]) -> Result<BTreeMap<String, String>> {
        let mut picked = Vec::new();

        if let Some(readme) = files
            .iter()
            .find(|f| base_name(f).to_lowercase().starts_with("readme."))
        {
            picked.push(readme);
        }
        picked.extend(files.iter().filter(|f| {
            let base = base_name(f);
            MANIFEST_FILES.contains(&base) || ENTRY_POINT_FILES.contains(&base)
        }));

        let mut contents = BTreeMap::new();
        for rel in picked {
            contents.insert(rel.clone(), self.read_file(rel)?);
        }
        Ok(contents)
    }
}

pub fn find_entry_points(files: &[String]) -> Vec<String> {
    files
        .iter()
        .filter(|f| ENTRY_POINT_FILES.contains(&base_name(f)))
        .cloned()
        .collect()
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn build_globset(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        match Glob::new(pat) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => warn!("ignoring invalid glob pattern {}: {}", pat, err),
        }
    }
    match builder.build() {
        Ok(set) => Some(set),
        Err(err) => {
            warn!("failed to build globset: {}", err);
            None
        }
    }
}
