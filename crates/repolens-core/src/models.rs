use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::path::Path;

/// Language name -> share of repository bytes, in percent.
pub type LanguageStats = BTreeMap<String, f64>;

/// Text returned by one completion call for one chunk.
pub type ChunkSummary = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    JavaScript,
    TypeScript,
    React,
    ReactTypeScript,
    Python,
    Java,
    Ruby,
    Php,
    Rust,
    C,
    Cpp,
    CppHeader,
    CSharp,
    Swift,
    Kotlin,
    Scala,
    Html,
    Css,
    Sass,
    Markdown,
    Json,
    Yaml,
    Xml,
    Sql,
    Shell,
    PowerShell,
    Batch,
    Dockerfile,
    Vue,
    Svelte,
    Protobuf,
    GraphQl,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "go" => Language::Go,
            "js" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "jsx" => Language::React,
            "tsx" => Language::ReactTypeScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "rb" => Language::Ruby,
            "php" => Language::Php,
            "rs" => Language::Rust,
            "c" => Language::C,
            "cpp" | "cc" | "cxx" => Language::Cpp,
            "h" | "hpp" => Language::CppHeader,
            "cs" => Language::CSharp,
            "swift" => Language::Swift,
            "kt" => Language::Kotlin,
            "scala" => Language::Scala,
            "html" => Language::Html,
            "css" => Language::Css,
            "scss" | "sass" => Language::Sass,
            "md" | "markdown" => Language::Markdown,
            "json" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "xml" => Language::Xml,
            "sql" => Language::Sql,
            "sh" | "bash" => Language::Shell,
            "ps1" => Language::PowerShell,
            "bat" | "cmd" => Language::Batch,
            "dockerfile" | "containerfile" => Language::Dockerfile,
            "vue" => Language::Vue,
            "svelte" => Language::Svelte,
            "proto" => Language::Protobuf,
            "graphql" | "gql" => Language::GraphQl,
            _ => Language::Unknown,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Language::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Human-readable name used in language statistics.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::React => "React",
            Language::ReactTypeScript => "React/TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::Rust => "Rust",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CppHeader => "C/C++ Header",
            Language::CSharp => "C#",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Scala => "Scala",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Sass => "SASS",
            Language::Markdown => "Markdown",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Xml => "XML",
            Language::Sql => "SQL",
            Language::Shell => "Shell",
            Language::PowerShell => "PowerShell",
            Language::Batch => "Batch",
            Language::Dockerfile => "Dockerfile",
            Language::Vue => "Vue",
            Language::Svelte => "Svelte",
            Language::Protobuf => "Protocol Buffer",
            Language::GraphQl => "GraphQL",
            Language::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One file taking part in a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Entry-point files (`main.*`, `index.*`) are summarized first.
    pub fn is_entry_point(&self) -> bool {
        self.path.contains("main.") || self.path.contains("index.")
    }

    /// The text this file contributes to the chunked corpus.
    pub fn render(&self) -> String {
        format!("File: {}\n\n{}\n\n", self.path, self.content)
    }
}

/// A bounded slice of rendered corpus text, submitted as one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chunk(String);

impl Chunk {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Chunk {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// "API", "CLI", "Service", "Utility", ...
    pub kind: String,
    pub path: String,
    pub description: String,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    pub description: String,
    pub languages: LanguageStats,
    pub components: Vec<Component>,
    pub entry_points: Vec<String>,
    /// Dependency name -> version requirement
    pub dependencies: BTreeMap<String, String>,
}

/// Outcome of one repository analysis.
///
/// Only `repo.description` comes from the model; `architecture`, `setup`,
/// `flow_diagram` and `components` are left empty by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub repo: RepoInfo,
    pub architecture: String,
    pub setup: String,
    pub flow_diagram: String,
    pub generated_with: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_path() {
        assert_eq!(Language::from_path("src/main.rs"), Language::Rust);
        assert_eq!(Language::from_path("web/App.TSX"), Language::ReactTypeScript);
        assert_eq!(Language::from_path("Makefile"), Language::Unknown);
        assert_eq!(Language::from_path("include/util.hpp").name(), "C/C++ Header");
    }

    #[test]
    fn test_entry_point_detection() {
        assert!(FileEntry::new("cmd/main.go", "").is_entry_point());
        assert!(FileEntry::new("web/index.ts", "").is_entry_point());
        assert!(!FileEntry::new("lib/util.go", "").is_entry_point());
    }

    #[test]
    fn test_render() {
        let entry = FileEntry::new("a.go", "package a");
        assert_eq!(entry.render(), "File: a.go\n\npackage a\n\n");
    }
}
