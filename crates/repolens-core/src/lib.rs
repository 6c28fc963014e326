pub mod chunking;
pub mod dependencies;
pub mod models;
pub mod report;
pub mod scanner;
pub mod selection;
pub mod structure;
pub mod traits;

pub use chunking::{chunk_corpus, Chunker};
pub use models::{AnalysisResult, Chunk, Component, FileEntry, Language, LanguageStats, RepoInfo};
pub use selection::select_files;
pub use traits::Completer;
