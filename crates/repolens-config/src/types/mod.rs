//! Configuration type definitions
//!
//! This module contains all configuration structures organized by concern.
//! Each type is self-contained with validation and sensible defaults.

pub mod chunking;
pub mod core;
pub mod llm;
pub mod summary;

// Re-export all types for convenience
pub use chunking::ChunkingConfig;
pub use core::CoreConfig;
pub use llm::{LlmConfig, LlmProvider};
pub use summary::SummaryConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
///
/// This is the top-level configuration that users interact with.
/// It's organized by functional area for clarity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Repository scanning settings
    #[serde(default)]
    pub core: CoreConfig,

    /// Corpus chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Summarization pipeline settings
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Completion endpoint settings
    #[serde(default)]
    pub llm: LlmConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.core.validate()?;
        self.chunking.validate()?;
        self.summary.validate()?;
        self.llm.validate()?;

        Ok(())
    }
}
