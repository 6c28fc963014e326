//! Corpus chunking configuration

use serde::{Deserialize, Serialize};

/// Configuration for splitting the corpus into prompt-sized chunks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum length of one chunk, in bytes of UTF-8 text
    ///
    /// Every chunk sent to the completion endpoint is at most this long.
    /// For ASCII sources this is the character count.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

impl crate::validation::Validate for ChunkingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive("chunking.max_chars", self.max_chars, 0)
    }
}

fn default_max_chars() -> usize {
    1500
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = ChunkingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chars, 1500);
    }

    #[test]
    fn test_zero_max_chars_invalid() {
        let config = ChunkingConfig { max_chars: 0 };
        assert!(config.validate().is_err());
    }
}
