//! Summarization pipeline configuration

use serde::{Deserialize, Serialize};

/// Summarization pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Run the detailed (chunked) analysis instead of the quick overview
    #[serde(default)]
    pub detailed: bool,

    /// Concurrent completion requests for chunk summaries
    ///
    /// 1 keeps the strictly sequential behaviour. Higher values overlap
    /// requests but results and progress stay in chunk order.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            detailed: false,
            concurrency: default_concurrency(),
        }
    }
}

impl crate::validation::Validate for SummaryConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::validate_positive;

        validate_positive("summary.concurrency", self.concurrency, 0)
    }
}

fn default_concurrency() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = SummaryConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.detailed);
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_zero_concurrency_invalid() {
        let config = SummaryConfig {
            concurrency: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
