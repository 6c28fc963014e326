//! Configuration merging logic
//!
//! Merges configurations from multiple sources with proper precedence.

use crate::{types::*, Config};

/// Merge two configurations, with `overlay` taking precedence
///
/// This performs a deep merge where non-default values from `overlay`
/// override values in `base`.
pub fn merge(mut base: Config, overlay: Config) -> Config {
    base.core = merge_core(base.core, overlay.core);
    base.chunking = merge_chunking(base.chunking, overlay.chunking);
    base.summary = merge_summary(base.summary, overlay.summary);
    base.llm = merge_llm(base.llm, overlay.llm);

    base
}

fn pick<T: PartialEq>(base: T, overlay: T, default: T) -> T {
    if overlay != default {
        overlay
    } else {
        base
    }
}

fn merge_core(base: CoreConfig, overlay: CoreConfig) -> CoreConfig {
    let default = CoreConfig::default();
    CoreConfig {
        include_paths: pick(base.include_paths, overlay.include_paths, default.include_paths),
        exclude_paths: pick(base.exclude_paths, overlay.exclude_paths, default.exclude_paths),
        max_file_bytes: pick(
            base.max_file_bytes,
            overlay.max_file_bytes,
            default.max_file_bytes,
        ),
    }
}

fn merge_chunking(base: ChunkingConfig, overlay: ChunkingConfig) -> ChunkingConfig {
    let default = ChunkingConfig::default();
    ChunkingConfig {
        max_chars: pick(base.max_chars, overlay.max_chars, default.max_chars),
    }
}

fn merge_summary(base: SummaryConfig, overlay: SummaryConfig) -> SummaryConfig {
    let default = SummaryConfig::default();
    SummaryConfig {
        detailed: pick(base.detailed, overlay.detailed, default.detailed),
        concurrency: pick(base.concurrency, overlay.concurrency, default.concurrency),
    }
}

fn merge_llm(base: LlmConfig, overlay: LlmConfig) -> LlmConfig {
    let default = LlmConfig::default();
    LlmConfig {
        provider: pick(base.provider, overlay.provider, default.provider),
        model: pick(base.model, overlay.model, default.model),
        api_base: overlay.api_base.or(base.api_base),
        timeout_secs: pick(base.timeout_secs, overlay.timeout_secs, default.timeout_secs),
        system_prompt: pick(
            base.system_prompt,
            overlay.system_prompt,
            default.system_prompt,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_default_keeps_base() {
        let mut base = Config::default();
        base.chunking.max_chars = 700;
        base.llm.model = "gpt-4o".to_string();

        let merged = merge(base, Config::default());
        assert_eq!(merged.chunking.max_chars, 700);
        assert_eq!(merged.llm.model, "gpt-4o");
    }

    #[test]
    fn test_overlay_non_default_wins() {
        let mut base = Config::default();
        base.summary.concurrency = 2;
        base.llm.api_base = Some("http://a".to_string());

        let mut overlay = Config::default();
        overlay.summary.concurrency = 8;
        overlay.llm.api_base = Some("http://b".to_string());

        let merged = merge(base, overlay);
        assert_eq!(merged.summary.concurrency, 8);
        assert_eq!(merged.llm.api_base.as_deref(), Some("http://b"));
    }

    #[test]
    fn test_api_base_kept_when_overlay_unset() {
        let mut base = Config::default();
        base.llm.api_base = Some("http://a".to_string());
        let merged = merge(base, Config::default());
        assert_eq!(merged.llm.api_base.as_deref(), Some("http://a"));
    }
}
