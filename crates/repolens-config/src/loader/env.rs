//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `REPOLENS_<section>_<field>=value`
//!
//! Examples:
//! - `REPOLENS_CHUNKING_MAX_CHARS=2000`
//! - `REPOLENS_SUMMARY_CONCURRENCY=4`
//! - `REPOLENS_LLM_PROVIDER=ollama`

use crate::{error::ConfigError, types::*, Config, Result};
use std::env;
use tracing::warn;

const PREFIX: &str = "REPOLENS_";

/// Parse configuration from environment variables
pub fn from_env() -> Result<Option<Config>> {
    from_vars(env::vars())
}

/// Build an overlay from an explicit set of variables
pub fn from_vars<I>(vars: I) -> Result<Option<Config>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_vars: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(k, _)| k.starts_with(PREFIX))
        .collect();

    if env_vars.is_empty() {
        return Ok(None);
    }

    let mut config = Config::default();
    for (key, value) in env_vars {
        if let Err(e) = apply_env_var(&mut config, &key, &value) {
            warn!(var = %key, error = %e, "ignoring environment variable");
        }
    }

    Ok(Some(config))
}

/// Apply a single environment variable to config
fn apply_env_var(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let key = key.strip_prefix(PREFIX).unwrap_or(key);

    let Some((section, field)) = key.split_once('_') else {
        return Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: "Expected format: REPOLENS_<section>_<field>".to_string(),
        });
    };

    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "core" => apply_core_var(&mut config.core, &field, value),
        "chunking" => apply_chunking_var(&mut config.chunking, &field, value),
        "summary" => apply_summary_var(&mut config.summary, &field, value),
        "llm" => apply_llm_var(&mut config.llm, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn var_name(section: &str, field: &str) -> String {
    format!("{}{}_{}", PREFIX, section, field.to_uppercase())
}

fn parse_usize(section: &str, field: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| ConfigError::EnvVarError {
        var: var_name(section, field),
        message: format!("Invalid integer: {}", value),
    })
}

fn unknown_field(section: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: var_name(section, field),
        message: format!("Unknown field: {}", field),
    }
}

/// Comma-separated glob list
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn apply_core_var(config: &mut CoreConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "include_paths" => config.include_paths = parse_list(value),
        "exclude_paths" => config.exclude_paths = parse_list(value),
        "max_file_bytes" => {
            config.max_file_bytes = value.parse().map_err(|_| ConfigError::EnvVarError {
                var: var_name("CORE", field),
                message: format!("Invalid integer: {}", value),
            })?;
        }
        _ => return Err(unknown_field("CORE", field)),
    }
    Ok(())
}

fn apply_chunking_var(config: &mut ChunkingConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "max_chars" => config.max_chars = parse_usize("CHUNKING", field, value)?,
        _ => return Err(unknown_field("CHUNKING", field)),
    }
    Ok(())
}

fn apply_summary_var(config: &mut SummaryConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "detailed" => {
            config.detailed = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::EnvVarError {
                        var: var_name("SUMMARY", field),
                        message: format!("Invalid boolean: {}", value),
                    })
                }
            };
        }
        "concurrency" => config.concurrency = parse_usize("SUMMARY", field, value)?,
        _ => return Err(unknown_field("SUMMARY", field)),
    }
    Ok(())
}

fn apply_llm_var(config: &mut LlmConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "provider" => {
            config.provider = match value.to_lowercase().as_str() {
                "openai" => LlmProvider::OpenAi,
                "ollama" => LlmProvider::Ollama,
                _ => {
                    return Err(ConfigError::invalid_enum(
                        "llm.provider",
                        value,
                        &["openai", "ollama"],
                    ))
                }
            };
        }
        "model" => config.model = value.to_string(),
        "api_base" => config.api_base = Some(value.to_string()),
        "timeout_secs" => {
            config.timeout_secs = value.parse().map_err(|_| ConfigError::EnvVarError {
                var: var_name("LLM", field),
                message: format!("Invalid integer: {}", value),
            })?;
        }
        "system_prompt" => config.system_prompt = value.to_string(),
        _ => return Err(unknown_field("LLM", field)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_prefixed_vars_yields_none() {
        let result = from_vars(vars(&[("HOME", "/root"), ("PATH", "/bin")])).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_section_fields_applied() {
        let config = from_vars(vars(&[
            ("REPOLENS_CHUNKING_MAX_CHARS", "2000"),
            ("REPOLENS_SUMMARY_CONCURRENCY", "3"),
            ("REPOLENS_SUMMARY_DETAILED", "true"),
            ("REPOLENS_LLM_PROVIDER", "ollama"),
            ("REPOLENS_LLM_MODEL", "llama3"),
            ("REPOLENS_CORE_EXCLUDE_PATHS", "**/gen/**, **/*.lock"),
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(config.chunking.max_chars, 2000);
        assert_eq!(config.summary.concurrency, 3);
        assert!(config.summary.detailed);
        assert_eq!(config.llm.provider, LlmProvider::Ollama);
        assert_eq!(config.llm.model, "llama3");
        assert_eq!(
            config.core.exclude_paths,
            vec!["**/gen/**".to_string(), "**/*.lock".to_string()]
        );
    }

    #[test]
    fn test_bad_value_is_skipped() {
        let config = from_vars(vars(&[
            ("REPOLENS_CHUNKING_MAX_CHARS", "lots"),
            ("REPOLENS_SUMMARY_CONCURRENCY", "2"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.chunking.max_chars, ChunkingConfig::default().max_chars);
        assert_eq!(config.summary.concurrency, 2);
    }

    #[test]
    fn test_invalid_provider_suggests() {
        let mut config = Config::default();
        let err = apply_env_var(&mut config, "REPOLENS_LLM_PROVIDER", "openia").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'openai'?"));
    }

    #[test]
    fn test_unknown_section() {
        let mut config = Config::default();
        assert!(apply_env_var(&mut config, "REPOLENS_SEARCH_MODE", "x").is_err());
    }
}
