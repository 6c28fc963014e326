//! Configuration management for repolens
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Config merging (file + environment + CLI)
//! - Named endpoint profiles stored in the user's home directory
//!
//! # Example
//!
//! ```no_run
//! use repolens_config::Config;
//!
//! // Load from default location (.repolens.{toml,yml,yaml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let chunk_size = config.chunking.max_chars;
//! # Ok::<(), repolens_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod profiles;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use profiles::{Profile, ProfileStore};
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
