//! File-based configuration loading

use crate::{error::ConfigError, loader::ConfigFormat, Config, Result, Validate};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load configuration from a file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let format = detect_format(path)?;

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let path_str = path.to_str();

    let config = match format {
        ConfigFormat::Yaml => super::formats::yaml::parse_with_path(&content, path_str)?,
        ConfigFormat::Toml => super::formats::toml::parse_with_path(&content, path_str)?,
        ConfigFormat::Json => super::formats::json::parse_with_path(&content, path_str)?,
    };

    config.validate()?;

    Ok(config)
}

/// Detect configuration format from file extension
pub(crate) fn detect_format(path: &Path) -> Result<ConfigFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_yaml() {
        assert_eq!(
            detect_format(&PathBuf::from("config.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            detect_format(&PathBuf::from("config.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
    }

    #[test]
    fn test_detect_toml() {
        assert_eq!(
            detect_format(&PathBuf::from("config.toml")).unwrap(),
            ConfigFormat::Toml
        );
    }

    #[test]
    fn test_detect_json() {
        assert_eq!(
            detect_format(&PathBuf::from("config.json")).unwrap(),
            ConfigFormat::Json
        );
    }

    #[test]
    fn test_unknown_format() {
        assert!(detect_format(&PathBuf::from("config.txt")).is_err());
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = load_from_file("/no/such/dir/.repolens.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[chunking]\nmax_chars = 0\n").unwrap();
        assert!(load_from_file(&path).is_err());
    }
}
