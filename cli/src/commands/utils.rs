use anyhow::{anyhow, Result};
use repolens_config::{Config, ErrorFormatter, Profile, ProfileStore};
use std::path::Path;
use termimad::{FmtText, MadSkin};
use tracing::warn;

pub fn render_markdown_answer(text: &str) -> String {
    let skin = MadSkin::default();
    let (w, _) = termimad::terminal_size();
    let width = std::cmp::max(20, w.saturating_sub(4) as usize);
    FmtText::from(&skin, text, Some(width)).to_string()
}

/// `--config` when given, otherwise the project files under `dir`.
pub fn load_config(config_path: Option<&Path>, dir: &Path) -> Result<Config> {
    let loaded = match config_path {
        Some(path) => Config::from_file(path),
        None => Config::load_from_dir(dir),
    };
    loaded.map_err(|e| anyhow!(ErrorFormatter::new(e).format()))
}

/// The named profile, or the default one if any. Without `--profile`, a
/// missing or unreadable store is not an error.
pub fn selected_profile(name: Option<&str>) -> Result<Option<Profile>> {
    match name {
        Some(name) => {
            let store = ProfileStore::load()?;
            Ok(Some(store.resolve(Some(name))?.clone()))
        }
        None => match ProfileStore::load() {
            Ok(store) => Ok(store.default_profile().ok().map(|(_, p)| p.clone())),
            Err(e) => {
                warn!(error = %e, "ignoring profile store");
                Ok(None)
            }
        },
    }
}

pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".repolens.toml"),
            "[chunking]\nmax_chars = 4000\n",
        )
        .unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.chunking.max_chars, 4000);
    }

    #[test]
    fn test_load_config_missing_file_is_formatted() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_render_markdown_answer_keeps_text() {
        let out = render_markdown_answer("plain words");
        assert!(out.contains("plain words"));
    }
}
