//! User defaults from `<config dir>/boxscore/config.toml`.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Csv,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Option<OutputFormat> {
        match name.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub format: Option<OutputFormat>,
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "boxscore").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load user defaults. Problems are returned as warnings; the defaults are
/// used in their place.
pub fn load_user_config() -> (UserConfig, Vec<String>) {
    match user_config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => (UserConfig::default(), Vec::new()),
    }
}

fn load_from(path: &Path) -> (UserConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let config = match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<UserConfig>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };
    (config.unwrap_or_default(), warnings)
}
