use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable checked before the config file.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// openai_api_key = "sk-..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub openai_api_key: Option<String>,
}

impl Config {
    /// Resolve the API key: the `OPENAI_API_KEY` environment variable wins,
    /// then the config file. Absence is fatal at startup.
    pub fn api_key(&self) -> Result<String> {
        self.api_key_with_env(env::var(API_KEY_ENV).ok())
    }

    /// Precedence logic with the environment lookup injected, so tests can
    /// exercise both branches without mutating process state.
    fn api_key_with_env(&self, env_key: Option<String>) -> Result<String> {
        if let Some(key) = env_key
            && !key.is_empty()
        {
            return Ok(key);
        }

        self.openai_api_key.clone().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "OpenAI API key not found.\n\
                 Hint: set the {API_KEY_ENV} environment variable, or add\n\
                 `openai_api_key = \"...\"` to the config file."
            )
        })
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherwear", "weatherwear")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Render a secret as its first and last four characters, for the startup
/// banner. Short keys are fully masked.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
