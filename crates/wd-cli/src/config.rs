//! Layered invocation settings: built-in defaults, then `wdedit.toml`,
//! then environment, then command-line flags. The API token only ever
//! comes from the environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Document read at session start.
pub const DEFAULT_INPUT: &str = "wd_input.dat";
/// Document written after each applied batch.
pub const DEFAULT_OUTPUT: &str = "wd_input_new.dat";
/// Model id sent to the chat-completion endpoint.
pub const DEFAULT_MODEL: &str = "google/gemma-2-2b-it";
/// OpenAI-style router in front of Hugging Face inference.
pub const DEFAULT_API_BASE: &str = "https://router.huggingface.co/v1";

const CONFIG_FILE: &str = "wdedit.toml";
const CONFIG_ENV: &str = "WDEDIT_CONFIG";
const TOKEN_ENV: &str = "HF_TOKEN";

/// Optional on-disk config. Every field has a default; flags win over
/// all of these.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub model: Option<String>,
    pub api_base: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub model: String,
    pub api_base: String,
    pub api_token: Option<String>,
}

/// Unresolved overrides collected from the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub config: Option<PathBuf>,
}

impl Config {
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let file = load_file_config(overrides.config.as_deref())?;
        Ok(Self {
            input: overrides
                .input
                .or(file.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            model: overrides
                .model
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            api_base: overrides
                .api_base
                .or(file.api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_owned()),
            api_token: std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty()),
        })
    }
}

/// An explicit `--config` path must exist; the `WDEDIT_CONFIG` env var
/// or a `wdedit.toml` in the working directory are picked up only when
/// present.
fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var(CONFIG_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                let local = PathBuf::from(CONFIG_FILE);
                local.exists().then_some(local)
            }),
    };
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}
