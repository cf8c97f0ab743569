//! Configuration resolution
//!
//! Tiered priority per setting: CLI argument, then environment
//! variable, then TOML config file (`~/.config/journal-api/config.toml`
//! by default), then compiled default. The Supabase URL and key have no
//! default and must come from the environment or the config file.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::db::SupabaseConfig;
use crate::nlp::{NlpConfig, DEFAULT_API_BASE};

pub const DEFAULT_PORT: u16 = 8000;

/// Local development frontends allowed by CORS
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    // Vite falls back to the next port when 5173 is taken
    "http://localhost:5174",
    "http://localhost:3000",
];

/// TOML config file contents (all keys optional)
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub hf_api_base: Option<String>,
    pub hf_api_token: Option<String>,
    pub port: Option<u16>,
    pub allowed_origins: Option<Vec<String>>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase: SupabaseConfig,
    pub nlp: NlpConfig,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Resolve configuration from CLI overrides, environment, and TOML
    pub fn resolve(config_path: Option<&Path>, cli_port: Option<u16>) -> Result<Self> {
        let toml_config = match config_path {
            Some(path) => load_toml(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => load_toml(&path)?,
                _ => TomlConfig::default(),
            },
        };

        let supabase_url = std::env::var("SUPABASE_URL")
            .ok()
            .or(toml_config.supabase_url)
            .ok_or_else(|| {
                anyhow!("SUPABASE_URL not configured (environment or config file)")
            })?;

        let supabase_key = std::env::var("SUPABASE_KEY")
            .ok()
            .or(toml_config.supabase_key)
            .ok_or_else(|| {
                anyhow!("SUPABASE_KEY not configured (environment or config file)")
            })?;

        let api_base = std::env::var("HF_API_BASE")
            .ok()
            .or(toml_config.hf_api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let api_token = std::env::var("HF_API_TOKEN")
            .ok()
            .or(toml_config.hf_api_token);

        if api_token.is_none() {
            info!("HF_API_TOKEN not set; using anonymous (rate-limited) inference access");
        }

        let port = cli_port
            .or_else(|| {
                std::env::var("JOURNAL_API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
            })
            .or(toml_config.port)
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins = toml_config.allowed_origins.unwrap_or_else(|| {
            DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        Ok(Self {
            supabase: SupabaseConfig {
                url: supabase_url,
                key: supabase_key,
            },
            nlp: NlpConfig { api_base, api_token },
            port,
            allowed_origins,
        })
    }
}

/// Default config file path for the platform
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("journal-api").join("config.toml"))
}

fn load_toml(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
