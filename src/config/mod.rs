mod api;
mod defaults;
mod validation;

use crate::cli::Args;
use crate::error::{DocqaError, Result};
use crate::session::DEFAULT_WINDOW_SIZE;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use defaults::{
    DEFAULT_API_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SYSTEM_PROMPT, EXAMPLE_CONFIG,
};
pub use validation::{expand_env_var_in_string, normalize_endpoint, parse_flag};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub window_size: Option<usize>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccessConfig {
    #[serde(default)]
    pub password: Option<String>,
}

/// Settings read from a YAML or JSON config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub access: AccessConfig,
}

pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub request_timeout: u64,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub system_prompt: String,
    pub window_size: usize,
    pub verbose: bool,
    pub access_password: String,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load()?;
        Self::resolve(args, &file_config, |name| env::var(name).ok())
    }

    /// Merge settings: CLI args > environment > config file > defaults.
    pub fn resolve(
        args: &Args,
        file_config: &FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let expand = |value: &str| expand_env_var_in_string(value, &env);

        let api_key = env("OPENAI_API_KEY")
            .or_else(|| file_config.api.key.as_deref().map(expand))
            .filter(|key| !key.trim().is_empty() && !key.contains("${"))
            .ok_or_else(|| {
                DocqaError::Config(
                    "OPENAI_API_KEY environment variable not set (or api.key in config)"
                        .to_string(),
                )
            })?;

        let access_password = env("DOCQA_ACCESS_PASSWORD")
            .or_else(|| file_config.access.password.as_deref().map(expand))
            .filter(|password| !password.is_empty() && !password.contains("${"))
            .ok_or_else(|| {
                DocqaError::Config(
                    "no access password configured (set DOCQA_ACCESS_PASSWORD or access.password)"
                        .to_string(),
                )
            })?;

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env("DOCQA_API_ENDPOINT"))
            .or_else(|| file_config.api.endpoint.as_deref().map(expand))
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let api_endpoint = normalize_endpoint(&api_endpoint);

        let request_timeout = match env("DOCQA_TIMEOUT") {
            Some(value) => parse_env("DOCQA_TIMEOUT", &value)?,
            None => file_config
                .api
                .timeout
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let model = args
            .model
            .clone()
            .or_else(|| env("DOCQA_MODEL"))
            .or_else(|| file_config.model.name.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_tokens = match (args.max_tokens, env("DOCQA_MAX_TOKENS")) {
            (Some(value), _) => value,
            (None, Some(value)) => parse_env("DOCQA_MAX_TOKENS", &value)?,
            (None, None) => file_config.model.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        };
        let max_tokens =
            validation::validate_max_tokens(max_tokens).map_err(DocqaError::Config)?;

        let temperature = match (args.temperature, env("DOCQA_TEMPERATURE")) {
            (Some(value), _) => Some(value),
            (None, Some(value)) => Some(parse_env("DOCQA_TEMPERATURE", &value)?),
            (None, None) => file_config.model.temperature,
        };
        let temperature = temperature
            .map(validation::validate_temperature)
            .transpose()
            .map_err(DocqaError::Config)?;

        let system_prompt = env("DOCQA_SYSTEM_PROMPT")
            .or_else(|| file_config.model.system_prompt.clone())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        let window_size = match (args.window_size, env("DOCQA_WINDOW_SIZE")) {
            (Some(value), _) => value,
            (None, Some(value)) => parse_env("DOCQA_WINDOW_SIZE", &value)?,
            (None, None) => file_config
                .session
                .window_size
                .unwrap_or(DEFAULT_WINDOW_SIZE),
        };

        let verbose = args.verbose
            || env("DOCQA_VERBOSE")
                .as_deref()
                .and_then(parse_flag)
                .or(file_config.session.verbose)
                .unwrap_or(false);

        Ok(Config {
            api_key,
            api_endpoint,
            request_timeout,
            model,
            max_tokens,
            temperature,
            system_prompt,
            window_size,
            verbose,
            access_password,
        })
    }

    pub fn get_current_date() -> String {
        chrono::Local::now().format("%A, %B %d, %Y").to_string()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| DocqaError::Config(format!("invalid value for {}: {} ({})", name, value, e)))
}

impl FileConfig {
    /// Load the first config file found; no file means defaults.
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Ok(Self::load_from(&path)?);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".docqa.yaml"),
            PathBuf::from(".docqa.yml"),
            PathBuf::from(".docqa.json"),
        ];

        if let Some(config_dir) = Self::global_config_dir() {
            paths.push(config_dir.join("docqa.yaml"));
            paths.push(config_dir.join("docqa.yml"));
            paths.push(config_dir.join("docqa.json"));
        }

        paths
    }

    pub fn global_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("docqa"))
    }

    /// Write the example config into `dir`, refusing to overwrite.
    pub fn init_in(dir: &Path) -> Result<PathBuf> {
        let path = dir.join("docqa.yaml");
        if path.exists() {
            return Err(DocqaError::Config(format!(
                "config file already exists: {}",
                path.display()
            )));
        }

        fs::create_dir_all(dir)?;
        fs::write(&path, EXAMPLE_CONFIG)?;
        Ok(path)
    }
}
