//! Client configuration loaded from the environment and `.env` files.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "VISION_AGENT_API_KEY";

/// Environment variable selecting the service region.
pub const ENVIRONMENT_VAR: &str = "ADE_ENVIRONMENT";

/// Environment variable overriding the service base URL.
pub const BASE_URL_VAR: &str = "ADE_BASE_URL";

/// Environment variable picking the parse model.
pub const MODEL_VAR: &str = "ADE_MODEL";

/// Default `.env` file name, searched from the working directory upward.
pub const DEFAULT_ENV_FILE: &str = ".env";

const CONFIG_VARS: [&str; 4] = [API_KEY_VAR, ENVIRONMENT_VAR, BASE_URL_VAR, MODEL_VAR];

/// Deployment region of the parse service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// US deployment
    #[default]
    Production,
    /// EU deployment
    Eu,
}

impl Environment {
    /// Base URL of the deployment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.va.landing.ai",
            Environment::Eu => "https://api.va.eu-west-1.landing.ai",
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" | "us" => Ok(Environment::Production),
            "eu" => Ok(Environment::Eu),
            other => Err(Error::Config(format!(
                "unknown environment '{}' (expected 'production' or 'eu')",
                other
            ))),
        }
    }
}

/// Configuration for the parse client.
///
/// Built once at startup and handed to [`AdeClient::new`](crate::AdeClient::new).
/// Nothing downstream reads the process environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// API key; `None` when neither the environment nor `.env` set it
    pub api_key: Option<String>,

    /// Base URL of the parse service, without trailing slash
    pub base_url: String,

    /// Parse model; `None` leaves the choice to the caller's default
    pub model: Option<String>,
}

impl Config {
    /// Create a configuration with no key, pointing at the production service.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: Environment::Production.base_url().to_string(),
            model: None,
        }
    }

    /// Set the API key. Blank keys are treated as absent.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = normalize_key(key.into());
        self
    }

    /// Point the client at a deployment region.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.base_url().to_string();
        self
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the parse model. Blank values are treated as absent.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = normalize_key(model.into());
        self
    }

    /// Load configuration from the process environment merged over the
    /// default `.env` file (if one is found).
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration from the process environment merged over an
    /// env file.
    ///
    /// With `None`, `.env` is searched from the working directory upward and
    /// a missing file is fine. An explicit path must exist. Values already in
    /// the process environment take precedence over file values. The file is
    /// never written into the process environment. A process value that is
    /// not valid Unicode is an error rather than silently falling back to the
    /// file.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let mut vars = read_env_file(env_file)?;
        for key in CONFIG_VARS {
            if let Some(value) = std::env::var_os(key) {
                vars.insert(key.to_string(), unicode_value(key, value)?);
            }
        }
        Self::from_vars(&vars)
    }

    /// Build configuration from an already-merged variable map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let mut config = Self::new();

        if let Some(env) = vars.get(ENVIRONMENT_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_environment(env.parse()?);
        }
        if let Some(url) = vars.get(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        if let Some(key) = vars.get(API_KEY_VAR) {
            config = config.with_api_key(key.as_str());
        }
        if let Some(model) = vars.get(MODEL_VAR) {
            config = config.with_model(model.as_str());
        }

        log::debug!(
            "Loaded config: base_url={}, model={}, api_key={}",
            config.base_url,
            config.model.as_deref().unwrap_or("<default>"),
            config.redacted_api_key()
        );
        Ok(config)
    }

    /// API key in a form safe to print.
    pub fn redacted_api_key(&self) -> String {
        match self.api_key.as_deref() {
            None => "<not set>".to_string(),
            Some(key) => redact(key),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.redacted_api_key())
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

fn normalize_key(key: String) -> Option<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn unicode_value(key: &str, value: OsString) -> Result<String> {
    value
        .into_string()
        .map_err(|_| Error::Config(format!("{} is not valid Unicode", key)))
}

fn redact(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    format!("{}****", prefix)
}

fn read_env_file(env_file: Option<&Path>) -> Result<HashMap<String, String>> {
    let iter = match env_file {
        Some(path) => dotenvy::from_path_iter(path)?,
        None => match dotenvy::from_filename_iter(DEFAULT_ENV_FILE) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        },
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}
