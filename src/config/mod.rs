use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variables that must be set for a real deployment.
const REQUIRED_VARS: &[&str] = &["API_BASE_URL"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub app: AppInfo,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub enable_debug: bool,
    pub enable_analytics: bool,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("API_BASE_URL") {
            if !v.trim().is_empty() {
                self.api.base_url = v.trim().to_string();
            }
        }
        if let Ok(v) = env::var("APP_NAME") {
            self.app.name = v;
        }
        if let Ok(v) = env::var("APP_VERSION") {
            self.app.version = v;
        }

        // Flags are only on for the literal string "true"
        if let Ok(v) = env::var("ENABLE_DEBUG") {
            self.features.enable_debug = v == "true";
        }
        if let Ok(v) = env::var("ENABLE_ANALYTICS") {
            self.features.enable_analytics = v == "true";
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: "http://localhost:3000/api/v1".to_string(),
            },
            app: AppInfo::default(),
            features: FeatureFlags {
                enable_debug: false,
                enable_analytics: false,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            ..Self::development()
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            ..Self::development()
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "Credito Insight Dashboard".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

/// Names of required environment variables that are not set.
pub fn missing_env_vars() -> Vec<&'static str> {
    REQUIRED_VARS
        .iter()
        .copied()
        .filter(|key| env::var(key).map(|v| v.trim().is_empty()).unwrap_or(true))
        .collect()
}

/// Warn about missing required variables. Never fails; defaults still apply.
pub fn validate_env() {
    let missing = missing_env_vars();
    if !missing.is_empty() {
        tracing::warn!("Missing environment variables: {:?}", missing);
        tracing::warn!("Please create a .env file with the required variables");
    }
}

/// Directory holding persisted client state (the session file).
pub fn config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(custom_dir) = env::var("LOAN_ADMIN_CONFIG_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }

    let home = env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("loan-admin"))
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::from_env);

pub fn config() -> &'static ClientConfig {
    &CONFIG
}
