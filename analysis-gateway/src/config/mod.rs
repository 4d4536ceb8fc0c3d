use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_NLP_SERVICE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub analysis_service: AnalysisServiceSettings,
    pub upload: UploadSettings,
    pub observability: ObservabilitySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisServiceSettings {
    /// Base URL of the NLP analysis service, e.g. `http://nlp-service:8000`.
    pub url: String,
    /// Upper bound for one relayed call, connect through last body byte.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Severity written into issues the analysis service left without one.
    /// `None` keeps such issues as they arrived.
    pub default_severity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// Inbound request body limit in bytes.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilitySettings {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl AnalysisServiceSettings {
    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url())
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl Default for AnalysisServiceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_NLP_SERVICE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            default_severity: None,
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(GatewayConfig {
            common: common_config,
            analysis_service: AnalysisServiceSettings {
                url: get_env("NLP_SERVICE_URL", Some(DEFAULT_NLP_SERVICE_URL), is_prod)?,
                timeout_secs: parse_env(
                    "NLP_SERVICE_TIMEOUT_SECS",
                    &DEFAULT_TIMEOUT_SECS.to_string(),
                )?,
                connect_timeout_secs: parse_env(
                    "NLP_SERVICE_CONNECT_TIMEOUT_SECS",
                    &DEFAULT_CONNECT_TIMEOUT_SECS.to_string(),
                )?,
                default_severity: env::var("ANALYSIS_DEFAULT_SEVERITY")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
            },
            upload: UploadSettings {
                max_upload_bytes: parse_env(
                    "MAX_UPLOAD_BYTES",
                    &DEFAULT_MAX_UPLOAD_BYTES.to_string(),
                )?,
            },
            observability: ObservabilitySettings {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok(),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}

fn parse_env<T>(key: &str, default: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim().parse().map_err(|e: T::Err| {
        AppError::ConfigError(anyhow::anyhow!("Invalid value for {}: {} ({})", key, raw, e))
    })
}
