use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_SCHEMA: &str = "public";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: SecretString,
    pub schema: String,
    pub request_timeout_secs: u64,
}

impl Serialize for BackendConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BackendConfig", 4)?;
        state.serialize_field("url", &self.url)?;
        let anon_key = if self.anon_key.expose_secret().is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        state.serialize_field("anon_key", anon_key)?;
        state.serialize_field("schema", &self.schema)?;
        state.serialize_field("request_timeout_secs", &self.request_timeout_secs)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for BackendConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct BackendConfigHelper {
            url: String,
            anon_key: String,
            schema: String,
            request_timeout_secs: u64,
        }

        let helper = BackendConfigHelper::deserialize(deserializer)?;
        Ok(BackendConfig {
            url: helper.url,
            anon_key: SecretString::from(helper.anon_key),
            schema: helper.schema,
            request_timeout_secs: helper.request_timeout_secs,
        })
    }
}

impl BackendConfig {
    /// Base URL with any embedded credentials masked, safe for logs.
    #[must_use]
    pub fn redacted_url(&self) -> String {
        match url::Url::parse(&self.url) {
            Ok(mut url) => {
                if !url.username().is_empty() {
                    url.set_username("***").ok();
                }
                if url.password().is_some() {
                    url.set_password(Some("***")).ok();
                }
                url.to_string()
            }
            Err(_) => "[INVALID_URL]".to_string(),
        }
    }

    #[must_use]
    pub fn anon_key(&self) -> &str {
        self.anon_key.expose_secret()
    }

    #[must_use]
    pub fn uses_default_schema(&self) -> bool {
        self.schema == DEFAULT_SCHEMA
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.url.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "backend url cannot be empty".to_string(),
            });
        }

        match url::Url::parse(&self.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            Ok(url) => {
                return Err(AppError::ConfigError {
                    message: format!(
                        "backend url must be an absolute http(s) URL, got scheme '{}'",
                        url.scheme()
                    ),
                });
            }
            Err(e) => {
                return Err(AppError::ConfigError {
                    message: format!("backend url is invalid: {e}"),
                });
            }
        }

        if self.anon_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "backend anon_key cannot be empty".to_string(),
            });
        }

        if self.schema.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "backend schema cannot be empty".to_string(),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::ConfigError {
                message: "backend request_timeout_secs must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            anon_key: SecretString::from(""),
            schema: DEFAULT_SCHEMA.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
            },
            backend: BackendConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        self.backend.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
