use service_core::config as core_config;
use service_core::error::AppError;
use service_core::middleware::cors::{CorsPolicy, ANY_ORIGIN};
use std::env;

/// Origin of the frontend's local development server.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:1420";

#[derive(Debug, Clone)]
pub struct GreetConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub host: String,
    pub cors: CorsConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            environment: Environment::Dev,
            service_name: "greet-service".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
                allow_credentials: true,
            },
            otlp_endpoint: None,
        }
    }
}

impl GreetConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Build the service settings from any key/value source.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: Environment = lookup("ENVIRONMENT")
            .unwrap_or_else(|| "dev".to_string())
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;

        let is_prod = environment == Environment::Prod;
        let get = |key: &str, default: Option<&str>| get_env(&lookup, key, default, is_prod);

        let config = GreetConfig {
            common,
            environment: environment.clone(),
            service_name: get("SERVICE_NAME", Some("greet-service"))?,
            service_version: get("SERVICE_VERSION", Some(env!("CARGO_PKG_VERSION")))?,
            log_level: get("LOG_LEVEL", Some("info"))?,
            host: get("HOST", Some("0.0.0.0"))?,
            cors: CorsConfig {
                allowed_origins: get("ALLOWED_ORIGINS", Some(DEFAULT_ALLOWED_ORIGIN))?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: get("ALLOW_CREDENTIALS", Some("true"))?
                    .parse()
                    .map_err(|e: std::str::ParseBoolError| {
                        AppError::ConfigError(anyhow::anyhow!(
                            "ALLOW_CREDENTIALS must be true or false: {}",
                            e
                        ))
                    })?,
            },
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|s| !s.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "ALLOWED_ORIGINS must list at least one origin"
            )));
        }

        if self.environment == Environment::Prod
            && self.cors.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
        {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "Wildcard CORS origin not allowed in production"
            )));
        }

        // Surfaces malformed origins at startup instead of at first request.
        self.cors_policy().validate()?;

        Ok(())
    }

    pub fn cors_policy(&self) -> CorsPolicy {
        CorsPolicy::new(
            self.cors.allowed_origins.clone(),
            self.cors.allow_credentials,
        )
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.common.port)
    }
}

fn get_env<F>(lookup: &F, key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}
