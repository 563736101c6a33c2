//! Cross-origin policy shared by the HTTP services.
//!
//! Browsers ignore a literal `*` in `Access-Control-Allow-Methods` and
//! `Access-Control-Allow-Headers` once credentials are allowed, and
//! `tower-http` refuses to build that combination. "Any method / any header"
//! is therefore expressed by mirroring the preflight request back.

use crate::error::AppError;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>, allow_credentials: bool) -> Self {
        Self {
            allowed_origins,
            allow_credentials,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }

    /// Check the policy can be turned into a layer.
    pub fn validate(&self) -> Result<(), AppError> {
        self.layer().map(|_| ())
    }

    /// Build the layer, failing on origins that are not valid header values.
    pub fn layer(&self) -> Result<CorsLayer, AppError> {
        if self.allowed_origins.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "At least one CORS origin must be configured"
            )));
        }

        let layer = CorsLayer::new()
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request());

        if self.allows_any_origin() {
            if self.allow_credentials {
                tracing::warn!("Wildcard CORS origin configured; credentials will not be allowed");
            }
            return Ok(layer.allow_origin(AllowOrigin::any()));
        }

        let origins = self
            .allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
                })
            })
            .collect::<Result<Vec<HeaderValue>, AppError>>()?;

        Ok(layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(self.allow_credentials))
    }
}
