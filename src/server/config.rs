use chrono::Duration;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub token_ttl: Duration,

    pub shipment_webhook_url: Option<Url>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            token_ttl: token_ttl()?,
            shipment_webhook_url: shipment_webhook_url()?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn token_ttl() -> Result<Duration, ConfigError> {
    parse_token_ttl(std::env::var("TOKEN_TTL_SECONDS").ok().as_deref())
}

fn parse_token_ttl(value: Option<&str>) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS));
    };

    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|seconds| *seconds > 0)
        .and_then(Duration::try_seconds)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "TOKEN_TTL_SECONDS".to_string(),
            reason: format!("expected a positive number of seconds, got '{}'", value),
        })
}

fn shipment_webhook_url() -> Result<Option<Url>, ConfigError> {
    match std::env::var("SHIPMENT_WEBHOOK_URL") {
        Ok(value) if !value.trim().is_empty() => Url::parse(value.trim())
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "SHIPMENT_WEBHOOK_URL".to_string(),
                reason: e.to_string(),
            }),
        _ => Ok(None),
    }
}
