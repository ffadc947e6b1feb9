use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid environment variable format for {0}: {1}")]
    InvalidVar(String, String),
}

/// How validation and not-found failures are surfaced to the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// 400 for bad submissions, 404 for missing jokes.
    #[default]
    Distinct,
    /// Both surface as a generic 500, as the first version of the app did.
    Legacy,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distinct" => Ok(Self::Distinct),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("expected 'distinct' or 'legacy', got '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct JokesConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
    pub static_dir: PathBuf,
    pub error_policy: ErrorPolicy,
}

impl JokesConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://jokes.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = SocketAddr::from_str(&bind_address_str)
            .map_err(|e| ConfigError::InvalidVar("BIND_ADDRESS".into(), e.to_string()))?;

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()));

        let error_policy = match std::env::var("ERROR_POLICY") {
            Ok(val) => val
                .parse::<ErrorPolicy>()
                .map_err(|e| ConfigError::InvalidVar("ERROR_POLICY".into(), e))?,
            Err(_) => ErrorPolicy::default(),
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
            static_dir,
            error_policy,
        })
    }
}
