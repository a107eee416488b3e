//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SCREENWISE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::scoring::EvaluatorMode;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SCREENWISE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Which evaluator the server is built with. Default: heuristic.
    pub evaluator: EvaluatorMode,

    /// Model identifier for the model-backed evaluator.
    pub model: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            evaluator: EvaluatorMode::Heuristic,
            model: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SCREENWISE_PORT";
    const ENV_BIND_ADDR: &'static str = "SCREENWISE_BIND_ADDR";
    const ENV_EVALUATOR: &'static str = "SCREENWISE_EVALUATOR";
    const ENV_MODEL: &'static str = "SCREENWISE_MODEL";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let evaluator = Self::parse_evaluator_from_env(defaults.evaluator)?;
        let model = Self::parse_optional_string_from_env(Self::ENV_MODEL);

        Ok(Self {
            port,
            bind_addr,
            evaluator,
            model,
        })
    }

    /// Checks cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.evaluator == EvaluatorMode::ModelBacked && self.model.is_none() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_MODEL,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Loopback `/healthz` URL in the same address family as `bind_addr`.
    pub fn health_check_url(&self) -> String {
        let loopback = match self.bind_addr {
            IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
        };

        format!("http://{}/healthz", SocketAddr::new(loopback, self.port))
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_evaluator_from_env(default: EvaluatorMode) -> Result<EvaluatorMode, ConfigError> {
        match env::var(Self::ENV_EVALUATOR) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEvaluator { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
