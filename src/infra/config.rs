//! Centralized configuration (command line + environment variables + defaults).

use clap::Parser;
use std::ffi::OsString;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4567;
pub const DEFAULT_DATASOURCE: &str = "~/reviews.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Listening port (`PORT`, defaults to 4567).
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Datasource connection string (`DATABASE_URL`, defaults to `~/reviews.db`).
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATASOURCE.to_string())
}

/// Interface to bind (`BIND_ADDR`, defaults to all interfaces).
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

#[derive(Debug, Parser)]
#[command(name = "api_server", about = "Course reviews REST API")]
struct Cli {
    /// Port to listen on
    port: Option<u16>,
    /// Datasource, e.g. `sqlite://reviews.db`, a file path or `:memory:`
    datasource: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage: api_server <port> <datasource>")]
    Usage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub datasource: String,
}

impl ServerConfig {
    /// Settings taken only from the environment and built-in defaults.
    pub fn from_env() -> Self {
        Self {
            bind_addr: bind_addr(),
            port: port(),
            datasource: database_url(),
        }
    }

    /// Resolves settings from `args` (program name first).
    ///
    /// Either no positional arguments are given, or exactly `<port> <datasource>`;
    /// anything else is a usage error.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|_| ConfigError::Usage)?;
        match (cli.port, cli.datasource) {
            (None, None) => Ok(Self::from_env()),
            (Some(port), Some(datasource)) => Ok(Self {
                bind_addr: bind_addr(),
                port,
                datasource,
            }),
            _ => Err(ConfigError::Usage),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_falls_back_to_environment() {
        assert!(ServerConfig::from_args(["api_server"]).is_ok());
    }

    #[test]
    fn port_and_datasource_are_taken_from_arguments() {
        let cfg = ServerConfig::from_args(["api_server", "4568", "sqlite::memory:"]).unwrap();
        assert_eq!(cfg.port, 4568);
        assert_eq!(cfg.datasource, "sqlite::memory:");
    }

    #[test]
    fn a_single_argument_is_a_usage_error() {
        assert_eq!(
            ServerConfig::from_args(["api_server", "4568"]),
            Err(ConfigError::Usage)
        );
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        assert_eq!(
            ServerConfig::from_args(["api_server", "4568", "a.db", "extra"]),
            Err(ConfigError::Usage)
        );
    }

    #[test]
    fn non_numeric_port_is_a_usage_error() {
        assert_eq!(
            ServerConfig::from_args(["api_server", "http", "a.db"]),
            Err(ConfigError::Usage)
        );
    }

    #[test]
    fn listen_addr_joins_host_and_port() {
        let cfg = ServerConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            datasource: DEFAULT_DATASOURCE.to_string(),
        };
        assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
    }
}
