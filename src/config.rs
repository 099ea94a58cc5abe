//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;

/// Default frontend origin allowed by CORS
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Password hashing configuration
    pub credentials: CredentialsConfig,
    /// Whether to seed the store with sample managers and employees
    pub seed_sample_data: bool,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Origin allowed to call the API (`*` allows any origin)
    pub cors_allowed_origin: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory for the daily rolling log file, `None` disables file output
    pub log_dir: Option<PathBuf>,
}

/// Argon2 cost parameters used when hashing passwords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialsConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of iterations
    pub iterations: u32,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = CredentialsConfig::default();
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            },
            logging: LoggingConfig {
                log_dir: match env::var("LOG_DIR") {
                    Ok(dir) if dir.trim().is_empty() => None,
                    Ok(dir) => Some(PathBuf::from(dir)),
                    Err(_) => Some(PathBuf::from("logs")),
                },
            },
            credentials: CredentialsConfig {
                memory_kib: env::var("ARGON2_MEMORY_KIB")
                    .ok()
                    .and_then(|m| m.parse().ok())
                    .unwrap_or(defaults.memory_kib),
                iterations: env::var("ARGON2_ITERATIONS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.iterations),
            },
            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
