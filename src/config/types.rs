// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub startup: StartupConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
}

/// Which startup initializers run, and which extra endpoints are declared
#[derive(Debug, Deserialize, Clone)]
pub struct StartupConfig {
    /// Initializer names, run in order ("servlet", "spring", "spring_mvc")
    pub initializers: Vec<String>,
    /// Register the built-in declared endpoints (`/test`)
    pub annotated: bool,
    /// Extra fixed-body endpoints
    #[serde(default)]
    pub endpoints: Vec<DeclaredEndpoint>,
}

/// Endpoint declared as data rather than code
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DeclaredEndpoint {
    pub name: String,
    pub patterns: Vec<String>,
    pub body: String,
}
