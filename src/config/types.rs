// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::routing::Params;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub logging: LoggingConfig,
    /// Routes registered after the built-in home route, in order
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Per-connection timeout in seconds
    pub read_timeout: u64,
}

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Show fault diagnostics in the response instead of logging them
    pub show_errors: bool,
    /// Template directory
    pub views_dir: String,
    /// Public asset directory, used by `anticache`
    pub public_dir: String,
    /// Directory of the daily error logs
    pub log_dir: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined or common)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
}

/// A route from the configuration file
///
/// ```toml
/// [[routes]]
/// path = "posts/{id:\\d+}"
/// params = { controller = "Posts", action = "show" }
/// ```
#[derive(Debug, Deserialize, Clone)]
pub struct RouteConfig {
    pub path: String,
    #[serde(default)]
    pub params: Params,
}
