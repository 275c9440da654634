// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Site layout configuration
///
/// Everything lives under `root`: pages in `{root}/pages`, the shared
/// header/footer documents directly in `{root}`, optional raw assets
/// in `{root}/{assets_dir}`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteConfig {
    /// Base directory of the site tree
    pub root: String,
    /// Page served when no valid page is requested or resolvable
    pub default_page: String,
    /// Header document prepended to every page (relative to root)
    pub header_file: String,
    /// Footer document appended to every page (relative to root)
    pub footer_file: String,
    /// Request paths answered with the favicon
    #[serde(default = "default_favicon_paths")]
    pub favicon_paths: Vec<String>,
    /// Favicon file (relative to root)
    #[serde(default = "default_favicon_file")]
    pub favicon_file: String,
    /// URL prefix under which raw asset files are served
    #[serde(default = "default_assets_prefix")]
    pub assets_prefix: String,
    /// Asset directory under root
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_favicon_paths() -> Vec<String> {
    vec!["/favicon.ico".to_string(), "/favicon.svg".to_string()]
}

#[allow(clippy::missing_const_for_fn)]
fn default_favicon_file() -> String {
    "favicon.ico".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_assets_prefix() -> String {
    "/assets".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_assets_dir() -> String {
    "assets".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
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
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}
