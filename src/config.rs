//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::prospekt::extract::DEFAULT_SHOP_PATTERN;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default listing page.
pub const DEFAULT_SOURCE_URL: &str = "https://www.prospektmaschine.de/hypermarkte/";

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listing page to scrape
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Output file for the JSON array of flyers
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept-Language header sent with the request
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Regex applied to the shop link title; group 1 is the shop name
    #[serde(default = "default_shop_pattern")]
    pub shop_pattern: String,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("flyers.json")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_accept_language() -> String {
    "de-DE,de;q=0.9,en;q=0.5".to_string()
}

fn default_shop_pattern() -> String {
    DEFAULT_SHOP_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            output: default_output(),
            proxy: None,
            timeout_secs: default_timeout_secs(),
            accept_language: default_accept_language(),
            shop_pattern: default_shop_pattern(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("flyers.toml");
        if local_config.exists() {
            debug!("Found flyers.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("flyer-scraper").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("FLYERS_URL") {
            self.source_url = url;
        }

        if let Ok(output) = std::env::var("FLYERS_OUTPUT") {
            self.output = PathBuf::from(output);
        }

        if let Ok(proxy) = std::env::var("FLYERS_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("FLYERS_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_url, "https://www.prospektmaschine.de/hypermarkte/");
        assert_eq!(config.output, PathBuf::from("flyers.json"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.shop_pattern, DEFAULT_SHOP_PATTERN);
        assert!(config.proxy.is_none());
        assert!(config.accept_language.starts_with("de-DE"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            output = "out/letaky.json"
            timeout_secs = 10
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output, PathBuf::from("out/letaky.json"));
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            source_url = "https://www.prospektmaschine.de/discounter/"
            output = "discounter.json"
            proxy = "socks5://localhost:1080"
            timeout_secs = 45
            accept_language = "en-US"
            shop_pattern = 'Shop (\w+)'
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.source_url, "https://www.prospektmaschine.de/discounter/");
        assert_eq!(config.output, PathBuf::from("discounter.json"));
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.accept_language, "en-US");
        assert_eq!(config.shop_pattern, r"Shop (\w+)");
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"source_url = "http://localhost:8080/listing""#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.source_url, "http://localhost:8080/listing");
    }

    #[test]
    fn test_config_from_file_not_found() {
        let err = Config::from_file("/nonexistent/path/flyers.toml").unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 12").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_config_with_env() {
        let vars = ["FLYERS_URL", "FLYERS_OUTPUT", "FLYERS_PROXY", "FLYERS_TIMEOUT"];
        let saved: Vec<Option<String>> = vars.iter().map(|v| std::env::var(v).ok()).collect();

        std::env::set_var("FLYERS_URL", "http://mirror.local/hypermarkte/");
        std::env::set_var("FLYERS_OUTPUT", "/tmp/flyers-env.json");
        std::env::set_var("FLYERS_PROXY", "http://proxy:8080");
        std::env::set_var("FLYERS_TIMEOUT", "60");

        let config = Config::new().with_env();
        assert_eq!(config.source_url, "http://mirror.local/hypermarkte/");
        assert_eq!(config.output, PathBuf::from("/tmp/flyers-env.json"));
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));
        assert_eq!(config.timeout_secs, 60);

        // Invalid values are ignored
        std::env::set_var("FLYERS_TIMEOUT", "soon");
        let config = Config::new().with_env();
        assert_eq!(config.timeout_secs, 30);

        for (var, value) in vars.iter().zip(saved) {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config { proxy: Some("socks5://localhost:1080".to_string()), ..Config::new() };

        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.source_url, config.source_url);
        assert_eq!(parsed.output, config.output);
        assert_eq!(parsed.proxy, config.proxy);
        assert_eq!(parsed.shop_pattern, config.shop_pattern);
    }
}
