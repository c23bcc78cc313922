//! Application configuration loading.
//!
//! Configuration comes from an optional TOML file. Environment variables
//! (including those from a `.env` file) override the storage path and the
//! API endpoint; `RUST_LOG` overrides the logging level.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use vacancy_tracker_core::models::settings::{
    Settings, DEFAULT_API_URL, DEFAULT_PER_PAGE, DEFAULT_SALARY_TOLERANCE,
};

/// Environment variable overriding `storage.path`.
pub const ENV_STORAGE_PATH: &str = "VACANCY_STORAGE_PATH";

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "HH_API_URL";

const DEFAULT_STORAGE_PATH: &str = "data/vacancies.json";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub api: ApiConfig,
    pub filter: FilterConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub per_page: u32,
    pub only_with_salary: bool,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            per_page: DEFAULT_PER_PAGE,
            only_with_salary: true,
            user_agent: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub salary_tolerance: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            salary_tolerance: DEFAULT_SALARY_TOLERANCE,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber. Logs go to stderr so they do not
    /// interleave with the menu on stdout.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist, then apply environment overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            Self::parse(&text)
                .with_context(|| format!("invalid config file {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(ENV_STORAGE_PATH) {
            if !path.trim().is_empty() {
                self.storage.path = PathBuf::from(path);
            }
        }
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
    }

    /// Core settings derived from the `[api]` and `[filter]` sections.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            api_url: self.api.base_url.clone(),
            per_page: self.api.per_page,
            only_with_salary: self.api.only_with_salary,
            user_agent: self.api.user_agent.clone().unwrap_or(defaults.user_agent),
            salary_tolerance: self.filter.salary_tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.storage.path, PathBuf::from(DEFAULT_STORAGE_PATH));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.per_page, 100);
        assert!(config.api.only_with_salary);
        assert_eq!(config.filter.salary_tolerance, 10_000);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
            [storage]
            path = "/tmp/jobs.json"

            [filter]
            salary_tolerance = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/jobs.json"));
        assert_eq!(config.filter.salary_tolerance, 5000);
        assert_eq!(config.api.per_page, 100);
    }

    #[test]
    fn settings_take_api_section() {
        let config = Config::parse(
            r#"
            [api]
            base_url = "http://localhost:9000/vacancies"
            per_page = 20
            only_with_salary = false
            user_agent = "test-agent"
            "#,
        )
        .unwrap();
        let settings = config.settings();
        assert_eq!(settings.api_url, "http://localhost:9000/vacancies");
        assert_eq!(settings.per_page, 20);
        assert!(!settings.only_with_salary);
        assert_eq!(settings.user_agent, "test-agent");
    }

    #[test]
    fn missing_user_agent_falls_back_to_default() {
        let settings = Config::default().settings();
        assert_eq!(settings.user_agent, Settings::default().user_agent);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::parse("[storage\npath = 1").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.api.per_page, 100);
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\nformat = \"json\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }
}
