use crate::api::RetryPolicy;
use crate::doc_ref::{DocumentParser, UNKNOWN_FILE_NAME};
use crate::record::DEFAULT_MAX_DISPLAY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://buildsense.asia/docx_utils";

/// Record API settings (optional `[api]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/pangzhan/` endpoints are resolved under it.
    pub base_url: String,
    /// Records fetched per list request.
    pub page_limit: u32,
    /// Maximum attempts per request (including the first).
    pub max_attempts: u32,
    /// Base delay in milliseconds for exponential backoff.
    pub base_delay_ms: u64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            page_limit: 50,
            max_attempts: 4,
            base_delay_ms: 300,
            max_delay_secs: 10,
        }
    }
}

impl ApiConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay: Duration::from_millis(self.base_delay_ms),
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/pangzhan/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PangzhanConfig {
    /// Name shown for documents whose URL has no usable file name.
    pub placeholder_name: String,
    /// Documents shown before collapsing the rest into "+N more".
    pub summary_max_display: usize,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for PangzhanConfig {
    fn default() -> Self {
        Self {
            placeholder_name: UNKNOWN_FILE_NAME.to_string(),
            summary_max_display: DEFAULT_MAX_DISPLAY,
            api: ApiConfig::default(),
        }
    }
}

impl PangzhanConfig {
    pub fn parser(&self) -> DocumentParser {
        DocumentParser::with_placeholder(self.placeholder_name.as_str())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pangzhan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PangzhanConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<PangzhanConfig> {
    if !path.exists() {
        let default_cfg = PangzhanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PangzhanConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PangzhanConfig::default();
        assert_eq!(cfg.placeholder_name, "unknown file");
        assert_eq!(cfg.summary_max_display, 3);
        assert_eq!(cfg.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.api.page_limit, 50);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PangzhanConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PangzhanConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn api_section_is_optional() {
        let toml = r#"
            placeholder_name = "未知文件"
            summary_max_display = 5
        "#;
        let cfg: PangzhanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.placeholder_name, "未知文件");
        assert_eq!(cfg.summary_max_display, 5);
        assert_eq!(cfg.api, ApiConfig::default());
        assert_eq!(cfg.parser().placeholder(), "未知文件");
    }

    #[test]
    fn partial_api_section() {
        let toml = r#"
            placeholder_name = "unknown file"
            summary_max_display = 3

            [api]
            base_url = "http://127.0.0.1:8000"
            max_attempts = 2
        "#;
        let cfg: PangzhanConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.api.max_attempts, 2);
        assert_eq!(cfg.api.base_delay_ms, 300);
        let policy = cfg.api.retry_policy();
        assert_eq!(policy.base_delay, Duration::from_millis(300));
        assert_eq!(policy.max_delay, Duration::from_secs(10));
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let api = ApiConfig {
            max_attempts: 0,
            ..ApiConfig::default()
        };
        assert_eq!(api.retry_policy().max_attempts, 1);
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, PangzhanConfig::default());
        assert!(path.exists());

        fs::write(&path, "placeholder_name = \"x\"\nsummary_max_display = 1\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg.placeholder_name, "x");
        assert_eq!(cfg.summary_max_display, 1);
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "summary_max_display = \"many\"").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.toml"));
    }
}
