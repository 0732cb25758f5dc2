use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{LinkshortError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，示例：LS__API__BASE_URL=https://s.example.com
pub const ENV_PREFIX: &str = "LS";

/// 客户端配置（从 TOML + 环境变量加载）
///
/// - api: 后端地址与请求超时
/// - logging: 日志配置
/// - ui: TUI 刷新节奏与提示时长
/// - telemetry: web-vitals 上报开关
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置，失败时回退到默认值
    ///
    /// 优先级：ENV > config.toml > 默认值
    pub fn load(path: Option<&str>) -> Self {
        match Self::build(path, None) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 构建配置
    ///
    /// `env` 为 `None` 时读取进程环境变量；测试中可以传入一个映射代替。
    pub fn build(path: Option<&str>, env: Option<HashMap<String, String>>) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 检查配置值是否可用
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            LinkshortError::config(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;
        if !parsed.has_host() {
            return Err(LinkshortError::config(format!(
                "api.base_url '{}' has no host",
                self.api.base_url
            )));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(LinkshortError::config("ui.tick_rate_ms must be positive"));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| LinkshortError::config(e.to_string()))?;
        }

        std::fs::write(path, content).map_err(|e| LinkshortError::config(e.to_string()))?;
        Ok(())
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 单次请求超时（秒），不设置则不超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// TUI 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// 自动重新验证间隔（秒），0 表示关闭
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
}

/// 遥测配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enabled: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_refresh_interval_secs() -> u64 {
    30
}

fn default_toast_duration_secs() -> u64 {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            refresh_interval_secs: default_refresh_interval_secs(),
            toast_duration_secs: default_toast_duration_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ui.refresh_interval_secs, 30);
        assert!(!config.telemetry.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = AppConfig::generate_sample_config();
        assert!(sample.contains("[api]"), "got: {}", sample);
        let parsed: AppConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(LinkshortError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }
}
