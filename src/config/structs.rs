use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SignalError};
use crate::registry::TimingDefaults;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 `SR__REGISTRY__DEFAULTS__GREEN=45`
pub const ENV_PREFIX: &str = "SR";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - registry: 新建信号时的默认时长
/// - logging: 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 `config.toml` 和环境变量加载配置，失败时回退到默认值
    ///
    /// 优先级：ENV > config.toml > 默认值
    pub fn load() -> Self {
        match Self::build(Path::new(DEFAULT_CONFIG_PATH), false, Self::environment()) {
            Ok(config) => {
                if Path::new(DEFAULT_CONFIG_PATH).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", DEFAULT_CONFIG_PATH);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                Self::default()
            }
        }
    }

    /// 从指定文件加载配置；文件必须存在
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::build(path.as_ref(), true, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    pub(crate) fn build(
        path: &Path,
        required: bool,
        environment: config::Environment,
    ) -> Result<Self> {
        use config::{Config, File, FileFormat};

        let path_str = path.to_str().ok_or_else(|| {
            SignalError::config(format!("Config path is not valid UTF-8: {}", path.display()))
        })?;

        let settings = Config::builder()
            // 1. 从 TOML 文件加载
            .add_source(File::new(path_str, FileFormat::Toml).required(required))
            // 2. 从环境变量覆盖，前缀 SR，分隔符 __
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 注册表配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    #[serde(default)]
    pub defaults: TimingDefaults,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
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
    false
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
