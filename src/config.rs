//! 配置管理模块
//!
//! 提供统一的配置文件读取和管理功能。扫描核心本身不读取配置，
//! 配置只影响命令行工具（日志输出、默认输入路径、压缩包成员后缀）。

use crate::archive::SQL_MEMBER_SUFFIX;
use crate::error::{DumpError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 默认配置文件名（位于当前工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "sqldump.toml";

/// 主配置结构体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 输入配置
    #[serde(default)]
    pub input: InputConfig,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// 是否启用控制台输出
    pub enable_stdout: bool,
    /// 日志输出目录
    pub log_dir: String,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 输入配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// 未在命令行给出路径时使用的备份文件
    pub default_path: Option<String>,
    /// 压缩包中备份成员的后缀（区分大小写）
    pub member_suffix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enable_stdout: false,
            log_dir: "logs".to_string(),
            level: "info".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { default_path: None, member_suffix: SQL_MEMBER_SUFFIX.to_string() }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 配置文件存在时加载，不存在时使用默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() { Self::from_file(path) } else { Ok(Self::default()) }
    }

    /// 从字符串加载配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        match self.log.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(DumpError::config(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        if self.input.member_suffix.is_empty() {
            return Err(DumpError::config("member_suffix 不能为空"));
        }

        Ok(())
    }
}
