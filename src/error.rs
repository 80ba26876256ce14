//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。
//! 注意：压缩包中找不到 `.sql` 成员不是错误，见 [`crate::dispatch::Outcome::NotFound`]。

use crate::dump::ScanResult;
use std::{io, path::PathBuf};

/// 备份检查的结果类型
pub type Result<T> = std::result::Result<T, DumpError>;

/// 备份检查错误类型
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// IO错误（打开文件、读取压缩包等）
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),

    /// ZIP 容器错误
    #[cfg(feature = "zip")]
    #[error("ZIP错误: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// RAR 容器错误
    #[cfg(feature = "rar")]
    #[error("RAR错误: {0}")]
    Rar(#[from] unrar::error::UnrarError),

    /// 逐行扫描过程中读取失败，`partial` 保存失败前已统计的结果
    #[error("读取中断: {source}")]
    Interrupted {
        partial: ScanResult,
        #[source]
        source: io::Error,
    },

    /// 不支持的文件格式（扩展名不在 .sql/.zip/.rar 之内，或对应 feature 未启用）
    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),

    /// 已有扫描任务在运行
    #[error("已有扫描任务在运行: {}", .0.display())]
    Busy(PathBuf),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 配置文件解析错误
    #[error("配置解析错误: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// 配置文件序列化错误
    #[error("配置序列化错误: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl DumpError {
    /// 创建一个配置错误
    pub fn config<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("配置错误: {}", message);
        Self::Config(message)
    }

    /// 创建一个格式不支持错误
    pub fn unsupported<S: Into<String>>(what: S) -> Self {
        Self::UnsupportedFormat(what.into())
    }

    /// 底层原因的文本，不带本库的前缀，用于拼接到面向用户的报告中
    pub fn cause_text(&self) -> String {
        match self {
            DumpError::Io(e) => e.to_string(),
            #[cfg(feature = "zip")]
            DumpError::Zip(e) => e.to_string(),
            #[cfg(feature = "rar")]
            DumpError::Rar(e) => e.to_string(),
            DumpError::Interrupted { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }

    /// 读取中断时已经统计出的部分结果
    pub fn partial_result(&self) -> Option<&ScanResult> {
        match self {
            DumpError::Interrupted { partial, .. } => Some(partial),
            _ => None,
        }
    }

    /// 检查是否为 IO 错误
    pub fn is_io_error(&self) -> bool {
        matches!(self, DumpError::Io(_))
    }

    /// 检查是否为读取中断
    pub fn is_interrupted(&self) -> bool {
        matches!(self, DumpError::Interrupted { .. })
    }

    /// 检查是否为格式不支持
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DumpError::UnsupportedFormat(_))
    }

    /// 检查是否为配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DumpError::Config(_) | DumpError::TomlDe(_) | DumpError::TomlSer(_)
        )
    }
}
