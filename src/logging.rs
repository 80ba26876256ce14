//! 日志初始化和配置模块
//!
//! 这个模块提供了统一的日志初始化功能，使用 tracing 库。
//! 默认配置：info 级别，输出到 logs 目录，按天滚动并保留 7 个文件。

use std::io;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "sqldump";

/// 保留的日志文件个数
const MAX_LOG_FILES: usize = 7;

/// 文件写入线程的 guard，进程结束前一直持有
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// 日志配置结构体
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 日志目录
    pub log_dir: String,
    /// 是否同时输出到控制台（stderr）
    pub enable_stdout: bool,
}

impl LogConfig {
    /// 创建新的日志配置，使用默认级别
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置日志级别
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// 设置日志目录
    pub fn log_dir<S: Into<String>>(mut self, log_dir: S) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// 设置是否输出到控制台
    pub fn enable_stdout(mut self, enable: bool) -> Self {
        self.enable_stdout = enable;
        self
    }

    /// 由配置文件中的 `[log]` 段构造
    pub fn from_settings(settings: &crate::config::LogConfig) -> LogResult<Self> {
        let level = settings.level.parse::<Level>().map_err(|_| {
            LogError::Config(format!("无效的日志级别: {}", settings.level))
        })?;
        Ok(Self {
            level,
            log_dir: settings.log_dir.clone(),
            enable_stdout: settings.enable_stdout,
        })
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_dir: "logs".to_string(),
            enable_stdout: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),
    #[error("日志配置错误: {0}")]
    Config(String),
    #[error("日志初始化错误: {0}")]
    Init(String),
}

/// 日志初始化结果
pub type LogResult<T> = Result<T, LogError>;

/// 初始化日志系统
///
/// - 输出到 `log_dir` 目录，按天滚动，保留 7 个文件
/// - 可选输出到控制台（stderr，不影响报告输出）
/// - `RUST_LOG` 环境变量优先于配置的级别
///
/// 重复调用不会报错，第二次起直接返回。
///
/// # Examples
///
/// ```no_run
/// use sqldump_validator::logging::{init_logging, LogConfig};
/// use tracing::Level;
///
/// let config = LogConfig::new().level(Level::DEBUG).enable_stdout(true);
/// init_logging(config).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> LogResult<()> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&config.log_dir)
        .map_err(|e| LogError::Init(e.to_string()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_timer(SystemTime)
        .with_target(true)
        .with_thread_names(true)
        .with_ansi(false); // 文件中不使用颜色

    // 控制台输出层写到 stderr，stdout 留给报告
    let console_layer = config.enable_stdout.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_timer(SystemTime)
            .with_target(false)
            .with_ansi(true)
    });

    match Registry::default()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
    {
        Ok(()) => {
            let _ = LOG_GUARD.set(guard);
            tracing::info!(
                "日志系统初始化完成 - 输出到 {} 目录，按天滚动",
                config.log_dir
            );
            Ok(())
        }
        // 已经有全局 subscriber（例如测试中），这不是错误
        Err(_) => Ok(()),
    }
}

/// 使用默认配置初始化日志系统
pub fn init_default_logging() -> LogResult<()> {
    init_logging(LogConfig::default())
}
