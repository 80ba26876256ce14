// 核心模块 - 始终可用
pub mod dump;
pub mod error;

// 压缩包与分发
pub mod archive;
pub mod dispatch;

// 应用层：后台任务、配置、命令行输入
pub mod app;
pub mod config;
pub mod input_path;

// 日志模块 - 需要 logging 功能
#[cfg(feature = "logging")]
pub mod logging;

pub use dispatch::{DumpKind, Outcome, process, process_detailed};
pub use dump::{ScanResult, format_report, is_complete, scan};
pub use error::{DumpError, Result};
