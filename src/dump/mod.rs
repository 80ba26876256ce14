//! SQL 备份文件扫描模块
//!
//! 提供 `CREATE TABLE` 行的检测、表名提取、最近表名窗口、完整性判断和报告格式化

pub mod evaluator;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod window;

// 重新导出核心类型和函数
pub use evaluator::is_complete;
pub use report::format_report;
pub use scanner::{DumpScanner, scan, scan_buffered, scan_file};
pub use types::{
    COMPLETE_TABLE_PREFIX, CREATE_TABLE_MARKER, RECENT_WINDOW_CAPACITY,
    ScanResult,
};
pub use utils::{extract_table_name, is_create_table_line};
pub use window::RecentWindow;
