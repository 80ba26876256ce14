//! 扫描报告格式化

use crate::dump::types::ScanResult;
use std::fmt::Write;

const COMPLETE_TEXT: &str = "Backup completo";
const INCOMPLETE_TEXT: &str = "Backup incompleto";

/// 将扫描结果格式化为面向用户的文本报告
#[must_use]
pub fn format_report(result: &ScanResult) -> String {
    let mut report = format!(
        "O arquivo tem {} tabelas\n\nÚltimas 5 tabelas criadas:\n",
        result.table_count()
    );

    for table in result.recent_tables() {
        // 写入 String 不会失败
        let _ = write!(report, "\n- {table}");
    }

    report.push_str("\n\n\n");
    report.push_str(if result.is_complete() {
        COMPLETE_TEXT
    } else {
        INCOMPLETE_TEXT
    });
    report
}
