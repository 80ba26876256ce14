//! 备份完整性判断
//!
//! 这是一个近似判断：只要最近的表名（最多 5 个）中有以 `whatsapp_` 开头的，
//! 就认为备份已经导出到了靠后的阶段。它不检查表结构，也不看已被淘汰的表名。

use crate::dump::types::COMPLETE_TABLE_PREFIX;

/// 最近表名中是否存在以 `whatsapp_` 开头的表名
#[must_use]
pub fn is_complete<S: AsRef<str>>(recent_tables: &[S]) -> bool {
    recent_tables
        .iter()
        .any(|name| name.as_ref().starts_with(COMPLETE_TABLE_PREFIX))
}
