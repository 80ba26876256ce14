//! 备份文件逐行扫描的工具函数

use crate::dump::types::CREATE_TABLE_MARKER;
use std::borrow::Cow;

/// 判断一行是否为建表语句：行首必须恰好是 `CREATE TABLE`
#[must_use]
pub fn is_create_table_line(line: &[u8]) -> bool {
    line.starts_with(CREATE_TABLE_MARKER)
}

/// 从建表语句中提取表名。
///
/// 按空白切分后取第三个字段，并去掉两端的反引号；
/// 字段不足三个时返回空字符串。
#[must_use]
pub fn extract_table_name(line: &str) -> String {
    line.split_whitespace()
        .nth(2)
        .map(|field| field.trim_matches('`').to_string())
        .unwrap_or_default()
}

/// 将行字节转换为字符串，非法 UTF-8 以替换字符代替
pub fn line_bytes_to_str(line: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(line)
}
