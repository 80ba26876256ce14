use crate::dump::{evaluator, window::RecentWindow};

/// 建表语句的行首标记（区分大小写，不允许前导空白）
pub const CREATE_TABLE_MARKER: &[u8] = b"CREATE TABLE";

/// 最近表名窗口的容量
pub const RECENT_WINDOW_CAPACITY: usize = 5;

/// 判定备份完整的表名前缀
pub const COMPLETE_TABLE_PREFIX: &str = "whatsapp_";

/// 一次扫描的结果，构造后不可变
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScanResult {
    /// `CREATE TABLE` 行的数量
    table_count: usize,
    /// 最近的表名，按出现顺序（旧 -> 新），最多 5 个
    recent_tables: Vec<String>,
    /// 最近表名中是否存在 `whatsapp_` 前缀
    complete: bool,
}

impl ScanResult {
    /// 由计数和表名序列构造结果。
    ///
    /// 表名会依次放入容量为 5 的窗口，因此只保留最后 5 个；
    /// 完整性标志只根据保留下来的表名计算。
    pub fn new<I>(table_count: usize, tables: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut window = RecentWindow::new();
        for name in tables {
            window.push(name);
        }
        Self::from_window(table_count, &window)
    }

    pub(crate) fn from_window(table_count: usize, window: &RecentWindow) -> Self {
        let recent_tables: Vec<String> = window.iter().cloned().collect();
        let complete = evaluator::is_complete(&recent_tables);
        Self { table_count, recent_tables, complete }
    }

    pub fn table_count(&self) -> usize {
        self.table_count
    }

    pub fn recent_tables(&self) -> &[String] {
        &self.recent_tables
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
