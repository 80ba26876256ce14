//! 最近表名窗口：容量固定为 5 的 FIFO

use crate::dump::types::RECENT_WINDOW_CAPACITY;
use std::collections::VecDeque;

/// 保存最近出现的表名，超过容量时淘汰最旧的一项
#[derive(Debug, Clone)]
pub struct RecentWindow {
    items: VecDeque<String>,
}

impl RecentWindow {
    pub fn new() -> Self {
        Self { items: VecDeque::with_capacity(RECENT_WINDOW_CAPACITY + 1) }
    }

    /// 追加一个表名，返回被淘汰的表名（如果有）
    pub fn push(&mut self, name: String) -> Option<String> {
        self.items.push_back(name);
        if self.items.len() > RECENT_WINDOW_CAPACITY {
            self.items.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 按出现顺序（旧 -> 新）遍历
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.items.iter()
    }
}

impl Default for RecentWindow {
    fn default() -> Self {
        Self::new()
    }
}
