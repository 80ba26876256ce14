//! 压缩包成员定位模块
//!
//! 在 ZIP / RAR 压缩包中按容器自身的顺序查找第一个名称以指定后缀结尾的成员，
//! 并在回调期间以字节流的形式提供给调用方。两种格式共享同一个约定：
//!
//! - `Ok(Some(value))`：找到成员，`value` 为回调的返回值
//! - `Ok(None)`：没有匹配的成员（不是错误）
//! - `Err(_)`：容器损坏或读取失败
//!
//! 压缩包和成员句柄只在回调期间存在，回调返回（包括出错）后立即释放。

#[cfg(feature = "rar")]
pub mod rar_reader;
#[cfg(feature = "zip")]
pub mod zip_reader;

use crate::error::{DumpError, Result};
use std::{
    fmt,
    io::{self, Read},
    path::Path,
};

/// 备份文件在压缩包中的后缀（区分大小写）
pub const SQL_MEMBER_SUFFIX: &str = ".sql";

/// 支持的压缩包格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    Zip,
    Rar,
}

impl ArchiveKind {
    /// 用于报告文本的格式名称
    pub fn label(self) -> &'static str {
        match self {
            ArchiveKind::Zip => "ZIP",
            ArchiveKind::Rar => "RAR",
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 压缩包中的一个成员：名称和内容字节流
pub struct ArchiveEntry<'a> {
    name: String,
    content: &'a mut dyn Read,
}

impl<'a> ArchiveEntry<'a> {
    pub fn new(name: String, content: &'a mut dyn Read) -> Self {
        Self { name, content }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Read for ArchiveEntry<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.content.read(buf)
    }
}

impl fmt::Debug for ArchiveEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchiveEntry").field("name", &self.name).finish()
    }
}

/// 在压缩包中查找第一个名称以 `suffix` 结尾的成员，并将其交给 `f` 处理。
///
/// 找到后不再查看后面的成员；即使有多个匹配的成员，也只处理第一个。
///
/// # Errors
/// - 容器无法打开、损坏或成员读取失败
/// - `f` 返回的错误原样传出
/// - 对应格式的 feature 未启用时返回 `DumpError::UnsupportedFormat`
pub fn find_first_match<P, T, F>(
    kind: ArchiveKind,
    path: P,
    suffix: &str,
    f: F,
) -> Result<Option<T>>
where
    P: AsRef<Path>,
    F: FnOnce(ArchiveEntry<'_>) -> Result<T>,
{
    match kind {
        #[cfg(feature = "zip")]
        ArchiveKind::Zip => zip_reader::find_first_match(path, suffix, f),
        #[cfg(feature = "rar")]
        ArchiveKind::Rar => rar_reader::find_first_match(path, suffix, f),
        #[allow(unreachable_patterns)]
        other => {
            let _ = (path, suffix, f);
            Err(DumpError::unsupported(other.label()))
        }
    }
}

/// 按容器顺序列出压缩包中的所有成员名称
///
/// # Errors
/// 容器无法打开或损坏；对应格式的 feature 未启用时返回 `DumpError::UnsupportedFormat`
pub fn list_members<P: AsRef<Path>>(
    kind: ArchiveKind,
    path: P,
) -> Result<Vec<String>> {
    match kind {
        #[cfg(feature = "zip")]
        ArchiveKind::Zip => zip_reader::list_members(path),
        #[cfg(feature = "rar")]
        ArchiveKind::Rar => rar_reader::list_members(path),
        #[allow(unreachable_patterns)]
        other => {
            let _ = path;
            Err(DumpError::unsupported(other.label()))
        }
    }
}
