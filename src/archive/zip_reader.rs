//! ZIP 压缩包读取：基于中央目录随机访问

use crate::archive::ArchiveEntry;
use crate::error::Result;
use std::{fs::File, io::BufReader, path::Path};
use zip::ZipArchive;

/// 打开 ZIP 压缩包
fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// 按中央目录顺序查找第一个名称以 `suffix` 结尾的成员。
///
/// 只解压匹配的那一个成员。
pub fn find_first_match<P, T, F>(path: P, suffix: &str, f: F) -> Result<Option<T>>
where
    P: AsRef<Path>,
    F: FnOnce(ArchiveEntry<'_>) -> Result<T>,
{
    let path = path.as_ref();
    let mut archive = open_archive(path)?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        "打开 ZIP 压缩包: {}，共 {} 个成员",
        path.display(),
        archive.len()
    );

    let index = (0..archive.len()).find(|&i| {
        archive.name_for_index(i).is_some_and(|name| name.ends_with(suffix))
    });
    let Some(index) = index else {
        #[cfg(feature = "logging")]
        tracing::info!("ZIP 压缩包中没有以 {} 结尾的成员", suffix);
        return Ok(None);
    };

    let mut member = archive.by_index(index)?;
    let name = member.name().to_string();

    #[cfg(feature = "logging")]
    tracing::info!("使用 ZIP 成员: {} ({} 字节)", name, member.size());

    f(ArchiveEntry::new(name, &mut member)).map(Some)
}

/// 按中央目录顺序列出成员名称
pub fn list_members<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let archive = open_archive(path.as_ref())?;
    Ok((0..archive.len())
        .filter_map(|i| archive.name_for_index(i).map(str::to_string))
        .collect())
}
