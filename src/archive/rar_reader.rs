//! RAR 压缩包读取：按文件头顺序遍历
//!
//! unrar 不提供成员的流式读取接口。匹配的成员先解压到临时目录中的文件，
//! 再以文件流的形式交给回调，内存占用与成员大小无关。临时目录在回调返回后删除。

use crate::archive::ArchiveEntry;
use crate::error::Result;
use std::{fs::File, path::Path};
use unrar::Archive;

/// 临时目录名前缀
const EXTRACT_DIR_PREFIX: &str = "sqldump-rar-";

/// 解压后的文件名（与成员原名无关，避免成员路径中的目录层级）
const EXTRACTED_FILE_NAME: &str = "member.sql";

/// 按文件头顺序查找第一个名称以 `suffix` 结尾的文件成员。
///
/// 不匹配的成员直接跳过，不会解压。压缩包以无密码方式打开。
/// 匹配的成员解压到系统临时目录下。
pub fn find_first_match<P, T, F>(path: P, suffix: &str, f: F) -> Result<Option<T>>
where
    P: AsRef<Path>,
    F: FnOnce(ArchiveEntry<'_>) -> Result<T>,
{
    find_first_match_in(path, suffix, std::env::temp_dir(), f)
}

/// 同 [`find_first_match`]，但匹配的成员解压到 `extract_base` 下的临时子目录
pub fn find_first_match_in<P, B, T, F>(
    path: P,
    suffix: &str,
    extract_base: B,
    f: F,
) -> Result<Option<T>>
where
    P: AsRef<Path>,
    B: AsRef<Path>,
    F: FnOnce(ArchiveEntry<'_>) -> Result<T>,
{
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("打开 RAR 压缩包: {}", path.display());

    let mut archive = Archive::new(path).open_for_processing()?;
    while let Some(header) = archive.read_header()? {
        let entry = header.entry();
        let name = entry.filename.to_string_lossy().into_owned();

        if entry.is_file() && name.ends_with(suffix) {
            #[cfg(feature = "logging")]
            tracing::info!("使用 RAR 成员: {} ({} 字节)", name, entry.unpacked_size);

            let temp_dir = tempfile::Builder::new()
                .prefix(EXTRACT_DIR_PREFIX)
                .tempdir_in(extract_base.as_ref())?;
            let target = temp_dir.path().join(EXTRACTED_FILE_NAME);
            // 解压完成后压缩包句柄不再需要
            drop(header.extract_to(&target)?);

            #[cfg(feature = "logging")]
            tracing::debug!("RAR 成员已解压到 {}", target.display());

            let mut content = File::open(&target)?;
            let value = f(ArchiveEntry::new(name, &mut content));
            drop(content);
            // 回调的错误优先于清理失败
            let cleanup = temp_dir.close();
            let value = value?;
            cleanup?;
            return Ok(Some(value));
        }

        #[cfg(feature = "logging")]
        tracing::trace!("跳过 RAR 成员: {}", name);
        archive = header.skip()?;
    }

    #[cfg(feature = "logging")]
    tracing::info!("RAR 压缩包中没有以 {} 结尾的成员", suffix);
    Ok(None)
}

/// 按文件头顺序列出成员名称
pub fn list_members<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let archive = Archive::new(path.as_ref()).open_for_listing()?;
    let mut names = Vec::new();
    for header in archive {
        names.push(header?.filename.to_string_lossy().into_owned());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dump.rar")
    }

    fn entries(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_match_is_read_from_extracted_file() {
        let base = TempDir::new().unwrap();

        let (name, text, during) = find_first_match_in(fixture(), ".sql", base.path(), |mut entry| {
            let mut text = String::new();
            entry.read_to_string(&mut text)?;
            Ok((entry.name().to_string(), text, entries(base.path())))
        })
        .unwrap()
        .unwrap();

        assert_eq!(name, "dump.sql");
        assert!(text.contains("CREATE TABLE `whatsapp_messages`"));
        assert_eq!(during, 1);
        assert_eq!(entries(base.path()), 0);
    }

    #[test]
    fn test_extracted_file_removed_when_callback_fails() {
        let base = TempDir::new().unwrap();

        let result: Result<Option<()>> = find_first_match_in(fixture(), ".sql", base.path(), |_| {
            Err(crate::error::DumpError::config("stop"))
        });

        assert!(result.unwrap_err().is_config_error());
        assert_eq!(entries(base.path()), 0);
    }

    #[test]
    fn test_no_match_extracts_nothing() {
        let base = TempDir::new().unwrap();
        let found = find_first_match_in(fixture(), ".csv", base.path(), |_| Ok(())).unwrap();

        assert!(found.is_none());
        assert_eq!(entries(base.path()), 0);
    }
}
