//! 按扩展名分发备份文件
//!
//! `.sql` 直接扫描；`.zip` / `.rar` 先定位第一个 `.sql` 成员再扫描；
//! 其他扩展名直接返回“不支持”。所有错误都在这里转换为面向用户的文本。

#[cfg(feature = "async")]
pub mod async_impl;

use crate::archive::{self, ArchiveKind, SQL_MEMBER_SUFFIX};
use crate::dump::{self, ScanResult};
use crate::error::{DumpError, Result};
use std::{ffi::OsStr, path::Path};

/// 普通文件无法打开时的前缀
pub const OPEN_ERROR_PREFIX: &str = "Erro ao abrir o arquivo: ";
/// 扫描中途读取失败时的前缀
pub const READ_ERROR_PREFIX: &str = "Erro durante a leitura do arquivo: ";
/// 扩展名不受支持
pub const UNSUPPORTED_TEXT: &str = "Formato de arquivo não suportado.";
/// 扫描进行中的提示
pub const PROCESSING_TEXT: &str = "Processando...";

/// 输入文件的类型，由扩展名决定（不区分大小写，不检查文件内容）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpKind {
    Plain,
    Zip,
    Rar,
    Unsupported,
}

impl DumpKind {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        // `Path::extension` 对 `.sql` 这类以点开头的文件名返回 None，
        // 这里取文件名最后一个点之后的部分
        let ext = path
            .extension()
            .or_else(|| {
                let name = path.file_name()?.to_str()?;
                name.rsplit_once('.').map(|(_, ext)| OsStr::new(ext))
            })
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("sql") => DumpKind::Plain,
            Some("zip") => DumpKind::Zip,
            Some("rar") => DumpKind::Rar,
            _ => DumpKind::Unsupported,
        }
    }

    pub fn archive_kind(self) -> Option<ArchiveKind> {
        match self {
            DumpKind::Zip => Some(ArchiveKind::Zip),
            DumpKind::Rar => Some(ArchiveKind::Rar),
            DumpKind::Plain | DumpKind::Unsupported => None,
        }
    }
}

/// 一次处理的结果（错误除外）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 完成扫描
    Report(ScanResult),
    /// 压缩包中没有 `.sql` 成员
    NotFound(ArchiveKind),
}

impl Outcome {
    /// 转换为面向用户的文本
    pub fn render(&self) -> String {
        match self {
            Outcome::Report(result) => dump::format_report(result),
            Outcome::NotFound(kind) => {
                format!("Nenhum arquivo SQL encontrado no {}.", kind.label())
            }
        }
    }
}

/// 将错误转换为面向用户的文本。
///
/// 读取中断时已统计的部分结果会被丢弃。
pub fn render_error(kind: DumpKind, err: &DumpError) -> String {
    if err.is_interrupted() {
        return format!("{READ_ERROR_PREFIX}{}", err.cause_text());
    }
    if err.is_unsupported() {
        return UNSUPPORTED_TEXT.to_string();
    }

    match kind.archive_kind() {
        Some(archive) => format!(
            "Erro ao processar o arquivo {}: {}",
            archive.label(),
            err.cause_text()
        ),
        None => format!("{OPEN_ERROR_PREFIX}{}", err.cause_text()),
    }
}

/// 处理备份文件，返回结构化结果。压缩包中查找以 `.sql` 结尾的成员。
///
/// # Errors
/// - `DumpError::UnsupportedFormat` - 扩展名不受支持
/// - `DumpError::Io` / `Zip` / `Rar` - 无法打开或读取
/// - `DumpError::Interrupted` - 扫描中途读取失败
pub fn process_detailed<P: AsRef<Path>>(path: P) -> Result<Outcome> {
    process_detailed_with_suffix(path, SQL_MEMBER_SUFFIX)
}

/// 同 [`process_detailed`]，但使用自定义的成员后缀。
/// 找不到匹配成员时仍返回 [`Outcome::NotFound`]，渲染文本不随后缀变化。
///
/// # Errors
/// 见 [`process_detailed`]
pub fn process_detailed_with_suffix<P: AsRef<Path>>(
    path: P,
    member_suffix: &str,
) -> Result<Outcome> {
    let path = path.as_ref();
    let kind = DumpKind::from_path(path);

    #[cfg(feature = "logging")]
    tracing::info!("处理备份文件: {} ({:?})", path.display(), kind);

    match (kind, kind.archive_kind()) {
        (DumpKind::Plain, _) => dump::scan_file(path).map(Outcome::Report),
        (_, Some(archive_kind)) => {
            // 只扫描第一个匹配的成员
            let found = archive::find_first_match(
                archive_kind,
                path,
                member_suffix,
                |entry| dump::scan(entry),
            )?;
            Ok(found
                .map(Outcome::Report)
                .unwrap_or(Outcome::NotFound(archive_kind)))
        }
        _ => Err(DumpError::unsupported(path.display().to_string())),
    }
}

/// 处理备份文件并返回报告文本。不会失败：所有错误都转换为文本。
pub fn process<P: AsRef<Path>>(path: P) -> String {
    process_with_suffix(path, SQL_MEMBER_SUFFIX)
}

/// 同 [`process`]，但使用自定义的成员后缀。
///
/// 找不到匹配成员时的文本固定为 `Nenhum arquivo SQL encontrado no ZIP.` /
/// `... no RAR.`，不包含 `member_suffix`。
pub fn process_with_suffix<P: AsRef<Path>>(path: P, member_suffix: &str) -> String {
    let path = path.as_ref();
    match process_detailed_with_suffix(path, member_suffix) {
        Ok(outcome) => outcome.render(),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::error!("处理 {} 失败: {}", path.display(), e);
            render_error(DumpKind::from_path(path), &e)
        }
    }
}
