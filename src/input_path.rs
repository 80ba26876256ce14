use crate::error::{DumpError, Result};
use dialoguer::Input;
use std::{io, path::PathBuf};

/// 获取备份文件路径：优先命令行参数，其次配置中的默认路径，否则交互输入
pub fn get_dump_path(
    cli_path: Option<PathBuf>,
    default_path: Option<&str>,
) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        return Ok(path);
    }
    if let Some(path) = default_path {
        return Ok(PathBuf::from(path));
    }

    let input: String = Input::new()
        .with_prompt("请输入备份文件路径 (.sql / .zip / .rar)")
        .interact_text()
        .map_err(|e| DumpError::Io(io::Error::other(e)))?;
    Ok(PathBuf::from(input.trim()))
}
