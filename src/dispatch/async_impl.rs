//! 异步分发：在 tokio 的阻塞线程池中运行扫描

use crate::dispatch::{READ_ERROR_PREFIX, process_with_suffix};
use crate::archive::SQL_MEMBER_SUFFIX;
use std::path::Path;

/// 异步处理备份文件，返回报告文本
pub async fn process_async<P: AsRef<Path>>(path: P) -> String {
    process_async_with_suffix(path, SQL_MEMBER_SUFFIX).await
}

/// 同 [`process_async`]，但使用自定义的成员后缀
pub async fn process_async_with_suffix<P: AsRef<Path>>(
    path: P,
    member_suffix: &str,
) -> String {
    let path = path.as_ref().to_path_buf();
    let suffix = member_suffix.to_string();

    tracing::debug!("提交后台扫描任务: {}", path.display());

    match tokio::task::spawn_blocking(move || process_with_suffix(&path, &suffix))
        .await
    {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("后台扫描任务异常结束: {}", e);
            format!("{READ_ERROR_PREFIX}{e}")
        }
    }
}
