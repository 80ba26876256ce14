//! 应用状态与后台扫描任务
//!
//! 扫描在独立线程中运行，结果通过 channel 发回调用方线程，
//! 由调用方把报告写入 [`AppState`]。同一时间只允许一个扫描任务。

use crate::archive::SQL_MEMBER_SUFFIX;
use crate::dispatch::{self, PROCESSING_TEXT, READ_ERROR_PREFIX};
use crate::error::{DumpError, Result};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread::{self, JoinHandle},
};

/// 后台线程没有发回结果就退出时使用的原因文本
const WORKER_LOST_CAUSE: &str = "scan worker exited without a result";

/// 在后台线程中运行的一次扫描
#[derive(Debug)]
pub struct ScanJob {
    path: PathBuf,
    receiver: Receiver<String>,
    handle: Option<JoinHandle<()>>,
}

impl ScanJob {
    /// 启动后台扫描，压缩包中查找 `.sql` 成员
    ///
    /// # Errors
    /// 无法创建线程时返回 `DumpError::Io`
    pub fn spawn<P: Into<PathBuf>>(path: P) -> Result<Self> {
        Self::spawn_with_suffix(path, SQL_MEMBER_SUFFIX)
    }

    /// 启动后台扫描，使用自定义的成员后缀
    ///
    /// # Errors
    /// 无法创建线程时返回 `DumpError::Io`
    pub fn spawn_with_suffix<P: Into<PathBuf>>(
        path: P,
        member_suffix: &str,
    ) -> Result<Self> {
        let path = path.into();
        let (tx, receiver) = mpsc::channel();

        let worker_path = path.clone();
        let suffix = member_suffix.to_string();
        let handle = thread::Builder::new()
            .name("dump-scan".to_string())
            .spawn(move || {
                let report = dispatch::process_with_suffix(&worker_path, &suffix);
                // 接收端已丢弃时结果无人需要
                let _ = tx.send(report);
            })?;

        #[cfg(feature = "logging")]
        tracing::debug!("后台扫描已启动: {}", path.display());

        Ok(Self { path, receiver, handle: Some(handle) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 非阻塞地获取结果，扫描未结束时返回 `None`
    pub fn try_result(&mut self) -> Option<String> {
        match self.receiver.try_recv() {
            Ok(report) => {
                self.join();
                Some(report)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                Some(format!("{READ_ERROR_PREFIX}{WORKER_LOST_CAUSE}"))
            }
        }
    }

    /// 阻塞等待结果
    pub fn wait(mut self) -> String {
        let report = self
            .receiver
            .recv()
            .unwrap_or_else(|_| format!("{READ_ERROR_PREFIX}{WORKER_LOST_CAUSE}"));
        self.join();
        report
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                #[cfg(feature = "logging")]
                tracing::error!("后台扫描线程 panic: {}", self.path.display());
            }
        }
    }
}

/// 应用状态：当前任务和最近一次发布的报告
#[derive(Debug)]
pub struct AppState {
    member_suffix: String,
    job: Option<ScanJob>,
    last_report: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_member_suffix(SQL_MEMBER_SUFFIX)
    }

    pub fn with_member_suffix<S: Into<String>>(member_suffix: S) -> Self {
        Self { member_suffix: member_suffix.into(), job: None, last_report: None }
    }

    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    /// 开始扫描。已有任务在运行时拒绝启动。
    ///
    /// # Errors
    /// - `DumpError::Busy` - 已有任务在运行
    /// - `DumpError::Io` - 无法创建线程
    pub fn begin<P: Into<PathBuf>>(&mut self, path: P) -> Result<()> {
        if let Some(job) = &self.job {
            return Err(DumpError::Busy(job.path().to_path_buf()));
        }
        self.job = Some(ScanJob::spawn_with_suffix(path, &self.member_suffix)?);
        Ok(())
    }

    /// 检查后台任务是否完成；完成时发布报告并返回
    pub fn poll(&mut self) -> Option<&str> {
        let report = self.job.as_mut()?.try_result()?;
        self.job = None;
        self.last_report = Some(report);
        self.last_report.as_deref()
    }

    /// 阻塞等待当前任务完成并发布报告；没有任务时返回 `None`
    pub fn wait(&mut self) -> Option<&str> {
        let job = self.job.take()?;
        self.last_report = Some(job.wait());
        self.last_report.as_deref()
    }

    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    /// 当前应显示的文本：运行中为“Processando...”，否则为最近的报告
    pub fn status_text(&self) -> &str {
        if self.is_busy() {
            PROCESSING_TEXT
        } else {
            self.last_report.as_deref().unwrap_or("")
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
