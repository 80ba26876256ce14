use crate::dump::{
    types::ScanResult,
    utils::{extract_table_name, is_create_table_line, line_bytes_to_str},
    window::RecentWindow,
};
use crate::error::{DumpError, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// 每处理多少行输出一次进度日志
#[cfg(feature = "logging")]
const PROGRESS_EVERY_LINES: u64 = 1_000_000;

/// 逐行扫描状态：建表语句计数和最近表名窗口
#[derive(Debug, Default)]
pub struct DumpScanner {
    table_count: usize,
    window: RecentWindow,
    line_count: u64,
}

impl DumpScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一行（不含换行符），返回该行是否为建表语句
    pub fn feed_line(&mut self, line: &[u8]) -> bool {
        self.line_count += 1;

        #[cfg(feature = "logging")]
        if self.line_count % PROGRESS_EVERY_LINES == 0 {
            tracing::debug!(
                "已扫描 {} 行，发现 {} 个建表语句",
                self.line_count,
                self.table_count
            );
        }

        if !is_create_table_line(line) {
            return false;
        }

        self.table_count += 1;
        let name = extract_table_name(&line_bytes_to_str(line));

        #[cfg(feature = "logging")]
        tracing::trace!("第 {} 行发现建表语句: {:?}", self.line_count, name);

        self.window.push(name);
        true
    }

    pub fn table_count(&self) -> usize {
        self.table_count
    }

    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// 当前状态的快照
    pub fn snapshot(&self) -> ScanResult {
        ScanResult::from_window(self.table_count, &self.window)
    }

    pub fn finish(self) -> ScanResult {
        self.snapshot()
    }
}

/// 扫描任意字节流
///
/// # Errors
/// - `DumpError::Interrupted` - 读取过程中发生 I/O 错误，携带已统计的部分结果
pub fn scan<R: Read>(reader: R) -> Result<ScanResult> {
    scan_buffered(BufReader::new(reader))
}

/// 扫描带缓冲的字节流。
///
/// 以 `\n` 切分行。流末尾没有换行符的最后一段不会被处理，
/// 这与原有工具的行为保持一致：不以换行结尾的最后一条建表语句会被漏掉。
///
/// # Errors
/// - `DumpError::Interrupted` - 读取过程中发生 I/O 错误，携带已统计的部分结果
pub fn scan_buffered<R: BufRead>(mut reader: R) -> Result<ScanResult> {
    let mut scanner = DumpScanner::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if buf.last() != Some(&b'\n') {
                    #[cfg(feature = "logging")]
                    tracing::debug!(
                        "流末尾的 {} 字节没有换行符，已忽略",
                        n
                    );
                    #[cfg(not(feature = "logging"))]
                    let _ = n;
                    break;
                }
                scanner.feed_line(&buf[..buf.len() - 1]);
            }
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::warn!(
                    "第 {} 行之后读取失败: {}",
                    scanner.line_count(),
                    e
                );
                return Err(DumpError::Interrupted {
                    partial: scanner.finish(),
                    source: e,
                });
            }
        }
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        "扫描完成: {} 行，{} 个建表语句",
        scanner.line_count(),
        scanner.table_count()
    );

    Ok(scanner.finish())
}

/// 打开并扫描一个普通 `.sql` 文件
///
/// # Errors
/// - `DumpError::Io` - 文件无法打开
/// - `DumpError::Interrupted` - 读取过程中发生 I/O 错误
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<ScanResult> {
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("开始扫描文件: {}", path.display());

    let file = File::open(path)?;
    scan(file)
}
