use anyhow::Result;
use clap::Parser;
use sqldump_validator::{
    app::AppState,
    archive,
    config::{Config, DEFAULT_CONFIG_FILE},
    dispatch::{DumpKind, PROCESSING_TEXT, render_error},
    input_path::get_dump_path,
};
use std::path::{Path, PathBuf};

/// 检查 SQL 备份（.sql，或 .zip/.rar 中的第一个 .sql 文件）：
/// 统计 CREATE TABLE 数量，列出最后 5 个表名。
///
/// “Backup completo” 是近似判断：最后 5 个表名中出现 whatsapp_ 开头的表。
#[derive(Parser, Debug)]
#[command(name = "sqldump-cli", version, about, long_about = None)]
struct Cli {
    /// 备份文件路径；省略时使用配置中的 default_path 或交互输入
    path: Option<PathBuf>,

    /// 配置文件路径（默认读取当前目录下的 sqldump.toml，不存在则使用默认配置）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 只列出压缩包中的成员，不扫描
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_or_default(DEFAULT_CONFIG_FILE)?,
    };

    #[cfg(feature = "logging")]
    sqldump_validator::logging::init_logging(
        sqldump_validator::logging::LogConfig::from_settings(&config.log)?,
    )?;

    let path = get_dump_path(cli.path, config.input.default_path.as_deref())?;

    if cli.list {
        list_archive(&path);
        return Ok(());
    }

    let mut state = AppState::with_member_suffix(config.input.member_suffix.clone());
    state.begin(&path)?;
    // 进度提示写到 stderr，stdout 只输出报告
    eprintln!("{PROCESSING_TEXT}");
    if let Some(report) = state.wait() {
        println!("{report}");
    }
    Ok(())
}

fn list_archive(path: &Path) {
    let kind = DumpKind::from_path(path);
    let Some(archive_kind) = kind.archive_kind() else {
        println!("{} 不是压缩包", path.display());
        return;
    };

    match archive::list_members(archive_kind, path) {
        Ok(names) => {
            for name in names {
                println!("{name}");
            }
        }
        Err(e) => println!("{}", render_error(kind, &e)),
    }
}
