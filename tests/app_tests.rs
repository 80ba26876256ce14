//! 后台任务与应用状态的集成测试

mod common;

use sqldump_validator::app::{AppState, ScanJob};
use sqldump_validator::dispatch::{PROCESSING_TEXT, UNSUPPORTED_TEXT};
use tempfile::TempDir;

#[test]
fn test_job_publishes_report() {
    let dir = TempDir::new().unwrap();
    let path = common::create_file(&dir, "backup.sql", common::SAMPLE_DUMP.as_bytes());

    let report = ScanJob::spawn(&path).unwrap().wait();
    assert!(report.starts_with("O arquivo tem 7 tabelas"));
}

#[test]
fn test_job_error_text_is_published() {
    let report = ScanJob::spawn("backup.docx").unwrap().wait();
    assert_eq!(report, UNSUPPORTED_TEXT);
}

#[test]
fn test_state_sequential_scans() {
    let dir = TempDir::new().unwrap();
    let first = common::create_file(&dir, "a.sql", b"CREATE TABLE a (x)\n");
    let second = common::create_file(&dir, "b.sql", b"CREATE TABLE whatsapp_b (x)\n");

    let mut state = AppState::new();
    state.begin(&first).unwrap();
    assert_eq!(state.status_text(), PROCESSING_TEXT);
    assert!(state.wait().unwrap().ends_with("Backup incompleto"));

    state.begin(&second).unwrap();
    assert!(state.wait().unwrap().ends_with("Backup completo"));
    assert!(!state.is_busy());
}
