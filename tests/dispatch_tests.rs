//! 分发与报告文本的集成测试

mod common;

use sqldump_validator::dispatch::{
    DumpKind, OPEN_ERROR_PREFIX, Outcome, UNSUPPORTED_TEXT, process, process_detailed,
    process_with_suffix,
};
use tempfile::TempDir;

#[test]
fn test_plain_sql_report() {
    let dir = TempDir::new().unwrap();
    let path = common::create_file(&dir, "backup.sql", b"CREATE TABLE a (x)\nCREATE TABLE b (y)\n");

    assert_eq!(
        process(&path),
        "O arquivo tem 2 tabelas\n\nÚltimas 5 tabelas criadas:\n\n- a\n- b\n\n\nBackup incompleto"
    );
}

#[test]
fn test_uppercase_extension() {
    let dir = TempDir::new().unwrap();
    let path = common::create_file(&dir, "BACKUP.SQL", b"CREATE TABLE whatsapp_x (x)\n");

    assert_eq!(DumpKind::from_path(&path), DumpKind::Plain);
    assert!(process(&path).ends_with("Backup completo"));
}

#[test]
fn test_dot_sql_file_name_is_scanned() {
    let dir = TempDir::new().unwrap();
    let path = common::create_file(&dir, ".sql", b"CREATE TABLE whatsapp_x (x)\n");

    assert_eq!(DumpKind::from_path(&path), DumpKind::Plain);
    assert_eq!(
        process(&path),
        "O arquivo tem 1 tabelas\n\nÚltimas 5 tabelas criadas:\n\n- whatsapp_x\n\n\nBackup completo"
    );
}

#[test]
fn test_unsupported_extension_does_not_read_content() {
    let dir = TempDir::new().unwrap();
    let path = common::create_file(&dir, "backup.txt", b"CREATE TABLE a (x)\n");
    assert_eq!(process(&path), UNSUPPORTED_TEXT);
}

#[test]
fn test_missing_plain_file() {
    let dir = TempDir::new().unwrap();
    let report = process(dir.path().join("nope.sql"));
    assert!(report.starts_with(OPEN_ERROR_PREFIX));
}

#[cfg(feature = "zip")]
mod zip_dispatch {
    use super::*;
    use sqldump_validator::archive::ArchiveKind;

    #[test]
    fn test_zip_without_sql_member() {
        let dir = TempDir::new().unwrap();
        let path = common::create_zip(&dir, "backup.zip", &[("readme.txt", "CREATE TABLE a (x)\n")]);

        assert_eq!(
            process_detailed(&path).unwrap(),
            Outcome::NotFound(ArchiveKind::Zip)
        );
        assert_eq!(process(&path), "Nenhum arquivo SQL encontrado no ZIP.");
    }

    #[test]
    fn test_zip_report_matches_plain_scan() {
        let dir = TempDir::new().unwrap();
        let zip_path = common::create_zip(
            &dir,
            "backup.zip",
            &[("export/info.txt", "x"), ("export/db.sql", common::SAMPLE_DUMP)],
        );
        let sql_path = common::create_file(&dir, "db.sql", common::SAMPLE_DUMP.as_bytes());

        assert_eq!(process(&zip_path), process(&sql_path));
    }

    #[test]
    fn test_corrupt_zip_message() {
        let dir = TempDir::new().unwrap();
        let path = common::create_file(&dir, "backup.zip", b"PK but not really");

        let report = process(&path);
        assert!(report.starts_with("Erro ao processar o arquivo ZIP: "), "{report}");
    }

    #[test]
    fn test_custom_member_suffix() {
        let dir = TempDir::new().unwrap();
        let path = common::create_zip(
            &dir,
            "backup.zip",
            &[("a.sql", "CREATE TABLE a (x)\n"), ("b.dump", "CREATE TABLE whatsapp_b (x)\n")],
        );

        assert!(process_with_suffix(&path, ".dump").ends_with("Backup completo"));
        assert!(process(&path).ends_with("Backup incompleto"));
    }

    #[test]
    fn test_custom_suffix_not_found_text_is_fixed() {
        let dir = TempDir::new().unwrap();
        let path = common::create_zip(&dir, "backup.zip", &[("a.sql", "CREATE TABLE a (x)\n")]);

        assert_eq!(
            process_with_suffix(&path, ".dump"),
            "Nenhum arquivo SQL encontrado no ZIP."
        );
    }
}

#[cfg(feature = "rar")]
mod rar_dispatch {
    use super::*;
    use sqldump_validator::archive::ArchiveKind;

    #[test]
    fn test_rar_report_matches_plain_scan() {
        let dir = TempDir::new().unwrap();
        let sql_path = common::create_file(&dir, "dump.sql", common::RAR_FIXTURE_SQL.as_bytes());

        let report = process(common::rar_fixture());
        assert_eq!(report, process(&sql_path));
        assert!(report.starts_with("O arquivo tem 3 tabelas"));
        assert!(report.ends_with("Backup completo"));
    }

    #[test]
    fn test_rar_without_match() {
        let outcome = sqldump_validator::dispatch::process_detailed_with_suffix(
            common::rar_fixture(),
            ".csv",
        )
        .unwrap();
        assert_eq!(outcome, Outcome::NotFound(ArchiveKind::Rar));
        assert_eq!(outcome.render(), "Nenhum arquivo SQL encontrado no RAR.");
    }

    #[test]
    fn test_corrupt_rar_message() {
        let dir = TempDir::new().unwrap();
        let path = common::create_file(&dir, "backup.rar", b"not a rar archive at all");

        let report = process(&path);
        assert!(report.starts_with("Erro ao processar o arquivo RAR: "), "{report}");
    }
}
