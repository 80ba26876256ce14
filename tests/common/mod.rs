//! 集成测试公共模块

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// `tests/fixtures/dump.rar` 中 `dump.sql` 成员的内容
#[allow(dead_code)]
pub const RAR_FIXTURE_SQL: &str = "-- dump\n\
CREATE TABLE `users` (\n  `id` int NOT NULL\n);\n\
INSERT INTO `users` VALUES (1);\n\
CREATE TABLE `orders` (\n  `id` int NOT NULL\n);\n\
CREATE TABLE `whatsapp_messages` (\n  `id` int NOT NULL\n);\n";

/// 典型的 mysqldump 片段，共 7 个建表语句
#[allow(dead_code)]
pub const SAMPLE_DUMP: &str = "-- MySQL dump 10.13\n\
/*!40101 SET NAMES utf8mb4 */;\n\
DROP TABLE IF EXISTS `accounts`;\n\
CREATE TABLE `accounts` (\n  `id` int NOT NULL AUTO_INCREMENT,\n  PRIMARY KEY (`id`)\n) ENGINE=InnoDB;\n\
CREATE TABLE `whatsapp_contacts` (\n  `id` int NOT NULL\n) ENGINE=InnoDB;\n\
CREATE TABLE `invoices` (\n  `id` int NOT NULL\n) ENGINE=InnoDB;\n\
INSERT INTO `invoices` VALUES (1),(2);\n\
CREATE TABLE `payments` (\n  `id` int NOT NULL\n) ENGINE=InnoDB;\n\
CREATE TABLE `products` (\n  `id` int NOT NULL\n) ENGINE=InnoDB;\n\
CREATE TABLE `stock` (\n  `id` int NOT NULL\n) ENGINE=InnoDB;\n\
CREATE TABLE `users` (\n  `id` int NOT NULL\n) ENGINE=InnoDB;\n\
-- Dump completed\n";

/// 在临时目录中写入一个文件
#[allow(dead_code)]
pub fn create_file(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// RAR 测试文件的路径
#[allow(dead_code)]
pub fn rar_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dump.rar")
}

/// 在临时目录中创建 ZIP 文件，成员按给定顺序写入
#[cfg(feature = "zip")]
#[allow(dead_code)]
pub fn create_zip(dir: &TempDir, filename: &str, members: &[(&str, &str)]) -> PathBuf {
    use std::io::Write;
    use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

    let file_path = dir.path().join(filename);
    let file = fs::File::create(&file_path).expect("Failed to create zip");
    let mut writer = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in members {
        if name.ends_with('/') {
            writer.add_directory(*name, options).expect("Failed to add directory");
            continue;
        }
        writer.start_file(*name, options).expect("Failed to start zip member");
        writer.write_all(content.as_bytes()).expect("Failed to write zip member");
    }
    writer.finish().expect("Failed to finish zip");
    file_path
}
