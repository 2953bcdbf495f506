//! Integration tests for hostkit-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn hostkit_cmd() -> Command {
    cargo_bin_cmd!("hostkit")
}

/// Writes a stored zip whose entry names are taken verbatim.
fn write_raw_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored)
        .unix_permissions(0o644);
    for (name, content) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("invalid JSON output")
}

#[test]
fn test_version_flag() {
    hostkit_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostkit"));
}

#[test]
fn test_help_flag() {
    hostkit_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_unzip_help() {
    hostkit_cmd()
        .arg("unzip")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract a zip archive"));
}

#[test]
fn test_hostname_command() {
    hostkit_cmd()
        .arg("hostname")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hostname:"));
}

#[test]
fn test_hostname_json_output() {
    let json = stdout_json(hostkit_cmd().arg("--json").arg("hostname"));
    assert_eq!(json["operation"], "hostname");
    assert_eq!(json["status"], "success");
    assert!(!json["data"]["hostname"].as_str().unwrap().is_empty());
}

#[test]
fn test_ips_command_reports_or_explains() {
    let output = hostkit_cmd().arg("ips").output().unwrap();

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Active IPv4 Addresses:"));
        assert!(!stdout.contains("127.0.0.1"));
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("HINT"), "{stderr}");
    }
}

#[test]
fn test_cpu_command_reports_or_explains() {
    let output = hostkit_cmd().arg("--json").arg("cpu").output().unwrap();

    if output.status.success() {
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["operation"], "cpu");
        assert!(json["data"]["physical_cores"].as_u64().unwrap() >= 1);
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("physical CPU core count"), "{stderr}");
    }
}

#[test]
fn test_zip_then_unzip_directory() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("src");
    fs::create_dir_all(source.join("nested")).unwrap();
    fs::write(source.join("top.txt"), "top").unwrap();
    fs::write(source.join("nested/inner.txt"), "inner").unwrap();
    let archive = temp.path().join("src.zip");
    let out = temp.path().join("out");

    hostkit_cmd()
        .arg("zip")
        .arg(&source)
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created"));

    hostkit_cmd()
        .arg("unzip")
        .arg(&archive)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction complete"));

    assert_eq!(fs::read_to_string(out.join("top.txt")).unwrap(), "top");
    assert_eq!(
        fs::read_to_string(out.join("nested/inner.txt")).unwrap(),
        "inner"
    );
}

#[test]
fn test_zip_single_file_json_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("note.txt");
    fs::write(&source, "note").unwrap();
    let archive = temp.path().join("note.zip");

    let json = stdout_json(hostkit_cmd().arg("--json").arg("zip").arg(&source).arg(&archive));

    assert_eq!(json["operation"], "zip");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["files_added"], 1);
    assert!(archive.exists());
}

#[test]
fn test_unzip_json_output_counts() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("a.zip");
    write_raw_zip(&archive, &[("one.txt", "1"), ("dir/two.txt", "22")]);

    let json = stdout_json(
        hostkit_cmd()
            .arg("unzip")
            .arg("--json")
            .arg(&archive)
            .arg(temp.path().join("out")),
    );

    assert_eq!(json["operation"], "unzip");
    assert_eq!(json["data"]["files_extracted"], 2);
    assert_eq!(json["data"]["bytes_written"], 3);
}

#[test]
fn test_unzip_defaults_to_current_dir() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("a.zip");
    write_raw_zip(&archive, &[("here.txt", "here")]);
    let work = temp.path().join("work");
    fs::create_dir(&work).unwrap();

    hostkit_cmd()
        .current_dir(&work)
        .arg("unzip")
        .arg(&archive)
        .assert()
        .success();

    assert!(work.join("here.txt").exists());
}

#[test]
fn test_unzip_rejects_traversal() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let archive = temp.path().join("evil.zip");
    write_raw_zip(&archive, &[("ok.txt", "ok"), ("../escaped.txt", "bad")]);
    let out = temp.path().join("out");

    hostkit_cmd()
        .arg("unzip")
        .arg(&archive)
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path traversal"))
        .stderr(predicate::str::contains("HINT"));

    assert!(!temp.path().join("escaped.txt").exists());
}

#[test]
fn test_unzip_nonexistent_archive() {
    let temp = TempDir::new().expect("failed to create temp dir");

    hostkit_cmd()
        .arg("unzip")
        .arg("nonexistent.zip")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_zip_missing_source() {
    let temp = TempDir::new().expect("failed to create temp dir");

    hostkit_cmd()
        .arg("zip")
        .arg(temp.path().join("missing"))
        .arg(temp.path().join("out.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_quiet_suppresses_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let source = temp.path().join("f.txt");
    fs::write(&source, "f").unwrap();

    hostkit_cmd()
        .arg("-q")
        .arg("zip")
        .arg(&source)
        .arg(temp.path().join("f.zip"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_demo_runs() {
    hostkit_cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- 4. Zip a file ---"))
        .stdout(predicate::str::contains("Directory zipped successfully!"));
}

#[test]
fn test_demo_json_output() {
    let json = stdout_json(hostkit_cmd().arg("--json").arg("demo"));

    assert_eq!(json["operation"], "demo");
    assert_eq!(json["data"]["zip_file"]["files_added"], 1);
    assert_eq!(json["data"]["unzip"]["files_extracted"], 1);
    assert_eq!(json["data"]["zip_directory"]["files_added"], 2);
}
