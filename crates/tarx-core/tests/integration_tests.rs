//! Integration tests for tarx-core.
//!
//! These tests run the system `tar` against archives built on the fly and
//! are skipped when no `tar` is on `PATH`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use tarx_core::ExtractionSuccess;
use tarx_core::ExtractorConfig;
use tarx_core::FailureKind;
use tarx_core::TarArchive;
use tarx_core::TarExtractor;
use tempfile::TempDir;

fn system_tar_available() -> bool {
    Command::new("tar")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Writes a tar file at `path` containing the given entries.
fn write_tar(path: &Path, entries: &[(&str, &[u8])]) {
    let file = fs::File::create(path).expect("failed to create archive file");
    let mut builder = tar::Builder::new(file);
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, *data)
            .expect("failed to append entry");
    }
    builder.finish().expect("failed to finish archive");
}

#[test]
fn test_extract_to_writes_files() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("set1.tar");
    write_tar(
        &archive_path,
        &[("hello.txt", b"hello"), ("nested/world.txt", b"world")],
    );
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    let archive = TarArchive::new(&archive_path).unwrap();
    let success = TarExtractor::new().extract_to(&archive, &out).unwrap();

    assert_eq!(success, ExtractionSuccess::new(archive, &out));
    assert_eq!(fs::read_to_string(out.join("hello.txt")).unwrap(), "hello");
    assert_eq!(
        fs::read_to_string(out.join("nested/world.txt")).unwrap(),
        "world"
    );
}

#[test]
fn test_extract_defaults_to_archive_directory() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("data.tar");
    write_tar(&archive_path, &[("inside.txt", b"content")]);

    let archive = TarArchive::new(&archive_path).unwrap();
    let success = TarExtractor::new().extract(&archive).unwrap();

    assert_eq!(success.destination(), temp.path());
    assert!(temp.path().join("inside.txt").exists());
}

#[test]
fn test_paths_with_spaces() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("with space");
    fs::create_dir(&dir).unwrap();
    let archive_path = dir.join("my archive.tar");
    write_tar(&archive_path, &[("a.txt", b"a")]);
    let out = temp.path().join("out dir");
    fs::create_dir(&out).unwrap();

    let archive = TarArchive::new(&archive_path).unwrap();
    assert!(TarExtractor::new().extract_to(&archive, &out).is_ok());
    assert!(out.join("a.txt").exists());
}

#[test]
fn test_missing_archive_reports_tool_diagnostics() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let archive = TarArchive::new(temp.path().join("absent.tar")).unwrap();

    let failure = TarExtractor::new()
        .extract_to(&archive, temp.path())
        .unwrap_err();

    assert_eq!(failure.kind(), FailureKind::Failed);
    assert_eq!(failure.summary(), "Failed");
    assert!(failure.exit_code().is_some_and(|code| code != 0));
    assert!(failure.description().contains("absent.tar"));
}

#[test]
fn test_missing_destination_is_tool_failure() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("set1.tar");
    write_tar(&archive_path, &[("a.txt", b"a")]);

    let archive = TarArchive::new(&archive_path).unwrap();
    let failure = TarExtractor::new()
        .extract_to(&archive, temp.path().join("does-not-exist"))
        .unwrap_err();

    assert_eq!(failure.kind(), FailureKind::Failed);
    assert!(!failure.description().is_empty());
}

#[test]
fn test_corrupt_archive_fails() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let archive_path = temp.path().join("corrupt.tar");
    fs::write(&archive_path, b"this is definitely not a tar archive").unwrap();

    let archive = TarArchive::new(&archive_path).unwrap();
    let failure = TarExtractor::new()
        .extract_to(&archive, temp.path())
        .unwrap_err();

    assert_eq!(failure.kind(), FailureKind::Failed);
    assert_eq!(failure.archive(), &archive);
}

#[test]
fn test_unknown_program_is_io_failure() {
    let temp = TempDir::new().unwrap();
    let archive = TarArchive::new(temp.path().join("set1.tar")).unwrap();
    let config = ExtractorConfig::default().with_program("tarx-missing-tool-98765");

    let failure = TarExtractor::with_config(config)
        .extract_to(&archive, temp.path())
        .unwrap_err();

    assert_eq!(failure.kind(), FailureKind::Io);
    assert_eq!(failure.summary(), "IOException occurred");
    assert!(!failure.description().is_empty());
}

#[test]
fn test_extract_all_continues_after_failure() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("good.tar");
    write_tar(&good, &[("good.txt", b"ok")]);
    let archives = vec![
        TarArchive::new(temp.path().join("missing.tar")).unwrap(),
        TarArchive::new(&good).unwrap(),
    ];

    let outcomes = TarExtractor::new().extract_all(&archives, None);

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_err());
    assert!(outcomes[1].is_ok());
    assert!(temp.path().join("good.txt").exists());
}

#[test]
fn test_extractor_shared_across_threads() {
    if !system_tar_available() {
        return;
    }
    let temp = TempDir::new().unwrap();
    let extractor = TarExtractor::new();
    let archives: Vec<(TarArchive, PathBuf)> = (0..4)
        .map(|i| {
            let path = temp.path().join(format!("part{i}.tar"));
            let name = format!("file{i}.txt");
            write_tar(&path, &[(name.as_str(), b"x")]);
            let out = temp.path().join(format!("out{i}"));
            fs::create_dir(&out).unwrap();
            (TarArchive::new(path).unwrap(), out)
        })
        .collect();

    std::thread::scope(|scope| {
        for (archive, out) in &archives {
            let extractor = &extractor;
            scope.spawn(move || {
                assert!(extractor.extract_to(archive, out).is_ok());
            });
        }
    });

    for (i, (_, out)) in archives.iter().enumerate() {
        assert!(out.join(format!("file{i}.txt")).exists());
    }
}
