//! Full-run tests.
//!
//! Tests for the sequential run loop covering:
//! - Trimmed plaintext and compressed sibling on disk
//! - Configuration errors before any file is touched
//! - Fail-fast ordering across several algorithms

use std::fs;

use tempfile::TempDir;
use vector_trim_core::{pipeline, Config, Error, Stage};

use super::helpers::{all_tests, read_bz2, read_json, vector_file, write_vectors};

#[test]
fn run_writes_trimmed_and_compressed_files() {
    let temp_dir = TempDir::new().unwrap();
    write_vectors(temp_dir.path(), "SHA2-256", &vector_file(&[&[25, 4]]));

    let config = Config::from_algorithms_flag("SHA2-256", temp_dir.path()).unwrap();
    let summary = pipeline::run(&config).unwrap();

    assert_eq!(summary.algorithms.len(), 1);
    assert_eq!(summary.total_groups(), 2);
    assert_eq!(summary.total_tests_removed(), 27);

    let plain_path = temp_dir.path().join("SHA2-256");
    let bz2_path = temp_dir.path().join("SHA2-256.bz2");
    let plain = fs::read(&plain_path).unwrap();

    assert_eq!(read_bz2(&bz2_path), plain);
    assert!(all_tests(&read_json(&plain_path))
        .iter()
        .all(|tests| tests.len() == 1));
}

#[test]
fn run_sanitizes_names() {
    let temp_dir = TempDir::new().unwrap();
    write_vectors(temp_dir.path(), "SHA2-512-256", &vector_file(&[&[3]]));

    let config = Config::from_algorithms_flag(" SHA2-512/256 ", temp_dir.path()).unwrap();
    pipeline::run(&config).unwrap();

    assert!(temp_dir.path().join("SHA2-512-256.bz2").exists());
}

#[test]
fn all_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    write_vectors(temp_dir.path(), "foo", &vector_file(&[&[12]]));
    let before = fs::read(temp_dir.path().join("foo")).unwrap();

    let err = Config::from_algorithms_flag("all", temp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    assert_eq!(fs::read(temp_dir.path().join("foo")).unwrap(), before);
    assert!(!temp_dir.path().join("foo.bz2").exists());
}

#[test]
fn missing_file_stops_the_run_after_earlier_algorithms() {
    let temp_dir = TempDir::new().unwrap();
    write_vectors(temp_dir.path(), "foo", &vector_file(&[&[12, 2]]));
    write_vectors(temp_dir.path(), "baz", &vector_file(&[&[12]]));
    let baz_before = fs::read(temp_dir.path().join("baz")).unwrap();

    let config = Config::from_algorithms_flag("foo,bar,baz", temp_dir.path()).unwrap();
    let err = pipeline::run(&config).unwrap_err();

    match &err {
        Error::Algorithm {
            algorithm,
            stage,
            source,
        } => {
            assert_eq!(algorithm, "bar");
            assert_eq!(*stage, Stage::Reading);
            assert!(matches!(**source, Error::Io { .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // foo completed before bar failed
    let foo = fs::read(temp_dir.path().join("foo")).unwrap();
    assert_eq!(read_bz2(&temp_dir.path().join("foo.bz2")), foo);

    // nothing was written for bar or anything after it
    assert!(!temp_dir.path().join("bar").exists());
    assert!(!temp_dir.path().join("bar.bz2").exists());
    assert_eq!(fs::read(temp_dir.path().join("baz")).unwrap(), baz_before);
    assert!(!temp_dir.path().join("baz.bz2").exists());
}

#[test]
fn rerunning_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    write_vectors(temp_dir.path(), "ML-KEM", &vector_file(&[&[30, 11, 1]]));
    let config = Config::from_algorithms_flag("ML-KEM", temp_dir.path()).unwrap();

    pipeline::run(&config).unwrap();
    let first = fs::read(temp_dir.path().join("ML-KEM")).unwrap();

    let summary = pipeline::run(&config).unwrap();
    let second = fs::read(temp_dir.path().join("ML-KEM")).unwrap();

    assert_eq!(first, second);
    assert_eq!(summary.total_tests_removed(), 0);
    assert_eq!(read_bz2(&temp_dir.path().join("ML-KEM.bz2")), second);
}

#[test]
fn empty_entry_fails_when_reached() {
    let temp_dir = TempDir::new().unwrap();
    write_vectors(temp_dir.path(), "foo", &vector_file(&[&[12, 2]]));
    write_vectors(temp_dir.path(), "bar", &vector_file(&[&[12]]));
    let bar_before = fs::read(temp_dir.path().join("bar")).unwrap();

    let config = Config::from_algorithms_flag("foo,,bar", temp_dir.path()).unwrap();
    let err = pipeline::run(&config).unwrap_err();

    match &err {
        Error::Algorithm {
            algorithm,
            stage,
            source,
        } => {
            assert_eq!(algorithm, "");
            assert_eq!(*stage, Stage::Reading);
            assert!(matches!(**source, Error::Io { .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // foo was committed before the empty entry was reached
    let foo = fs::read(temp_dir.path().join("foo")).unwrap();
    assert_eq!(read_bz2(&temp_dir.path().join("foo.bz2")), foo);

    // bar comes after the failure and is untouched
    assert_eq!(fs::read(temp_dir.path().join("bar")).unwrap(), bar_before);
    assert!(!temp_dir.path().join("bar.bz2").exists());
}
