//! File and memory store behavior.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use erratic_core::error::ErrorKind;
use erratic_core::{FileRateStore, MemoryRateStore, RateStore};

#[tokio::test]
async fn file_store_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRateStore::new(dir.path().join("rate.txt"));

    store.set_rate(0.001).await.unwrap();
    store.set_rate(0.25).await.unwrap();
    assert_eq!(store.get_rate().await.unwrap(), 0.25);

    let on_disk = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(on_disk, "0.25");
}

#[tokio::test]
async fn file_store_reads_fresh_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rate.txt");
    let store = FileRateStore::new(&path);

    store.set_rate(0.5).await.unwrap();
    std::fs::write(&path, "0.75\n").unwrap();
    assert_eq!(store.get_rate().await.unwrap(), 0.75);
}

#[tokio::test]
async fn file_store_accepts_exponent_notation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rate.txt");
    std::fs::write(&path, "1E-03").unwrap();

    let store = FileRateStore::new(&path);
    assert_eq!(store.get_rate().await.unwrap(), 0.001);
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRateStore::new(dir.path().join("absent.txt"));

    let err = store.get_rate().await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[tokio::test]
async fn corrupt_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rate.txt");
    std::fs::write(&path, "0.5garbage").unwrap();

    let store = FileRateStore::new(&path);
    let err = store.get_rate().await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRateStore::new(dir.path().join("no-such-dir").join("rate.txt"));

    let err = store.set_rate(0.1).await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn default_path_lives_in_temp_dir() {
    let store = FileRateStore::default();
    assert_eq!(store.path(), std::env::temp_dir().join("rate.txt"));
}

#[tokio::test]
async fn memory_store_starts_empty() {
    let store = MemoryRateStore::new();
    let err = store.get_rate().await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Io);

    store.set_rate(42.0).await.unwrap();
    assert_eq!(store.get_rate().await.unwrap(), 42.0);
}
