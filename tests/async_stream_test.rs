// Async member stream: same boundaries as the sync scanner, failures over mocked I/O
#![cfg(feature = "async-io")]

mod harness;

use std::io::{self, Cursor};

use futures_util::StreamExt;
use gzsplit::{ScanConfig, ScanError, Scanner, scan_async};
use harness::stream;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::test]
async fn test_matches_sync_scanner() {
    let data = stream(&[b"AAA", b"\x00\x00", b"BB", b"C"]);

    for read_size in [1, 3, 4096] {
        let config = ScanConfig::new(read_size).unwrap();
        let sync: Vec<_> = Scanner::new(Cursor::new(&data), config)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let async_members: Vec<_> = scan_async(&data[..], config)
            .unwrap()
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(async_members, sync, "read size {}", read_size);
    }
}

#[tokio::test]
async fn test_marker_split_across_mock_reads() {
    let data = stream(&[b"AAA", b"BB"]);
    let mock = tokio_test::io::Builder::new()
        .read(&data[..9])
        .read(&data[9..10])
        .read(&data[10..])
        .build();

    let mut members = scan_async(mock.compat(), ScanConfig::default()).unwrap();

    let first = members.next().await.unwrap().unwrap();
    assert_eq!(&first.data[..], &data[..7]);
    let second = members.next().await.unwrap().unwrap();
    assert_eq!(&second.data[..], &data[7..]);

    assert!(members.next().await.is_none());
    assert!(members.status().is_exhausted());
}

#[tokio::test]
async fn test_failure_is_yielded_once_and_sticky() {
    let data = stream(&[b"AAA", b"BB"]);
    let mock = tokio_test::io::Builder::new()
        .read(&data)
        .read_error(io::Error::new(io::ErrorKind::ConnectionAborted, "aborted"))
        .build();

    let mut members = scan_async(mock.compat(), ScanConfig::default()).unwrap();

    assert!(members.next().await.unwrap().is_ok());
    let err = members.next().await.unwrap().unwrap_err();
    assert!(matches!(err, ScanError::Io(_)));
    assert_eq!(err.io_kind(), Some(io::ErrorKind::ConnectionAborted));

    assert!(members.next().await.is_none());
    assert!(!members.has_more());
    assert!(members.err().is_some());
    assert_eq!(members.members_emitted(), 1);
}

#[tokio::test]
async fn test_tokio_file() {
    use tokio::io::AsyncWriteExt;

    let data = stream(&[b"one", b"two", b"three"]);
    let path = tempfile::NamedTempFile::new().unwrap().into_temp_path();

    let mut file = tokio::fs::File::create(&path).await.unwrap();
    file.write_all(&data).await.unwrap();
    file.flush().await.unwrap();
    drop(file);

    let file = tokio::fs::File::open(&path).await.unwrap();
    let members: Vec<_> = scan_async(file.compat(), ScanConfig::new(2).unwrap())
        .unwrap()
        .collect()
        .await;

    assert_eq!(members.len(), 3);
    assert!(members.iter().all(|m| m.is_ok()));
}
