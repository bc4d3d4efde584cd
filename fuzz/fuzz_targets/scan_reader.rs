#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use gzsplit::{ScanConfig, Scanner, Splitter};

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (read_size, data) = input;
    let read_size = read_size as usize + 1;

    let reference = Splitter::new(ScanConfig::default()).split_bytes(&data).unwrap();

    // Verify: read size never changes member boundaries
    let config = ScanConfig::new(read_size).unwrap();
    let mut scanner = Scanner::new(Cursor::new(&data), config).unwrap();
    let mut members = Vec::new();
    while scanner.advance() {
        members.push(scanner.member().cloned().unwrap());
    }

    assert!(scanner.err().is_none());
    assert!(scanner.status().is_exhausted());
    assert_eq!(members, reference);
});
