#![no_main]

use libfuzzer_sys::fuzz_target;
use gzsplit::{HashConfig, Marker, ScanConfig, Splitter};

fuzz_target!(|data: Vec<u8>| {
    let config = ScanConfig::default().with_hash_config(HashConfig::enabled());
    let members = Splitter::new(config).split_bytes(&data).unwrap();

    // Verify: members concatenate back to the input
    let joined: Vec<u8> = members.iter().flat_map(|m| m.data.iter().copied()).collect();
    assert_eq!(joined, data);

    // Verify: offsets and indices are contiguous, members are non-empty
    let mut expected_offset = 0u64;
    for (i, member) in members.iter().enumerate() {
        assert!(!member.is_empty());
        assert_eq!(member.index, i as u64);
        assert_eq!(member.offset, expected_offset);
        expected_offset += member.len() as u64;
        assert!(member.hash.is_some());
    }

    // Verify: every member but the first starts with the marker
    for member in members.iter().skip(1) {
        assert!(member.starts_with_marker(Marker::GZIP));
    }
});
