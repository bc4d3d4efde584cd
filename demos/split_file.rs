//! File splitting example.
//!
//! Run with:
//!     cargo run --example split_file -- /path/to/concatenated.gz
//!
//! Without a path, a temporary file of marker-prefixed payloads is generated.

use std::env;
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};

use gzsplit::{Marker, ScanConfig, Scanner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file = match env::args().nth(1) {
        Some(path) => {
            println!("Splitting file: {}\n", path);
            File::open(&path)?
        }
        None => {
            println!("Splitting a generated stream of 100 members\n");
            make_concat_file(100, 64 * 1024)?
        }
    };

    let config = ScanConfig::new(1024)?;
    let mut scanner = Scanner::new(file, config)?;

    let mut total_bytes = 0;
    while scanner.advance() {
        let member = scanner.member().ok_or("advance without member")?;
        total_bytes += member.len();
        println!("{} {}", member.index + 1, member.len());
    }

    if let Some(err) = scanner.err() {
        return Err(format!("scanning failed: {}", err).into());
    }

    println!(
        "\nTotal: {} members, {} bytes",
        scanner.members_emitted(),
        total_bytes
    );
    Ok(())
}

/// Writes `members` marker-prefixed payloads of `payload` bytes to a temp file.
fn make_concat_file(members: usize, payload: usize) -> std::io::Result<File> {
    let mut file = tempfile::tempfile()?;
    let filler = vec![b'a'; payload];

    for _ in 0..members {
        file.write_all(Marker::GZIP.as_bytes())?;
        file.write_all(&filler)?;
    }

    file.seek(SeekFrom::Start(0))?;
    Ok(file)
}
