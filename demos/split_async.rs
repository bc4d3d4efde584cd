//! Async splitting example with tokio.
//!
//! Run with:
//!     cargo run --example split_async --features async-io -- /path/to/concatenated.gz

use std::env;

use futures_util::StreamExt;
use gzsplit::{HashConfig, ScanConfig, scan_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .ok_or("usage: split_async <concatenated file>")?;

    let file = tokio::fs::File::open(&path).await?;
    let config = ScanConfig::default().with_hash_config(HashConfig::enabled());
    let mut stream = scan_async(file.compat(), config)?;

    while let Some(member) = stream.next().await {
        let member = member?;
        match member.hash {
            Some(hash) => println!(
                "member {:>5}: offset={:>10}, len={:>8}, hash={}",
                member.index, member.offset, member.len(), hash
            ),
            None => println!(
                "member {:>5}: offset={:>10}, len={:>8}",
                member.index, member.offset, member.len()
            ),
        }
    }

    println!("\nTotal: {} members", stream.members_emitted());
    Ok(())
}
