//! Splitting engine and reader-driven scanner.
//!
//! - [`Splitter`] - Sans-I/O engine with `push()`/`resume()`/`finish()`
//! - [`Scanner`] - Iterates members of a [`std::io::Read`] source

mod engine;
mod iter;

pub use engine::Splitter;
pub use iter::Scanner;
