//! Natural-order sorting of delimited string records.
//!
//! This crate sorts sequences of strings into the order a human expects
//! when records embed numbers: `z2` before `z11`, `1` before `001`. The
//! comparator and in-place sort live in [`natural`]; the surrounding
//! pipeline tokenizes a raw stream on a separator, sorts the records and
//! rejoins them, with optional gzip/base64 layers on either side.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod natural;
pub mod pipeline;
pub mod signal;
pub mod tokenize;

// Re-export commonly used types
pub use config::SortConfig;
pub use error::{SortError, SortResult};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;
pub const EXIT_INTERRUPTED: i32 = 130;

/// Run a sort according to `config` against the real filesystem.
pub fn sort(config: &SortConfig) -> SortResult<()> {
    config.validate()?;
    let pipeline = pipeline::SortPipeline::new(config.clone(), filesystem::RealFilesystem);
    pipeline.run()
}
