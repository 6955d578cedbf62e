//! # sj-core
//!
//! Error definitions shared by the shukujitsu-rs crates.
//!
//! The holiday query itself is total and never fails; errors only arise when
//! constructing validated values such as `sj_time::Date`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
