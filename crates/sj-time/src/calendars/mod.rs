//! Concrete calendar implementations.

/// Japanese national calendar.
pub mod japan;

pub use japan::Japan;
