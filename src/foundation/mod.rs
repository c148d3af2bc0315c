//! Shared primitives: geometry re-exports, colors, errors, small math helpers.

pub mod core;
pub mod error;
pub(crate) mod math;
