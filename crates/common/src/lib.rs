//! Shared building blocks for the parking control crates.

pub mod types;
pub mod utils;
