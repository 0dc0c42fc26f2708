//! # storage-adapters
//!
//! Process-memory implementations of the Fishlog persistence ports.
//! Everything here is lost on restart; there is no durability layer.

pub mod memory;

pub use memory::{InMemoryCaptureLog, InMemoryUserStore};
