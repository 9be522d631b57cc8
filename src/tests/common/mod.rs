//! Common Test Utilities
//!
//! Shared catalogs and a recording renderer used across test modules.

pub mod fixtures;

pub use fixtures::*;
