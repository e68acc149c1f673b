//! Report module - diagnostics and the end-of-run summary

pub mod sanity;
pub mod summary;

pub use sanity::*;
pub use summary::*;
