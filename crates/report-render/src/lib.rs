//! Plain-text rendering of both reports.
//!
//! Pure functions from aggregates to strings. No terminal state and no
//! printing here; row highlighting is reported as a flag and the caller
//! decides how to render it.

pub mod daily;
pub mod operators;

pub use report_core as core;
