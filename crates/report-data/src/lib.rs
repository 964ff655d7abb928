//! Data ingestion and aggregation layer for the session report tool.
//!
//! Responsible for reading the semicolon-delimited session export line by
//! line, computing per-day maximum concurrency via a sweep line, and summing
//! per-operator time by state.

pub mod daily;
pub mod operators;
pub mod reader;

pub use report_core as core;
