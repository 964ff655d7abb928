//! Core domain types for the session report tool.
//!
//! Holds the [`session::Session`] record and its line parser, the fixed
//! operator state set, the error taxonomy, configuration loading, and the
//! CLI argument surface. No I/O beyond reading the configuration file.

pub mod config;
pub mod error;
pub mod session;
pub mod settings;
pub mod states;
