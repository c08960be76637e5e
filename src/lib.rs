//! `hospital-compare` library crate.
//!
//! The binary (`hospital-compare-search`) is a thin wrapper around this library so that:
//!
//! - the join/rank pipeline is testable without spawning processes
//! - table loading, distance math and output formatting can be exercised in isolation
//! - logging is an explicit handle, never process-wide state

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod geo;
pub mod io;
pub mod logging;
pub mod report;
