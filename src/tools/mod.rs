//! The tools module provides helpers around the compression core.
//!
//! The tools are:
//! - cli: command line interface for the demonstration binary.
//! - freq_count: per-symbol occurrence counts in first-appearance order.
pub mod cli;
pub mod freq_count;
