//! # Pasture IO
//!
//! Telemetry and persistence for the pasture simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - The in-memory population time series
//! - JSONL logging of snapshots and ecosystem events
//! - CSV export and gzip-compressed archives of a run

/// Error types and result aliases for I/O operations
pub mod error;
/// Population time series, JSONL logger, CSV export and archives
pub mod history;

pub use error::{IoError, Result};
pub use history::{HistoryArchive, HistoryLogger, PopulationHistory};
