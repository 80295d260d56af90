//! File-based input and output helpers.

/// Hourly telemetry CSV export.
pub mod export;
