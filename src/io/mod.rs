//! Input/output operations, configuration and error handling

/// Command-line interface and batch driver
pub mod cli;
/// Constants, default ranges and runtime configuration
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// CSV export of generated datasets
pub mod export;
/// Batch progress display
pub mod progress;
