//! Input/output surface around the simulator

/// Command-line arguments and batch processing of instruction files
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types shared by the crate
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for batch processing
pub mod progress;
/// Human-readable simulation reports
pub mod report;
