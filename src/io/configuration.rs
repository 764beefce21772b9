//! Simulation constants and runtime configuration defaults

// Dial geometry
/// Number of positions on the dial face
pub const DIAL_SIZE: u32 = 100;
/// Position the pointer starts at before the first rotation
pub const DEFAULT_START: u32 = 50;

// Input discovery
/// Extension of instruction files picked up when the target is a directory
pub const INPUT_EXTENSION: &str = "txt";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Rotations applied between progress bar refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 64;

// Logging
/// Filter used when neither `RUST_LOG` nor a verbosity flag is given
pub const DEFAULT_LOG_FILTER: &str = "safedial=warn";
