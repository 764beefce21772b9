//! Dial model and rotation simulation

/// Rotation instructions and their text format
pub mod instruction;
/// Dial state and the zero-counting simulator
pub mod simulator;
