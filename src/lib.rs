//! Rotary safe dial simulation that counts every click landing on zero
//!
//! Instructions such as `L68` or `R14` turn a circular dial of 100 positions.
//! The simulator tracks the pointer through every unit step of each rotation,
//! so distances beyond a full revolution contribute one zero hit per lap.

#![forbid(unsafe_code)]

/// Dial state, instruction parsing and the rotation simulator
pub mod dial;
/// Command-line surface, reporting, logging and error handling
pub mod io;

pub use dial::instruction::{Direction, Instruction};
pub use dial::simulator::{Dial, Rotation, Simulation, simulate};
pub use io::error::{DialError, Result};
