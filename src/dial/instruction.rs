//! Rotation instructions and the one-per-line text format
//!
//! Each non-blank line holds a direction character (`L` or `R`) immediately
//! followed by a decimal distance, e.g. `R5` or `L12`.

use crate::io::error::{Result, io_error, parse_error};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which way the dial is turned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward lower numbers
    Left,
    /// Toward higher numbers
    Right,
}

impl Direction {
    /// Character used for this direction in instruction files
    pub const fn symbol(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Parse a direction character
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

/// A single rotation of the dial
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Turning direction
    pub direction: Direction,
    /// Number of unit clicks to turn
    pub distance: u64,
}

impl Instruction {
    /// Create an instruction
    pub const fn new(direction: Direction, distance: u64) -> Self {
        Self {
            direction,
            distance,
        }
    }

    /// Turn left by `distance` clicks
    pub const fn left(distance: u64) -> Self {
        Self::new(Direction::Left, distance)
    }

    /// Turn right by `distance` clicks
    pub const fn right(distance: u64) -> Self {
        Self::new(Direction::Right, distance)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.symbol(), self.distance)
    }
}

impl FromStr for Instruction {
    type Err = crate::io::error::DialError;

    /// Parse a single instruction; errors carry no line number
    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim();
        let mut chars = line.chars();

        let Some(symbol) = chars.next() else {
            return Err(parse_error(line, &"missing direction"));
        };
        let direction = Direction::from_symbol(symbol).ok_or_else(|| {
            parse_error(line, &format!("unknown direction '{symbol}', expected L or R"))
        })?;

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(parse_error(line, &"missing distance"));
        }
        // u64::from_str accepts a leading '+', which the line format does not
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_error(line, &"distance must be a decimal integer"));
        }
        let distance = digits
            .parse::<u64>()
            .map_err(|e| parse_error(line, &e))?;

        Ok(Self::new(direction, distance))
    }
}

/// Parse every non-blank line of `input` as an instruction
///
/// # Errors
///
/// Returns a parse error carrying the 1-based line number of the first
/// malformed line
pub fn parse_instructions(input: &str) -> Result<Vec<Instruction>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.parse::<Instruction>()
                .map_err(|e| e.at_line(index + 1))
        })
        .collect()
}

/// Read and parse an instruction file
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains a malformed line
pub fn read_instructions(path: &Path) -> Result<Vec<Instruction>> {
    let input = std::fs::read_to_string(path).map_err(|e| io_error(path, "read", e))?;
    let instructions = parse_instructions(&input)?;
    tracing::debug!(
        path = %path.display(),
        count = instructions.len(),
        "parsed instructions"
    );
    Ok(instructions)
}
