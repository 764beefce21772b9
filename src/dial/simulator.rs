//! Dial state and the zero-counting rotation simulator
//!
//! A rotation of distance `d` is `d` unit clicks. Every click that leaves the
//! pointer on 0 counts as a zero hit, so a rotation can hit zero several times
//! (once per full revolution) without ending there.

use crate::dial::instruction::{Direction, Instruction};
use crate::io::configuration::{DEFAULT_START, DIAL_SIZE};
use crate::io::error::{Result, invalid_parameter};

/// Circular counter with positions `0..size`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dial {
    size: u32,
    position: u32,
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            size: DIAL_SIZE,
            position: DEFAULT_START,
        }
    }
}

impl Dial {
    /// Create a dial with `size` positions pointing at `start`
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or `start` is not a position on the dial
    pub fn new(size: u32, start: u32) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter("size", &size, &"dial needs at least one position"));
        }
        if start >= size {
            return Err(invalid_parameter(
                "start",
                &start,
                &format!("must be below the dial size {size}"),
            ));
        }
        Ok(Self {
            size,
            position: start,
        })
    }

    /// Current pointer position
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Number of positions on the dial face
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of clicks that land on 0 when turning from the current position
    ///
    /// Turning right from `p`, the clicks land on `p + 1 ..= p + d`, which
    /// contains `(p + d) / size` multiples of `size`. Turning left is the
    /// mirror image with `p` replaced by its distance to 0 going left.
    pub const fn zero_hits(&self, instruction: Instruction) -> u64 {
        let size = self.size as u128;
        let position = self.position as u128;
        let offset = match instruction.direction {
            Direction::Right => position,
            Direction::Left => (size - position) % size,
        };
        ((offset + instruction.distance as u128) / size) as u64
    }

    /// Apply one instruction and return the number of clicks that landed on 0
    pub const fn rotate(&mut self, instruction: Instruction) -> u64 {
        let hits = self.zero_hits(instruction);
        let size = self.size as u64;
        let position = self.position as u64;
        let step = instruction.distance % size;
        let next = match instruction.direction {
            Direction::Right => (position + step) % size,
            Direction::Left => (position + size - step) % size,
        };
        // next < size, which came from a u32
        self.position = next as u32;
        hits
    }

    /// Apply every instruction in order and collect the full trace
    pub fn run(self, instructions: &[Instruction]) -> Simulation {
        self.run_with_progress(instructions, 0, |_| {})
    }

    /// Like [`Dial::run`], calling `on_progress` with the number of applied
    /// instructions every `interval` rotations and once more after the last
    /// one (never when `interval` is 0)
    pub fn run_with_progress(
        mut self,
        instructions: &[Instruction],
        interval: usize,
        mut on_progress: impl FnMut(usize),
    ) -> Simulation {
        let start = self.position;
        let mut rotations = Vec::with_capacity(instructions.len());
        let mut total = 0_u64;

        for (index, &instruction) in instructions.iter().enumerate() {
            let hits = self.rotate(instruction);
            total = total.saturating_add(hits);
            tracing::trace!(
                %instruction,
                position = self.position,
                hits,
                "rotated dial"
            );
            rotations.push(Rotation {
                instruction,
                position: self.position,
                zero_hits: hits,
            });

            let applied = index + 1;
            if interval > 0 && (applied % interval == 0 || applied == instructions.len()) {
                on_progress(applied);
            }
        }

        Simulation {
            size: self.size,
            start,
            rotations,
            zero_hits: total,
        }
    }
}

/// Outcome of a single instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    /// The instruction that was applied
    pub instruction: Instruction,
    /// Pointer position after the rotation
    pub position: u32,
    /// Clicks during the rotation that landed on 0
    pub zero_hits: u64,
}

impl Rotation {
    /// Whether the rotation finished pointing at 0
    pub const fn ends_on_zero(&self) -> bool {
        self.position == 0
    }
}

/// Complete trace of a simulation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Simulation {
    size: u32,
    start: u32,
    rotations: Vec<Rotation>,
    zero_hits: u64,
}

impl Simulation {
    /// Dial size the simulation ran on
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Position before the first instruction
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Per-instruction outcomes in order
    pub fn rotations(&self) -> &[Rotation] {
        &self.rotations
    }

    /// Position after the last instruction, or the start if there were none
    pub fn final_position(&self) -> u32 {
        self.rotations.last().map_or(self.start, |r| r.position)
    }

    /// Start position followed by the position after each instruction
    pub fn positions(&self) -> Vec<u32> {
        std::iter::once(self.start)
            .chain(self.rotations.iter().map(|r| r.position))
            .collect()
    }

    /// Total clicks that landed on 0; this is the password
    pub const fn zero_hits(&self) -> u64 {
        self.zero_hits
    }

    /// Number of rotations that ended pointing at 0
    pub fn landings_on_zero(&self) -> usize {
        self.rotations.iter().filter(|r| r.ends_on_zero()).count()
    }
}

/// Run `instructions` on a standard 100-position dial starting at `start`
///
/// # Errors
///
/// Returns an error if `start` is not a position on the dial
pub fn simulate(instructions: &[Instruction], start: u32) -> Result<Simulation> {
    Ok(Dial::new(DIAL_SIZE, start)?.run(instructions))
}
