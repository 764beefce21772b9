//! Plain-text narration of a simulation run

use crate::dial::simulator::{Rotation, Simulation};
use std::io::Write;

/// How much of the run the report narrates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Detail {
    /// One line per rotation followed by the totals
    #[default]
    Full,
    /// Totals only
    Summary,
}

/// Describe a single rotation
pub fn rotation_line(rotation: &Rotation) -> String {
    if rotation.zero_hits > 0 {
        format!(
            "The dial is rotated {} to point at {}; during this rotation, it points at 0 {} time(s).",
            rotation.instruction, rotation.position, rotation.zero_hits
        )
    } else {
        format!(
            "The dial is rotated {} to point at {}.",
            rotation.instruction, rotation.position
        )
    }
}

/// Write the report for `simulation` to `out`
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_report(
    out: &mut impl Write,
    simulation: &Simulation,
    detail: Detail,
) -> std::io::Result<()> {
    writeln!(out, "The dial starts by pointing at {}.", simulation.start())?;

    if detail == Detail::Full {
        for rotation in simulation.rotations() {
            writeln!(out, "{}", rotation_line(rotation))?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "The dial ended a rotation on 0 {} times.",
        simulation.landings_on_zero()
    )?;
    writeln!(
        out,
        "The dial points at 0 a total of {} times (including during rotations).",
        simulation.zero_hits()
    )?;
    writeln!(out, "Password: {}", simulation.zero_hits())
}

/// Render the report into a string
pub fn render_report(simulation: &Simulation, detail: Detail) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_report(&mut buffer, simulation, detail);
    String::from_utf8_lossy(&buffer).into_owned()
}
