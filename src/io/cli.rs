//! Command-line interface for simulating one or many instruction files

use crate::dial::instruction::read_instructions;
use crate::dial::simulator::Dial;
use crate::io::configuration::{DEFAULT_START, DIAL_SIZE, INPUT_EXTENSION, PROGRESS_UPDATE_INTERVAL};
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::progress::ProgressManager;
use crate::io::report::{Detail, write_report};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "safedial")]
#[command(
    author,
    version,
    about = "Simulate safe dial rotations and count every click through zero"
)]
/// Command-line arguments for the dial simulator
pub struct Cli {
    /// Instruction file, or directory of .txt instruction files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Position the pointer starts at
    #[arg(short, long, default_value_t = DEFAULT_START)]
    pub start: u32,

    /// Number of positions on the dial
    #[arg(long, default_value_t = DIAL_SIZE)]
    pub size: u32,

    /// Only print the totals, not every rotation
    #[arg(long)]
    pub summary: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Report detail selected by the flags
    pub const fn detail(&self) -> Detail {
        if self.summary {
            Detail::Summary
        } else {
            Detail::Full
        }
    }

    /// Dial described by the flags
    ///
    /// # Errors
    ///
    /// Returns an error if the size is zero or the start is off the dial
    pub fn dial(&self) -> Result<Dial> {
        Dial::new(self.size, self.start)
    }
}

/// Runs the simulator over every instruction file named by the CLI
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments, printing reports to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the dial parameters are invalid, the target cannot
    /// be read, or any instruction file is malformed
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.process_to(&mut out)
    }

    /// Process files according to CLI arguments, writing reports to `out`
    ///
    /// # Errors
    ///
    /// Same as [`FileProcessor::process`], plus failures writing to `out`
    pub fn process_to(&mut self, out: &mut impl Write) -> Result<()> {
        // Reject bad dial flags before reading any file
        self.cli.dial()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::warn!(path = %self.cli.target.display(), "no instruction files found");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let with_headers = self.cli.target.is_dir();
        let result = files
            .iter()
            .enumerate()
            .try_for_each(|(index, file)| self.process_file(file, index, with_headers, &mut *out));

        // Clear the bars before any error reaches the terminal
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    /// Progress display, when enabled
    pub const fn progress(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(target).map_err(|e| io_error(target, "read_dir", e))?;
            for entry in entries {
                let path = entry.map_err(|e| io_error(target, "read_dir", e))?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                } else {
                    tracing::debug!(path = %path.display(), "skipping non-instruction entry");
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an instruction file or a directory",
            ))
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        with_header: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let instructions = read_instructions(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, instructions.len());
        }

        let dial = self.cli.dial()?;
        let progress = &mut self.progress_manager;
        let simulation =
            dial.run_with_progress(&instructions, PROGRESS_UPDATE_INTERVAL, |applied| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_rotations(index, applied);
                }
            });

        tracing::info!(
            path = %input_path.display(),
            rotations = instructions.len(),
            final_position = simulation.final_position(),
            password = simulation.zero_hits(),
            "simulated dial"
        );

        let write_err = |e: std::io::Error| io_error("<output>", "write", e);
        let mut report = Vec::new();
        if with_header {
            let name = input_path.file_name().unwrap_or_default().to_string_lossy();
            writeln!(report, "== {name} ==").map_err(write_err)?;
        }
        write_report(&mut report, &simulation, self.cli.detail()).map_err(write_err)?;

        // Bars redraw in place, so the report must not land between redraws
        let mut emit = || -> std::io::Result<()> {
            out.write_all(&report)?;
            out.flush()
        };
        let written = match self.progress_manager {
            Some(ref pm) => pm.suspend(emit),
            None => emit(),
        };
        written.map_err(write_err)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }
}
