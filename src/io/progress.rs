//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Progress of one instruction file
#[derive(Clone, Debug, Default)]
struct FileState {
    name: String,
    applied: usize,
    total: usize,
}

/// Coordinates progress display for batch operations
///
/// Automatically switches between individual progress bars (for small batches)
/// and a single batch progress bar (for large batches) based on file count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_states: Vec<FileState>,
    finished: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ROTATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
            finished: false,
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(ROTATION_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress bar for a new file holding `rotations` instructions
    pub fn start_file(&mut self, index: usize, path: &Path, rotations: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = FileState {
                name,
                applied: 0,
                total: rotations,
            };
        }
        self.update_bars();
    }

    /// Report how many instructions of the file have been applied
    pub fn update_rotations(&mut self, index: usize, applied: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.applied = applied.min(state.total);
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.applied = state.total;
        }
        self.update_bars();
    }

    /// Clean up all progress displays; later calls do nothing
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Whether the bars are still on screen
    pub const fn is_active(&self) -> bool {
        !self.finished
    }

    /// Hide the bars while `f` writes to the terminal, then redraw them
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.multi_progress.suspend(f)
    }

    /// Show the most recent files on the available bars
    fn update_bars(&self) {
        let active: Vec<&FileState> = self
            .file_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        // Labels first: position changes trigger the redraw
        for (bar, state) in self.file_bars.iter().zip(visible) {
            let width = state.total.to_string().len();
            bar.set_message(format!("{:>width$}/{}", state.applied, state.total));
            bar.set_prefix(state.name.clone());
            bar.set_length(state.total as u64);
            bar.set_position(state.applied as u64);
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_message(String::new());
            bar.set_prefix(String::new());
            bar.set_length(0);
            bar.set_position(0);
        }
    }
}
