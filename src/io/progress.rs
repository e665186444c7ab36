//! Progress display for batch dataset generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many datasets of a batch have been written
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
    elapsed: Duration,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with a hidden, zero-length bar
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            completed: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Show a bar sized for `dataset_count` datasets of `generator`
    pub fn initialize(&mut self, generator: &str, dataset_count: usize) {
        let bar = ProgressBar::new(dataset_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix(generator.to_string());
        self.bar = bar;
        self.completed = 0;
        self.elapsed = Duration::ZERO;
    }

    /// Report which output is being generated
    pub fn start_dataset(&self, output_name: &str) {
        self.bar.set_message(output_name.to_string());
    }

    /// Mark one dataset as written
    pub fn complete_dataset(&mut self, elapsed: Duration) {
        self.completed += 1;
        self.elapsed += elapsed;
        self.bar.inc(1);
    }

    /// Number of datasets written so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Total generation time across completed datasets
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} datasets written", self.completed));
    }
}
