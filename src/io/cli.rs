//! Command-line interface for writing batches of generated datasets

use crate::generators::dispatch::Registry;
use crate::io::configuration::{
    DEFAULT_DATASET_COUNT, DEFAULT_GENERATOR, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, GenerationConfig,
    RangeOverride,
};
use crate::io::error::Result;
use crate::io::export::{CsvLayout, export_dataset_as_csv};
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "stratagen")]
#[command(
    author,
    version,
    about = "Generate synthetic layered series as CSV"
)]
/// Command-line arguments for the dataset generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Generator to run
    #[arg(value_name = "GENERATOR", default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of datasets to write
    #[arg(short, long, default_value_t = DEFAULT_DATASET_COUNT)]
    pub count: usize,

    /// Directory receiving the CSV files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Override a parameter range, e.g. `layers_range=2,5` (repeatable)
    #[arg(short, long = "range", value_name = "KEY=LOW,HIGH")]
    pub ranges: Vec<RangeOverride>,

    /// Write one `layer,x,y` row per sample instead of one column per layer
    #[arg(short, long)]
    pub long: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// List available generators and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// CSV layout selected by the flags
    pub const fn layout(&self) -> CsvLayout {
        if self.long {
            CsvLayout::Long
        } else {
            CsvLayout::Wide
        }
    }

    /// Config built from the `--range` overrides, if any were given
    pub fn override_config(&self) -> Option<GenerationConfig> {
        (!self.ranges.is_empty()).then(|| self.ranges.iter().cloned().collect())
    }
}

/// Orchestrates generation and export of a batch of datasets
pub struct BatchProcessor {
    cli: Cli,
    registry: Registry,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            registry: Registry::new(),
            progress_manager,
        }
    }

    /// Generate and export datasets according to CLI arguments
    ///
    /// Returns the paths written, in generation order.
    ///
    /// # Errors
    ///
    /// Returns a not found error before generating anything if the generator
    /// name is unknown, otherwise the first generation or export error
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        if self.cli.list {
            self.print_generators();
            return Ok(Vec::new());
        }

        // Fail on unknown names before any output directory is touched
        let (kind, _) = self.registry.resolve(&self.cli.generator)?;
        let overrides = self.cli.override_config();
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        tracing::info!(
            generator = kind.name(),
            seed = self.cli.seed,
            count = self.cli.count,
            "starting batch"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(kind.name(), self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let start_time = Instant::now();
            let output_path = Self::get_output_path(&self.cli.output, kind.name(), index);

            if let Some(ref pm) = self.progress_manager {
                pm.start_dataset(&output_path.to_string_lossy());
            }

            let dataset = self
                .registry
                .generate(kind.name(), overrides.as_ref(), &mut rng)?;
            export_dataset_as_csv(&dataset, self.cli.layout(), &output_path)?;
            tracing::debug!(path = %output_path.display(), "dataset written");

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_dataset(start_time.elapsed());
            }
            written.push(output_path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    // Allow print for the generator listing, which is the command's output
    #[allow(clippy::print_stdout)]
    fn print_generators(&self) {
        for name in self.registry.names() {
            println!("{name}");
        }
    }

    /// Output file for the dataset at `index`: `<dir>/<generator>_<index>.csv`
    pub fn get_output_path(output_dir: &Path, generator: &str, index: usize) -> PathBuf {
        output_dir.join(format!("{generator}_{index:03}.csv"))
    }
}

/// Install the global stderr log subscriber, at debug level when `verbose`
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn setup_logging(verbose: bool) -> std::result::Result<(), SetGlobalDefaultError> {
    // Progress bars own the terminal unless debugging
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
