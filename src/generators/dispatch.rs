//! Name-based generator lookup and invocation

use crate::generators::displacement::generate_midpoint_displacement;
use crate::generators::random::generate_random_distribution;
use crate::io::configuration::GenerationConfig;
use crate::io::error::{GenerationError, Result};
use crate::series::Dataset;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Signature shared by every registered generator
pub type GeneratorFn = fn(&GenerationConfig, &mut dyn RngCore) -> Result<Dataset>;

/// Closed set of available generators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Independent bounded random layers
    RandomDistribution,
    /// Fractal midpoint displacement layers
    MidpointDisplacement,
}

impl GeneratorKind {
    /// Every generator in registration order
    pub const ALL: [Self; 2] = [Self::RandomDistribution, Self::MidpointDisplacement];

    /// Registry name of this generator
    pub const fn name(self) -> &'static str {
        match self {
            Self::RandomDistribution => "random_distribution",
            Self::MidpointDisplacement => "midpoint_displacement",
        }
    }

    /// Default ranges used when a caller supplies none
    pub fn default_config(self) -> GenerationConfig {
        match self {
            Self::RandomDistribution => GenerationConfig::random_distribution_defaults(),
            Self::MidpointDisplacement => GenerationConfig::midpoint_displacement_defaults(),
        }
    }

    /// Names of every generator
    pub fn names() -> Vec<&'static str> {
        Self::ALL.into_iter().map(Self::name).collect()
    }

    const fn function(self) -> GeneratorFn {
        match self {
            Self::RandomDistribution => run_random_distribution,
            Self::MidpointDisplacement => run_midpoint_displacement,
        }
    }
}

fn run_random_distribution(config: &GenerationConfig, rng: &mut dyn RngCore) -> Result<Dataset> {
    generate_random_distribution(config, rng)
}

fn run_midpoint_displacement(config: &GenerationConfig, rng: &mut dyn RngCore) -> Result<Dataset> {
    generate_midpoint_displacement(config, rng)
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GenerationError::NotFound {
                name: s.to_string(),
                available: Self::names(),
            })
    }
}

/// Table from generator name to generator function
pub struct Registry {
    entries: Vec<(GeneratorKind, GeneratorFn)>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding every built-in generator
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

impl Registry {
    /// Registry with every built-in generator
    pub fn new() -> Self {
        Self {
            entries: GeneratorKind::ALL
                .into_iter()
                .map(|kind| (kind, kind.function()))
                .collect(),
        }
    }

    /// Registry with only the given generators
    pub fn with_kinds(kinds: &[GeneratorKind]) -> Self {
        Self {
            entries: kinds.iter().map(|&kind| (kind, kind.function())).collect(),
        }
    }

    /// Names of the registered generators
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(kind, _)| kind.name()).collect()
    }

    /// Look up a generator by name
    ///
    /// # Errors
    ///
    /// Returns a not found error if no registered generator has this name
    pub fn resolve(&self, name: &str) -> Result<(GeneratorKind, GeneratorFn)> {
        self.entries
            .iter()
            .find(|(kind, _)| kind.name() == name)
            .copied()
            .ok_or_else(|| GenerationError::NotFound {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Resolve `name` and run it
    ///
    /// A caller config is layered over the generator's defaults, so it only
    /// needs to name the ranges it changes.
    ///
    /// # Errors
    ///
    /// Returns a not found error before any drawing if the name is unknown,
    /// otherwise propagates the generator's error unchanged
    pub fn generate(
        &self,
        name: &str,
        config: Option<&GenerationConfig>,
        rng: &mut dyn RngCore,
    ) -> Result<Dataset> {
        let (kind, generate) = self.resolve(name)?;
        let defaults = kind.default_config();
        let config = match config {
            Some(overrides) => overrides.merged_over(&defaults),
            None => defaults,
        };

        let _span = tracing::debug_span!("generate", generator = kind.name()).entered();
        let dataset = generate(&config, rng)?;
        tracing::debug!(
            layers = dataset.num_layers(),
            samples = dataset.num_samples(),
            "dataset generated"
        );
        Ok(dataset)
    }
}

/// Resolve `graph_type` in the built-in registry and run it
///
/// # Errors
///
/// Returns a not found error if `graph_type` names no generator, otherwise
/// propagates the generator's error unchanged
pub fn generate_data(
    graph_type: &str,
    config: Option<&GenerationConfig>,
    rng: &mut dyn RngCore,
) -> Result<Dataset> {
    REGISTRY.generate(graph_type, config, rng)
}
