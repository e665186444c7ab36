//! Generation constants, default parameter ranges and runtime configuration

use crate::io::error::{GenerationError, range_error};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// Per-parameter limits; MAX_DATASET_VALUES bounds their product
/// Maximum refinement depth accepted by the subdivision routine
pub const MAX_ITERATIONS: i64 = 24;
/// Maximum number of samples per layer
pub const MAX_SAMPLES: i64 = 1_000_000;
/// Maximum number of layers per dataset
pub const MAX_LAYERS: i64 = 1_000;
/// Maximum number of layer values in one dataset (`num_layers * num_samples`)
pub const MAX_DATASET_VALUES: usize = 20_000_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of datasets written per run
pub const DEFAULT_DATASET_COUNT: usize = 1;
/// Default output directory for exported datasets
pub const DEFAULT_OUTPUT_DIR: &str = "data";
/// Generator used when none is named
pub const DEFAULT_GENERATOR: &str = "midpoint_displacement";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Default ranges, each (low, high) with high exclusive for integer draws
const RANDOM_DISTRIBUTION_DEFAULTS: [(RangeKey, [f64; 2]); 6] = [
    (RangeKey::Layers, [1.0, 4.0]),
    (RangeKey::XStart, [0.0, 1.0]),
    (RangeKey::XEnd, [10.0, 20.0]),
    (RangeKey::NumSamples, [5.0, 20.0]),
    (RangeKey::YStart, [0.0, 10.0]),
    (RangeKey::YEnd, [10.0, 30.0]),
];

const MIDPOINT_DISPLACEMENT_DEFAULTS: [(RangeKey, [f64; 2]); 8] = [
    (RangeKey::Layers, [1.0, 4.0]),
    (RangeKey::XStart, [0.0, 1.0]),
    (RangeKey::XEnd, [50.0, 100.0]),
    (RangeKey::NumIterations, [4.0, 8.0]),
    (RangeKey::VerticalDisplacement, [10.0, 30.0]),
    (RangeKey::Rough, [0.5, 1.5]),
    (RangeKey::YStart, [10.0, 50.0]),
    (RangeKey::YEnd, [10.0, 50.0]),
];

/// Recognized parameter range names
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeKey {
    /// Bounds on the number of layers
    Layers,
    /// Bounds on the first X value
    XStart,
    /// Bounds on the last X value
    XEnd,
    /// Bounds on samples per layer (random distribution only)
    NumSamples,
    /// Bounds on refinement depth (midpoint displacement only)
    NumIterations,
    /// Bounds on the initial displacement magnitude
    VerticalDisplacement,
    /// Float bounds on the roughness exponent
    Rough,
    /// Bounds on each layer's starting anchor value
    YStart,
    /// Bounds on each layer's ending anchor value
    YEnd,
}

impl RangeKey {
    /// Every recognized key in declaration order
    pub const ALL: [Self; 9] = [
        Self::Layers,
        Self::XStart,
        Self::XEnd,
        Self::NumSamples,
        Self::NumIterations,
        Self::VerticalDisplacement,
        Self::Rough,
        Self::YStart,
        Self::YEnd,
    ];

    /// Canonical configuration name of this key
    pub const fn name(self) -> &'static str {
        match self {
            Self::Layers => "layers_range",
            Self::XStart => "x_start_range",
            Self::XEnd => "x_end_range",
            Self::NumSamples => "num_samples_range",
            Self::NumIterations => "num_iterations_range",
            Self::VerticalDisplacement => "vertical_displacement_range",
            Self::Rough => "rough_range",
            Self::YStart => "y_start_range",
            Self::YEnd => "y_end_range",
        }
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangeKey {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| GenerationError::InvalidParameter {
                parameter: "range key",
                value: s.to_string(),
                reason: format!(
                    "expected one of: {}",
                    Self::ALL.map(Self::name).join(", ")
                ),
            })
    }
}

/// Mapping from range key to the bound values drawn from
///
/// A key that was never set reads as an empty bound list, so drawing from it
/// fails with a range error rather than silently using a fallback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationConfig {
    ranges: BTreeMap<RangeKey, Vec<f64>>,
}

impl GenerationConfig {
    /// Create a configuration with no ranges set
    pub fn new() -> Self {
        Self::default()
    }

    /// Default ranges for the bounded random layer generator
    pub fn random_distribution_defaults() -> Self {
        RANDOM_DISTRIBUTION_DEFAULTS
            .into_iter()
            .fold(Self::new(), |config, (key, [low, high])| {
                config.with_range(key, low, high)
            })
    }

    /// Default ranges for the midpoint displacement generator
    pub fn midpoint_displacement_defaults() -> Self {
        MIDPOINT_DISPLACEMENT_DEFAULTS
            .into_iter()
            .fold(Self::new(), |config, (key, [low, high])| {
                config.with_range(key, low, high)
            })
    }

    /// Builder-style setter for a (low, high) range
    #[must_use]
    pub fn with_range(mut self, key: RangeKey, low: f64, high: f64) -> Self {
        self.set(key, vec![low, high]);
        self
    }

    /// Replace the bound list for a key
    pub fn set(&mut self, key: RangeKey, bounds: Vec<f64>) {
        self.ranges.insert(key, bounds);
    }

    /// Remove a key, returning its previous bounds
    pub fn remove(&mut self, key: RangeKey) -> Option<Vec<f64>> {
        self.ranges.remove(&key)
    }

    /// Bound list for a key, empty if unset
    pub fn bounds(&self, key: RangeKey) -> &[f64] {
        self.ranges.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Whether a key has been set
    pub fn contains(&self, key: RangeKey) -> bool {
        self.ranges.contains_key(&key)
    }

    /// Number of keys set
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether no keys are set
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Layer these entries over `base`, keeping base entries this config does not set
    #[must_use]
    pub fn merged_over(&self, base: &Self) -> Self {
        let mut ranges = base.ranges.clone();
        ranges.extend(self.ranges.iter().map(|(k, v)| (*k, v.clone())));
        Self { ranges }
    }

    /// Apply a single parsed override
    pub fn apply(&mut self, range_override: &RangeOverride) {
        self.set(range_override.key, range_override.bounds.clone());
    }

    /// Validated (low, high) pair for a key
    ///
    /// # Errors
    ///
    /// Returns a range error if fewer than two bounds are present or either
    /// bound is not finite
    pub fn pair(&self, key: RangeKey) -> crate::io::error::Result<(f64, f64)> {
        match self.bounds(key) {
            [low, high, ..] => {
                if low.is_finite() && high.is_finite() {
                    Ok((*low, *high))
                } else {
                    Err(range_error(
                        key.name(),
                        &format!("bounds must be finite, got ({low}, {high})"),
                    ))
                }
            }
            [] => Err(range_error(key.name(), &"range is not configured")),
            [single] => Err(range_error(
                key.name(),
                &format!("expected a (low, high) pair, got a single bound {single}"),
            )),
        }
    }
}

impl FromIterator<RangeOverride> for GenerationConfig {
    fn from_iter<I: IntoIterator<Item = RangeOverride>>(iter: I) -> Self {
        let mut config = Self::new();
        for range_override in iter {
            config.apply(&range_override);
        }
        config
    }
}

/// A `key=low,high` range assignment, as given on the command line
#[derive(Clone, Debug, PartialEq)]
pub struct RangeOverride {
    /// The range being replaced
    pub key: RangeKey,
    /// Replacement bound values
    pub bounds: Vec<f64>,
}

impl FromStr for RangeOverride {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, values) = s.split_once('=').ok_or_else(|| {
            GenerationError::InvalidParameter {
                parameter: "range override",
                value: s.to_string(),
                reason: "expected the form key=low,high".to_string(),
            }
        })?;
        let key: RangeKey = name.trim().parse()?;

        let bounds = values
            .split(',')
            .map(|value| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| range_error(key.name(), &format!("bound '{value}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if bounds.len() < 2 {
            return Err(range_error(
                key.name(),
                &format!("expected at least two bounds, got {}", bounds.len()),
            ));
        }

        Ok(Self { key, bounds })
    }
}
