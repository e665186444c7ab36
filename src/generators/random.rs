//! Independent bounded random layers over an evenly spaced domain

use crate::io::configuration::{GenerationConfig, MAX_LAYERS, MAX_SAMPLES, RangeKey};
use crate::io::error::Result;
use crate::math::sampling::{draw_count, draw_int, layer_values};
use crate::series::Dataset;
use ndarray::Array1;
use rand::Rng;

/// Generate layers of uniformly drawn integers sharing one X domain
///
/// Layer count, X endpoints and sample count are drawn once. Each layer then
/// draws its own anchors and fills every sample from the range between them
/// (see [`layer_values`] for how equal or descending anchors are handled).
///
/// # Errors
///
/// Returns a range error if a required range is missing or malformed, or an
/// invalid parameter error if a drawn layer or sample count is out of bounds
/// or their product exceeds the dataset size limit
pub fn generate_random_distribution<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Dataset> {
    let num_layers = draw_count(config, RangeKey::Layers, MAX_LAYERS, rng)?;
    let x_start = draw_int(config, RangeKey::XStart, rng)? as f64;
    let x_end = draw_int(config, RangeKey::XEnd, rng)? as f64;
    let num_samples = draw_count(config, RangeKey::NumSamples, MAX_SAMPLES, rng)?;

    tracing::debug!(
        num_layers,
        x_start,
        x_end,
        num_samples,
        "drawn random distribution parameters"
    );
    Dataset::check_size(num_layers, num_samples)?;

    let rows = (0..num_layers)
        .map(|layer| {
            let y_start = draw_int(config, RangeKey::YStart, rng)?;
            let y_end = draw_int(config, RangeKey::YEnd, rng)?;
            tracing::debug!(layer, y_start, y_end, "layer bounds");
            Ok(layer_values(y_start, y_end, num_samples, rng))
        })
        .collect::<Result<Vec<_>>>()?;

    let x = Array1::linspace(x_start, x_end, num_samples);
    Dataset::from_rows(x, &rows)
}
