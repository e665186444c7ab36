//! Layered fractal curves built by midpoint displacement

use crate::generators::subdivision::{Point, midpoint_displacement, point_count};
use crate::io::configuration::{GenerationConfig, MAX_ITERATIONS, MAX_LAYERS, RangeKey};
use crate::io::error::{Result, shape_error};
use crate::math::sampling::{draw_count, draw_float, draw_int};
use crate::series::Dataset;
use rand::Rng;

/// Generate one fractal curve per layer over a shared domain
///
/// The layer count, X endpoints, refinement depth, initial displacement and
/// roughness are drawn once and shared by every layer. Each layer draws its
/// own start and end anchor values. All layers therefore have
/// `2^num_iterations + 1` points and identical X coordinates.
///
/// # Errors
///
/// Returns a range error if a required range is missing or malformed, or an
/// invalid parameter error if a drawn layer count or refinement depth is out
/// of bounds, or the layers together exceed the dataset size limit
pub fn generate_midpoint_displacement<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Dataset> {
    let num_layers = draw_count(config, RangeKey::Layers, MAX_LAYERS, rng)?;
    let x_start = draw_int(config, RangeKey::XStart, rng)? as f64;
    let x_end = draw_int(config, RangeKey::XEnd, rng)? as f64;
    let num_iterations = draw_int(config, RangeKey::NumIterations, rng)?;
    let vertical_displacement = draw_int(config, RangeKey::VerticalDisplacement, rng)? as f64;
    let roughness = draw_float(config, RangeKey::Rough, rng)?;

    tracing::debug!(
        num_layers,
        x_start,
        x_end,
        num_iterations,
        vertical_displacement,
        roughness,
        "drawn midpoint displacement parameters"
    );
    // Out-of-range depths are rejected by the subdivision routine
    let valid_depth = u32::try_from(num_iterations)
        .ok()
        .filter(|_| num_iterations <= MAX_ITERATIONS);
    if let Some(depth) = valid_depth {
        Dataset::check_size(num_layers, point_count(depth))?;
    }

    let mut rows = Vec::with_capacity(num_layers);
    let mut x = None;
    for layer in 0..num_layers {
        let y_start = draw_int(config, RangeKey::YStart, rng)?;
        let y_end = draw_int(config, RangeKey::YEnd, rng)?;
        tracing::debug!(layer, y_start, y_end, "layer anchors");

        let sequence = midpoint_displacement(
            Point::new(x_start, y_start as f64),
            Point::new(x_end, y_end as f64),
            roughness,
            vertical_displacement,
            num_iterations,
            rng,
        )?;
        rows.push(sequence.ys());
        x = Some(sequence.xs());
    }

    // X comes from the last layer; every layer shares it by construction
    let x = x.ok_or_else(|| shape_error(&"no layers were generated"))?;
    Dataset::from_rows(x, &rows)
}
