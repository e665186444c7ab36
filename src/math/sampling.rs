//! Uniform draws from configured parameter ranges

use crate::io::configuration::{GenerationConfig, RangeKey};
use crate::io::error::{Result, invalid_parameter, range_error};
use ndarray::Array1;
use num_traits::ToPrimitive;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

/// Draw an integer uniformly from the half-open range configured for `key`
///
/// Bounds are truncated toward zero before drawing. A degenerate range whose
/// bounds are equal always yields that bound.
///
/// # Errors
///
/// Returns a range error if the range is missing, non-finite, outside the
/// `i64` domain, or has `low > high`
pub fn draw_int<R: Rng + ?Sized>(
    config: &GenerationConfig,
    key: RangeKey,
    rng: &mut R,
) -> Result<i64> {
    let (low, high) = config.pair(key)?;
    let to_int = |bound: f64| {
        bound
            .trunc()
            .to_i64()
            .ok_or_else(|| range_error(key.name(), &format!("bound {bound} is not representable")))
    };
    let (low, high) = (to_int(low)?, to_int(high)?);

    match low.cmp(&high) {
        std::cmp::Ordering::Less => Ok(rng.random_range(low..high)),
        std::cmp::Ordering::Equal => Ok(low),
        std::cmp::Ordering::Greater => Err(range_error(
            key.name(),
            &format!("low bound {low} exceeds high bound {high}"),
        )),
    }
}

/// Draw a float uniformly from the half-open range configured for `key`
///
/// # Errors
///
/// Returns a range error if the range is missing, non-finite, has
/// `low > high`, or spans more than `f64` can represent
pub fn draw_float<R: Rng + ?Sized>(
    config: &GenerationConfig,
    key: RangeKey,
    rng: &mut R,
) -> Result<f64> {
    let (low, high) = config.pair(key)?;

    if low > high {
        return Err(range_error(
            key.name(),
            &format!("low bound {low} exceeds high bound {high}"),
        ));
    }

    // Bounds are finite here, so not-less means equal
    if low < high {
        let uniform = Uniform::new(low, high).map_err(|error| {
            range_error(key.name(), &format!("cannot sample [{low}, {high}): {error}"))
        })?;
        Ok(uniform.sample(rng))
    } else {
        Ok(low)
    }
}

/// Draw a structural count and check it lies in `1..=max`
///
/// # Errors
///
/// Returns a range error if the draw fails, or an invalid parameter error if
/// the drawn count is below one or above `max`
pub fn draw_count<R: Rng + ?Sized>(
    config: &GenerationConfig,
    key: RangeKey,
    max: i64,
    rng: &mut R,
) -> Result<usize> {
    let count = draw_int(config, key, rng)?;
    if !(1..=max).contains(&count) {
        return Err(invalid_parameter(
            key.name(),
            &count,
            &format!("drawn count must lie in 1..={max}"),
        ));
    }
    count
        .to_usize()
        .ok_or_else(|| invalid_parameter(key.name(), &count, &"count does not fit in usize"))
}

/// Draw `num_samples` integer values between a layer's two anchors
///
/// Ascending anchors draw from `[y_start, y_end)`, equal anchors yield the
/// constant `y_start`, and descending anchors draw from `[y_end, y_start)`.
pub fn layer_values<R: Rng + ?Sized>(
    y_start: i64,
    y_end: i64,
    num_samples: usize,
    rng: &mut R,
) -> Array1<f64> {
    let (low, high) = match y_start.cmp(&y_end) {
        std::cmp::Ordering::Less => (y_start, y_end),
        std::cmp::Ordering::Equal => (y_start, y_start.saturating_add(1)),
        std::cmp::Ordering::Greater => (y_end, y_start),
    };

    Array1::from_shape_fn(num_samples, |_| rng.random_range(low..high) as f64)
}

/// Pick `+magnitude` or `-magnitude` with equal probability
pub fn signed_displacement<R: Rng + ?Sized>(magnitude: f64, rng: &mut R) -> f64 {
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
