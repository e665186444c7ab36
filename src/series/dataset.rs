//! Rectangular layered series returned by every generator

use crate::io::configuration::MAX_DATASET_VALUES;
use crate::io::error::{Result, invalid_parameter, shape_error};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Shared X domain plus one y row per layer
///
/// Every row of `layers` has the same length as `x`, and there is always at
/// least one layer and one sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    x: Array1<f64>,
    layers: Array2<f64>,
}

impl Dataset {
    /// Pair an X domain with a `[num_layers, N]` layer array
    ///
    /// # Errors
    ///
    /// Returns a shape error if there are no layers, no samples, or the layer
    /// rows differ in length from `x`
    pub fn new(x: Array1<f64>, layers: Array2<f64>) -> Result<Self> {
        let (num_layers, num_samples) = layers.dim();
        if num_layers == 0 {
            return Err(shape_error(&"dataset must contain at least one layer"));
        }
        if x.is_empty() {
            return Err(shape_error(&"dataset must contain at least one sample"));
        }
        if num_samples != x.len() {
            return Err(shape_error(&format!(
                "layer rows have {num_samples} values but X has {}",
                x.len()
            )));
        }
        Ok(Self { x, layers })
    }

    /// Stack equal-length layer rows under a shared X domain
    ///
    /// # Errors
    ///
    /// Returns a shape error if any row's length differs from `x`, or if
    /// `rows` or `x` is empty
    pub fn from_rows(x: Array1<f64>, rows: &[Array1<f64>]) -> Result<Self> {
        let num_samples = x.len();
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_samples)
        {
            return Err(shape_error(&format!(
                "layer {index} has {} values but X has {num_samples}",
                row.len()
            )));
        }

        let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let layers = Array2::from_shape_vec((rows.len(), num_samples), flat)
            .map_err(|e| shape_error(&e))?;
        Self::new(x, layers)
    }

    /// Check a `num_layers` by `num_samples` dataset fits in [`MAX_DATASET_VALUES`]
    ///
    /// Generators call this before allocating any layer.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the value count exceeds the limit
    pub fn check_size(num_layers: usize, num_samples: usize) -> Result<()> {
        let values = num_layers.saturating_mul(num_samples);
        if values > MAX_DATASET_VALUES {
            return Err(invalid_parameter(
                "dataset_size",
                &format!("{num_layers}x{num_samples}"),
                &format!("dataset is limited to {MAX_DATASET_VALUES} values"),
            ));
        }
        Ok(())
    }

    /// Shared X domain
    pub const fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// Layer values with shape `[num_layers, num_samples]`
    pub const fn layers(&self) -> &Array2<f64> {
        &self.layers
    }

    /// Values of a single layer
    pub fn layer(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.num_layers()).then(|| self.layers.index_axis(Axis(0), index))
    }

    /// Number of layers
    pub fn num_layers(&self) -> usize {
        self.layers.nrows()
    }

    /// Number of samples per layer
    pub fn num_samples(&self) -> usize {
        self.x.len()
    }

    /// Letter labels for each layer: `A`..`Z`, then `AA`, `AB`, ...
    pub fn layer_names(&self) -> Vec<String> {
        (0..self.num_layers()).map(layer_name).collect()
    }

    /// `(layer, x, y)` triples in layer-major order
    ///
    /// This is the flattened shape chart adapters expect when every layer
    /// repeats the X domain in a single column.
    pub fn long_rows(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.layers
            .outer_iter()
            .enumerate()
            .flat_map(move |(layer, row)| {
                self.x
                    .iter()
                    .zip(row)
                    .map(move |(&x, &y)| (layer, x, y))
            })
    }

    /// Split into the X domain and layer array
    pub fn into_parts(self) -> (Array1<f64>, Array2<f64>) {
        (self.x, self.layers)
    }
}

/// Bijective base-26 letter label for a zero-based layer index
pub fn layer_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        letters.push(char::from(b'A' + digit as u8));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}
