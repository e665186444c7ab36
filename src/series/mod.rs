//! Generated series containers

/// Rectangular layered dataset and layer labelling
pub mod dataset;

pub use dataset::Dataset;
