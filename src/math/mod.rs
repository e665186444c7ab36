//! Mathematical utilities for the generators

/// Uniform draws from configured parameter ranges
pub mod sampling;
