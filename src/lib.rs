//! Synthetic layered series generation for visualization demos
//!
//! Datasets pair a shared X domain with one or more y layers. Layers are
//! either drawn independently from bounded integer ranges, or refined into
//! self-similar curves by midpoint displacement. Generators are resolved by
//! name and take an explicit random source, so a fixed seed reproduces output.

#![forbid(unsafe_code)]

/// Generator implementations and name-based dispatch
pub mod generators;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for uniform parameter draws
pub mod math;
/// Generated dataset containers
pub mod series;

pub use generators::{GeneratorKind, Registry, generate_data};
pub use io::configuration::{GenerationConfig, RangeKey};
pub use io::error::{GenerationError, Result};
pub use series::Dataset;
