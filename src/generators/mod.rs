//! Synthetic layered series generators
//!
//! Two independent generators share one dispatch surface: bounded random
//! layers, and fractal curves refined by midpoint displacement.

/// Name-based generator registry and dispatch
pub mod dispatch;
/// Layered fractal curves over a shared domain
pub mod displacement;
/// Independent bounded random layers
pub mod random;
/// Breadth-first midpoint subdivision of a single segment
pub mod subdivision;

pub use dispatch::{GeneratorKind, Registry, generate_data};
