//! Breadth-first midpoint displacement between two anchor points
//!
//! Each refinement pass displaces the midpoint of every adjacent pair in the
//! current sequence, then merges all new points into the sequence at once.
//! After the pass the displacement magnitude decays by `2^-roughness`, so a
//! larger roughness gives a smoother curve.

use crate::io::configuration::MAX_ITERATIONS;
use crate::io::error::{Result, invalid_parameter};
use crate::math::sampling::signed_displacement;
use ndarray::Array1;
use rand::Rng;

/// A curve point whose y coordinate is never negative
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point, clamping `y` to be non-negative
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y: y.max(0.0) }
    }

    /// Horizontal coordinate
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate, always `>= 0`
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Arithmetic midpoint of two points
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Points of a subdivided curve
///
/// Refined sequences are ordered by ascending x. A sequence returned after
/// zero passes holds its two anchors exactly as given.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Two-anchor sequence, ordered so x does not decrease
    pub fn from_anchors(start: Point, end: Point) -> Self {
        let points = if start.x > end.x {
            vec![end, start]
        } else {
            vec![start, end]
        };
        Self { points }
    }

    /// Points in sequence order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X coordinates in sequence order
    pub fn xs(&self) -> Array1<f64> {
        self.points.iter().map(Point::x).collect()
    }

    /// Y coordinates in sequence order
    pub fn ys(&self) -> Array1<f64> {
        self.points.iter().map(Point::y).collect()
    }

    /// Consume into the underlying points
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Displaced midpoint of every adjacent pair, in segment order
    fn displaced_midpoints<R: Rng + ?Sized>(&self, magnitude: f64, rng: &mut R) -> Vec<Point> {
        self.points
            .windows(2)
            .filter_map(|pair| match pair {
                [left, right] => {
                    let mid = left.midpoint(right);
                    Some(Point::new(
                        mid.x,
                        mid.y + signed_displacement(magnitude, rng),
                    ))
                }
                _ => None,
            })
            .collect()
    }

    /// Merge x-sorted `inserted` points into the sequence
    ///
    /// On equal x the existing point comes first, and inserted points keep
    /// their relative order.
    fn merge(&mut self, inserted: Vec<Point>) {
        let existing = std::mem::take(&mut self.points);
        let mut merged = Vec::with_capacity(existing.len() + inserted.len());
        let mut existing = existing.into_iter().peekable();
        let mut inserted = inserted.into_iter().peekable();

        loop {
            let take_existing = match (existing.peek(), inserted.peek()) {
                (Some(old), Some(new)) => old.x <= new.x,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let next = if take_existing {
                existing.next()
            } else {
                inserted.next()
            };
            merged.extend(next);
        }

        self.points = merged;
    }
}

/// Number of points produced by `num_iterations` refinement passes
pub const fn point_count(num_iterations: u32) -> usize {
    (1 << num_iterations) + 1
}

/// Refine the segment `start`..`end` for `num_iterations` passes
///
/// Zero iterations return `[start, end]` unchanged, in the given order.
/// Otherwise the anchors are ordered by x before the first pass, so the
/// refined sequence never has decreasing x.
///
/// # Errors
///
/// Returns an invalid parameter error if `num_iterations` is negative or
/// exceeds [`MAX_ITERATIONS`]
pub fn midpoint_displacement<R: Rng + ?Sized>(
    start: Point,
    end: Point,
    roughness: f64,
    vertical_displacement: f64,
    num_iterations: i64,
    rng: &mut R,
) -> Result<PointSequence> {
    if num_iterations < 0 {
        return Err(invalid_parameter(
            "num_iterations",
            &num_iterations,
            &"refinement depth cannot be negative",
        ));
    }
    if num_iterations > MAX_ITERATIONS {
        return Err(invalid_parameter(
            "num_iterations",
            &num_iterations,
            &format!("refinement depth is limited to {MAX_ITERATIONS}"),
        ));
    }

    if num_iterations == 0 {
        return Ok(PointSequence {
            points: vec![start, end],
        });
    }

    let decay = 2f64.powf(-roughness);
    let mut magnitude = vertical_displacement;
    let mut sequence = PointSequence::from_anchors(start, end);

    for pass in 1..=num_iterations {
        let inserted = sequence.displaced_midpoints(magnitude, rng);
        sequence.merge(inserted);
        tracing::trace!(pass, points = sequence.len(), magnitude, "refinement pass");
        magnitude *= decay;
    }

    Ok(sequence)
}
