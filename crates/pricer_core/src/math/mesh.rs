//! Linearly spaced parameter meshes.
//!
//! A [`Mesh`] is the axis of a sweep: an ordered, fully materialised sequence
//! of `f64` values that callers may index into.
//!
//! ## Boundary Policy
//!
//! Generating `start, start + h, start + 2h, …` by repeated addition
//! accumulates rounding error, so the point mathematically equal to `end` can
//! land just above it and be dropped (`0.1..=2.0` by `0.1` yields 19 points
//! that way). [`Mesh::generate`] instead:
//!
//! 1. counts intervals as `floor((end - start) / step + MESH_TOLERANCE)`,
//! 2. computes each point as `start + i * step` (no accumulation),
//! 3. snaps the final point to `end` when it lies within
//!    `MESH_TOLERANCE * |step|` of it.
//!
//! The inclusive upper bound is therefore honoured for every step that
//! divides the span up to floating-point noise.

use std::ops::Deref;

use crate::types::{PricingError, PricingResult};

/// Relative tolerance (in units of one step) for boundary inclusion.
pub const MESH_TOLERANCE: f64 = 1e-9;

/// Upper bound on generated mesh size.
pub const MAX_MESH_POINTS: usize = 10_000_000;

/// Ordered, read-only sequence of sweep values.
///
/// # Examples
/// ```
/// use pricer_core::math::mesh::Mesh;
///
/// let mesh = Mesh::generate(10.0, 50.0, 1.0).unwrap();
/// assert_eq!(mesh.len(), 41);
/// assert_eq!(mesh[0], 10.0);
/// assert_eq!(mesh[40], 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mesh {
    values: Vec<f64>,
}

impl Mesh {
    /// Generates `start, start + step, …` bounded inclusively by `end`.
    ///
    /// # Direction
    /// - `step > 0`: ascending, points `<= end`; empty when `start > end`
    /// - `step < 0`: descending, points `>= end`; empty when `start < end`
    /// - `start == end`: the single point `start`
    ///
    /// # Errors
    /// - `PricingError::InvalidArgument` if `step == 0`
    /// - `PricingError::InvalidArgument` if any argument is non-finite
    /// - `PricingError::InvalidArgument` if the mesh would exceed
    ///   [`MAX_MESH_POINTS`]
    ///
    /// # Examples
    /// ```
    /// use pricer_core::math::mesh::Mesh;
    ///
    /// // Boundary included despite 0.1 not being representable
    /// let mesh = Mesh::generate(0.1, 2.0, 0.1).unwrap();
    /// assert_eq!(mesh.len(), 20);
    /// assert_eq!(*mesh.last().unwrap(), 2.0);
    ///
    /// // Step pointing away from `end` yields nothing
    /// assert!(Mesh::generate(1.0, 2.0, -0.5).unwrap().is_empty());
    ///
    /// assert!(Mesh::generate(1.0, 2.0, 0.0).is_err());
    /// ```
    pub fn generate(start: f64, end: f64, step: f64) -> PricingResult<Self> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(PricingError::invalid_argument(format!(
                "Mesh bounds must be finite: start = {}, end = {}, step = {}",
                start, end, step
            )));
        }
        if step == 0.0 {
            return Err(PricingError::invalid_argument("Mesh step must be non-zero"));
        }

        let span = end - start;

        // Step points away from `end`: no iterations.
        if span != 0.0 && span.signum() != step.signum() {
            return Ok(Self::default());
        }

        let intervals = (span / step + MESH_TOLERANCE).floor();
        if intervals >= MAX_MESH_POINTS as f64 {
            return Err(PricingError::invalid_argument(format!(
                "Mesh from {} to {} by {} exceeds {} points",
                start, end, step, MAX_MESH_POINTS
            )));
        }
        let intervals = intervals as usize;

        let mut values: Vec<f64> = (0..=intervals)
            .map(|i| start + i as f64 * step)
            .collect();

        if let Some(last) = values.last_mut() {
            if (*last - end).abs() <= MESH_TOLERANCE * step.abs() {
                *last = end;
            }
        }

        Ok(Self { values })
    }

    /// Wraps explicit values, preserving their order.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Single-point mesh.
    pub fn point(value: f64) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Returns the points as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the mesh, returning its points.
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Mesh {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Mesh {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Mesh {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Reproduces the accumulate-while-`<=` loop for comparison.
    fn accumulated(start: f64, end: f64, step: f64) -> Vec<f64> {
        let mut out = Vec::new();
        let mut x = start;
        while x <= end {
            out.push(x);
            x += step;
        }
        out
    }

    #[test]
    fn test_integer_mesh() {
        let mesh = Mesh::generate(10.0, 50.0, 1.0).unwrap();
        assert_eq!(mesh.len(), 41);
        assert_eq!(mesh[0], 10.0);
        assert_eq!(mesh[40], 50.0);
        for (i, x) in mesh.iter().enumerate() {
            assert_eq!(*x, 10.0 + i as f64);
        }
    }

    #[test]
    fn test_coarse_mesh() {
        let mesh = Mesh::generate(80.0, 120.0, 5.0).unwrap();
        assert_eq!(
            mesh.as_slice(),
            &[80.0, 85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0]
        );
    }

    #[test]
    fn test_tolerant_inclusion_of_end() {
        // Accumulation drops the end point here
        assert_eq!(accumulated(0.1, 2.0, 0.1).len(), 19);

        let mesh = Mesh::generate(0.1, 2.0, 0.1).unwrap();
        assert_eq!(mesh.len(), 20);
        assert_eq!(mesh[0], 0.1);
        assert_eq!(*mesh.last().unwrap(), 2.0);
    }

    #[test]
    fn test_fractional_meshes_sizes() {
        assert_eq!(Mesh::generate(0.1, 0.5, 0.05).unwrap().len(), 9);
        assert_eq!(Mesh::generate(0.01, 0.1, 0.01).unwrap().len(), 10);
        assert_eq!(Mesh::generate(0.1, 1.0, 0.1).unwrap().len(), 10);
    }

    #[test]
    fn test_points_not_accumulated() {
        let mesh = Mesh::generate(0.1, 1.0, 0.1).unwrap();
        for (i, x) in mesh.iter().enumerate().take(mesh.len() - 1) {
            assert_eq!(*x, 0.1 + i as f64 * 0.1);
        }
        assert_relative_eq!(mesh[7], 0.8, epsilon = 1e-15);
    }

    #[test]
    fn test_end_not_multiple_of_step() {
        let mesh = Mesh::generate(0.0, 1.0, 0.3).unwrap();
        assert_eq!(mesh.len(), 4);
        assert_relative_eq!(mesh[3], 0.9, epsilon = 1e-15);
        assert!(*mesh.last().unwrap() <= 1.0);
    }

    #[test]
    fn test_single_point_when_start_equals_end() {
        let mesh = Mesh::generate(3.0, 3.0, 0.5).unwrap();
        assert_eq!(mesh.as_slice(), &[3.0]);

        let mesh = Mesh::generate(3.0, 3.0, -0.5).unwrap();
        assert_eq!(mesh.as_slice(), &[3.0]);
    }

    #[test]
    fn test_step_larger_than_span() {
        let mesh = Mesh::generate(1.0, 2.0, 5.0).unwrap();
        assert_eq!(mesh.as_slice(), &[1.0]);
    }

    #[test]
    fn test_positive_step_with_reversed_bounds_is_empty() {
        let mesh = Mesh::generate(2.0, 1.0, 0.5).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_negative_step_with_ascending_bounds_is_empty() {
        let mesh = Mesh::generate(1.0, 2.0, -0.5).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_descending_mesh() {
        let mesh = Mesh::generate(2.0, 1.0, -0.25).unwrap();
        assert_eq!(mesh.as_slice(), &[2.0, 1.75, 1.5, 1.25, 1.0]);
    }

    #[test]
    fn test_zero_step_rejected() {
        match Mesh::generate(0.0, 1.0, 0.0) {
            Err(PricingError::InvalidArgument(msg)) => assert!(msg.contains("non-zero")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        assert!(Mesh::generate(f64::NAN, 1.0, 0.1).is_err());
        assert!(Mesh::generate(0.0, f64::INFINITY, 0.1).is_err());
        assert!(Mesh::generate(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_oversized_mesh_rejected() {
        assert!(Mesh::generate(0.0, 1.0, 1e-12).is_err());
    }

    #[test]
    fn test_explicit_constructors() {
        let mesh = Mesh::from_values(vec![3.0, 1.0, 2.0]);
        assert_eq!(mesh.as_slice(), &[3.0, 1.0, 2.0]);

        let point = Mesh::point(42.0);
        assert_eq!(point.len(), 1);
        assert_eq!(point[0], 42.0);

        let from: Mesh = vec![1.0].into();
        assert_eq!(from.into_inner(), vec![1.0]);
    }
}
