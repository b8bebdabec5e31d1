//! One- and two-dimensional parameter sweeps.
//!
//! A sweep evaluates a [`PricingFormula`] at every point of one mesh, or at
//! every combination of two meshes, substituting the mesh value into a copy
//! of the base parameters. For a 2-D sweep the cell `(i, j)` is
//!
//! ```text
//! m[i][j] = f(base.with(slot1, mesh1[i]).with(slot2, mesh2[j]))
//! ```
//!
//! so when both axes name the same slot the column value wins.

use std::ops::Index;

use pricer_core::traits::PricingFormula;
use pricer_core::types::{BaseParameters, ParameterSlot, PricingError, PricingResult};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::kind::ValuationKind;
use crate::parallel::{fill_rows, parallel_map, ParallelConfig};

/// One axis of a sweep: a mesh and the parameter it overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAxis<'a> {
    /// Values taken by the parameter, in output order.
    pub mesh: &'a [f64],
    /// Parameter overridden by the mesh values.
    pub slot: ParameterSlot,
}

impl<'a> SweepAxis<'a> {
    /// Creates an axis over `mesh` for `slot`.
    pub fn new(mesh: &'a [f64], slot: ParameterSlot) -> Self {
        Self { mesh, slot }
    }

    /// Number of points on the axis.
    #[inline]
    pub fn len(&self) -> usize {
        self.mesh.len()
    }

    /// Whether the axis has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}

/// Rectangular row-major matrix of sweep results.
///
/// Storage is a single buffer of `rows * cols` values, so every row has the
/// same width.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ResultMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl ResultMatrix {
    fn filled(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> PricingResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some(i) = rows.iter().position(|r| r.len() != n_cols) {
            return Err(PricingError::invalid_argument(format!(
                "Row {} has {} values, expected {}",
                i,
                rows[i].len(),
                n_cols
            )));
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (length of the row mesh).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (length of the column mesh).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cell `(i, j)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.values[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.rows).then(|| &self.values[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterator over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| &self.values[i * self.cols..(i + 1) * self.cols])
    }

    /// Column `j` copied out.
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        (j < self.cols).then(|| self.iter_rows().map(|row| row[j]).collect())
    }

    /// Flat row-major values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Nested `Vec<Vec<f64>>` copy, one inner vector per row.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for ResultMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.values[i * self.cols + j]
    }
}

/// Evaluates `formula` at every point of `mesh`, overriding `slot`.
///
/// The result has one value per mesh point, in mesh order.
///
/// # Examples
/// ```
/// use pricer_core::math::Mesh;
/// use pricer_core::types::{BaseParameters, ParameterSlot};
/// use pricer_models::analytical::call_price;
/// use pricer_risk::sweep::sweep_1d;
///
/// let base = BaseParameters::new(0.0, 30.0, 1.0, 0.05, 0.2, 0.05);
/// let spots = Mesh::generate(10.0, 50.0, 1.0).unwrap();
/// let prices = sweep_1d(&spots, ParameterSlot::Spot, &call_price, &base);
///
/// assert_eq!(prices.len(), 41);
/// ```
pub fn sweep_1d<F>(mesh: &[f64], slot: ParameterSlot, formula: &F, base: &BaseParameters) -> Vec<f64>
where
    F: PricingFormula + ?Sized,
{
    mesh.iter()
        .map(|&x| formula.value(&base.with(slot, x)))
        .collect()
}

/// Evaluates `formula` over the Cartesian product of two axes.
///
/// Rows follow `rows.mesh`, columns follow `cols.mesh`.
pub fn sweep_2d<F>(
    rows: SweepAxis<'_>,
    cols: SweepAxis<'_>,
    formula: &F,
    base: &BaseParameters,
) -> ResultMatrix
where
    F: PricingFormula + ?Sized,
{
    let mut matrix = ResultMatrix::filled(rows.len(), cols.len());
    if cols.is_empty() {
        return matrix;
    }
    for (row, &x) in matrix.values.chunks_mut(cols.len()).zip(rows.mesh) {
        fill_row(row, cols, formula, &base.with(rows.slot, x));
    }
    matrix
}

#[inline]
fn fill_row<F>(row: &mut [f64], cols: SweepAxis<'_>, formula: &F, row_base: &BaseParameters)
where
    F: PricingFormula + ?Sized,
{
    for (cell, &y) in row.iter_mut().zip(cols.mesh) {
        *cell = formula.value(&row_base.with(cols.slot, y));
    }
}

/// Sweep runner that switches to Rayon for large grids.
///
/// Parallel and serial evaluation produce bit-identical results; the
/// [`ParallelConfig`] only decides how the work is scheduled.
#[derive(Debug, Clone, Default)]
pub struct SweepEngine {
    config: ParallelConfig,
}

impl SweepEngine {
    /// Creates an engine with a validated parallel configuration.
    pub fn new(config: ParallelConfig) -> PricingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine that always evaluates serially.
    pub fn serial() -> Self {
        Self {
            config: ParallelConfig::serial(),
        }
    }

    /// The parallel configuration.
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// 1-D sweep of an arbitrary formula.
    pub fn sweep_1d<F>(&self, axis: SweepAxis<'_>, formula: &F, base: &BaseParameters) -> Vec<f64>
    where
        F: PricingFormula + Sync + ?Sized,
    {
        if self.config.should_parallelize(axis.len()) {
            debug!(points = axis.len(), slot = %axis.slot, "parallel 1-D sweep");
            parallel_map(axis.mesh, self.config.batch_size, |&x| {
                formula.value(&base.with(axis.slot, x))
            })
        } else {
            sweep_1d(axis.mesh, axis.slot, formula, base)
        }
    }

    /// 2-D sweep of an arbitrary formula.
    pub fn sweep_2d<F>(
        &self,
        rows: SweepAxis<'_>,
        cols: SweepAxis<'_>,
        formula: &F,
        base: &BaseParameters,
    ) -> ResultMatrix
    where
        F: PricingFormula + Sync + ?Sized,
    {
        if rows.slot == cols.slot {
            warn!(
                slot = %rows.slot,
                "both sweep axes override the same parameter; column values take precedence"
            );
        }

        let cells = rows.len() * cols.len();
        if !self.config.should_parallelize(cells) {
            return sweep_2d(rows, cols, formula, base);
        }

        debug!(rows = rows.len(), cols = cols.len(), "parallel 2-D sweep");
        let mut matrix = ResultMatrix::filled(rows.len(), cols.len());
        let rows_per_task = self.config.rows_per_task(cols.len());
        fill_rows(&mut matrix.values, cols.len(), rows_per_task, |i, row| {
            fill_row(row, cols, formula, &base.with(rows.slot, rows.mesh[i]));
        });
        matrix
    }

    /// 1-D sweep of a valuation kind.
    pub fn sweep_kind_1d(
        &self,
        kind: ValuationKind,
        axis: SweepAxis<'_>,
        base: &BaseParameters,
    ) -> Vec<f64> {
        debug!(%kind, slot = %axis.slot, points = axis.len(), "1-D sweep");
        warn_if_ignored(kind, axis.slot);
        self.sweep_1d(axis, &kind, base)
    }

    /// 2-D sweep of a valuation kind.
    pub fn sweep_kind_2d(
        &self,
        kind: ValuationKind,
        rows: SweepAxis<'_>,
        cols: SweepAxis<'_>,
        base: &BaseParameters,
    ) -> ResultMatrix {
        debug!(
            %kind,
            row_slot = %rows.slot,
            col_slot = %cols.slot,
            rows = rows.len(),
            cols = cols.len(),
            "2-D sweep"
        );
        warn_if_ignored(kind, rows.slot);
        warn_if_ignored(kind, cols.slot);
        self.sweep_2d(rows, cols, &kind, base)
    }
}

fn warn_if_ignored(kind: ValuationKind, slot: ParameterSlot) {
    if !kind.depends_on(slot) {
        warn!(%kind, %slot, "swept parameter does not affect this valuation kind");
    }
}
