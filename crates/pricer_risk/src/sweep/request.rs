//! Untyped sweep descriptions and their validation.
//!
//! A [`SweepRequest`] is what arrives from configuration files or the
//! command line: names and numbers. [`SweepRequest::run`] turns it into typed
//! meshes, slots and a [`ValuationKind`], rejecting anything that cannot be
//! evaluated, then runs it on a [`SweepEngine`].

use pricer_core::math::Mesh;
use pricer_core::types::{BaseParameters, ParameterSlot, PricingError, PricingResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::engine::{ResultMatrix, SweepAxis, SweepEngine};
use super::kind::ValuationKind;

/// A mesh description for one axis.
///
/// # Examples
/// ```
/// use pricer_risk::sweep::AxisSpec;
///
/// let axis: AxisSpec = "S=10:50:1".parse().unwrap();
/// assert_eq!(axis.mesh().unwrap().len(), 41);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisSpec {
    /// Parameter name or symbol (`S`, `K`, `T`, `r`, `sig`, `b`, ...).
    pub parameter: String,
    /// First mesh value.
    pub start: f64,
    /// Inclusive bound.
    pub end: f64,
    /// Increment between points.
    pub step: f64,
}

impl AxisSpec {
    /// Creates an axis description.
    pub fn new(parameter: impl Into<String>, start: f64, end: f64, step: f64) -> Self {
        Self {
            parameter: parameter.into(),
            start,
            end,
            step,
        }
    }

    /// Resolves the parameter name.
    pub fn slot(&self) -> PricingResult<ParameterSlot> {
        self.parameter.parse()
    }

    /// Generates the mesh.
    pub fn mesh(&self) -> PricingResult<Mesh> {
        Mesh::generate(self.start, self.end, self.step)
    }
}

impl std::str::FromStr for AxisSpec {
    type Err = PricingError;

    /// Parses `NAME=START:END:STEP`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            PricingError::invalid_argument(format!(
                "Invalid axis '{}'. Expected NAME=START:END:STEP",
                s
            ))
        };
        let (name, range) = s.split_once('=').ok_or_else(malformed)?;
        let bounds: Vec<f64> = range
            .split(':')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| malformed())?;
        match bounds.as_slice() {
            &[start, end, step] => Ok(Self::new(name.trim(), start, end, step)),
            _ => Err(malformed()),
        }
    }
}

/// A complete sweep description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepRequest {
    /// Optional label used in reports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Valuation kind name (`price`, `call-delta`, ...).
    pub kind: String,
    /// Values for every parameter not overridden by an axis.
    pub base: BaseParameters,
    /// Row axis; required.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rows: Option<AxisSpec>,
    /// Column axis; present for 2-D sweeps.
    #[cfg_attr(feature = "serde", serde(default))]
    pub columns: Option<AxisSpec>,
}

/// Result of a sweep together with the meshes that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum SweepOutput {
    /// 1-D sweep.
    Vector {
        /// Kind that was evaluated.
        kind: ValuationKind,
        /// Swept parameter.
        slot: ParameterSlot,
        /// Mesh values.
        mesh: Mesh,
        /// One value per mesh point.
        values: Vec<f64>,
    },
    /// 2-D sweep.
    Matrix {
        /// Kind that was evaluated.
        kind: ValuationKind,
        /// Row parameter.
        row_slot: ParameterSlot,
        /// Row mesh.
        row_mesh: Mesh,
        /// Column parameter.
        column_slot: ParameterSlot,
        /// Column mesh.
        column_mesh: Mesh,
        /// Values, `row_mesh.len()` by `column_mesh.len()`.
        matrix: ResultMatrix,
    },
}

impl SweepOutput {
    /// Kind that was evaluated.
    pub fn kind(&self) -> ValuationKind {
        match self {
            SweepOutput::Vector { kind, .. } | SweepOutput::Matrix { kind, .. } => *kind,
        }
    }

    /// Number of computed values.
    pub fn len(&self) -> usize {
        match self {
            SweepOutput::Vector { values, .. } => values.len(),
            SweepOutput::Matrix { matrix, .. } => matrix.as_slice().len(),
        }
    }

    /// Whether no values were computed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SweepRequest {
    /// Creates a 1-D request.
    pub fn vector(kind: impl Into<String>, base: BaseParameters, rows: AxisSpec) -> Self {
        Self {
            name: None,
            kind: kind.into(),
            base,
            rows: Some(rows),
            columns: None,
        }
    }

    /// Creates a 2-D request.
    pub fn matrix(
        kind: impl Into<String>,
        base: BaseParameters,
        rows: AxisSpec,
        columns: AxisSpec,
    ) -> Self {
        Self {
            columns: Some(columns),
            ..Self::vector(kind, base, rows)
        }
    }

    /// Sets the report label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Checks that the request can be evaluated without running it.
    pub fn validate(&self) -> PricingResult<()> {
        self.resolve().map(|_| ())
    }

    fn resolve(&self) -> PricingResult<Resolved> {
        let kind: ValuationKind = self.kind.parse()?;
        let rows = self.rows.as_ref().ok_or_else(|| {
            PricingError::invalid_argument(if self.columns.is_some() {
                "Column axis given without a row axis"
            } else {
                "Sweep requires a row axis"
            })
        })?;
        let row = (rows.slot()?, rows.mesh()?);
        let column = match &self.columns {
            Some(columns) => Some((columns.slot()?, columns.mesh()?)),
            None => None,
        };
        Ok(Resolved { kind, row, column })
    }

    /// Validates and evaluates the request.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an unknown kind or parameter, a missing row
    /// axis, or an axis whose mesh cannot be generated.
    pub fn run(&self, engine: &SweepEngine) -> PricingResult<SweepOutput> {
        let Resolved { kind, row, column } = self.resolve()?;
        let (row_slot, row_mesh) = row;
        let rows = SweepAxis::new(&row_mesh, row_slot);

        let output = match column {
            None => {
                let values = engine.sweep_kind_1d(kind, rows, &self.base);
                SweepOutput::Vector {
                    kind,
                    slot: row_slot,
                    mesh: row_mesh,
                    values,
                }
            }
            Some((column_slot, column_mesh)) => {
                let cols = SweepAxis::new(&column_mesh, column_slot);
                let matrix = engine.sweep_kind_2d(kind, rows, cols, &self.base);
                SweepOutput::Matrix {
                    kind,
                    row_slot,
                    row_mesh,
                    column_slot,
                    column_mesh,
                    matrix,
                }
            }
        };
        Ok(output)
    }
}

struct Resolved {
    kind: ValuationKind,
    row: (ParameterSlot, Mesh),
    column: Option<(ParameterSlot, Mesh)>,
}
