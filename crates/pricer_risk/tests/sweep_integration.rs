//! Integration tests for parameter sweeps.
//!
//! These tests exercise the full path from meshes and base parameters
//! through `ValuationKind` dispatch to result vectors and matrices, and
//! check the sweeps against direct formula calls and textbook values.

use approx::assert_relative_eq;
use pricer_core::math::Mesh;
use pricer_core::types::{BaseParameters, ParameterSlot};
use pricer_models::analytical::{call_price, put_price};
use pricer_models::reference::textbook_batches;
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::sweep::{
    sweep_1d, sweep_2d, AxisSpec, SweepAxis, SweepEngine, SweepOutput, SweepRequest,
    ValuationKind,
};

// ============================================================================
// Textbook Batches via Single-Point Sweeps
// ============================================================================

/// A sweep over a single-point mesh equals a direct scalar call.
#[test]
fn test_single_point_sweeps_reproduce_batches() {
    let engine = SweepEngine::serial();
    for batch in textbook_batches() {
        let base = batch.parameters();
        let spot = Mesh::point(batch.spot);
        let axis = SweepAxis::new(&spot, ParameterSlot::Spot);

        let call = engine.sweep_kind_1d(ValuationKind::Price, axis, &base);
        let put = engine.sweep_kind_1d(ValuationKind::PutPrice, axis, &base);

        let [s, k, t, r, v, b] = base.to_array();
        assert_eq!(call, vec![call_price(s, k, t, r, v, b)]);
        assert_eq!(put, vec![put_price(s, k, t, r, v, b)]);
        assert!((call[0] - batch.call).abs() < 1e-3, "call {} vs {}", call[0], batch.call);
        assert!((put[0] - batch.put).abs() < 1e-3, "put {} vs {}", put[0], batch.put);
    }
}

// ============================================================================
// Driver Scenarios
// ============================================================================

/// Call prices for S in [10, 50], K = 30, T = 1, r = b = 0.05, σ = 0.2.
#[test]
fn test_spot_mesh_call_prices() {
    let base = BaseParameters::new(0.0, 30.0, 1.0, 0.05, 0.2, 0.05);
    let spots = Mesh::generate(10.0, 50.0, 1.0).unwrap();
    assert_eq!(spots.len(), 41);
    assert_eq!(spots[0], 10.0);
    assert_eq!(spots[40], 50.0);

    let prices = sweep_1d(&spots, ParameterSlot::Spot, &ValuationKind::Price, &base);
    assert_eq!(prices.len(), 41);
    assert!(prices[0] < 1e-6);
    assert!(prices[40] > 50.0 - 30.0);
}

/// Expiry × volatility grid with the tolerant mesh gives 20 × 9 cells.
#[test]
fn test_expiry_volatility_grid_shape() {
    let request = SweepRequest::matrix(
        "price",
        BaseParameters::new(20.0, 30.0, 0.0, 0.05, 0.0, 0.05),
        AxisSpec::new("T", 0.1, 2.0, 0.1),
        AxisSpec::new("sig", 0.1, 0.5, 0.05),
    );
    match request.run(&SweepEngine::default()).unwrap() {
        SweepOutput::Matrix { matrix, row_mesh, column_mesh, .. } => {
            assert_eq!(row_mesh.len(), 20);
            assert_eq!(*row_mesh.last().unwrap(), 2.0);
            assert_eq!(column_mesh.len(), 9);
            assert_eq!((matrix.rows(), matrix.cols()), (20, 9));
            // Longer expiry and higher volatility both raise the call price
            assert!(matrix[(19, 8)] > matrix[(0, 8)]);
            assert!(matrix[(19, 8)] > matrix[(19, 0)]);
        }
        other => panic!("expected matrix output, got {:?}", other),
    }
}

/// American call over S × K, with expiry swept as an ignored parameter.
#[test]
fn test_american_matrix() {
    let base = BaseParameters::new(0.0, 0.0, 0.0, 0.1, 0.2, 0.02);
    let spots = Mesh::generate(80.0, 120.0, 5.0).unwrap();
    let strikes = Mesh::generate(90.0, 110.0, 5.0).unwrap();
    let matrix = SweepEngine::serial().sweep_kind_2d(
        ValuationKind::AmericanCall,
        SweepAxis::new(&spots, ParameterSlot::Spot),
        SweepAxis::new(&strikes, ParameterSlot::Strike),
        &base,
    );
    assert_eq!((matrix.rows(), matrix.cols()), (9, 5));
    for row in matrix.iter_rows() {
        for pair in row.windows(2) {
            assert!(pair[1] < pair[0], "call must fall as strike rises");
        }
    }
}

// ============================================================================
// Structural Properties
// ============================================================================

/// A 2-D sweep with a one-point column mesh equals the 1-D sweep.
#[test]
fn test_one_column_matrix_matches_vector() {
    let base = BaseParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.05);
    let vols = Mesh::generate(0.1, 0.5, 0.05).unwrap();
    let strike = Mesh::point(95.0);

    let vector = sweep_1d(
        &vols,
        ParameterSlot::Volatility,
        &ValuationKind::Vega,
        &base.with(ParameterSlot::Strike, 95.0),
    );
    let matrix = sweep_2d(
        SweepAxis::new(&vols, ParameterSlot::Volatility),
        SweepAxis::new(&strike, ParameterSlot::Strike),
        &ValuationKind::Vega,
        &base,
    );
    assert_eq!(matrix.cols(), 1);
    assert_eq!(matrix.column(0).unwrap(), vector);
}

/// Each row of a matrix equals a 1-D sweep over the column axis.
#[test]
fn test_rows_match_column_sweeps() {
    let base = BaseParameters::new(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
    let spots = Mesh::generate(80.0, 120.0, 5.0).unwrap();
    let expiries = Mesh::generate(0.1, 1.0, 0.1).unwrap();
    let matrix = sweep_2d(
        SweepAxis::new(&spots, ParameterSlot::Spot),
        SweepAxis::new(&expiries, ParameterSlot::TimeToExpiry),
        &ValuationKind::Gamma,
        &base,
    );
    assert_eq!(expiries.len(), 10);
    for (i, &s) in spots.iter().enumerate() {
        let expected = sweep_1d(
            &expiries,
            ParameterSlot::TimeToExpiry,
            &ValuationKind::Gamma,
            &base.with(ParameterSlot::Spot, s),
        );
        assert_eq!(matrix.row(i).unwrap(), expected.as_slice());
    }
}

/// Large grids take the parallel path and still match the serial result.
#[test]
fn test_engine_parallel_equals_serial() {
    let base = BaseParameters::new(0.0, 0.0, 1.0, 0.05, 0.2, 0.05);
    let spots = Mesh::generate(1.0, 200.0, 0.25).unwrap();
    let strikes = Mesh::generate(50.0, 150.0, 1.0).unwrap();
    let rows = SweepAxis::new(&spots, ParameterSlot::Spot);
    let cols = SweepAxis::new(&strikes, ParameterSlot::Strike);

    let parallel = SweepEngine::new(ParallelConfig::new(32, 0).unwrap()).unwrap();
    for kind in ValuationKind::ALL {
        let p = parallel.sweep_kind_2d(kind, rows, cols, &base);
        let s = sweep_2d(rows, cols, &kind, &base);
        assert_eq!((p.rows(), p.cols()), (s.rows(), s.cols()));
        let same = p
            .as_slice()
            .iter()
            .zip(s.as_slice())
            .all(|(a, b)| a.to_bits() == b.to_bits());
        assert!(same, "{} differs between parallel and serial", kind);
    }
}

/// Same-slot axes: the column value is the one evaluated.
#[test]
fn test_same_slot_last_write_wins() {
    let base = BaseParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.05);
    let first = Mesh::generate(80.0, 90.0, 5.0).unwrap();
    let second = Mesh::generate(100.0, 120.0, 10.0).unwrap();
    let matrix = SweepEngine::serial().sweep_kind_2d(
        ValuationKind::Price,
        SweepAxis::new(&first, ParameterSlot::Spot),
        SweepAxis::new(&second, ParameterSlot::Spot),
        &base,
    );
    let expected = sweep_1d(&second, ParameterSlot::Spot, &ValuationKind::Price, &base);
    for row in matrix.iter_rows() {
        assert_eq!(row, expected.as_slice());
    }
}

/// Put-call parity holds across a swept matrix of b = r prices.
#[test]
fn test_parity_across_rate_volatility_grid() {
    let base = BaseParameters::new(40.0, 30.0, 1.0, 0.0, 0.0, 0.0);
    let rates = Mesh::generate(0.01, 0.1, 0.01).unwrap();
    let vols = Mesh::generate(0.1, 0.5, 0.05).unwrap();
    let engine = SweepEngine::serial();

    // b follows r on every row
    for &r in rates.iter() {
        let row_base = base
            .with(ParameterSlot::RiskFreeRate, r)
            .with(ParameterSlot::CostOfCarry, r);
        let calls = engine.sweep_kind_1d(
            ValuationKind::Price,
            SweepAxis::new(&vols, ParameterSlot::Volatility),
            &row_base,
        );
        let puts = engine.sweep_kind_1d(
            ValuationKind::PutPrice,
            SweepAxis::new(&vols, ParameterSlot::Volatility),
            &row_base,
        );
        for (c, p) in calls.iter().zip(&puts) {
            assert_relative_eq!(c - p, 40.0 - 30.0 * (-r).exp(), epsilon = 1e-10);
        }
    }
}
