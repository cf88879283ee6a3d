//! Property tests for the dense solver and the line intersector
//!
//! Random systems are generated from a fixed seed so failures reproduce.

use approx::assert_relative_eq;
use math_geom_solvers::{
    LuConfig, LuDecomposition, PivotPolicy, Point2D, Segment2D, SolverError, line_intersection,
    lu_solve, solve_in_place,
};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random diagonally dominant matrix (well conditioned)
fn well_conditioned(rng: &mut StdRng, n: usize) -> Array2<f64> {
    let mut a = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
    for i in 0..n {
        a[[i, i]] += n as f64 * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    }
    a
}

fn random_vector(rng: &mut StdRng, n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |_| rng.random_range(-10.0..10.0))
}

/// Determinant by cofactor expansion along the first row
fn cofactor_determinant(a: &Array2<f64>) -> f64 {
    let n = a.nrows();
    if n == 1 {
        return a[[0, 0]];
    }
    let mut det = 0.0;
    for col in 0..n {
        let minor = Array2::from_shape_fn((n - 1, n - 1), |(i, j)| {
            let src_col = if j < col { j } else { j + 1 };
            a[[i + 1, src_col]]
        });
        let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * a[[0, col]] * cofactor_determinant(&minor);
    }
    det
}

#[test]
fn test_random_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 1..=12 {
        for _ in 0..10 {
            let a = well_conditioned(&mut rng, n);
            let x = random_vector(&mut rng, n);
            let b = a.dot(&x);

            let solved = lu_solve(&a, &b).expect("well-conditioned system must solve");
            for i in 0..n {
                assert_relative_eq!(solved[i], x[i], epsilon = 1e-9 * n as f64);
            }
        }
    }
}

#[test]
fn test_random_round_trip_strict() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = LuConfig::strict(1e-12);
    for n in [2, 4, 8, 16] {
        let a = well_conditioned(&mut rng, n);
        let x = random_vector(&mut rng, n);
        let b = a.dot(&x);

        let lu = LuDecomposition::with_config(a, &config).expect("no small pivots");
        let solved = lu.solve(&b).unwrap();
        for i in 0..n {
            assert_relative_eq!(solved[i], x[i], epsilon = 1e-9 * n as f64);
        }
    }
}

#[test]
fn test_identity_system_returns_rhs() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 1..=10 {
        let b = random_vector(&mut rng, n);
        let mut id = Array2::<f64>::eye(n);
        let x = solve_in_place(&mut id, &b).unwrap();
        assert_eq!(x, b);
    }
}

#[test]
fn test_zero_row_always_singular() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 1..=8 {
        let zero_row = rng.random_range(0..n);
        let mut a = well_conditioned(&mut rng, n);
        a.row_mut(zero_row).fill(0.0);
        let b = random_vector(&mut rng, n);

        let err = lu_solve(&a, &b).unwrap_err();
        assert_eq!(err, SolverError::SingularMatrix { row: zero_row });

        let err = LuDecomposition::with_config(a, &LuConfig::strict(1e-12)).unwrap_err();
        assert!(err.is_singular());
    }
}

#[test]
fn test_determinant_matches_cofactor_expansion() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in 1..=5 {
        for _ in 0..20 {
            // not diagonally dominant, so pivoting actually exchanges rows
            let a = Array2::from_shape_fn((n, n), |_| rng.random_range(-5.0..5.0));
            let expected = cofactor_determinant(&a);

            let lu = LuDecomposition::new(a).unwrap();
            assert_relative_eq!(
                lu.determinant(),
                expected,
                epsilon = 1e-9,
                max_relative = 1e-9
            );

            let swaps = lu.factors().swap_count();
            let parity = if swaps % 2 == 0 { 1.0 } else { -1.0 };
            assert_eq!(lu.parity(), parity);
        }
    }
}

#[test]
fn test_permutation_entries_are_valid_rows() {
    let mut rng = StdRng::seed_from_u64(99);
    let n = 9;
    let a = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
    let lu = LuDecomposition::new(a).unwrap();
    assert_eq!(lu.permutation().len(), n);
    for (j, &p) in lu.permutation().iter().enumerate() {
        assert!(p >= j && p < n, "step {j} pivoted on row {p}");
    }
}

#[test]
fn test_single_precision_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 6;
    let a64 = well_conditioned(&mut rng, n);
    let x64 = random_vector(&mut rng, n);
    let a = a64.mapv(|v| v as f32);
    let x = x64.mapv(|v| v as f32);
    let b = a.dot(&x);

    let solved = lu_solve(&a, &b).unwrap();
    for i in 0..n {
        assert_relative_eq!(solved[i], x[i], epsilon = 1e-3);
    }
}

#[test]
fn test_config_json_round_trip() {
    let config = LuConfig::strict(1e-9);
    let json = serde_json::to_string(&config).unwrap();
    let back: LuConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let default: LuConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(default.pivot_policy, PivotPolicy::SubstituteEpsilon);

    let strict: LuConfig =
        serde_json::from_str(r#"{"pivot_policy": {"mode": "strict"}}"#).unwrap();
    assert_eq!(
        strict.pivot_policy,
        PivotPolicy::Strict { tolerance: 1e-12 }
    );
}

#[test]
fn test_geometry_scenarios() {
    let p = Point2D::new;

    assert_eq!(
        line_intersection(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), false),
        None
    );
    assert_eq!(
        line_intersection(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0), true),
        Some(p(1.0, 1.0))
    );

    let a = Segment2D::new(p(0.0, 0.0), p(1.0, 0.0));
    let b = Segment2D::new(p(5.0, -1.0), p(5.0, 1.0));
    assert_eq!(a.intersect(&b, false), Some(p(5.0, 0.0)));
    assert_eq!(a.intersect(&b, true), None);
}

#[test]
fn test_random_crossing_segments() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let center = Point2D::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
        let angle_a: f64 = rng.random_range(0.0..std::f64::consts::PI);
        let angle_b = angle_a + rng.random_range(0.3..2.8);
        let dir_a = Point2D::new(angle_a.cos(), angle_a.sin());
        let dir_b = Point2D::new(angle_b.cos(), angle_b.sin());

        let hit = line_intersection(
            center - dir_a,
            center + dir_a,
            center - dir_b * 2.0,
            center + dir_b * 2.0,
            true,
        )
        .expect("segments cross at their midpoints");
        assert_relative_eq!(hit.x, center.x, epsilon = 1e-9);
        assert_relative_eq!(hit.y, center.y, epsilon = 1e-9);
    }
}
