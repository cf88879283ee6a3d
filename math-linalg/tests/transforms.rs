//! Integration tests for the value types through the public API

use approx::assert_relative_eq;
use math_geom_linalg::{
    Color4, Fraction, LinalgError, Matrix4, Vector2d, Vector3d, Vector3f, Vector4f,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_transform(rng: &mut StdRng) -> Matrix4 {
    let axis = Vector3f::new(
        rng.random_range(-1.0..1.0),
        rng.random_range(-1.0..1.0),
        rng.random_range(0.1..1.0),
    );
    Matrix4::translation(
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
    ) * Matrix4::rotation(axis, rng.random_range(-3.0..3.0))
        * Matrix4::scaling_xyz(
            rng.random_range(0.5..2.0),
            rng.random_range(0.5..2.0),
            rng.random_range(0.5..2.0),
        )
}

#[test]
fn test_inverse_undoes_random_transforms() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let m = random_transform(&mut rng);
        let p = Vector4f::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            1.0,
        );
        let back = m.inverse() * (m * p);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-3);
        assert_relative_eq!(back.w, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_solve_agrees_with_inverse() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let m = random_transform(&mut rng);
        let b = Vector4f::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            1.0,
        );
        let via_lu = m.solve(b).expect("transform is invertible");
        let via_inverse = m.inverse() * b;
        assert_relative_eq!(via_lu.x, via_inverse.x, epsilon = 1e-3);
        assert_relative_eq!(via_lu.y, via_inverse.y, epsilon = 1e-3);
        assert_relative_eq!(via_lu.z, via_inverse.z, epsilon = 1e-3);
        assert_relative_eq!(via_lu.w, via_inverse.w, epsilon = 1e-3);
    }
}

#[test]
fn test_singular_solve_reports_solver_error() {
    let flat = Matrix4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    match flat.solve(Vector4f::new(1.0, 0.0, 0.0, 1.0)) {
        Err(LinalgError::Solver(e)) => assert!(e.is_singular()),
        other => panic!("expected a solver error, got {other:?}"),
    }
}

#[test]
fn test_normals_stay_perpendicular_under_nonuniform_scale() {
    let m = Matrix4::scaling_xyz(3.0, 1.0, 1.0) * Matrix4::rotation_z_deg(30.0);
    let tangent = Vector4f::new(1.0, -1.0, 0.0, 0.0);
    let normal = Vector4f::new(1.0, 1.0, 0.0, 0.0);
    assert_relative_eq!(tangent.dot(&normal), 0.0);

    let t = m * tangent;
    let n = m.normal_matrix() * normal;
    assert_relative_eq!(t.dot(&n), 0.0, epsilon = 1e-5);
}

#[test]
fn test_perspective_maps_view_frustum_to_unit_depth() {
    let p = Matrix4::perspective_fov_rh(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);
    // with a 90 degree field of view the frustum edge at depth d is at d
    for depth in [1.0f32, 2.5, 10.0] {
        let edge = (p * Vector4f::new(depth, depth, -depth, 1.0)).div_w();
        assert_relative_eq!(edge.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(edge.y, 1.0, epsilon = 1e-5);
        assert!((-1e-6..=1.0 + 1e-6).contains(&edge.z));
    }
}

#[test]
fn test_vector_geometry() {
    let a = Vector3d::new(1.0, 0.0, 0.0);
    let b = Vector3d::new(0.0, 1.0, 0.0);
    let n = a.cross(&b);
    assert_relative_eq!(n.dot(&a), 0.0);
    assert_relative_eq!(n.dot(&b), 0.0);
    assert_relative_eq!(n.length(), 1.0);

    let v = Vector2d::new(6.0, 8.0);
    assert_relative_eq!((0.1 * v).length(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_value_types_json_roundtrip() {
    let m = Matrix4::rotation_y_deg(45.0) * Matrix4::translation(1.0, 2.0, 3.0);
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix4 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    let c = Color4::new(0.25, 0.5, 0.75, 1.0);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"r":0.25,"g":0.5,"b":0.75,"a":1.0}"#);
    assert_eq!(serde_json::from_str::<Color4>(&json).unwrap(), c);

    let f: Fraction = serde_json::from_str(r#"{"numerator":16.0,"denominator":9.0}"#).unwrap();
    assert_eq!(f, Fraction::new(16.0, 9.0));

    let v: Vector3d = serde_json::from_str(r#"{"x":1.0,"y":2.0,"z":3.0}"#).unwrap();
    assert_eq!(v, Vector3d::new(1.0, 2.0, 3.0));
}
