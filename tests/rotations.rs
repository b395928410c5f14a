extern crate cr3bp_frames;

use approx::assert_relative_eq;
use cr3bp_frames::linalg::{Matrix3, Vector3};
use cr3bp_frames::rotations::EulerRotation;
use cr3bp_frames::utils::{r1, r2, r3};
use rstest::rstest;
use std::f64::consts::{FRAC_PI_2, PI};

#[rstest]
#[case(0.0)]
#[case(0.1)]
#[case(FRAC_PI_2)]
#[case(PI)]
#[case(-2.5)]
#[case(123.456)]
fn elementary_rotations_orthonormal(#[case] theta: f64) {
    for rot in [r1, r2, r3] {
        let m = rot(theta);
        assert_relative_eq!(m.transpose() * m, Matrix3::identity(), epsilon = 1e-13);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-13);
        // Transposition is rotation in the opposite direction.
        assert_relative_eq!(m.transpose(), rot(-theta), epsilon = 1e-13);
    }
}

#[rstest]
#[case(0.7)]
#[case(-1.9)]
#[case(PI)]
fn r3_round_trip(#[case] theta: f64) {
    assert_relative_eq!(r3(theta) * r3(-theta), Matrix3::identity(), epsilon = 1e-14);
}

#[test]
fn r3_is_a_frame_rotation() {
    // A vector along +x, expressed in axes rotated by +theta about z, picks
    // up a NEGATIVE y component.
    let theta = 0.3;
    let x_hat = Vector3::new(1.0, 0.0, 0.0);
    assert_relative_eq!(
        r3(theta) * x_hat,
        Vector3::new(theta.cos(), -theta.sin(), 0.0),
        epsilon = 1e-15
    );
}

#[test]
fn r3_half_turn() {
    assert_relative_eq!(
        r3(PI),
        Matrix3::new(-1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        epsilon = 1e-15
    );
}

#[test]
fn euler_rotation_matches_free_functions() {
    assert_relative_eq!(EulerRotation::R1(0.2).dcm(), r1(0.2), epsilon = 1e-15);
    assert_relative_eq!(EulerRotation::R2(-0.4).dcm(), r2(-0.4), epsilon = 1e-15);
    assert_relative_eq!(EulerRotation::R3(1.1).dcm(), r3(1.1), epsilon = 1e-15);
}
