extern crate cr3bp_frames;

use approx::assert_relative_eq;
use cr3bp_frames::linalg::Vector3;
use cr3bp_frames::utils::r3;
use cr3bp_frames::velocity::{
    inertial_to_rotating_velocity, inertial_to_rotating_velocity_many,
    rotating_to_inertial_velocity, rotating_to_inertial_velocity_many,
};
use cr3bp_frames::FrameError;

#[test]
fn co_rotating_point_is_pure_transport() {
    // A point at rest in the rotating frame only carries the frame rotation.
    let theta = 0.83;
    let r_rot = Vector3::new(0.6, -0.3, 0.0);
    let v_inertial = rotating_to_inertial_velocity(r_rot, Vector3::zeros(), theta);
    let expected = r3(theta).transpose() * Vector3::new(-r_rot.y, r_rot.x, 0.0);
    assert_relative_eq!(v_inertial, expected, epsilon = 1e-14);
}

#[test]
fn velocity_round_trip() {
    let theta = -1.42;
    let r_rot = Vector3::new(0.9, 0.2, 0.05);
    let v_rot = Vector3::new(-0.1, 0.4, 0.02);
    let v_inertial = rotating_to_inertial_velocity(r_rot, v_rot, theta);
    let back = inertial_to_rotating_velocity(r_rot, v_inertial, theta);
    assert_relative_eq!(back, v_rot, epsilon = 1e-13);
}

#[test]
fn batch_equals_scalar() {
    let thetas = [0.0, 0.4, 2.9, -0.7];
    let r_rot: Vec<Vector3<f64>> = (0..4)
        .map(|i| Vector3::new(1.0 + f64::from(i), -0.2 * f64::from(i), 0.01))
        .collect();
    let v_rot: Vec<Vector3<f64>> = (0..4)
        .map(|i| Vector3::new(0.3, 0.1 * f64::from(i), -0.05))
        .collect();

    // Shared phase angle, rotating to inertial.
    let batch = rotating_to_inertial_velocity_many(&r_rot, &v_rot, 0.4).unwrap();
    for (i, v) in batch.iter().enumerate() {
        assert_relative_eq!(
            *v,
            rotating_to_inertial_velocity(r_rot[i], v_rot[i], 0.4),
            epsilon = 1e-15
        );
    }

    // Per-sample phase angle, inertial to rotating.
    let batch = inertial_to_rotating_velocity_many(&r_rot, &v_rot, &thetas).unwrap();
    for (i, v) in batch.iter().enumerate() {
        assert_relative_eq!(
            *v,
            inertial_to_rotating_velocity(r_rot[i], v_rot[i], thetas[i]),
            epsilon = 1e-15
        );
    }
}

#[test]
fn mismatched_batches_are_rejected() {
    let three = vec![Vector3::zeros(); 3];
    let two = vec![Vector3::zeros(); 2];

    let err = rotating_to_inertial_velocity_many(&three, &two, 0.0).unwrap_err();
    assert!(
        matches!(err, FrameError::LengthMismatch { left: 3, right: 2 }),
        "{err}"
    );

    let err = inertial_to_rotating_velocity_many(&three, &three, &[0.0; 4]).unwrap_err();
    assert!(
        matches!(err, FrameError::LengthMismatch { left: 3, right: 4 }),
        "{err}"
    );
}
