/*
    cr3bp-frames, Earth-Moon CR3BP reference frame conversions
    Copyright (C) 2025 cr3bp-frames contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Velocity transforms between the rotating and perifocal inertial axes,
//! consistent with the position DCM and its time derivative (transport
//! theorem), specialized to rotation about the third axis at unit canonical
//! rate so that `ω × r = (-r_y, r_x, 0)`.
//!
//! `theta` must be the same instantaneous phase angle used by the paired
//! position transform ([`crate::RotatingFrame::rotation_angle`] at the same
//! epoch); mixing epochs between position and velocity calls produces
//! silently inconsistent states.

use snafu::ensure;

use crate::errors::LengthMismatchSnafu;
use crate::linalg::Vector3;
use crate::utils::r3;
use crate::FrameError;

/// Convert a rotating-frame velocity to the perifocal inertial axes.
pub fn rotating_to_inertial_velocity(
    r_rot: Vector3<f64>,
    v_rot: Vector3<f64>,
    theta: f64,
) -> Vector3<f64> {
    let at = r3(theta).transpose();
    let transport = Vector3::new(-r_rot.y, r_rot.x, 0.0);
    at * v_rot + at * transport
}

/// Batched [`rotating_to_inertial_velocity`]: every sample shares the same
/// phase angle. Errors when the slices differ in length.
pub fn rotating_to_inertial_velocity_many(
    r_rot: &[Vector3<f64>],
    v_rot: &[Vector3<f64>],
    theta: f64,
) -> Result<Vec<Vector3<f64>>, FrameError> {
    ensure!(
        r_rot.len() == v_rot.len(),
        LengthMismatchSnafu {
            left: r_rot.len(),
            right: v_rot.len()
        }
    );
    Ok(r_rot
        .iter()
        .zip(v_rot)
        .map(|(r, v)| rotating_to_inertial_velocity(*r, *v, theta))
        .collect())
}

/// Convert a perifocal inertial velocity to the rotating axes.
pub fn inertial_to_rotating_velocity(
    r_rot: Vector3<f64>,
    v_inertial: Vector3<f64>,
    theta: f64,
) -> Vector3<f64> {
    r3(theta) * v_inertial + Vector3::new(r_rot.y, -r_rot.x, 0.0)
}

/// Batched [`inertial_to_rotating_velocity`] with a per-sample phase angle.
/// All three slices must match in length.
pub fn inertial_to_rotating_velocity_many(
    r_rot: &[Vector3<f64>],
    v_inertial: &[Vector3<f64>],
    thetas: &[f64],
) -> Result<Vec<Vector3<f64>>, FrameError> {
    ensure!(
        r_rot.len() == v_inertial.len(),
        LengthMismatchSnafu {
            left: r_rot.len(),
            right: v_inertial.len()
        }
    );
    ensure!(
        r_rot.len() == thetas.len(),
        LengthMismatchSnafu {
            left: r_rot.len(),
            right: thetas.len()
        }
    );
    Ok(r_rot
        .iter()
        .zip(v_inertial)
        .zip(thetas)
        .map(|((r, v), th)| inertial_to_rotating_velocity(*r, *v, *th))
        .collect())
}
