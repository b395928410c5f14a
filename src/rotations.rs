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

use crate::linalg::Matrix3;
use crate::utils::{r1, r2, r3};

/// Defines an Euler rotation, angle must be in radians.
///
/// The axis is part of the variant, so an out-of-range axis value cannot be
/// constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EulerRotation {
    R1(f64),
    R2(f64),
    R3(f64),
}

impl EulerRotation {
    pub fn r1_from_degrees(angle_deg: f64) -> Self {
        Self::R1(angle_deg.to_radians())
    }
    pub fn r2_from_degrees(angle_deg: f64) -> Self {
        Self::R2(angle_deg.to_radians())
    }
    pub fn r3_from_degrees(angle_deg: f64) -> Self {
        Self::R3(angle_deg.to_radians())
    }

    /// Get the DCM from this Euler rotation
    pub fn dcm(&self) -> Matrix3<f64> {
        match *self {
            Self::R1(angle) => r1(angle),
            Self::R2(angle) => r2(angle),
            Self::R3(angle) => r3(angle),
        }
    }

    /// The same rotation in the opposite direction, i.e. `dcm().transpose()`.
    pub fn inverse(&self) -> Self {
        match *self {
            Self::R1(angle) => Self::R1(-angle),
            Self::R2(angle) => Self::R2(-angle),
            Self::R3(angle) => Self::R3(-angle),
        }
    }
}

#[test]
fn euler_rotation_transpose_is_negative_angle() {
    use approx::assert_relative_eq;
    for rot in [
        EulerRotation::R1(0.62),
        EulerRotation::R2(-1.3),
        EulerRotation::R3(2.95),
    ] {
        assert_relative_eq!(rot.dcm().transpose(), rot.inverse().dcm(), epsilon = 1e-15);
        assert_relative_eq!(rot.dcm() * rot.inverse().dcm(), Matrix3::identity(), epsilon = 1e-15);
    }
}

#[test]
fn euler_rotation_from_degrees() {
    use approx::assert_relative_eq;
    assert_relative_eq!(
        EulerRotation::r3_from_degrees(180.0).dcm(),
        crate::utils::r3(std::f64::consts::PI),
        epsilon = 1e-15
    );
    assert_eq!(
        EulerRotation::r1_from_degrees(90.0),
        EulerRotation::R1(std::f64::consts::FRAC_PI_2)
    );
    assert_eq!(
        EulerRotation::r2_from_degrees(-90.0),
        EulerRotation::R2(-std::f64::consts::FRAC_PI_2)
    );
}
