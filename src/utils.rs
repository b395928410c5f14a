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

use crate::linalg::{Matrix3, Vector3};

/// Elementary frame rotation about the first axis.
///
/// All of `r1`, `r2`, `r3` rotate the coordinate frame, not the vector:
/// `r3(theta) * v` expresses `v` in axes rotated by `theta` about z.
pub fn r1(angle_rad: f64) -> Matrix3<f64> {
    let (s, c) = angle_rad.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Elementary frame rotation about the second axis.
pub fn r2(angle_rad: f64) -> Matrix3<f64> {
    let (s, c) = angle_rad.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Elementary frame rotation about the third axis.
pub fn r3(angle_rad: f64) -> Matrix3<f64> {
    let (s, c) = angle_rad.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Returns the tilde matrix (skew-symmetric cross-product matrix) of the
/// provided Vector3, such that `tilde_matrix(a) * b == a.cross(&b)`.
pub fn tilde_matrix(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tilde_matches_cross_product() {
        let a = Vector3::new(1.0, -2.0, 3.5);
        let b = Vector3::new(-0.4, 0.2, 7.1);
        assert_relative_eq!(tilde_matrix(&a) * b, a.cross(&b), epsilon = 1e-15);
    }

    #[test]
    fn elementary_rotations_are_orthonormal() {
        for rot in [r1, r2, r3] {
            for i in 0..8 {
                let th = f64::from(i) * std::f64::consts::FRAC_PI_4;
                let m = rot(th);
                assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-14);
                assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-14);
            }
        }
    }
}
