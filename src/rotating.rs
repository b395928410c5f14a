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

use snafu::ensure;

use crate::celestial::CelestialBridge;
use crate::ephemeris::{EphemerisKernel, EARTH_MOON_BARYCENTER, SSB};
use crate::errors::DegenerateGeometrySnafu;
use crate::linalg::{Matrix3, Vector3};
use crate::time::{Epoch, Unit};
use crate::units::{CanonicalUnits, EARTH_MOON};
use crate::utils::{r3, tilde_matrix};
use crate::FrameError;

/// Numerical floor on `sin φ` of the Rodrigues alignment, below which the
/// rotation axis is considered undefined.
const PARALLEL_TOL: f64 = 1e-12;

/// The synodic rotating frame of a two-primary system, phased against a
/// reference equinox epoch.
///
/// All methods are pure functions of the provided epoch; the struct only
/// carries the canonical unit scales and the time origin of the phase angle.
#[derive(Clone, Copy, Debug)]
pub struct RotatingFrame {
    pub units: CanonicalUnits,
    /// Reference epoch at which the rotating and perifocal inertial axes
    /// coincide. A single epoch: callers holding a list of candidate
    /// reference times must pick one.
    pub equinox: Epoch,
}

impl RotatingFrame {
    pub fn new(units: CanonicalUnits, equinox: Epoch) -> Self {
        Self { units, equinox }
    }

    /// The Earth-Moon rotating frame with the standard canonical units.
    pub fn earth_moon(equinox: Epoch) -> Self {
        Self::new(EARTH_MOON, equinox)
    }

    /// Instantaneous phase angle of the rotating frame past the equinox, in
    /// radians (one synodic period past the equinox maps to `2π`).
    pub fn rotation_angle(&self, epoch: Epoch) -> f64 {
        let dt_days = (epoch - self.equinox).to_unit(Unit::Day);
        self.units.to_canonical_time(dt_days)
    }

    /// DCM from the perifocal inertial axes to the rotating axes at `epoch`.
    pub fn dcm_inertial_to_rotating(&self, epoch: Epoch) -> Matrix3<f64> {
        r3(self.rotation_angle(epoch))
    }

    /// DCM from the rotating axes to the perifocal inertial axes at `epoch`.
    pub fn dcm_rotating_to_inertial(&self, epoch: Epoch) -> Matrix3<f64> {
        self.dcm_inertial_to_rotating(epoch).transpose()
    }

    /// DCM aligning the perifocal frame with the Earth-centered inertial
    /// frame at `epoch`, accounting for the Earth not sitting at the
    /// rotating frame's origin (the Earth-Moon barycenter).
    ///
    /// The Earth-to-barycenter direction is built twice: once from the
    /// ephemeris (via `kernel` and `bridge`, nondimensionalized), and once
    /// from the rotating-frame definition (the barycenter lies at canonical
    /// distance `mu_star` down the negative x axis, spun to the inertial
    /// axes by the current phase angle). The Rodrigues rotation mapping the
    /// second onto the first is the sought DCM.
    ///
    /// Errors with [`FrameError::DegenerateGeometry`] when the two
    /// constructions are parallel, which leaves the rotation axis undefined.
    pub fn dcm_body_to_geocentric(
        &self,
        epoch: Epoch,
        kernel: &dyn EphemerisKernel,
        bridge: &dyn CelestialBridge,
    ) -> Result<Matrix3<f64>, FrameError> {
        let bary_icrs_km = kernel.position_km(SSB, EARTH_MOON_BARYCENTER, epoch)?;
        let bary_gcrs_km = bridge.to_geocentric(bary_icrs_km, epoch)?;
        let r_g = -Vector3::new(
            self.units.to_canonical_distance(bary_gcrs_km.x),
            self.units.to_canonical_distance(bary_gcrs_km.y),
            self.units.to_canonical_distance(bary_gcrs_km.z),
        );
        let mu_star = r_g.norm();

        // Same vector from the rotating-frame construction, projected onto
        // the perifocal inertial axes.
        let r_r = mu_star * Vector3::new(-1.0, 0.0, 0.0);
        let r_b = self.dcm_inertial_to_rotating(epoch).transpose() * r_r;

        // Rodrigues rotation of r_b onto r_g.
        let n_vec = r_b.cross(&r_g);
        let n_norm = n_vec.norm();
        let sin_phi = n_norm / mu_star.powi(2);
        ensure!(
            sin_phi > PARALLEL_TOL,
            DegenerateGeometrySnafu { norm: n_norm }
        );
        let n_hat = n_vec / n_norm;
        let cos_phi = r_b.dot(&r_g) / mu_star.powi(2);
        let skew = tilde_matrix(&n_hat);

        Ok(Matrix3::identity() + skew * sin_phi + skew * skew * (1.0 - cos_phi))
    }

    /// Express an inertial-frame position on the rotating axes.
    pub fn inertial_to_rotating(&self, pos: Vector3<f64>, epoch: Epoch) -> Vector3<f64> {
        self.dcm_inertial_to_rotating(epoch) * pos
    }

    /// Express a rotating-frame position on the perifocal inertial axes.
    pub fn rotating_to_inertial(&self, pos: Vector3<f64>, epoch: Epoch) -> Vector3<f64> {
        self.dcm_inertial_to_rotating(epoch).transpose() * pos
    }

    /// Express a position on the Earth-centered inertial axes, from the
    /// body/perifocal axes.
    pub fn rotating_to_geocentric(
        &self,
        pos: Vector3<f64>,
        epoch: Epoch,
        kernel: &dyn EphemerisKernel,
        bridge: &dyn CelestialBridge,
    ) -> Result<Vector3<f64>, FrameError> {
        Ok(self.dcm_body_to_geocentric(epoch, kernel, bridge)?.transpose() * pos)
    }

    /// Express an Earth-centered inertial position on the body/perifocal
    /// axes. Inverse of [`Self::rotating_to_geocentric`].
    pub fn geocentric_to_rotating(
        &self,
        pos: Vector3<f64>,
        epoch: Epoch,
        kernel: &dyn EphemerisKernel,
        bridge: &dyn CelestialBridge,
    ) -> Result<Vector3<f64>, FrameError> {
        Ok(self.dcm_body_to_geocentric(epoch, kernel, bridge)? * pos)
    }
}
