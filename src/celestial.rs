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

use std::sync::Arc;

use anise::constants::frames::{EARTH_J2000, SSB_J2000};
use anise::prelude::{Almanac, Frame, Orbit};
use log::warn;
use snafu::ResultExt;

use crate::errors::CelestialTransformSnafu;
use crate::linalg::Vector3;
use crate::time::Epoch;
use crate::FrameError;

/// Capability interface to a high-precision celestial frame provider.
///
/// `to_geocentric` maps a Cartesian position from the heliocentric/barycentric
/// inertial frame (ICRS) to the Earth-centered inertial frame (GCRS);
/// `to_heliocentric` is the opposite direction. Both directions take and
/// return kilometers and perform the translation at the provided epoch.
pub trait CelestialBridge: Send + Sync {
    fn to_geocentric(&self, pos_km: Vector3<f64>, epoch: Epoch) -> Result<Vector3<f64>, FrameError>;
    fn to_heliocentric(&self, pos_km: Vector3<f64>, epoch: Epoch) -> Result<Vector3<f64>, FrameError>;
}

/// A [`CelestialBridge`] backed by an ANISE [`Almanac`].
///
/// The barycentric J2000 axes stand in for ICRS and the Earth J2000 axes for
/// GCRS; the frame bias between them is microarcseconds, well below the
/// fidelity of CR3BP analysis. Each call logs this approximation once.
#[derive(Clone)]
pub struct AlmanacBridge {
    almanac: Arc<Almanac>,
}

impl AlmanacBridge {
    pub fn new(almanac: Arc<Almanac>) -> Self {
        Self { almanac }
    }

    fn translate(
        &self,
        pos_km: Vector3<f64>,
        epoch: Epoch,
        from: Frame,
        to: Frame,
    ) -> Result<Vector3<f64>, FrameError> {
        warn!("approximating ICRS/GCRS with the {from:x} and {to:x} J2000 axes (frame bias ignored)");
        let state = Orbit::new(pos_km.x, pos_km.y, pos_km.z, 0.0, 0.0, 0.0, epoch, from);
        let out = self
            .almanac
            .transform_to(state, to, None)
            .context(CelestialTransformSnafu)?;
        Ok(Vector3::new(out.radius_km.x, out.radius_km.y, out.radius_km.z))
    }
}

impl CelestialBridge for AlmanacBridge {
    fn to_geocentric(&self, pos_km: Vector3<f64>, epoch: Epoch) -> Result<Vector3<f64>, FrameError> {
        self.translate(pos_km, epoch, SSB_J2000, EARTH_J2000)
    }

    fn to_heliocentric(&self, pos_km: Vector3<f64>, epoch: Epoch) -> Result<Vector3<f64>, FrameError> {
        self.translate(pos_km, epoch, EARTH_J2000, SSB_J2000)
    }
}
