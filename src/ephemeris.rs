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

use anise::prelude::{Almanac, Frame, Orbit};
use snafu::ResultExt;

use crate::errors::EphemerisQuerySnafu;
use crate::linalg::Vector3;
use crate::time::Epoch;
use crate::FrameError;

/// NAIF/DE index of the solar system barycenter.
pub const SSB: i32 = 0;
/// NAIF/DE index of the Earth-Moon barycenter.
pub const EARTH_MOON_BARYCENTER: i32 = 3;

/// Minimal ephemeris contract required by the rotating-frame geometry:
/// the position of `target` relative to `observer` at `epoch`, in km, on
/// barycentric inertial (J2000/ICRS-style) axes.
///
/// Body indices follow the JPL DE numbering ([`SSB`], [`EARTH_MOON_BARYCENTER`], ...).
pub trait EphemerisKernel: Send + Sync {
    fn position_km(&self, observer: i32, target: i32, epoch: Epoch) -> Result<Vector3<f64>, FrameError>;
}

/// An [`EphemerisKernel`] backed by an ANISE [`Almanac`] loaded with an SPK.
#[derive(Clone)]
pub struct AlmanacKernel {
    almanac: Arc<Almanac>,
}

impl AlmanacKernel {
    pub fn new(almanac: Arc<Almanac>) -> Self {
        Self { almanac }
    }
}

impl EphemerisKernel for AlmanacKernel {
    fn position_km(&self, observer: i32, target: i32, epoch: Epoch) -> Result<Vector3<f64>, FrameError> {
        // Zero state at the target's origin, expressed in the observer frame.
        let origin = Orbit::new(
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            epoch,
            Frame::from_ephem_j2000(target),
        );
        let state = self
            .almanac
            .transform_to(origin, Frame::from_ephem_j2000(observer), None)
            .context(EphemerisQuerySnafu)?;
        Ok(Vector3::new(
            state.radius_km.x,
            state.radius_km.y,
            state.radius_km.z,
        ))
    }
}
