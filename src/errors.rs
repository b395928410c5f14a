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

use anise::errors::AlmanacError;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum FrameError {
    /// Batched inputs must be sample-for-sample aligned.
    #[snafu(display("batch inputs must have matching lengths ({left} != {right})"))]
    LengthMismatch { left: usize, right: usize },
    /// The Rodrigues alignment is undefined when the rotating-frame and
    /// ephemeris barycenter directions are parallel.
    #[snafu(display(
        "degenerate geometry: barycenter directions are parallel (cross-product norm {norm:.3e})"
    ))]
    DegenerateGeometry { norm: f64 },
    /// Ephemeris lookup failed in the Almanac.
    #[snafu(display("ephemeris query failed: {source}"))]
    EphemerisQuery { source: AlmanacError },
    /// Celestial frame transform failed in the Almanac.
    #[snafu(display("celestial frame transform failed: {source}"))]
    CelestialTransform { source: AlmanacError },
}
