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

/*! # cr3bp-frames

Conversions between the reference frames used in Earth-Moon circular
restricted three-body problem (CR3BP) analysis: the Earth-centered inertial
frame, the CR3BP perifocal frame tied to the Earth-Moon line, and the
nondimensional rotating (synodic) frame used for propagation in canonical
units.

Every operation is a pure function of its inputs, applied at the epochs the
caller supplies. Ephemeris lookup and high-precision celestial frame
transforms are collaborators behind the [`EphemerisKernel`](ephemeris::EphemerisKernel)
and [`CelestialBridge`](celestial::CelestialBridge) traits; ANISE-backed
implementations are provided.
*/

/// Elementary frame rotations and the axis-as-data `EulerRotation` form.
pub mod rotations;

/// Canonical (nondimensional) unit scaling for a two-primary system.
pub mod units;

/// Ephemeris kernel collaborator: body-relative positions at an epoch.
pub mod ephemeris;

/// Celestial frame bridge collaborator: heliocentric/geocentric transforms.
pub mod celestial;

/// Rotating frame geometry: phase angle, DCMs, and position transforms.
pub mod rotating;

/// Transport-theorem velocity transforms between rotating and inertial axes.
pub mod velocity;

/// Utility functions shared by the frame modules.
pub mod utils;

/// Configuration loading from YAML files.
pub mod io;

mod errors;
pub use self::errors::FrameError;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use nalgebra::base::*;
}

pub use self::celestial::{AlmanacBridge, CelestialBridge};
pub use self::ephemeris::{AlmanacKernel, EphemerisKernel};
pub use self::rotating::RotatingFrame;
pub use self::units::{CanonicalUnits, EARTH_MOON};
