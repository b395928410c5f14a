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

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::io::ConfigRepr;

/// Canonical unit scales of the Earth-Moon system, from JPL Horizons.
pub const EARTH_MOON: CanonicalUnits = CanonicalUnits {
    du_km: 384_400.0,
    tu_days: 27.321_582,
};

/// Canonical (nondimensional) unit scales of a two-primary system.
///
/// The distance unit DU is the primary-to-secondary separation and the time
/// unit TU is the orbital period of the secondary, so one TU of elapsed time
/// corresponds to one full revolution (`2π` radians) of the rotating frame.
/// These are physical constants of a given system, never per-call inputs;
/// alternate systems may be loaded from YAML via [`ConfigRepr`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanonicalUnits {
    /// Distance unit, in kilometers.
    pub du_km: f64,
    /// Time unit, in days.
    pub tu_days: f64,
}

impl CanonicalUnits {
    /// Nondimensionalize a distance in kilometers.
    pub fn to_canonical_distance(&self, x_km: f64) -> f64 {
        x_km / self.du_km
    }

    /// Redimensionalize a canonical distance to kilometers.
    pub fn from_canonical_distance(&self, x_du: f64) -> f64 {
        x_du * self.du_km
    }

    /// Map an elapsed time in days to the equivalent rotating-frame phase
    /// angle in radians (one TU maps to `2π`).
    pub fn to_canonical_time(&self, dt_days: f64) -> f64 {
        dt_days / self.tu_days * TAU
    }

    /// Map a rotating-frame phase angle in radians back to days.
    pub fn from_canonical_time(&self, theta_rad: f64) -> f64 {
        theta_rad / TAU * self.tu_days
    }
}

impl Default for CanonicalUnits {
    fn default() -> Self {
        EARTH_MOON
    }
}

impl ConfigRepr for CanonicalUnits {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_round_trip() {
        let units = EARTH_MOON;
        for x_km in [1.0, 4_671.0, 384_400.0, 1.5e6] {
            assert_relative_eq!(
                units.from_canonical_distance(units.to_canonical_distance(x_km)),
                x_km,
                epsilon = 1e-10
            );
        }
        assert_relative_eq!(units.to_canonical_distance(384_400.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn one_period_is_a_full_turn() {
        let units = EARTH_MOON;
        assert_eq!(units.to_canonical_time(0.0), 0.0);
        assert_relative_eq!(units.to_canonical_time(27.321_582), TAU, epsilon = 1e-13);
        assert_relative_eq!(units.from_canonical_time(TAU), 27.321_582, epsilon = 1e-13);
    }
}
