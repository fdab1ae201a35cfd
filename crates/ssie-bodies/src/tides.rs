/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Earth-Moon tidal acceleration from the lagged tidal bulge the Moon
//! raises on the Earth.

use glam::DVec3;

/// The extra acceleration the Earth-raised tidal bulge (lagged by phase
/// `phase`) exerts on the Moon, and the reciprocal felt by the Earth, for
/// a true-of-date Earth-to-Moon position `r`, Love number `k_love`,
/// Earth equatorial radius `a_earth`, and gravitational parameters
/// `mu_moon`, `mu_earth`.
///
/// Returns `(a_moon, a_earth)`.
pub fn earth_moon_tidal_acceleration(
    r: DVec3,
    mu_moon: f64,
    mu_earth: f64,
    a_earth: f64,
    k_love: f64,
    phase: f64,
) -> (DVec3, DVec3) {
    let dist = r.length();
    let coeff = -3.0 * k_love * mu_moon * (1.0 + mu_moon / mu_earth) * a_earth.powi(5) / dist.powi(8);
    let lagged = DVec3::new(r.x + phase * r.y, r.y - phase * r.x, r.z);
    let a_moon = coeff * lagged;
    let a_earth = -(mu_moon / mu_earth) * a_moon;
    (a_moon, a_earth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_phase_lag_is_radial_scaling() {
        let r = DVec3::new(1.0, 0.0, 0.0) * (384_400.0 / 149_597_870.691);
        let (a_moon, a_earth) = earth_moon_tidal_acceleration(
            r,
            1.0931894624024232e-11,
            8.887692445125634e-10,
            6378.137 / 149_597_870.691,
            0.3,
            0.0,
        );
        assert!(a_moon.x != 0.0);
        assert_eq!(a_moon.y, 0.0);
        assert_eq!(a_moon.z, 0.0);
        assert!(a_earth.x.signum() != a_moon.x.signum() || a_earth.x == 0.0);
    }

    #[test]
    fn test_reciprocal_scaling() {
        let r = DVec3::new(0.9, 0.2, 0.05) * (384_400.0 / 149_597_870.691);
        let mu_moon = 1.0931894624024232e-11;
        let mu_earth = 8.887692445125634e-10;
        let (a_moon, a_earth) = earth_moon_tidal_acceleration(
            r,
            mu_moon,
            mu_earth,
            6378.137 / 149_597_870.691,
            0.3,
            1e-3,
        );
        let expected_earth = -(mu_moon / mu_earth) * a_moon;
        assert!((a_earth - expected_earth).length() < 1e-30);
    }
}
