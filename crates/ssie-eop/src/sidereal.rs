/*
 * Copyright (c) 2024. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Greenwich mean and apparent sidereal time from the IAU-1980 GMST-UT1
//! polynomial and the classical equation of the equinoxes.

use fast_polynomial::poly_array;
use ssie_math::constants::f64::{DAYS_PER_JULIAN_CENTURY, J2000_JULIAN_DATE, SECONDS_PER_DAY};
use ssie_math::math::mod_two_pi;
use ssie_math::types::units::Radians;

const SECONDS_PER_HALF_DAY: f64 = SECONDS_PER_DAY / 2.0;

// Coefficients of the IAU-1980 GMST-UT1 model.
const A: f64 = 24110.54841 - SECONDS_PER_HALF_DAY;
const B: f64 = 8640184.812866;
const C: f64 = 0.093104;
const D: f64 = -6.2e-6;

/// Greenwich mean sidereal time at `ut1_jd` (UT1 Julian date), by the
/// IAU-1980 GMST-UT1 polynomial.
pub fn gmst_iau1982(ut1_jd: f64) -> Radians {
    let t = (ut1_jd - J2000_JULIAN_DATE) / DAYS_PER_JULIAN_CENTURY;
    let days_since_j2000 = ut1_jd - J2000_JULIAN_DATE;
    let f = days_since_j2000.rem_euclid(1.0) * SECONDS_PER_DAY;
    let seconds_of_time = poly_array(t, &[A, B, C, D]) + f;
    mod_two_pi(seconds_of_time * std::f64::consts::TAU / SECONDS_PER_DAY)
}

/// `dGMST/dt` (rad/day) at `ut1_jd`, the time-derivative of the IAU-1980
/// GMST-UT1 polynomial, dominated by the mean-to-sidereal rotation-rate
/// ratio with a small secular correction from the polynomial's `T`
/// terms.
pub fn gmst_rate_iau1982(ut1_jd: f64) -> f64 {
    let t = (ut1_jd - J2000_JULIAN_DATE) / DAYS_PER_JULIAN_CENTURY;
    let seconds_per_day_rate = (B + 2.0 * C * t + 3.0 * D * t * t) / DAYS_PER_JULIAN_CENTURY + SECONDS_PER_DAY;
    seconds_per_day_rate * std::f64::consts::TAU / SECONDS_PER_DAY
}

/// Greenwich apparent sidereal time: GMST plus the classical equation of
/// the equinoxes `Δψ·cos(ε₀)`, dropping the small Ω-dependent
/// complementary terms the full IAU-1994 equation adds.
pub fn gast_classical(gmst: Radians, nutation_longitude: Radians, mean_obliquity: Radians) -> Radians {
    mod_two_pi(gmst + nutation_longitude * mean_obliquity.cos())
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_gmst_iau1982() {
        // MJD 53736.0 UT1, ERFA-sourced reference value.
        let ut1_jd = 2400000.5 + 53736.0;
        let actual = gmst_iau1982(ut1_jd);
        assert_float_eq!(actual, 1.754_174_981_860_675, rel <= TOLERANCE);
    }

    #[test]
    fn test_gmst_at_j2000() {
        let actual = gmst_iau1982(J2000_JULIAN_DATE);
        assert!((0.0..std::f64::consts::TAU).contains(&actual));
    }

    #[test]
    fn test_gast_reduces_to_gmst_with_zero_nutation() {
        let gmst = gmst_iau1982(2451545.0);
        assert_float_eq!(gast_classical(gmst, 0.0, 0.4), gmst, abs <= 1e-15);
    }

    #[test]
    fn test_gmst_rate_close_to_sidereal_ratio() {
        let rate = gmst_rate_iau1982(2451545.0);
        let expected = 1.00273790935 * std::f64::consts::TAU;
        assert_float_eq!(rate, expected, rel <= 1e-6);
    }

    #[test]
    fn test_gast_offset_sign_matches_nutation_longitude() {
        let gmst = 1.0;
        let gast = gast_classical(gmst, 1e-4, 0.4);
        assert!(gast > gmst);
        let gast_neg = gast_classical(gmst, -1e-4, 0.4);
        assert!(gast_neg < gmst);
    }
}
