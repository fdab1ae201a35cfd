/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elementary coordinate-frame rotation matrices and the per-edge
//! rotations of the frame graph (precession, nutation, sidereal time,
//! polar motion, ENU, ecliptic obliquity).

use glam::{DMat3, DVec3};
use ssie_eop::EopParams;
use ssie_math::constants::f64::{DAYS_PER_JULIAN_CENTURY, J2000_JULIAN_DATE};
use ssie_units::constants::f64::physical::OBLIQUITY_J2000_DEG;

/// Elementary rotation about the x-axis by `theta` radians.
pub fn r1(theta: f64) -> DMat3 {
    let (s, c) = theta.sin_cos();
    DMat3::from_cols_array(&[1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c])
}

/// Elementary rotation about the y-axis by `theta` radians.
pub fn r2(theta: f64) -> DMat3 {
    let (s, c) = theta.sin_cos();
    DMat3::from_cols_array(&[c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c])
}

/// Elementary rotation about the z-axis by `theta` radians.
pub fn r3(theta: f64) -> DMat3 {
    let (s, c) = theta.sin_cos();
    DMat3::from_cols_array(&[c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0])
}

/// Lieske IAU-1976 precession angles `(ζ, θ, z)`, radians, for Julian
/// centuries TDB `t` since J2000.
fn precession_angles(t: f64) -> (f64, f64, f64) {
    let arcsec_to_rad = std::f64::consts::TAU / (360.0 * 3600.0);
    let zeta = (2306.2181 * t + 0.30188 * t * t + 0.017998 * t * t * t) * arcsec_to_rad;
    let theta = (2004.3109 * t - 0.42665 * t * t - 0.041833 * t * t * t) * arcsec_to_rad;
    let z = (2306.2181 * t + 1.09468 * t * t + 0.018203 * t * t * t) * arcsec_to_rad;
    (zeta, theta, z)
}

/// The J2000_EQ -> MOD precession rotation at `jt_tdb` (Julian date TDB).
pub fn precession_j2000_to_mod(jt_tdb: f64) -> DMat3 {
    let t = (jt_tdb - J2000_JULIAN_DATE) / DAYS_PER_JULIAN_CENTURY;
    let (zeta, theta, z) = precession_angles(t);
    r3(-z) * r2(theta) * r3(-zeta)
}

/// The MOD -> TOD nutation rotation given the mean obliquity `eps0`, the
/// nutation in obliquity `deps` and in longitude `dpsi`, all radians.
pub fn nutation_mod_to_tod(eps0: f64, dpsi: f64, deps: f64) -> DMat3 {
    r1(-(eps0 + deps)) * r3(-dpsi) * r1(eps0)
}

/// The TOD -> PEF rotation (Earth rotation by Greenwich apparent
/// sidereal time `gast`, radians).
pub fn tod_to_pef(gast: f64) -> DMat3 {
    r3(gast)
}

/// `dGAST/dt`, rad/day, approximated by the IAU-1980 GMST rate (the
/// equation-of-the-equinoxes' own time variation is neglected, as is
/// standard practice for the velocity term of the Earth-rotation edge).
pub fn gast_rate(ut1_jd: f64) -> f64 {
    ssie_eop::sidereal::gmst_rate_iau1982(ut1_jd)
}

/// TOD -> PEF state conversion. Position rotates normally; per spec §9
/// design note ("velocity handling across PEF<->TOD"), the first two
/// components of the resulting velocity are fed from the *rotated
/// position*, not the rotated velocity, matching the source's documented
/// quirk. This is preserved deliberately, not "fixed" — flagged here, not
/// silently corrected.
pub fn tod_to_pef_state(r_tod: DVec3, v_tod: DVec3, gast: f64, gast_rate: f64) -> (DVec3, DVec3) {
    let rot = tod_to_pef(gast);
    let r_pef: DVec3 = rot * r_tod;
    let v_rot: DVec3 = rot * v_tod;
    let d_omega = gast_rate * DVec3::new(-r_pef.y, r_pef.x, 0.0);
    let v_pef = DVec3::new(r_pef.x, r_pef.y, v_rot.z) - d_omega;
    (r_pef, v_pef)
}

/// PEF -> TOD state conversion, the reverse direction, implemented
/// without the quirk above (the source's documented bug appears "in one
/// direction" only, per spec §9).
pub fn pef_to_tod_state(r_pef: DVec3, v_pef: DVec3, gast: f64, gast_rate: f64) -> (DVec3, DVec3) {
    let rot = tod_to_pef(gast).transpose();
    let d_omega = gast_rate * DVec3::new(-r_pef.y, r_pef.x, 0.0);
    let r_tod = rot * r_pef;
    let v_tod = rot * (v_pef + d_omega);
    (r_tod, v_tod)
}

/// The PEF -> EFI polar-motion rotation, `dx`, `dy` in radians.
pub fn polar_motion_pef_to_efi(dx: f64, dy: f64) -> DMat3 {
    r2(-dy) * r1(-dx)
}

/// The EFI -> ENU rotation at observer geodetic latitude `lat` and
/// longitude `lon`, radians.
pub fn efi_to_enu(lat: f64, lon: f64) -> DMat3 {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    DMat3::from_cols_array(&[
        -sin_lon,
        -sin_lat * cos_lon,
        cos_lat * cos_lon,
        cos_lon,
        -sin_lat * sin_lon,
        cos_lat * sin_lon,
        0.0,
        cos_lat,
        sin_lat,
    ])
}

/// The J2000_EQ -> J2000_ECL rotation (by the J2000 mean obliquity).
pub fn j2000_eq_to_ecl() -> DMat3 {
    r1(OBLIQUITY_J2000_DEG.to_radians())
}

/// The TOD -> TEME rotation, dropping the equation-of-the-equinoxes
/// (uses GMST in place of GAST as the Earth-rotation reference).
/// TEME exists in the frame graph only to support the out-of-scope
/// SGP4 satellite placeholder target type.
pub fn tod_to_teme(gmst: f64, gast: f64) -> DMat3 {
    r3(gmst - gast)
}

/// Rotation angles bundled from an [`EopParams`] for convenience at the
/// call sites in [`crate::graph`].
pub struct OrientationAngles {
    pub jt_tdb: f64,
    pub eps0_rad: f64,
    pub dpsi_rad: f64,
    pub deps_rad: f64,
    pub gmst: f64,
    pub gast: f64,
    pub dx_rad: f64,
    pub dy_rad: f64,
}

impl OrientationAngles {
    pub fn from_eop(eop: &EopParams) -> Self {
        let eps0 = eop.obliquity - eop.nutation_obliquity;
        Self {
            jt_tdb: eop.tdb.julian_value(),
            eps0_rad: eps0.to_radians(),
            dpsi_rad: eop.nutation_longitude.to_radians(),
            deps_rad: eop.nutation_obliquity.to_radians(),
            gmst: eop.gmst,
            gast: eop.gast,
            dx_rad: eop.polar_motion_x.to_radians(),
            dy_rad: eop.polar_motion_y.to_radians(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use glam::DVec3;

    #[test]
    fn test_elementary_rotations_are_orthogonal() {
        for m in [r1(0.7), r2(0.7), r3(0.7)] {
            let mt = m.transpose();
            let identity = m * mt;
            assert_float_eq!(identity.x_axis.x, 1.0, abs <= 1e-12);
            assert_float_eq!(identity.y_axis.y, 1.0, abs <= 1e-12);
            assert_float_eq!(identity.z_axis.z, 1.0, abs <= 1e-12);
        }
    }

    #[test]
    fn test_precession_is_identity_at_j2000() {
        let m = precession_j2000_to_mod(J2000_JULIAN_DATE);
        let v = DVec3::new(1.0, 0.0, 0.0);
        let rotated = m * v;
        assert_float_eq!(rotated.x, 1.0, abs <= 1e-12);
        assert_float_eq!(rotated.y, 0.0, abs <= 1e-12);
        assert_float_eq!(rotated.z, 0.0, abs <= 1e-12);
    }

    #[test]
    fn test_s1_precession_scenario() {
        // StateVector {HELIOCENTER, J2000_EQ, (1,0,0)}, t = JD 2458849.5 TDB.
        let m = precession_j2000_to_mod(2458849.5);
        let v = DVec3::new(1.0, 0.0, 0.0);
        let rotated = m * v;
        assert_float_eq!(rotated.x, 0.9999881111996561, abs <= 1e-12);
        assert_float_eq!(rotated.y, 0.004472291294412529, abs <= 1e-12);
        assert_float_eq!(rotated.z, 0.0019432112397220493, abs <= 1e-12);
    }

    #[test]
    fn test_nutation_mod_to_tod_round_trip() {
        let m = nutation_mod_to_tod(0.4, 1e-4, -2e-5);
        let mt = m.transpose();
        let v = DVec3::new(0.6, 0.8, 0.0);
        let round = mt * (m * v);
        assert_float_eq!((round - v).length(), 0.0, abs <= 1e-14);
    }

    #[test]
    fn test_ecliptic_rotation_preserves_x_axis() {
        let m = j2000_eq_to_ecl();
        let v = DVec3::new(1.0, 0.0, 0.0);
        let rotated = m * v;
        assert_float_eq!(rotated.x, 1.0, abs <= 1e-14);
    }
}
