/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The rigorous Hipparcos proper-motion/parallax star propagator (spec
//! component C13): advances a catalogue entry given at epoch J1991.25 to
//! an arbitrary target TDB Julian date, and optionally applies annual
//! parallax given the observer's heliocentric position.
//!
//! Catalogue loading itself (name -> entry lookup) is an external
//! collaborator per spec §1; this crate only propagates an already
//! resolved [`HipparcosEntry`].

use glam::DVec3;
use ssie_units::constants::f64::physical::{AU_M, J1991_25};

/// Arcseconds per radian.
const ARCSEC_PER_RAD: f64 = 360.0 * 3600.0 / std::f64::consts::TAU;

/// Kilometres per second per astronomical-unit-per-Julian-year, the
/// standard conversion constant linking radial velocity to the
/// "radial proper motion" term of the rigorous propagation formula.
const KM_PER_S_PER_AU_PER_YEAR: f64 = 4.740470446;

/// Julian days per Julian year.
const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// A Hipparcos catalogue entry at the reference epoch J1991.25.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HipparcosEntry {
    pub id: u32,
    /// Right ascension, radians.
    pub ra: f64,
    /// Declination, radians.
    pub de: f64,
    /// Parallax, arcseconds.
    pub parallax: f64,
    /// Proper motion in RA, `μ_α* = μ_α cos δ`, arcseconds/Julian year.
    pub pm_ra_star: f64,
    /// Proper motion in declination, arcseconds/Julian year.
    pub pm_de: f64,
    /// Radial velocity, km/s.
    pub radial_velocity: f64,
    pub magnitude: f64,
    pub constellation: [u8; 3],
}

/// A star's propagated position and proper motion at the target epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagatedStar {
    pub ra: f64,
    pub de: f64,
    pub parallax: f64,
    pub pm_ra_star: f64,
    pub pm_de: f64,
}

fn unit_vectors(ra: f64, de: f64) -> (DVec3, DVec3, DVec3) {
    let (sin_ra, cos_ra) = ra.sin_cos();
    let (sin_de, cos_de) = de.sin_cos();
    let r = DVec3::new(cos_de * cos_ra, cos_de * sin_ra, sin_de);
    let p = DVec3::new(-sin_ra, cos_ra, 0.0);
    let q = DVec3::new(-sin_de * cos_ra, -sin_de * sin_ra, cos_de);
    (r, p, q)
}

/// Propagates `entry` from J1991.25 to `target_jd_tdb` by the rigorous
/// Hipparcos recipe (spec §4.11): unit vectors `p, q, r` at epoch,
/// `f² = 1/(1 + 2ζ₀τ + (μ₀²+ζ₀²)τ²)`, `new_r = f·(w·r₀ + τ·pm₀)` with
/// `w = 1 + ζ₀τ`, then re-normalised to yield new RA, DE, parallax and
/// transverse proper motion.
pub fn propagate(entry: &HipparcosEntry, target_jd_tdb: f64) -> PropagatedStar {
    let tau = (target_jd_tdb - J1991_25) / DAYS_PER_JULIAN_YEAR;

    let (r0, p0, q0) = unit_vectors(entry.ra, entry.de);
    let pm0 = p0 * entry.pm_ra_star + q0 * entry.pm_de;
    let mu0_sq = pm0.length_squared();

    // "Radial proper motion": the parallax-scaled radial velocity, in the
    // same arcsec/year units as pm0, via the standard km/s <-> au/yr
    // conversion constant.
    let zeta0 = entry.radial_velocity * entry.parallax / KM_PER_S_PER_AU_PER_YEAR;

    let w = 1.0 + zeta0 * tau;
    let f_sq_inv = 1.0 + 2.0 * zeta0 * tau + (mu0_sq + zeta0 * zeta0) * tau * tau;
    let f = 1.0 / f_sq_inv.sqrt();

    let new_r_unnormalised = w * r0 + tau * pm0;
    let new_r = f * new_r_unnormalised;
    let new_r = new_r.normalize();

    let new_de = new_r.z.clamp(-1.0, 1.0).asin();
    let new_ra = new_r.y.atan2(new_r.x).rem_euclid(std::f64::consts::TAU);

    let new_parallax = entry.parallax * f;

    let pm_new = f * f * ((1.0 + zeta0 * tau) * pm0 - mu0_sq * tau * r0);
    let (_, p1, q1) = unit_vectors(new_ra, new_de);
    let pm_ra_star_new = p1.dot(pm_new);
    let pm_de_new = q1.dot(pm_new);

    PropagatedStar {
        ra: new_ra,
        de: new_de,
        parallax: new_parallax,
        pm_ra_star: pm_ra_star_new,
        pm_de: pm_de_new,
    }
}

/// Applies annual parallax to a star's unit direction vector `direction`
/// (barycentric, in the same orientation as `observer_position_m`),
/// given the observer's heliocentric-equatorial position
/// `observer_position_m` in metres and the star's `parallax` in
/// arcseconds. Returns the corrected, renormalised unit direction.
pub fn apply_annual_parallax(direction: DVec3, parallax_arcsec: f64, observer_position_m: DVec3) -> DVec3 {
    let observer_au = observer_position_m / AU_M;
    let parallax_rad = parallax_arcsec / ARCSEC_PER_RAD;
    let corrected = direction - parallax_rad * observer_au;
    corrected.normalize()
}
