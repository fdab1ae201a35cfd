/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Classical and relativistic stellar aberration (spec §4.10), applied to
//! an already light-time-corrected direction.

use glam::DVec3;
use ssie_units::constants::f64::physical::C_AU_PER_DAY;

/// Classical aberration: `d̂' = normalize(d̂ + v_src/c)`, scaled back to
/// `|r|`. `v_src` is the observer's heliocentric velocity (the source of
/// the aberrating motion, per spec's "heliocentric velocity of Earth's
/// geocenter"), au/day.
pub fn classical(r: DVec3, v_src: DVec3) -> DVec3 {
    let dist = r.length();
    let dhat = r / dist;
    let beta = v_src / C_AU_PER_DAY;
    (dhat + beta).normalize() * dist
}

/// Relativistic aberration:
/// `d̂' = normalize(β⁻¹·d̂ + (v/c)·(1 + (d̂·v)/(c·(1+β⁻¹))))`, scaled back
/// to `|r|`, with `β⁻¹ = sqrt(1 - |v|²/c²)`.
pub fn relativistic(r: DVec3, v: DVec3) -> DVec3 {
    let dist = r.length();
    let dhat = r / dist;
    let c = C_AU_PER_DAY;
    let beta_inv = (1.0 - v.length_squared() / (c * c)).sqrt();
    let factor = 1.0 + dhat.dot(v) / (c * (1.0 + beta_inv));
    (beta_inv * dhat + (v / c) * factor).normalize() * dist
}
