/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The observer's position across the requested timestamps (spec §6
//! `ObserverMode`). The EFI position itself always comes from the
//! out-of-scope WGS84 converter (spec §1); this module only interpolates
//! or extrapolates an already-resolved [`ObserverLocation`] over time.

use glam::DVec3;
use ssie_frames::ObserverLocation;

use crate::config::ObserverMode;

fn lerp_location(a: &ObserverLocation, b: &ObserverLocation, t: f64) -> ObserverLocation {
    ObserverLocation {
        efi_position: a.efi_position.lerp(b.efi_position, t),
        latitude_rad: a.latitude_rad + t * (b.latitude_rad - a.latitude_rad),
        longitude_rad: a.longitude_rad + t * (b.longitude_rad - a.longitude_rad),
    }
}

/// How the observer's EFI location evolves across the driver's requested
/// timestamps (spec §6 `ObserverMode`). `None` (no [`ObserverConfig`] at
/// all) means a purely geocentric run with no topocentric frames.
#[derive(Debug, Clone)]
pub enum ObserverMotion {
    /// Fixed for every timestep.
    Static(ObserverLocation),
    /// `base` at `epoch_jd_tdb`, drifting by `drift_efi_per_day` (au) per
    /// day thereafter.
    Linear { base: ObserverLocation, epoch_jd_tdb: f64, drift_efi_per_day: DVec3 },
    /// Piecewise-linear interpolation between explicit (epoch, location)
    /// knots, sorted by epoch; clamped at the ends, in the spirit of the
    /// tabulated interpolator (spec §4.1).
    Interpolate(Vec<(f64, ObserverLocation)>),
}

/// The observer configuration the driver resolves a location from at
/// every requested timestep.
#[derive(Debug, Clone)]
pub struct ObserverConfig {
    pub mode: ObserverMode,
    pub motion: ObserverMotion,
    /// Where the driver should report the observer (and every target) in
    /// addition to the heliocentric/SSB/geocentric/EMB frames: normally
    /// `Topocenter`/`Enu` when an observer location is present.
    pub output_center: ssie_frames::FrameCenter,
    pub output_orientation: ssie_frames::FrameOrientation,
}

impl ObserverConfig {
    pub fn static_at(location: ObserverLocation) -> Self {
        Self {
            mode: ObserverMode::Static,
            motion: ObserverMotion::Static(location),
            output_center: ssie_frames::FrameCenter::Topocenter,
            output_orientation: ssie_frames::FrameOrientation::Enu,
        }
    }

    /// The observer's EFI location at `jd_tdb`, per [`ObserverMotion`].
    pub fn location_at(&self, jd_tdb: f64) -> ObserverLocation {
        match &self.motion {
            ObserverMotion::Static(location) => *location,
            ObserverMotion::Linear { base, epoch_jd_tdb, drift_efi_per_day } => ObserverLocation {
                efi_position: base.efi_position + *drift_efi_per_day * (jd_tdb - epoch_jd_tdb),
                latitude_rad: base.latitude_rad,
                longitude_rad: base.longitude_rad,
            },
            ObserverMotion::Interpolate(knots) => interpolate_knots(knots, jd_tdb),
        }
    }
}

fn interpolate_knots(knots: &[(f64, ObserverLocation)], jd_tdb: f64) -> ObserverLocation {
    debug_assert!(!knots.is_empty(), "ObserverMotion::Interpolate requires at least one knot");
    if knots.len() == 1 || jd_tdb <= knots[0].0 {
        return knots[0].1;
    }
    if jd_tdb >= knots[knots.len() - 1].0 {
        return knots[knots.len() - 1].1;
    }
    let idx = knots.partition_point(|(t, _)| *t <= jd_tdb).saturating_sub(1);
    let (t0, loc0) = &knots[idx];
    let (t1, loc1) = &knots[idx + 1];
    let t = (jd_tdb - t0) / (t1 - t0);
    lerp_location(loc0, loc1, t)
}
