/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Orchestrates the full per-target correction loop (spec §4.10): raw
//! geometry, light-time correction, then classical and relativistic
//! stellar aberration applied to the light-time result.

use glam::DVec3;
use log::trace;
use ssie_frames::StateVector;

use crate::{aberration, light_time};

/// The four state vectors the computation driver's `TargetResults`
/// carries for a single target (spec §6 `TargetResults`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionResult {
    pub raw: StateVector,
    pub light_time: StateVector,
    pub aberration_classical: StateVector,
    pub aberration_relativistic: StateVector,
}

/// Runs the full correction loop for a single target.
///
/// `target_at` re-evaluates the target's raw state vector, already
/// expressed in the observer's `(center, orientation)`, at an arbitrary
/// TDB Julian date; `source_velocity` is the heliocentric velocity of
/// Earth's geocenter at `epoch_jd_tdb`, au/day (spec's "source velocity"
/// for the aberration step).
///
/// Per spec §9 design note, a frame mismatch between `observer` and
/// `raw_target` is not an error — it is the caller's precondition to
/// align frames before calling this function — but is logged once at
/// `trace!` so the condition remains observable.
pub fn correct<F: Fn(f64) -> StateVector>(
    observer: &StateVector,
    epoch_jd_tdb: f64,
    raw_target: StateVector,
    target_at: F,
    source_velocity: DVec3,
) -> CorrectionResult {
    if observer.center != raw_target.center || observer.orientation != raw_target.orientation {
        trace!(
            "correction pipeline called with mismatched frames: observer {:?}/{:?}, target {:?}/{:?}",
            observer.center,
            observer.orientation,
            raw_target.center,
            raw_target.orientation
        );
    }

    let lt = light_time::correct(observer, epoch_jd_tdb, raw_target, target_at);

    let r_lt = lt.position - observer.position;
    let cla_dir = aberration::classical(r_lt, source_velocity);
    let rel_dir = aberration::relativistic(r_lt, source_velocity);

    let aberration_classical = StateVector { position: observer.position + cla_dir, ..lt };
    let aberration_relativistic = StateVector { position: observer.position + rel_dir, ..lt };

    CorrectionResult { raw: raw_target, light_time: lt, aberration_classical, aberration_relativistic }
}
