/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Light-time correction by fixed three-step iteration (spec §4.10).

use ssie_frames::StateVector;
use ssie_units::constants::f64::physical::C_AU_PER_DAY;

const ITERATIONS: usize = 3;

/// Corrects `raw_target` (the target's state vector in the observer's own
/// `(center, orientation)` at the requested epoch) for light-time delay.
///
/// `target_at` re-evaluates the target's state vector, already expressed
/// in the observer's `(center, orientation)`, at an arbitrary TDB Julian
/// date. The loop runs exactly three iterations regardless of
/// convergence, matching the source's documented (non-converging, but
/// bounded) recipe — see spec §7 "Recovery policy".
pub fn correct<F: Fn(f64) -> StateVector>(
    observer: &StateVector,
    epoch_jd_tdb: f64,
    raw_target: StateVector,
    target_at: F,
) -> StateVector {
    let mut target = raw_target;
    for _ in 0..ITERATIONS {
        let d = (target.position - observer.position).length();
        let tau = d / C_AU_PER_DAY;
        let t_prime = epoch_jd_tdb - tau;
        target = target_at(t_prime);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use ssie_frames::{FrameCenter, FrameOrientation};
    use ssie_time::{Format, TimeScale, Timestamp};

    fn ts(jd: f64) -> Timestamp {
        Timestamp::new(jd, Format::Julian, TimeScale::Tdb)
    }

    fn sv(position: DVec3, velocity: DVec3, jd: f64) -> StateVector {
        StateVector::new(FrameCenter::Geocenter, FrameOrientation::J2000Eq, position, velocity, ts(jd))
    }

    #[test]
    fn test_stationary_target_converges_to_fixed_light_time() {
        let observer = sv(DVec3::ZERO, DVec3::ZERO, 2451545.0);
        let target_pos = DVec3::new(5.2, 0.0, 0.0);
        let raw = sv(target_pos, DVec3::ZERO, 2451545.0);
        let corrected = correct(&observer, 2451545.0, raw, |_t| sv(target_pos, DVec3::ZERO, 2451545.0));
        assert_eq!(corrected.position, target_pos);
    }

    #[test]
    fn test_moving_target_produces_earlier_epoch_state() {
        let observer = sv(DVec3::ZERO, DVec3::ZERO, 2451545.0);
        let raw = sv(DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 0.017, 0.0), 2451545.0);
        let corrected = correct(&observer, 2451545.0, raw, |t| {
            sv(DVec3::new(1.0, 0.017 * (t - 2451545.0), 0.0), DVec3::new(0.0, 0.017, 0.0), t)
        });
        // Three iterations of a negative tau should have pulled the y
        // component slightly negative (evaluated at an earlier epoch).
        assert!(corrected.position.y < 0.0);
    }
}
