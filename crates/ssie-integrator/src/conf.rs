/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Integrator-wide configuration: which bodies carry figure/tide/libration
//! effects, whether relativity is enabled, and the day-cache/sub-day
//! stepping parameters (spec §4.7-§4.9).

use ssie_bodies::Body;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationConf {
    pub sun: Body,
    pub earth: Body,
    pub moon: Body,
    pub relativity: bool,
    pub figure: bool,
    /// Earth's tidal Love number `k2`.
    pub tidal_love_number: f64,
    /// Tidal phase lag parameter (spec §4.8 "lagged tidal bulge").
    pub tidal_phase: f64,
    /// Fixed step size, days, used to seed a reseeded day integrator.
    pub seed_step: f64,
    /// Day-integrator reseed thresholds (spec §4.8).
    pub reseed_drift_days: f64,
    pub reseed_integrated_days: f64,
    /// Step size, days, used by the multistep day integrator: one day is
    /// advanced in `(1.0 / day_step).round()` substeps.
    pub day_step: f64,
    /// Sub-day RK4 refinement step size, days (spec §4.9).
    pub sub_day_step: f64,
    /// Below this residual, days, the engine treats the sub-day remainder
    /// as exactly reached rather than stepping again (spec §4.9, "0.1 ms").
    pub sub_day_threshold: f64,
}

impl Default for IntegrationConf {
    fn default() -> Self {
        Self {
            sun: Body::Sun,
            earth: Body::Earth,
            moon: Body::Moon,
            relativity: true,
            figure: true,
            tidal_love_number: 0.3,
            tidal_phase: 4.0e-4,
            seed_step: 0.1,
            reseed_drift_days: 350.0,
            reseed_integrated_days: 365.0,
            day_step: 1.0,
            sub_day_step: 0.05,
            sub_day_threshold: 1.0e-4 / 86_400.0,
        }
    }
}
