/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The RK4 single-step integrator and the 8th-order Adams-Bashforth-
//! Moulton predictor-corrector multistep integrator (spec component C9),
//! both operating on the flattened degrees-of-freedom vector produced by
//! [`crate::state::to_dof`].

use glam::DVec3;

use crate::conf::IntegrationConf;
use crate::state::{from_dof, to_dof, IntegrationState};

/// Predictor coefficients, numerator over 120960, newest-derivative-first.
const PREDICTOR_NUM: [f64; 8] =
    [434241.0, -1152169.0, 2183877.0, -2664477.0, 2102243.0, -1041723.0, 295767.0, -36799.0];

/// Corrector coefficients, numerator over 120960, newest-derivative-first
/// (index 0 is the predicted derivative at the new point).
const CORRECTOR_NUM: [f64; 8] =
    [36799.0, 139849.0, -121797.0, 123133.0, -88547.0, 41499.0, -11351.0, 1375.0];

const ABM_DENOM: f64 = 120960.0;

fn add_scaled(y: &[f64], h: f64, dy: &[f64]) -> Vec<f64> {
    y.iter().zip(dy).map(|(a, b)| a + h * b).collect()
}

/// The state derivative `dy/dt` at flattened state `y`, epoch `jd`
/// (`template.jt_epoch + delta_t`, days TDB), reconstructing point-mass
/// and libration accelerations per spec §4.6-§4.8.
pub fn derivative(y: &[f64], jd: f64, template: &IntegrationState, conf: &IntegrationConf) -> Vec<f64> {
    let state = from_dof(y, template, conf.figure);

    let r: Vec<DVec3> = state.bodies.iter().map(|b| b.position).collect();
    let v: Vec<DVec3> = state.bodies.iter().map(|b| b.velocity).collect();
    let mu: Vec<f64> = state.bodies.iter().map(|b| b.mu).collect();
    let mut acc = ssie_bodies::dynamics::accelerations(&r, &v, &mu, conf.relativity);

    let mut libration_accel = (0.0, 0.0, 0.0);
    if conf.figure {
        let earth_i = conf.earth.integration_index();
        let moon_i = conf.moon.integration_index();

        let r_earth = r[earth_i];
        let r_moon = r[moon_i];
        let mu_earth = mu[earth_i];
        let mu_moon = mu[moon_i];

        // Earth's spin, approximated by IAU-1980 GMST evaluated at the
        // integrator's own TDB epoch (the exact UT1 needed for GAST is
        // produced by the time correlator/EOP pipeline at the driver
        // level; this internal approximation only feeds the small J2
        // perturbation of the Moon's orbit, where sub-arcsecond Earth
        // orientation accuracy is immaterial).
        let earth_figure = ssie_bodies::figure::earth_figure();
        let moon_figure = ssie_bodies::figure::moon_figure();

        let spin = ssie_frames::rotations::r3(ssie_eop::sidereal::gmst_iau1982(jd));
        let moon_rel_earth = r_moon - r_earth;
        let moon_in_earth_body = spin * moon_rel_earth;
        let a_earth_fig_on_moon_body = earth_figure.acceleration(moon_in_earth_body, mu_earth);
        let a_earth_fig_on_moon = spin.transpose() * a_earth_fig_on_moon_body;
        acc[moon_i] += a_earth_fig_on_moon;
        acc[earth_i] -= (mu_moon / mu_earth) * a_earth_fig_on_moon;

        // The Moon's body orientation comes from the libration state
        // itself (3-1-3 Euler angles), not from Earth's EOP pipeline.
        let moon_rot = euler_313_matrix(state.libration.phi, state.libration.theta, state.libration.psi);
        let earth_rel_moon = r_earth - r_moon;
        let earth_in_moon_body = moon_rot * earth_rel_moon;
        let a_moon_fig_on_earth_body = moon_figure.acceleration(earth_in_moon_body, mu_moon);
        let a_moon_fig_on_earth = moon_rot.transpose() * a_moon_fig_on_earth_body;
        acc[earth_i] += a_moon_fig_on_earth;
        acc[moon_i] -= (mu_earth / mu_moon) * a_moon_fig_on_earth;

        let (a_tide_moon, a_tide_earth) = ssie_bodies::tides::earth_moon_tidal_acceleration(
            moon_rel_earth,
            mu_moon,
            mu_earth,
            earth_figure.equatorial_radius,
            conf.tidal_love_number,
            conf.tidal_phase,
        );
        acc[moon_i] += a_tide_moon;
        acc[earth_i] += a_tide_earth;

        // Torque per unit source (Earth) mass on the Moon's figure, spec
        // §4.6 `N = r x a_body`; the reaction acceleration computed above
        // already carries the mu_earth factor, so dividing it back out
        // here recovers the "per unit mass" torque the libration equation
        // of motion expects.
        let torque_per_unit_mass = earth_in_moon_body.cross(a_moon_fig_on_earth_body);
        let torque = torque_per_unit_mass * mu_earth;
        let k = ssie_bodies::libration::moon_libration_constants();
        let d = ssie_bodies::libration::libration_derivative(state.libration, torque, k);
        libration_accel = (d.phi_ddot, d.theta_ddot, d.psi_ddot);
    }

    let mut out = Vec::with_capacity(y.len());
    if conf.figure {
        let l = state.libration;
        out.extend_from_slice(&[
            l.phi_dot,
            l.theta_dot,
            l.psi_dot,
            libration_accel.0,
            libration_accel.1,
            libration_accel.2,
        ]);
    }
    for (i, b) in state.bodies.iter().enumerate() {
        out.extend_from_slice(&[b.velocity.x, b.velocity.y, b.velocity.z, acc[i].x, acc[i].y, acc[i].z]);
    }
    out
}

/// The 3-1-3 (z-x-z) Euler rotation matrix from body-fixed to J2000,
/// given principal-axis angles `(phi, theta, psi)`.
pub fn euler_313_matrix(phi: f64, theta: f64, psi: f64) -> glam::DMat3 {
    ssie_frames::rotations::r3(phi) * ssie_frames::rotations::r1(theta) * ssie_frames::rotations::r3(psi)
}

/// A single classical fourth-order Runge-Kutta step of size `h` (days,
/// signed) from flattened state `y` at epoch `jd`.
pub fn rk4_step(y: &[f64], jd: f64, h: f64, template: &IntegrationState, conf: &IntegrationConf) -> Vec<f64> {
    let k1 = derivative(y, jd, template, conf);
    let y2 = add_scaled(y, h / 2.0, &k1);
    let k2 = derivative(&y2, jd + h / 2.0, template, conf);
    let y3 = add_scaled(y, h / 2.0, &k2);
    let k3 = derivative(&y3, jd + h / 2.0, template, conf);
    let y4 = add_scaled(y, h, &k3);
    let k4 = derivative(&y4, jd + h, template, conf);

    (0..y.len())
        .map(|i| y[i] + h / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]))
        .collect()
}

/// One Adams-Bashforth-Moulton 8th-order predictor-corrector step of size
/// `h` from `y` at `jd`, given the eight most recent derivatives in
/// `history` (newest first, index 0 the derivative at `y`/`jd`).
///
/// Requires a full eight-entry history; callers fall back to [`rk4_step`]
/// to build one up (spec §4.7, "starting procedure").
pub fn adams8_step(
    y: &[f64],
    jd: f64,
    h: f64,
    history: &[&[f64]],
    template: &IntegrationState,
    conf: &IntegrationConf,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(history.len(), 8, "adams8_step requires an eight-term derivative history");

    let dof = y.len();
    let mut predictor_sum = vec![0.0; dof];
    for (coef, f) in PREDICTOR_NUM.iter().zip(history.iter()) {
        for i in 0..dof {
            predictor_sum[i] += coef * f[i];
        }
    }
    let y_pred: Vec<f64> = (0..dof)
        .map(|i| y[i] + h * predictor_sum[i] / ABM_DENOM)
        .collect();

    let f_pred = derivative(&y_pred, jd + h, template, conf);

    let mut corrector_sum = vec![0.0; dof];
    let corrector_history: Vec<&[f64]> = std::iter::once(f_pred.as_slice()).chain(history[..7].iter().copied()).collect();
    for (coef, f) in CORRECTOR_NUM.iter().zip(corrector_history.iter()) {
        for i in 0..dof {
            corrector_sum[i] += coef * f[i];
        }
    }
    let y_corr: Vec<f64> = (0..dof)
        .map(|i| y[i] + h * corrector_sum[i] / ABM_DENOM)
        .collect();

    let f_new = derivative(&y_corr, jd + h, template, conf);
    (y_corr, f_new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{to_dof, zero_bodies};
    use ssie_bodies::libration::LibrationState;

    fn two_body_state() -> IntegrationState {
        let mut bodies = zero_bodies();
        bodies[3].position = DVec3::new(1.0, 0.0, 0.0);
        bodies[3].velocity = DVec3::new(0.0, 0.0172, 0.0);
        IntegrationState {
            jt_epoch: 2451545.0,
            delta_t: 0.0,
            bodies,
            libration: LibrationState::default(),
            history: Default::default(),
        }
    }

    #[test]
    fn test_rk4_step_moves_earth_along_velocity() {
        let state = two_body_state();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let y = to_dof(&state, conf.figure);
        let y_next = rk4_step(&y, state.jd(), 0.01, &state, &conf);
        let idx = 3 * 6;
        assert!(y_next[idx + 1] > y[idx + 1], "earth moves in +y over a small positive step");
    }

    #[test]
    fn test_adams8_step_requires_full_history() {
        let state = two_body_state();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let y = to_dof(&state, conf.figure);
        let f0 = derivative(&y, state.jd(), &state, &conf);
        let history: Vec<&[f64]> = std::iter::repeat(f0.as_slice()).take(7).collect();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            adams8_step(&y, state.jd(), 0.01, &history, &state, &conf)
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_adams8_step_agrees_with_rk4_for_quiescent_start() {
        let state = two_body_state();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut y = to_dof(&state, conf.figure);
        let h = 0.01;
        let mut jd = state.jd();

        // Build an 8-entry history by repeated RK4 stepping backward in
        // derivative terms (using the same derivative at each of the 8
        // slots is a crude but valid starting procedure for this
        // agreement check: with a constant derivative history the
        // predictor-corrector should stay close to a plain RK4 chain).
        let f0 = derivative(&y, jd, &state, &conf);
        let history: Vec<Vec<f64>> = std::iter::repeat(f0).take(8).collect();
        let history_refs: Vec<&[f64]> = history.iter().map(|v| v.as_slice()).collect();

        let (y_abm, _) = adams8_step(&y, jd, h, &history_refs, &state, &conf);
        let y_rk4 = rk4_step(&y, jd, h, &state, &conf);

        let idx = 3 * 6 + 1;
        assert!((y_abm[idx] - y_rk4[idx]).abs() < 1e-6);
        jd += h;
        y = y_abm;
        assert!(y[idx].is_finite());
    }
}
