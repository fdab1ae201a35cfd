/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The integrator's state vector (spec data model `IntegrationState`):
//! eleven point masses plus the Moon's libration angles, a Julian epoch
//! and fractional offset from it, and the cyclic derivative history the
//! Adams-Bashforth-Moulton stepper consumes.

use glam::DVec3;
use ssie_bodies::libration::LibrationState;
use ssie_bodies::{Body, PointMass, INTEGRATED};

use crate::history::DerivativeHistory;

/// One integrated body's position, velocity and gravitational parameter,
/// au and au/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMassState {
    pub body: Body,
    pub mu: f64,
    pub position: DVec3,
    pub velocity: DVec3,
}

impl PointMassState {
    pub fn new(body: Body, position: DVec3, velocity: DVec3) -> Self {
        Self { body, mu: body.gravitational_parameter(), position, velocity }
    }
}

/// A row from the DE initial-condition table (spec §3.1 `DeInitialConditions`):
/// one epoch's worth of point-mass and libration state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeRow {
    pub jd_tdb: f64,
    pub bodies: Vec<PointMassState>,
    pub libration: LibrationState,
}

/// External collaborator boundary (spec §1, §3.1): a source of DE
/// initial-condition rows the day integrator seeds and reseeds from. No
/// concrete file-format parser is implemented by this crate.
pub trait DeInitialConditions {
    fn rows(&self) -> &[DeRow];
    fn first_jd(&self) -> f64;
    fn last_jd(&self) -> f64;
    /// The table row whose epoch is closest to `jd_tdb`, clamped to the
    /// table's own range.
    fn nearest_row(&self, jd_tdb: f64) -> &DeRow {
        let rows = self.rows();
        let clamped = jd_tdb.clamp(self.first_jd(), self.last_jd());
        rows.iter()
            .min_by(|a, b| {
                (a.jd_tdb - clamped)
                    .abs()
                    .partial_cmp(&(b.jd_tdb - clamped).abs())
                    .unwrap()
            })
            .expect("DeInitialConditions::rows must be non-empty")
    }
}

/// The full integrator state at a given instant: an epoch split into an
/// integer-day `jt_epoch` and fractional `delta_t` (spec §3 `IntegrationState`),
/// every integrated body, the Moon's libration state, and the derivative
/// history the multistep corrector needs.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationState {
    pub jt_epoch: f64,
    pub delta_t: f64,
    pub bodies: Vec<PointMassState>,
    pub libration: LibrationState,
    pub history: DerivativeHistory,
}

impl IntegrationState {
    pub fn from_row(row: &DeRow) -> Self {
        Self {
            jt_epoch: row.jd_tdb,
            delta_t: 0.0,
            bodies: row.bodies.clone(),
            libration: row.libration,
            history: DerivativeHistory::default(),
        }
    }

    /// Current epoch, Julian date TDB.
    pub fn jd(&self) -> f64 {
        self.jt_epoch + self.delta_t
    }

    pub fn body(&self, body: Body) -> &PointMassState {
        &self.bodies[body.integration_index()]
    }

    pub fn body_mut(&mut self, body: Body) -> &mut PointMassState {
        &mut self.bodies[body.integration_index()]
    }

    /// A cheap, typed substitute for a JSON-round-trip clone, used by
    /// tests asserting bit-identical repeated calls.
    pub fn checksum(&self) -> u64 {
        let mut acc = self.jd().to_bits();
        for b in &self.bodies {
            acc ^= b.position.x.to_bits().rotate_left(7);
            acc ^= b.position.y.to_bits().rotate_left(13);
            acc ^= b.position.z.to_bits().rotate_left(19);
            acc ^= b.velocity.x.to_bits().rotate_left(23);
            acc ^= b.velocity.y.to_bits().rotate_left(29);
            acc ^= b.velocity.z.to_bits().rotate_left(31);
        }
        acc ^= self.libration.phi.to_bits();
        acc ^= self.libration.theta.to_bits().rotate_left(5);
        acc ^= self.libration.psi.to_bits().rotate_left(11);
        acc
    }
}

/// Degrees of freedom of the flattened state vector the stepper
/// integrates: six libration DOF (when figure effects are enabled) plus
/// six per point mass.
pub fn dof_len(n_bodies: usize, figure: bool) -> usize {
    (if figure { 6 } else { 0 }) + 6 * n_bodies
}

/// Flattens `state` into the stepper's `y` vector.
pub fn to_dof(state: &IntegrationState, figure: bool) -> Vec<f64> {
    let mut y = Vec::with_capacity(dof_len(state.bodies.len(), figure));
    if figure {
        let l = state.libration;
        y.extend_from_slice(&[l.phi, l.theta, l.psi, l.phi_dot, l.theta_dot, l.psi_dot]);
    }
    for b in &state.bodies {
        y.extend_from_slice(&[
            b.position.x,
            b.position.y,
            b.position.z,
            b.velocity.x,
            b.velocity.y,
            b.velocity.z,
        ]);
    }
    y
}

/// Rebuilds an [`IntegrationState`] from a flattened `y` vector, taking
/// body identities/`mu` and the epoch from `template`.
pub fn from_dof(y: &[f64], template: &IntegrationState, figure: bool) -> IntegrationState {
    let mut idx = 0;
    let libration = if figure {
        let l = LibrationState {
            phi: y[0],
            theta: y[1],
            psi: y[2],
            phi_dot: y[3],
            theta_dot: y[4],
            psi_dot: y[5],
        };
        idx = 6;
        l
    } else {
        template.libration
    };

    let mut bodies = template.bodies.clone();
    for b in bodies.iter_mut() {
        b.position = DVec3::new(y[idx], y[idx + 1], y[idx + 2]);
        b.velocity = DVec3::new(y[idx + 3], y[idx + 4], y[idx + 5]);
        idx += 6;
    }

    IntegrationState {
        jt_epoch: template.jt_epoch,
        delta_t: template.delta_t,
        bodies,
        libration,
        history: template.history.clone(),
    }
}

/// The default body set, all eleven integrated bodies at rest at the
/// origin — a convenience starting point for tests.
pub fn zero_bodies() -> Vec<PointMassState> {
    INTEGRATED
        .iter()
        .map(|&body| PointMassState::new(body, DVec3::ZERO, DVec3::ZERO))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> IntegrationState {
        let mut bodies = zero_bodies();
        bodies[3].position = DVec3::new(1.0, 0.0, 0.0);
        bodies[3].velocity = DVec3::new(0.0, 0.0172, 0.0);
        IntegrationState {
            jt_epoch: 2451545.0,
            delta_t: 0.0,
            bodies,
            libration: LibrationState::default(),
            history: DerivativeHistory::default(),
        }
    }

    #[test]
    fn test_dof_round_trip_with_figure() {
        let state = sample_state();
        let y = to_dof(&state, true);
        assert_eq!(y.len(), dof_len(11, true));
        let back = from_dof(&y, &state, true);
        assert_eq!(back.bodies[3].position, state.bodies[3].position);
        assert_eq!(back.bodies[3].velocity, state.bodies[3].velocity);
    }

    #[test]
    fn test_dof_round_trip_without_figure() {
        let state = sample_state();
        let y = to_dof(&state, false);
        assert_eq!(y.len(), dof_len(11, false));
        let back = from_dof(&y, &state, false);
        assert_eq!(back.libration, state.libration);
    }

    #[test]
    fn test_checksum_is_stable_and_sensitive() {
        let state = sample_state();
        let c1 = state.checksum();
        let c2 = state.checksum();
        assert_eq!(c1, c2);

        let mut other = state.clone();
        other.bodies[3].position.x += 1e-9;
        assert_ne!(other.checksum(), c1);
    }
}
