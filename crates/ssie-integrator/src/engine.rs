/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The public cached integration engine (spec component C11): validates
//! the requested epoch against the DE table's domain, dispatches whole
//! days to the [`DayIntegrator`], and refines the sub-day remainder with
//! RK4 steps ending on an exact final residual step.

use log::trace;

use crate::conf::IntegrationConf;
use crate::day::DayIntegrator;
use crate::errors::IntegratorError;
use crate::state::{from_dof, to_dof, DeInitialConditions, IntegrationState};
use crate::stepper::rk4_step;

pub struct IntegrationEngine<'a, T: DeInitialConditions> {
    day: DayIntegrator<'a, T>,
    conf: IntegrationConf,
    first_jd: f64,
    last_jd: f64,
    memo: Option<(f64, IntegrationState)>,
}

impl<'a, T: DeInitialConditions> IntegrationEngine<'a, T> {
    pub fn new(table: &'a T, conf: IntegrationConf) -> Self {
        Self {
            first_jd: table.first_jd(),
            last_jd: table.last_jd(),
            day: DayIntegrator::new(table, conf),
            conf,
            memo: None,
        }
    }

    /// The integrator state at `jd_tdb`. Errors if the requested epoch
    /// falls outside the DE initial-condition table's domain (spec §4.9).
    pub fn get(&mut self, jd_tdb: f64) -> Result<IntegrationState, IntegratorError> {
        if jd_tdb < self.first_jd || jd_tdb > self.last_jd {
            return Err(IntegratorError::OutOfRange { requested: jd_tdb, first: self.first_jd, last: self.last_jd });
        }

        if let Some((memo_jd, state)) = &self.memo {
            if *memo_jd == jd_tdb {
                return Ok(state.clone());
            }
        }

        let day_jd = jd_tdb.round();
        let day_state = self.day.get(day_jd);
        let residual = jd_tdb - day_jd;

        let state = if residual.abs() <= self.conf.sub_day_threshold {
            day_state
        } else {
            trace!("refining sub-day residual {residual} days from JD {day_jd}");
            self.refine_sub_day(day_state, day_jd, jd_tdb)
        };

        self.memo = Some((jd_tdb, state.clone()));
        Ok(state)
    }

    fn refine_sub_day(&self, day_state: IntegrationState, day_jd: f64, jd_target: f64) -> IntegrationState {
        let residual = jd_target - day_jd;
        let step = self.conf.sub_day_step * residual.signum();
        let full_steps = (residual / step).abs().floor() as usize;

        let mut y = to_dof(&day_state, self.conf.figure);
        let mut jd = day_jd;
        for _ in 0..full_steps {
            y = rk4_step(&y, jd, step, &day_state, &self.conf);
            jd += step;
        }

        let remaining = jd_target - jd;
        if remaining != 0.0 {
            y = rk4_step(&y, jd, remaining, &day_state, &self.conf);
        }

        let mut state = from_dof(&y, &day_state, self.conf.figure);
        state.jt_epoch = day_jd;
        state.delta_t = jd_target - day_jd;
        state
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;
    use ssie_bodies::libration::LibrationState;
    use ssie_bodies::{Body, PointMass};

    use super::*;
    use crate::state::{zero_bodies, DeRow};

    struct FixedTable {
        rows: Vec<DeRow>,
        first: f64,
        last: f64,
    }

    impl DeInitialConditions for FixedTable {
        fn rows(&self) -> &[DeRow] {
            &self.rows
        }
        fn first_jd(&self) -> f64 {
            self.first
        }
        fn last_jd(&self) -> f64 {
            self.last
        }
    }

    fn two_body_table() -> FixedTable {
        let mut bodies = zero_bodies();
        bodies[Body::Earth.integration_index()].position = DVec3::new(1.0, 0.0, 0.0);
        bodies[Body::Earth.integration_index()].velocity = DVec3::new(0.0, Body::Sun.gravitational_parameter().sqrt(), 0.0);
        FixedTable {
            rows: vec![DeRow { jd_tdb: 2451545.0, bodies, libration: LibrationState::default() }],
            first: 2451000.0,
            last: 2452000.0,
        }
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut engine = IntegrationEngine::new(&table, conf);
        assert!(engine.get(2_000_000.0).is_err());
    }

    #[test]
    fn test_integer_day_matches_day_integrator() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut engine = IntegrationEngine::new(&table, conf);
        let state = engine.get(2451547.0).unwrap();
        assert_eq!(state.jd(), 2451547.0);
    }

    #[test]
    fn test_sub_day_refinement_lands_on_exact_residual() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut engine = IntegrationEngine::new(&table, conf);
        let target = 2451547.37;
        let state = engine.get(target).unwrap();
        assert!((state.jd() - target).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_call_is_memoised_and_bit_identical() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut engine = IntegrationEngine::new(&table, conf);
        let a = engine.get(2451547.37).unwrap();
        let b = engine.get(2451547.37).unwrap();
        assert_eq!(a.checksum(), b.checksum());
    }
}
