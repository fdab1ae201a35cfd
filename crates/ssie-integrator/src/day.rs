/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The day-cache integrator (spec component C10): advances the
//! Adams-Bashforth-Moulton stepper one calendar day at a time, caching
//! every integer-day state, and reseeds from the DE initial-condition
//! table when the cached trajectory has drifted too far from its seed
//! epoch or integrated too long without a fresh anchor.

use std::collections::HashMap;

use log::debug;

use crate::conf::IntegrationConf;
use crate::state::{from_dof, to_dof, DeInitialConditions, IntegrationState};
use crate::stepper::{adams8_step, derivative, rk4_step};

pub struct DayIntegrator<'a, T: DeInitialConditions> {
    table: &'a T,
    conf: IntegrationConf,
    seed_jd: Option<f64>,
    days_since_seed: f64,
    last_direction: i8,
    /// The most recently computed day's full state.
    latest: Option<IntegrationState>,
    cache: HashMap<i64, IntegrationState>,
}

impl<'a, T: DeInitialConditions> DayIntegrator<'a, T> {
    pub fn new(table: &'a T, conf: IntegrationConf) -> Self {
        Self {
            table,
            conf,
            seed_jd: None,
            days_since_seed: 0.0,
            last_direction: 0,
            latest: None,
            cache: HashMap::new(),
        }
    }

    /// Returns the integrator's full state at the integer Julian day
    /// nearest `jd_target`, reseeding and/or advancing as required.
    pub fn get(&mut self, jd_target: f64) -> IntegrationState {
        let day_jd = jd_target.round();

        let needs_reseed = match self.seed_jd {
            None => true,
            Some(seed) => {
                (day_jd - seed).abs() > self.conf.reseed_drift_days
                    || self.days_since_seed > self.conf.reseed_integrated_days
            }
        };
        if needs_reseed {
            debug!("day integrator reseeding toward JD {day_jd}");
            self.reseed(day_jd);
        }

        if let Some(state) = self.cache.get(&(day_jd as i64)) {
            return state.clone();
        }

        self.advance_to(day_jd);
        self.cache
            .get(&(day_jd as i64))
            .cloned()
            .expect("advance_to must leave the target day cached")
    }

    fn reseed(&mut self, day_jd: f64) {
        let row = self.table.nearest_row(day_jd);
        let mut state = IntegrationState::from_row(row);

        let distance = day_jd - row.jd_tdb;
        if distance != 0.0 {
            let steps = (distance / self.conf.seed_step).abs().round().max(1.0) as usize;
            let h = distance / steps as f64;
            let mut y = to_dof(&state, self.conf.figure);
            let mut jd = state.jd();
            for _ in 0..steps {
                y = rk4_step(&y, jd, h, &state, &self.conf);
                jd += h;
            }
            state = from_dof(&y, &state, self.conf.figure);
        }
        state.history.clear();
        state.jt_epoch = day_jd;
        state.delta_t = 0.0;

        self.cache.clear();
        self.cache.insert(day_jd as i64, state.clone());
        self.latest = Some(state);
        self.seed_jd = Some(day_jd);
        self.days_since_seed = 0.0;
        self.last_direction = 0;
    }

    fn advance_to(&mut self, target_day: f64) {
        loop {
            let latest_jd = self.latest.as_ref().expect("reseed populates latest").jt_epoch;
            if latest_jd == target_day {
                return;
            }
            let direction: i8 = if target_day > latest_jd { 1 } else { -1 };
            if self.last_direction != 0 && direction != self.last_direction {
                self.latest.as_mut().unwrap().history.clear();
            }
            self.last_direction = direction;
            self.step_one_day(direction);
            self.days_since_seed += 1.0;
            let latest = self.latest.as_ref().unwrap();
            self.cache.insert(latest.jt_epoch as i64, latest.clone());
        }
    }

    fn step_one_day(&mut self, direction: i8) {
        let conf = self.conf;
        let substeps = (1.0 / conf.day_step).round().max(1.0) as usize;
        let h = direction as f64 * conf.day_step;

        let mut state = self.latest.take().expect("reseed populates latest");
        let mut y = to_dof(&state, conf.figure);
        let mut jd = state.jd();

        for _ in 0..substeps {
            if state.history.len() < 8 {
                let f = derivative(&y, jd, &state, &conf);
                state.history.push_front(f);
                y = rk4_step(&y, jd, h, &state, &conf);
            } else {
                let hist: Vec<&[f64]> = (0..8).map(|i| state.history.get(i).unwrap()).collect();
                let (y_next, f_new) = adams8_step(&y, jd, h, &hist, &state, &conf);
                state.history.push_front(f_new);
                y = y_next;
            }
            jd += h;
        }

        let mut next = from_dof(&y, &state, conf.figure);
        next.jt_epoch = (state.jt_epoch + h * substeps as f64).round();
        next.delta_t = 0.0;

        let mut r: Vec<_> = next.bodies.iter().map(|b| b.position).collect();
        let mut v: Vec<_> = next.bodies.iter().map(|b| b.velocity).collect();
        let mu: Vec<_> = next.bodies.iter().map(|b| b.mu).collect();
        ssie_bodies::dynamics::adjust_barycenter(&mut r, &mut v, &mu);
        for (i, b) in next.bodies.iter_mut().enumerate() {
            b.position = r[i];
            b.velocity = v[i];
        }

        self.latest = Some(next);
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
    }

    impl DeInitialConditions for FixedTable {
        fn rows(&self) -> &[DeRow] {
            &self.rows
        }
        fn first_jd(&self) -> f64 {
            self.rows.first().unwrap().jd_tdb
        }
        fn last_jd(&self) -> f64 {
            self.rows.last().unwrap().jd_tdb
        }
    }

    fn two_body_table() -> FixedTable {
        let mut bodies = zero_bodies();
        bodies[Body::Earth.integration_index()].position = DVec3::new(1.0, 0.0, 0.0);
        bodies[Body::Earth.integration_index()].velocity = DVec3::new(0.0, Body::Sun.gravitational_parameter().sqrt(), 0.0);
        FixedTable {
            rows: vec![DeRow { jd_tdb: 2451545.0, bodies, libration: LibrationState::default() }],
        }
    }

    #[test]
    fn test_first_get_reseeds_and_caches() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut day = DayIntegrator::new(&table, conf);
        let state = day.get(2451546.0);
        assert_eq!(state.jt_epoch, 2451546.0);
    }

    #[test]
    fn test_repeated_get_is_cached_and_bit_identical() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut day = DayIntegrator::new(&table, conf);
        let a = day.get(2451548.0);
        let b = day.get(2451548.0);
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_advance_and_reverse_clears_history() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut day = DayIntegrator::new(&table, conf);
        day.get(2451550.0);
        // stepping backward past a direction reversal must not panic and
        // must still land exactly on the requested day.
        let back = day.get(2451547.0);
        assert_eq!(back.jt_epoch, 2451547.0);
    }

    #[test]
    fn test_far_jump_triggers_reseed() {
        let table = two_body_table();
        let conf = IntegrationConf { figure: false, relativity: false, ..Default::default() };
        let mut day = DayIntegrator::new(&table, conf);
        day.get(2451546.0);
        let far = day.get(2451545.0 + 400.0);
        assert_eq!(far.jt_epoch, 2451545.0 + 400.0);
    }
}
