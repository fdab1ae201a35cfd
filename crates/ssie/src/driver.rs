/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The computation driver (spec component C15): per-timestep, per-target
//! orchestration tying together the time correlator, EOP assembler,
//! integration engine, target dispatcher, correction pipeline and frame
//! graph, and the public `compute` entry point (spec §6).

use std::cell::RefCell;
use std::collections::HashMap;

use glam::DVec3;
use log::debug;
use ssie_eop::EopAssembler;
use ssie_frames::{BodyState, FrameCenter, FrameOrientation, ObserverLocation, SolarParams, StateVector};
use ssie_integrator::{IntegrationConf, IntegrationEngine};
use ssie_time::{Format, TimeScale, Timestamp};

use crate::config::{CorrectionType, TimeParameters};
use crate::data_loaders::{DeInitialConditions, HipparcosCatalogue};
use crate::errors::ComputeError;
use crate::observer::ObserverConfig;
use crate::target::{au_to_m, raw_heliocentric_state, Target};

/// One `(center, orientation)` -> state map, populated by [`ssie_frames::get_all`].
pub type StateMap = HashMap<(FrameCenter, FrameOrientation), StateVector>;

/// The four state maps `compute` reports for a single target at a single
/// timestep (spec §6 `TargetResults`).
#[derive(Debug, Clone)]
pub struct TargetResults {
    pub state_map_raw: StateMap,
    pub state_map_light_time: StateMap,
    pub state_map_aberration_cla: StateMap,
    pub state_map_aberration_rel: StateMap,
}

/// A single requested timestamp's full result set (spec §6 `TimeStepResults`).
#[derive(Debug, Clone)]
pub struct TimeStepResults {
    pub time_stamp: Timestamp,
    pub targets: Vec<Target>,
    pub results: Vec<TargetResults>,
}

/// The `compute` configuration surface (spec §6 `ComputationInfo`).
pub struct ComputationInfo<'a, T: DeInitialConditions, H: HipparcosCatalogue> {
    pub time_parameters: TimeParameters,
    pub corrections: Vec<CorrectionType>,
    pub observer: Option<ObserverConfig>,
    pub target_list: Vec<Target>,
    pub de_table: &'a T,
    pub catalogue: &'a H,
    pub eop: EopAssembler,
    pub conf: IntegrationConf,
}

impl<'a, T: DeInitialConditions, H: HipparcosCatalogue> ComputationInfo<'a, T, H> {
    fn has(&self, correction: CorrectionType) -> bool {
        self.corrections.contains(&correction)
    }
}

/// Builds [`SolarParams`] from a single timestep's integrated point
/// masses (spec §4.12 "Compute SolarParams ... by differencing
/// point-mass states from the Sun's").
///
/// `ssie-frames`'s center-translation edges add these fields as offsets
/// walking outward from Heliocenter (`r_new = r_old + offset`), so each
/// field must carry the *old origin's* position in the *new* frame, not
/// the naive heliocentric position of the new origin — e.g. `ssb` is the
/// Sun's own (barycentric) position, and `geocenter`/`emb` are the Sun's
/// position relative to that body, not the reverse. `moon` is pure
/// output data (no frame center exists for it) and is given as the
/// literal heliocentric position the spec data model describes.
fn build_solar_params(conf: &IntegrationConf, integration: &ssie_integrator::IntegrationState) -> SolarParams {
    let sun = integration.body(conf.sun);
    let earth = integration.body(conf.earth);
    let moon = integration.body(conf.moon);

    let mu_sum = earth.mu + moon.mu;
    let emb_position = (earth.position * earth.mu + moon.position * moon.mu) / mu_sum;
    let emb_velocity = (earth.velocity * earth.mu + moon.velocity * moon.mu) / mu_sum;

    SolarParams {
        ssb: BodyState { position: sun.position, velocity: sun.velocity },
        geocenter: BodyState { position: sun.position - earth.position, velocity: sun.velocity - earth.velocity },
        emb: BodyState { position: sun.position - emb_position, velocity: sun.velocity - emb_velocity },
        moon: BodyState { position: moon.position - sun.position, velocity: moon.velocity - sun.velocity },
    }
}

fn expand(state: &StateVector, eop: &ssie_eop::EopParams, solar: &SolarParams, observer: Option<&ObserverLocation>) -> StateMap {
    ssie_frames::get_all(state, eop, solar, observer).into_iter().collect()
}

/// Runs the full per-timestep, per-target pipeline for every requested
/// timestamp (spec §4.12, §6 `compute`).
pub fn compute<T: DeInitialConditions, H: HipparcosCatalogue>(
    info: &ComputationInfo<'_, T, H>,
) -> Result<Vec<TimeStepResults>, ComputeError> {
    let mut engine = IntegrationEngine::new(info.de_table, info.conf);
    let scale = info.time_parameters.scale();
    let jd_list = info.time_parameters.to_julian_list();

    let apply_light_time = info.has(CorrectionType::LightTime);
    let apply_proper_motion = info.has(CorrectionType::ProperMotion);
    let apply_parallax = info.has(CorrectionType::StellarParallax);
    let apply_diurnal = info.has(CorrectionType::DiurnalAberration);

    let mut step_results = Vec::with_capacity(jd_list.len());

    for (i, &jd_src) in jd_list.iter().enumerate() {
        let time_src = Timestamp::new(jd_src, Format::Julian, scale);
        let eop = info.eop.assemble(time_src);
        let jd_tdb = eop.tdb.julian_value();

        debug!("timestep {i}/{} JD_TDB={jd_tdb}", jd_list.len());

        let integration = engine.get(jd_tdb)?;
        let solar = build_solar_params(&info.conf, &integration);
        let sun = integration.body(info.conf.sun);
        let earth = integration.body(info.conf.earth);
        let earth_helio_velocity = earth.velocity - sun.velocity;

        let observer_location = info.observer.as_ref().map(|o| o.location_at(jd_tdb));
        let (output_center, output_orientation) = info
            .observer
            .as_ref()
            .map(|o| (o.output_center, o.output_orientation))
            .unwrap_or((FrameCenter::Geocenter, FrameOrientation::J2000Eq));

        let geocenter_state =
            StateVector::new(FrameCenter::Geocenter, FrameOrientation::J2000Eq, DVec3::ZERO, DVec3::ZERO, time_src);
        let observer_state = ssie_frames::convert(
            &geocenter_state,
            output_center,
            output_orientation,
            &eop,
            &solar,
            observer_location.as_ref(),
        )?;

        let mut source_velocity = earth_helio_velocity;
        if apply_diurnal {
            if let Ok(observer_inertial) = ssie_frames::convert(
                &observer_state,
                FrameCenter::Heliocenter,
                FrameOrientation::J2000Eq,
                &eop,
                &solar,
                observer_location.as_ref(),
            ) {
                source_velocity += observer_inertial.velocity - earth_helio_velocity;
            }
        }

        let observer_helio_position_m = if apply_parallax {
            match ssie_frames::convert(
                &observer_state,
                FrameCenter::Heliocenter,
                FrameOrientation::J2000Eq,
                &eop,
                &solar,
                observer_location.as_ref(),
            ) {
                Ok(helio) => au_to_m(helio.position),
                Err(_) => DVec3::ZERO,
            }
        } else {
            DVec3::ZERO
        };

        let engine_cell = RefCell::new(&mut engine);
        let mut target_results = Vec::with_capacity(info.target_list.len());

        for target in &info.target_list {
            let raw_helio = raw_heliocentric_state(
                target,
                jd_tdb,
                &integration,
                info.catalogue,
                apply_proper_motion,
                apply_parallax,
                observer_helio_position_m,
            )?;
            let raw_in_frame = ssie_frames::convert(
                &raw_helio,
                observer_state.center,
                observer_state.orientation,
                &eop,
                &solar,
                observer_location.as_ref(),
            )?;

            let target_at = |t_prime: f64| -> StateVector {
                let clamped = t_prime.clamp(info.de_table.first_jd(), info.de_table.last_jd());
                let mut eng = engine_cell.borrow_mut();
                let Ok(retarded) = eng.get(clamped) else { return raw_in_frame };
                let Ok(helio) = raw_heliocentric_state(
                    target,
                    clamped,
                    &retarded,
                    info.catalogue,
                    apply_proper_motion,
                    apply_parallax,
                    observer_helio_position_m,
                ) else {
                    return raw_in_frame;
                };
                ssie_frames::convert(
                    &helio,
                    observer_state.center,
                    observer_state.orientation,
                    &eop,
                    &solar,
                    observer_location.as_ref(),
                )
                .unwrap_or(raw_in_frame)
            };

            let correction = if apply_light_time {
                ssie_corrections::correct(&observer_state, jd_tdb, raw_in_frame, target_at, source_velocity)
            } else {
                ssie_corrections::CorrectionResult {
                    raw: raw_in_frame,
                    light_time: raw_in_frame,
                    aberration_classical: raw_in_frame,
                    aberration_relativistic: raw_in_frame,
                }
            };

            target_results.push(TargetResults {
                state_map_raw: expand(&correction.raw, &eop, &solar, observer_location.as_ref()),
                state_map_light_time: expand(&correction.light_time, &eop, &solar, observer_location.as_ref()),
                state_map_aberration_cla: expand(&correction.aberration_classical, &eop, &solar, observer_location.as_ref()),
                state_map_aberration_rel: expand(&correction.aberration_relativistic, &eop, &solar, observer_location.as_ref()),
            });
        }

        step_results.push(TimeStepResults { time_stamp: time_src, targets: info.target_list.clone(), results: target_results });
    }

    Ok(step_results)
}
