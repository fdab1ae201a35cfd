/*
 * Copyright (c) 2023. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! SGP4 satellites (like the ISS) are an explicit non-goal of this
//! engine (spec §1); this walkthrough instead computes the Moon's
//! topocentric position and velocity for a ground station, showing the
//! shape of `ssie::compute`'s result and how a `Target::Satellite`
//! request surfaces as a `DomainError` rather than a silent no-op.

use glam::DVec3;

use ssie::prelude::*;
use ssie_bodies::libration::LibrationState;
use ssie_bodies::INTEGRATED;
use ssie_integrator::{DeRow, PointMassState};
use ssie_math::interpolate::Table;

struct ExampleEphemeris {
    rows: Vec<DeRow>,
    first: f64,
    last: f64,
}

impl DeInitialConditions for ExampleEphemeris {
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

struct NoStars;
impl HipparcosCatalogue for NoStars {
    fn get(&self, _name: &str) -> Option<&ssie_stars::HipparcosEntry> {
        None
    }
}

fn single_row_ephemeris() -> ExampleEphemeris {
    let bodies: Vec<PointMassState> = INTEGRATED
        .iter()
        .enumerate()
        .map(|(i, &body)| PointMassState::new(body, DVec3::new(i as f64 * 0.4, 0.0, 0.0), DVec3::new(0.0, 0.01, 0.0)))
        .collect();
    ExampleEphemeris {
        rows: vec![DeRow { jd_tdb: 2451545.0, bodies, libration: LibrationState::default() }],
        first: 2451000.0,
        last: 2452000.0,
    }
}

fn eop() -> ssie_eop::EopAssembler {
    ssie_eop::EopAssembler::new(
        ssie_time::TimeCorrelator::new(vec![[2451000.0, 0.0], [2452000.0, 0.0]], vec![[2451000.0, 0.0], [2452000.0, 0.0]]).unwrap(),
        Table::new(vec![[2451000.0, 0.0, 0.0], [2452000.0, 0.0, 0.0]]).unwrap(),
    )
}

fn main() {
    let table = single_row_ephemeris();
    let catalogue = NoStars;
    let observer = ObserverConfig::static_at(ssie_frames::ObserverLocation {
        efi_position: DVec3::new(6.378e-5, 0.0, 0.0),
        latitude_rad: 41f64.to_radians(),
        longitude_rad: (-4f64).to_radians(),
    });

    let span = SpanSpec { start: Some(2451545.0), end: Some(2451545.0), step: Some(1.0) };
    let time_parameters = TimeParameters::from_numeric_span(TimeParamsMode::SpanJulian, span, TimeScale::Tdb).unwrap();

    let moon_info = ComputationInfo {
        time_parameters: time_parameters.clone(),
        corrections: vec![CorrectionType::LightTime, CorrectionType::StellarAberration, CorrectionType::DiurnalAberration],
        observer: Some(observer.clone()),
        target_list: vec![Target::Ssie(Body::Moon)],
        de_table: &table,
        catalogue: &catalogue,
        eop: eop(),
        conf: Default::default(),
    };

    let steps = compute(&moon_info).expect("Moon is always a supported target");
    let topocentric = &steps[0].results[0].state_map_aberration_cla[&(FrameCenter::Topocenter, FrameOrientation::Enu)];
    println!("Moon, topocentric ENU, JD {}", steps[0].time_stamp.julian_value());
    println!("=============================");
    println!("Position: {:?} au", topocentric.position);
    println!("Velocity: {:?} au/day", topocentric.velocity);

    let satellite_info = ComputationInfo {
        time_parameters,
        corrections: vec![],
        observer: Some(observer),
        target_list: vec![Target::Satellite("ISS (ZARYA)".to_string())],
        de_table: &table,
        catalogue: &catalogue,
        eop: eop(),
        conf: Default::default(),
    };

    match compute(&satellite_info) {
        Ok(_) => unreachable!("SGP4 satellites are an explicit non-goal"),
        Err(err) => println!("\nRequesting the ISS as a target fails as expected: {err}"),
    }
}
