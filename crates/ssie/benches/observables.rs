/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use glam::DVec3;
use ssie_bodies::libration::LibrationState;
use ssie_bodies::Body;
use ssie_eop::EopAssembler;
use ssie_frames::ObserverLocation;
use ssie_integrator::{DeInitialConditions, DeRow, IntegrationConf, PointMassState};
use ssie_math::interpolate::Table;
use ssie_stars::HipparcosEntry;
use ssie_time::TimeCorrelator;

use ssie::config::{CorrectionType, SpanSpec, TimeParameters, TimeParamsMode};
use ssie::driver::{compute, ComputationInfo};
use ssie::data_loaders::HipparcosCatalogue;
use ssie::observer::ObserverConfig;
use ssie::target::Target;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

struct Ephemeris {
    rows: Vec<DeRow>,
    first: f64,
    last: f64,
}

impl DeInitialConditions for Ephemeris {
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

fn ephemeris() -> Ephemeris {
    let bodies: Vec<PointMassState> = (0..11)
        .map(|i| {
            let body = ssie_bodies::INTEGRATED[i];
            PointMassState::new(body, DVec3::new(i as f64 * 0.3, 0.0, 0.0), DVec3::new(0.0, 0.01, 0.0))
        })
        .collect();
    Ephemeris { rows: vec![DeRow { jd_tdb: 2451545.0, bodies, libration: LibrationState::default() }], first: 2451000.0, last: 2452000.0 }
}

struct EmptyCatalogue;
impl HipparcosCatalogue for EmptyCatalogue {
    fn get(&self, _name: &str) -> Option<&HipparcosEntry> {
        None
    }
}

fn eop_assembler() -> EopAssembler {
    EopAssembler::new(
        TimeCorrelator::new(vec![[2451000.0, 0.0], [2452000.0, 0.0]], vec![[2451000.0, 0.0], [2452000.0, 0.0]]).unwrap(),
        Table::new(vec![[2451000.0, 0.0, 0.0], [2452000.0, 0.0, 0.0]]).unwrap(),
    )
}

#[divan::bench]
fn compute_single_target_with_corrections() {
    let table = ephemeris();
    let catalogue = EmptyCatalogue;
    let spec = SpanSpec { start: Some(2451545.0), end: Some(2451548.0), step: Some(1.0) };
    let time_parameters = TimeParameters::from_numeric_span(TimeParamsMode::SpanJulian, spec, ssie_time::TimeScale::Tdb).unwrap();
    let info = ComputationInfo {
        time_parameters,
        corrections: vec![CorrectionType::LightTime, CorrectionType::StellarAberration, CorrectionType::DiurnalAberration],
        observer: Some(ObserverConfig::static_at(ObserverLocation {
            efi_position: DVec3::new(6.378e-5, 0.0, 0.0),
            latitude_rad: 0.0,
            longitude_rad: 0.0,
        })),
        target_list: vec![Target::Ssie(Body::Mars)],
        de_table: &table,
        catalogue: &catalogue,
        eop: eop_assembler(),
        conf: IntegrationConf { figure: false, relativity: false, ..Default::default() },
    };

    compute(divan::black_box(&info)).ok();
}
