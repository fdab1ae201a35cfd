/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use glam::DVec3;
use ssie_eop::EopAssembler;
use ssie_frames::{BodyState, FrameCenter, FrameOrientation, ObserverLocation, SolarParams, StateVector};
use ssie_math::interpolate::Table;
use ssie_time::{Format, TimeCorrelator, TimeScale, Timestamp};

fn main() {
    // Run registered benchmarks.
    divan::main();
}

fn eop_assembler() -> EopAssembler {
    EopAssembler::new(
        TimeCorrelator::new(vec![[2451544.5, 0.5], [2460000.5, 0.4]], vec![[2451544.5, 0.0], [2460000.5, -0.05]]).unwrap(),
        Table::new(vec![[2451544.5, 0.1, 0.2], [2460000.5, 0.15, 0.25]]).unwrap(),
    )
}

fn zero_solar() -> SolarParams {
    let zero = BodyState { position: DVec3::ZERO, velocity: DVec3::ZERO };
    SolarParams { ssb: zero, geocenter: zero, moon: zero, emb: zero }
}

fn ground_station() -> ObserverLocation {
    ObserverLocation { efi_position: DVec3::new(6.378e-5, 0.0, 0.0), latitude_rad: 0.0, longitude_rad: 0.0 }
}

#[divan::bench]
fn convert_heliocentric_to_topocentric_enu() {
    let eop = eop_assembler();
    let params = eop.assemble(Timestamp::new(2459000.5, Format::Julian, TimeScale::Tdb));
    let solar = zero_solar();
    let observer = ground_station();
    let state = StateVector::new(
        FrameCenter::Heliocenter,
        FrameOrientation::J2000Eq,
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, 0.017, 0.0),
        params.tdb,
    );
    ssie_frames::convert(divan::black_box(&state), FrameCenter::Topocenter, FrameOrientation::Enu, &params, &solar, Some(&observer))
        .ok();
}

#[divan::bench]
fn get_all_from_geocentric_state() {
    let eop = eop_assembler();
    let params = eop.assemble(Timestamp::new(2459000.5, Format::Julian, TimeScale::Tdb));
    let solar = zero_solar();
    let state = StateVector::new(
        FrameCenter::Geocenter,
        FrameOrientation::J2000Eq,
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(-0.017, 0.0, 0.0),
        params.tdb,
    );
    ssie_frames::get_all(divan::black_box(&state), &params, &solar, None);
}
