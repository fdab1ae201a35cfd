/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use ssie_time::{Format, TimeCorrelator, TimeScale, Timestamp};

fn main() {
    // Run registered benchmarks.
    divan::main();
}

fn correlator() -> TimeCorrelator {
    TimeCorrelator::new(vec![[2451544.5, 0.5], [2451545.5, 0.4]], vec![[2451544.5, 0.0], [2451545.5, -0.05]]).unwrap()
}

#[divan::bench]
fn to_format() {
    let t = Timestamp::new(divan::black_box(2451545.0), Format::Julian, TimeScale::Tdb);
    t.to_format(Format::Mjd);
}

#[divan::bench]
fn to_scale(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| (Timestamp::new(2451545.0, Format::Julian, TimeScale::Tdb), correlator()))
        .bench_values(|(t, c)| t.to_scale(divan::black_box(TimeScale::Tai), &c));
}
