/*
 * Copyright (c) 2023. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use ssie::prelude::*;
use ssie_time::TimeCorrelator;

fn main() {
    let correlator =
        TimeCorrelator::new(vec![[2451544.5, 0.5], [2460676.5, 0.4]], vec![[2451544.5, 0.0], [2460676.5, -0.05]]).unwrap();

    let tai = Timestamp::new(2451545.0, Format::Julian, TimeScale::Tai);
    let tdt = tai.to_scale(TimeScale::Tdt, &correlator);
    let tdb = tai.to_scale(TimeScale::Tdb, &correlator);

    println!("TAI: {:.6} JD", tai.julian_value());
    println!("TDT: {:.6} JD", tdt.julian_value());
    println!("TDB: {:.6} JD", tdb.julian_value());

    let date = GregorianDate::new(2000, 1, 1, 12, 0, 0.0).unwrap();
    println!("\n{date:?} is JD {:.6}", date.to_julian());

    let span = SpanSpec { start: Some(tai.julian_value()), end: Some(tai.julian_value() + 4.0), step: Some(1.0) };
    let time_parameters = TimeParameters::from_numeric_span(TimeParamsMode::SpanJulian, span, TimeScale::Tai).unwrap();
    println!("\nSpan expands to {} steps: {:?}", time_parameters.to_julian_list().len(), time_parameters.to_julian_list());
}
