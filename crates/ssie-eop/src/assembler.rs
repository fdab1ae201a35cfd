/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Assembles the per-timestep Earth Orientation Parameters from the time
//! correlator, the tabulated polar-motion series and the IAU-1980
//! nutation/sidereal-time formulas.

use ssie_math::constants::f64::{DAYS_PER_JULIAN_CENTURY, J2000_JULIAN_DATE};
use ssie_math::interpolate::Table;
use ssie_math::types::units::{Degrees, Radians};
use ssie_time::{TimeCorrelator, TimeScale, Timestamp};

use crate::nutation::{mean_obliquity_iau1980, nutation_iau1980};
use crate::sidereal::{gast_classical, gmst_iau1982};

/// Earth Orientation Parameters for a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EopParams {
    pub ut1: Timestamp,
    pub tdb: Timestamp,
    /// Polar motion x-coordinate, degrees.
    pub polar_motion_x: Degrees,
    /// Polar motion y-coordinate, degrees.
    pub polar_motion_y: Degrees,
    /// True obliquity of the ecliptic, ε = ε₀ + Δε, degrees.
    pub obliquity: Degrees,
    /// Nutation in longitude, Δψ, degrees.
    pub nutation_longitude: Degrees,
    /// Nutation in obliquity, Δε, degrees.
    pub nutation_obliquity: Degrees,
    pub gmst: Radians,
    pub gast: Radians,
}

/// Assembles [`EopParams`] for an arbitrary input timestamp, given the
/// time correlator (C2) and the polar-motion table `[jd, dx_arcsec,
/// dy_arcsec]` (C1).
#[derive(Debug, Clone)]
pub struct EopAssembler {
    correlator: TimeCorrelator,
    polar_motion: Table<3>,
}

impl EopAssembler {
    pub fn new(correlator: TimeCorrelator, polar_motion: Table<3>) -> Self {
        Self { correlator, polar_motion }
    }

    pub fn assemble(&self, time: Timestamp) -> EopParams {
        let ut1 = time.to_scale(TimeScale::Ut1, &self.correlator);
        let tdb = time.to_scale(TimeScale::Tdb, &self.correlator);

        let row = self.polar_motion.lookup(ut1.julian_value(), true);
        let polar_motion_x = row[1] / 3600.0;
        let polar_motion_y = row[2] / 3600.0;

        let t_tdb = (tdb.julian_value() - J2000_JULIAN_DATE) / DAYS_PER_JULIAN_CENTURY;
        let nut = nutation_iau1980(t_tdb);
        let mean_obliquity_deg = mean_obliquity_iau1980(t_tdb);
        let nutation_longitude = nut.longitude.to_degrees();
        let nutation_obliquity = nut.obliquity.to_degrees();
        let obliquity = mean_obliquity_deg + nutation_obliquity;

        let gmst = gmst_iau1982(ut1.julian_value());
        let gast = gast_classical(gmst, nut.longitude, mean_obliquity_deg.to_radians());

        EopParams {
            ut1,
            tdb,
            polar_motion_x,
            polar_motion_y,
            obliquity,
            nutation_longitude,
            nutation_obliquity,
            gmst,
            gast,
        }
    }
}
