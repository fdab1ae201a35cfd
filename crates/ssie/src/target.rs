/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Target dispatch (spec component C12): routes a [`Target`] to either
//! the point-mass state already produced by the integration engine, or
//! the Hipparcos propagator, producing a heliocentric J2000 equatorial
//! [`StateVector`] either way so the frame graph can take it from there.

use glam::DVec3;
use ssie_bodies::{Body, PointMass};
use ssie_frames::{FrameCenter, FrameOrientation, StateVector};
use ssie_integrator::IntegrationState;
use ssie_time::{Format, TimeScale, Timestamp};
use ssie_units::constants::f64::physical::{AU_KM, AU_M, SECONDS_PER_DAY};

use crate::data_loaders::HipparcosCatalogue;
use crate::errors::DomainError;

/// A tagged union of the three kinds of thing `compute` can report a
/// state vector for (spec §3 `Target`).
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// One of the eleven integrated point masses.
    Ssie(Body),
    /// A Hipparcos catalogue entry, by name, resolved through the
    /// caller-supplied [`HipparcosCatalogue`].
    Star(String),
    /// An SGP4 satellite placeholder (spec §1 explicit non-goal: no
    /// SGP4 propagation). Always rejects at dispatch time.
    Satellite(String),
}

/// Arcseconds per radian, used to turn a Hipparcos parallax back into a
/// heliocentric distance.
const ARCSEC_PER_RAD: f64 = 360.0 * 3600.0 / std::f64::consts::TAU;

/// Julian days per Julian year, the Hipparcos proper-motion time unit.
const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

fn unit_vectors(ra: f64, de: f64) -> (DVec3, DVec3, DVec3) {
    let (sin_ra, cos_ra) = ra.sin_cos();
    let (sin_de, cos_de) = de.sin_cos();
    let r = DVec3::new(cos_de * cos_ra, cos_de * sin_ra, sin_de);
    let p = DVec3::new(-sin_ra, cos_ra, 0.0);
    let q = DVec3::new(-sin_de * cos_ra, -sin_de * sin_ra, cos_de);
    (r, p, q)
}

/// Resolves `target`'s heliocentric J2000 equatorial state at `jd_tdb`
/// (spec §4.12 "dispatch to C7-style state extraction or C13 star
/// recipe"). `apply_proper_motion` selects whether a star's position is
/// advanced from its catalogue epoch (`CorrectionType::ProperMotion`
/// requested) or left at the catalogue epoch. `apply_parallax`, when
/// set, shifts the star's apparent direction by annual parallax given
/// the observer's heliocentric position `observer_helio_position_m`
/// (`CorrectionType::StellarParallax`).
pub fn raw_heliocentric_state(
    target: &Target,
    jd_tdb: f64,
    integration: &IntegrationState,
    catalogue: &dyn HipparcosCatalogue,
    apply_proper_motion: bool,
    apply_parallax: bool,
    observer_helio_position_m: DVec3,
) -> Result<StateVector, DomainError> {
    let time = Timestamp::new(jd_tdb, Format::Julian, TimeScale::Tdb);
    match target {
        Target::Ssie(body) => {
            let pm = integration.body(*body);
            Ok(StateVector::new(FrameCenter::Heliocenter, FrameOrientation::J2000Eq, pm.position, pm.velocity, time))
        }
        Target::Star(name) => {
            let entry = catalogue.get(name).ok_or_else(|| DomainError::UnknownStar(name.clone()))?;

            let (ra, de, parallax_arcsec, pm_ra_star, pm_de) = if apply_proper_motion {
                let propagated = ssie_stars::propagate(entry, jd_tdb);
                (propagated.ra, propagated.de, propagated.parallax, propagated.pm_ra_star, propagated.pm_de)
            } else {
                (entry.ra, entry.de, entry.parallax, entry.pm_ra_star, entry.pm_de)
            };

            let (mut direction, p_hat, q_hat) = unit_vectors(ra, de);
            if apply_parallax {
                direction =
                    ssie_stars::apply_annual_parallax(direction, parallax_arcsec, observer_helio_position_m);
            }

            // distance(au) = 1 / parallax(rad); Hipparcos parallaxes are
            // always strictly positive for catalogued stars.
            let parallax_rad = parallax_arcsec / ARCSEC_PER_RAD;
            let distance_au = 1.0 / parallax_rad;
            let position = direction * distance_au;

            let radial_au_per_day = entry.radial_velocity * SECONDS_PER_DAY / AU_KM;
            let pm_ra_rad_per_day = (pm_ra_star / ARCSEC_PER_RAD) / DAYS_PER_JULIAN_YEAR;
            let pm_de_rad_per_day = (pm_de / ARCSEC_PER_RAD) / DAYS_PER_JULIAN_YEAR;
            let velocity = direction * radial_au_per_day
                + p_hat * (distance_au * pm_ra_rad_per_day)
                + q_hat * (distance_au * pm_de_rad_per_day);

            Ok(StateVector::new(FrameCenter::Heliocenter, FrameOrientation::J2000Eq, position, velocity, time))
        }
        Target::Satellite(name) => {
            Err(DomainError::UnimplementedTargetType(format!("SGP4 satellite `{name}`")))
        }
    }
}

/// Converts a heliocentric-equatorial position in astronomical units to
/// metres, used when a caller needs SI units for a position the frame
/// graph itself keeps in au (spec §4.12 "converting au -> m").
pub fn au_to_m(position_au: DVec3) -> DVec3 {
    position_au * AU_M
}
