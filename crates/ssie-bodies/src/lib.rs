/*
 * Copyright (c) 2024. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Point-mass body definitions for the integrated bodies (Sun, the nine
//! planets and the Moon), plus the non-spherical figure and libration
//! constants consumed by the Earth/Moon perturbation model.

pub mod dynamics;
pub mod figure;
pub mod libration;
pub mod tides;

use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NaifId(pub i32);

impl Display for NaifId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implemented by every body known to the integrator.
pub trait Origin {
    fn id(&self) -> NaifId;
    fn name(&self) -> &'static str;
}

pub trait PointMass: Origin {
    /// Gravitational parameter μ, in au³/day².
    fn gravitational_parameter(&self) -> f64;
}

#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("no body with name `{0}` is known")]
pub struct UnknownBodyName(String);

/// The eleven point masses integrated by the engine, indexed in the
/// fixed order `0=Sun, 1=Mercury, 2=Venus, 3=Earth, 4=Moon, 5=Mars,
/// 6=Jupiter, 7=Saturn, 8=Uranus, 9=Neptune, 10=Pluto`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Body {
    #[default]
    Sun = 0,
    Mercury = 1,
    Venus = 2,
    Earth = 3,
    Moon = 4,
    Mars = 5,
    Jupiter = 6,
    Saturn = 7,
    Uranus = 8,
    Neptune = 9,
    Pluto = 10,
}

/// Bodies in integration-index order, `INTEGRATED[i].integration_index() == i`.
pub const INTEGRATED: [Body; 11] = [
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Earth,
    Body::Moon,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub fn integration_index(&self) -> usize {
        *self as usize
    }

    pub fn from_name(name: &str) -> Result<Body, UnknownBodyName> {
        INTEGRATED
            .iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| UnknownBodyName(name.to_string()))
    }
}

impl Origin for Body {
    fn id(&self) -> NaifId {
        match self {
            Body::Sun => NaifId(10),
            Body::Mercury => NaifId(199),
            Body::Venus => NaifId(299),
            Body::Earth => NaifId(399),
            Body::Moon => NaifId(301),
            Body::Mars => NaifId(499),
            Body::Jupiter => NaifId(599),
            Body::Saturn => NaifId(699),
            Body::Uranus => NaifId(799),
            Body::Neptune => NaifId(899),
            Body::Pluto => NaifId(999),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

/// Gravitational parameters, au³/day², in JPL-DE-style planetary-ephemeris
/// units (values of this order are published with each DE release; the
/// exact digits vary release to release and are not given by the
/// component contract, unlike `au`, `c`, `k` and the J2000 obliquity).
impl PointMass for Body {
    fn gravitational_parameter(&self) -> f64 {
        match self {
            Body::Sun => 2.9591220828559093e-4,
            Body::Mercury => 4.9125e-11,
            Body::Venus => 7.2434e-10,
            Body::Earth => 8.887692445125634e-10,
            Body::Moon => 1.0931894624024232e-11,
            Body::Mars => 9.549535105779258e-11,
            Body::Jupiter => 2.825345842083778e-7,
            Body::Saturn => 8.459715185680659e-8,
            Body::Uranus => 1.2920249167819693e-8,
            Body::Neptune => 1.5243589007842762e-8,
            Body::Pluto => 2.175096464893358e-12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrated_order_matches_indices() {
        for (i, body) in INTEGRATED.iter().enumerate() {
            assert_eq!(body.integration_index(), i);
        }
        assert_eq!(Body::Sun.integration_index(), 0);
        assert_eq!(Body::Earth.integration_index(), 3);
        assert_eq!(Body::Moon.integration_index(), 4);
    }

    #[test]
    fn test_from_name_round_trips() {
        for body in INTEGRATED {
            assert_eq!(Body::from_name(body.name()).unwrap(), body);
        }
        assert!(Body::from_name("Rupert").is_err());
    }

    #[test]
    fn test_ids_are_naif_standard() {
        assert_eq!(Body::Earth.id(), NaifId(399));
        assert_eq!(Body::Moon.id(), NaifId(301));
    }

    #[test]
    fn test_mu_is_positive_and_sun_dominates() {
        for body in INTEGRATED {
            assert!(body.gravitational_parameter() > 0.0);
        }
        assert!(Body::Sun.gravitational_parameter() > Body::Jupiter.gravitational_parameter());
    }
}
