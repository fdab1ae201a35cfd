/*
 * Copyright (c) 2024. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The five time scales the correlator interconverts. Unlike the
//! phantom-type-per-scale design this crate is descended from, scale
//! selection here is a runtime value: callers build timestamps against
//! configuration data, not against types known at compile time.

use std::fmt;

/// An astronomical or civil time scale.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum TimeScale {
    /// Barycentric Dynamical Time.
    #[default]
    Tdb,
    /// Terrestrial Dynamical Time (~TT).
    Tdt,
    /// International Atomic Time.
    Tai,
    /// Universal Time.
    Ut1,
    /// Coordinated Universal Time.
    Utc,
}

impl TimeScale {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TimeScale::Tdb => "TDB",
            TimeScale::Tdt => "TDT",
            TimeScale::Tai => "TAI",
            TimeScale::Ut1 => "UT1",
            TimeScale::Utc => "UTC",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeScale::Tdb => "Barycentric Dynamical Time",
            TimeScale::Tdt => "Terrestrial Dynamical Time",
            TimeScale::Tai => "International Atomic Time",
            TimeScale::Ut1 => "Universal Time",
            TimeScale::Utc => "Coordinated Universal Time",
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TimeScale::Tdb, "TDB", "Barycentric Dynamical Time")]
    #[case(TimeScale::Tdt, "TDT", "Terrestrial Dynamical Time")]
    #[case(TimeScale::Tai, "TAI", "International Atomic Time")]
    #[case(TimeScale::Ut1, "UT1", "Universal Time")]
    #[case(TimeScale::Utc, "UTC", "Coordinated Universal Time")]
    fn test_time_scales(
        #[case] scale: TimeScale,
        #[case] abbreviation: &'static str,
        #[case] name: &'static str,
    ) {
        assert_eq!(scale.abbreviation(), abbreviation);
        assert_eq!(scale.name(), name);
        assert_eq!(scale.to_string(), abbreviation);
    }
}
