/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Semantic `f64` aliases used across the engine. These carry no runtime
//! cost but document units at function boundaries the way the rest of the
//! ecosystem does.

pub mod units {
    pub type Radians = f64;
    pub type Degrees = f64;
    pub type Arcseconds = f64;
    pub type Days = f64;
    pub type Seconds = f64;
    pub type JulianCenturies = f64;
    pub type AstronomicalUnits = f64;
    pub type AuPerDay = f64;
}

pub mod julian_dates {
    /// A Julian epoch relative to which a date may be expressed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Epoch {
        JulianDate,
        ModifiedJulianDate,
        J2000,
    }
}
