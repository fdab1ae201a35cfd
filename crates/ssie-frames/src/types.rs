/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Frame centers, frame orientations, [`StateVector`], and the
//! per-timestep [`SolarParams`] the center-translation edges consume.

use glam::DVec3;
use ssie_time::Timestamp;

/// The origin a [`StateVector`]'s position and velocity are measured from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FrameCenter {
    Heliocenter,
    Ssb,
    Geocenter,
    Emb,
    Topocenter,
}

/// The basis a [`StateVector`]'s position and velocity are expressed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FrameOrientation {
    B1950Ecl,
    B1950Eq,
    J2000Ecl,
    J2000Eq,
    Mod,
    Tod,
    Teme,
    Pef,
    Efi,
    Enu,
    Peri,
}

/// A position/velocity pair tagged with the (center, orientation) pair it
/// is expressed in and the instant it is valid at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub center: FrameCenter,
    pub orientation: FrameOrientation,
    pub position: DVec3,
    pub velocity: DVec3,
    pub time: Timestamp,
}

impl StateVector {
    pub fn new(
        center: FrameCenter,
        orientation: FrameOrientation,
        position: DVec3,
        velocity: DVec3,
        time: Timestamp,
    ) -> Self {
        Self { center, orientation, position, velocity, time }
    }
}

/// A body's heliocentric J2000 equatorial position/velocity, the unit
/// [`crate::translations`] works in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyState {
    pub position: DVec3,
    pub velocity: DVec3,
}

/// Heliocentric J2000 equatorial states of the Solar-System Barycenter,
/// the Earth geocenter, the Moon, and the Earth-Moon Barycenter, for a
/// single instant, consumed by the center-translation edges of the frame
/// graph (spec component C6).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarParams {
    pub ssb: BodyState,
    pub geocenter: BodyState,
    pub moon: BodyState,
    pub emb: BodyState,
}

/// An observer's fixed position in the Earth-Fixed (EFI) frame, plus the
/// geodetic latitude/longitude used by the EFI<->ENU rotation. The
/// EFI position itself is assumed already produced by the external WGS84
/// converter (out of scope per spec §1); this type only carries it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    pub efi_position: DVec3,
    pub latitude_rad: f64,
    pub longitude_rad: f64,
}
