/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Center-translation edges of the frame graph: `HELIOCENTER <-> SSB <->
//! EMB <-> GEOCENTER <-> TOPOCENTER`.
//!
//! Every edge here is expressed in the J2000 equatorial orientation
//! (the orientation [`crate::types::SolarParams`] is given in), except
//! the `GEOCENTER <-> TOPOCENTER` edge, which is expressed in EFI (the
//! orientation an observer's fixed position is naturally given in). The
//! [`crate::graph::FrameGraph`] rotates to the right orientation before
//! calling these and back afterwards.

use glam::DVec3;

use crate::types::{BodyState, ObserverLocation, SolarParams};

/// `(position, velocity)` offset to add when moving the frame center
/// from `HELIOCENTER` to `SSB`, J2000 equatorial.
pub fn helio_to_ssb(solar: &SolarParams) -> BodyState {
    solar.ssb
}

/// `SSB` to `EMB`, J2000 equatorial.
pub fn ssb_to_emb(solar: &SolarParams) -> BodyState {
    BodyState {
        position: solar.emb.position - solar.ssb.position,
        velocity: solar.emb.velocity - solar.ssb.velocity,
    }
}

/// `EMB` to `GEOCENTER`, J2000 equatorial.
pub fn emb_to_geocenter(solar: &SolarParams) -> BodyState {
    BodyState {
        position: solar.geocenter.position - solar.emb.position,
        velocity: solar.geocenter.velocity - solar.emb.velocity,
    }
}

/// `GEOCENTER` to `TOPOCENTER`, EFI orientation: the observer's fixed EFI
/// position, zero velocity (the observer is static in the Earth-fixed
/// frame by construction).
pub fn geocenter_to_topocenter(observer: &ObserverLocation) -> DVec3 {
    observer.efi_position
}
