/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! External collaborator boundaries (spec §1/§3.1, §6 "Tabulated data
//! consumed"): the engine is loader-agnostic, consuming the DE
//! initial-condition table, the Hipparcos catalogue, and the EOP/polar-
//! motion tables only through these interfaces. No concrete file-format
//! parser lives in this crate.

pub use ssie_integrator::DeInitialConditions;
use ssie_stars::HipparcosEntry;

/// A resolved Hipparcos reduced catalogue: a map from star name to
/// catalogue entry (spec §6 "Hipparcos reduced catalogue"). Loading the
/// catalogue from its source file format is out of scope (spec §1); this
/// trait is the only interface `ssie` consumes it through.
pub trait HipparcosCatalogue {
    fn get(&self, name: &str) -> Option<&HipparcosEntry>;
}
