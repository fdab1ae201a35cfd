/*
 * Copyright (c) 2024. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! IAU-1980 nutation and sidereal time, and the Earth Orientation
//! Parameters assembler that combines them with polar motion into the
//! per-timestep [`assembler::EopParams`] consumed by the frame graph.

pub mod assembler;
pub mod nutation;
pub mod sidereal;

pub use assembler::{EopAssembler, EopParams};
pub use nutation::Nutation;
