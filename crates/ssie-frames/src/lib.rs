/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The reference-frame conversion graph (spec component C6):
//! `J2000_EQ <-> MOD <-> TOD <-> PEF <-> EFI <-> ENU`, center
//! translations between `HELIOCENTER, SSB, EMB, GEOCENTER, TOPOCENTER`,
//! and the [`graph::get_all`] expansion the computation driver uses to
//! populate every `(center, orientation)` pair of a result.

pub mod errors;
pub mod graph;
pub mod rotations;
pub mod translations;
pub mod types;

pub use errors::FrameError;
pub use graph::{convert, get_all, supported_pairs};
pub use types::{BodyState, FrameCenter, FrameOrientation, ObserverLocation, SolarParams, StateVector};
