/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The per-target observational correction pipeline (spec component C14):
//! light-time iteration, then classical and relativistic stellar
//! aberration applied to the light-time-corrected geometry.

pub mod aberration;
pub mod light_time;
pub mod pipeline;

pub use pipeline::{correct, CorrectionResult};
