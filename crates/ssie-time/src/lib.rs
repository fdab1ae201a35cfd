/*
 * Copyright (c) 2024. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Astronomical time scales and the tabulated correlator that converts
//! between them.

pub mod correlator;
pub mod errors;
pub mod time_scales;
pub mod timestamp;

pub use correlator::TimeCorrelator;
pub use errors::TimeError;
pub use time_scales::TimeScale;
pub use timestamp::{Format, Timestamp};
