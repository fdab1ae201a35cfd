/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::types::{FrameCenter, FrameOrientation};

/// A requested (center, orientation) conversion the frame graph does not
/// support: a rotation requested across a non-inertial center without
/// first translating to an inertial one (spec §4.4 routing invariant),
/// or a translation requiring an EFI-position input that was not
/// supplied.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameError {
    #[error(
        "cannot rotate orientation from {from:?} to {to:?} while at non-inertial center {center:?}; \
         translate to Heliocenter, Ssb or Geocenter first"
    )]
    UnsupportedRotationAtCenter {
        center: FrameCenter,
        from: FrameOrientation,
        to: FrameOrientation,
    },
    #[error("{center:?} is only reachable with orientation {required:?}, not {requested:?}")]
    UnsupportedOrientationAtCenter {
        center: FrameCenter,
        required: FrameOrientation,
        requested: FrameOrientation,
    },
    #[error("topocentric conversion requested without an observer location")]
    MissingObserverLocation,
}
