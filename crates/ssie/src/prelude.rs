/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use crate::config::{CorrectionType, ObserverMode, SpanSpec, TargetType, TimeParameters, TimeParamsMode};
pub use crate::data_loaders::{DeInitialConditions, HipparcosCatalogue};
pub use crate::driver::{compute, ComputationInfo, StateMap, TargetResults, TimeStepResults};
pub use crate::errors::{ComputeError, ConfigError, DomainError, TableError};
pub use crate::gregorian::GregorianDate;
pub use crate::observer::{ObserverConfig, ObserverMotion};
pub use crate::target::Target;

pub use ssie_bodies::Body;
pub use ssie_frames::{FrameCenter, FrameOrientation, StateVector};
pub use ssie_time::{Format, TimeScale, Timestamp};
