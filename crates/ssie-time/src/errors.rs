/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimeError {
    #[error("UT1-TAI table must contain at least one row")]
    EmptyUt1TaiTable,
    #[error("UT1-UTC table must contain at least one row")]
    EmptyUt1UtcTable,
}
