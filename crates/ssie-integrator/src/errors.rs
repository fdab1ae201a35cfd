/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntegratorError {
    #[error("requested JD {requested} TDB is outside the DE initial-condition table range [{first}, {last}]")]
    OutOfRange { requested: f64, first: f64, last: f64 },
    #[error("initial-condition table has no rows")]
    EmptyTable,
}
