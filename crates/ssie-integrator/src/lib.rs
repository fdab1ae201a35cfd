/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The numerical integration engine (spec components C9-C11): an RK4 /
//! 8th-order Adams-Bashforth-Moulton stepper, a per-day cache with
//! reseeding, and the public cached entry point the computation driver
//! calls for every requested epoch.

pub mod conf;
pub mod day;
pub mod engine;
pub mod errors;
pub mod history;
pub mod state;
pub mod stepper;

pub use conf::IntegrationConf;
pub use day::DayIntegrator;
pub use engine::IntegrationEngine;
pub use errors::IntegratorError;
pub use history::DerivativeHistory;
pub use state::{DeInitialConditions, DeRow, IntegrationState, PointMassState};
