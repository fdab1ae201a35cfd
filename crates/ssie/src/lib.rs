/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The Solar System Integration Engine: a cached numerical-integration
//! engine producing solar-system body and star apparent positions for an
//! arbitrary observer (spec §1). This crate is the public entry point
//! (spec components C12, C15): it wires the time correlator, EOP
//! assembler, integration engine, target dispatcher and correction
//! pipeline together behind a single [`driver::compute`] call.

pub mod config;
pub mod data_loaders;
pub mod driver;
pub mod errors;
pub mod gregorian;
pub mod observer;
pub mod target;

pub mod prelude;
