/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The error taxonomy of spec §7: `DomainError`, `TableError` and
//! `ConfigError`, plus [`ComputeError`], the union `compute` returns.

use thiserror::Error;

/// JD outside the DE table, a malformed Gregorian span or date, or an
/// unimplemented target type (spec §7 `DomainError`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("requested JD {requested} is outside the DE initial-condition table range [{first}, {last}]")]
    JdOutOfRange { requested: f64, first: f64, last: f64 },
    #[error("Gregorian span has an undefined endpoint: {0}")]
    UndefinedGregorianEndpoint(String),
    #[error("malformed Gregorian date: {0}")]
    MalformedGregorianDate(String),
    #[error("target type `{0}` is not implemented")]
    UnimplementedTargetType(String),
    #[error("no catalogue entry named `{0}`")]
    UnknownStar(String),
}

/// An empty table passed to the tabulated interpolator (spec §7
/// `TableError`). Prevented by construction in `ssie-math`; this variant
/// exists so the `ssie` crate's own error union can carry it without a
/// direct dependency on `ssie-math`'s internal error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("table has no rows")]
    Empty,
}

/// `SPAN_*` time parameters missing `start`, `end` or `step` (spec §7
/// `ConfigError`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("SPAN_* time parameters require `{field}`")]
    MissingSpanField { field: &'static str },
    #[error("span step must be non-zero and share the sign of (end - start)")]
    InvalidStep,
}

/// The error union returned by [`crate::driver::compute`]: every fallible
/// operation in the driver's call graph surfaces here (spec §7 "Recovery
/// policy" — all four taxa abort the current `compute` call immediately,
/// none is retried internally).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComputeError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Integrator(#[from] ssie_integrator::IntegratorError),
    #[error(transparent)]
    Frame(#[from] ssie_frames::FrameError),
}
