/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The `compute` configuration surface (spec §6): `TimeParameters` and
//! the four configuration enumerations.

use ssie_time::TimeScale;

use crate::errors::ConfigError;
use crate::gregorian::GregorianDate;

/// How a [`TimeParameters`] value was specified: a regularly-stepped
/// span, or an explicit list, in each case in one of Modified Julian
/// Date, Julian Date, or Gregorian calendar-date representation (spec §6
/// `TimeParamsMode`).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TimeParamsMode {
    SpanMjd,
    SpanJulian,
    SpanGregorian,
    ListMjd,
    ListJulian,
    ListGregorian,
}

impl TimeParamsMode {
    fn is_span(self) -> bool {
        matches!(self, TimeParamsMode::SpanMjd | TimeParamsMode::SpanJulian | TimeParamsMode::SpanGregorian)
    }
}

/// The observational correction the driver should apply for a target
/// (spec §6 `CorrectionType`). `Refraction` is declared but never applied
/// (spec §1 explicit non-goal: no atmospheric refraction model).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CorrectionType {
    Refraction,
    LightTime,
    ProperMotion,
    StellarAberration,
    DiurnalAberration,
    StellarParallax,
}

/// How the observer's position evolves across the requested timestamps
/// (spec §6 `ObserverMode`).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ObserverMode {
    Static,
    Linear,
    Interpolate,
}

/// Which pipeline a [`crate::target::Target`] is dispatched through (spec
/// §6 `TargetType`); carried alongside `Target` mostly for display and
/// catalogue bookkeeping, since `Target` itself already discriminates by
/// variant.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TargetType {
    Ssie,
    StarHipparchus,
    SatelliteSgp4,
}

/// A span's `start`/`end`/`step`, collected before validation so a
/// missing field can be reported as a [`ConfigError`] rather than
/// requiring all three positionally (spec §7 `ConfigError`: "SPAN_*
/// configurations missing any of start/end/step").
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanSpec {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub step: Option<f64>,
}

impl SpanSpec {
    fn validated(&self) -> Result<(f64, f64, f64), ConfigError> {
        let start = self.start.ok_or(ConfigError::MissingSpanField { field: "start" })?;
        let end = self.end.ok_or(ConfigError::MissingSpanField { field: "end" })?;
        let step = self.step.ok_or(ConfigError::MissingSpanField { field: "step" })?;
        if step == 0.0 || step.signum() != (end - start).signum() {
            return Err(ConfigError::InvalidStep);
        }
        Ok((start, end, step))
    }
}

fn expand_span(start: f64, end: f64, step: f64) -> Vec<f64> {
    let n = ((end - start) / step).round().abs() as usize;
    let mut values = Vec::with_capacity(n + 1);
    for i in 0..=n {
        values.push(start + i as f64 * step);
    }
    if let Some(last) = values.last_mut() {
        *last = end;
    }
    values
}

/// The driver's resolved time grid: a `mode` tag retained for display,
/// the time scale every value is expressed in, and the flattened list of
/// Julian dates the computation driver iterates (spec §4.12 "Convert the
/// time-parameter configuration to a list of Julian dates").
#[derive(Debug, Clone, PartialEq)]
pub struct TimeParameters {
    mode: TimeParamsMode,
    scale: TimeScale,
    values: Vec<f64>,
}

impl TimeParameters {
    /// `SPAN_MJD` / `SPAN_JULIAN`: a regularly-stepped numeric span (spec
    /// §8 S5). `mode` must be one of those two variants.
    pub fn from_numeric_span(mode: TimeParamsMode, spec: SpanSpec, scale: TimeScale) -> Result<Self, ConfigError> {
        debug_assert!(matches!(mode, TimeParamsMode::SpanMjd | TimeParamsMode::SpanJulian));
        let (start, end, step) = spec.validated()?;
        Ok(Self { mode, scale, values: expand_span(start, end, step) })
    }

    /// `SPAN_GREGORIAN`: a regularly-stepped span of calendar dates,
    /// terminated at `end` (spec §9 open question — the
    /// `spanEndGregorian`-based termination is adopted, not
    /// `spanStartGregorian`).
    pub fn from_gregorian_span(start: GregorianDate, end: GregorianDate, step_days: f64, scale: TimeScale) -> Result<Self, ConfigError> {
        if step_days == 0.0 || step_days.signum() != (end.to_julian() - start.to_julian()).signum() {
            return Err(ConfigError::InvalidStep);
        }
        let values = expand_span(start.to_julian(), end.to_julian(), step_days);
        Ok(Self { mode: TimeParamsMode::SpanGregorian, scale, values })
    }

    /// `LIST_MJD` / `LIST_JULIAN`: an explicit list of numeric values.
    pub fn from_numeric_list(mode: TimeParamsMode, values: Vec<f64>, scale: TimeScale) -> Self {
        debug_assert!(matches!(mode, TimeParamsMode::ListMjd | TimeParamsMode::ListJulian));
        Self { mode, scale, values }
    }

    /// `LIST_GREGORIAN`: an explicit list of calendar dates.
    pub fn from_gregorian_list(dates: &[GregorianDate], scale: TimeScale) -> Self {
        Self {
            mode: TimeParamsMode::ListGregorian,
            scale,
            values: dates.iter().map(GregorianDate::to_julian).collect(),
        }
    }

    pub fn mode(&self) -> TimeParamsMode {
        self.mode
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// The resolved Julian-date list, in `self.scale()` (spec §4.12).
    pub fn to_julian_list(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s5_julian_span_expands_to_listed_values() {
        let spec = SpanSpec { start: Some(20.0), end: Some(40.0), step: Some(4.0) };
        let params = TimeParameters::from_numeric_span(TimeParamsMode::SpanJulian, spec, TimeScale::Tai).unwrap();
        assert_eq!(params.to_julian_list(), &[20.0, 24.0, 28.0, 32.0, 36.0, 40.0]);
    }

    #[test]
    fn test_missing_span_field_is_config_error() {
        let spec = SpanSpec { start: Some(20.0), end: Some(40.0), step: None };
        let err = TimeParameters::from_numeric_span(TimeParamsMode::SpanJulian, spec, TimeScale::Tai).unwrap_err();
        assert_eq!(err, ConfigError::MissingSpanField { field: "step" });
    }

    #[test]
    fn test_step_sign_mismatch_is_invalid_step() {
        let spec = SpanSpec { start: Some(40.0), end: Some(20.0), step: Some(4.0) };
        let err = TimeParameters::from_numeric_span(TimeParamsMode::SpanJulian, spec, TimeScale::Tai).unwrap_err();
        assert_eq!(err, ConfigError::InvalidStep);
    }

    #[test]
    fn test_gregorian_span_terminates_at_end_not_start() {
        let start = GregorianDate::new(2020, 1, 1, 0, 0, 0.0).unwrap();
        let end = GregorianDate::new(2020, 1, 5, 0, 0, 0.0).unwrap();
        let params = TimeParameters::from_gregorian_span(start, end, 1.0, TimeScale::Utc).unwrap();
        assert_eq!(params.to_julian_list().len(), 5);
        assert_eq!(*params.to_julian_list().last().unwrap(), end.to_julian());
    }

    #[test]
    fn test_numeric_list_is_passed_through_unchanged() {
        let params = TimeParameters::from_numeric_list(TimeParamsMode::ListJulian, vec![1.0, 3.0, 9.0], TimeScale::Tdb);
        assert_eq!(params.to_julian_list(), &[1.0, 3.0, 9.0]);
        assert!(!params.mode().is_span());
    }
}
