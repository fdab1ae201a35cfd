/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A minimal, value-oriented proleptic-Gregorian calendar date, just
//! enough to satisfy the `SPAN_GREGORIAN`/`LIST_GREGORIAN` time-parameter
//! variants (spec §6). The full Gregorian-date arithmetic helper is an
//! external collaborator per spec §1; this type only covers the
//! Julian-date round trip the time-parameter conversion needs, and is
//! immutable end to end per the spec §9 design note (the source mutates
//! `GregorianTime` in place; this reimplementation returns new values).

use crate::errors::DomainError;

/// A calendar date and time of day, proleptic Gregorian, UTC-agnostic
/// (the scale is carried by the surrounding `TimeParameters`, not by
/// this value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl GregorianDate {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Result<Self, DomainError> {
        let date = Self { year, month, day, hour, minute, second };
        date.validate()?;
        Ok(date)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if !(1..=12).contains(&self.month) {
            return Err(DomainError::MalformedGregorianDate(format!("month {} out of range", self.month)));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(DomainError::MalformedGregorianDate(format!(
                "day {} invalid for {}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour >= 24 || self.minute >= 60 || !(0.0..60.0).contains(&self.second) {
            return Err(DomainError::MalformedGregorianDate("time of day out of range".into()));
        }
        Ok(())
    }

    /// Converts to a Julian date (the scale is whatever the caller
    /// intends the resulting value to carry).
    pub fn to_julian(&self) -> f64 {
        let (y, m) = if self.month <= 2 { (self.year - 1, self.month + 12) } else { (self.year, self.month) };
        let a = y.div_euclid(100);
        let b = 2 - a + a.div_euclid(4);
        let jdn = (365.25 * (y + 4716) as f64).floor()
            + (30.6001 * (m + 1) as f64).floor()
            + self.day as f64
            + b as f64
            - 1524.5;
        jdn + (self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second) / 86400.0
    }

    /// Reconstructs a [`GregorianDate`] from a Julian date, inverting
    /// [`GregorianDate::to_julian`] (Fliegel & Van Flandern's algorithm).
    pub fn from_julian(jd: f64) -> Self {
        let jd_shifted = jd + 0.5;
        let z = jd_shifted.floor();
        let f = jd_shifted - z;

        let alpha = ((z - 1867216.25) / 36524.25).floor();
        let a = if z < 2299161.0 { z } else { z + 1.0 + alpha - (alpha / 4.0).floor() };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day_frac = b - d - (30.6001 * e).floor() + f;
        let day = day_frac.floor() as u32;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
        let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

        let mut seconds_of_day = (day_frac - day as f64) * 86400.0;
        if seconds_of_day < 0.0 {
            seconds_of_day = 0.0;
        }
        let hour = (seconds_of_day / 3600.0).floor() as u32;
        let minute = ((seconds_of_day - hour as f64 * 3600.0) / 60.0).floor() as u32;
        let second = seconds_of_day - hour as f64 * 3600.0 - minute as f64 * 60.0;

        Self { year, month, day, hour, minute, second }
    }

    /// Returns a new date advanced by `days` (may be fractional or
    /// negative), via the Julian-date round trip.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_julian(self.to_julian() + days)
    }
}

/// True for the proleptic-Gregorian leap years (spec §8 S6): divisible by
/// 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => if is_leap_year(year) { 29 } else { 28 },
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;

    #[test]
    fn test_j2000_epoch_round_trips() {
        let date = GregorianDate::new(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_float_eq!(date.to_julian(), 2451545.0, abs <= 1e-6);
        let back = GregorianDate::from_julian(2451545.0);
        assert_eq!(back.year, 2000);
        assert_eq!(back.month, 1);
        assert_eq!(back.day, 1);
        assert_eq!(back.hour, 12);
    }

    #[test]
    fn test_invalid_day_is_rejected() {
        assert!(GregorianDate::new(2021, 2, 30, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(GregorianDate::new(2021, 13, 1, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_add_days_year_over_year_matches_leap_year_rule_1900_2404() {
        for year in 1900..2404 {
            let start = GregorianDate::new(year, 1, 1, 0, 0, 0.0).unwrap();
            let step = if is_leap_year(year) { 366.0 } else { 365.0 };
            let advanced = start.add_days(step);
            assert_eq!(advanced.year, year + 1, "year {year}");
            assert_eq!(advanced.month, 1, "year {year}");
            assert_eq!(advanced.day, 1, "year {year}");
        }
    }

    #[test]
    fn test_leap_year_set_matches_gregorian_rule() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2004));
        assert!(!is_leap_year(2001));
    }

    #[test]
    fn test_add_days_then_back_is_identity() {
        let date = GregorianDate::new(2023, 6, 15, 8, 30, 15.5).unwrap();
        let forward = date.add_days(47.0);
        let back = forward.add_days(-47.0);
        assert_eq!(back.year, date.year);
        assert_eq!(back.month, date.month);
        assert_eq!(back.day, date.day);
        assert_eq!(back.hour, date.hour);
        assert_eq!(back.minute, date.minute);
        assert_float_eq!(back.second, date.second, abs <= 1e-6);
    }
}
