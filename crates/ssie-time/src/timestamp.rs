/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An immutable (format, scale, value) time value and its conversions.

use ssie_math::constants::f64::JD_TO_MJD_OFFSET;

use crate::correlator::TimeCorrelator;
use crate::time_scales::TimeScale;

/// The representation a [Timestamp]'s value is expressed in.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Format {
    #[default]
    Julian,
    Mjd,
}

/// A scalar time value tagged with its [Format] and [TimeScale].
///
/// Conversions never mutate `self`; they return a new [Timestamp].
/// Values are stored as `f64` Julian dates internally, accepting the loss
/// of sub-nanosecond precision near J2000 this implies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Timestamp {
    value: f64,
    format: Format,
    scale: TimeScale,
}

impl Timestamp {
    pub fn new(value: f64, format: Format, scale: TimeScale) -> Self {
        Self { value, format, scale }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// The value expressed as a Julian date, regardless of `self.format`.
    pub fn julian_value(&self) -> f64 {
        match self.format {
            Format::Julian => self.value,
            Format::Mjd => self.value + JD_TO_MJD_OFFSET,
        }
    }

    /// The value expressed as a Modified Julian date, regardless of
    /// `self.format`.
    pub fn mjd_value(&self) -> f64 {
        match self.format {
            Format::Julian => self.value - JD_TO_MJD_OFFSET,
            Format::Mjd => self.value,
        }
    }

    /// Re-expresses `self` in `format`, same scale, same instant.
    pub fn to_format(&self, format: Format) -> Timestamp {
        if format == self.format {
            return *self;
        }
        let value = match format {
            Format::Julian => self.julian_value(),
            Format::Mjd => self.mjd_value(),
        };
        Timestamp { value, format, scale: self.scale }
    }

    /// Converts `self` to `scale` via `correlator`, preserving `self.format`.
    pub fn to_scale(&self, scale: TimeScale, correlator: &TimeCorrelator) -> Timestamp {
        if scale == self.scale {
            return *self;
        }
        let jd = self.julian_value();
        let delta = correlator.offset(self.scale, scale, jd);
        let new_jd = jd + delta;
        let value = match self.format {
            Format::Julian => new_jd,
            Format::Mjd => new_jd - JD_TO_MJD_OFFSET,
        };
        Timestamp { value, format: self.format, scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correlator() -> TimeCorrelator {
        TimeCorrelator::new(
            vec![[2451544.5, 0.5], [2451545.5, 0.4]],
            vec![[2451544.5, 0.0], [2451545.5, -0.05]],
        )
        .unwrap()
    }

    #[test]
    fn test_format_round_trip() {
        let t = Timestamp::new(2451545.0, Format::Julian, TimeScale::Tdb);
        let as_mjd = t.to_format(Format::Mjd);
        assert_eq!(as_mjd.format(), Format::Mjd);
        let back = as_mjd.to_format(Format::Julian);
        assert_eq!(back.value(), t.value());
    }

    #[test]
    fn test_julian_and_mjd_accessors_agree() {
        let t = Timestamp::new(51544.5, Format::Mjd, TimeScale::Tai);
        assert_eq!(t.julian_value(), 2451545.0);
        assert_eq!(t.mjd_value(), 51544.5);
    }

    #[test]
    fn test_same_scale_conversion_is_identity() {
        let c = correlator();
        let t = Timestamp::new(2451545.0, Format::Julian, TimeScale::Tdb);
        let same = t.to_scale(TimeScale::Tdb, &c);
        assert_eq!(same.value(), t.value());
    }

    #[test]
    fn test_scale_conversion_preserves_format() {
        let c = correlator();
        let t = Timestamp::new(51544.5, Format::Mjd, TimeScale::Tdt);
        let tai = t.to_scale(TimeScale::Tai, &c);
        assert_eq!(tai.format(), Format::Mjd);
        assert_eq!(tai.scale(), TimeScale::Tai);
    }
}
