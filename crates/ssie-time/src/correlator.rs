/*
 * Copyright (c) 2024. Helge Eichhorn and the LOX contributors
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Tabulated offsets between {TDB, TDT, TAI, UT1, UTC}.
//!
//! The five scales form a fixed linear chain `TDB - TDT - TAI - UT1 - UTC`.
//! Converting between any two scales walks the chain hop by hop,
//! re-evaluating the relevant table (or constant) at each intermediate
//! Julian date, exactly as the single TDT->TAI->UT1->UTC rule composes.

use ssie_math::constants::f64::SECONDS_PER_DAY;
use ssie_math::interpolate::Table;

use crate::errors::TimeError;
use crate::time_scales::TimeScale;

/// The constant offset between TDT and TAI, in days (TDT - TAI = 32.184 s).
pub const D_TAI_TT: f64 = 32.184 / SECONDS_PER_DAY;

const CHAIN: [TimeScale; 5] = [
    TimeScale::Tdb,
    TimeScale::Tdt,
    TimeScale::Tai,
    TimeScale::Ut1,
    TimeScale::Utc,
];

fn chain_index(scale: TimeScale) -> usize {
    CHAIN.iter().position(|s| *s == scale).expect("exhaustive chain")
}

/// Interconverts {TDB, TDT, TAI, UT1, UTC} via the UT1-TAI and UT1-UTC
/// tables and the constant TDT-TAI offset.
///
/// TDB and TDT are not distinguished by a tabulated or periodic
/// correction here: at the precision this correlator targets they are
/// treated as coincident, consistent with the scale pair not being given
/// an explicit rule.
#[derive(Debug, Clone)]
pub struct TimeCorrelator {
    ut1_tai: Table<2>,
    ut1_utc: Table<2>,
}

impl TimeCorrelator {
    /// Builds a correlator from `[JD, offset_seconds]` tables, monotonic
    /// in the first column.
    pub fn new(ut1_tai: Vec<[f64; 2]>, ut1_utc: Vec<[f64; 2]>) -> Result<Self, TimeError> {
        let ut1_tai = Table::new(ut1_tai).map_err(|_| TimeError::EmptyUt1TaiTable)?;
        let ut1_utc = Table::new(ut1_utc).map_err(|_| TimeError::EmptyUt1UtcTable)?;
        Ok(Self { ut1_tai, ut1_utc })
    }

    fn hop(&self, from: TimeScale, to: TimeScale, jd: f64) -> f64 {
        use TimeScale::*;
        match (from, to) {
            (Tdb, Tdt) | (Tdt, Tdb) => 0.0,
            (Tdt, Tai) => -D_TAI_TT,
            (Tai, Tdt) => D_TAI_TT,
            (Ut1, Tai) => -self.ut1_tai.lookup(jd, true)[1] / SECONDS_PER_DAY,
            (Tai, Ut1) => self.ut1_tai.lookup(jd, true)[1] / SECONDS_PER_DAY,
            (Ut1, Utc) => -self.ut1_utc.lookup(jd, true)[1] / SECONDS_PER_DAY,
            (Utc, Ut1) => self.ut1_utc.lookup(jd, true)[1] / SECONDS_PER_DAY,
            _ => unreachable!("non-adjacent chain hop"),
        }
    }

    /// Returns the offset `Δ` (days) such that `jd_dst = jd_src + Δ`,
    /// walking the fixed chain one adjacent hop at a time and
    /// re-evaluating each table at the running Julian date.
    pub fn offset(&self, src: TimeScale, dst: TimeScale, jd_src: f64) -> f64 {
        if src == dst {
            return 0.0;
        }
        let i = chain_index(src) as isize;
        let j = chain_index(dst) as isize;
        let step: isize = if j > i { 1 } else { -1 };
        let mut jd = jd_src;
        let mut total = 0.0;
        let mut k = i;
        while k != j {
            let from = CHAIN[k as usize];
            let to = CHAIN[(k + step) as usize];
            let delta = self.hop(from, to, jd);
            total += delta;
            jd += delta;
            k += step;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn correlator() -> TimeCorrelator {
        TimeCorrelator::new(
            vec![[2451544.5, 0.5], [2451545.5, 0.4]],
            vec![[2451544.5, 0.0], [2451545.5, -0.05]],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_tables_rejected() {
        assert!(TimeCorrelator::new(vec![], vec![[0.0, 0.0]]).is_err());
        assert!(TimeCorrelator::new(vec![[0.0, 0.0]], vec![]).is_err());
    }

    #[rstest]
    #[case(TimeScale::Tdb, TimeScale::Tdb)]
    #[case(TimeScale::Tai, TimeScale::Tai)]
    #[case(TimeScale::Utc, TimeScale::Utc)]
    fn test_same_scale_is_zero(#[case] scale: TimeScale, #[case] same: TimeScale) {
        let c = correlator();
        assert_eq!(c.offset(scale, same, 2451545.0), 0.0);
    }

    #[test]
    fn test_tdt_tai_constant() {
        let c = correlator();
        let delta = c.offset(TimeScale::Tdt, TimeScale::Tai, 2451545.0);
        assert!((delta + D_TAI_TT).abs() < 1e-15);
        let back = c.offset(TimeScale::Tai, TimeScale::Tdt, 2451545.0);
        assert!((back - D_TAI_TT).abs() < 1e-15);
    }

    #[test]
    fn test_tdb_tdt_roundtrip_is_zero() {
        let c = correlator();
        assert_eq!(c.offset(TimeScale::Tdb, TimeScale::Tdt, 2451545.0), 0.0);
        assert_eq!(c.offset(TimeScale::Tdt, TimeScale::Tdb, 2451545.0), 0.0);
    }

    #[test]
    fn test_multi_hop_tdt_to_utc() {
        let c = correlator();
        let jd = 2451545.0;
        let delta = c.offset(TimeScale::Tdt, TimeScale::Utc, jd);
        // TDT->TAI (-32.184s) -> UT1 (+0.45s interpolated) -> UTC (-0.025s interpolated)
        let expected_seconds = -32.184 + 0.45 - 0.025;
        assert!((delta * SECONDS_PER_DAY - expected_seconds).abs() < 1e-6);
    }

    #[test]
    fn test_reverse_chain() {
        let c = correlator();
        let jd = 2451545.0;
        let forward = c.offset(TimeScale::Tdt, TimeScale::Ut1, jd);
        let jd_ut1 = jd + forward;
        let backward = c.offset(TimeScale::Ut1, TimeScale::Tdt, jd_ut1);
        assert!((forward + backward).abs() < 1e-9);
    }
}
