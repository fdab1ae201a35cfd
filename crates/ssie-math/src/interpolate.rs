/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ordered-table lookup with piecewise-linear interpolation.
//!
//! Tables are rows `[jd, v1, v2, ...]` of fixed width, monotonic in the
//! first column. Queries outside the table clamp to the first/last row;
//! queries inside it either return the bracketing lower row verbatim or
//! interpolate linearly between the bracketing pair, selected by the row
//! at index 0 (the independent variable).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("interpolation table must contain at least one row")]
pub struct EmptyTableError;

/// An ordered table of fixed-width rows, monotonic non-decreasing in column 0.
#[derive(Debug, Clone)]
pub struct Table<const W: usize> {
    rows: Vec<[f64; W]>,
}

impl<const W: usize> Table<W> {
    /// Builds a table from rows already sorted by their first column.
    ///
    /// Fails only if `rows` is empty, per the component contract: an empty
    /// table has no sensible clamp value.
    pub fn new(rows: Vec<[f64; W]>) -> Result<Self, EmptyTableError> {
        if rows.is_empty() {
            return Err(EmptyTableError);
        }
        Ok(Self { rows })
    }

    pub fn first(&self) -> &[f64; W] {
        &self.rows[0]
    }

    pub fn last(&self) -> &[f64; W] {
        &self.rows[self.rows.len() - 1]
    }

    fn bracket(&self, x: f64) -> usize {
        // Binary search for the last row whose key is <= x.
        match self
            .rows
            .binary_search_by(|row| row[0].partial_cmp(&x).unwrap())
        {
            Ok(i) => i,
            Err(0) => 0,
            Err(i) => i - 1,
        }
    }

    /// Looks up the row at `x`, clamping outside the table and either
    /// returning the bracketing lower row or interpolating linearly inside
    /// it, depending on `interpolate`.
    pub fn lookup(&self, x: f64, interpolate: bool) -> [f64; W] {
        if x <= self.first()[0] {
            return *self.first();
        }
        if x >= self.last()[0] {
            return *self.last();
        }
        let lo = self.bracket(x);
        let row_lo = self.rows[lo];
        if !interpolate || lo + 1 >= self.rows.len() {
            return row_lo;
        }
        let row_hi = self.rows[lo + 1];
        let x0 = row_lo[0];
        let x1 = row_hi[0];
        let f = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
        let mut out = row_lo;
        for i in 1..W {
            out[i] = row_lo[i] + f * (row_hi[i] - row_lo[i]);
        }
        out
    }
}
