/*
 * Copyright (c) 2026. The ssie-space contributors
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, you can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The fixed-length, newest-first derivative history the Adams-Bashforth-
//! Moulton predictor-corrector reads its eight-term sums from ("cyclic
//! state history", spec §9 design notes).

use arrayvec::ArrayVec;

pub const HISTORY_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivativeHistory {
    entries: ArrayVec<Vec<f64>, HISTORY_LEN>,
}

impl DerivativeHistory {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Pushes the newest derivative, evicting the oldest once the buffer
    /// reaches [`HISTORY_LEN`].
    pub fn push_front(&mut self, derivative: Vec<f64>) {
        if self.entries.is_full() {
            self.entries.pop();
        }
        self.entries.insert(0, derivative);
    }

    /// The `i`-th most recent derivative, `0` is newest.
    pub fn get(&self, i: usize) -> Option<&[f64]> {
        self.entries.get(i).map(|v| v.as_slice())
    }
}
