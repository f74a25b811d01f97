/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Options controlling the behaviour of the readers.

/// Options passed to the `read_with_options` functions of the readers.
///
/// # Example
///
/// ```
/// use or_datasets::DecodeOptions;
///
/// let opts = DecodeOptions::default().max_continuation_lines(16);
/// assert_eq!(opts.continuation_budget(), 16);
/// assert!(opts.checks_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    max_continuation_lines: usize,
    check_bounds: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_continuation_lines: 1024,
            check_bounds: true,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximal number of physical lines a wrapped row may be continued on.
    ///
    /// A row that is still incomplete after this many continuation lines is
    /// reported as truncated input.
    pub fn max_continuation_lines(mut self, n: usize) -> Self {
        self.max_continuation_lines = n;
        self
    }

    /// Enable or disable the plausibility checks of bounds.
    ///
    /// These are `lower[h] <= upper[h]` for resource bounds, `early <= late`
    /// for time windows and non-negative capacities and DIMACS arc weights.
    pub fn check_bounds(mut self, check: bool) -> Self {
        self.check_bounds = check;
        self
    }

    /// Return the maximal number of continuation lines.
    pub fn continuation_budget(&self) -> usize {
        self.max_continuation_lines
    }

    /// Return `true` if bounds are checked.
    pub fn checks_bounds(&self) -> bool {
        self.check_bounds
    }
}
