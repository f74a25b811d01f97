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

//! Multicommodity flow problems of the University of Pisa collection.
//!
//! - [`linear`]: linear multicommodity flow problems (`planar`, `grid`)
//! - [`design`]: fixed-charge network design problems (`Canad-C`,
//!   `Canad-C+`, `Canad-R`)
//!
//! Both formats use 1-based node numbers, which are converted to 0-based
//! node numbers.

pub mod design;
pub mod linear;

use crate::error::Result;
use crate::instance::Commodity;
use crate::reader::LineReader;

use std::io::Read;

/// Read `k` commodity lines `<origin> <destination> <demand>`.
fn read_commodities<R: Read>(reader: &mut LineReader<R>, n: usize, k: usize) -> Result<Vec<Commodity>> {
    let mut commodities = Vec::with_capacity(k);
    for _ in 0..k {
        let mut toks = reader.expect_line("commodity")?;
        let origin = toks.node(n)?;
        let destination = toks.node(n)?;
        let demand = toks.number()?;
        toks.end()?;
        commodities.push(Commodity {
            origin,
            destination,
            demand,
        });
    }
    Ok(commodities)
}
