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

//! Fixed-charge multicommodity network design problems (`.dow` files).
//!
//! ```text
//! <description>
//! <n> <m> <k>
//! <source> <target> <cost> <capacity> <fixed cost> <aux> <aux>  (m lines)
//! <origin> <destination> <demand>                              (k lines)
//! ```
//!
//! The two auxiliary arc fields are ignored.

use super::read_commodities;
use crate::builder::NetworkBuilder;
use crate::error::{Format, Result};
use crate::instance::{McfInstance, NetworkDesignInstance};
use crate::options::DecodeOptions;
use crate::reader::LineReader;

use std::io::Read;

use tracing::debug;

pub fn read<R: Read>(r: R, name: &str) -> Result<NetworkDesignInstance> {
    read_with_options(r, name, &DecodeOptions::default())
}

/// Read an instance.
///
/// If bounds are checked, negative capacities are rejected.
pub fn read_with_options<R: Read>(r: R, name: &str, opts: &DecodeOptions) -> Result<NetworkDesignInstance> {
    let mut reader = LineReader::new(r, Format::NetworkDesign);

    reader.skip_line()?;
    let nmk = reader.read_numbers::<usize>(3, "number of nodes, arcs and commodities")?;
    let (n, m, k) = (nmk[0], nmk[1], nmk[2]);

    let mut b = NetworkBuilder::with_capacity(m);
    b.add_nodes(n);
    let mut costs = Vec::with_capacity(m);
    let mut capacities = Vec::with_capacity(m);
    let mut fixed_costs = Vec::with_capacity(m);
    for _ in 0..m {
        let mut toks = reader.expect_line("arc")?;
        let u = toks.node(n)?;
        let v = toks.node(n)?;
        costs.push(toks.number()?);
        let cap: i64 = toks.number()?;
        if opts.checks_bounds() && cap < 0 {
            return Err(toks.error(format!("negative capacity {}", cap)));
        }
        capacities.push(cap);
        fixed_costs.push(toks.number()?);
        toks.skip_tokens(2)?;
        toks.end()?;
        b.add_arc(u, v);
    }

    let commodities = read_commodities(&mut reader, n, k)?;

    debug!(instance = name, nodes = n, arcs = m, commodities = k, "read FCMCF instance");

    let flow = McfInstance::new(name.to_string(), b.into_network(), costs, capacities, commodities);
    Ok(NetworkDesignInstance::new(flow, fixed_costs))
}
