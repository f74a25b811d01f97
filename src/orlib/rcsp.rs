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

//! This module implements a read function for the OR-Library resource
//! constrained shortest path format (`rcsp1`, ..., `rcsp24`).
//!
//! ```text
//! <n> <m> <k>
//! <lower bound of each resource>
//! <upper bound of each resource>
//! <k resource weights of node 1>
//! ...
//! <k resource weights of node n>
//! <tail> <head> <cost> <k resource weights>
//! ...
//! ```
//!
//! The format has resource weights on nodes and on arcs. The node weights are
//! moved to the arcs: each arc receives half of the weight of its tail and
//! half of the weight of its head. The source is the first and the sink the
//! last node.

use crate::builder::NetworkBuilder;
use crate::error::{Format, Result};
use crate::instance::{Bunch, RcsppInstance};
use crate::options::DecodeOptions;
use crate::reader::LineReader;

use std::io::Read;
use std::sync::Arc;

use tracing::debug;

/// Read the instance `name` from an OR-Library RCSP file.
pub fn read<R: Read>(r: R, name: &str) -> Result<Bunch<RcsppInstance>> {
    read_with_options(r, name, &DecodeOptions::default())
}

pub fn read_with_options<R: Read>(r: R, name: &str, opts: &DecodeOptions) -> Result<Bunch<RcsppInstance>> {
    let mut reader = LineReader::new(r, Format::Rcsp);

    let nmk = reader.read_numbers::<usize>(3, "header line")?;
    let (n, m, k) = (nmk[0], nmk[1], nmk[2]);
    if n == 0 {
        return Err(reader.error("instance has no nodes".to_string()));
    }
    debug!(instance = name, nodes = n, arcs = m, resources = k, "reading RCSP file");

    let lower = reader.read_numbers::<f64>(k, "lower resource bounds")?;
    let upper = reader.read_numbers::<f64>(k, "upper resource bounds")?;
    if opts.checks_bounds() {
        if let Some(h) = (0..k).find(|&h| !(lower[h] <= upper[h])) {
            return Err(reader.error(format!(
                "lower bound {} of resource {} exceeds upper bound {}",
                lower[h], h, upper[h]
            )));
        }
    }

    // node weights, one vector per resource
    let mut node_weights = vec![Vec::with_capacity(n); k];
    for _ in 0..n {
        let ws = reader.read_numbers::<i64>(k, "node resource weights")?;
        for (h, w) in ws.into_iter().enumerate() {
            node_weights[h].push(w);
        }
    }

    let mut b = NetworkBuilder::with_capacity(m);
    b.add_nodes(n);
    let mut costs = Vec::with_capacity(m);
    let mut weights = vec![Vec::with_capacity(m); k];
    for _ in 0..m {
        let mut toks = reader.expect_line("arc")?;
        let u = toks.node(n)?;
        let v = toks.node(n)?;
        costs.push(toks.number::<i64>()?);
        for wh in weights.iter_mut() {
            wh.push(toks.number::<i64>()? as f64);
        }
        toks.end()?;
        b.add_arc(u, v);
    }
    let network = b.into_network();

    // move the node weights to the arcs
    for (wh, nwh) in weights.iter_mut().zip(&node_weights) {
        for (e, &(u, v)) in network.arcs().iter().enumerate() {
            wh[e] += nwh[u] as f64 / 2.0 + nwh[v] as f64 / 2.0;
        }
    }

    let mut bunch = Bunch::new("RCSPP");
    bunch.push(RcsppInstance::new(
        name.to_string(),
        Arc::new(network),
        0,
        n - 1,
        Arc::new(costs),
        weights.into_iter().map(Arc::new).collect(),
        lower,
        upper,
    ))?;
    Ok(bunch)
}
