// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Shortest path algorithms.

pub mod dijkstra;
pub use self::dijkstra::{dijkstra, ShortestPaths};

use crate::error::Result;
use crate::network::Network;

use num_traits::Zero;
use std::ops::Add;

/// Compute shortest paths from `source` in the network given by an arc list.
///
/// This is a convenience wrapper around [`dijkstra`] that first builds the
/// network with `nnodes` nodes and the arcs `arcs`. The weights must be
/// non-negative and `weights[e]` is the weight of `arcs[e]`.
pub fn solve<D>(nnodes: usize, arcs: &[(usize, usize)], weights: &[D], source: usize) -> Result<ShortestPaths<D>>
where
    D: Copy + PartialOrd + Zero + Add<D, Output = D>,
{
    let g = Network::from_arcs(nnodes, arcs.to_vec())?;
    dijkstra(&g, weights, source)
}
