/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The canonical directed network shared by all instances.
//!
//! Nodes are the integers `0..n` and arcs are the integers `0..m`. Every
//! per-arc array of an instance (costs, capacities, resource weights) is
//! indexed by the arc number, i.e. `costs[e]` belongs to `network.arc(e)`.
//! Parallel arcs are allowed.

use crate::error::{Error, Result};

use std::collections::HashMap;
use std::ops::Range;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A vector based directed multigraph.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    nnodes: usize,
    arcs: Vec<(usize, usize)>,
    // The outgoing arcs of node `u` are `adj[firstout[u]..firstout[u + 1]]`,
    // in the order they have been added.
    firstout: Vec<usize>,
    adj: Vec<usize>,
}

impl Network {
    pub(crate) fn from_parts(nnodes: usize, arcs: Vec<(usize, usize)>) -> Network {
        let mut firstout = vec![0; nnodes + 1];
        for &(u, _) in &arcs {
            firstout[u + 1] += 1;
        }
        for u in 0..nnodes {
            firstout[u + 1] += firstout[u];
        }

        let mut next = firstout.clone();
        let mut adj = vec![0; arcs.len()];
        for (e, &(u, _)) in arcs.iter().enumerate() {
            adj[next[u]] = e;
            next[u] += 1;
        }

        Network {
            nnodes,
            arcs,
            firstout,
            adj,
        }
    }

    /// Create a network with `nnodes` nodes from a list of arcs.
    ///
    /// Returns an error if some arc references a node `>= nnodes`.
    pub fn from_arcs(nnodes: usize, arcs: Vec<(usize, usize)>) -> Result<Network> {
        if let Some((e, &(u, v))) = arcs
            .iter()
            .enumerate()
            .find(|&(_, &(u, v))| u >= nnodes || v >= nnodes)
        {
            return Err(Error::InvalidParameter(format!(
                "arc {} = ({},{}) references a node >= {}",
                e, u, v, nnodes
            )));
        }
        Ok(Network::from_parts(nnodes, arcs))
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nnodes
    }

    /// Return the number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Return the range of all nodes.
    pub fn nodes(&self) -> Range<usize> {
        0..self.nnodes
    }

    /// Return the list of all arcs as `(tail, head)` pairs.
    pub fn arcs(&self) -> &[(usize, usize)] {
        &self.arcs
    }

    /// Return the end points `(tail, head)` of arc `e`.
    pub fn arc(&self, e: usize) -> (usize, usize) {
        self.arcs[e]
    }

    /// Return the tail of arc `e`.
    pub fn src(&self, e: usize) -> usize {
        self.arcs[e].0
    }

    /// Return the head of arc `e`.
    pub fn snk(&self, e: usize) -> usize {
        self.arcs[e].1
    }

    /// Return an iterator over `(arc, head)` for all arcs leaving `u`.
    pub fn outarcs(&self, u: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj[self.firstout[u]..self.firstout[u + 1]]
            .iter()
            .map(move |&e| (e, self.arcs[e].1))
    }

    /// Return the out-degree of `u`.
    pub fn outdegree(&self, u: usize) -> usize {
        self.firstout[u + 1] - self.firstout[u]
    }
}

/// Index from `(tail, head)` to arc number.
///
/// For parallel arcs the arc that comes first in the arc list is returned.
/// The index is built once and can be reused for arbitrarily many lookups.
pub struct ArcLookup {
    index: HashMap<(usize, usize), usize>,
}

impl ArcLookup {
    pub fn new(g: &Network) -> Self {
        let mut index = HashMap::with_capacity(g.num_arcs());
        for (e, &uv) in g.arcs().iter().enumerate() {
            index.entry(uv).or_insert(e);
        }
        ArcLookup { index }
    }

    /// Return the first arc from `u` to `v`, if there is one.
    pub fn find(&self, u: usize, v: usize) -> Option<usize> {
        self.index.get(&(u, v)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{ArcLookup, Network};

    fn example() -> Network {
        Network::from_arcs(4, vec![(0, 1), (2, 3), (0, 2), (1, 2), (0, 1)]).unwrap()
    }

    #[test]
    fn outgoing_arcs() {
        let g = example();
        assert_eq!(g.num_nodes(), 4);
        assert_eq!(g.num_arcs(), 5);
        assert_eq!(g.outarcs(0).collect::<Vec<_>>(), vec![(0, 1), (2, 2), (4, 1)]);
        assert_eq!(g.outarcs(1).collect::<Vec<_>>(), vec![(3, 2)]);
        assert_eq!(g.outarcs(2).collect::<Vec<_>>(), vec![(1, 3)]);
        assert_eq!(g.outdegree(3), 0);
        assert_eq!(g.src(1), 2);
        assert_eq!(g.snk(1), 3);
    }

    #[test]
    fn invalid_arcs() {
        assert!(Network::from_arcs(2, vec![(0, 1), (1, 2)]).is_err());
        assert!(Network::from_arcs(0, vec![]).is_ok());
    }

    #[test]
    fn lookup_prefers_first_parallel_arc() {
        let g = example();
        let lookup = ArcLookup::new(&g);
        assert_eq!(lookup.find(0, 1), Some(0));
        assert_eq!(lookup.find(1, 2), Some(3));
        assert_eq!(lookup.find(2, 1), None);
    }
}
