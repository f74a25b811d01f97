/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Construction of networks.
//!
//! A [`Network`] is a static object. In order to build one, the readers use a
//! [`NetworkBuilder`] and, once all arcs have been added, convert it into the
//! network. The conversion computes the outgoing adjacency lists, so the arc
//! list must be complete at that point.

use crate::network::Network;

use std::ops::Range;

/// A builder for [`Network`]s.
///
/// Arcs are numbered in the order they are added. This numbering is kept by
/// the final network, i.e. arc `i` of the network is the `i`-th arc added to
/// the builder.
#[derive(Default)]
pub struct NetworkBuilder {
    nnodes: usize,
    arcs: Vec<(usize, usize)>,
}

impl NetworkBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new, empty builder.
    ///
    /// The builder might be passed a guess of the number of arcs. This is
    /// only used to reserve memory.
    pub fn with_capacity(narcs: usize) -> Self {
        NetworkBuilder {
            nnodes: 0,
            arcs: Vec::with_capacity(narcs),
        }
    }

    /// Return the current number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nnodes
    }

    /// Return the current number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Add a new node.
    pub fn add_node(&mut self) -> usize {
        self.nnodes += 1;
        self.nnodes - 1
    }

    /// Add `n` new nodes.
    pub fn add_nodes(&mut self, n: usize) -> Range<usize> {
        let first = self.nnodes;
        self.nnodes += n;
        first..self.nnodes
    }

    /// Add a new arc from `u` to `v` and return its index.
    ///
    /// # Panics
    ///
    /// Panics if one of the nodes has not been added to the builder.
    pub fn add_arc(&mut self, u: usize, v: usize) -> usize {
        assert!(
            u < self.nnodes && v < self.nnodes,
            "arc ({},{}) references a node >= {}",
            u,
            v,
            self.nnodes
        );
        self.arcs.push((u, v));
        self.arcs.len() - 1
    }

    /// Turn the builder into a network.
    pub fn into_network(self) -> Network {
        Network::from_parts(self.nnodes, self.arcs)
    }
}

impl Network {
    /// Create a new network by passing a builder to the callback `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use or_datasets::Network;
    ///
    /// let g = Network::new_with(|b| {
    ///     let nodes = b.add_nodes(3);
    ///     b.add_arc(nodes.start, nodes.start + 1);
    ///     b.add_arc(nodes.start + 1, nodes.start + 2);
    /// });
    ///
    /// assert_eq!(g.num_nodes(), 3);
    /// assert_eq!(g.num_arcs(), 2);
    /// ```
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce(&mut NetworkBuilder),
    {
        let mut b = NetworkBuilder::new();
        f(&mut b);
        b.into_network()
    }
}
