/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in a directed graph. Each arc is assigned a
//! non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//!
//! The nodes are handled in the order of their distance using an addressable
//! binary heap, so the running time is $O((n + m) \log n)$.
//!
//! Among several shortest paths the algorithm returns a fixed one: nodes with
//! equal distance are handled in the order of their number and the incoming
//! arc of a node is only replaced by a strictly shorter one. Hence for a given
//! network (including the order of its arcs) the result is always the same.
//!
//! # Example
//!
//! ```
//! use or_datasets::Network;
//! use or_datasets::shortestpath::dijkstra;
//!
//! let g = Network::from_arcs(4, vec![(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
//! let weights = vec![1, 1, 5, 2];
//!
//! let sp = dijkstra(&g, &weights, 0).unwrap();
//!
//! assert_eq!(sp.distance(2), Some(2));
//! assert_eq!(sp.distance(3), Some(4));
//! assert_eq!(sp.path(3), Some(vec![0, 1, 2, 3]));
//! assert_eq!(sp.path_arcs(3), Some(vec![0, 1, 3]));
//! ```

use crate::collections::{BinHeap, ItemPriQueue};
use crate::error::{Error, Result};
use crate::network::Network;

use num_traits::Zero;
use std::ops::Add;
use tracing::debug;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The result of a single-source shortest path computation.
///
/// Nodes that are not reachable from the source have neither a distance nor a
/// path.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths<D> {
    source: usize,
    dist: Vec<Option<D>>,
    /// incoming arc and its tail on the shortest path
    pred: Vec<Option<(usize, usize)>>,
}

impl<D> ShortestPaths<D>
where
    D: Copy,
{
    /// The source node of the computation.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Return the length of a shortest path to `v`.
    ///
    /// Returns `None` if `v` is not reachable.
    pub fn distance(&self, v: usize) -> Option<D> {
        self.dist.get(v).copied().flatten()
    }

    /// Return `true` if `v` is reachable from the source.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Return an iterator over all reachable nodes and their distances.
    pub fn reachable(&self) -> impl Iterator<Item = (usize, D)> + '_ {
        self.dist.iter().enumerate().filter_map(|(v, d)| d.map(|d| (v, d)))
    }

    /// Return the arcs of a shortest path from the source to `v`.
    pub fn path_arcs(&self, v: usize) -> Option<Vec<usize>> {
        self.distance(v)?;
        let mut arcs = vec![];
        let mut u = v;
        while let Some((e, w)) = self.pred[u] {
            arcs.push(e);
            u = w;
        }
        arcs.reverse();
        Some(arcs)
    }

    /// Return the nodes of a shortest path from the source to `v`.
    ///
    /// The path starts with the source and ends with `v`.
    pub fn path(&self, v: usize) -> Option<Vec<usize>> {
        self.distance(v)?;
        let mut nodes = vec![v];
        let mut u = v;
        while let Some((_, w)) = self.pred[u] {
            nodes.push(w);
            u = w;
        }
        nodes.reverse();
        Some(nodes)
    }
}

/// Run Dijkstra's algorithm from `src`.
///
/// The weight of arc `e` is `weights[e]`. All weights must be non-negative
/// (and comparable, so `NaN` is rejected), otherwise [`Error::InvalidWeight`]
/// is returned before any work is done.
pub fn dijkstra<D>(g: &Network, weights: &[D], src: usize) -> Result<ShortestPaths<D>>
where
    D: Copy + PartialOrd + Zero + Add<D, Output = D>,
{
    if weights.len() != g.num_arcs() {
        return Err(Error::InvalidWeight {
            arc: weights.len().min(g.num_arcs()),
            msg: format!("expected {} weights, got {}", g.num_arcs(), weights.len()),
        });
    }
    if let Some(e) = weights.iter().position(|w| !(*w >= D::zero())) {
        return Err(Error::InvalidWeight {
            arc: e,
            msg: "weights must be non-negative".to_string(),
        });
    }
    if src >= g.num_nodes() {
        return Err(Error::InvalidParameter(format!(
            "source node {} not in 0..{}",
            src,
            g.num_nodes()
        )));
    }

    let n = g.num_nodes();
    let mut dist: Vec<Option<D>> = vec![None; n];
    let mut pred = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap: BinHeap<D> = BinHeap::with_capacity(n);

    dist[src] = Some(D::zero());
    heap.push(src, D::zero());

    let mut nsettled = 0;
    while let Some((u, d)) = heap.pop_min() {
        settled[u] = true;
        nsettled += 1;
        for (e, v) in g.outarcs(u) {
            if settled[v] {
                continue;
            }
            let newdist = d + weights[e];
            match dist[v] {
                None => {
                    // node is unknown
                    dist[v] = Some(newdist);
                    pred[v] = Some((e, u));
                    heap.push(v, newdist);
                }
                Some(olddist) if newdist < olddist => {
                    // node is known but unhandled
                    dist[v] = Some(newdist);
                    pred[v] = Some((e, u));
                    heap.decrease_key(v, newdist);
                }
                _ => (),
            }
        }
    }

    debug!(source = src, nodes = n, reached = nsettled, "shortest path tree computed");

    Ok(ShortestPaths {
        source: src,
        dist,
        pred,
    })
}

#[cfg(test)]
mod tests {
    use super::dijkstra;
    use crate::error::Error;
    use crate::network::Network;
    use crate::shortestpath::solve;

    #[test]
    fn small_graph() {
        let arcs = vec![(0, 1), (1, 2), (0, 2)];
        let sp = solve(4, &arcs, &[1, 1, 5], 0).unwrap();
        assert_eq!(sp.source(), 0);
        assert_eq!(sp.distance(0), Some(0));
        assert_eq!(sp.distance(1), Some(1));
        assert_eq!(sp.distance(2), Some(2));
        assert_eq!(sp.path(2), Some(vec![0, 1, 2]));
        assert_eq!(sp.path(0), Some(vec![0]));
        assert_eq!(sp.path_arcs(0), Some(vec![]));

        // node 3 is isolated
        assert_eq!(sp.distance(3), None);
        assert_eq!(sp.path(3), None);
        assert!(!sp.is_reachable(3));
        assert_eq!(sp.reachable().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn parallel_arcs() {
        let g = Network::from_arcs(2, vec![(0, 1), (0, 1), (1, 0)]).unwrap();
        let sp = dijkstra(&g, &[3.0, 1.5, 0.0], 0).unwrap();
        assert_eq!(sp.distance(1), Some(1.5));
        assert_eq!(sp.path_arcs(1), Some(vec![1]));
    }

    #[test]
    fn equal_paths_are_deterministic() {
        // two shortest paths 0-1-3 and 0-2-3 of length 2
        let g = Network::from_arcs(4, vec![(0, 2), (0, 1), (2, 3), (1, 3)]).unwrap();
        let weights = [1, 1, 1, 1];
        let first = dijkstra(&g, &weights, 0).unwrap();
        assert_eq!(first.distance(3), Some(2));
        // node 1 is handled before node 2, so its arc is found first
        assert_eq!(first.path(3), Some(vec![0, 1, 3]));
        for _ in 0..10 {
            assert_eq!(dijkstra(&g, &weights, 0).unwrap(), first);
        }
    }

    #[test]
    fn zero_weight_cycle() {
        let g = Network::from_arcs(3, vec![(0, 1), (1, 0), (1, 2)]).unwrap();
        let sp = dijkstra(&g, &[0, 0, 4], 0).unwrap();
        assert_eq!(sp.distance(2), Some(4));
        assert_eq!(sp.path(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn negative_weight() {
        let g = Network::from_arcs(3, vec![(0, 1), (1, 2)]).unwrap();
        match dijkstra(&g, &[1, -1], 0) {
            Err(Error::InvalidWeight { arc, .. }) => assert_eq!(arc, 1),
            _ => panic!("negative weight must be rejected"),
        }
        assert!(matches!(
            dijkstra(&g, &[1.0, f64::NAN], 0),
            Err(Error::InvalidWeight { arc: 1, .. })
        ));
    }

    #[test]
    fn weight_count_mismatch() {
        let g = Network::from_arcs(3, vec![(0, 1), (1, 2)]).unwrap();
        assert!(matches!(dijkstra(&g, &[1], 0), Err(Error::InvalidWeight { .. })));
    }

    #[test]
    fn invalid_source() {
        let g = Network::from_arcs(3, vec![(0, 1), (1, 2)]).unwrap();
        assert!(matches!(dijkstra(&g, &[1, 1], 3), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn grid() {
        // 10x10 grid with unit weights to the right and down
        let k = 10;
        let g = Network::new_with(|b| {
            b.add_nodes(k * k);
            for i in 0..k {
                for j in 0..k {
                    if j + 1 < k {
                        b.add_arc(i * k + j, i * k + j + 1);
                    }
                    if i + 1 < k {
                        b.add_arc(i * k + j, (i + 1) * k + j);
                    }
                }
            }
        });
        let weights = vec![1u64; g.num_arcs()];
        let sp = dijkstra(&g, &weights, 0).unwrap();
        for i in 0..k {
            for j in 0..k {
                assert_eq!(sp.distance(i * k + j), Some((i + j) as u64));
            }
        }
        assert_eq!(sp.path(k * k - 1).map(|p| p.len()), Some(2 * k - 1));
    }
}
