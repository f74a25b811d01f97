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

//! Instance records produced by the readers.
//!
//! Every record is immutable once it has been created by a reader: the
//! fields are only accessible through getters. All per-arc arrays have
//! exactly one entry per arc of the record's network and all node numbers
//! are 0-based.

use crate::error::{Error, Result};
use crate::network::Network;

use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// An instance with a unique name.
pub trait Named {
    fn name(&self) -> &str;
}

/// A named collection of instances.
///
/// The instances are kept in the order they have been read. If exactly one
/// instance has been read or one instance has been selected explicitly, it is
/// available via [`Bunch::instance`].
#[derive(Clone, Debug)]
pub struct Bunch<T> {
    descr: &'static str,
    data: Vec<T>,
    index: HashMap<String, usize>,
    selected: Option<usize>,
}

impl<T: Named> Bunch<T> {
    /// Create an empty collection with the given description.
    pub fn new(descr: &'static str) -> Self {
        Bunch {
            descr,
            data: vec![],
            index: HashMap::new(),
            selected: None,
        }
    }

    /// Add an instance to the collection.
    ///
    /// Fails if an instance with the same name is already contained.
    pub fn push(&mut self, instance: T) -> Result<()> {
        if self.index.contains_key(instance.name()) {
            return Err(Error::InvalidParameter(format!(
                "duplicate instance name '{}'",
                instance.name()
            )));
        }
        self.index.insert(instance.name().to_string(), self.data.len());
        self.data.push(instance);
        Ok(())
    }

    /// Mark the instance with the given name as the selected instance.
    ///
    /// Returns `false` if there is no such instance.
    pub fn select(&mut self, name: &str) -> bool {
        match self.index.get(name) {
            Some(&i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// The description of the data set (e.g. `"GAP"`).
    pub fn descr(&self) -> &'static str {
        self.descr
    }

    /// The number of instances.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All instances in the order they have been read.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Return the instance with the given name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.data[i])
    }

    /// Return the selected instance.
    ///
    /// This is the explicitly selected instance or, if there is none, the only
    /// instance of the collection.
    pub fn instance(&self) -> Option<&T> {
        match self.selected {
            Some(i) => Some(&self.data[i]),
            None if self.data.len() == 1 => self.data.first(),
            None => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for Bunch<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bunch<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// A generalized assignment problem.
///
/// `costs[i][j]` and `demands[i][j]` are the cost and the resource demand of
/// assigning job `j` to agent `i`, `capacities[i]` is the capacity of agent `i`.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GapInstance {
    name: String,
    costs: Vec<Vec<i64>>,
    demands: Vec<Vec<i64>>,
    capacities: Vec<i64>,
}

impl GapInstance {
    pub(crate) fn new(name: String, costs: Vec<Vec<i64>>, demands: Vec<Vec<i64>>, capacities: Vec<i64>) -> Self {
        debug_assert_eq!(costs.len(), capacities.len());
        debug_assert_eq!(demands.len(), capacities.len());
        GapInstance {
            name,
            costs,
            demands,
            capacities,
        }
    }

    /// The number of agents `m`.
    pub fn num_agents(&self) -> usize {
        self.capacities.len()
    }

    /// The number of jobs `n`.
    pub fn num_jobs(&self) -> usize {
        self.costs.first().map(Vec::len).unwrap_or(0)
    }

    /// The `m x n` cost matrix.
    pub fn costs(&self) -> &[Vec<i64>] {
        &self.costs
    }

    /// The `m x n` demand matrix.
    pub fn demands(&self) -> &[Vec<i64>] {
        &self.demands
    }

    /// The capacity of each agent.
    pub fn capacities(&self) -> &[i64] {
        &self.capacities
    }
}

impl Named for GapInstance {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A resource constrained shortest path problem.
///
/// A path from `source` to `sink` is feasible if for each resource `h` the
/// accumulated weight `resource(h)` along the path lies in `[lower[h], upper[h]]`.
///
/// Instances derived from the same road network share the network and the
/// weight arrays.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RcsppInstance {
    name: String,
    network: Arc<Network>,
    source: usize,
    sink: usize,
    costs: Arc<Vec<i64>>,
    resources: Vec<Arc<Vec<f64>>>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl RcsppInstance {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        network: Arc<Network>,
        source: usize,
        sink: usize,
        costs: Arc<Vec<i64>>,
        resources: Vec<Arc<Vec<f64>>>,
        lower: Vec<f64>,
        upper: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(costs.len(), network.num_arcs());
        debug_assert!(resources.iter().all(|w| w.len() == network.num_arcs()));
        debug_assert_eq!(lower.len(), resources.len());
        debug_assert_eq!(upper.len(), resources.len());
        RcsppInstance {
            name,
            network,
            source,
            sink,
            costs,
            resources,
            lower,
            upper,
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn num_nodes(&self) -> usize {
        self.network.num_nodes()
    }

    pub fn num_arcs(&self) -> usize {
        self.network.num_arcs()
    }

    /// The number of resources `k`.
    pub fn num_resources(&self) -> usize {
        self.resources.len()
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// The cost of each arc.
    pub fn costs(&self) -> &[i64] {
        &self.costs
    }

    /// The weights of resource `h` on each arc.
    pub fn resource(&self, h: usize) -> &[f64] {
        &self.resources[h]
    }

    /// The lower bound on each resource.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// The upper bound on each resource.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}

impl Named for RcsppInstance {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A node (task) of a pickup and delivery problem.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Task {
    pub x: i64,
    pub y: i64,
    pub demand: i64,
    /// Start of the time window.
    pub early: i64,
    /// End of the time window.
    pub late: i64,
    /// The service duration.
    pub service: i64,
    /// The corresponding pickup task of a delivery task, 0 otherwise.
    pub pickup: usize,
    /// The corresponding delivery task of a pickup task, 0 otherwise.
    pub delivery: usize,
}

/// A pickup and delivery problem with time windows.
///
/// Node `0` is the start depot and node `n - 1` is the terminal depot, an
/// exact copy of the start depot.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PdptwInstance {
    name: String,
    vehicles: usize,
    capacity: i64,
    speed: i64,
    tasks: Vec<Task>,
    network: Network,
    costs: Vec<f64>,
    travel_times: Vec<f64>,
}

impl PdptwInstance {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        vehicles: usize,
        capacity: i64,
        speed: i64,
        tasks: Vec<Task>,
        network: Network,
        costs: Vec<f64>,
        travel_times: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(tasks.len(), network.num_nodes());
        debug_assert_eq!(costs.len(), network.num_arcs());
        debug_assert_eq!(travel_times.len(), network.num_arcs());
        PdptwInstance {
            name,
            vehicles,
            capacity,
            speed,
            tasks,
            network,
            costs,
            travel_times,
        }
    }

    /// The number of vehicles.
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// The capacity of each vehicle.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// The vehicle speed as given in the file.
    pub fn speed(&self) -> i64 {
        self.speed
    }

    /// The number of nodes including both depots.
    pub fn num_nodes(&self) -> usize {
        self.tasks.len()
    }

    pub fn num_arcs(&self) -> usize {
        self.network.num_arcs()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, u: usize) -> &Task {
        &self.tasks[u]
    }

    /// The start depot.
    pub fn depot(&self) -> usize {
        0
    }

    /// The terminal depot.
    pub fn terminal(&self) -> usize {
        self.tasks.len() - 1
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The (symmetric) euclidean distance of each arc.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// The travel time of each arc including the service time at its tail.
    pub fn travel_times(&self) -> &[f64] {
        &self.travel_times
    }

    /// Return all requests as `(pickup, delivery)` node pairs.
    pub fn requests(&self) -> Vec<(usize, usize)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.pickup == 0 && t.delivery != 0)
            .map(|(u, t)| (u, t.delivery))
            .collect()
    }
}

impl Named for PdptwInstance {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A commodity of a multicommodity flow problem.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commodity {
    pub origin: usize,
    pub destination: usize,
    pub demand: i64,
}

/// A linear multicommodity flow problem.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct McfInstance {
    name: String,
    network: Network,
    costs: Vec<i64>,
    capacities: Vec<i64>,
    commodities: Vec<Commodity>,
}

impl McfInstance {
    pub(crate) fn new(
        name: String,
        network: Network,
        costs: Vec<i64>,
        capacities: Vec<i64>,
        commodities: Vec<Commodity>,
    ) -> Self {
        debug_assert_eq!(costs.len(), network.num_arcs());
        debug_assert_eq!(capacities.len(), network.num_arcs());
        McfInstance {
            name,
            network,
            costs,
            capacities,
            commodities,
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn num_nodes(&self) -> usize {
        self.network.num_nodes()
    }

    pub fn num_arcs(&self) -> usize {
        self.network.num_arcs()
    }

    /// The number of commodities `k`.
    pub fn num_commodities(&self) -> usize {
        self.commodities.len()
    }

    /// The cost per unit of flow on each arc.
    pub fn costs(&self) -> &[i64] {
        &self.costs
    }

    /// The (joint) capacity of each arc.
    pub fn capacities(&self) -> &[i64] {
        &self.capacities
    }

    pub fn commodities(&self) -> &[Commodity] {
        &self.commodities
    }
}

impl Named for McfInstance {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A fixed-charge multicommodity network design problem.
///
/// This is a multicommodity flow problem where each arc must be opened at
/// its fixed cost before it can carry flow.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkDesignInstance {
    flow: McfInstance,
    fixed_costs: Vec<i64>,
}

impl NetworkDesignInstance {
    pub(crate) fn new(flow: McfInstance, fixed_costs: Vec<i64>) -> Self {
        debug_assert_eq!(fixed_costs.len(), flow.num_arcs());
        NetworkDesignInstance { flow, fixed_costs }
    }

    /// The underlying multicommodity flow problem.
    pub fn flow(&self) -> &McfInstance {
        &self.flow
    }

    /// The cost of opening each arc.
    pub fn fixed_costs(&self) -> &[i64] {
        &self.fixed_costs
    }
}

impl Named for NetworkDesignInstance {
    fn name(&self) -> &str {
        self.flow.name()
    }
}

/// A shortest path problem on a road network with distance and travel time
/// weights.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SppInstance {
    name: String,
    network: Arc<Network>,
    distances: Arc<Vec<i64>>,
    times: Arc<Vec<i64>>,
}

impl SppInstance {
    pub(crate) fn new(name: String, network: Network, distances: Vec<i64>, times: Vec<i64>) -> Self {
        debug_assert_eq!(distances.len(), network.num_arcs());
        debug_assert_eq!(times.len(), network.num_arcs());
        SppInstance {
            name,
            network: Arc::new(network),
            distances: Arc::new(distances),
            times: Arc::new(times),
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub(crate) fn shared_network(&self) -> Arc<Network> {
        self.network.clone()
    }

    pub(crate) fn shared_distances(&self) -> Arc<Vec<i64>> {
        self.distances.clone()
    }

    pub fn num_nodes(&self) -> usize {
        self.network.num_nodes()
    }

    pub fn num_arcs(&self) -> usize {
        self.network.num_arcs()
    }

    /// The length of each arc.
    pub fn distances(&self) -> &[i64] {
        &self.distances
    }

    /// The travel time of each arc.
    pub fn times(&self) -> &[i64] {
        &self.times
    }
}

impl Named for SppInstance {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::{Bunch, GapInstance, Named};

    fn gap(name: &str) -> GapInstance {
        GapInstance::new(name.to_string(), vec![vec![1]], vec![vec![1]], vec![1])
    }

    #[test]
    fn bunch_lookup() {
        let mut b = Bunch::new("GAP");
        assert!(b.instance().is_none());
        b.push(gap("c515-1")).unwrap();
        assert_eq!(b.instance().map(Named::name), Some("c515-1"));

        b.push(gap("c515-2")).unwrap();
        assert!(b.instance().is_none());
        assert!(b.push(gap("c515-2")).is_err());
        assert_eq!(b.len(), 2);
        assert_eq!(b.descr(), "GAP");

        assert!(b.select("c515-2"));
        assert!(!b.select("c515-3"));
        assert_eq!(b.instance().map(Named::name), Some("c515-2"));
        assert_eq!(b.get("c515-1").map(|g| g.num_jobs()), Some(1));
        assert_eq!(
            b.iter().map(|g| g.name().to_string()).collect::<Vec<_>>(),
            vec!["c515-1", "c515-2"]
        );
    }
}
