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

//! Resource constrained shortest path problems on road networks.
//!
//! The instances are derived from a shortest path instance with distance
//! and travel time weights (see [`crate::dimacs::spp`]) as proposed by
//! Sedeño-Noda and Alonso-Rodríguez (2015). The distance is the cost and the
//! travel time the only resource. The source is node `0`. For a
//! destination `t` let `l(t)` be the length of a shortest path `P` w.r.t. the
//! distance and `w(t)` the travel time of `P`. Given a tightness
//! `p ∈ [0,1]` the travel time is limited to
//!
//! $$ T = p \cdot (w(t) - l(t)) + l(t). $$
//!
//! # Example
//!
//! ```
//! use or_datasets::dimacs::spp;
//! use or_datasets::rcspp::ResourceLimits;
//!
//! let dist = "p sp 4 3\na 1 2 1\na 2 3 1\na 1 3 5\n";
//! let time = "p sp 4 3\na 1 2 2\na 2 3 1\na 1 3 1\n";
//! let inst = spp::read(dist.as_bytes(), time.as_bytes(), "TOY").unwrap();
//!
//! let limits = ResourceLimits::new(inst).unwrap();
//! assert_eq!(limits.shortest_distance(2), Some(2));
//! assert_eq!(limits.path_time(2), Some(3));
//! assert_eq!(limits.limit(2, 0.0).unwrap(), 2.0);
//! assert_eq!(limits.limit(2, 0.5).unwrap(), 2.5);
//! assert_eq!(limits.limit(2, 1.0).unwrap(), 3.0);
//! ```

use crate::cache::InstanceCache;
use crate::dimacs::spp;
use crate::error::{Error, Result};
use crate::instance::{Bunch, Named, RcsppInstance, SppInstance};
use crate::network::ArcLookup;
use crate::shortestpath::{dijkstra, ShortestPaths};
use crate::source::Source;

use std::sync::Arc;

use tracing::{debug, info, warn};

/// The tightness values of the published instances.
pub const TIGHTNESS: [f64; 8] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];

/// The road networks of the 9th DIMACS challenge.
pub const REGIONS: [&str; 12] = [
    "USA", "CTR", "W", "E", "LKS", "CAL", "NE", "NW", "FLA", "COL", "BAY", "NY",
];

/// Return the (1-based) destinations of the published instances of a region.
///
/// Returns `None` for an unknown region.
pub fn destinations(region: &str) -> Option<&'static [usize]> {
    let dests: &'static [usize] = match region {
        "USA" => &[24, 4893, 976909, 11973673, 23947347],
        "CTR" => &[23, 3752, 592985, 7040908, 14081816],
        "W" => &[22, 2502, 277351, 3131052, 6262104],
        "E" => &[21, 1897, 165233, 1799311, 3598623],
        "LKS" => &[21, 1660, 128912, 1379059, 2758119],
        "CAL" => &[20, 1375, 90684, 945407, 1890815],
        "NE" => &[20, 1234, 74219, 762227, 1524453],
        "NW" => &[],
        "FLA" => &[20, 1034, 53439, 535188, 1070376],
        "COL" => &[19, 660, 23256, 217833, 435666],
        "BAY" => &[18, 567, 17562, 160635, 321270],
        "NY" => &[18, 514, 14676, 132173, 264346],
        _ => return None,
    };
    Some(dests)
}

/// The name of the derived instance for a 1-based destination.
pub fn instance_name(region: &str, dest: usize, p: f64) -> String {
    format!("{}_{}_{}", region, dest, p)
}

/// Resource limits for all destinations of a shortest path instance.
///
/// The shortest path trees w.r.t. distance and travel time are computed
/// once, so arbitrarily many instances can be derived cheaply. All derived
/// instances share the network, the distances and the travel times.
pub struct ResourceLimits {
    spp: SppInstance,
    times: Arc<Vec<f64>>,
    distance: ShortestPaths<i64>,
    time: ShortestPaths<i64>,
    lookup: ArcLookup,
}

impl ResourceLimits {
    /// Compute the shortest path trees from node `0`.
    pub fn new(spp: SppInstance) -> Result<ResourceLimits> {
        if spp.num_nodes() == 0 {
            return Err(Error::InvalidParameter(format!("instance '{}' has no nodes", spp.name())));
        }
        let distance = dijkstra(spp.network(), spp.distances(), 0)?;
        let time = dijkstra(spp.network(), spp.times(), 0)?;
        let lookup = ArcLookup::new(spp.network());
        let times = Arc::new(spp.times().iter().map(|&t| t as f64).collect());
        debug!(
            instance = spp.name(),
            reachable = distance.reachable().count(),
            "computed shortest path trees"
        );
        Ok(ResourceLimits {
            spp,
            times,
            distance,
            time,
            lookup,
        })
    }

    /// The underlying shortest path instance.
    pub fn spp(&self) -> &SppInstance {
        &self.spp
    }

    /// The length `l(dest)` of a shortest path w.r.t. the distance.
    pub fn shortest_distance(&self, dest: usize) -> Option<i64> {
        self.distance.distance(dest)
    }

    /// The length of a shortest path w.r.t. the travel time.
    pub fn shortest_time(&self, dest: usize) -> Option<i64> {
        self.time.distance(dest)
    }

    /// The travel time `w(dest)` of the shortest path w.r.t. the distance.
    ///
    /// Consecutive nodes of the path are mapped to arcs with an [`ArcLookup`],
    /// so for parallel arcs the first one counts.
    pub fn path_time(&self, dest: usize) -> Option<i64> {
        let path = self.distance.path(dest)?;
        let times = self.spp.times();
        path.windows(2)
            .map(|uv| self.lookup.find(uv[0], uv[1]).map(|e| times[e]))
            .sum()
    }

    /// Return the limit `T` on the travel time for a destination and a
    /// tightness `p ∈ [0,1]`.
    pub fn limit(&self, dest: usize, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameter(format!("tightness {} not in [0,1]", p)));
        }
        if dest >= self.spp.num_nodes() {
            return Err(Error::InvalidParameter(format!(
                "destination {} not in 0..{}",
                dest,
                self.spp.num_nodes()
            )));
        }
        let (length, wtime) = match (self.shortest_distance(dest), self.path_time(dest)) {
            (Some(l), Some(w)) => (l, w),
            _ => {
                return Err(Error::InvalidParameter(format!(
                    "destination {} is not reachable",
                    dest
                )))
            }
        };

        if wtime < length {
            warn!(dest, length, time = wtime, "travel time of the path is below its length");
        }
        let limit = p * (wtime - length) as f64 + length as f64;
        if let Some(tmin) = self.shortest_time(dest) {
            if limit < tmin as f64 {
                warn!(dest, p, limit, min_time = tmin, "derived instance is infeasible");
            }
        }
        Ok(limit)
    }

    /// Derive the instance for a (0-based) destination and tightness.
    ///
    /// The instance is named after the 1-based destination.
    pub fn instance(&self, dest: usize, p: f64) -> Result<RcsppInstance> {
        let limit = self.limit(dest, p)?;
        let name = instance_name(self.spp.name(), dest + 1, p);
        info!(instance = %name, limit, "derived RCSPP instance");
        Ok(RcsppInstance::new(
            name,
            self.spp.shared_network(),
            0,
            dest,
            self.spp.shared_distances(),
            vec![self.times.clone()],
            vec![0.0],
            vec![limit],
        ))
    }
}

/// The source keys of the distance and the time file of a region.
pub fn source_keys(region: &str) -> (String, String) {
    (
        format!("dimacs/USA-road-d.{}.gr", region),
        format!("dimacs/USA-road-t.{}.gr", region),
    )
}

/// Fetch the published RCSPP instances of a region.
///
/// `dests` are 1-based destinations and `ps` tightness values; both must be
/// taken from [`destinations`] and [`TIGHTNESS`]. Empty lists select all
/// values. Each instance is looked up in the cache first, the road network
/// is only read (and the shortest path trees computed) if some instance is
/// missing.
pub fn fetch<S, C>(source: &S, mut cache: C, region: &str, dests: &[usize], ps: &[f64]) -> Result<Bunch<RcsppInstance>>
where
    S: Source,
    C: InstanceCache<RcsppInstance>,
{
    let valid_dests =
        destinations(region).ok_or_else(|| Error::InvalidParameter(format!("unknown region '{}'", region)))?;
    if let Some(p) = ps.iter().find(|p| !TIGHTNESS.contains(p)) {
        return Err(Error::InvalidParameter(format!("invalid tightness {}", p)));
    }
    if let Some(d) = dests.iter().find(|d| !valid_dests.contains(d)) {
        return Err(Error::InvalidParameter(format!(
            "invalid destination {} for region '{}'",
            d, region
        )));
    }

    let dests = if dests.is_empty() { valid_dests } else { dests };
    let ps = if ps.is_empty() { &TIGHTNESS[..] } else { ps };

    let mut limits: Option<ResourceLimits> = None;
    let mut bunch = Bunch::new("RCSPP");
    for &dest in dests {
        for &p in ps {
            let name = instance_name(region, dest, p);
            if let Some(inst) = cache.get(&name) {
                info!(instance = %name, "cache hit");
                bunch.push(inst)?;
                continue;
            }

            let inst = match &limits {
                Some(limits) => limits.instance(dest - 1, p)?,
                None => {
                    let (dkey, tkey) = source_keys(region);
                    let spp = spp::read(source.open(&dkey)?, source.open(&tkey)?, region)?;
                    let lim = ResourceLimits::new(spp)?;
                    let inst = lim.instance(dest - 1, p)?;
                    limits = Some(lim);
                    inst
                }
            };
            cache.put(inst.name(), &inst);
            bunch.push(inst)?;
        }
    }

    if bunch.len() == 1 {
        let name = bunch.data()[0].name().to_string();
        bunch.select(&name);
    }

    Ok(bunch)
}
