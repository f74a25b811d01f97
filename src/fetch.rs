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

//! Fetch benchmark instances by name.
//!
//! The functions in this module map data set and instance names to the
//! files of a [`Source`] and read them. The files are addressed by the
//! following keys:
//!
//! | data set                         | key                                      |
//! |----------------------------------|------------------------------------------|
//! | OR-Library GAP and RCSP          | `orlib/{name}.txt`                       |
//! | Li & Lim PDPTW                   | `sintef/{set}/{instance}.txt`            |
//! | Pisa linear MCF                  | `pisa/{set}/{instance}`                  |
//! | Pisa network design              | `pisa/{set}/{instance}.dow`              |
//! | DIMACS road networks             | `dimacs/USA-road-{d,t}.{region}.gr`      |
//!
//! All names are checked before any file is opened, an unknown name is an
//! [`Error::InvalidParameter`].

use crate::cache::InstanceCache;
use crate::dimacs::spp as sppfmt;
use crate::error::{Error, Result};
use crate::instance::{
    Bunch, GapInstance, McfInstance, NetworkDesignInstance, PdptwInstance, RcsppInstance, SppInstance,
};
use crate::mmcf;
use crate::orlib;
use crate::pdptw as pdptwfmt;
use crate::source::Source;

use std::io;

use tracing::info;

pub use crate::rcspp::fetch as rcspp;

/// The GAP sets of the OR-Library.
pub const GAP_SETS: [&str; 16] = [
    "gap1", "gap2", "gap3", "gap4", "gap5", "gap6", "gap7", "gap8", "gap9", "gap10", "gap11", "gap12", "gapa", "gapb",
    "gapc", "gapd",
];

/// The Li & Lim PDPTW sets.
pub const PDPTW_SETS: [&str; 6] = [
    "li-lim-100",
    "li-lim-200",
    "li-lim-400",
    "li-lim-600",
    "li-lim-800",
    "li-lim-1000",
];

/// The linear multicommodity flow sets.
pub const LINEAR_MCF_SETS: [&str; 2] = ["planar", "grid"];

/// The multicommodity network design sets.
pub const NETWORK_DESIGN_SETS: [&str; 3] = ["Canad-C", "Canad-C+", "Canad-R"];

fn check_name(kind: &str, name: &str, valid: &[&str]) -> Result<()> {
    if valid.contains(&name) {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!("unknown {} '{}'", kind, name)))
    }
}

/// Fetch a GAP set, optionally only the instance `selector` (e.g. `c515-1`).
pub fn gap<S: Source>(source: &S, set: &str, selector: Option<&str>) -> Result<Bunch<GapInstance>> {
    check_name("GAP set", set, &GAP_SETS)?;
    orlib::gap::read(source.open(&format!("orlib/{}.txt", set))?, set, selector)
}

/// Fetch the OR-Library RCSP instance `rcsp1`, ..., `rcsp24`.
pub fn rcsp<S: Source>(source: &S, name: &str) -> Result<Bunch<RcsppInstance>> {
    let valid = name
        .strip_prefix("rcsp")
        .and_then(|i| i.parse::<usize>().ok())
        .map(|i| (1..=24).contains(&i) && name == format!("rcsp{}", i))
        .unwrap_or(false);
    if !valid {
        return Err(Error::InvalidParameter(format!("unknown RCSP instance '{}'", name)));
    }
    orlib::rcsp::read(source.open(&format!("orlib/{}.txt", name))?, name)
}

/// Return the instances to read from a multi-file set.
///
/// These are `instance` or, if no instance is given, all files in `dir`
/// with the given extension (with the extension removed).
fn members<S: Source>(source: &S, dir: &str, ext: &str, instance: Option<&str>) -> Result<Vec<String>> {
    match instance {
        Some(instance) => Ok(vec![instance.to_string()]),
        None => Ok(source
            .list(dir)?
            .into_iter()
            .filter_map(|file| {
                if ext.is_empty() {
                    Some(file).filter(|f| !f.ends_with(".doc"))
                } else {
                    file.strip_suffix(ext).map(str::to_string)
                }
            })
            .collect()),
    }
}

/// Open the file of a member of a multi-file set.
///
/// A missing file is an unknown instance if it has been requested by name.
fn open_member<S: Source>(source: &S, key: &str, instance: Option<&str>) -> Result<S::Reader> {
    match source.open(key) {
        Err(err) if instance.is_some() && err.kind() == io::ErrorKind::NotFound => {
            Err(Error::InvalidParameter(format!("unknown instance '{}'", key)))
        }
        r => Ok(r?),
    }
}

/// Fetch a Li & Lim PDPTW set or a single instance (e.g. `lc101`) of it.
pub fn pdptw<S: Source>(source: &S, set: &str, instance: Option<&str>) -> Result<Bunch<PdptwInstance>> {
    check_name("PDPTW set", set, &PDPTW_SETS)?;
    let dir = format!("sintef/{}", set);
    let mut bunch = Bunch::new("PDPTW");
    for name in members(source, &dir, ".txt", instance)? {
        let r = open_member(source, &format!("{}/{}.txt", dir, name), instance)?;
        bunch.push(pdptwfmt::read(r, &name)?)?;
    }
    if let Some(instance) = instance {
        bunch.select(instance);
    }
    Ok(bunch)
}

/// Fetch a linear multicommodity flow set or a single instance of it.
pub fn linear_mcf<S: Source>(source: &S, set: &str, instance: Option<&str>) -> Result<Bunch<McfInstance>> {
    check_name("MCF set", set, &LINEAR_MCF_SETS)?;
    let dir = format!("pisa/{}", set);
    let mut bunch = Bunch::new("MCF");
    for name in members(source, &dir, "", instance)? {
        let r = open_member(source, &format!("{}/{}", dir, name), instance)?;
        bunch.push(mmcf::linear::read(r, &name)?)?;
    }
    if let Some(instance) = instance {
        bunch.select(instance);
    }
    Ok(bunch)
}

/// Fetch a network design set or a single instance (e.g. `c33`) of it.
pub fn network_design<S: Source>(
    source: &S,
    set: &str,
    instance: Option<&str>,
) -> Result<Bunch<NetworkDesignInstance>> {
    check_name("network design set", set, &NETWORK_DESIGN_SETS)?;
    let dir = format!("pisa/{}", set);
    let mut bunch = Bunch::new("FCMCF");
    for name in members(source, &dir, ".dow", instance)? {
        let r = open_member(source, &format!("{}/{}.dow", dir, name), instance)?;
        bunch.push(mmcf::design::read(r, &name)?)?;
    }
    if let Some(instance) = instance {
        bunch.select(instance);
    }
    Ok(bunch)
}

/// Fetch the shortest path instance of a DIMACS road network (e.g. `NY`).
///
/// The instance is stored in the cache under the name of the region.
pub fn spp<S, C>(source: &S, mut cache: C, region: &str) -> Result<Bunch<SppInstance>>
where
    S: Source,
    C: InstanceCache<SppInstance>,
{
    check_name("region", region, &crate::rcspp::REGIONS)?;

    let inst = match cache.get(region) {
        Some(inst) => {
            info!(instance = region, "cache hit");
            inst
        }
        None => {
            let (dkey, tkey) = crate::rcspp::source_keys(region);
            let inst = sppfmt::read(source.open(&dkey)?, source.open(&tkey)?, region)?;
            cache.put(region, &inst);
            inst
        }
    };

    let mut bunch = Bunch::new("SPP");
    bunch.push(inst)?;
    Ok(bunch)
}
