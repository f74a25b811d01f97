// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest path instances from a pair of DIMACS files.
//!
//! The road networks of the 9th DIMACS challenge come as two files, one with
//! the distance (`USA-road-d.*.gr`) and one with the travel time
//! (`USA-road-t.*.gr`) of each arc. Both files list the same arcs in the
//! same order. This is checked while reading: the files must agree on the
//! number of nodes and arcs and on the end points of the arc at every
//! position, otherwise an [`Error::Alignment`] is returned.

use super::GrReader;
use crate::builder::NetworkBuilder;
use crate::error::{Error, Result};
use crate::instance::SppInstance;
use crate::options::DecodeOptions;

use std::io::Read;

use tracing::debug;

/// Read a shortest path instance from a distance and a time file.
pub fn read<D: Read, T: Read>(distance: D, time: T, name: &str) -> Result<SppInstance> {
    read_with_options(distance, time, name, &DecodeOptions::default())
}

pub fn read_with_options<D: Read, T: Read>(
    distance: D,
    time: T,
    name: &str,
    opts: &DecodeOptions,
) -> Result<SppInstance> {
    let mut dreader = GrReader::with_options(distance, opts)?;
    let mut treader = GrReader::with_options(time, opts)?;

    let n = dreader.num_nodes();
    let m = dreader.num_arcs();
    if treader.num_nodes() != n || treader.num_arcs() != m {
        return Err(Error::Alignment {
            line: treader.line_number(),
            msg: format!(
                "time file has {} nodes and {} arcs, distance file has {} nodes and {} arcs",
                treader.num_nodes(),
                treader.num_arcs(),
                n,
                m
            ),
        });
    }
    debug!(instance = name, nodes = n, arcs = m, "reading DIMACS distance and time files");

    let mut b = NetworkBuilder::with_capacity(m);
    b.add_nodes(n);
    let mut distances = Vec::with_capacity(m);
    let mut times = Vec::with_capacity(m);
    while let Some(d) = dreader.next_arc()? {
        let t = match treader.next_arc()? {
            Some(t) => t,
            None => {
                return Err(Error::Alignment {
                    line: treader.line_number(),
                    msg: format!("time file ends before arc {}", b.num_arcs() + 1),
                })
            }
        };
        if (d.tail, d.head) != (t.tail, t.head) {
            return Err(Error::Alignment {
                line: t.line,
                msg: format!(
                    "arc {} is ({},{}) in the time file but ({},{}) in the distance file (line {})",
                    b.num_arcs() + 1,
                    t.tail + 1,
                    t.head + 1,
                    d.tail + 1,
                    d.head + 1,
                    d.line
                ),
            });
        }
        b.add_arc(d.tail, d.head);
        distances.push(d.weight);
        times.push(t.weight);
    }
    if let Some(t) = treader.next_arc()? {
        return Err(Error::Alignment {
            line: t.line,
            msg: "time file has more arcs than the distance file".to_string(),
        });
    }

    Ok(SppInstance::new(name.to_string(), b.into_network(), distances, times))
}
