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

//! Linear multicommodity flow problems.
//!
//! ```text
//! <n>
//! <m>
//! <k>
//! <source> <target> <cost> <capacity>     (m lines)
//! <origin> <destination> <demand>         (k lines)
//! ```
//!
//! The three header values may also be written on a single line.

use super::read_commodities;
use crate::builder::NetworkBuilder;
use crate::error::{Format, Result};
use crate::instance::McfInstance;
use crate::options::DecodeOptions;
use crate::reader::LineReader;

use std::io::Read;

use tracing::debug;

pub fn read<R: Read>(r: R, name: &str) -> Result<McfInstance> {
    read_with_options(r, name, &DecodeOptions::default())
}

/// Read an instance.
///
/// If bounds are checked, negative capacities are rejected.
pub fn read_with_options<R: Read>(r: R, name: &str, opts: &DecodeOptions) -> Result<McfInstance> {
    let mut reader = LineReader::new(r, Format::LinearMcf);

    let nmk = reader.read_numbers::<usize>(3, "number of nodes, arcs and commodities")?;
    let (n, m, k) = (nmk[0], nmk[1], nmk[2]);

    let mut b = NetworkBuilder::with_capacity(m);
    b.add_nodes(n);
    let mut costs = Vec::with_capacity(m);
    let mut capacities = Vec::with_capacity(m);
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
        toks.end()?;
        b.add_arc(u, v);
    }

    let commodities = read_commodities(&mut reader, n, k)?;

    debug!(instance = name, nodes = n, arcs = m, commodities = k, "read MCF instance");

    Ok(McfInstance::new(
        name.to_string(),
        b.into_network(),
        costs,
        capacities,
        commodities,
    ))
}

#[cfg(test)]
mod tests {
    use super::{read, read_with_options};
    use crate::error::Error;
    use crate::instance::{Commodity, Named};
    use crate::options::DecodeOptions;
    use std::io::Cursor;

    #[test]
    fn planar() {
        let data = "3\n3\n2\n1 2 10 5\n2 3 20 5\n1 3 50 1\n1 3 4\n2 3 1\n";
        let inst = read(Cursor::new(data), "planar3").unwrap();
        assert_eq!(inst.name(), "planar3");
        assert_eq!(inst.num_nodes(), 3);
        assert_eq!(inst.num_arcs(), 3);
        assert_eq!(inst.num_commodities(), 2);
        assert_eq!(inst.network().arcs(), &[(0, 1), (1, 2), (0, 2)][..]);
        assert_eq!(inst.costs(), &[10, 20, 50][..]);
        assert_eq!(inst.capacities(), &[5, 5, 1][..]);
        assert_eq!(
            inst.commodities(),
            &[
                Commodity {
                    origin: 0,
                    destination: 2,
                    demand: 4
                },
                Commodity {
                    origin: 1,
                    destination: 2,
                    demand: 1
                }
            ][..]
        );
    }

    #[test]
    fn header_on_one_line() {
        let inst = read(Cursor::new("2 1 1\n1 2 1 1\n2 1 3\n"), "grid1").unwrap();
        assert_eq!(inst.num_nodes(), 2);
        assert_eq!(inst.commodities()[0].origin, 1);
    }

    #[test]
    fn invalid_nodes() {
        assert!(matches!(
            read(Cursor::new("2\n1\n1\n1 3 1 1\n1 2 3\n"), "x"),
            Err(Error::Format { line: 4, .. })
        ));
        assert!(matches!(
            read(Cursor::new("2\n1\n1\n1 2 1 1\n0 2 3\n"), "x"),
            Err(Error::Format { line: 5, .. })
        ));
        assert!(matches!(
            read(Cursor::new("2\n1\n2\n1 2 1 1\n1 2 3\n"), "x"),
            Err(Error::Format { .. })
        ));
    }

    #[test]
    fn negative_capacity() {
        let data = "2\n1\n0\n1 2 1 -1\n";
        assert!(matches!(read(Cursor::new(data), "x"), Err(Error::Format { line: 4, .. })));
        let opts = DecodeOptions::default().check_bounds(false);
        let inst = read_with_options(Cursor::new(data), "x", &opts).unwrap();
        assert_eq!(inst.capacities(), &[-1][..]);
    }
}
