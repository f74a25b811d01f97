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

use std::error::Error;

use or_datasets::fetch;
use or_datasets::{DirSource, Named, Network, NoCache};

fn data() -> DirSource {
    DirSource::new("tests/data")
}

fn assert_valid_network(g: &Network) {
    for &(u, v) in g.arcs() {
        assert!(u < g.num_nodes());
        assert!(v < g.num_nodes());
    }
}

#[test]
fn test_gap() -> Result<(), Box<dyn Error>> {
    let bunch = fetch::gap(&data(), "gap1", None)?;
    assert_eq!(bunch.descr(), "GAP");
    assert_eq!(bunch.len(), 2);

    let first = bunch.get("c23-1").ok_or("missing c23-1")?;
    assert_eq!(first.costs(), &[vec![-1, -2, -3], vec![-4, -5, -6]][..]);
    assert_eq!(first.capacities(), &[3, 3][..]);

    let second = bunch.get("c32-2").ok_or("missing c32-2")?;
    assert_eq!(second.num_agents(), 3);
    assert_eq!(second.num_jobs(), 2);
    assert_eq!(second.costs(), &[vec![-1, -2], vec![-3, -4], vec![-5, -6]][..]);
    assert_eq!(second.demands(), &[vec![1, 1], vec![1, 1], vec![1, 1]][..]);
    assert_eq!(second.capacities(), &[4, 4, 4][..]);

    let selected = fetch::gap(&data(), "gap1", Some("c32-2"))?;
    assert_eq!(selected.instance(), Some(second));

    let lettered = fetch::gap(&data(), "gapa", None)?;
    let inst = lettered.instance().ok_or("missing instance")?;
    assert_eq!(inst.name(), "a22-1");
    assert_eq!(inst.costs(), &[vec![7, 8], vec![9, 10]][..]);

    Ok(())
}

#[test]
fn test_rcsp() -> Result<(), Box<dyn Error>> {
    let bunch = fetch::rcsp(&data(), "rcsp1")?;
    let inst = bunch.instance().ok_or("missing instance")?;
    assert_valid_network(inst.network());
    assert_eq!(inst.source(), 0);
    assert_eq!(inst.sink(), 4);
    assert_eq!(inst.costs(), &[4, 2, 3, 1, 6, 1][..]);
    assert_eq!(inst.resource(0), &[2.5, 2.5, 3.5, 4.5, 0.5, 3.0][..]);
    assert_eq!(inst.lower(), &[0.0][..]);
    assert_eq!(inst.upper(), &[10.0][..]);
    Ok(())
}

#[test]
fn test_pdptw() -> Result<(), Box<dyn Error>> {
    let bunch = fetch::pdptw(&data(), "li-lim-100", None)?;
    assert_eq!(bunch.len(), 1);
    let inst = bunch.get("lc101").ok_or("missing lc101")?;
    assert_valid_network(inst.network());
    assert_eq!(inst.vehicles(), 3);
    assert_eq!(inst.capacity(), 200);
    assert_eq!(inst.num_nodes(), 6);
    assert_eq!(inst.task(inst.terminal()), inst.task(inst.depot()));
    assert_eq!(inst.num_arcs(), 20);
    assert_eq!(inst.costs().len(), inst.num_arcs());
    assert_eq!(inst.travel_times().len(), inst.num_arcs());
    assert_eq!(inst.requests(), vec![(1, 3), (2, 4)]);

    for &(u, v) in inst.network().arcs() {
        assert!(v != inst.depot());
        assert!(u != inst.terminal());
        assert!((u, v) != (inst.depot(), inst.terminal()));
    }
    Ok(())
}

#[test]
fn test_mcf() -> Result<(), Box<dyn Error>> {
    let bunch = fetch::linear_mcf(&data(), "planar", None)?;
    assert_eq!(bunch.len(), 1);
    let inst = bunch.instance().ok_or("missing instance")?;
    assert_eq!(inst.name(), "planar4");
    assert_valid_network(inst.network());
    assert_eq!(inst.num_nodes(), 4);
    assert_eq!(inst.num_arcs(), 5);
    assert_eq!(inst.capacities(), &[10, 5, 10, 5, 8][..]);
    for c in inst.commodities() {
        assert!(c.origin < inst.num_nodes());
        assert!(c.destination < inst.num_nodes());
    }
    assert_eq!(inst.commodities()[1].origin, 1);
    assert_eq!(inst.commodities()[1].destination, 3);

    let bunch = fetch::network_design(&data(), "Canad-C", Some("c01"))?;
    let inst = bunch.instance().ok_or("missing instance")?;
    assert_eq!(bunch.descr(), "FCMCF");
    assert_eq!(inst.name(), "c01");
    assert_eq!(inst.fixed_costs(), &[100, 100, 300][..]);
    assert_eq!(inst.flow().num_commodities(), 2);
    Ok(())
}

#[test]
fn test_spp() -> Result<(), Box<dyn Error>> {
    let bunch = fetch::spp(&data(), NoCache, "NY")?;
    let inst = bunch.instance().ok_or("missing instance")?;
    assert_valid_network(inst.network());
    assert_eq!(inst.num_nodes(), 20);
    assert_eq!(inst.num_arcs(), 39);
    assert_eq!(inst.distances().len(), 39);
    assert_eq!(inst.times().len(), 39);
    assert_eq!(inst.network().arc(38), (0, 17));
    assert_eq!(inst.distances()[38], 200);
    assert_eq!(inst.times()[38], 50);
    Ok(())
}
