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

//! Read pickup and delivery problems with time windows in the format of the
//! Li & Lim benchmark.
//!
//! The first line contains the number of vehicles, the vehicle capacity and
//! the speed. Each following line describes one task:
//!
//! ```text
//! <id> <x> <y> <demand> <early> <late> <service> <pickup> <delivery>
//! ```
//!
//! Task `0` is the depot. A pickup task has `pickup = 0` and the id of its
//! delivery task in `delivery`, a delivery task has the id of its pickup task
//! in `pickup` and `delivery = 0`.
//!
//! The returned instance has an additional terminal depot `n` (a copy of the
//! depot) and all arcs between the nodes except arcs entering the depot,
//! arcs leaving the terminal depot and the arc from the depot to the terminal
//! depot. The cost of an arc is the euclidean distance of its end points
//! truncated to one decimal, the travel time additionally contains the
//! service time of the tail.

use crate::builder::NetworkBuilder;
use crate::error::{Format, Result};
use crate::instance::{PdptwInstance, Task};
use crate::options::DecodeOptions;
use crate::reader::LineReader;

use std::io::Read;

use tracing::debug;

/// Return the euclidean distance of two tasks truncated to one decimal.
fn distance(a: &Task, b: &Task) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx.hypot(dy) * 10.0).trunc() / 10.0
}

/// Read a PDPTW instance with the given name.
pub fn read<R: Read>(r: R, name: &str) -> Result<PdptwInstance> {
    read_with_options(r, name, &DecodeOptions::default())
}

pub fn read_with_options<R: Read>(r: R, name: &str, opts: &DecodeOptions) -> Result<PdptwInstance> {
    let mut reader = LineReader::new(r, Format::Pdptw);

    let (vehicles, capacity, speed) = {
        let mut toks = reader.expect_line("header line")?;
        let vehicles = toks.number::<usize>()?;
        let capacity = toks.number::<i64>()?;
        let speed = toks.number::<i64>()?;
        toks.end()?;
        (vehicles, capacity, speed)
    };

    let mut tasks = vec![];
    while let Some(mut toks) = reader.read_line()? {
        let id = toks.number::<usize>()?;
        if id != tasks.len() {
            return Err(toks.error(format!("expected task {}, got {}", tasks.len(), id)));
        }
        let task = Task {
            x: toks.number()?,
            y: toks.number()?,
            demand: toks.number()?,
            early: toks.number()?,
            late: toks.number()?,
            service: toks.number()?,
            pickup: toks.number()?,
            delivery: toks.number()?,
        };
        toks.end()?;
        if opts.checks_bounds() && task.early > task.late {
            return Err(toks.error(format!(
                "empty time window [{}, {}] of task {}",
                task.early, task.late, id
            )));
        }
        tasks.push(task);
    }

    let ntasks = tasks.len();
    if ntasks == 0 {
        return Err(reader.error("missing depot".to_string()));
    }
    if let Some(u) = tasks.iter().position(|t| t.pickup >= ntasks || t.delivery >= ntasks) {
        return Err(reader.error(format!(
            "task {} references a pickup or delivery task >= {}",
            u, ntasks
        )));
    }

    // the terminal depot
    tasks.push(tasks[0]);
    let n = tasks.len();

    let allowed = |u: usize, v: usize| v != 0 && u != n - 1 && !(u == 0 && v == n - 1);

    let mut b = NetworkBuilder::with_capacity((n - 1) * (n - 1));
    b.add_nodes(n);
    let mut costs = vec![];
    let mut travel_times = vec![];
    for i in 0..n {
        for j in i + 1..n {
            let c = distance(&tasks[i], &tasks[j]);
            for &(u, v) in &[(i, j), (j, i)] {
                if allowed(u, v) {
                    b.add_arc(u, v);
                    costs.push(c);
                    travel_times.push(c + tasks[u].service as f64);
                }
            }
        }
    }
    let network = b.into_network();

    debug!(
        instance = name,
        nodes = n,
        arcs = network.num_arcs(),
        vehicles,
        capacity,
        "read PDPTW instance"
    );

    Ok(PdptwInstance::new(
        name.to_string(),
        vehicles,
        capacity,
        speed,
        tasks,
        network,
        costs,
        travel_times,
    ))
}

#[cfg(test)]
mod tests {
    use super::read;
    use crate::error::Error;
    use crate::instance::Named;
    use std::io::Cursor;

    const LC: &str = "2 100 1
0 0 0 0 0 100 0 0 0
1 3 4 10 0 50 10 0 2
2 1 1 -10 0 60 5 1 0
";

    #[test]
    fn terminal_depot() {
        let inst = read(Cursor::new(LC), "lc0").unwrap();
        assert_eq!(inst.name(), "lc0");
        assert_eq!(inst.vehicles(), 2);
        assert_eq!(inst.capacity(), 100);
        assert_eq!(inst.speed(), 1);
        assert_eq!(inst.num_nodes(), 4);
        assert_eq!(inst.depot(), 0);
        assert_eq!(inst.terminal(), 3);
        assert_eq!(inst.task(3), inst.task(0));
        assert_eq!(inst.requests(), vec![(1, 2)]);
    }

    #[test]
    fn arcs() {
        let inst = read(Cursor::new(LC), "lc0").unwrap();
        assert_eq!(
            inst.network().arcs(),
            &[(0, 1), (0, 2), (1, 2), (2, 1), (1, 3), (2, 3)][..]
        );
        assert_eq!(inst.costs(), &[5.0, 1.4, 3.6, 3.6, 5.0, 1.4][..]);
        for (e, &(u, _)) in inst.network().arcs().iter().enumerate() {
            assert_eq!(inst.travel_times()[e], inst.costs()[e] + inst.task(u).service as f64);
        }
        // travel times are not symmetric
        assert!(inst.travel_times()[2] != inst.travel_times()[3]);
    }

    #[test]
    fn invalid_tasks() {
        assert!(matches!(
            read(Cursor::new("2 100 1\n0 0 0 0 0 100 0 0 0\n2 3 4 10 0 50 10 0 2\n"), "x"),
            Err(Error::Format { line: 3, .. })
        ));
        assert!(matches!(
            read(Cursor::new("2 100 1\n0 0 0 0 0 100 0 0 0\n1 3 4 10 0 50 10 0 7\n"), "x"),
            Err(Error::Format { .. })
        ));
        assert!(matches!(
            read(Cursor::new("2 100 1\n0 0 0 0 0 100 0 0\n"), "x"),
            Err(Error::Format { line: 2, .. })
        ));
        assert!(matches!(read(Cursor::new("2 100 1\n"), "x"), Err(Error::Format { .. })));
        assert!(matches!(
            read(Cursor::new("2 100 1\n0 0 0 0 50 10 0 0 0\n"), "x"),
            Err(Error::Format { .. })
        ));
    }
}
