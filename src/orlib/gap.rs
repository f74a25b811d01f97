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

//! This module implements a read function for the OR-Library generalized
//! assignment format. A file contains several problems and looks as follows.
//!
//! 1. the first line contains the number of problems `P`
//! 2. each problem starts with a line `<m> <n>` with the number of agents `m`
//!    and the number of jobs `n`
//! 3. then follow `m` rows with `n` costs each, `m` rows with `n` resource
//!    demands each and one row with the `m` agent capacities
//!
//! Rows are usually wrapped over several physical lines, a row ends as soon
//! as it contains the required number of values.
//!
//! The sets `gap1`, ..., `gap12` are maximization problems. Their costs are
//! negated, so that all instances are minimization problems. The instances
//! are named `{prefix}{m}{n}-{j}` where `j` is the (1-based) number of the
//! problem in the file and `prefix` is `c` for the numbered sets and the
//! letter of the set (`a`, ..., `d`) otherwise, e.g. `c515-1` or `d20100-1`.

use crate::error::{Error, Format, Result};
use crate::instance::{Bunch, GapInstance};
use crate::options::DecodeOptions;
use crate::reader::LineReader;

use std::io::Read;
use std::path::Path;

use tracing::debug;

/// Return the instance name prefix of a set and whether its costs are negated.
///
/// # Example
///
/// ```
/// use or_datasets::orlib::gap::set_prefix;
///
/// assert_eq!(set_prefix("gap1"), ("c".to_string(), true));
/// assert_eq!(set_prefix("gapd"), ("d".to_string(), false));
/// ```
pub fn set_prefix(set: &str) -> (String, bool) {
    let suffix = set.strip_prefix("gap").unwrap_or(set);
    let numeric = !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit());
    if numeric {
        ("c".to_string(), true)
    } else {
        (suffix.to_string(), false)
    }
}

/// Read all problems of the GAP file of set `set`.
///
/// If `selector` is given, only the instance with this name is returned (and
/// selected in the returned collection). It is an error if the file does not
/// contain such an instance.
pub fn read<R: Read>(r: R, set: &str, selector: Option<&str>) -> Result<Bunch<GapInstance>> {
    read_with_options(r, set, selector, &DecodeOptions::default())
}

pub fn read_with_options<R: Read>(
    r: R,
    set: &str,
    selector: Option<&str>,
    opts: &DecodeOptions,
) -> Result<Bunch<GapInstance>> {
    let mut reader = LineReader::new(r, Format::Gap);
    let (prefix, negate) = set_prefix(set);
    let budget = opts.continuation_budget();

    let nproblems = reader.read_numbers::<usize>(1, "number of problems")?[0];
    debug!(set, problems = nproblems, negate, "reading GAP file");

    let mut bunch = Bunch::new("GAP");
    for p in 0..nproblems {
        let mn = reader.read_numbers::<usize>(2, "number of agents and jobs")?;
        let (m, n) = (mn[0], mn[1]);
        let name = format!("{}{}{}-{}", prefix, m, n, p + 1);

        let mut costs = Vec::with_capacity(m);
        for _ in 0..m {
            let mut row = reader.read_row::<i64>(n, budget)?;
            if negate {
                row.iter_mut().for_each(|c| *c = -*c);
            }
            costs.push(row);
        }

        let mut demands = Vec::with_capacity(m);
        for _ in 0..m {
            demands.push(reader.read_row::<i64>(n, budget)?);
        }

        let capacities = reader.read_row::<i64>(m, budget)?;

        match selector {
            Some(sel) if sel != name => continue,
            _ => (),
        }

        debug!(instance = %name, agents = m, jobs = n, "read GAP instance");
        bunch.push(GapInstance::new(name, costs, demands, capacities))?;

        if let Some(sel) = selector {
            bunch.select(sel);
            break;
        }
    }

    if let Some(sel) = selector {
        if bunch.get(sel).is_none() {
            return Err(Error::InvalidParameter(format!(
                "GAP set '{}' has no instance '{}'",
                set, sel
            )));
        }
    }

    Ok(bunch)
}

/// Read a GAP file, the set name is the file stem (e.g. `gap1.txt` is set `gap1`).
pub fn read_from_file(filename: &str, selector: Option<&str>) -> Result<Bunch<GapInstance>> {
    let set = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    read(std::fs::File::open(filename)?, &set, selector)
}

#[cfg(test)]
mod tests {
    use super::{read, read_with_options, set_prefix};
    use crate::error::Error;
    use crate::instance::Named;
    use crate::options::DecodeOptions;
    use std::io::Cursor;

    const TWO_PROBLEMS: &str = "2
 2 2
 1 2
 3 4
 1 1
 1 1
 5 5
 2 3
 4
 5
 6
 7 8 9
 2 2
 2
 2 2 2
 10
 10
";

    #[test]
    fn prefix() {
        assert_eq!(set_prefix("gap12"), ("c".to_string(), true));
        assert_eq!(set_prefix("gapa"), ("a".to_string(), false));
        assert_eq!(set_prefix("gap"), ("".to_string(), false));
    }

    #[test]
    fn numeric_set_is_negated() {
        let bunch = read(Cursor::new("1\n2 2\n1 2\n3 4\n1 1\n1 1\n5 5\n"), "gap1", None).unwrap();
        let gap = bunch.instance().unwrap();
        assert_eq!(gap.name(), "c22-1");
        assert_eq!(gap.num_agents(), 2);
        assert_eq!(gap.num_jobs(), 2);
        assert_eq!(gap.costs(), &[vec![-1, -2], vec![-3, -4]][..]);
        assert_eq!(gap.demands(), &[vec![1, 1], vec![1, 1]][..]);
        assert_eq!(gap.capacities(), &[5, 5][..]);
    }

    #[test]
    fn lettered_set_is_not_negated() {
        let bunch = read(Cursor::new("1\n2 2\n1 2\n3 4\n1 1\n1 1\n5 5\n"), "gapa", None).unwrap();
        let gap = bunch.instance().unwrap();
        assert_eq!(gap.name(), "a22-1");
        assert_eq!(gap.costs(), &[vec![1, 2], vec![3, 4]][..]);
    }

    #[test]
    fn wrapped_rows() {
        let bunch = read(Cursor::new(TWO_PROBLEMS), "gapd", None).unwrap();
        assert_eq!(bunch.len(), 2);
        assert!(bunch.instance().is_none());

        let second = bunch.get("d23-2").unwrap();
        assert_eq!(second.num_agents(), 2);
        assert_eq!(second.num_jobs(), 3);
        assert_eq!(second.costs(), &[vec![4, 5, 6], vec![7, 8, 9]][..]);
        assert_eq!(second.demands(), &[vec![2, 2, 2], vec![2, 2, 2]][..]);
        assert_eq!(second.capacities(), &[10, 10][..]);
    }

    #[test]
    fn selector() {
        let bunch = read(Cursor::new(TWO_PROBLEMS), "gap3", Some("c23-2")).unwrap();
        assert_eq!(bunch.len(), 1);
        let gap = bunch.instance().unwrap();
        assert_eq!(gap.name(), "c23-2");
        assert_eq!(gap.costs()[1], vec![-7, -8, -9]);

        // stops reading after the match
        let bunch = read(Cursor::new(TWO_PROBLEMS), "gap3", Some("c22-1")).unwrap();
        assert_eq!(bunch.len(), 1);

        assert!(matches!(
            read(Cursor::new(TWO_PROBLEMS), "gap3", Some("c22-3")),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn truncated_row() {
        let opts = DecodeOptions::default().max_continuation_lines(1);
        match read_with_options(Cursor::new(TWO_PROBLEMS), "gapd", None, &opts) {
            Err(Error::Truncated { expected, found, .. }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            _ => panic!("expected truncated input"),
        }

        assert!(matches!(
            read(Cursor::new("1\n2 2\n1 2\n3 4\n1 1\n"), "gap1", None),
            Err(Error::Truncated { .. })
        ));
    }

    #[test]
    fn malformed() {
        assert!(matches!(
            read(Cursor::new("1\n2 x\n"), "gap1", None),
            Err(Error::Format { line: 2, .. })
        ));
        assert!(matches!(read(Cursor::new(""), "gap1", None), Err(Error::Format { .. })));
    }
}
