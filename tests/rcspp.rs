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

use std::cell::Cell;
use std::error::Error;
use std::fs::File;
use std::io;

use or_datasets::rcspp::{self, TIGHTNESS};
use or_datasets::{DirSource, MemoryCache, Named, NoCache, Source};

/// A source counting the opened files.
struct Counting {
    inner: DirSource,
    opened: Cell<usize>,
}

impl Counting {
    fn new() -> Self {
        Counting {
            inner: DirSource::new("tests/data"),
            opened: Cell::new(0),
        }
    }
}

impl Source for Counting {
    type Reader = File;

    fn open(&self, key: &str) -> io::Result<File> {
        self.opened.set(self.opened.get() + 1);
        self.inner.open(key)
    }
}

#[test]
fn test_limits() -> Result<(), Box<dyn Error>> {
    let src = Counting::new();
    let bunch = rcspp::fetch(&src, NoCache, "NY", &[18], &[])?;
    assert_eq!(bunch.descr(), "RCSPP");
    assert_eq!(bunch.len(), TIGHTNESS.len());
    // the network is read once for all instances
    assert_eq!(src.opened.get(), 2);

    for (inst, &p) in bunch.iter().zip(TIGHTNESS.iter()) {
        assert_eq!(inst.name(), format!("NY_18_{}", p));
        assert_eq!(inst.source(), 0);
        assert_eq!(inst.sink(), 17);
        assert_eq!(inst.num_resources(), 1);
        assert_eq!(inst.resource(0).len(), inst.num_arcs());
        assert_eq!(inst.lower(), &[0.0][..]);
        // shortest path has length 170 and travel time 204
        assert!((inst.upper()[0] - (170.0 + 34.0 * p)).abs() < 1e-9);
    }

    let uppers = bunch.iter().map(|inst| inst.upper()[0]).collect::<Vec<_>>();
    assert!(uppers.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}

#[test]
fn test_cache() -> Result<(), Box<dyn Error>> {
    let mut cache = MemoryCache::new();

    let src = Counting::new();
    let first = rcspp::fetch(&src, &mut cache, "NY", &[18], &[0.3, 0.5])?;
    assert_eq!(src.opened.get(), 2);
    assert_eq!(cache.len(), 2);
    assert!(cache.contains("NY_18_0.3"));

    // all instances are cached, nothing is read
    let src = Counting::new();
    let second = rcspp::fetch(&src, &mut cache, "NY", &[18], &[0.5, 0.3])?;
    assert_eq!(src.opened.get(), 0);
    assert_eq!(first.get("NY_18_0.3"), second.get("NY_18_0.3"));
    assert_eq!(first.get("NY_18_0.5"), second.get("NY_18_0.5"));

    // a single instance is selected
    let single = rcspp::fetch(&src, &mut cache, "NY", &[18], &[0.5])?;
    assert_eq!(single.instance().map(|i| i.name()), Some("NY_18_0.5"));
    Ok(())
}

#[test]
fn test_deterministic() -> Result<(), Box<dyn Error>> {
    let src = DirSource::new("tests/data");
    let first = rcspp::fetch(&src, NoCache, "NY", &[18], &[0.1])?;
    for _ in 0..3 {
        let again = rcspp::fetch(&src, NoCache, "NY", &[18], &[0.1])?;
        assert_eq!(first.instance(), again.instance());
    }
    Ok(())
}

#[test]
fn test_invalid_parameters() {
    let src = Counting::new();
    assert!(rcspp::fetch(&src, NoCache, "NY", &[19], &[]).is_err());
    assert!(rcspp::fetch(&src, NoCache, "NY", &[18], &[0.9]).is_err());
    assert!(rcspp::fetch(&src, NoCache, "XX", &[], &[]).is_err());
    // parameters are checked before any file is opened
    assert_eq!(src.opened.get(), 0);
}
