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

#![cfg(feature = "serialize")]

use std::error::Error;

use or_datasets::fetch;
use or_datasets::rcspp;
use or_datasets::{DirSource, Named, NoCache, PdptwInstance, RcsppInstance, SppInstance};

#[test]
fn test_serialize_spp() -> Result<(), Box<dyn Error>> {
    let src = DirSource::new("tests/data");
    let bunch = fetch::spp(&src, NoCache, "NY")?;
    let inst = bunch.instance().ok_or("missing instance")?;

    let json = serde_json::to_string(inst)?;
    let back: SppInstance = serde_json::from_str(&json)?;
    assert_eq!(&back, inst);
    assert_eq!(back.name(), "NY");
    Ok(())
}

#[test]
fn test_serialize_rcspp() -> Result<(), Box<dyn Error>> {
    let src = DirSource::new("tests/data");
    let bunch = rcspp::fetch(&src, NoCache, "NY", &[18], &[0.5])?;
    let inst = bunch.instance().ok_or("missing instance")?;

    let json = serde_json::to_string(inst)?;
    let back: RcsppInstance = serde_json::from_str(&json)?;
    assert_eq!(&back, inst);
    assert_eq!(back.upper(), inst.upper());
    Ok(())
}

#[test]
fn test_serialize_pdptw() -> Result<(), Box<dyn Error>> {
    let src = DirSource::new("tests/data");
    let bunch = fetch::pdptw(&src, "li-lim-100", Some("lc101"))?;
    let inst = bunch.instance().ok_or("missing instance")?;

    let json = serde_json::to_string(inst)?;
    let back: PdptwInstance = serde_json::from_str(&json)?;
    assert_eq!(back.requests(), inst.requests());
    assert_eq!(back.tasks(), inst.tasks());
    assert_eq!(back.network(), inst.network());
    Ok(())
}
