// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Readers for benchmark instances of network optimization problems.
//!
//! The readers convert the files of several benchmark libraries into a
//! common network model: a [`Network`] with nodes `0..n` and arcs `0..m`
//! together with per-arc data (costs, capacities, resource weights) and
//! problem specific data (time windows, commodities, resource bounds).
//!
//! - [`orlib`]: generalized assignment and resource constrained shortest
//!   path problems of the OR-Library
//! - [`pdptw`]: pickup and delivery problems with time windows (Li & Lim)
//! - [`mmcf`]: multicommodity flow and network design problems
//! - [`dimacs`]: road networks of the 9th DIMACS challenge
//! - [`rcspp`]: resource constrained shortest path problems derived from
//!   the road networks
//!
//! The [`fetch`] module maps data set names to files of a [`Source`].

// # Network model

pub mod builder;
pub use self::builder::NetworkBuilder;

pub mod network;
pub use self::network::{ArcLookup, Network};

pub mod instance;
pub use self::instance::{
    Bunch, Commodity, GapInstance, McfInstance, Named, NetworkDesignInstance, PdptwInstance, RcsppInstance,
    SppInstance, Task,
};

pub mod collections;

// # Algorithms

pub mod shortestpath;

// # Readers

pub mod error;
pub use self::error::{Error, Format, Result};

pub mod options;
pub use self::options::DecodeOptions;

pub mod reader;

pub mod dimacs;
pub mod mmcf;
pub mod orlib;
pub mod pdptw;
pub mod rcspp;

// # Data sets

pub mod cache;
pub use self::cache::{InstanceCache, MemoryCache, NoCache};

pub mod source;
pub use self::source::{DirSource, MemorySource, Source};

pub mod fetch;
