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

//! Reading shortest path files in DIMACS format (`.gr`).
//!
//! This is the format of the 9th DIMACS implementation challenge road
//! networks. A file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p sp <n> <m>`, where
//!    `<n>` is the number of nodes and `<m>` the number of arcs
//! 4. after the problem line there must be exactly `m` arc lines
//!    `a <u> <v> <w>` denoting the source and sink nodes of an arc (numbered
//!    `1..n`) and its weight `<w>`.

pub mod spp;

use crate::builder::NetworkBuilder;
use crate::error::{Format, Result};
use crate::network::Network;
use crate::options::DecodeOptions;
use crate::reader::LineReader;

use std::io::Read;

/// An arc line of a `.gr` file with 0-based end points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrArc {
    pub tail: usize,
    pub head: usize,
    pub weight: i64,
    /// The line number of the arc line.
    pub line: usize,
}

/// Streaming reader for `.gr` files.
///
/// The problem line is read on construction, afterwards the arcs are returned
/// one by one. The reader makes sure that the file contains exactly as many
/// arcs as announced.
pub struct GrReader<R: Read> {
    reader: LineReader<R>,
    nnodes: usize,
    narcs: usize,
    nread: usize,
    check_weights: bool,
}

impl<R: Read> GrReader<R> {
    pub fn new(r: R) -> Result<Self> {
        GrReader::with_options(r, &DecodeOptions::default())
    }

    /// Create a reader and read the problem line.
    ///
    /// If bounds are checked, negative arc weights are rejected.
    pub fn with_options(r: R, opts: &DecodeOptions) -> Result<Self> {
        let mut reader = LineReader::with_comments(r, Format::Dimacs, 'c');

        let mut pline = reader.expect_line("problem line")?;
        pline.expect("p")?;
        pline.expect("sp")?;
        let nnodes = pline.number()?;
        let narcs = pline.number()?;
        pline.end()?;

        Ok(GrReader {
            reader,
            nnodes,
            narcs,
            nread: 0,
            check_weights: opts.checks_bounds(),
        })
    }

    /// The number of nodes announced by the problem line.
    pub fn num_nodes(&self) -> usize {
        self.nnodes
    }

    /// The number of arcs announced by the problem line.
    pub fn num_arcs(&self) -> usize {
        self.narcs
    }

    /// The number of the last line that has been read.
    pub fn line_number(&self) -> usize {
        self.reader.line_number()
    }

    /// Return the next arc.
    ///
    /// Returns `Ok(None)` after the last arc. It is an error if the file ends
    /// before all arcs have been read or if there are additional lines.
    pub fn next_arc(&mut self) -> Result<Option<GrArc>> {
        if self.nread == self.narcs {
            return match self.reader.read_line()? {
                Some(toks) => Err(toks.error(format!("unexpected line after {} arcs", self.narcs))),
                None => Ok(None),
            };
        }

        let what = format!("{} more arc lines", self.narcs - self.nread);
        let mut toks = self.reader.expect_line(&what)?;
        toks.expect("a")?;
        let tail = toks.node(self.nnodes)?;
        let head = toks.node(self.nnodes)?;
        let weight = toks.number::<i64>()?;
        toks.end()?;
        if self.check_weights && weight < 0 {
            return Err(toks.error(format!("negative arc weight {}", weight)));
        }

        let line = toks.line;
        self.nread += 1;
        Ok(Some(GrArc {
            tail,
            head,
            weight,
            line,
        }))
    }
}

/// Read a `.gr` file and return the network and the arc weights.
pub fn read<R: Read>(r: R) -> Result<(Network, Vec<i64>)> {
    read_with_options(r, &DecodeOptions::default())
}

pub fn read_with_options<R: Read>(r: R, opts: &DecodeOptions) -> Result<(Network, Vec<i64>)> {
    let mut reader = GrReader::with_options(r, opts)?;
    let mut b = NetworkBuilder::with_capacity(reader.num_arcs());
    b.add_nodes(reader.num_nodes());
    let mut weights = Vec::with_capacity(reader.num_arcs());
    while let Some(a) = reader.next_arc()? {
        b.add_arc(a.tail, a.head);
        weights.push(a.weight);
    }
    Ok((b.into_network(), weights))
}

#[cfg(test)]
mod tests {
    use super::{read, GrReader};
    use crate::error::Error;
    use std::io::Cursor;

    const GR: &str = "c 9th DIMACS Implementation Challenge
c
p sp 3 4

c arcs
a 1 2 803
a 2 1 803
a 2 3 158
a 1 3 1000
";

    #[test]
    fn read_gr() {
        let (g, w) = read(Cursor::new(GR)).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.arcs(), &[(0, 1), (1, 0), (1, 2), (0, 2)][..]);
        assert_eq!(w, vec![803, 803, 158, 1000]);
    }

    #[test]
    fn streaming() {
        let mut r = GrReader::new(Cursor::new(GR)).unwrap();
        assert_eq!(r.num_nodes(), 3);
        assert_eq!(r.num_arcs(), 4);
        let a = r.next_arc().unwrap().unwrap();
        assert_eq!((a.tail, a.head, a.weight, a.line), (0, 1, 803, 6));
        assert_eq!(r.line_number(), 6);
        for _ in 0..3 {
            assert!(r.next_arc().unwrap().is_some());
        }
        assert!(r.next_arc().unwrap().is_none());
    }

    #[test]
    fn arc_count() {
        assert!(matches!(
            read(Cursor::new("p sp 2 2\na 1 2 1\n")),
            Err(Error::Format { .. })
        ));
        assert!(matches!(
            read(Cursor::new("p sp 2 1\na 1 2 1\na 2 1 1\n")),
            Err(Error::Format { line: 3, .. })
        ));
    }

    #[test]
    fn malformed_lines() {
        assert!(matches!(read(Cursor::new("p max 2 1\n")), Err(Error::Format { line: 1, .. })));
        assert!(matches!(read(Cursor::new("c only comments\n")), Err(Error::Format { .. })));
        assert!(matches!(
            read(Cursor::new("p sp 2 1\nn 1 2\n")),
            Err(Error::Format { line: 2, .. })
        ));
        assert!(matches!(
            read(Cursor::new("p sp 2 1\na 1 3 1\n")),
            Err(Error::Format { line: 2, .. })
        ));
        assert!(matches!(
            read(Cursor::new("p sp 2 1\na 1 2 -1\n")),
            Err(Error::Format { line: 2, .. })
        ));
    }
}
