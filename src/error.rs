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

//! Error type shared by all readers and algorithms of this crate.

use std::error;
use std::fmt;
use std::io;

/// The input format (or processing stage) an error originates from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    /// OR-library generalized assignment files.
    Gap,
    /// OR-library resource constrained shortest path files.
    Rcsp,
    /// Li & Lim pickup and delivery files.
    Pdptw,
    /// Linear multicommodity flow files.
    LinearMcf,
    /// Multicommodity network design files.
    NetworkDesign,
    /// DIMACS shortest path (`.gr`) files.
    Dimacs,
}

impl fmt::Display for Format {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Format::*;
        let name = match self {
            Gap => "GAP",
            Rcsp => "RCSP",
            Pdptw => "PDPTW",
            LinearMcf => "linear MCF",
            NetworkDesign => "MCF network design",
            Dimacs => "DIMACS",
        };
        write!(fmt, "{}", name)
    }
}

/// Error when reading an instance or deriving data from it.
#[derive(Debug)]
pub enum Error {
    /// The underlying stream failed.
    Io(io::Error),
    /// A record is structurally malformed.
    Format { format: Format, line: usize, msg: String },
    /// A wrapped row did not reach its width within the continuation budget.
    Truncated {
        format: Format,
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A weight handed to the shortest path solver is negative or missing.
    InvalidWeight { arc: usize, msg: String },
    /// An unknown instance, destination or tightness value was requested.
    InvalidParameter(String),
    /// The DIMACS distance and time files do not describe the same arcs.
    Alignment { line: usize, msg: String },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Format { format, line, msg } => write!(fmt, "{} format error on line {}: {}", format, line, msg),
            Truncated {
                format,
                line,
                expected,
                found,
            } => write!(
                fmt,
                "{} input truncated on line {}: expected {} values in row, found {}",
                format, line, expected, found
            ),
            InvalidWeight { arc, msg } => write!(fmt, "Invalid weight of arc {}: {}", arc, msg),
            InvalidParameter(msg) => write!(fmt, "Invalid parameter: {}", msg),
            Alignment { line, msg } => write!(fmt, "Alignment error on line {}: {}", line, msg),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
