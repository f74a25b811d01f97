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

//! Reading files of J. E. Beasley's OR-Library.
//!
//! - [`gap`]: generalized assignment problems (`gap1`, ..., `gap12`,
//!   `gapa`, ..., `gapd`)
//! - [`rcsp`]: resource constrained shortest path problems (`rcsp1`, ...,
//!   `rcsp24`)

pub mod gap;
pub mod rcsp;
