/*
 * Copyright (c) 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Data structures used by the algorithms.

mod binheap;
pub use self::binheap::BinHeap;

/// A priority queue over dense integer keys supporting decrease-key.
///
/// Each key `0..n` can be contained at most once. The queue returns the key
/// with the smallest value first.
pub trait ItemPriQueue<V> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Return `true` if `key` is currently in the queue.
    fn contains(&self, key: usize) -> bool;

    /// Push the element with given `key` and `value` onto the queue.
    ///
    /// The key must not be contained in the queue.
    fn push(&mut self, key: usize, value: V);

    /// Decrease the value of some key in the queue.
    ///
    /// Returns `true` if the new value is smaller than the old one (in which
    /// case the value has been replaced).
    fn decrease_key(&mut self, key: usize, value: V) -> bool;

    /// Remove and return the element with the smallest value from the queue or `None` if
    /// the queue is empty.
    fn pop_min(&mut self) -> Option<(usize, V)>;

    /// Return the current value associated with some key in the queue.
    fn value(&self, key: usize) -> Option<&V>;
}
