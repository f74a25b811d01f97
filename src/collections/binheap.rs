// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Binary heap implementation

use crate::collections::ItemPriQueue;

use num_traits::{FromPrimitive, ToPrimitive};
use std::cmp::Ordering;

/// Binary heap over dense integer keys.
///
/// Elements with equal values are ordered by their key, so the heap pops the
/// smallest key among all elements with minimal value. This makes the order
/// in which elements are removed independent of the insertion order.
pub struct BinHeap<V, ID = u32> {
    /// The keys in heap order.
    heap: Vec<ID>,
    /// The heap position of each key (`None` if the key is not on the heap).
    pos: Vec<Option<ID>>,
    /// The value of each key.
    values: Vec<Option<V>>,
}

impl<V> BinHeap<V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a heap with preallocated space for the keys `0..n`.
    pub fn with_capacity(n: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(n),
            pos: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }
}

impl<V, ID> BinHeap<V, ID> {

    /// Return the number of elements on the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<V, ID> Default for BinHeap<V, ID> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            pos: vec![],
            values: vec![],
        }
    }
}

impl<V, ID> ItemPriQueue<V> for BinHeap<V, ID>
where
    V: PartialOrd,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    fn clear(&mut self) {
        self.heap.clear();
        self.pos.clear();
        self.values.clear();
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn contains(&self, key: usize) -> bool {
        self.pos.get(key).map(Option::is_some).unwrap_or(false)
    }

    fn value(&self, key: usize) -> Option<&V> {
        if self.contains(key) {
            self.values[key].as_ref()
        } else {
            None
        }
    }

    fn push(&mut self, key: usize, value: V) {
        debug_assert!(!self.contains(key), "key {} is already on the heap", key);
        if key >= self.pos.len() {
            self.pos.resize_with(key + 1, || None);
            self.values.resize_with(key + 1, || None);
        }
        let cur_pos = self.heap.len();
        self.heap.push(Self::id(key));
        self.pos[key] = Some(Self::id(cur_pos));
        self.values[key] = Some(value);
        self.upheap(key);
    }

    fn decrease_key(&mut self, key: usize, value: V) -> bool {
        let smaller = match self.value(key) {
            Some(old) => value < *old,
            None => false,
        };
        if smaller {
            self.values[key] = Some(value);
            self.upheap(key);
        }
        smaller
    }

    fn pop_min(&mut self) -> Option<(usize, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element from the heap
        let min_key = Self::index(self.heap.swap_remove(0));
        self.pos[min_key] = None;
        let min_value = self.values[min_key].take()?;

        if !self.heap.is_empty() {
            let n = self.heap.len();
            let key = Self::index(self.heap[0]);
            let mut cur_pos = 0;
            loop {
                let left_pos = 2 * cur_pos + 1;
                let right_pos = left_pos + 1;
                let next_pos = if left_pos >= n {
                    break;
                } else if right_pos >= n {
                    left_pos
                } else if self.less(Self::index(self.heap[left_pos]), Self::index(self.heap[right_pos])) {
                    left_pos
                } else {
                    right_pos
                };

                let next_key = Self::index(self.heap[next_pos]);
                if !self.less(next_key, key) {
                    break;
                }

                self.heap[cur_pos] = self.heap[next_pos];
                self.pos[next_key] = Some(Self::id(cur_pos));
                cur_pos = next_pos;
            }
            self.heap[cur_pos] = Self::id(key);
            self.pos[key] = Some(Self::id(cur_pos));
        }

        Some((min_key, min_value))
    }
}

impl<V, ID> BinHeap<V, ID>
where
    V: PartialOrd,
    ID: FromPrimitive + ToPrimitive + Copy + Eq,
{
    fn id(i: usize) -> ID {
        ID::from_usize(i).expect("heap index does not fit into the id type")
    }

    fn index(id: ID) -> usize {
        id.to_usize().expect("heap id does not fit into usize")
    }

    /// Return `true` if the element with key `a` must be popped before `b`.
    fn less(&self, a: usize, b: usize) -> bool {
        match (&self.values[a], &self.values[b]) {
            (Some(x), Some(y)) => match x.partial_cmp(y) {
                Some(Ordering::Less) => true,
                Some(Ordering::Greater) => false,
                _ => a < b,
            },
            _ => a < b,
        }
    }

    /// Move the element `key` up in the heap until its parent must not be
    /// popped after it or the root node is reached.
    fn upheap(&mut self, key: usize) {
        let mut cur_pos = match self.pos[key] {
            Some(p) => Self::index(p),
            None => return,
        };
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            let parent_key = Self::index(self.heap[parent_pos]);
            if !self.less(key, parent_key) {
                break;
            }
            self.heap[cur_pos] = self.heap[parent_pos];
            self.pos[parent_key] = Some(Self::id(cur_pos));
            cur_pos = parent_pos;
        }
        self.pos[key] = Some(Self::id(cur_pos));
        self.heap[cur_pos] = Self::id(key);
    }
}
