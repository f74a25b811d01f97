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

//! Key-value stores for decoded instances.
//!
//! The fetch functions consult a cache before decoding (or deriving) an
//! instance and populate it afterwards. The key is the instance name, which
//! is deterministic, so a cache hit yields a value identical to a fresh
//! computation. The crate itself never keeps instances around; how long
//! values are kept and where they are stored is up to the implementation.

use std::collections::HashMap;

/// A store of instances keyed by their name.
pub trait InstanceCache<T> {
    /// Return the value stored for `key`.
    fn get(&self, key: &str) -> Option<T>;

    /// Store `value` for `key`, replacing an existing value.
    fn put(&mut self, key: &str, value: &T);
}

impl<'a, C, T> InstanceCache<T> for &'a mut C
where
    C: InstanceCache<T>,
{
    fn get(&self, key: &str) -> Option<T> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &T) {
        (**self).put(key, value)
    }
}

/// A cache that never stores anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl<T> InstanceCache<T> for NoCache {
    fn get(&self, _key: &str) -> Option<T> {
        None
    }

    fn put(&mut self, _key: &str, _value: &T) {}
}

/// An in-memory cache.
#[derive(Clone, Debug)]
pub struct MemoryCache<T> {
    values: HashMap<String, T>,
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        MemoryCache { values: HashMap::new() }
    }
}

impl<T> MemoryCache<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl<T: Clone> InstanceCache<T> for MemoryCache<T> {
    fn get(&self, key: &str) -> Option<T> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &T) {
        self.values.insert(key.to_string(), value.clone());
    }
}
