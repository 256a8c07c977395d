// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded cache of active pointers.
//!
//! The cache holds at most [`MAX_POINTERS`] records in press order. The first
//! two records are the fingers of a pinch; further pointers are ignored until
//! a slot frees up.

use kurbo::Point;
use smallvec::SmallVec;

/// Maximum number of pointers tracked at once.
pub const MAX_POINTERS: usize = 2;

/// Last known position of one active pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRecord<K> {
    /// Pointer identity.
    pub id: K,
    /// Last known position in viewport coordinates.
    pub position: Point,
}

/// Active pointers in press order.
#[derive(Clone, Debug)]
pub struct PointerCache<K> {
    records: SmallVec<[PointerRecord<K>; MAX_POINTERS]>,
}

impl<K> Default for PointerCache<K> {
    fn default() -> Self {
        Self {
            records: SmallVec::new(),
        }
    }
}

impl<K: Copy + PartialEq> PointerCache<K> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked pointers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no pointer is tracked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if `id` is tracked.
    pub fn contains(&self, id: K) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Last known position of `id`.
    pub fn position(&self, id: K) -> Option<Point> {
        self.records.iter().find(|r| r.id == id).map(|r| r.position)
    }

    /// Starts tracking `id` at `position`.
    ///
    /// An already tracked pointer is updated in place. Returns `false` if the
    /// cache is full and `id` was not tracked.
    pub fn insert(&mut self, id: K, position: Point) -> bool {
        if self.update(id, position) {
            return true;
        }
        if self.records.len() >= MAX_POINTERS {
            return false;
        }
        self.records.push(PointerRecord { id, position });
        true
    }

    /// Updates the position of `id`, returning `false` if it is not tracked.
    pub fn update(&mut self, id: K, position: Point) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.position = position;
                true
            }
            None => false,
        }
    }

    /// Stops tracking `id`, returning `false` if it was not tracked.
    pub fn remove(&mut self, id: K) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Positions of the first two pointers, in press order.
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.records.as_slice() {
            [first, second, ..] => Some((first.position, second.position)),
            _ => None,
        }
    }

    /// Iterates over the tracked pointers in press order.
    pub fn iter(&self) -> impl Iterator<Item = &PointerRecord<K>> {
        self.records.iter()
    }

    /// Forgets all pointers.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
