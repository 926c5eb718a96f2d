//! Generic per-element payload storage.
//!
//! A [DataLayer] is a plain arena of values addressed by a map's dense
//! element indices: slot `i` belongs to the tile (or edge, or corner) at
//! index `i` of the map it was built for. The layer itself knows nothing
//! about coordinates, so one map can carry any number of layers of
//! different value types side by side. Build layers through the
//! [HexMap](crate::HexMap) helpers so lengths always match.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Dense per-element values for one map. Indexes line up with the map's
/// element indices of a single kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLayer<T> {
    values: Vec<T>,
}

impl<T> DataLayer<T> {
    /// A layer of `len` copies of the given value.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            values: vec![value; len],
        }
    }

    /// A layer whose slot `i` holds `f(i)`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            values: (0..len).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut()
    }
}

impl<T> FromIterator<T> for DataLayer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for DataLayer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for DataLayer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T> IntoIterator for DataLayer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let layer = DataLayer::filled(4, 7_u8);
        assert_eq!(layer.len(), 4);
        assert!(layer.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_from_fn_and_indexing() {
        let mut layer = DataLayer::from_fn(3, |i| i * 10);
        assert_eq!(layer[2], 20);
        layer[1] = 99;
        assert_eq!(layer.get(1), Some(&99));
        assert_eq!(layer.get(3), None);
    }
}
