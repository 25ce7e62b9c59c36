//! Coordinate-indexed stacks of placed objects.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::XY;

/// A mapping from coordinate to a stack of objects.
///
/// The last element of a stack is the top. A coordinate is present iff its
/// stack is non-empty: [`Layer::pop`] removes the entry together with the
/// last object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<T> {
    cells: BTreeMap<XY, Vec<T>>,
}

impl<T> Layer<T> {
    /// Creates an empty layer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Returns the full stack at a coordinate, bottom first.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&[T]> {
        self.cells.get(&XY::new(x, y)).map(Vec::as_slice)
    }

    /// Returns the most recently pushed object at a coordinate.
    #[must_use]
    pub fn peek(&self, x: i32, y: i32) -> Option<&T> {
        self.cells.get(&XY::new(x, y)).and_then(|stack| stack.last())
    }

    /// Pushes an object on top of the stack at a coordinate.
    pub fn push(&mut self, x: i32, y: i32, obj: T) {
        self.cells.entry(XY::new(x, y)).or_default().push(obj);
    }

    /// Removes and returns the top object at a coordinate.
    ///
    /// Returns `None` if nothing is placed there.
    pub fn pop(&mut self, x: i32, y: i32) -> Option<T> {
        let pos = XY::new(x, y);
        let stack = self.cells.get_mut(&pos)?;
        let popped = stack.pop();
        if stack.is_empty() {
            self.cells.remove(&pos);
        }
        popped
    }

    /// Returns `true` if at least one object is placed at a coordinate.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains_key(&XY::new(x, y))
    }

    /// Returns the number of occupied coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no objects are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of objects across all stacks.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    /// Removes every object.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterates occupied cells in `(x, y)` order.
    #[must_use]
    pub fn cells(&self) -> Cells<'_, T> {
        Cells {
            inner: self.cells.iter(),
        }
    }

    /// Iterates every object with its coordinate, cell by cell, bottom first.
    pub fn objects(&self) -> impl Iterator<Item = (XY, &T)> + '_ {
        self.cells
            .iter()
            .flat_map(|(pos, stack)| stack.iter().map(move |obj| (*pos, obj)))
    }
}

impl<T> Default for Layer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(XY, T)> for Layer<T> {
    fn from_iter<I: IntoIterator<Item = (XY, T)>>(iter: I) -> Self {
        let mut layer = Self::new();
        layer.extend(iter);
        layer
    }
}

impl<T> Extend<(XY, T)> for Layer<T> {
    fn extend<I: IntoIterator<Item = (XY, T)>>(&mut self, iter: I) {
        for (pos, obj) in iter {
            self.push(pos.x, pos.y, obj);
        }
    }
}

/// Iterator over the occupied cells of a [`Layer`].
#[derive(Debug, Clone)]
pub struct Cells<'a, T> {
    inner: btree_map::Iter<'a, XY, Vec<T>>,
}

impl<'a, T> Iterator for Cells<'a, T> {
    type Item = (XY, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(pos, stack)| (*pos, stack.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Cells<'_, T> {}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Layer<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // JSON maps need string keys, so cells go out as `[xy, stack]` pairs.
        serializer.collect_seq(self.cells.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Layer<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(XY, Vec<T>)>::deserialize(deserializer)?;
        let mut layer = Self::new();
        for (pos, stack) in entries {
            for obj in stack {
                layer.push(pos.x, pos.y, obj);
            }
        }
        Ok(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_layer_is_empty() {
        let layer: Layer<i32> = Layer::new();
        assert!(layer.is_empty());
        assert_eq!(layer.len(), 0);
        assert_eq!(layer.object_count(), 0);
    }

    #[test]
    fn push_creates_cell() {
        let mut layer = Layer::new();
        layer.push(1, 2, 'a');
        assert!(layer.contains(1, 2));
        assert_eq!(layer.get(1, 2), Some(&['a'][..]));
    }

    #[test]
    fn push_stacks_in_order() {
        let mut layer = Layer::new();
        layer.push(0, 0, 1);
        layer.push(0, 0, 2);
        layer.push(0, 0, 3);
        assert_eq!(layer.get(0, 0), Some(&[1, 2, 3][..]));
        assert_eq!(layer.peek(0, 0), Some(&3));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.object_count(), 3);
    }

    #[test]
    fn absent_coordinate_reports_none() {
        let layer: Layer<i32> = Layer::new();
        assert_eq!(layer.get(5, 5), None);
        assert_eq!(layer.peek(5, 5), None);
    }

    #[test]
    fn pop_absent_is_none() {
        let mut layer: Layer<i32> = Layer::new();
        assert_eq!(layer.pop(0, 0), None);
    }

    #[test]
    fn pop_last_removes_cell() {
        let mut layer = Layer::new();
        layer.push(7, 8, -1);
        assert_eq!(layer.pop(7, 8), Some(-1));
        assert!(!layer.contains(7, 8));
        assert_eq!(layer.get(7, 8), None);
        assert!(layer.is_empty());
    }

    #[test]
    fn negative_values_are_real_objects() {
        // -1 is an ordinary object, not a "not found" marker.
        let mut layer = Layer::new();
        layer.push(0, 0, -1);
        assert_eq!(layer.peek(0, 0), Some(&-1));
        assert_eq!(layer.peek(0, 1), None);
    }

    #[test]
    fn cells_iterate_in_coordinate_order() {
        let mut layer = Layer::new();
        layer.push(30, 0, 'c');
        layer.push(0, 30, 'b');
        layer.push(0, 0, 'a');
        let order: Vec<XY> = layer.cells().map(|(pos, _)| pos).collect();
        assert_eq!(order, vec![XY::new(0, 0), XY::new(0, 30), XY::new(30, 0)]);
    }

    #[test]
    fn objects_flatten_stacks() {
        let mut layer = Layer::new();
        layer.push(1, 1, 'x');
        layer.push(1, 1, 'y');
        layer.push(0, 0, 'z');
        let objects: Vec<(XY, char)> = layer.objects().map(|(pos, c)| (pos, *c)).collect();
        assert_eq!(
            objects,
            vec![
                (XY::new(0, 0), 'z'),
                (XY::new(1, 1), 'x'),
                (XY::new(1, 1), 'y'),
            ]
        );
    }

    #[test]
    fn collect_from_pairs() {
        let layer: Layer<u8> = vec![(XY::new(0, 0), 1), (XY::new(0, 0), 2)]
            .into_iter()
            .collect();
        assert_eq!(layer.get(0, 0), Some(&[1, 2][..]));
    }

    #[test]
    fn clear_removes_everything() {
        let mut layer = Layer::new();
        layer.push(0, 0, 1);
        layer.push(1, 0, 1);
        layer.clear();
        assert!(layer.is_empty());
    }
}
