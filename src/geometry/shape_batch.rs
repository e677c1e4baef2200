use super::shape::Shape;
use crate::partition::mask::Mask;
use glam::DMat3;

/// An ordered list of shapes of one kind.
///
/// Masks produced from a batch refer to shapes by position, so a batch is never reordered.
/// Filtering with [`Self::select`] produces a new batch and masks of the old one must not be
/// applied to it.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeBatch<S: Shape> {
    shapes: Vec<S>,
}

impl<S: Shape> ShapeBatch<S> {
    pub fn new(shapes: Vec<S>) -> Self {
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.shapes.iter()
    }

    /// Copies the shapes whose mask entry is true into a new batch, preserving order.
    ///
    /// Panics if `mask` was not built for a batch of this length.
    pub fn select(&self, mask: &Mask) -> Self {
        assert_eq!(
            mask.len(),
            self.len(),
            "mask of length {} applied to a batch of {} shapes",
            mask.len(),
            self.len()
        );
        let shapes = self
            .shapes
            .iter()
            .zip(mask.iter())
            .filter_map(|(shape, selected)| selected.then(|| shape.clone()))
            .collect();
        Self { shapes }
    }

    /// Applies `matrix` to every shape
    pub fn transformed(&self, matrix: &DMat3) -> Self {
        Self {
            shapes: self.shapes.iter().map(|s| s.transformed(matrix)).collect(),
        }
    }

    /// Multiplies every coordinate lying exactly on `±bound` by `factor`, pushing faces on the
    /// boundary of a `[-bound, bound]` volume slightly outwards. Meant to be applied once after
    /// generation.
    pub fn expand_boundary(&mut self, bound: f64, factor: f64) {
        for shape in self.shapes.iter_mut() {
            shape.map_coordinates(|c| if c.abs() == bound { c * factor } else { c });
        }
    }
}

impl<'a, S: Shape> IntoIterator for &'a ShapeBatch<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl<S: Shape> FromIterator<S> for ShapeBatch<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
