use super::{shape::Shape, EditError};

/// A stack of shapes composed into one image. Later shapes paint over earlier ones.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Graphic {
    shapes: Vec<Shape>,
}
impl Graphic {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
    /// Mutable access to the layers in place. Use the editing methods to add or reorder.
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }
    /// Add a shape on top of the stack.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
    /// # Errors
    /// `index` is past the end.
    pub fn insert(&mut self, index: usize, shape: Shape) -> Result<(), EditError> {
        if index > self.shapes.len() {
            return Err(EditError::OutOfBounds {
                index,
                len: self.shapes.len(),
            });
        }
        self.shapes.insert(index, shape);
        Ok(())
    }
    pub fn remove(&mut self, index: usize) -> Option<Shape> {
        (index < self.shapes.len()).then(|| self.shapes.remove(index))
    }
    /// Move the layer at `from` so that it ends up at `to`, shifting the layers in between.
    /// # Errors
    /// Either index is past the end.
    pub fn move_layer(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        let len = self.shapes.len();
        if let Some(index) = [from, to].into_iter().find(|index| *index >= len) {
            return Err(EditError::OutOfBounds { index, len });
        }
        let shape = self.shapes.remove(from);
        self.shapes.insert(to, shape);
        Ok(())
    }
    #[must_use]
    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}
impl From<Vec<Shape>> for Graphic {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}
impl FromIterator<Shape> for Graphic {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}
impl<'a> IntoIterator for &'a Graphic {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
