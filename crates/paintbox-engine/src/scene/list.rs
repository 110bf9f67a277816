use crate::render::{GraphicsContext, ShaderBindings};

use super::Shape;

/// Append-only, insertion-ordered shape list.
///
/// Shapes are never edited or removed individually; [`clear`](Self::clear)
/// discards the whole sequence. Rendering visits shapes in insertion order, so
/// later shapes paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Drops every shape. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in insertion order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn last(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Renders every shape in insertion order. Does not clear the frame.
    pub fn render<G>(&self, gfx: &mut G, bindings: ShaderBindings)
    where
        G: GraphicsContext + ?Sized,
    {
        for shape in &self.shapes {
            shape.render(gfx, bindings);
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = core::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
