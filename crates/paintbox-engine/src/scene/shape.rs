use crate::render::{GraphicsContext, ShaderBindings};

use super::shapes::{Circle, Point, Triangle};

/// A drawable shape.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and a match arm in [`Shape::render`]
/// - add a push helper on [`Scene`](super::Scene) inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Triangle(Triangle),
    Circle(Circle),
}

impl Shape {
    /// Issues this shape's draw calls.
    pub fn render<G>(&self, gfx: &mut G, bindings: ShaderBindings)
    where
        G: GraphicsContext + ?Sized,
    {
        match self {
            Shape::Point(p) => p.render(gfx, bindings),
            Shape::Triangle(t) => t.render(gfx, bindings),
            Shape::Circle(c) => c.render(gfx, bindings),
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}
