//! Shape types
//!
//! Each shape is computed once from its parameters and knows how to:
//! - Report the primitives it is made of (pure, no renderer needed)
//! - Draw itself by feeding those primitives to a [`Renderer`]

mod arrow;
mod graph;
mod grid;
mod plane;
mod rectangle;

pub use arrow::Arrow;
pub use graph::{Graph, GraphMode, OriginAnchor};
pub use grid::Grid;
pub use plane::{GraphLine, GraphVector};
pub use rectangle::RotatableRectangle;

use enum_dispatch::enum_dispatch;

use crate::render::{Primitive, Renderer, emit_all};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// The primitives making up this shape, in draw order
    fn primitives(&self) -> Vec<Primitive>;

    /// Emit this shape's primitives to a renderer
    fn draw(&self, renderer: &mut dyn Renderer) {
        emit_all(&self.primitives(), renderer);
    }
}

/// A shape enum wrapping all shape types
#[enum_dispatch(Shape)]
#[derive(Debug, Clone)]
pub enum AnyShape {
    Grid(Grid),
    Graph(Graph),
    Arrow(Arrow),
    RotatableRectangle(RotatableRectangle),
    GraphVector(GraphVector),
    GraphLine(GraphLine),
}
