//! Screen-space geometry for composite 2D shapes.
//!
//! Grids, origin-anchored graphs, arrows and rotated rectangles are described
//! by a handful of semantic parameters and turned into line, triangle, circle
//! and square primitives. Computing a shape never touches a renderer:
//! [`Shape::primitives`] is pure, and [`Shape::draw`] feeds the result to any
//! [`Renderer`].
//!
//! ```
//! use gridsketch::{Arrow, Graph, GraphMode, OriginAnchor, Point, RecordingRenderer, Shape};
//!
//! let mut canvas = RecordingRenderer::new(640.0, 480.0);
//!
//! let graph = Graph::new(8, 8, "gray", OriginAnchor::Center, GraphMode::Lines, &canvas)?;
//! graph.draw(&mut canvas);
//!
//! let arrow = Arrow::new(Point::new(10.0, 10.0), Point::new(100.0, 60.0), "blue", 2.0, 1)?;
//! arrow.draw(&mut canvas);
//!
//! assert_eq!(canvas.triangles().count(), 1);
//! # Ok::<(), gridsketch::Error>(())
//! ```

pub mod errors;
pub mod geometry;
pub mod log;
pub mod render;
pub mod shapes;
pub mod surface;
pub mod types;

pub use errors::{CaptureError, ConfigError, Error, GeometryError, Result};
pub use render::{
    Circle, Emit, LineSegment, Primitive, RecordingRenderer, Renderer, Square, SvgRenderer, Triangle,
};
pub use shapes::{
    AnyShape, Arrow, Graph, GraphLine, GraphMode, GraphVector, Grid, OriginAnchor, RotatableRectangle, Shape,
};
pub use surface::{Surface, SurfaceSize};
pub use types::{Angle, Color, Point, UnitVec};
