//! Rendering sinks for computed primitives
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, layers and accent colors
//! - `primitives`: Line, triangle, circle and square primitives
//! - `recording`: A renderer that keeps every primitive it receives
//! - `svg`: A renderer that builds an SVG document

pub mod defaults;
pub mod primitives;
pub mod recording;
pub mod svg;

pub use primitives::{Circle, Emit, LineSegment, Primitive, Square, Triangle};
pub use recording::RecordingRenderer;
pub use self::svg::SvgRenderer;

use crate::log::trace;
use crate::surface::Surface;

/// A drawing sink. Each call paints (or enqueues) one primitive.
pub trait Renderer: Surface {
    fn draw_line(&mut self, line: &LineSegment);
    fn draw_triangle(&mut self, triangle: &Triangle);
    fn draw_circle(&mut self, circle: &Circle);
    fn draw_square(&mut self, square: &Square);
}

/// Feed primitives to a renderer, in order.
pub fn emit_all(primitives: &[Primitive], renderer: &mut dyn Renderer) {
    trace!(count = primitives.len(), "emitting primitives");
    for primitive in primitives {
        primitive.emit(renderer);
    }
}
