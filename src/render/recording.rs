//! A renderer that records primitives instead of painting them.

use super::{Circle, LineSegment, Primitive, Renderer, Square, Triangle};
use crate::surface::{Surface, SurfaceSize};

/// Keeps every primitive it is handed, in call order
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    size: SurfaceSize,
    primitives: Vec<Primitive>,
}

impl RecordingRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: SurfaceSize { width, height },
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineSegment> {
        self.primitives.iter().filter_map(Primitive::as_line)
    }

    pub fn triangles(&self) -> impl Iterator<Item = &Triangle> {
        self.primitives.iter().filter_map(Primitive::as_triangle)
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.primitives.iter().filter_map(Primitive::as_circle)
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.primitives.iter().filter_map(Primitive::as_square)
    }

    /// One line per primitive, in call order
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for primitive in &self.primitives {
            out.push_str(&primitive.to_string());
            out.push('\n');
        }
        out
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl Surface for RecordingRenderer {
    fn surface_width(&self) -> f64 {
        self.size.width
    }

    fn surface_height(&self) -> f64 {
        self.size.height
    }
}

impl Renderer for RecordingRenderer {
    fn draw_line(&mut self, line: &LineSegment) {
        self.primitives.push(Primitive::Line(line.clone()));
    }

    fn draw_triangle(&mut self, triangle: &Triangle) {
        self.primitives.push(Primitive::Triangle(triangle.clone()));
    }

    fn draw_circle(&mut self, circle: &Circle) {
        self.primitives.push(Primitive::Circle(circle.clone()));
    }

    fn draw_square(&mut self, square: &Square) {
        self.primitives.push(Primitive::Square(square.clone()));
    }
}
