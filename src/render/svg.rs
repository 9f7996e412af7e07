//! SVG output for computed primitives

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ::svg::Document;
use ::svg::node::element::{Circle as SvgCircle, Line, Polygon, Rectangle};

use super::defaults;
use super::{Circle, Emit, LineSegment, Primitive, Renderer, Square, Triangle};
use crate::errors::{CaptureError, Result};
use crate::log::debug;
use crate::surface::{Surface, SurfaceSize};

/// Collects primitives and serializes them as an SVG document.
///
/// Primitives are painted in layer order; primitives sharing a layer keep the
/// order in which they were drawn.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: SurfaceSize,
    primitives: Vec<Primitive>,
}

impl SvgRenderer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: SurfaceSize { width, height },
            primitives: Vec::new(),
        }
    }

    /// Number of primitives drawn so far
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Build the SVG document for everything drawn so far
    pub fn document(&self) -> Document {
        let (w, h) = (self.size.width, self.size.height);
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", w)
            .set("height", h)
            .set("fill", defaults::SVG_BACKGROUND);

        let mut doc = Document::new()
            .set("width", w)
            .set("height", h)
            .set("viewBox", format!("0 0 {} {}", w, h))
            .add(background);

        let mut ordered: Vec<&Primitive> = self.primitives.iter().collect();
        ordered.sort_by_key(|p| p.layer());

        for primitive in ordered {
            doc = match primitive {
                Primitive::Line(l) => doc.add(line_element(l)),
                Primitive::Triangle(t) => doc.add(triangle_element(t)),
                Primitive::Circle(c) => doc.add(circle_element(c)),
                Primitive::Square(s) => doc.add(square_element(s)),
            };
        }
        doc
    }

    /// Serialize the document to a string
    pub fn to_svg_string(&self) -> String {
        self.document().to_string()
    }

    /// Write the current document to `path`, or to
    /// `screenshot-<unix seconds>.svg` in the working directory when no path
    /// is given. Returns the path written.
    pub fn screenshot(&self, path: Option<&Path>) -> Result<PathBuf> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_screenshot_path(),
        };
        debug!(path = %path.display(), primitives = self.primitives.len(), "writing screenshot");
        ::svg::save(&path, &self.document()).map_err(|source| CaptureError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn default_screenshot_path() -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    PathBuf::from(format!("screenshot-{}.svg", secs))
}

fn line_element(l: &LineSegment) -> Line {
    Line::new()
        .set("x1", l.start.x)
        .set("y1", l.start.y)
        .set("x2", l.end.x)
        .set("y2", l.end.y)
        .set("stroke", l.color.to_string())
        .set("stroke-width", l.width)
}

fn triangle_element(t: &Triangle) -> Polygon {
    let points = t
        .points()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    Polygon::new()
        .set("points", points)
        .set("fill", t.color.to_string())
}

fn circle_element(c: &Circle) -> SvgCircle {
    SvgCircle::new()
        .set("cx", c.center.x)
        .set("cy", c.center.y)
        .set("r", c.radius)
        .set("fill", c.color.to_string())
}

fn square_element(s: &Square) -> Rectangle {
    Rectangle::new()
        .set("x", s.top_left.x)
        .set("y", s.top_left.y)
        .set("width", s.size)
        .set("height", s.size)
        .set("fill", s.color.to_string())
}

impl Surface for SvgRenderer {
    fn surface_width(&self) -> f64 {
        self.size.width
    }

    fn surface_height(&self) -> f64 {
        self.size.height
    }
}

impl Renderer for SvgRenderer {
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
