//! Draw primitives: the only things a renderer ever receives.

use std::fmt;

use enum_dispatch::enum_dispatch;

use super::Renderer;
use crate::types::{Color, Point};

/// Common behavior for all primitives
#[enum_dispatch]
pub trait Emit {
    /// Hand this primitive to a renderer
    fn emit(&self, renderer: &mut dyn Renderer);

    /// Draw layer; higher layers paint over lower ones
    fn layer(&self) -> i32;
}

/// A straight stroke between two points
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub width: f64,
    pub color: Color,
    pub layer: i32,
}

impl LineSegment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl Emit for LineSegment {
    fn emit(&self, renderer: &mut dyn Renderer) {
        renderer.draw_line(self);
    }

    fn layer(&self) -> i32 {
        self.layer
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {} -> {} width={} color={} z={}",
            self.start, self.end, self.width, self.color, self.layer
        )
    }
}

/// A filled triangle
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub color: Color,
    pub layer: i32,
}

impl Triangle {
    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}

impl Emit for Triangle {
    fn emit(&self, renderer: &mut dyn Renderer) {
        renderer.draw_triangle(self);
    }

    fn layer(&self) -> i32 {
        self.layer
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "triangle {} {} {} color={} z={}",
            self.a, self.b, self.c, self.color, self.layer
        )
    }
}

/// A filled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub layer: i32,
}

impl Emit for Circle {
    fn emit(&self, renderer: &mut dyn Renderer) {
        renderer.draw_circle(self);
    }

    fn layer(&self) -> i32 {
        self.layer
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "circle {} r={} color={} z={}",
            self.center, self.radius, self.color, self.layer
        )
    }
}

/// A filled axis-aligned square
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub top_left: Point,
    pub size: f64,
    pub color: Color,
    pub layer: i32,
}

impl Square {
    /// A square of side `size` centered on `center`
    pub fn centered(center: Point, size: f64, color: Color, layer: i32) -> Self {
        Square {
            top_left: Point::new(center.x - size / 2.0, center.y - size / 2.0),
            size,
            color,
            layer,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.top_left.x + self.size / 2.0, self.top_left.y + self.size / 2.0)
    }
}

impl Emit for Square {
    fn emit(&self, renderer: &mut dyn Renderer) {
        renderer.draw_square(self);
    }

    fn layer(&self) -> i32 {
        self.layer
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square {} size={} color={} z={}",
            self.top_left, self.size, self.color, self.layer
        )
    }
}

/// Any primitive
#[enum_dispatch(Emit)]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LineSegment),
    Triangle(Triangle),
    Circle(Circle),
    Square(Square),
}

impl Primitive {
    pub fn as_line(&self) -> Option<&LineSegment> {
        match self {
            Primitive::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_triangle(&self) -> Option<&Triangle> {
        match self {
            Primitive::Triangle(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Primitive::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_square(&self) -> Option<&Square> {
        match self {
            Primitive::Square(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Line(l) => fmt::Display::fmt(l, f),
            Primitive::Triangle(t) => fmt::Display::fmt(t, f),
            Primitive::Circle(c) => fmt::Display::fmt(c, f),
            Primitive::Square(s) => fmt::Display::fmt(s, f),
        }
    }
}
