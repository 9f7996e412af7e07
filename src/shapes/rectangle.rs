use super::Shape;
use crate::errors::{GeometryError, Result};
use crate::geometry::{padded_outline, rotate_about};
use crate::log::debug;
use crate::render::{LineSegment, Primitive};
use crate::types::{Angle, Color, Point};

/// A rectangle outline rotated about its center.
///
/// The outline is drawn as seven independent segments through eight points;
/// see [`padded_outline`](crate::geometry::padded_outline) for why there are
/// eight and not four.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatableRectangle {
    center: Point,
    width: f64,
    height: f64,
    color: Color,
    line_width: f64,
    layer: i32,
    angle: Angle,
    corners: [Point; 8],
}

impl RotatableRectangle {
    pub fn new(
        center: Point,
        width: f64,
        height: f64,
        color: impl Into<Color>,
        line_width: f64,
        layer: i32,
        degrees: f64,
    ) -> Result<Self> {
        if !center.is_finite() {
            return Err(GeometryError::NonFinite { what: "rectangle center" }.into());
        }
        if !(width.is_finite() && height.is_finite() && line_width.is_finite()) {
            return Err(GeometryError::NonFinite { what: "rectangle size" }.into());
        }
        if !degrees.is_finite() {
            return Err(GeometryError::NonFinite { what: "rotation angle" }.into());
        }

        let angle = Angle(degrees);
        let corners = padded_outline(width, height, line_width).map(|offset| rotate_about(offset, center, angle));
        debug!(%center, width, height, %angle, "rotated rectangle");

        Ok(Self {
            center,
            width,
            height,
            color: color.into(),
            line_width,
            layer,
            angle,
            corners,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// The eight outline points in surface space, already rotated
    pub fn corners(&self) -> &[Point; 8] {
        &self.corners
    }

    /// One segment per consecutive pair of corners; the last corner already
    /// closes the loop, so there is no segment back to the first.
    pub fn edges(&self) -> Vec<LineSegment> {
        self.corners
            .windows(2)
            .map(|pair| LineSegment {
                start: pair[0],
                end: pair[1],
                width: self.line_width,
                color: self.color.clone(),
                layer: self.layer,
            })
            .collect()
    }
}

impl Shape for RotatableRectangle {
    fn primitives(&self) -> Vec<Primitive> {
        self.edges().into_iter().map(Primitive::Line).collect()
    }
}
