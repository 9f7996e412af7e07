//! Overlays expressed in a graph's own coordinates.

use glam::DVec2;

use super::{Arrow, Graph, Shape};
use crate::errors::{GeometryError, Result};
use crate::geometry::clip_line_to_rect;
use crate::log::{debug, warn};
use crate::render::defaults;
use crate::render::{LineSegment, Primitive};
use crate::types::{Color, Point};

/// An arrow of graph-space components `(x, y)`, tail at a graph coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphVector {
    components: DVec2,
    tail: DVec2,
    arrow: Arrow,
}

impl GraphVector {
    /// A vector with its tail at the graph origin
    pub fn new(graph: &Graph, x: f64, y: f64, color: impl Into<Color>) -> Result<Self> {
        Self::from_tail(graph, 0.0, 0.0, x, y, color)
    }

    /// A vector with its tail at graph coordinate `(origin_x, origin_y)`
    pub fn from_tail(
        graph: &Graph,
        origin_x: f64,
        origin_y: f64,
        x: f64,
        y: f64,
        color: impl Into<Color>,
    ) -> Result<Self> {
        if !(x.is_finite() && y.is_finite() && origin_x.is_finite() && origin_y.is_finite()) {
            return Err(GeometryError::NonFinite { what: "graph vector" }.into());
        }
        if x == 0.0 && y == 0.0 {
            return Err(GeometryError::ZeroVector.into());
        }

        let tail = graph.to_surface(origin_x, origin_y);
        let tip = graph.to_surface(origin_x + x, origin_y + y);
        let arrow = Arrow::new(tail, tip, color, defaults::GRAPH_OVERLAY_WIDTH, defaults::GRAPH_OVERLAY_LAYER)?;

        Ok(Self {
            components: DVec2::new(x, y),
            tail: DVec2::new(origin_x, origin_y),
            arrow,
        })
    }

    pub fn with_line_width(mut self, line_width: f64) -> Result<Self> {
        if !line_width.is_finite() {
            return Err(GeometryError::NonFinite { what: "graph vector line width" }.into());
        }
        self.arrow = self.arrow.with_line_width(line_width);
        Ok(self)
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.arrow = self.arrow.with_layer(layer);
        self
    }

    /// Graph-space components
    pub fn components(&self) -> DVec2 {
        self.components
    }

    /// Graph-space tail coordinate
    pub fn tail(&self) -> DVec2 {
        self.tail
    }

    /// The surface-space arrow this vector draws
    pub fn arrow(&self) -> &Arrow {
        &self.arrow
    }
}

impl Shape for GraphVector {
    fn primitives(&self) -> Vec<Primitive> {
        self.arrow.primitives()
    }
}

/// The infinite line through two graph coordinates, cut to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphLine {
    through: (Point, Point),
    visible: Option<(Point, Point)>,
    color: Color,
    line_width: f64,
    layer: i32,
}

impl GraphLine {
    pub fn new(graph: &Graph, x1: f64, y1: f64, x2: f64, y2: f64, color: impl Into<Color>) -> Result<Self> {
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return Err(GeometryError::NonFinite { what: "graph line point" }.into());
        }
        let a = graph.to_surface(x1, y1);
        let b = graph.to_surface(x2, y2);
        let dir = b - a;
        if dir == DVec2::ZERO {
            return Err(GeometryError::CoincidentLinePoints { x: x1, y: y1 }.into());
        }

        let grid = graph.grid();
        let visible = clip_line_to_rect(a, dir, grid.surface_width(), grid.surface_height());
        if visible.is_none() {
            warn!(%a, %b, "graph line misses the surface");
        }
        debug!(?visible, "graph line clipped");

        Ok(Self {
            through: (a, b),
            visible,
            color: color.into(),
            line_width: defaults::GRAPH_OVERLAY_WIDTH,
            layer: defaults::GRAPH_OVERLAY_LAYER,
        })
    }

    pub fn with_line_width(mut self, line_width: f64) -> Result<Self> {
        if !line_width.is_finite() {
            return Err(GeometryError::NonFinite { what: "graph line width" }.into());
        }
        self.line_width = line_width;
        Ok(self)
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// The two surface points the line was defined through
    pub fn through(&self) -> (Point, Point) {
        self.through
    }

    /// The part of the line inside the surface, if any
    pub fn segment(&self) -> Option<LineSegment> {
        self.visible.map(|(start, end)| LineSegment {
            start,
            end,
            width: self.line_width,
            color: self.color.clone(),
            layer: self.layer,
        })
    }
}

impl Shape for GraphLine {
    fn primitives(&self) -> Vec<Primitive> {
        self.segment().into_iter().map(Primitive::Line).collect()
    }
}
