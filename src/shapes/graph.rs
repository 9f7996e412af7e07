use std::fmt;
use std::str::FromStr;

use glam::dvec2;

use super::{Grid, Shape};
use crate::errors::{ConfigError, GeometryError, Result};
use crate::log::debug;
use crate::render::defaults;
use crate::render::{Circle, Primitive, Square};
use crate::surface::Surface;
use crate::types::{Color, Point};

/// Where a graph puts its coordinate origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginAnchor {
    BottomLeft,
    TopLeft,
    TopRight,
    BottomRight,
    Center,
}

impl OriginAnchor {
    pub const ALL: [OriginAnchor; 5] = [
        OriginAnchor::BottomLeft,
        OriginAnchor::TopLeft,
        OriginAnchor::TopRight,
        OriginAnchor::BottomRight,
        OriginAnchor::Center,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OriginAnchor::BottomLeft => "bottom_left",
            OriginAnchor::TopLeft => "top_left",
            OriginAnchor::TopRight => "top_right",
            OriginAnchor::BottomRight => "bottom_right",
            OriginAnchor::Center => "center",
        }
    }

    /// The anchor's position on a grid's surface.
    ///
    /// Corners are the literal surface corners; the center snaps to the
    /// lattice at the rounded-up middle cell.
    pub fn resolve(self, grid: &Grid) -> Point {
        let (w, h) = (grid.surface_width(), grid.surface_height());
        match self {
            OriginAnchor::BottomLeft => Point::new(0.0, h),
            OriginAnchor::TopLeft => Point::new(0.0, 0.0),
            OriginAnchor::TopRight => Point::new(w, 0.0),
            OriginAnchor::BottomRight => Point::new(w, h),
            OriginAnchor::Center => Point::new(
                f64::from(grid.cols().div_ceil(2)) * grid.box_width(),
                f64::from(grid.rows().div_ceil(2)) * grid.box_height(),
            ),
        }
    }
}

impl FromStr for OriginAnchor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        OriginAnchor::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownOrigin { value: s.to_string() })
    }
}

impl fmt::Display for OriginAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a graph draws its lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphMode {
    /// Full-span lines, one more in each direction than the plain grid has
    Lines,
    /// A square dot at every lattice intersection, no lines
    Dots,
}

impl GraphMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GraphMode::Lines => "lines",
            GraphMode::Dots => "dots",
        }
    }
}

impl FromStr for GraphMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "lines" => Ok(GraphMode::Lines),
            "dots" => Ok(GraphMode::Dots),
            other => Err(ConfigError::UnknownMode { value: other.to_string() }),
        }
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grid with a chosen coordinate origin and a marker at that origin.
///
/// Graph space: one unit per cell, x to the right, y upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    grid: Grid,
    mode: GraphMode,
    anchor: OriginAnchor,
    origin: Point,
    lattice_rows: u32,
    lattice_cols: u32,
    line_width: f64,
    layer: i32,
}

impl Graph {
    pub fn new(
        rows: u32,
        cols: u32,
        color: impl Into<Color>,
        anchor: OriginAnchor,
        mode: GraphMode,
        surface: &impl Surface,
    ) -> Result<Self> {
        let grid = Grid::new(rows, cols, color, surface)?;
        let (lattice_rows, lattice_cols) =
            lattice_size(rows, cols).ok_or(ConfigError::LatticeTooLarge { rows, cols })?;
        let origin = anchor.resolve(&grid);
        debug!(%anchor, %mode, %origin, "graph origin");

        Ok(Self {
            grid,
            mode,
            anchor,
            origin,
            lattice_rows,
            lattice_cols,
            line_width: defaults::GRID_LINE_WIDTH,
            layer: defaults::GRID_LAYER,
        })
    }

    /// Like [`Graph::new`], with the anchor and mode given by name
    /// (`"bottom_left"`, `"dots"`, ...). Unknown names are rejected before
    /// anything is computed.
    pub fn from_names(
        rows: u32,
        cols: u32,
        color: impl Into<Color>,
        origin: &str,
        mode: &str,
        surface: &impl Surface,
    ) -> Result<Self> {
        let anchor: OriginAnchor = origin.parse()?;
        let mode: GraphMode = mode.parse()?;
        Self::new(rows, cols, color, anchor, mode, surface)
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

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    pub fn anchor(&self) -> OriginAnchor {
        self.anchor
    }

    /// Surface position of the graph origin
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Map a graph-space coordinate to the surface
    pub fn to_surface(&self, x: f64, y: f64) -> Point {
        self.origin + dvec2(x * self.grid.box_width(), -y * self.grid.box_height())
    }

    fn lattice_lines(&self) -> Vec<Primitive> {
        let g = &self.grid;
        g.horizontal_lines(self.lattice_rows, self.line_width, self.layer)
            .chain(g.vertical_lines(self.lattice_cols, self.line_width, self.layer))
            .map(Primitive::Line)
            .collect()
    }

    fn lattice_dots(&self) -> Vec<Primitive> {
        let g = &self.grid;
        let mut dots = Vec::new();
        for j in 0..self.lattice_rows {
            for i in 0..self.lattice_cols {
                let at = Point::new(f64::from(i) * g.box_width(), f64::from(j) * g.box_height());
                dots.push(Primitive::Square(Square::centered(
                    at,
                    defaults::DOT_SIZE,
                    g.color().clone(),
                    self.layer,
                )));
            }
        }
        dots
    }

    pub fn origin_marker(&self) -> Circle {
        Circle {
            center: self.origin,
            radius: defaults::ORIGIN_MARKER_RADIUS,
            color: Color::named(defaults::ORIGIN_MARKER_ACCENT),
            layer: self.layer + 1,
        }
    }
}

/// Lattice lines per axis, one extra past each grid line family. None when
/// the counts or the dot total do not fit.
fn lattice_size(rows: u32, cols: u32) -> Option<(u32, u32)> {
    let lattice_rows = rows.checked_add(2)?;
    let lattice_cols = cols.checked_add(2)?;
    let dots = usize::try_from(lattice_rows)
        .ok()?
        .checked_mul(usize::try_from(lattice_cols).ok()?);
    dots.map(|_| (lattice_rows, lattice_cols))
}

impl Shape for Graph {
    fn primitives(&self) -> Vec<Primitive> {
        let mut prims = match self.mode {
            GraphMode::Lines => self.lattice_lines(),
            GraphMode::Dots => self.lattice_dots(),
        };
        prims.push(Primitive::Circle(self.origin_marker()));
        prims
    }
}
