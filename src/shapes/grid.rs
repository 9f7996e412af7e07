use super::Shape;
use crate::errors::{ConfigError, Result};
use crate::geometry::spaced;
use crate::log::debug;
use crate::render::defaults;
use crate::render::{LineSegment, Primitive};
use crate::surface::{Surface, validate};
use crate::types::{Color, Point};

/// Evenly sized cells covering a surface.
///
/// Horizontal lines take the caller's color; vertical lines always use
/// [`defaults::GRID_ACCENT`] so the two families are told apart at a glance.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    color: Color,
    surface_width: f64,
    surface_height: f64,
    box_width: f64,
    box_height: f64,
}

impl Grid {
    /// Cell sizes use whole-unit division; any remainder is left uncovered.
    pub fn new(rows: u32, cols: u32, color: impl Into<Color>, surface: &impl Surface) -> Result<Self> {
        if rows == 0 {
            return Err(ConfigError::ZeroRows.into());
        }
        if cols == 0 {
            return Err(ConfigError::ZeroCols.into());
        }
        let (surface_width, surface_height) = validate(surface)?;

        let box_width = (surface_width / f64::from(cols)).floor();
        let box_height = (surface_height / f64::from(rows)).floor();
        debug!(rows, cols, box_width, box_height, "grid cells");

        Ok(Self {
            rows,
            cols,
            color: color.into(),
            surface_width,
            surface_height,
            box_width,
            box_height,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn box_width(&self) -> f64 {
        self.box_width
    }

    pub fn box_height(&self) -> f64 {
        self.box_height
    }

    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    pub fn surface_height(&self) -> f64 {
        self.surface_height
    }

    /// `count` full-width lines, `box_height` apart, starting at the top edge
    pub(crate) fn horizontal_lines(&self, count: u32, width: f64, layer: i32) -> impl Iterator<Item = LineSegment> + '_ {
        spaced(count, self.box_height).map(move |y| LineSegment {
            start: Point::new(0.0, y),
            end: Point::new(self.surface_width, y),
            width,
            color: self.color.clone(),
            layer,
        })
    }

    /// `count` full-height lines, `box_width` apart, starting at the left edge
    pub(crate) fn vertical_lines(&self, count: u32, width: f64, layer: i32) -> impl Iterator<Item = LineSegment> + '_ {
        spaced(count, self.box_width).map(move |x| LineSegment {
            start: Point::new(x, 0.0),
            end: Point::new(x, self.surface_height),
            width,
            color: Color::named(defaults::GRID_ACCENT),
            layer,
        })
    }
}

impl Shape for Grid {
    fn primitives(&self) -> Vec<Primitive> {
        let (w, z) = (defaults::GRID_LINE_WIDTH, defaults::GRID_LAYER);
        self.horizontal_lines(self.rows, w, z)
            .chain(self.vertical_lines(self.cols, w, z))
            .map(Primitive::Line)
            .collect()
    }
}
