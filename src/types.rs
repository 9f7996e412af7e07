//! Core value types shared by every shape: points, angles, colors.
//!
//! Internal vector arithmetic goes through `glam::DVec2`; these types are the
//! public vocabulary handed to renderers.

use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a value is finite and strictly positive.
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// A point in surface space. Y grows downward, as on a window.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Both coordinates are finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Approximate equality, for comparing computed coordinates
    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Translate a point by a displacement
impl Add<DVec2> for Point {
    type Output = Point;
    fn add(self, rhs: DVec2) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

/// Subtract two points to get the displacement between them
impl Sub<Point> for Point {
    type Output = DVec2;
    fn sub(self, rhs: Point) -> DVec2 {
        DVec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit direction vector (dimensionless, normalized)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct UnitVec {
    dx: f64,
    dy: f64,
}

impl UnitVec {
    pub const EAST: UnitVec = UnitVec { dx: 1.0, dy: 0.0 };
    pub const SOUTH: UnitVec = UnitVec { dx: 0.0, dy: 1.0 };

    /// Create a normalized unit vector from components.
    /// Returns None if the input has zero length or is not finite.
    ///
    /// Components are scaled by the larger magnitude first, so neither tiny
    /// nor huge inputs underflow or overflow on the way to unit length.
    pub fn normalized(dx: f64, dy: f64) -> Option<Self> {
        if !(dx.is_finite() && dy.is_finite()) {
            return None;
        }
        let scale = dx.abs().max(dy.abs());
        if scale == 0.0 {
            return None;
        }
        let (sx, sy) = (dx / scale, dy / scale);
        let len = sx.hypot(sy);
        Some(UnitVec { dx: sx / len, dy: sy / len })
    }

    /// Get dx component
    pub fn dx(self) -> f64 { self.dx }

    /// Get dy component
    pub fn dy(self) -> f64 { self.dy }

    /// Euclidean length; 1 up to rounding
    pub fn length(self) -> f64 {
        DVec2::from(self).length()
    }
}

impl From<UnitVec> for DVec2 {
    fn from(u: UnitVec) -> Self {
        DVec2::new(u.dx, u.dy)
    }
}

/// Rotation angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn to_radians(self) -> f64 {
        self.0 * std::f64::consts::PI / 180.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Paint color for a primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}
