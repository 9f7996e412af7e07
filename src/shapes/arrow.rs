use super::Shape;
use crate::errors::{GeometryError, Result};
use crate::geometry::{arrowhead, direction};
use crate::log::debug;
use crate::render::defaults;
use crate::render::{LineSegment, Primitive, Triangle};
use crate::types::{Color, Point, UnitVec};

/// A straight shaft with a triangular head at the finish point.
///
/// The head is always painted in [`defaults::ARROWHEAD_ACCENT`], whatever the
/// shaft color.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    origin: Point,
    finish: Point,
    color: Color,
    line_width: f64,
    layer: i32,
    arrowhead_length: f64,
    direction: UnitVec,
    shaft_length: f64,
}

impl Arrow {
    /// Fails when the endpoints coincide (no direction) or are not finite.
    pub fn new(origin: Point, finish: Point, color: impl Into<Color>, line_width: f64, layer: i32) -> Result<Self> {
        if !origin.is_finite() || !finish.is_finite() {
            return Err(GeometryError::NonFinite { what: "arrow endpoint" }.into());
        }
        if !line_width.is_finite() {
            return Err(GeometryError::NonFinite { what: "arrow line width" }.into());
        }
        if origin == finish {
            return Err(GeometryError::CoincidentEndpoints {
                x: origin.x,
                y: origin.y,
            }
            .into());
        }
        // distinct finite endpoints can still be further apart than f64 can hold
        let direction = direction(origin, finish).ok_or(GeometryError::NonFinite { what: "arrow direction" })?;
        let shaft_length = origin.distance(finish);
        debug!(%origin, %finish, dx = direction.dx(), dy = direction.dy(), shaft_length, "arrow");

        Ok(Self {
            origin,
            finish,
            color: color.into(),
            line_width,
            layer,
            arrowhead_length: defaults::ARROWHEAD_LENGTH,
            direction,
            shaft_length,
        })
    }

    /// Replace the default arrowhead length
    pub fn with_arrowhead_length(mut self, length: f64) -> Result<Self> {
        if !length.is_finite() {
            return Err(GeometryError::NonFinite { what: "arrowhead length" }.into());
        }
        self.arrowhead_length = length;
        Ok(self)
    }

    pub(crate) fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub(crate) fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn arrowhead_length(&self) -> f64 {
        self.arrowhead_length
    }

    /// Unit vector from origin to finish
    pub fn direction(&self) -> UnitVec {
        self.direction
    }

    pub fn shaft_length(&self) -> f64 {
        self.shaft_length
    }

    pub fn shaft(&self) -> LineSegment {
        LineSegment {
            start: self.origin,
            end: self.finish,
            width: self.line_width,
            color: self.color.clone(),
            layer: self.layer,
        }
    }

    pub fn head(&self) -> Triangle {
        let [tip, left, right] = arrowhead(self.finish, self.direction, self.line_width, self.arrowhead_length);
        Triangle {
            a: tip,
            b: left,
            c: right,
            color: Color::named(defaults::ARROWHEAD_ACCENT),
            layer: self.layer,
        }
    }
}

impl Shape for Arrow {
    fn primitives(&self) -> Vec<Primitive> {
        vec![Primitive::Line(self.shaft()), Primitive::Triangle(self.head())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_unit_length() {
        let cases = [
            (Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            (Point::new(10.0, 10.0), Point::new(-7.5, 2.25)),
            (Point::new(1e-3, 0.0), Point::new(0.0, 1e-3)),
            (Point::new(-500.0, 20.0), Point::new(900.0, -1300.0)),
        ];
        for (origin, finish) in cases {
            let arrow = Arrow::new(origin, finish, "black", 2.0, 0).unwrap();
            assert!((arrow.direction().length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn coincident_endpoints_are_degenerate() {
        let p = Point::new(5.0, 5.0);
        let err = Arrow::new(p, p, "black", 2.0, 0).unwrap_err();
        assert!(err.is_degenerate_geometry());
        match err {
            crate::Error::Geometry(GeometryError::CoincidentEndpoints { x, y }) => {
                assert_eq!((x, y), (5.0, 5.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_endpoints_are_rejected() {
        let err = Arrow::new(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0), "black", 2.0, 0).unwrap_err();
        assert!(err.is_degenerate_geometry());
    }

    #[test]
    fn extreme_but_distinct_endpoints_have_a_direction() {
        let tiny = Arrow::new(Point::new(0.0, 0.0), Point::new(1e-200, 0.0), "black", 1.0, 0).unwrap();
        assert_eq!(tiny.direction(), UnitVec::EAST);
        assert_eq!(tiny.shaft_length(), 1e-200);

        let huge = Arrow::new(Point::new(-1e200, 0.0), Point::new(1e200, 0.0), "black", 1.0, 0).unwrap();
        assert_eq!(huge.direction(), UnitVec::EAST);
        assert_eq!(huge.shaft_length(), 2e200);
    }

    #[test]
    fn unrepresentable_span_is_not_coincident() {
        let err = Arrow::new(Point::new(-f64::MAX, 0.0), Point::new(f64::MAX, 0.0), "black", 1.0, 0).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Geometry(GeometryError::NonFinite { what: "arrow direction" })
        ));
    }

    #[test]
    fn non_finite_arrowhead_length_is_rejected() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), "black", 1.0, 0).unwrap();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = arrow.clone().with_arrowhead_length(bad).unwrap_err();
            assert!(err.is_degenerate_geometry());
        }
    }

    #[test]
    fn head_geometry() {
        let arrow = Arrow::new(Point::new(0.0, 50.0), Point::new(100.0, 50.0), "blue", 2.0, 3).unwrap();
        assert_eq!(arrow.shaft_length(), 100.0);

        let head = arrow.head();
        assert_eq!(head.a, Point::new(102.0, 50.0));
        assert_eq!(head.b, Point::new(90.0, 60.0));
        assert_eq!(head.c, Point::new(90.0, 40.0));
        assert_eq!(head.color, Color::named("red"));
        assert_eq!(head.layer, 3);

        let shaft = arrow.shaft();
        assert_eq!(shaft.color, Color::named("blue"));
        assert_eq!(shaft.width, 2.0);
    }

    #[test]
    fn custom_arrowhead_length() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0), "blue", 1.0, 0)
            .unwrap()
            .with_arrowhead_length(4.0)
            .unwrap();
        let head = arrow.head();
        // pointing down (+y): left = finish + 4·(-0 - 1, -1 + 0)
        assert_eq!(head.b, Point::new(-4.0, 6.0));
        assert_eq!(head.c, Point::new(4.0, 6.0));
        assert_eq!(head.a, Point::new(0.0, 11.0));
    }

    #[test]
    fn shaft_then_head() {
        let arrow = Arrow::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), "black", 1.0, 0).unwrap();
        let prims = arrow.primitives();
        assert_eq!(prims.len(), 2);
        assert!(prims[0].as_line().is_some());
        assert!(prims[1].as_triangle().is_some());
    }
}
