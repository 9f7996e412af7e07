//! Geometry functions: rotation, arrowheads, padded outlines and clipping
//!
//! Everything here is pure arithmetic over `glam::DVec2`; shapes call into it
//! and turn the results into primitives.

use glam::{DVec2, dvec2};

use crate::types::{Angle, Point, UnitVec};

/// Rotate a local-space offset by `angle` about the origin, then translate it
/// to `center`.
///
/// x' = x·cos θ − y·sin θ
/// y' = x·sin θ + y·cos θ
pub fn rotate_about(offset: DVec2, center: Point, angle: Angle) -> Point {
    let (sin, cos) = angle.to_radians().sin_cos();
    let rotated = dvec2(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos);
    center + rotated
}

/// Unit direction from `from` to `to`, or None when the points coincide.
pub fn direction(from: Point, to: Point) -> Option<UnitVec> {
    let delta = to - from;
    UnitVec::normalized(delta.x, delta.y)
}

/// Corners of a fixed-angle arrowhead at `finish`.
///
/// Returns `[tip, left, right]`. The tip is pushed `stroke_width` past the
/// finish so it covers the square end of a thick shaft; the base corners are
/// the reversed direction rotated by ±45° and scaled by `length` (the ±90°
/// perpendicular added to the reversed direction, hence a √2 factor).
pub fn arrowhead(finish: Point, dir: UnitVec, stroke_width: f64, length: f64) -> [Point; 3] {
    let d: DVec2 = dir.into();
    let back = -d;
    let tip = finish + d * stroke_width;
    let left = finish + (back + d.perp()) * length;
    let right = finish + (back - d.perp()) * length;
    [tip, left, right]
}

/// Local-space outline of a rectangle drawn as independent thick segments.
///
/// Each edge runs from a corner to the next corner pushed half a stroke
/// further along the edge, so the stroke ends overlap instead of leaving a
/// notch. Order: top-left, top-right+pad, top-right, bottom-right+pad,
/// bottom-right, bottom-left+pad, bottom-left, top-left+pad.
pub fn padded_outline(width: f64, height: f64, stroke_width: f64) -> [DVec2; 8] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hwl = stroke_width / 2.0;
    [
        dvec2(-hw, -hh),
        dvec2(hw + hwl, -hh),
        dvec2(hw, -hh),
        dvec2(hw, hh + hwl),
        dvec2(hw, hh),
        dvec2(-hw - hwl, hh),
        dvec2(-hw, hh),
        dvec2(-hw, -hh - hwl),
    ]
}

/// Clip the infinite line through `through` with direction `dir` to the
/// rectangle `[0, width] × [0, height]` (Liang–Barsky with an unbounded
/// parameter range).
///
/// Returns the entry and exit points ordered along `dir`, or None when the
/// line misses the rectangle or only grazes a single corner.
pub fn clip_line_to_rect(through: Point, dir: DVec2, width: f64, height: f64) -> Option<(Point, Point)> {
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    // (p, q) pairs for the four boundaries: left, right, top, bottom
    let edges = [
        (-dir.x, through.x),
        (dir.x, width - through.x),
        (-dir.y, through.y),
        (dir.y, height - through.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                // parallel to this edge and outside it
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_min = t_min.max(t);
        } else {
            t_max = t_max.min(t);
        }
    }

    if !t_min.is_finite() || !t_max.is_finite() || t_min >= t_max {
        return None;
    }

    Some((through + dir * t_min, through + dir * t_max))
}

/// Evenly spaced positions `0, step, 2·step, …` (`count` of them)
pub fn spaced(count: u32, step: f64) -> impl Iterator<Item = f64> {
    (0..count).map(move |k| f64::from(k) * step)
}
