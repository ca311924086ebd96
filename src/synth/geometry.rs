//! Geometry helpers: polylines, Catmull-Rom smoothing, polar coordinates and
//! pie/donut slice outlines.

use glam::dvec2;

use crate::defaults;
use crate::scene::PathData;
use crate::types::{Degrees, Point};

/// Point at `angle` (clockwise from 12 o'clock) on a circle around `center`.
pub fn polar_to_cartesian(center: Point, r: f64, angle: Degrees) -> Point {
    let rad = angle.to_math_radians();
    center + dvec2(rad.cos(), rad.sin()) * r
}

/// Straight segments through every point.
pub fn linear_path(points: &[Point]) -> PathData {
    let Some((first, rest)) = points.split_first() else {
        return PathData::new();
    };
    rest.iter().fold(PathData::new().m(*first), |d, p| d.l(*p))
}

/// Catmull-Rom spline through `points`, emitted as cubic bezier segments.
///
/// Control points come from each segment's neighbours scaled by
/// [`defaults::CONTROL_FACTOR`];
/// at the ends the missing neighbour is the endpoint itself. Control points
/// are clamped into their segment's bounding box, so the curve never leaves
/// the y range of the data and never doubles back in x.
pub fn smooth_path(points: &[Point]) -> PathData {
    match points.len() {
        0 | 1 => return PathData::new(),
        2 => return linear_path(points),
        _ => {}
    }

    let k = defaults::CONTROL_FACTOR;
    let last = points.len() - 1;
    let mut d = PathData::new().m(points[0]);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        let lo = p1.min(p2);
        let hi = p1.max(p2);
        let c1 = (p1 + (p2 - p0) * k).clamp(lo, hi);
        let c2 = (p2 - (p3 - p1) * k).clamp(lo, hi);
        d = d.c(c1, c2, p2);
    }
    d
}

/// Close a line path down to `baseline` and back to the first point's x.
pub fn close_to_baseline(line: PathData, points: &[Point], baseline: f64) -> PathData {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => line
            .l(dvec2(last.x, baseline))
            .l(dvec2(first.x, baseline))
            .z(),
        _ => line,
    }
}

/// Angular extent of one pie or donut slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAngles {
    pub start: Degrees,
    pub sweep: Degrees,
}

impl SliceAngles {
    pub fn end(&self) -> Degrees {
        self.start + self.sweep
    }

    /// End angle used for drawing: a full circle is cut just short of 360
    /// degrees because an arc whose endpoints coincide draws nothing.
    pub fn drawn_end(&self) -> Degrees {
        self.start + self.sweep.min(Degrees(defaults::MAX_SWEEP))
    }

    pub fn mid(&self) -> Degrees {
        self.start + self.sweep / 2.0
    }

    pub fn large_arc(&self) -> bool {
        self.sweep.raw() > 180.0
    }
}

/// Sweep angles proportional to each value's share of the total, accumulated
/// clockwise from 12 o'clock. Negative values count as 0; a zero total
/// gives every slice a zero sweep.
pub fn slice_angles(values: &[f64]) -> Vec<SliceAngles> {
    let clean: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();

    let mut start = Degrees::ZERO;
    clean
        .iter()
        .map(|v| {
            let sweep = if total > 0.0 {
                Degrees(v / total * 360.0)
            } else {
                Degrees::ZERO
            };
            let slice = SliceAngles { start, sweep };
            start += sweep;
            slice
        })
        .collect()
}

/// Outline of a slice. `inner` turns the wedge into a ring segment.
pub fn slice_path(center: Point, r: f64, inner: Option<f64>, slice: &SliceAngles) -> PathData {
    let end = slice.drawn_end();
    let large = slice.large_arc();
    let outer_start = polar_to_cartesian(center, r, slice.start);
    let outer_end = polar_to_cartesian(center, r, end);

    match inner {
        Some(ir) => PathData::new()
            .m(outer_start)
            .a(r, large, true, outer_end)
            .l(polar_to_cartesian(center, ir, end))
            .a(ir, large, false, polar_to_cartesian(center, ir, slice.start))
            .z(),
        None => PathData::new()
            .m(center)
            .l(outer_start)
            .a(r, large, true, outer_end)
            .z(),
    }
}
